use crate::args::JournalCommand;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;
use humidor_runtime::HumidorHub;

pub fn handle(hub: &HumidorHub, command: JournalCommand, ctx: &HandlerContext) -> Result<()> {
    let journal = hub.journal();

    match command {
        JournalCommand::Add {
            cigar,
            fields,
            from_stock,
        } => {
            let entry = journal.add(fields.into_entry(cigar, from_stock))?;
            ctx.render(presenters::present_journal_saved(entry, from_stock))
        }
        JournalCommand::List { limit, search } => {
            let entries = journal.list(limit, search.as_deref())?;
            ctx.render(presenters::present_journal_list(entries, search))
        }
        JournalCommand::Show { entry } => {
            ctx.render(presenters::present_journal_detail(journal.show(&entry)?))
        }
        JournalCommand::Remove { entry } => {
            ctx.render(presenters::present_journal_removed(journal.remove(&entry)?))
        }
        JournalCommand::Summary => {
            let summary = journal.summary()?;
            let favourite = match &summary.favourite {
                Some(id) => Some(journal.show(id.as_str())?),
                None => None,
            };
            ctx.render(presenters::present_journal_summary(summary, favourite))
        }
    }
}
