use crate::args::HumidorCommand;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::SaveAction;
use anyhow::Result;
use humidor_runtime::HumidorHub;

pub fn handle(hub: &HumidorHub, command: HumidorCommand, ctx: &HandlerContext) -> Result<()> {
    let humidors = hub.humidors();

    match command {
        HumidorCommand::Add { name, fields } => {
            let humidor = humidors.add(fields.into_fields(Some(name)))?;
            ctx.render(presenters::present_humidor_saved(humidor, SaveAction::Created))
        }
        HumidorCommand::Edit {
            humidor,
            name,
            fields,
        } => {
            let updated = humidors.update(&humidor, fields.into_fields(name))?;
            ctx.render(presenters::present_humidor_saved(updated, SaveAction::Updated))
        }
        HumidorCommand::List => ctx.render(presenters::present_humidor_list(humidors.list()?)),
        HumidorCommand::Show { humidor } => {
            ctx.render(presenters::present_humidor_detail(humidors.show(&humidor)?))
        }
        HumidorCommand::Remove { humidor, force } => {
            let removed = humidors.remove(&humidor, force)?;
            ctx.render(presenters::present_humidor_removed(removed))
        }
    }
}
