use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, JournalDetailViewModel, JournalListViewModel,
    JournalRemovedViewModel, JournalRowViewModel, JournalSavedViewModel, JournalSummaryViewModel,
    StatusBadge,
};
use humidor_engine::JournalSummary;
use humidor_types::JournalEntry;

pub fn journal_row(entry: &JournalEntry) -> JournalRowViewModel {
    JournalRowViewModel {
        id: entry.id.to_string(),
        id_short: entry.id.short().to_string(),
        cigar_id: entry.cigar_id.to_string(),
        title: entry.title(),
        date_smoked: entry.date_smoked,
        experience_rating: entry.experience_rating.value(),
        location: entry.location.clone(),
        pairing: entry.pairing.clone(),
        burn_time_minutes: entry.burn_time_minutes,
    }
}

pub fn present_journal_saved(
    entry: JournalEntry,
    from_stock: bool,
) -> CommandResultViewModel<JournalSavedViewModel> {
    let label = if from_stock {
        format!("Logged {} (one taken from stock)", entry.title())
    } else {
        format!("Logged {}", entry.title())
    };

    CommandResultViewModel::new(JournalSavedViewModel {
        entry: journal_row(&entry),
        from_stock,
    })
    .with_badge(StatusBadge::success(label))
    .with_suggestion(Guidance::new("Recent sessions").with_command(cmd::JOURNAL_LIST))
}

pub fn present_journal_list(
    entries: Vec<JournalEntry>,
    search: Option<String>,
) -> CommandResultViewModel<JournalListViewModel> {
    let content = JournalListViewModel {
        search,
        entries: entries.iter().map(journal_row).collect(),
    };

    let result = CommandResultViewModel::new(content);
    match (result.content.entries.len(), result.content.search.clone()) {
        (0, Some(query)) => {
            result.with_badge(StatusBadge::info(format!("No entries mention '{}'", query)))
        }
        (0, None) => result
            .with_badge(StatusBadge::info("The journal is empty"))
            .with_suggestion(
                Guidance::new("Log a smoke").with_command(fmt::journal_add("<cigar>")),
            ),
        (count, _) => result.with_badge(StatusBadge::success(format!("{} session(s)", count))),
    }
}

pub fn present_journal_detail(entry: JournalEntry) -> CommandResultViewModel<JournalDetailViewModel> {
    CommandResultViewModel::new(JournalDetailViewModel {
        entry: journal_row(&entry),
        draw_rating: entry.draw_rating.value(),
        burn_rating: entry.burn_rating.value(),
        ash_rating: entry.ash_rating.value(),
        notes: entry.notes,
        first_third_notes: entry.first_third_notes,
        second_third_notes: entry.second_third_notes,
        final_third_notes: entry.final_third_notes,
    })
}

pub fn present_journal_removed(entry: JournalEntry) -> CommandResultViewModel<JournalRemovedViewModel> {
    let title = entry.title();
    CommandResultViewModel::new(JournalRemovedViewModel {
        id: entry.id.to_string(),
        title: title.clone(),
    })
    .with_badge(StatusBadge::success(format!("Removed journal entry for {}", title)))
}

pub fn present_journal_summary(
    summary: JournalSummary,
    favourite: Option<JournalEntry>,
) -> CommandResultViewModel<JournalSummaryViewModel> {
    let content = JournalSummaryViewModel {
        entries: summary.entries,
        average_experience: summary.average_experience,
        favourite: favourite.as_ref().map(journal_row),
        last_smoked: summary.last_smoked,
        total_burn_minutes: summary.total_burn_minutes,
    };

    let result = CommandResultViewModel::new(content);
    if result.content.entries == 0 {
        result
            .with_badge(StatusBadge::info("The journal is empty"))
            .with_suggestion(Guidance::new("Log a smoke").with_command(fmt::journal_add("<cigar>")))
    } else {
        result
    }
}
