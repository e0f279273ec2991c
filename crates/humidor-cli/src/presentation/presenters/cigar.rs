use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CigarDetailViewModel, CigarListViewModel, CigarRemovedViewModel, CigarRowViewModel,
    CigarSavedViewModel, CommandResultViewModel, FilterViewModel, Guidance, PuroViewModel,
    QuantityViewModel, SaveAction, StatusBadge,
};
use humidor_engine::{ActiveFilter, FilterOrigin, FilterState, PuroVerdict};
use humidor_runtime::{CigarDetail, QuantityChange, SavedCigar};
use humidor_types::Cigar;

use super::journal::journal_row;

pub fn cigar_row(cigar: &Cigar) -> CigarRowViewModel {
    CigarRowViewModel {
        id: cigar.id.to_string(),
        id_short: cigar.id.short().to_string(),
        humidor_id: cigar.humidor_id.to_string(),
        brand: cigar.brand.clone(),
        name: cigar.name.clone(),
        display_name: cigar.display_name(),
        wrapper: cigar.wrapper.clone(),
        country: cigar.country.clone(),
        strength: cigar.strength.map(|s| s.label().to_string()),
        quantity: cigar.quantity,
        price: cigar.price,
        is_puro: cigar.is_puro,
        flavored: cigar.is_flavored(),
    }
}

pub fn filter_view(state: &FilterState) -> FilterViewModel {
    let value = match state.filter() {
        ActiveFilter::None => None,
        ActiveFilter::Search(text) | ActiveFilter::Brand(text) | ActiveFilter::Wrapper(text) => {
            Some(text.clone())
        }
        ActiveFilter::Strength(strength) => Some(strength.to_string()),
        ActiveFilter::Country(country) => Some(country.to_string()),
        ActiveFilter::Missing(attribute) => Some(attribute.label().to_string()),
    };
    let (origin, return_to) = match state.origin() {
        FilterOrigin::Local => ("local", None),
        FilterOrigin::Navigation { return_to } => ("navigation", Some(return_to.to_string())),
    };

    FilterViewModel {
        kind: state.filter().kind().to_string(),
        value,
        origin: origin.to_string(),
        return_to,
    }
}

fn puro_view(cigar: &Cigar, verdict: PuroVerdict, manual_override: bool) -> PuroViewModel {
    PuroViewModel {
        is_puro: cigar.is_puro,
        detected: verdict.is_puro,
        country: verdict.country.map(str::to_string),
        manual_override,
    }
}

pub fn present_cigar_list(
    state: FilterState,
    humidor: Option<String>,
    cigars: Vec<Cigar>,
) -> CommandResultViewModel<CigarListViewModel> {
    let content = CigarListViewModel {
        filter: filter_view(&state),
        humidor,
        total_quantity: cigars.iter().map(|c| u64::from(c.quantity)).sum(),
        cigars: cigars.iter().map(cigar_row).collect(),
    };

    let result = CommandResultViewModel::new(content);
    if !result.content.cigars.is_empty() {
        let label = format!(
            "{} cigar record(s), {} on hand",
            result.content.cigars.len(),
            result.content.total_quantity
        );
        return result.with_badge(StatusBadge::success(label));
    }

    if state.filter().is_active() {
        let label = format!(
            "No cigars match {} '{}'",
            result.content.filter.kind,
            result.content.filter.value.as_deref().unwrap_or_default()
        );
        result
            .with_badge(StatusBadge::info(label))
            .with_suggestion(Guidance::new("List everything").with_command(cmd::CIGAR_LIST))
    } else {
        result
            .with_badge(StatusBadge::info("No cigars yet"))
            .with_suggestion(Guidance::new("Add a cigar").with_command(cmd::CIGAR_ADD))
    }
}

pub fn present_cigar_detail(detail: CigarDetail) -> CommandResultViewModel<CigarDetailViewModel> {
    let cigar = &detail.cigar;
    let manual_override = cigar.is_puro != detail.verdict.is_puro;

    let content = CigarDetailViewModel {
        cigar: cigar_row(cigar),
        humidor_name: detail.humidor_name.clone(),
        shape: cigar.shape.clone(),
        size: cigar.size.clone(),
        binder: cigar.binder.clone(),
        filler: cigar.filler.clone(),
        flavor_notes: cigar.flavor_notes.clone(),
        stock_value: cigar.stock_value(),
        puro: puro_view(cigar, detail.verdict, manual_override),
        last_smoked: detail.entries.iter().map(|e| e.date_smoked).max(),
        entries: detail.entries.iter().map(journal_row).collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if cigar.quantity == 0 {
        result = result.with_badge(StatusBadge::warning("Out of stock"));
    } else {
        result = result.with_suggestion(
            Guidance::new("Smoked one? Log it").with_command(fmt::journal_add(cigar.id.short())),
        );
    }
    result
}

pub fn present_cigar_saved(
    saved: SavedCigar,
    action: SaveAction,
) -> CommandResultViewModel<CigarSavedViewModel> {
    let label = match action {
        SaveAction::Created => format!("Added {}", saved.cigar.display_name()),
        SaveAction::Updated => format!("Updated {}", saved.cigar.display_name()),
    };
    let show = fmt::cigar_show(saved.cigar.id.short());

    let content = CigarSavedViewModel {
        action,
        cigar: cigar_row(&saved.cigar),
        puro: puro_view(&saved.cigar, saved.verdict, saved.manual_override),
        puro_notice: saved.puro_notice.map(|notice| notice.country.to_string()),
    };

    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::success(label));
    if let Some(country) = result.content.puro_notice.clone() {
        result = result.with_suggestion(Guidance::new(format!(
            "Wrapper, binder and filler are all from {}: marked as a puro (pass --puro false to undo)",
            country
        )));
    }
    result.with_suggestion(Guidance::new("Details").with_command(show))
}

pub fn present_quantity(
    change: QuantityChange,
    display_name: String,
) -> CommandResultViewModel<QuantityViewModel> {
    let badge = if change.current == 0 {
        StatusBadge::warning(format!("{} is out of stock", display_name))
    } else {
        StatusBadge::success(format!("{} on hand: {}", display_name, change.current))
    };

    CommandResultViewModel::new(QuantityViewModel {
        id: change.cigar_id.to_string(),
        delta: change.delta(),
        previous: change.previous,
        current: change.current,
        display_name,
    })
    .with_badge(badge)
}

pub fn present_cigar_removed(cigar: Cigar) -> CommandResultViewModel<CigarRemovedViewModel> {
    let display_name = cigar.display_name();
    CommandResultViewModel::new(CigarRemovedViewModel {
        id: cigar.id.to_string(),
        display_name: display_name.clone(),
        quantity: cigar.quantity,
    })
    .with_badge(StatusBadge::success(format!("Removed {}", display_name)))
}
