use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, HumidorDetailViewModel, HumidorListViewModel,
    HumidorRemovedViewModel, HumidorRowViewModel, HumidorSavedViewModel, SaveAction, StatusBadge,
};
use humidor_engine::HumidorFill;
use humidor_runtime::{HumidorDetail, RemovedHumidor};
use humidor_types::Humidor;

use super::cigar::cigar_row;

pub fn humidor_row(fill: &HumidorFill) -> HumidorRowViewModel {
    HumidorRowViewModel {
        id: fill.humidor_id.to_string(),
        id_short: fill.humidor_id.short().to_string(),
        name: fill.name.clone(),
        quantity: fill.quantity,
        capacity: fill.capacity,
        fill_percent: fill.fill_percent,
        temp: fill.temp,
        humidity: fill.humidity,
        sensor_device_id: fill.sensor_device_id.clone(),
    }
}

pub fn present_humidor_saved(
    humidor: Humidor,
    action: SaveAction,
) -> CommandResultViewModel<HumidorSavedViewModel> {
    let label = match action {
        SaveAction::Created => format!("Humidor '{}' created", humidor.name),
        SaveAction::Updated => format!("Humidor '{}' updated", humidor.name),
    };

    let show = fmt::humidor_show(humidor.id.short());
    let content = HumidorSavedViewModel {
        action,
        id: humidor.id.to_string(),
        capacity: humidor.capacity(),
        name: humidor.name,
        size: humidor.size,
        temp: humidor.temp,
        humidity: humidor.humidity,
        sensor_device_id: humidor.sensor_device_id,
    };

    let result = CommandResultViewModel::new(content).with_badge(StatusBadge::success(label));
    match action {
        SaveAction::Created => result
            .with_suggestion(Guidance::new("Stock it with cigars").with_command(cmd::CIGAR_ADD)),
        SaveAction::Updated => result.with_suggestion(Guidance::new("Review it").with_command(show)),
    }
}

pub fn present_humidor_list(fills: Vec<HumidorFill>) -> CommandResultViewModel<HumidorListViewModel> {
    let content = HumidorListViewModel {
        total_quantity: fills.iter().map(|f| f.quantity).sum(),
        humidors: fills.iter().map(humidor_row).collect(),
    };

    if content.humidors.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No humidors yet"))
            .with_suggestion(Guidance::new("Create your first humidor").with_command(cmd::HUMIDOR_ADD));
    }

    let overfilled: Vec<&str> = content
        .humidors
        .iter()
        .filter(|h| h.fill_percent.is_some_and(|p| p > 100.0))
        .map(|h| h.name.as_str())
        .collect();
    let badge = if overfilled.is_empty() {
        StatusBadge::success(format!("{} humidor(s)", content.humidors.len()))
    } else {
        StatusBadge::warning(format!("Over capacity: {}", overfilled.join(", ")))
    };

    CommandResultViewModel::new(content).with_badge(badge)
}

pub fn present_humidor_detail(detail: HumidorDetail) -> CommandResultViewModel<HumidorDetailViewModel> {
    let content = HumidorDetailViewModel {
        humidor: humidor_row(&detail.fill),
        size: detail.humidor.size,
        cigars: detail.cigars.iter().map(cigar_row).collect(),
    };

    let mut result = CommandResultViewModel::new(content);
    if result.content.humidor.fill_percent.is_some_and(|p| p > 100.0) {
        result = result.with_badge(StatusBadge::warning("Over capacity"));
    }
    if result.content.cigars.is_empty() {
        result = result
            .with_suggestion(Guidance::new("This humidor is empty").with_command(cmd::CIGAR_ADD));
    } else if result.content.humidor.quantity > 0 {
        let key = result.content.humidor.id_short.clone();
        result = result.with_suggestion(
            Guidance::new("Removing it also needs --force").with_command(fmt::humidor_remove_force(&key)),
        );
    }
    result
}

pub fn present_humidor_removed(removed: RemovedHumidor) -> CommandResultViewModel<HumidorRemovedViewModel> {
    let label = if removed.cigars_removed > 0 {
        format!(
            "Removed '{}' and {} cigar record(s)",
            removed.humidor.name, removed.cigars_removed
        )
    } else {
        format!("Removed '{}'", removed.humidor.name)
    };

    CommandResultViewModel::new(HumidorRemovedViewModel {
        id: removed.humidor.id.to_string(),
        name: removed.humidor.name,
        cigars_removed: removed.cigars_removed,
    })
    .with_badge(StatusBadge::success(label))
    .with_suggestion(Guidance::new("Remaining humidors").with_command(cmd::HUMIDOR_LIST))
}
