use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    BrowseViewModel, BucketRowViewModel, CommandResultViewModel, DashboardViewModel, Guidance,
    PanelBodyViewModel, PanelViewModel, StatusBadge, SummaryViewModel,
};
use humidor_engine::{Bucket, CollectionSummary, Panel, PanelContent, PanelView};
use humidor_runtime::BrowseResult;

use super::cigar::{cigar_row, filter_view};
use super::humidor::humidor_row;

fn bucket_rows(buckets: &[Bucket]) -> Vec<BucketRowViewModel> {
    let total: u64 = buckets.iter().map(|b| b.quantity).sum();
    buckets
        .iter()
        .map(|bucket| BucketRowViewModel {
            label: bucket.label.clone(),
            quantity: bucket.quantity,
            share_percent: if total == 0 {
                0.0
            } else {
                bucket.quantity as f64 * 100.0 / total as f64
            },
        })
        .collect()
}

/// The summary panel always has content, so it counts as empty when it
/// reports no humidors and no cigars.
fn shows_nothing(view: &PanelView) -> bool {
    match &view.content {
        PanelContent::Summary(summary) => summary.humidor_count == 0 && summary.distinct_cigars == 0,
        _ => view.is_empty(),
    }
}

fn summary_view(summary: &CollectionSummary) -> SummaryViewModel {
    SummaryViewModel {
        total_cigars: summary.total_cigars,
        distinct_cigars: summary.distinct_cigars,
        estimated_value: summary.estimated_value,
        puro_count: summary.puro_count,
        humidor_count: summary.humidor_count,
        journal_count: summary.journal_count,
        average_experience: summary.average_experience,
    }
}

pub fn panel_view(view: &PanelView) -> PanelViewModel {
    let body = match &view.content {
        PanelContent::Summary(summary) => PanelBodyViewModel::Summary {
            summary: summary_view(summary),
        },
        PanelContent::Buckets(buckets) => PanelBodyViewModel::Buckets {
            rows: bucket_rows(buckets),
        },
        PanelContent::Humidors(fills) => PanelBodyViewModel::Humidors {
            humidors: fills.iter().map(humidor_row).collect(),
        },
    };

    PanelViewModel {
        key: view.panel.key().to_string(),
        title: view.title.clone(),
        body,
        empty_message: view.empty_message.map(str::to_string),
    }
}

pub fn present_dashboard(panels: Vec<PanelView>) -> CommandResultViewModel<DashboardViewModel> {
    // First row of the first list panel, to show how browsing works
    let browse_hint = panels
        .iter()
        .find_map(|p| p.buckets().first().map(|b| fmt::browse(&cli_panel_name(p.panel), &b.label)));
    let all_empty = panels.iter().all(shows_nothing);

    let result = CommandResultViewModel::new(DashboardViewModel {
        panels: panels.iter().map(panel_view).collect(),
    });

    if all_empty {
        return result
            .with_badge(StatusBadge::info("Your collection is empty"))
            .with_suggestion(Guidance::new("Create a humidor").with_command(cmd::HUMIDOR_ADD))
            .with_suggestion(Guidance::new("Or load an export").with_command(cmd::IMPORT));
    }

    match browse_hint {
        Some(command) => result.with_suggestion(Guidance::new("Open a row").with_command(command)),
        None => result,
    }
}

pub fn present_browse(
    panel: Panel,
    label: String,
    browse: BrowseResult,
) -> CommandResultViewModel<BrowseViewModel> {
    let content = BrowseViewModel {
        panel: panel.key().to_string(),
        label,
        filter: filter_view(&browse.state),
        cigars: browse.cigars.iter().map(cigar_row).collect(),
        total_quantity: browse.total_quantity,
    };

    let badge = if content.cigars.is_empty() {
        StatusBadge::info(format!("Nothing under '{}'", content.label))
    } else {
        StatusBadge::success(format!(
            "{}: {} on hand across {} record(s)",
            content.label,
            content.total_quantity,
            content.cigars.len()
        ))
    };

    CommandResultViewModel::new(content)
        .with_badge(badge)
        .with_suggestion(Guidance::new("Back to the dashboard").with_command(cmd::DASHBOARD))
}

/// Panel name as the `--panel` flag spells it.
fn cli_panel_name(panel: Panel) -> String {
    panel.key().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;
    use humidor_engine::dashboard::build;
    use humidor_engine::{CountryCatalog, DashboardSettings};
    use humidor_types::{Cigar, CigarId, HumidorId};

    fn panels(cigars: &[Cigar]) -> Vec<PanelView> {
        let settings = DashboardSettings::default();
        let catalog = CountryCatalog::default();
        settings
            .panels
            .iter()
            .map(|panel| build(*panel, cigars, &[], &[], &settings, &catalog))
            .collect()
    }

    #[test]
    fn test_empty_collection_gets_a_getting_started_badge() {
        let result = present_dashboard(panels(&[]));
        let badge = result.badge.as_ref().unwrap();
        assert_eq!(badge.level, StatusLevel::Info);
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_stocked_dashboard_suggests_browsing_the_first_row() {
        let mut cigar = Cigar::new(CigarId::new("c1"), HumidorId::new("h1"));
        cigar.brand = Some("Padron".to_string());
        cigar.quantity = 3;

        let result = present_dashboard(panels(&[cigar]));
        assert!(result.badge.is_none());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("humidor browse --panel top-brands --label \"Padron\"")
        );

        let brands = &result.content.panels[1];
        assert_eq!(brands.key, "top_brands");
        match &brands.body {
            PanelBodyViewModel::Buckets { rows } => {
                assert_eq!(rows[0].label, "Padron");
                assert_eq!(rows[0].share_percent, 100.0);
            }
            other => panic!("unexpected panel body: {:?}", other),
        }
    }
}
