use std::fmt;

use super::cigar::{describe_filter, write_cigar_table};
use super::humidor::fill_cell;
use crate::presentation::Palette;
use crate::presentation::formatters::number::{fill_bar, format_percent, format_price};
use crate::presentation::formatters::text::truncate;
use crate::presentation::view_models::{
    BrowseViewModel, CreateView, DashboardViewModel, PanelBodyViewModel, PanelViewModel,
    SummaryViewModel,
};

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(DashboardView {
            data: self,
            palette,
        })
    }
}

struct DashboardView<'a> {
    data: &'a DashboardViewModel,
    palette: Palette,
}

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, panel) in self.data.panels.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_panel(f, panel, self.palette)?;
        }
        Ok(())
    }
}

fn write_panel(f: &mut fmt::Formatter<'_>, panel: &PanelViewModel, palette: Palette) -> fmt::Result {
    writeln!(f, "{}", palette.heading(&panel.title))?;

    if let Some(message) = &panel.empty_message {
        return writeln!(f, "  {}", palette.muted(message));
    }

    match &panel.body {
        PanelBodyViewModel::Summary { summary } => write_summary(f, summary),
        PanelBodyViewModel::Buckets { rows } => {
            for row in rows {
                writeln!(
                    f,
                    "  {:<28} {:>5}  {} {}",
                    truncate(&row.label, 28),
                    row.quantity,
                    palette.accent(fill_bar(row.share_percent)),
                    palette.muted(format_percent(row.share_percent.round()))
                )?;
            }
            Ok(())
        }
        PanelBodyViewModel::Humidors { humidors } => {
            for row in humidors {
                writeln!(
                    f,
                    "  {:<24} {}",
                    truncate(&row.name, 24),
                    fill_cell(row, palette)
                )?;
            }
            Ok(())
        }
    }
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &SummaryViewModel) -> fmt::Result {
    writeln!(f, "  Cigars on hand:  {}", summary.total_cigars)?;
    writeln!(f, "  Distinct cigars: {}", summary.distinct_cigars)?;
    writeln!(f, "  Puros:           {}", summary.puro_count)?;
    writeln!(f, "  Estimated value: {}", format_price(summary.estimated_value))?;
    writeln!(f, "  Humidors:        {}", summary.humidor_count)?;
    writeln!(f, "  Journal entries: {}", summary.journal_count)?;
    if let Some(average) = summary.average_experience {
        writeln!(f, "  Average rating:  {:.1}/5", average)?;
    }
    Ok(())
}

impl CreateView for BrowseViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(BrowseView {
            data: self,
            palette,
        })
    }
}

struct BrowseView<'a> {
    data: &'a BrowseViewModel,
    palette: Palette,
}

impl fmt::Display for BrowseView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(filter) = describe_filter(&self.data.filter) {
            writeln!(f, "Filter: {}", self.palette.accent(filter))?;
        }
        if self.data.cigars.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        write_cigar_table(f, &self.data.cigars, self.palette)?;
        writeln!(f, "\nTotal on hand: {}", self.data.total_quantity)
    }
}
