use std::fmt;

use crate::presentation::Palette;
use crate::presentation::view_models::{CreateView, ExportViewModel, ImportViewModel};

impl CreateView for ExportViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportView {
            data: self,
            palette,
        })
    }
}

struct ExportView<'a> {
    data: &'a ExportViewModel,
    palette: Palette,
}

impl fmt::Display for ExportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Wrote {} record(s) as {} to {}",
            self.data.records,
            self.data.format,
            self.palette.accent(&self.data.path)
        )
    }
}

impl CreateView for ImportViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(ImportView {
            data: self,
            palette,
        })
    }
}

struct ImportView<'a> {
    data: &'a ImportViewModel,
    palette: Palette,
}

impl fmt::Display for ImportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.data.replace { "replace" } else { "merge" };
        writeln!(
            f,
            "Source: {} {}",
            self.data.source,
            self.palette.muted(format!("({})", mode))
        )?;
        writeln!(f, "  Humidors:        {}", self.data.humidors)?;
        writeln!(f, "  Cigars:          {}", self.data.cigars)?;
        writeln!(f, "  Journal entries: {}", self.data.journal_entries)?;

        if !self.data.skipped.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.palette.warn("Skipped:"))?;
            for skipped in &self.data.skipped {
                writeln!(
                    f,
                    "  {} #{}: {}",
                    skipped.collection, skipped.position, skipped.reason
                )?;
            }
        }
        Ok(())
    }
}
