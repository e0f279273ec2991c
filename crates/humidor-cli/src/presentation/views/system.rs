use std::fmt;

use crate::presentation::Palette;
use crate::presentation::formatters::text::plural;
use crate::presentation::view_models::{
    ConfigStatusViewModel, ConfigViewModel, CreateView, InitViewModel, StoreViewModel,
};

impl CreateView for InitViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(InitView {
            data: self,
            palette,
        })
    }
}

struct InitView<'a> {
    data: &'a InitViewModel,
    palette: Palette,
}

impl fmt::Display for InitView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.config {
            ConfigStatusViewModel::Created { config_path } => {
                writeln!(f, "Config:    {} {}", config_path, self.palette.good("(new)"))?
            }
            ConfigStatusViewModel::LoadedExisting { config_path } => {
                writeln!(f, "Config:    {}", config_path)?
            }
        }
        writeln!(f, "Database:  {}", self.data.db_path)?;
        writeln!(f, "App id:    {}", self.palette.muted(&self.data.app_id))?;
        writeln!(f, "User id:   {}", self.data.user_id)?;
        writeln!(
            f,
            "Contents:  {}, {}, {}",
            plural(self.data.humidors as u64, "humidor", "humidors"),
            plural(self.data.cigars as u64, "cigar", "cigars"),
            plural(self.data.journal_entries as u64, "journal entry", "journal entries")
        )
    }
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView {
            data: self,
            palette,
        })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
    palette: Palette,
}

impl fmt::Display for ConfigView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.palette.muted(&self.data.config_path))?;
        writeln!(f)?;
        writeln!(f, "app_id       {}", self.data.app_id)?;
        writeln!(f, "user_id      {}", self.data.user_id)?;
        writeln!(f, "theme        {}", self.data.theme)?;
        writeln!(f, "panels       {}", self.data.panels.join(", "))?;
        writeln!(f, "top_n        {}", self.data.top_n)?;
        writeln!(f, "other_scope  {}", self.data.other_scope)
    }
}

impl CreateView for StoreViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(StoreView {
            data: self,
            palette,
        })
    }
}

struct StoreView<'a> {
    data: &'a StoreViewModel,
    palette: Palette,
}

impl fmt::Display for StoreView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = match self.data.db_size_bytes {
            Some(bytes) => format_bytes(bytes),
            None => "-".to_string(),
        };

        writeln!(f, "Data dir:        {}", self.data.data_dir)?;
        writeln!(f, "Database:        {} ({})", self.data.db_path, size)?;
        writeln!(
            f,
            "Schema version:  {}",
            self.palette.muted(self.data.schema_version)
        )?;
        writeln!(f, "Humidors:        {}", self.data.humidors)?;
        writeln!(
            f,
            "Cigars:          {} records, {} on hand",
            self.data.cigars, self.data.total_quantity
        )?;
        writeln!(f, "Journal entries: {}", self.data.journal_entries)
    }
}

fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    let value = bytes as f64;
    if value < KIB {
        format!("{} B", bytes)
    } else if value < KIB * KIB {
        format!("{:.1} KiB", value / KIB)
    } else {
        format!("{:.1} MiB", value / (KIB * KIB))
    }
}
