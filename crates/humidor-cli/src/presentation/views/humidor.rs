use std::fmt;

use super::cigar::write_cigar_table;
use crate::presentation::Palette;
use crate::presentation::formatters::number::{fill_bar, format_percent};
use crate::presentation::formatters::text::{or_dash, truncate};
use crate::presentation::view_models::{
    CreateView, HumidorDetailViewModel, HumidorListViewModel, HumidorRemovedViewModel,
    HumidorRowViewModel, HumidorSavedViewModel,
};

/// "16% ██░░░░░░░░", or the bare count when capacity is unknown.
pub(super) fn fill_cell(row: &HumidorRowViewModel, palette: Palette) -> String {
    match (row.capacity, row.fill_percent) {
        (Some(capacity), Some(percent)) => {
            let cell = format!(
                "{:>4}/{:<5} {:>6} {}",
                row.quantity,
                capacity,
                format_percent(percent),
                fill_bar(percent)
            );
            if percent > 100.0 {
                palette.warn(cell)
            } else {
                cell
            }
        }
        _ => format!("{:>4}/?", row.quantity),
    }
}

pub(super) fn environment_cell(row: &HumidorRowViewModel) -> String {
    let temp = row.temp.map(|t| format!("{:.0}°F", t));
    let humidity = row.humidity.map(|h| format!("{:.0}% RH", h));
    let reading = match (temp, humidity) {
        (Some(t), Some(h)) => format!("{} {}", t, h),
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => "-".to_string(),
    };
    match &row.sensor_device_id {
        Some(device) => format!("{} [sensor {}]", reading, device),
        None => reading,
    }
}

// --------------------------------------------------------
// Humidor list
// --------------------------------------------------------

impl CreateView for HumidorListViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(HumidorListView {
            data: self,
            palette,
        })
    }
}

struct HumidorListView<'a> {
    data: &'a HumidorListViewModel,
    palette: Palette,
}

impl fmt::Display for HumidorListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.humidors.is_empty() {
            return Ok(());
        }

        writeln!(
            f,
            "{}",
            self.palette
                .heading(format!("{:<9} {:<24} {:<30} ENVIRONMENT", "ID", "NAME", "FILL"))
        )?;
        for row in &self.data.humidors {
            writeln!(
                f,
                "{} {:<24} {:<30} {}",
                self.palette.muted(format!("{:<9}", row.id_short)),
                truncate(&row.name, 24),
                fill_cell(row, self.palette),
                environment_cell(row)
            )?;
        }
        writeln!(f, "\nTotal on hand: {}", self.data.total_quantity)
    }
}

// --------------------------------------------------------
// Humidor detail
// --------------------------------------------------------

impl CreateView for HumidorDetailViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(HumidorDetailView {
            data: self,
            palette,
        })
    }
}

struct HumidorDetailView<'a> {
    data: &'a HumidorDetailViewModel,
    palette: Palette,
}

impl fmt::Display for HumidorDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let humidor = &self.data.humidor;

        writeln!(f, "{}", self.palette.heading(&humidor.name))?;
        writeln!(f, "  ID:          {}", humidor.id)?;
        writeln!(f, "  Size:        {}", or_dash(self.data.size.as_deref()))?;
        writeln!(f, "  Fill:        {}", fill_cell(humidor, self.palette))?;
        writeln!(f, "  Environment: {}", environment_cell(humidor))?;

        if !self.data.cigars.is_empty() {
            writeln!(f)?;
            write_cigar_table(f, &self.data.cigars, self.palette)?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Saved / removed
// --------------------------------------------------------

impl CreateView for HumidorSavedViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(HumidorSavedView {
            data: self,
            palette,
        })
    }
}

struct HumidorSavedView<'a> {
    data: &'a HumidorSavedViewModel,
    palette: Palette,
}

impl fmt::Display for HumidorSavedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  ID:       {}", self.palette.muted(&self.data.id))?;
        writeln!(f, "  Size:     {}", or_dash(self.data.size.as_deref()))?;
        match self.data.capacity {
            Some(capacity) => writeln!(f, "  Capacity: {}", capacity)?,
            None if self.data.size.is_some() => {
                writeln!(f, "  Capacity: unknown (no number in the size)")?
            }
            None => {}
        }
        if let Some(device) = &self.data.sensor_device_id {
            writeln!(f, "  Sensor:   {}", device)?;
        }
        Ok(())
    }
}

impl CreateView for HumidorRemovedViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(HumidorRemovedView {
            data: self,
            palette,
        })
    }
}

struct HumidorRemovedView<'a> {
    data: &'a HumidorRemovedViewModel,
    palette: Palette,
}

impl fmt::Display for HumidorRemovedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.palette.muted(&self.data.id))
    }
}
