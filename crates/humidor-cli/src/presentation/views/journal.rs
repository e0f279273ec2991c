use std::fmt;

use crate::presentation::Palette;
use crate::presentation::formatters::number::format_rating;
use crate::presentation::formatters::text::{or_dash, truncate};
use crate::presentation::formatters::time::{format_date, format_minutes};
use crate::presentation::view_models::{
    CreateView, JournalDetailViewModel, JournalListViewModel, JournalRemovedViewModel,
    JournalRowViewModel, JournalSavedViewModel, JournalSummaryViewModel,
};

fn write_entry_line(
    f: &mut fmt::Formatter<'_>,
    entry: &JournalRowViewModel,
    palette: Palette,
) -> fmt::Result {
    writeln!(
        f,
        "{} {}  {:<32} {:<8} {}",
        palette.muted(format!("{:<9}", entry.id_short)),
        format_date(&entry.date_smoked),
        truncate(&entry.title, 32),
        format_rating(entry.experience_rating),
        entry
            .burn_time_minutes
            .map(|m| format_minutes(u64::from(m)))
            .unwrap_or_default()
    )
}

impl CreateView for JournalListViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(JournalListView {
            data: self,
            palette,
        })
    }
}

struct JournalListView<'a> {
    data: &'a JournalListViewModel,
    palette: Palette,
}

impl fmt::Display for JournalListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.data.entries {
            write_entry_line(f, entry, self.palette)?;
        }
        Ok(())
    }
}

impl CreateView for JournalDetailViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(JournalDetailView {
            data: self,
            palette,
        })
    }
}

struct JournalDetailView<'a> {
    data: &'a JournalDetailViewModel,
    palette: Palette,
}

impl fmt::Display for JournalDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        let entry = &data.entry;

        writeln!(
            f,
            "{}  {}",
            self.palette.heading(&entry.title),
            format_date(&entry.date_smoked)
        )?;
        writeln!(f, "  ID:         {}", entry.id)?;
        writeln!(f, "  Experience: {}", format_rating(entry.experience_rating))?;
        writeln!(f, "  Draw:       {}", format_rating(data.draw_rating))?;
        writeln!(f, "  Burn:       {}", format_rating(data.burn_rating))?;
        writeln!(f, "  Ash:        {}", format_rating(data.ash_rating))?;
        writeln!(f, "  Location:   {}", or_dash(entry.location.as_deref()))?;
        writeln!(f, "  Pairing:    {}", or_dash(entry.pairing.as_deref()))?;
        if let Some(minutes) = entry.burn_time_minutes {
            writeln!(f, "  Burn time:  {}", format_minutes(u64::from(minutes)))?;
        }

        let sections = [
            ("First third", &data.first_third_notes),
            ("Second third", &data.second_third_notes),
            ("Final third", &data.final_third_notes),
            ("Notes", &data.notes),
        ];
        for (label, text) in sections {
            if let Some(text) = text {
                writeln!(f, "\n{}\n  {}", self.palette.accent(label), text)?;
            }
        }
        Ok(())
    }
}

impl CreateView for JournalSavedViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(JournalSavedView {
            data: self,
            palette,
        })
    }
}

struct JournalSavedView<'a> {
    data: &'a JournalSavedViewModel,
    palette: Palette,
}

impl fmt::Display for JournalSavedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry_line(f, &self.data.entry, self.palette)
    }
}

impl CreateView for JournalRemovedViewModel {
    fn create_view<'a>(&'a self, _palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(JournalRemovedView { data: self })
    }
}

struct JournalRemovedView<'a> {
    data: &'a JournalRemovedViewModel,
}

impl fmt::Display for JournalRemovedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.id)
    }
}

impl CreateView for JournalSummaryViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(JournalSummaryView {
            data: self,
            palette,
        })
    }
}

struct JournalSummaryView<'a> {
    data: &'a JournalSummaryViewModel,
    palette: Palette,
}

impl fmt::Display for JournalSummaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        if data.entries == 0 {
            return Ok(());
        }

        writeln!(f, "{}", self.palette.heading("Journal"))?;
        writeln!(f, "  Sessions:       {}", data.entries)?;
        writeln!(
            f,
            "  Average rating: {}",
            data.average_experience
                .map(|avg| format!("{:.1}/5", avg))
                .unwrap_or_else(|| "unrated".to_string())
        )?;
        if let Some(last) = &data.last_smoked {
            writeln!(f, "  Last smoke:     {}", format_date(last))?;
        }
        writeln!(
            f,
            "  Time smoking:   {}",
            format_minutes(data.total_burn_minutes)
        )?;
        if let Some(favourite) = &data.favourite {
            writeln!(
                f,
                "  Favourite:      {} ({})",
                favourite.title,
                format_rating(favourite.experience_rating)
            )?;
        }
        Ok(())
    }
}
