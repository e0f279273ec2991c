use std::fmt;

use crate::presentation::Palette;
use crate::presentation::formatters::number::{format_price, format_rating};
use crate::presentation::formatters::text::{or_dash, truncate};
use crate::presentation::formatters::time::format_date;
use crate::presentation::view_models::{
    CigarDetailViewModel, CigarListViewModel, CigarRemovedViewModel, CigarRowViewModel,
    CigarSavedViewModel, CreateView, FilterViewModel, PuroViewModel, QuantityViewModel,
};

pub(super) fn write_cigar_table(
    f: &mut fmt::Formatter<'_>,
    rows: &[CigarRowViewModel],
    palette: Palette,
) -> fmt::Result {
    writeln!(
        f,
        "{}",
        palette.heading(format!(
            "{:<9} {:<32} {:<22} {:<20} {:<12} {:>4} {:>8}",
            "ID", "CIGAR", "WRAPPER", "COUNTRY", "STRENGTH", "QTY", "PRICE"
        ))
    )?;

    for row in rows {
        let mut name = truncate(&row.display_name, 30);
        if row.is_puro {
            name.push_str(" ◆");
        }
        let quantity = format!("{:>4}", row.quantity);
        writeln!(
            f,
            "{} {:<32} {:<22} {:<20} {:<12} {} {:>8}",
            palette.muted(format!("{:<9}", row.id_short)),
            name,
            truncate(or_dash(row.wrapper.as_deref()), 22),
            truncate(or_dash(row.country.as_deref()), 20),
            or_dash(row.strength.as_deref()),
            if row.quantity == 0 {
                palette.warn(quantity)
            } else {
                quantity
            },
            format_price(row.price)
        )?;
    }

    if rows.iter().any(|row| row.is_puro) {
        writeln!(f, "{}", palette.muted("◆ puro"))?;
    }
    Ok(())
}

pub(super) fn describe_filter(filter: &FilterViewModel) -> Option<String> {
    let value = filter.value.as_deref()?;
    Some(match &filter.return_to {
        Some(screen) => format!("{}: {} (from {})", filter.kind, value, screen),
        None => format!("{}: {}", filter.kind, value),
    })
}

// --------------------------------------------------------
// Cigar list
// --------------------------------------------------------

impl CreateView for CigarListViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(CigarListView {
            data: self,
            palette,
        })
    }
}

struct CigarListView<'a> {
    data: &'a CigarListViewModel,
    palette: Palette,
}

impl fmt::Display for CigarListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(humidor) = &self.data.humidor {
            writeln!(f, "Humidor: {}", humidor)?;
        }
        if let Some(filter) = describe_filter(&self.data.filter) {
            writeln!(f, "Filter:  {}", self.palette.accent(filter))?;
        }
        if self.data.cigars.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        write_cigar_table(f, &self.data.cigars, self.palette)?;
        writeln!(f, "\nTotal on hand: {}", self.data.total_quantity)
    }
}

// --------------------------------------------------------
// Cigar detail
// --------------------------------------------------------

impl CreateView for CigarDetailViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(CigarDetailView {
            data: self,
            palette,
        })
    }
}

struct CigarDetailView<'a> {
    data: &'a CigarDetailViewModel,
    palette: Palette,
}

impl fmt::Display for CigarDetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data;
        let cigar = &data.cigar;

        writeln!(f, "{}", self.palette.heading(&cigar.display_name))?;
        writeln!(f, "  ID:        {}", cigar.id)?;
        writeln!(f, "  Humidor:   {}", or_dash(data.humidor_name.as_deref()))?;
        writeln!(f, "  Shape:     {}", or_dash(data.shape.as_deref()))?;
        writeln!(f, "  Size:      {}", or_dash(data.size.as_deref()))?;
        writeln!(f, "  Wrapper:   {}", or_dash(cigar.wrapper.as_deref()))?;
        writeln!(f, "  Binder:    {}", or_dash(data.binder.as_deref()))?;
        writeln!(f, "  Filler:    {}", or_dash(data.filler.as_deref()))?;
        writeln!(f, "  Country:   {}", or_dash(cigar.country.as_deref()))?;
        writeln!(f, "  Strength:  {}", or_dash(cigar.strength.as_deref()))?;
        if !data.flavor_notes.is_empty() {
            writeln!(f, "  Flavor:    {}", data.flavor_notes.join(", "))?;
        }
        writeln!(f, "  Puro:      {}", puro_line(&data.puro, self.palette))?;
        writeln!(
            f,
            "  Stock:     {} at {} ({} total)",
            cigar.quantity,
            format_price(cigar.price),
            format_price(data.stock_value)
        )?;

        if data.entries.is_empty() {
            return Ok(());
        }

        writeln!(f, "\n{}", self.palette.heading("Journal"))?;
        for entry in &data.entries {
            writeln!(
                f,
                "  {}  {:<8} {}",
                format_date(&entry.date_smoked),
                format_rating(entry.experience_rating),
                self.palette.muted(&entry.id_short)
            )?;
        }
        Ok(())
    }
}

fn puro_line(puro: &PuroViewModel, palette: Palette) -> String {
    let country = puro.country.as_deref().unwrap_or("unknown origin");
    match (puro.is_puro, puro.manual_override) {
        (true, false) => palette.good(format!("yes ({})", country)),
        (true, true) => palette.good("yes (set by hand)"),
        (false, true) => format!("no (set by hand; detected {})", country),
        (false, false) => "no".to_string(),
    }
}

// --------------------------------------------------------
// Saved / quantity / removed
// --------------------------------------------------------

impl CreateView for CigarSavedViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(CigarSavedView {
            data: self,
            palette,
        })
    }
}

struct CigarSavedView<'a> {
    data: &'a CigarSavedViewModel,
    palette: Palette,
}

impl fmt::Display for CigarSavedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cigar_table(f, std::slice::from_ref(&self.data.cigar), self.palette)?;
        if let Some(country) = &self.data.puro_notice {
            writeln!(
                f,
                "\n{}",
                self.palette.good(format!("Puro detected: {}", country))
            )?;
        }
        Ok(())
    }
}

impl CreateView for QuantityViewModel {
    fn create_view<'a>(&'a self, _palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(QuantityView { data: self })
    }
}

struct QuantityView<'a> {
    data: &'a QuantityViewModel,
}

impl fmt::Display for QuantityView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} -> {} ({:+})",
            self.data.display_name, self.data.previous, self.data.current, self.data.delta
        )
    }
}

impl CreateView for CigarRemovedViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(CigarRemovedView {
            data: self,
            palette,
        })
    }
}

struct CigarRemovedView<'a> {
    data: &'a CigarRemovedViewModel,
    palette: Palette,
}

impl fmt::Display for CigarRemovedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.palette.muted(&self.data.id))?;
        if self.data.quantity > 0 {
            writeln!(f, "{} cigar(s) were still on hand", self.data.quantity)?;
        }
        Ok(())
    }
}
