use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use humidor_runtime::{CigarFields, HumidorFields, NewEntry};

/// Humidor attributes shared by `humidor add` and `humidor edit`.
/// An empty string clears a text attribute.
#[derive(Debug, Clone, Default, Args)]
pub struct HumidorFieldArgs {
    #[arg(long, help = "Capacity descriptor, e.g. \"150 count\"")]
    pub size: Option<String>,

    #[arg(long, help = "Temperature in °F")]
    pub temp: Option<f64>,

    #[arg(long, help = "Relative humidity in percent")]
    pub humidity: Option<f64>,

    #[arg(long = "sensor", help = "Id of the sensor reporting for this humidor")]
    pub sensor_device_id: Option<String>,
}

impl HumidorFieldArgs {
    pub fn into_fields(self, name: Option<String>) -> HumidorFields {
        HumidorFields {
            name,
            size: self.size,
            temp: self.temp,
            humidity: self.humidity,
            sensor_device_id: self.sensor_device_id,
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct CigarFieldArgs {
    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub shape: Option<String>,

    #[arg(long)]
    pub size: Option<String>,

    #[arg(long)]
    pub wrapper: Option<String>,

    #[arg(long)]
    pub binder: Option<String>,

    #[arg(long)]
    pub filler: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long, help = "Mild, Mild-Medium, Medium, Medium-Full or Full")]
    pub strength: Option<String>,

    #[arg(long)]
    pub quantity: Option<u32>,

    #[arg(long, help = "Price per cigar")]
    pub price: Option<f64>,

    #[arg(long = "flavor", value_delimiter = ',', help = "Flavor notes, comma separated")]
    pub flavor_notes: Option<Vec<String>>,

    #[arg(long, help = "Override puro detection (true or false)")]
    pub puro: Option<bool>,
}

impl From<CigarFieldArgs> for CigarFields {
    fn from(args: CigarFieldArgs) -> Self {
        CigarFields {
            brand: args.brand,
            name: args.name,
            shape: args.shape,
            size: args.size,
            wrapper: args.wrapper,
            binder: args.binder,
            filler: args.filler,
            country: args.country,
            strength: args.strength,
            flavor_notes: args.flavor_notes,
            quantity: args.quantity,
            price: args.price,
            puro: args.puro,
        }
    }
}

/// One filter at a time: picking a second kind is a usage error.
#[derive(Debug, Clone, Default, Args)]
#[group(multiple = false)]
pub struct CigarFilterArgs {
    #[arg(long, help = "Match name or brand, ignoring case")]
    pub search: Option<String>,

    #[arg(long, help = "Exact brand, ignoring case")]
    pub brand: Option<String>,

    #[arg(long)]
    pub wrapper: Option<String>,

    #[arg(long, help = "A strength level, or \"flavored\"")]
    pub strength: Option<String>,

    #[arg(long, help = "A country, or \"other\"")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct JournalFieldArgs {
    #[arg(long, value_parser = parse_date, help = "YYYY-MM-DD or RFC 3339 (default: now)")]
    pub date: Option<DateTime<Utc>>,

    #[arg(long, help = "Overall experience, 0-5 in half steps")]
    pub rating: Option<f64>,

    #[arg(long)]
    pub draw: Option<f64>,

    #[arg(long)]
    pub burn: Option<f64>,

    #[arg(long)]
    pub ash: Option<f64>,

    #[arg(long)]
    pub notes: Option<String>,

    #[arg(long)]
    pub first_third: Option<String>,

    #[arg(long)]
    pub second_third: Option<String>,

    #[arg(long)]
    pub final_third: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub pairing: Option<String>,

    #[arg(long, help = "Burn time in minutes")]
    pub minutes: Option<u32>,
}

impl JournalFieldArgs {
    pub fn into_entry(self, cigar: String, from_stock: bool) -> NewEntry {
        NewEntry {
            cigar,
            date_smoked: self.date,
            experience_rating: self.rating,
            draw_rating: self.draw,
            burn_rating: self.burn,
            ash_rating: self.ash,
            notes: self.notes,
            first_third_notes: self.first_third,
            second_third_notes: self.second_third,
            final_third_notes: self.final_third,
            location: self.location,
            pairing: self.pairing,
            burn_time_minutes: self.minutes,
            from_stock,
        }
    }
}

/// A bare date is taken as midnight UTC.
fn parse_date(value: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
        .ok_or_else(|| format!("expected YYYY-MM-DD or an RFC 3339 timestamp, got '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-05-01"),
            Ok(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_date("2024-05-01T21:30:00+02:00"),
            Ok(Utc.with_ymd_and_hms(2024, 5, 1, 19, 30, 0).unwrap())
        );
        assert!(parse_date("yesterday").is_err());
    }
}
