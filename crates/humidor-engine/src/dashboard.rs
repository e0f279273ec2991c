use std::fmt;
use std::str::FromStr;

use humidor_types::{Cigar, CigarAttribute, Humidor, HumidorId, JournalEntry};
use serde::{Deserialize, Serialize};

use crate::aggregate::{self, Bucket};
use crate::catalog::CountryCatalog;
use crate::journal::summarize_journal;

pub const NO_DATA_MESSAGE: &str = "No data available";
pub const NO_HUMIDORS_MESSAGE: &str = "No humidors yet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Summary,
    TopBrands,
    TopCountries,
    Strengths,
    Wrappers,
    Countries,
    Humidors,
}

/// How a bucket panel orders its rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOrdering {
    /// Descending quantity, truncated; ties keep encounter order.
    TopN,
    Alphabetical,
    /// Mild to Full, zero rows dropped.
    StrengthScale,
}

impl Panel {
    pub const ALL: [Panel; 7] = [
        Panel::Summary,
        Panel::TopBrands,
        Panel::TopCountries,
        Panel::Strengths,
        Panel::Wrappers,
        Panel::Countries,
        Panel::Humidors,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Panel::Summary => "summary",
            Panel::TopBrands => "top_brands",
            Panel::TopCountries => "top_countries",
            Panel::Strengths => "strengths",
            Panel::Wrappers => "wrappers",
            Panel::Countries => "countries",
            Panel::Humidors => "humidors",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Summary => "Collection Summary",
            Panel::TopBrands => "Top Brands",
            Panel::TopCountries => "Top Countries",
            Panel::Strengths => "Strength Profile",
            Panel::Wrappers => "Wrappers",
            Panel::Countries => "Browse by Country",
            Panel::Humidors => "Humidor Fill",
        }
    }

    /// None for panels that are not lists of buckets.
    pub fn ordering(&self) -> Option<PanelOrdering> {
        match self {
            Panel::TopBrands | Panel::TopCountries => Some(PanelOrdering::TopN),
            Panel::Wrappers | Panel::Countries => Some(PanelOrdering::Alphabetical),
            Panel::Strengths => Some(PanelOrdering::StrengthScale),
            Panel::Summary | Panel::Humidors => None,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Panel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Panel::ALL
            .into_iter()
            .find(|panel| panel.key() == key)
            .ok_or_else(|| {
                let known: Vec<&str> = Panel::ALL.iter().map(|p| p.key()).collect();
                format!("unknown panel '{}': expected one of {}", s, known.join(", "))
            })
    }
}

/// Which panels the dashboard shows, in order, and the top-N cutoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    #[serde(default = "default_panels")]
    pub panels: Vec<Panel>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_panels() -> Vec<Panel> {
    vec![
        Panel::Summary,
        Panel::TopBrands,
        Panel::TopCountries,
        Panel::Strengths,
        Panel::Wrappers,
        Panel::Countries,
    ]
}

fn default_top_n() -> usize {
    5
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            panels: default_panels(),
            top_n: default_top_n(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionSummary {
    pub total_cigars: u64,
    pub distinct_cigars: usize,
    pub estimated_value: f64,
    pub puro_count: usize,
    pub humidor_count: usize,
    pub journal_count: usize,
    pub average_experience: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumidorFill {
    pub humidor_id: HumidorId,
    pub name: String,
    pub quantity: u64,
    pub capacity: Option<u32>,
    /// Percentage of capacity; can exceed 100 when a humidor is overfilled.
    pub fill_percent: Option<f64>,
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub sensor_device_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum PanelContent {
    Summary(CollectionSummary),
    Buckets(Vec<Bucket>),
    Humidors(Vec<HumidorFill>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub panel: Panel,
    pub title: String,
    pub content: PanelContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

impl PanelView {
    pub fn buckets(&self) -> &[Bucket] {
        match &self.content {
            PanelContent::Buckets(buckets) => buckets.as_slice(),
            _ => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty_message.is_some()
    }
}

pub fn build(
    panel: Panel,
    cigars: &[Cigar],
    humidors: &[Humidor],
    entries: &[JournalEntry],
    settings: &DashboardSettings,
    catalog: &CountryCatalog,
) -> PanelView {
    let content = match panel {
        Panel::Summary => PanelContent::Summary(summarize(cigars, humidors, entries)),
        Panel::Humidors => PanelContent::Humidors(humidor_fill(cigars, humidors)),
        Panel::TopBrands => PanelContent::Buckets(aggregate::top_n(
            aggregate::group_quantities(cigars, CigarAttribute::Brand),
            settings.top_n,
        )),
        Panel::TopCountries => PanelContent::Buckets(aggregate::top_n(
            aggregate::group_quantities(cigars, CigarAttribute::Country),
            settings.top_n,
        )),
        Panel::Strengths => PanelContent::Buckets(aggregate::strength_breakdown(cigars)),
        Panel::Wrappers => PanelContent::Buckets(aggregate::alphabetical(
            aggregate::group_quantities(cigars, CigarAttribute::Wrapper),
        )),
        Panel::Countries => PanelContent::Buckets(catalog.group_categories(cigars)),
    };

    let empty_message = match &content {
        PanelContent::Summary(_) => None,
        PanelContent::Buckets(buckets) if buckets.is_empty() => Some(NO_DATA_MESSAGE),
        PanelContent::Humidors(fills) if fills.is_empty() => Some(NO_HUMIDORS_MESSAGE),
        _ => None,
    };

    PanelView {
        panel,
        title: panel.title().to_string(),
        content,
        empty_message,
    }
}

pub fn summarize(cigars: &[Cigar], humidors: &[Humidor], entries: &[JournalEntry]) -> CollectionSummary {
    let journal = summarize_journal(entries);
    CollectionSummary {
        total_cigars: aggregate::total_quantity(cigars),
        distinct_cigars: cigars.len(),
        estimated_value: cigars.iter().map(Cigar::stock_value).sum(),
        puro_count: cigars.iter().filter(|c| c.is_puro).count(),
        humidor_count: humidors.len(),
        journal_count: journal.entries,
        average_experience: journal.average_experience,
    }
}

/// Stock and fill level per humidor, in the order the humidors are given.
pub fn humidor_fill(cigars: &[Cigar], humidors: &[Humidor]) -> Vec<HumidorFill> {
    humidors
        .iter()
        .map(|humidor| {
            let quantity: u64 = cigars
                .iter()
                .filter(|cigar| cigar.humidor_id == humidor.id)
                .map(|cigar| u64::from(cigar.quantity))
                .sum();
            let capacity = humidor.capacity();
            let fill_percent = capacity.map(|cap| quantity as f64 * 100.0 / f64::from(cap));

            HumidorFill {
                humidor_id: humidor.id.clone(),
                name: humidor.name.clone(),
                quantity,
                capacity,
                fill_percent,
                temp: humidor.temp,
                humidity: humidor.humidity,
                sensor_device_id: humidor.sensor_device_id.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use humidor_types::{CigarId, Strength};

    fn cigar(brand: &str, country: &str, quantity: u32, price: f64) -> Cigar {
        let mut cigar = Cigar::new(CigarId::generate(), HumidorId::new("h1"));
        cigar.brand = Some(brand.to_string());
        cigar.country = Some(country.to_string());
        cigar.quantity = quantity;
        cigar.price = price;
        cigar
    }

    #[test]
    fn test_panel_parse() {
        assert_eq!("top-brands".parse::<Panel>(), Ok(Panel::TopBrands));
        assert_eq!("Countries".parse::<Panel>(), Ok(Panel::Countries));
        assert!("pie_chart".parse::<Panel>().is_err());
    }

    #[test]
    fn test_empty_collection_panels_report_no_data() {
        let settings = DashboardSettings::default();
        let catalog = CountryCatalog::default();
        for panel in [Panel::TopBrands, Panel::Strengths, Panel::Wrappers, Panel::Countries] {
            let view = build(panel, &[], &[], &[], &settings, &catalog);
            assert_eq!(view.empty_message, Some(NO_DATA_MESSAGE), "{}", panel);
            assert!(view.buckets().is_empty());
        }

        let summary = build(Panel::Summary, &[], &[], &[], &settings, &catalog);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_top_brands_respects_top_n() {
        let cigars: Vec<Cigar> = (0..8)
            .map(|i| cigar(&format!("Brand {}", i), "Nicaragua", i + 1, 10.0))
            .collect();
        let settings = DashboardSettings {
            top_n: 3,
            ..DashboardSettings::default()
        };
        let view = build(Panel::TopBrands, &cigars, &[], &[], &settings, &CountryCatalog::default());
        let labels: Vec<&str> = view.buckets().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Brand 7", "Brand 6", "Brand 5"]);
    }

    #[test]
    fn test_summary() {
        let mut a = cigar("Padron", "Nicaragua", 4, 12.5);
        a.is_puro = true;
        a.strength = Some(Strength::Full);
        let b = cigar("Oliva", "Nicaragua", 2, 9.0);
        let humidor = Humidor::new(HumidorId::new("h1"), "Desktop");

        let summary = summarize(&[a, b], &[humidor], &[]);
        assert_eq!(summary.total_cigars, 6);
        assert_eq!(summary.distinct_cigars, 2);
        assert_eq!(summary.estimated_value, 68.0);
        assert_eq!(summary.puro_count, 1);
        assert_eq!(summary.humidor_count, 1);
        assert_eq!(summary.journal_count, 0);
        assert_eq!(summary.average_experience, None);
    }

    #[test]
    fn test_humidor_fill() {
        let mut desktop = Humidor::new(HumidorId::new("h1"), "Desktop");
        desktop.size = Some("50 count".to_string());
        let cabinet = Humidor::new(HumidorId::new("h2"), "Cabinet");

        let mut elsewhere = cigar("Oliva", "Nicaragua", 7, 9.0);
        elsewhere.humidor_id = HumidorId::new("h2");
        let cigars = vec![cigar("Padron", "Nicaragua", 10, 12.0), elsewhere];

        let fills = humidor_fill(&cigars, &[desktop, cabinet]);
        assert_eq!(fills[0].quantity, 10);
        assert_eq!(fills[0].capacity, Some(50));
        assert_eq!(fills[0].fill_percent, Some(20.0));
        assert_eq!(fills[1].quantity, 7);
        assert_eq!(fills[1].fill_percent, None);
    }

    #[test]
    fn test_settings_deserialize_defaults() {
        let settings: DashboardSettings = serde_json::from_str(r#"{"top_n": 3}"#).unwrap();
        assert_eq!(settings.top_n, 3);
        assert_eq!(settings.panels, DashboardSettings::default().panels);
    }

    #[test]
    fn test_panel_view_json() {
        let view = build(
            Panel::Strengths,
            &[],
            &[],
            &[],
            &DashboardSettings::default(),
            &CountryCatalog::default(),
        );
        insta::assert_json_snapshot!(view, @r###"
        {
          "panel": "strengths",
          "title": "Strength Profile",
          "content": {
            "type": "buckets",
            "data": []
          },
          "empty_message": "No data available"
        }
        "###);
    }
}
