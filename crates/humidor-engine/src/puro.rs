//! Puro detection.
//!
//! Each tobacco component (wrapper, binder, filler) is a free-text descriptor
//! such as "Ecuadorian Habano" or "Nicaraguan Criollo '98". A descriptor is
//! resolved to a country by scanning [`ORIGIN_TERMS`] in declared order and
//! taking the first geographic term it contains. The table runs from most to
//! least specific:
//!
//! 1. regional phrases that embed another country's name ("piloto cubano")
//! 2. national adjectives and country names
//! 3. seed varietals and growing regions ("habano", "connecticut")
//!
//! Descriptive terms (maduro, natural, ...) are listed so callers can tell
//! "descriptive only" apart from "unknown", but they never resolve a country.

use humidor_types::Cigar;
use serde::Serialize;

/// Lowercase lookup term and the canonical country it implies.
pub const ORIGIN_TERMS: &[(&str, Option<&str>)] = &[
    // Regional phrases
    ("piloto cubano", Some("dominican republic")),
    ("san andres", Some("mexico")),
    ("san andrés", Some("mexico")),
    ("mata fina", Some("brazil")),
    ("jalapa", Some("nicaragua")),
    ("esteli", Some("nicaragua")),
    ("estelí", Some("nicaragua")),
    ("ometepe", Some("nicaragua")),
    ("vuelta abajo", Some("cuba")),
    ("jamastran", Some("honduras")),
    ("olor dominicano", Some("dominican republic")),
    ("canary islands", Some("canary islands")),
    ("costa rican", Some("costa rica")),
    ("costa rica", Some("costa rica")),
    ("dominican republic", Some("dominican republic")),
    // National adjectives and country names
    ("nicaraguan", Some("nicaragua")),
    ("nicaragua", Some("nicaragua")),
    ("dominican", Some("dominican republic")),
    ("honduran", Some("honduras")),
    ("honduras", Some("honduras")),
    ("ecuadorian", Some("ecuador")),
    ("ecuador", Some("ecuador")),
    ("cuban", Some("cuba")),
    ("cuba", Some("cuba")),
    ("mexican", Some("mexico")),
    ("mexico", Some("mexico")),
    ("brazilian", Some("brazil")),
    ("brazil", Some("brazil")),
    ("peruvian", Some("peru")),
    ("peru", Some("peru")),
    ("colombian", Some("colombia")),
    ("colombia", Some("colombia")),
    ("panamanian", Some("panama")),
    ("panama", Some("panama")),
    ("jamaican", Some("jamaica")),
    ("jamaica", Some("jamaica")),
    ("philippine", Some("philippines")),
    ("indonesian", Some("indonesia")),
    ("indonesia", Some("indonesia")),
    ("cameroonian", Some("cameroon")),
    ("cameroon", Some("cameroon")),
    ("american", Some("usa")),
    ("usa", Some("usa")),
    // Seed varietals and growing regions
    ("habano", Some("ecuador")),
    ("corojo", Some("honduras")),
    ("criollo", Some("nicaragua")),
    ("sumatra", Some("indonesia")),
    ("besuki", Some("indonesia")),
    ("arapiraca", Some("brazil")),
    ("connecticut", Some("usa")),
    ("pennsylvania", Some("usa")),
    ("kentucky", Some("usa")),
    ("broadleaf", Some("usa")),
    // Descriptive only
    ("maduro", None),
    ("natural", None),
    ("claro", None),
    ("colorado", None),
    ("oscuro", None),
    ("rosado", None),
    ("candela", None),
    ("shade", None),
];

/// What a single descriptor resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginMatch {
    Country(&'static str),
    /// Only descriptive terms matched.
    Descriptive,
    Unknown,
}

impl OriginMatch {
    pub fn country(&self) -> Option<&'static str> {
        match *self {
            OriginMatch::Country(country) => Some(country),
            _ => None,
        }
    }
}

pub fn classify_origin(descriptor: &str) -> OriginMatch {
    let normalized = descriptor.trim().to_lowercase();
    if normalized.is_empty() {
        return OriginMatch::Unknown;
    }

    let mut descriptive = false;
    for &(term, country) in ORIGIN_TERMS {
        if !normalized.contains(term) {
            continue;
        }
        match country {
            Some(country) => return OriginMatch::Country(country),
            None => descriptive = true,
        }
    }

    if descriptive {
        OriginMatch::Descriptive
    } else {
        OriginMatch::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuroVerdict {
    pub is_puro: bool,
    pub country: Option<&'static str>,
}

/// A puro needs all three components resolved to the same country.
pub fn detect_puro(wrapper: &str, binder: &str, filler: &str) -> PuroVerdict {
    let wrapper = classify_origin(wrapper).country();
    let binder = classify_origin(binder).country();
    let filler = classify_origin(filler).country();

    match (wrapper, binder, filler) {
        (Some(w), Some(b), Some(f)) if w == b && b == f => PuroVerdict {
            is_puro: true,
            country: Some(w),
        },
        _ => PuroVerdict::default(),
    }
}

pub fn detect_puro_for(cigar: &Cigar) -> PuroVerdict {
    detect_puro(
        cigar.wrapper.as_deref().unwrap_or_default(),
        cigar.binder.as_deref().unwrap_or_default(),
        cigar.filler.as_deref().unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_nicaraguan_is_puro() {
        assert_eq!(
            detect_puro("Nicaraguan", "Nicaraguan", "Nicaraguan"),
            PuroVerdict {
                is_puro: true,
                country: Some("nicaragua")
            }
        );
    }

    #[test]
    fn test_mixed_origins_not_puro() {
        assert_eq!(
            detect_puro("Nicaraguan", "Dominican", "Nicaraguan"),
            PuroVerdict {
                is_puro: false,
                country: None
            }
        );
    }

    #[test]
    fn test_descriptive_terms_never_resolve() {
        assert_eq!(detect_puro("Maduro", "", ""), PuroVerdict::default());
        assert_eq!(detect_puro("Maduro", "Maduro", "Maduro"), PuroVerdict::default());
        assert_eq!(classify_origin("Maduro"), OriginMatch::Descriptive);
        assert_eq!(classify_origin("Colorado Claro"), OriginMatch::Descriptive);
        assert_eq!(classify_origin(""), OriginMatch::Unknown);
        assert_eq!(classify_origin("Mystery leaf"), OriginMatch::Unknown);
    }

    #[test]
    fn test_varietals_map_to_country() {
        assert_eq!(classify_origin("Habano").country(), Some("ecuador"));
        assert_eq!(classify_origin("Corojo 99").country(), Some("honduras"));
        assert_eq!(classify_origin("Criollo '98").country(), Some("nicaragua"));
        assert_eq!(classify_origin("  CONNECTICUT Shade ").country(), Some("usa"));
    }

    #[test]
    fn test_first_defined_term_wins() {
        // Nationality outranks varietal
        assert_eq!(classify_origin("Nicaraguan Habano").country(), Some("nicaragua"));
        assert_eq!(classify_origin("Ecuadorian Connecticut").country(), Some("ecuador"));
        assert_eq!(classify_origin("Maduro Ecuador Sumatra").country(), Some("ecuador"));
        // Regional phrase outranks the nationality it contains
        assert_eq!(
            classify_origin("Piloto Cubano").country(),
            Some("dominican republic")
        );
        assert_eq!(classify_origin("San Andres Maduro").country(), Some("mexico"));
    }

    #[test]
    fn test_puro_through_mixed_vocabulary() {
        let verdict = detect_puro("Habano Ecuador", "Ecuadorian", "Ecuador Sumatra");
        assert_eq!(verdict.country, Some("ecuador"));
        assert!(verdict.is_puro);
    }

    #[test]
    fn test_detect_for_missing_components() {
        let mut cigar = Cigar::new("c1".into(), "h1".into());
        cigar.wrapper = Some("Nicaraguan".to_string());
        cigar.binder = Some("Nicaraguan".to_string());
        assert!(!detect_puro_for(&cigar).is_puro);

        cigar.filler = Some("Esteli Ligero".to_string());
        assert!(detect_puro_for(&cigar).is_puro);
    }
}
