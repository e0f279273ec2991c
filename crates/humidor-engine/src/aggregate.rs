use std::cmp::Ordering;
use std::collections::HashMap;

use humidor_types::{Cigar, CigarAttribute, Strength};
use serde::{Deserialize, Serialize};

/// Label used for records that carry no value for the grouping attribute.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// One row of a grouped view: a label and the summed stock behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub label: String,
    pub quantity: u64,
}

impl Bucket {
    pub fn new(label: impl Into<String>, quantity: u64) -> Self {
        Self {
            label: label.into(),
            quantity,
        }
    }
}

/// Sum `quantity` per attribute value.
///
/// Buckets come back in first-encounter order. Keys compare exactly; records
/// without a value land in the `"Unknown"` bucket. Every unit in the input is
/// counted exactly once, so the bucket total always equals [`total_quantity`].
pub fn group_quantities(cigars: &[Cigar], attribute: CigarAttribute) -> Vec<Bucket> {
    group_by(cigars, |cigar| {
        cigar
            .attribute(attribute)
            .unwrap_or(UNKNOWN_LABEL)
            .to_string()
    })
}

/// Same as [`group_quantities`] with a caller-supplied key function.
pub fn group_by<F>(cigars: &[Cigar], mut key: F) -> Vec<Bucket>
where
    F: FnMut(&Cigar) -> String,
{
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for cigar in cigars {
        let label = key(cigar);
        let quantity = u64::from(cigar.quantity);
        match index.get(&label) {
            Some(&i) => buckets[i].quantity += quantity,
            None => {
                index.insert(label.clone(), buckets.len());
                buckets.push(Bucket::new(label, quantity));
            }
        }
    }

    buckets
}

/// Highest `n` buckets by quantity.
///
/// The sort is stable, so equal quantities keep their encounter order.
pub fn top_n(mut buckets: Vec<Bucket>, n: usize) -> Vec<Bucket> {
    buckets.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    buckets.truncate(n);
    buckets
}

/// Buckets sorted by label, ignoring case first and falling back to exact order.
pub fn alphabetical(mut buckets: Vec<Bucket>) -> Vec<Bucket> {
    buckets.sort_by(|a, b| compare_labels(&a.label, &b.label));
    buckets
}

pub(crate) fn compare_labels(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stock per strength level in scale order (Mild to Full), zero rows dropped.
///
/// Records without a strength are not shown here.
pub fn strength_breakdown(cigars: &[Cigar]) -> Vec<Bucket> {
    Strength::ALL
        .iter()
        .map(|level| {
            let quantity = cigars
                .iter()
                .filter(|cigar| cigar.strength == Some(*level))
                .map(|cigar| u64::from(cigar.quantity))
                .sum();
            Bucket::new(level.label(), quantity)
        })
        .filter(|bucket| bucket.quantity > 0)
        .collect()
}

pub fn total_quantity(cigars: &[Cigar]) -> u64 {
    cigars.iter().map(|cigar| u64::from(cigar.quantity)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use humidor_types::{CigarId, HumidorId};

    fn cigar(id: &str, brand: Option<&str>, quantity: u32) -> Cigar {
        let mut cigar = Cigar::new(CigarId::new(id), HumidorId::new("h1"));
        cigar.brand = brand.map(str::to_string);
        cigar.quantity = quantity;
        cigar
    }

    #[test]
    fn test_group_conserves_total_quantity() {
        let cigars = vec![
            cigar("1", Some("Padron"), 5),
            cigar("2", Some("Oliva"), 3),
            cigar("3", None, 2),
            cigar("4", Some("Padron"), 1),
            cigar("5", Some("padron"), 4),
        ];

        for attribute in [
            CigarAttribute::Brand,
            CigarAttribute::Country,
            CigarAttribute::Wrapper,
            CigarAttribute::Strength,
        ] {
            let buckets = group_quantities(&cigars, attribute);
            let sum: u64 = buckets.iter().map(|b| b.quantity).sum();
            assert_eq!(sum, total_quantity(&cigars), "attribute {:?}", attribute);
        }
    }

    #[test]
    fn test_group_buckets_missing_values_as_unknown() {
        let cigars = vec![cigar("1", None, 2), cigar("2", Some("Oliva"), 1), cigar("3", None, 3)];
        let buckets = group_quantities(&cigars, CigarAttribute::Brand);
        assert_eq!(
            buckets,
            vec![Bucket::new("Unknown", 5), Bucket::new("Oliva", 1)]
        );
    }

    #[test]
    fn test_group_empty_list() {
        assert!(group_quantities(&[], CigarAttribute::Brand).is_empty());
        assert!(strength_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let cigars = vec![cigar("1", Some("Padron"), 0), cigar("2", Some("Padron"), 4)];
        let buckets = group_quantities(&cigars, CigarAttribute::Brand);
        assert_eq!(buckets, vec![Bucket::new("Padron", 4)]);
    }

    #[test]
    fn test_top_n_truncates_and_keeps_encounter_order_on_ties() {
        let cigars = vec![
            cigar("1", Some("A"), 1),
            cigar("2", Some("B"), 9),
            cigar("3", Some("C"), 4),
            cigar("4", Some("D"), 4),
            cigar("5", Some("E"), 2),
            cigar("6", Some("F"), 4),
            cigar("7", Some("G"), 7),
        ];

        let top = top_n(group_quantities(&cigars, CigarAttribute::Brand), 5);
        let labels: Vec<&str> = top.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "G", "C", "D", "F"]);
    }

    #[test]
    fn test_alphabetical_is_case_insensitive() {
        let buckets = vec![
            Bucket::new("maduro", 1),
            Bucket::new("Connecticut", 1),
            Bucket::new("Habano", 1),
        ];
        let labels: Vec<String> = alphabetical(buckets).into_iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Connecticut", "Habano", "maduro"]);
    }

    #[test]
    fn test_strength_breakdown_fixed_order_drops_zero() {
        let mut full = cigar("1", None, 2);
        full.strength = Some(Strength::Full);
        let mut mild = cigar("2", None, 3);
        mild.strength = Some(Strength::Mild);
        let mut empty_box = cigar("3", None, 0);
        empty_box.strength = Some(Strength::Medium);

        let buckets = strength_breakdown(&[full, mild, empty_box]);
        assert_eq!(
            buckets,
            vec![Bucket::new("Mild", 3), Bucket::new("Full", 2)]
        );
    }
}
