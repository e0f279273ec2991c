use humidor_types::{Cigar, CigarAttribute, CigarId, HumidorId, Strength, non_empty};
use serde::Serialize;

use crate::puro::{PuroVerdict, detect_puro_for};

/// Raised when an edit makes the draft resolve to a puro it was not before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PuroNotice {
    pub country: &'static str,
}

/// A cigar being added or edited.
///
/// The puro flag is recomputed on every change to wrapper, binder or filler.
/// A manual override sticks until the next such change, which replaces it
/// with the computed value.
#[derive(Debug, Clone, PartialEq)]
pub struct CigarDraft {
    cigar: Cigar,
    computed: PuroVerdict,
    manual_puro: Option<bool>,
}

impl CigarDraft {
    pub fn new(id: CigarId, humidor_id: HumidorId) -> Self {
        Self::from_cigar(Cigar::new(id, humidor_id))
    }

    /// Start editing an existing record. A stored flag that disagrees with
    /// detection is treated as a manual override.
    pub fn from_cigar(cigar: Cigar) -> Self {
        let computed = detect_puro_for(&cigar);
        let manual_puro = (cigar.is_puro != computed.is_puro).then_some(cigar.is_puro);
        Self {
            cigar,
            computed,
            manual_puro,
        }
    }

    pub fn cigar(&self) -> &Cigar {
        &self.cigar
    }

    pub fn verdict(&self) -> PuroVerdict {
        self.computed
    }

    pub fn is_puro(&self) -> bool {
        self.manual_puro.unwrap_or(self.computed.is_puro)
    }

    pub fn has_manual_override(&self) -> bool {
        self.manual_puro.is_some()
    }

    pub fn set_puro_override(&mut self, is_puro: bool) {
        self.manual_puro = Some(is_puro);
    }

    /// Set a text attribute; blank clears it.
    ///
    /// Strength text that does not name a level clears the strength.
    pub fn set(&mut self, attribute: CigarAttribute, value: Option<&str>) -> Option<PuroNotice> {
        let value = value.and_then(non_empty);
        let slot = match attribute {
            CigarAttribute::Brand => &mut self.cigar.brand,
            CigarAttribute::Name => &mut self.cigar.name,
            CigarAttribute::Shape => &mut self.cigar.shape,
            CigarAttribute::Size => &mut self.cigar.size,
            CigarAttribute::Country => &mut self.cigar.country,
            CigarAttribute::Wrapper => &mut self.cigar.wrapper,
            CigarAttribute::Binder => &mut self.cigar.binder,
            CigarAttribute::Filler => &mut self.cigar.filler,
            CigarAttribute::Strength => {
                self.set_strength(value.and_then(|v| v.parse().ok()));
                return None;
            }
        };

        if *slot == value {
            return None;
        }
        *slot = value;

        match attribute {
            CigarAttribute::Wrapper | CigarAttribute::Binder | CigarAttribute::Filler => {
                self.recompute()
            }
            _ => None,
        }
    }

    pub fn set_strength(&mut self, strength: Option<Strength>) {
        self.cigar.strength = strength;
    }

    pub fn set_humidor(&mut self, humidor_id: HumidorId) {
        self.cigar.humidor_id = humidor_id;
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.cigar.quantity = quantity;
    }

    /// Negative or non-finite prices become 0.
    pub fn set_price(&mut self, price: f64) {
        self.cigar.price = if price.is_finite() && price > 0.0 { price } else { 0.0 };
    }

    pub fn set_flavor_notes<I, S>(&mut self, notes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.cigar.flavor_notes = notes
            .into_iter()
            .filter_map(|note| non_empty(note.as_ref()))
            .collect();
    }

    fn recompute(&mut self) -> Option<PuroNotice> {
        let previous = self.computed;
        self.computed = detect_puro_for(&self.cigar);
        self.manual_puro = None;

        match self.computed.country {
            Some(country) if self.computed.is_puro && previous != self.computed => {
                Some(PuroNotice { country })
            }
            _ => None,
        }
    }

    pub fn finish(self) -> Cigar {
        let is_puro = self.is_puro();
        Cigar { is_puro, ..self.cigar }
    }
}
