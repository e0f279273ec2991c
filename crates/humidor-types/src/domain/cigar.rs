use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    CigarId, HumidorId, Strength, lenient_notes, lenient_price, lenient_quantity, lenient_strength,
    lenient_text,
};

/// One line of stock: a particular cigar held in a particular humidor.
///
/// Descriptive attributes are optional; an absent attribute is never an empty
/// string (loaders normalise `""` to `None`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cigar {
    pub id: CigarId,
    pub humidor_id: HumidorId,

    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub binder: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub filler: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_strength", skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,

    #[serde(default, deserialize_with = "lenient_notes")]
    pub flavor_notes: Vec<String>,

    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,

    #[serde(default)]
    pub is_puro: bool,
}

/// Attributes a cigar can be grouped or matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CigarAttribute {
    Brand,
    Name,
    Shape,
    Size,
    Wrapper,
    Binder,
    Filler,
    Country,
    Strength,
}

impl CigarAttribute {
    pub fn label(&self) -> &'static str {
        match self {
            CigarAttribute::Brand => "brand",
            CigarAttribute::Name => "name",
            CigarAttribute::Shape => "shape",
            CigarAttribute::Size => "size",
            CigarAttribute::Wrapper => "wrapper",
            CigarAttribute::Binder => "binder",
            CigarAttribute::Filler => "filler",
            CigarAttribute::Country => "country",
            CigarAttribute::Strength => "strength",
        }
    }
}

impl Cigar {
    /// Empty record with the given identity; every attribute absent.
    pub fn new(id: CigarId, humidor_id: HumidorId) -> Self {
        Self {
            id,
            humidor_id,
            brand: None,
            name: None,
            shape: None,
            size: None,
            wrapper: None,
            binder: None,
            filler: None,
            country: None,
            strength: None,
            flavor_notes: Vec::new(),
            quantity: 0,
            price: 0.0,
            is_puro: false,
        }
    }

    pub fn attribute(&self, attribute: CigarAttribute) -> Option<&str> {
        match attribute {
            CigarAttribute::Brand => self.brand.as_deref(),
            CigarAttribute::Name => self.name.as_deref(),
            CigarAttribute::Shape => self.shape.as_deref(),
            CigarAttribute::Size => self.size.as_deref(),
            CigarAttribute::Wrapper => self.wrapper.as_deref(),
            CigarAttribute::Binder => self.binder.as_deref(),
            CigarAttribute::Filler => self.filler.as_deref(),
            CigarAttribute::Country => self.country.as_deref(),
            CigarAttribute::Strength => self.strength.map(|s| s.label()),
        }
    }

    pub fn is_flavored(&self) -> bool {
        !self.flavor_notes.is_empty()
    }

    /// Price of everything on hand for this line.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// "Brand Name", falling back to whichever half is known.
    pub fn display_name(&self) -> String {
        match (self.brand.as_deref(), self.name.as_deref()) {
            (Some(brand), Some(name)) => format!("{} {}", brand, name),
            (Some(only), None) | (None, Some(only)) => only.to_string(),
            (None, None) => "Unnamed cigar".to_string(),
        }
    }
}

impl fmt::Display for Cigar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{})", self.display_name(), self.quantity)
    }
}
