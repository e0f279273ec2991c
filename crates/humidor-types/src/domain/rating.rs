use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::{Error, Result};

/// Score on the 0–5 scale, stored in half steps.
///
/// Experience ratings may use half steps; draw, burn and ash are whole
/// numbers (see [`Rating::whole`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MAX: f64 = 5.0;

    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || !(0.0..=Self::MAX).contains(&value) {
            return Err(Error::InvalidRating(format!(
                "{} is outside 0-{}",
                value,
                Self::MAX
            )));
        }

        let doubled = value * 2.0;
        if doubled.fract() != 0.0 {
            return Err(Error::InvalidRating(format!(
                "{} is not a multiple of 0.5",
                value
            )));
        }

        Ok(Self(doubled as u8))
    }

    pub fn whole(stars: u8) -> Result<Self> {
        if f64::from(stars) > Self::MAX {
            return Err(Error::InvalidRating(format!(
                "{} is outside 0-{}",
                stars,
                Self::MAX
            )));
        }
        Ok(Self(stars * 2))
    }

    pub fn value(&self) -> f64 {
        f64::from(self.0) / 2.0
    }

    pub fn is_whole(&self) -> bool {
        self.0 % 2 == 0
    }

    pub fn is_unrated(&self) -> bool {
        self.0 == 0
    }

    /// Star strip such as `★★★½☆`.
    pub fn stars(&self) -> String {
        let full = usize::from(self.0 / 2);
        let half = usize::from(self.0 % 2);
        let empty = 5 - full - half;
        format!("{}{}{}", "★".repeat(full), "½".repeat(half), "☆".repeat(empty))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{:.1}", self.value())
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Option::<f64>::deserialize(deserializer)?;
        match raw {
            Some(value) => Rating::new(value).map_err(serde::de::Error::custom),
            None => Ok(Rating::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_steps() {
        let rating = Rating::new(3.5).unwrap();
        assert_eq!(rating.value(), 3.5);
        assert!(!rating.is_whole());
        assert_eq!(rating.to_string(), "3.5");
        assert_eq!(rating.stars(), "★★★½☆");
    }

    #[test]
    fn test_rejects_off_scale_values() {
        assert!(Rating::new(5.5).is_err());
        assert!(Rating::new(-0.5).is_err());
        assert!(Rating::new(2.25).is_err());
        assert!(Rating::new(f64::NAN).is_err());
        assert!(Rating::whole(6).is_err());
    }

    #[test]
    fn test_whole_ratings() {
        let rating = Rating::whole(4).unwrap();
        assert_eq!(rating.value(), 4.0);
        assert_eq!(rating.to_string(), "4");
        assert_eq!(Rating::whole(0).unwrap(), Rating::default());
    }

    #[test]
    fn test_deserialize_null_as_unrated() {
        let rating: Rating = serde_json::from_str("null").unwrap();
        assert!(rating.is_unrated());
        let rating: Rating = serde_json::from_str("4.5").unwrap();
        assert_eq!(rating.value(), 4.5);
    }
}
