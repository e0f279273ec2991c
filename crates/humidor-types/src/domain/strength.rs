use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Five-point intensity scale, ordered mildest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Strength {
    Mild,
    MildMedium,
    Medium,
    MediumFull,
    Full,
}

impl Strength {
    /// Every level in display order (Mild → Full).
    pub const ALL: [Strength; 5] = [
        Strength::Mild,
        Strength::MildMedium,
        Strength::Medium,
        Strength::MediumFull,
        Strength::Full,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Strength::Mild => "Mild",
            Strength::MildMedium => "Mild-Medium",
            Strength::Medium => "Medium",
            Strength::MediumFull => "Medium-Full",
            Strength::Full => "Full",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strength {
    type Err = Error;

    /// Case-insensitive; spaces and underscores count as hyphens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "mild" => Ok(Strength::Mild),
            "mild-medium" => Ok(Strength::MildMedium),
            "medium" => Ok(Strength::Medium),
            "medium-full" => Ok(Strength::MediumFull),
            "full" => Ok(Strength::Full),
            _ => Err(Error::InvalidStrength(s.to_string())),
        }
    }
}

impl Serialize for Strength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Strength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
