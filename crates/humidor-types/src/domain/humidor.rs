use serde::{Deserialize, Serialize};

use crate::{HumidorId, lenient_text};

/// A storage box (or cabinet, or tupperdor) holding cigars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Humidor {
    pub id: HumidorId,
    pub name: String,

    /// Free-text capacity such as "150 count" or "Large (300 ct)".
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Degrees Fahrenheit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<f64>,
    /// Relative humidity, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,

    /// Sensor that reports temp/humidity for this humidor, if any.
    #[serde(
        default,
        alias = "goveeDeviceId",
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub sensor_device_id: Option<String>,
}

/// Where a humidor's readings come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvironmentSource<'a> {
    Manual {
        temp: Option<f64>,
        humidity: Option<f64>,
    },
    Sensor {
        device_id: &'a str,
        temp: Option<f64>,
        humidity: Option<f64>,
    },
}

impl Humidor {
    pub fn new(id: HumidorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            size: None,
            temp: None,
            humidity: None,
            sensor_device_id: None,
        }
    }

    /// Numeric capacity parsed from `size`, if it names one.
    pub fn capacity(&self) -> Option<u32> {
        self.size.as_deref().and_then(parse_capacity)
    }

    pub fn environment(&self) -> EnvironmentSource<'_> {
        match self.sensor_device_id.as_deref() {
            Some(device_id) => EnvironmentSource::Sensor {
                device_id,
                temp: self.temp,
                humidity: self.humidity,
            },
            None => EnvironmentSource::Manual {
                temp: self.temp,
                humidity: self.humidity,
            },
        }
    }
}

/// First integer in a capacity descriptor; thousands separators are allowed.
///
/// `"150 count"` → 150, `"Large (1,000 ct)"` → 1000, `"desktop"` → None.
pub fn parse_capacity(descriptor: &str) -> Option<u32> {
    let start = descriptor.find(|c: char| c.is_ascii_digit())?;
    let digits: String = descriptor[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();

    digits.parse::<u32>().ok().filter(|n| *n > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("150 count"), Some(150));
        assert_eq!(parse_capacity("Large (300 ct)"), Some(300));
        assert_eq!(parse_capacity("1,000 cigar cabinet"), Some(1000));
        assert_eq!(parse_capacity("desktop"), None);
        assert_eq!(parse_capacity("0"), None);
        assert_eq!(parse_capacity(""), None);
    }

    #[test]
    fn test_environment_source() {
        let mut humidor = Humidor::new(HumidorId::new("h1"), "Desktop");
        humidor.temp = Some(68.0);
        humidor.humidity = Some(69.0);
        assert_eq!(
            humidor.environment(),
            EnvironmentSource::Manual {
                temp: Some(68.0),
                humidity: Some(69.0)
            }
        );

        humidor.sensor_device_id = Some("H5075-AB12".to_string());
        assert!(matches!(
            humidor.environment(),
            EnvironmentSource::Sensor {
                device_id: "H5075-AB12",
                ..
            }
        ));
    }

    #[test]
    fn test_deserialize_legacy_sensor_field() {
        let humidor: Humidor = serde_json::from_str(
            r#"{"id":"h1","name":"Cabinet","size":"500 count","goveeDeviceId":"H5179"}"#,
        )
        .unwrap();
        assert_eq!(humidor.sensor_device_id.as_deref(), Some("H5179"));
        assert_eq!(humidor.capacity(), Some(500));
    }
}
