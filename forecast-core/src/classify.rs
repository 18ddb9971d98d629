use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse temperature label reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureClass {
    Hot,
    Moderate,
    Cold,
}

impl TemperatureClass {
    /// Above 80 is hot, above 60 up to and including 80 is moderate, anything else is cold.
    pub fn from_temperature(temperature: i64) -> Self {
        match temperature {
            t if t > 80 => TemperatureClass::Hot,
            61..=80 => TemperatureClass::Moderate,
            _ => TemperatureClass::Cold,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureClass::Hot => "hot",
            TemperatureClass::Moderate => "moderate",
            TemperatureClass::Cold => "cold",
        }
    }
}

impl fmt::Display for TemperatureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify_temperature(temperature: i64) -> TemperatureClass {
    TemperatureClass::from_temperature(temperature)
}
