//! Climate variables and seasons addressable in the projection dataset.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

// ── Climate Variable ──────────────────────────────────────────

/// Canonical climate variable known to the key map.
///
/// The set is closed: the classifier can only ever emit one of these,
/// so every resolved variable is addressable through the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateVariable {
    #[serde(rename = "Heating Degree Days")]
    HeatingDegreeDays,
    #[serde(rename = "Cooling Degree Days")]
    CoolingDegreeDays,
    #[serde(rename = "Days Without Precipitation")]
    DaysWithoutPrecipitation,
    #[serde(rename = "Annual Precipitation")]
    AnnualPrecipitation,
    #[serde(rename = "Wind Speed")]
    WindSpeed,
    #[serde(rename = "Average Maximum Temperature")]
    AverageMaximumTemperature,
    #[serde(rename = "Average Minimum Temperature")]
    AverageMinimumTemperature,
    #[serde(rename = "Daily Max Heat Index")]
    DailyMaxHeatIndex,
    #[serde(rename = "Seasonal Max Heat Index")]
    SeasonalMaxHeatIndex,
    #[serde(rename = "Days with Max Heat Index Over 95")]
    HeatIndexDaysOver95,
    #[serde(rename = "Days with Max Heat Index Over 105")]
    HeatIndexDaysOver105,
    #[serde(rename = "Fire Weather Index")]
    FireWeatherIndex,
}

impl ClimateVariable {
    pub const ALL: [ClimateVariable; 12] = [
        Self::HeatingDegreeDays,
        Self::CoolingDegreeDays,
        Self::DaysWithoutPrecipitation,
        Self::AnnualPrecipitation,
        Self::WindSpeed,
        Self::AverageMaximumTemperature,
        Self::AverageMinimumTemperature,
        Self::DailyMaxHeatIndex,
        Self::SeasonalMaxHeatIndex,
        Self::HeatIndexDaysOver95,
        Self::HeatIndexDaysOver105,
        Self::FireWeatherIndex,
    ];

    /// Canonical display name, as used in the key map.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HeatingDegreeDays => "Heating Degree Days",
            Self::CoolingDegreeDays => "Cooling Degree Days",
            Self::DaysWithoutPrecipitation => "Days Without Precipitation",
            Self::AnnualPrecipitation => "Annual Precipitation",
            Self::WindSpeed => "Wind Speed",
            Self::AverageMaximumTemperature => "Average Maximum Temperature",
            Self::AverageMinimumTemperature => "Average Minimum Temperature",
            Self::DailyMaxHeatIndex => "Daily Max Heat Index",
            Self::SeasonalMaxHeatIndex => "Seasonal Max Heat Index",
            Self::HeatIndexDaysOver95 => "Days with Max Heat Index Over 95",
            Self::HeatIndexDaysOver105 => "Days with Max Heat Index Over 105",
            Self::FireWeatherIndex => "Fire Weather Index",
        }
    }

    /// Top-level label of this variable in the dataset document.
    ///
    /// Only the two temperature averages are stored under a different
    /// label. Fire Weather Index has three labels of its own, resolved
    /// per subtype by the extractor.
    pub fn dataset_label(&self) -> &'static str {
        match self {
            Self::AverageMaximumTemperature => "Maximum Avg Temperature",
            Self::AverageMinimumTemperature => "Minimum Avg Temperature",
            other => other.name(),
        }
    }
}

impl std::fmt::Display for ClimateVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClimateVariable {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ParseError::Variable(s.to_string()))
    }
}

// ── Season ────────────────────────────────────────────────────

/// Seasonal aggregation window. Dataset keys match these names exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Annual,
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Order in which season names are searched for in query text.
    pub const DETECTION_ORDER: [Season; 5] = [
        Self::Winter,
        Self::Spring,
        Self::Summer,
        Self::Autumn,
        Self::Annual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "Annual",
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|season| season.as_str() == s)
            .ok_or_else(|| ParseError::Season(s.to_string()))
    }
}
