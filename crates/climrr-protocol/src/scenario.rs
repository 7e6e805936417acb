//! Projection scenarios: time horizon plus emission pathway.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseError;

/// Time horizon of a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeHorizon {
    Historical,
    #[serde(rename = "Mid-Century")]
    MidCentury,
    #[serde(rename = "End-Century")]
    EndCentury,
}

impl TimeHorizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Historical => "Historical",
            Self::MidCentury => "Mid-Century",
            Self::EndCentury => "End-Century",
        }
    }
}

impl std::fmt::Display for TimeHorizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representative Concentration Pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionPathway {
    #[serde(rename = "RCP4.5")]
    Rcp45,
    #[serde(rename = "RCP8.5")]
    Rcp85,
}

impl EmissionPathway {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rcp45 => "RCP4.5",
            Self::Rcp85 => "RCP8.5",
        }
    }

    /// Node name of this pathway inside a dataset season block.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Rcp45 => "rcp45",
            Self::Rcp85 => "rcp85",
        }
    }
}

impl std::fmt::Display for EmissionPathway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete scenario column group.
///
/// Serialized as its display string (`"Historical"`, `"Mid-Century RCP8.5"`),
/// which is also the scenario dimension of the key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Scenario {
    Historical,
    Future {
        horizon: FutureHorizon,
        pathway: EmissionPathway,
    },
}

/// Horizons that only apply to projected (non-historical) scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FutureHorizon {
    #[serde(rename = "Mid-Century")]
    MidCentury,
    #[serde(rename = "End-Century")]
    EndCentury,
}

impl FutureHorizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MidCentury => "Mid-Century",
            Self::EndCentury => "End-Century",
        }
    }

    /// Node name of this horizon inside a dataset pathway block.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MidCentury => "mid_century",
            Self::EndCentury => "end_century",
        }
    }
}

impl Scenario {
    pub const fn future(horizon: FutureHorizon, pathway: EmissionPathway) -> Self {
        Self::Future { horizon, pathway }
    }

    pub fn is_historical(&self) -> bool {
        matches!(self, Self::Historical)
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Historical => f.write_str("Historical"),
            Self::Future { horizon, pathway } => {
                write!(f, "{} {}", horizon.as_str(), pathway.as_str())
            }
        }
    }
}

impl FromStr for Scenario {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Historical" {
            return Ok(Self::Historical);
        }
        let err = || ParseError::Scenario(s.to_string());
        let (horizon, pathway) = s.split_once(' ').ok_or_else(err)?;
        let horizon = match horizon {
            "Mid-Century" => FutureHorizon::MidCentury,
            "End-Century" => FutureHorizon::EndCentury,
            _ => return Err(err()),
        };
        let pathway = match pathway {
            "RCP4.5" => EmissionPathway::Rcp45,
            "RCP8.5" => EmissionPathway::Rcp85,
            _ => return Err(err()),
        };
        Ok(Self::future(horizon, pathway))
    }
}

impl From<Scenario> for String {
    fn from(scenario: Scenario) -> Self {
        scenario.to_string()
    }
}

impl TryFrom<String> for Scenario {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_display_strings() {
        assert_eq!(Scenario::Historical.to_string(), "Historical");
        assert_eq!(
            Scenario::future(FutureHorizon::EndCentury, EmissionPathway::Rcp85).to_string(),
            "End-Century RCP8.5"
        );
    }

    #[test]
    fn scenario_serializes_as_string() {
        let scenario = Scenario::future(FutureHorizon::MidCentury, EmissionPathway::Rcp45);
        let json = serde_json::to_string(&scenario).unwrap();
        assert_eq!(json, r#""Mid-Century RCP4.5""#);
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scenario);
    }

    #[test]
    fn malformed_scenarios_are_rejected() {
        assert!("Mid-Century".parse::<Scenario>().is_err());
        assert!("Mid-Century RCP2.6".parse::<Scenario>().is_err());
        assert!("historical".parse::<Scenario>().is_err());
        assert!(serde_json::from_str::<Scenario>(r#""Late RCP8.5""#).is_err());
    }

    #[test]
    fn dataset_codes() {
        assert_eq!(EmissionPathway::Rcp85.code(), "rcp85");
        assert_eq!(FutureHorizon::EndCentury.code(), "end_century");
    }

    #[test]
    fn time_horizon_serialization() {
        assert_eq!(
            serde_json::to_string(&TimeHorizon::MidCentury).unwrap(),
            r#""Mid-Century""#
        );
    }
}
