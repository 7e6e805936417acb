use serde::{Deserialize, Serialize};

use crate::scenario::{EmissionPathway, TimeHorizon};
use crate::variable::{ClimateVariable, Season};

/// How confidently the variable was identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// No variable could be identified.
    #[default]
    Missing,
    /// Matched by name, a dedicated phrasing, or the fire weather rule.
    Exact,
    /// Matched only through a loose synonym; worth confirming.
    Ambiguous,
}

/// Which Fire Weather Index product the query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FwiSubtype {
    #[serde(rename = "95")]
    Percentile95,
    Class,
    Average,
    /// No subtype named; every available product is returned.
    All,
}

/// Structured intent parsed from a single query.
///
/// Built fresh per query and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intent {
    pub variable: Option<ClimateVariable>,
    #[serde(default)]
    pub variable_match_type: MatchType,
    pub season: Option<Season>,
    pub scenario_time: Option<TimeHorizon>,
    pub scenario_rcp: Option<EmissionPathway>,
    /// Only set when the variable is Fire Weather Index.
    pub fwi_subtype: Option<FwiSubtype>,
}

impl Intent {
    /// True when the query explicitly asks for a projection but has not
    /// pinned down both the horizon and the pathway.
    pub fn scenario_incomplete(&self) -> bool {
        if self.scenario_time == Some(TimeHorizon::Historical) {
            return false;
        }
        self.scenario_time.is_none() || self.scenario_rcp.is_none()
    }
}
