//! Clarification orchestrator.
//!
//! Decides, per turn, whether to ask the user a follow-up question or to go
//! ahead with extraction. Stateless: the caller carries `turn_count` between
//! turns. Once the turn limit is reached, extraction runs with defaults no
//! matter how incomplete the intent is.

use serde::Deserialize;

use climrr_protocol::{Intent, MatchType, Response};

use crate::classifier::parse_raw_intent;
use crate::dataset::Dataset;
use crate::extractor::{Extraction, extract_relevant_data};

/// Variables offered when none could be identified.
pub const VARIABLE_MENU: &[&str] = &[
    "Heating Degree Days",
    "Cooling Degree Days",
    "Average Maximum Temperature",
    "Average Minimum Temperature",
    "Wind Speed",
    "Fire Weather Index (95th percentile)",
    "Fire Weather Index (Class)",
    "Heat Index Days above 95F",
    "Heat Index Days above 105F",
    "Heat Index Days above 115F",
    "Heat Index Days above 125F",
    "Daily Max Heat Index",
    "Seasonal Max Heat Index",
    "Days without Precipitation",
    "Total Precipitation",
    "Average Daily Precipitation",
    "Maximum Daily Precipitation",
];

pub const SEASON_QUESTION: &str =
    "Which season do you prefer for this question? Options are Annual, Winter, Spring, Summer, Autumn.";

pub const SCENARIO_QUESTION: &str = "Which scenario and time period? Options: like historical, mid-century/end-century RCP4.5/RCP8.5? (for FIRE WEATHER INDEX and HEAT INDEX only RCP 8.5)";

pub const FORCED_PREFIX: &str = "Proceeding with current information... ";

const SUCCESS_MESSAGE: &str = "Relevant data extracted.";
const FALLBACK_MESSAGE: &str = "Full data provided.";

/// How long to keep asking before answering with defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ClarificationPolicy {
    /// Turns at or beyond this count skip all clarification checks.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
}

fn default_max_turns() -> u32 {
    2
}

impl Default for ClarificationPolicy {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
        }
    }
}

/// Clarification loop driver for a given policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orchestrator {
    policy: ClarificationPolicy,
}

impl Orchestrator {
    pub fn new(policy: ClarificationPolicy) -> Self {
        Self { policy }
    }

    /// Run one turn: ask a question, or extract and package the answer.
    pub fn process(&self, user_query: &str, dataset: &Dataset, turn_count: u32) -> Response {
        let forced = turn_count >= self.policy.max_turns;

        if !forced {
            let intent = parse_raw_intent(&user_query.to_lowercase());
            if let Some(question) = clarifying_question(&intent) {
                tracing::info!(turn_count, question = %question, "clarification needed");
                return Response::clarification(question);
            }
        } else {
            tracing::info!(turn_count, "turn limit reached, proceeding with defaults");
        }

        let prefix = if forced { FORCED_PREFIX } else { "" };
        match extract_relevant_data(user_query, dataset, "") {
            Extraction::Resolved(payload) => {
                Response::success(format!("{prefix}{SUCCESS_MESSAGE}"), payload)
            }
            Extraction::Unresolved => {
                tracing::info!("extraction unresolved, returning full dataset");
                Response::fallback(format!("{prefix}{FALLBACK_MESSAGE}"), dataset.raw().clone())
            }
        }
    }
}

/// The first clarification the intent needs, if any.
///
/// Checks run in a fixed order and the first failure wins: ambiguous
/// variable, missing variable, missing season, incomplete scenario.
pub fn clarifying_question(intent: &Intent) -> Option<String> {
    match (intent.variable, intent.variable_match_type) {
        (Some(variable), MatchType::Ambiguous) => {
            return Some(format!("Do you mean {variable}? Reply Yes or No."));
        }
        (None, _) => {
            return Some(format!(
                "I couldn't identify the specific climate variable. Available options include: {}. Which one are you interested in?",
                VARIABLE_MENU.join(", ")
            ));
        }
        _ => {}
    }

    if intent.season.is_none() {
        return Some(SEASON_QUESTION.to_string());
    }

    if intent.scenario_incomplete() {
        return Some(SCENARIO_QUESTION.to_string());
    }

    None
}

/// Run one clarification turn with the default policy (two turns).
pub fn process_query_with_clarification(
    user_query: &str,
    dataset: &Dataset,
    turn_count: u32,
) -> Response {
    Orchestrator::default().process(user_query, dataset, turn_count)
}
