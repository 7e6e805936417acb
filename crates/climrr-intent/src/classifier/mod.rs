//! Rule-based intent classifier.
//!
//! Converts lowercased query text into a structured [`Intent`]: variable
//! (with a confidence tag), season, time horizon, emission pathway and the
//! Fire Weather Index subtype.
//!
//! Variable detection is an ordered chain of matchers; the first one that
//! produces a result wins and later tiers never run:
//! 1. **Fire weather**: `fire weather` / `fwi`, plus subtype detection.
//! 2. **Exact name**: canonical variable names, longest first.
//! 3. **Phrasing**: regexes for common rewordings, tagged exact.
//! 4. **Synonym**: single loose keywords, tagged ambiguous.

pub mod rules;

use std::sync::LazyLock;

use climrr_protocol::{
    ClimateVariable, EmissionPathway, FwiSubtype, Intent, MatchType, Season, TimeHorizon,
};

pub use rules::{ExactNameRule, FireWeatherRule, PhrasingRule, SynonymRule};

/// A variable identified by one matcher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariableMatch {
    pub variable: ClimateVariable,
    pub match_type: MatchType,
    pub fwi_subtype: Option<FwiSubtype>,
}

impl VariableMatch {
    pub fn exact(variable: ClimateVariable) -> Self {
        Self {
            variable,
            match_type: MatchType::Exact,
            fwi_subtype: None,
        }
    }

    pub fn ambiguous(variable: ClimateVariable) -> Self {
        Self {
            variable,
            match_type: MatchType::Ambiguous,
            fwi_subtype: None,
        }
    }
}

/// One tier of variable detection.
pub trait VariableMatcher: Send + Sync {
    /// Name of this tier (for logging).
    fn tier_name(&self) -> &str;

    /// Try to identify a variable in lowercased text.
    /// Returns None if this tier has nothing to say.
    fn match_variable(&self, text: &str) -> Option<VariableMatch>;
}

/// Ordered list of matchers; the first hit wins.
pub struct MatcherChain {
    tiers: Vec<Box<dyn VariableMatcher>>,
}

impl MatcherChain {
    pub fn new(tiers: Vec<Box<dyn VariableMatcher>>) -> Self {
        Self { tiers }
    }

    /// The four built-in tiers in precedence order.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Box::new(FireWeatherRule),
            Box::new(ExactNameRule::new()),
            Box::new(PhrasingRule),
            Box::new(SynonymRule::new()),
        ])
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn match_variable(&self, text: &str) -> Option<VariableMatch> {
        self.tiers.iter().find_map(|tier| {
            let hit = tier.match_variable(text)?;
            tracing::debug!(
                tier = tier.tier_name(),
                variable = %hit.variable,
                match_type = ?hit.match_type,
                "variable matched"
            );
            Some(hit)
        })
    }
}

impl Default for MatcherChain {
    fn default() -> Self {
        Self::with_defaults()
    }
}

static DEFAULT_CHAIN: LazyLock<MatcherChain> = LazyLock::new(MatcherChain::with_defaults);

/// Parse a lowercased query into an [`Intent`].
///
/// Never fails: anything not found is left as `None` / `MatchType::Missing`.
/// Pure function of the text, so the extractor can re-run it freely.
pub fn parse_raw_intent(user_query_lower: &str) -> Intent {
    let mut intent = Intent::default();

    if let Some(hit) = DEFAULT_CHAIN.match_variable(user_query_lower) {
        intent.variable = Some(hit.variable);
        intent.variable_match_type = hit.match_type;
        intent.fwi_subtype = hit.fwi_subtype;
    }

    intent.season = detect_season(user_query_lower);
    intent.scenario_rcp = detect_pathway(user_query_lower);
    intent.scenario_time = detect_time_horizon(user_query_lower);
    intent
}

/// First season name found in the text, in [`Season::DETECTION_ORDER`].
pub fn detect_season(text: &str) -> Option<Season> {
    Season::DETECTION_ORDER
        .into_iter()
        .find(|s| text.contains(&s.as_str().to_lowercase()))
}

/// Explicit emission pathway. RCP8.5 is checked first.
pub fn detect_pathway(text: &str) -> Option<EmissionPathway> {
    if text.contains("rcp 8.5") || text.contains("8.5") {
        Some(EmissionPathway::Rcp85)
    } else if text.contains("rcp 4.5") || text.contains("4.5") {
        Some(EmissionPathway::Rcp45)
    } else {
        None
    }
}

/// Time horizon keywords: end-century, then mid-century, then historical.
pub fn detect_time_horizon(text: &str) -> Option<TimeHorizon> {
    if mentions_end_century(text) {
        Some(TimeHorizon::EndCentury)
    } else if text.contains("mid") || text.contains("2050") {
        Some(TimeHorizon::MidCentury)
    } else if text.contains("historical") || text.contains("past") {
        Some(TimeHorizon::Historical)
    } else {
        None
    }
}

pub(crate) fn mentions_end_century(text: &str) -> bool {
    text.contains("end") || text.contains("2100")
}
