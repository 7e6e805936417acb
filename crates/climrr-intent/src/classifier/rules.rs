//! The four variable-detection tiers.

use regex::Regex;
use std::sync::LazyLock;

use climrr_protocol::{ClimateVariable, FwiSubtype, MatchType};

use super::{VariableMatch, VariableMatcher};

// ── Tier 1: Fire Weather Index ─────────────────────────────────

static RE_FIRE_WEATHER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fire\s+weather|\bfwi\b").unwrap());

// Subtype patterns, checked in order
static FWI_SUBTYPE_PATTERNS: LazyLock<Vec<(Regex, FwiSubtype)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"95|percentile").unwrap(), FwiSubtype::Percentile95),
        (
            Regex::new(r"class|category|classification").unwrap(),
            FwiSubtype::Class,
        ),
        (Regex::new(r"average|avg").unwrap(), FwiSubtype::Average),
    ]
});

/// Matches any mention of fire weather and picks the requested subtype.
pub struct FireWeatherRule;

impl VariableMatcher for FireWeatherRule {
    fn tier_name(&self) -> &str {
        "fire_weather"
    }

    fn match_variable(&self, text: &str) -> Option<VariableMatch> {
        if !RE_FIRE_WEATHER.is_match(text) {
            return None;
        }
        Some(VariableMatch {
            variable: ClimateVariable::FireWeatherIndex,
            match_type: MatchType::Exact,
            fwi_subtype: Some(detect_fwi_subtype(text)),
        })
    }
}

/// Which FWI product the text asks for; `All` when none is named.
pub fn detect_fwi_subtype(text: &str) -> FwiSubtype {
    FWI_SUBTYPE_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, subtype)| *subtype)
        .unwrap_or(FwiSubtype::All)
}

// ── Tier 2: Exact canonical name ───────────────────────────────

/// Contiguous, case-insensitive match on a canonical variable name.
///
/// Names are tried longest first so that a name contained in a longer one
/// cannot shadow it.
pub struct ExactNameRule {
    names: Vec<(String, ClimateVariable)>,
}

impl ExactNameRule {
    pub fn new() -> Self {
        let mut names: Vec<(String, ClimateVariable)> = ClimateVariable::ALL
            .into_iter()
            .filter(|v| *v != ClimateVariable::FireWeatherIndex)
            .map(|v| (v.name().to_lowercase(), v))
            .collect();
        names.sort_by_key(|(name, _)| std::cmp::Reverse(name.len()));
        Self { names }
    }
}

impl Default for ExactNameRule {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableMatcher for ExactNameRule {
    fn tier_name(&self) -> &str {
        "exact_name"
    }

    fn match_variable(&self, text: &str) -> Option<VariableMatch> {
        self.names
            .iter()
            .find(|(name, _)| text.contains(name.as_str()))
            .map(|(_, variable)| VariableMatch::exact(*variable))
    }
}

// ── Tier 3: Known phrasings ────────────────────────────────────

// Days Without Precipitation is listed here so it wins over the generic
// "precip"/"rain" synonyms in tier 4.
static PHRASING_PATTERNS: LazyLock<Vec<(ClimateVariable, Vec<Regex>)>> = LazyLock::new(|| {
    let compile = |patterns: &[&str]| -> Vec<Regex> {
        patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
    };
    vec![
        (
            ClimateVariable::AverageMaximumTemperature,
            compile(&[
                r"average\s+.*maximum\s+temp",
                r"avg\s+.*max\s+temp",
                r"max\s+avg\s+temp",
            ]),
        ),
        (
            ClimateVariable::AverageMinimumTemperature,
            compile(&[
                r"average\s+.*minimum\s+temp",
                r"avg\s+.*min\s+temp",
                r"min\s+avg\s+temp",
            ]),
        ),
        (
            ClimateVariable::DaysWithoutPrecipitation,
            compile(&[
                r"days\s+without\s+precip",
                r"without\s+precip",
                r"without\s+any\s+precip",
                r"no\s+precip",
                r"days\s+without\s+rain",
            ]),
        ),
    ]
});

/// Regex phrasings that are specific enough to count as exact.
pub struct PhrasingRule;

impl VariableMatcher for PhrasingRule {
    fn tier_name(&self) -> &str {
        "phrasing"
    }

    fn match_variable(&self, text: &str) -> Option<VariableMatch> {
        PHRASING_PATTERNS
            .iter()
            .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(text)))
            .map(|(variable, _)| VariableMatch::exact(*variable))
    }
}

// ── Tier 4: Loose synonyms ─────────────────────────────────────

// Listed in tie-break order; the rule sorts by length, longest first.
const SYNONYMS: &[(&str, ClimateVariable)] = &[
    ("rain", ClimateVariable::AnnualPrecipitation),
    ("precip", ClimateVariable::AnnualPrecipitation),
    ("dry", ClimateVariable::DaysWithoutPrecipitation),
    ("heat index", ClimateVariable::DailyMaxHeatIndex),
    ("wind", ClimateVariable::WindSpeed),
    ("maximum", ClimateVariable::AverageMaximumTemperature),
    ("max", ClimateVariable::AverageMaximumTemperature),
    ("high", ClimateVariable::AverageMaximumTemperature),
    ("minimum", ClimateVariable::AverageMinimumTemperature),
    ("min", ClimateVariable::AverageMinimumTemperature),
    ("low", ClimateVariable::AverageMinimumTemperature),
    // Catch-all for any temperature question
    ("temp", ClimateVariable::AverageMaximumTemperature),
];

/// Single-keyword guesses. Always tagged ambiguous so the orchestrator
/// asks the user to confirm.
pub struct SynonymRule {
    synonyms: Vec<(&'static str, ClimateVariable)>,
}

impl SynonymRule {
    pub fn new() -> Self {
        let mut synonyms = SYNONYMS.to_vec();
        // Stable sort keeps table order among equal lengths
        synonyms.sort_by_key(|(keyword, _)| std::cmp::Reverse(keyword.len()));
        Self { synonyms }
    }
}

impl Default for SynonymRule {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableMatcher for SynonymRule {
    fn tier_name(&self) -> &str {
        "synonym"
    }

    fn match_variable(&self, text: &str) -> Option<VariableMatch> {
        self.synonyms
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map(|(_, variable)| VariableMatch::ambiguous(*variable))
    }
}
