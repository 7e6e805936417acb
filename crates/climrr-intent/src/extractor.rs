//! Data extraction: intent → key map → dataset values.
//!
//! Re-derives the intent from the query, expands it into one or more
//! scenarios (comparison queries pull a historical baseline alongside the
//! projection), resolves each scenario to a column key and reads the value
//! out of the dataset. Scenarios that cannot be resolved are skipped.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use climrr_protocol::{
    ClimateVariable, EmissionPathway, ExtractedData, ExtractedItem, ExtractedPayload,
    FutureHorizon, FwiSubtype, ResolvedIntent, Scenario, Season,
};

use crate::classifier::{self, detect_pathway, mentions_end_century};
use crate::dataset::Dataset;
use crate::key_map;

static RE_HISTORICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"historical|past|history|baseline").unwrap());

static RE_COMPARISON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"compare|contrast|difference|relative|vs\b|versus").unwrap()
});

/// Words that imply a projection even without an explicit pathway.
const FUTURE_CUES: &[&str] = &["mid", "end", "project", "anticipate", "forecast"];

/// Fire Weather Index products: subtype, dataset label, CSV key suffix.
const FWI_PRODUCTS: &[(FwiSubtype, &str, &str)] = &[
    (
        FwiSubtype::Percentile95,
        "Fire Weather Index (95th Percentile)",
        "_95",
    ),
    (FwiSubtype::Class, "Fire Weather Index Class", "_NC"),
    (FwiSubtype::Average, "Fire Weather Index (Average)", "_Avg"),
];

/// Result of an extraction attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// At least one value was found.
    Resolved(ExtractedPayload),
    /// Nothing could be resolved against the dataset.
    Unresolved,
}

impl Extraction {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn payload(&self) -> Option<&ExtractedPayload> {
        match self {
            Self::Resolved(payload) => Some(payload),
            Self::Unresolved => None,
        }
    }

    pub fn into_payload(self) -> Option<ExtractedPayload> {
        match self {
            Self::Resolved(payload) => Some(payload),
            Self::Unresolved => None,
        }
    }
}

/// Scenarios a lowercased query refers to, historical first.
///
/// Falls back to `[Historical]` when nothing scenario-like is mentioned.
/// An implied projection without an explicit pathway uses RCP4.5.
pub fn detect_scenarios(text: &str) -> Vec<Scenario> {
    detect_scenarios_with_default(text, EmissionPathway::Rcp45)
}

/// Like [`detect_scenarios`], with the pathway used for implied projections.
pub fn detect_scenarios_with_default(text: &str, implied: EmissionPathway) -> Vec<Scenario> {
    let horizon = if mentions_end_century(text) {
        FutureHorizon::EndCentury
    } else {
        FutureHorizon::MidCentury
    };

    let future = match detect_pathway(text) {
        Some(pathway) => Some(Scenario::future(horizon, pathway)),
        None if FUTURE_CUES.iter().any(|cue| text.contains(cue)) => {
            Some(Scenario::future(horizon, implied))
        }
        None => None,
    };

    let mut scenarios = Vec::new();
    if RE_HISTORICAL.is_match(text) {
        scenarios.push(Scenario::Historical);
    }
    if let Some(future) = future {
        scenarios.push(future);
    }

    // Comparing a projection against nothing: use history as the baseline
    if future.is_some()
        && RE_COMPARISON.is_match(text)
        && !scenarios.contains(&Scenario::Historical)
    {
        scenarios.insert(0, Scenario::Historical);
    }

    if scenarios.is_empty() {
        scenarios.push(Scenario::Historical);
    }

    let mut seen = HashSet::new();
    scenarios.retain(|s| seen.insert(*s));
    // Stable: relative order of projections is kept
    scenarios.sort_by_key(|s| !s.is_historical());
    scenarios
}

/// Extract the values a query asks for.
///
/// `_previous_response` is reserved for the prior assistant turn and is
/// currently ignored.
pub fn extract_relevant_data(
    user_query: &str,
    dataset: &Dataset,
    _previous_response: &str,
) -> Extraction {
    let lower = user_query.to_lowercase();
    let intent = classifier::parse_raw_intent(&lower);
    let season = intent.season.unwrap_or(Season::Annual);
    let implied = intent
        .variable
        .map(|variable| key_map::implied_pathway(variable, season))
        .unwrap_or(EmissionPathway::Rcp45);
    let scenarios = detect_scenarios_with_default(&lower, implied);

    tracing::debug!(
        variable = ?intent.variable,
        season = %season,
        scenarios = ?scenarios,
        "extracting"
    );

    let mut items = Vec::new();
    if let Some(variable) = intent.variable {
        let fwi_subtype = intent.fwi_subtype.unwrap_or(FwiSubtype::All);
        for scenario in &scenarios {
            let Some(base_key) = key_map::lookup(variable, season, *scenario) else {
                tracing::debug!(%variable, %season, %scenario, "no column for scenario, skipping");
                continue;
            };
            collect_items(
                dataset,
                variable,
                fwi_subtype,
                season,
                *scenario,
                base_key,
                &mut items,
            );
        }
    }

    let count = items.len();
    let Some(extracted_data) = ExtractedData::from_items(items) else {
        tracing::info!(variable = ?intent.variable, %season, "nothing extracted");
        return Extraction::Unresolved;
    };
    tracing::debug!(count, "extracted items");

    Extraction::Resolved(ExtractedPayload::new(
        ResolvedIntent {
            variable: intent.variable,
            season,
            scenario: scenarios,
        },
        extracted_data,
    ))
}

/// Read every dataset value one resolved column stands for.
fn collect_items(
    dataset: &Dataset,
    variable: ClimateVariable,
    fwi_subtype: FwiSubtype,
    season: Season,
    scenario: Scenario,
    base_key: &str,
    items: &mut Vec<ExtractedItem>,
) {
    // (dataset label, csv key, name reported on the item)
    let targets: Vec<(&str, String, &str)> = if variable == ClimateVariable::FireWeatherIndex {
        FWI_PRODUCTS
            .iter()
            .filter(|(subtype, _, _)| fwi_subtype == FwiSubtype::All || fwi_subtype == *subtype)
            .map(|(_, label, suffix)| (*label, format!("{base_key}{suffix}"), *label))
            .collect()
    } else {
        vec![(variable.dataset_label(), base_key.to_string(), variable.name())]
    };

    for (label, csv_key, reported) in targets {
        if let Some(value) = dataset.value(label, season, scenario) {
            items.push(ExtractedItem {
                variable: reported.to_string(),
                season,
                scenario,
                csv_key,
                value: value.clone(),
            });
        }
    }
}
