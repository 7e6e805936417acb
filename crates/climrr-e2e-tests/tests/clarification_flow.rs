//! E2E tests for the multi-turn clarification loop.
//!
//! The caller carries `turn_count`; each turn re-submits the accumulated
//! question text, as a conversational front end would.

mod helpers;

use serde_json::json;

use climrr_intent::clarify::{FORCED_PREFIX, SCENARIO_QUESTION, SEASON_QUESTION};
use climrr_intent::{ClarificationPolicy, Orchestrator, process_query_with_clarification};
use climrr_protocol::{ResponseData, ResponseStatus};

use helpers::{items, site_dataset, site_document};

#[test]
fn e2e_conversation_converges_on_answer() {
    let dataset = site_dataset();

    // Turn 0: only a loose keyword
    let resp = process_query_with_clarification("how hot does it get", &dataset, 0);
    assert_eq!(resp.status, ResponseStatus::ClarificationNeeded);
    assert!(resp.message.contains("I couldn't identify"));

    // Turn 1: variable named, season missing
    let resp =
        process_query_with_clarification("average maximum temperature please", &dataset, 1);
    assert_eq!(resp.status, ResponseStatus::ClarificationNeeded);
    assert_eq!(resp.message, SEASON_QUESTION);

    // Turn 1 again with everything: answered without the forced prefix
    let resp = process_query_with_clarification(
        "average maximum temperature, summer, historical",
        &dataset,
        1,
    );
    assert_eq!(resp.status, ResponseStatus::Success);
    assert!(!resp.message.starts_with(FORCED_PREFIX));
    let items = items(&resp);
    assert_eq!(items[0].csv_key, "tempmax_seas_hist_summer");
    assert_eq!(items[0].value, json!(88.1));
}

#[test]
fn e2e_ambiguity_asked_before_missing_season() {
    let resp = process_query_with_clarification("will there be more rain", &site_dataset(), 0);
    assert_eq!(resp.status, ResponseStatus::ClarificationNeeded);
    assert_eq!(
        resp.message,
        "Do you mean Annual Precipitation? Reply Yes or No."
    );
}

#[test]
fn e2e_future_without_pathway_asks_for_scenario() {
    let resp = process_query_with_clarification(
        "annual precipitation by end of century",
        &site_dataset(),
        0,
    );
    assert_eq!(resp.status, ResponseStatus::ClarificationNeeded);
    assert_eq!(resp.message, SCENARIO_QUESTION);
}

#[test]
fn e2e_turn_limit_answers_with_defaults() {
    // Ambiguous variable, no season, no scenario
    let resp = process_query_with_clarification("rain", &site_dataset(), 2);
    assert_eq!(resp.status, ResponseStatus::Success);
    assert_eq!(
        resp.message,
        "Proceeding with current information... Relevant data extracted."
    );
    let items = items(&resp);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].csv_key, "precipann_hist");
}

#[test]
fn e2e_turn_limit_with_nothing_returns_full_dataset() {
    let resp = process_query_with_clarification("hello", &site_dataset(), 2);
    assert_eq!(resp.status, ResponseStatus::Fallback);
    assert_eq!(
        resp.message,
        "Proceeding with current information... Full data provided."
    );
    assert_eq!(resp.data, Some(ResponseData::FullDataset(site_document())));
}

#[test]
fn e2e_complete_but_unmapped_query_falls_back_without_prefix() {
    let resp = process_query_with_clarification(
        "wind speed, annual, historical",
        &site_dataset(),
        0,
    );
    // Wind speed is not in the site dataset
    assert_eq!(resp.status, ResponseStatus::Fallback);
    assert_eq!(resp.message, "Full data provided.");
}

#[test]
fn e2e_custom_policy_allows_more_questions() {
    let orchestrator = Orchestrator::new(ClarificationPolicy { max_turns: 3 });
    let dataset = site_dataset();
    assert_eq!(
        orchestrator.process("rain", &dataset, 2).status,
        ResponseStatus::ClarificationNeeded
    );
    assert_eq!(
        orchestrator.process("rain", &dataset, 3).status,
        ResponseStatus::Success
    );
}

#[test]
fn e2e_turn_limit_seasonal_projection_uses_exported_pathway() {
    let dataset = site_dataset();
    let query = "average maximum temperature in summer, mid century";

    let resp = process_query_with_clarification(query, &dataset, 0);
    assert_eq!(resp.status, ResponseStatus::ClarificationNeeded);
    assert_eq!(resp.message, SCENARIO_QUESTION);

    // Summer temperatures are only exported under RCP8.5
    let resp = process_query_with_clarification(query, &dataset, 2);
    assert_eq!(resp.status, ResponseStatus::Success);
    let items = items(&resp);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].csv_key, "tempmax_seas_rcp85_mid_summer");
    assert_eq!(items[0].value, json!(91.2));
}
