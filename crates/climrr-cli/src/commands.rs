//! Subcommands. Each produces a JSON value for stdout.

use anyhow::Context;
use clap::Subcommand;
use serde_json::{Value, json};

use climrr_intent::{Dataset, Orchestrator, get_final_data_key, parse_raw_intent};

use crate::config::CliConfig;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run one clarification turn for a question against a dataset.
    Query {
        /// The question, as typed by the user.
        text: String,
        /// Turns already spent asking for clarification.
        #[arg(long, default_value_t = 0)]
        turn: u32,
        /// Dataset JSON file (overrides config).
        #[arg(long)]
        dataset: Option<String>,
    },
    /// Show the parsed intent without touching any dataset.
    Intent { text: String },
    /// Resolve a (variable, season, scenario) triple to its column key.
    Key {
        variable: String,
        season: String,
        scenario: String,
    },
    /// List the placeholders in a template.
    Template { text: String },
}

/// Execute a command and return its JSON output.
pub fn run(command: Command, config: &CliConfig) -> anyhow::Result<Value> {
    match command {
        Command::Query {
            text,
            turn,
            dataset,
        } => {
            let path = dataset
                .or_else(|| config.dataset_path.clone())
                .context("no dataset given; pass --dataset or set CLIMRR_DATASET")?;
            let dataset = Dataset::from_file(&path)
                .with_context(|| format!("failed to load dataset {path}"))?;
            tracing::debug!(path = %path, variables = dataset.len(), "dataset loaded");

            let response = Orchestrator::new(config.policy()).process(&text, &dataset, turn);
            tracing::info!(status = ?response.status, turn, "query processed");
            Ok(serde_json::to_value(response)?)
        }
        Command::Intent { text } => Ok(serde_json::to_value(parse_raw_intent(
            &text.to_lowercase(),
        ))?),
        Command::Key {
            variable,
            season,
            scenario,
        } => Ok(json!({
            "variable": variable,
            "season": season,
            "scenario": scenario,
            "key": get_final_data_key(&variable, &season, &scenario),
        })),
        Command::Template { text } => {
            let (variables, expressions) = climrr_intent::separate_vars_and_exprs(&text);
            Ok(json!({
                "variables": variables,
                "expressions": expressions,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn dataset_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let doc = json!([{
            "results": {
                "Cooling Degree Days": {
                    "Annual": { "historical": { "value": 812 } }
                }
            }
        }]);
        write!(file, "{doc}").unwrap();
        file
    }

    #[test]
    fn query_uses_flag_dataset() {
        let file = dataset_file();
        let out = run(
            Command::Query {
                text: "Annual cooling degree days, historical".into(),
                turn: 0,
                dataset: Some(file.path().display().to_string()),
            },
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(out["status"], "success");
        assert_eq!(out["data"]["extracted_data"]["csv_key"], "cdd_hist");
        assert_eq!(out["data"]["extracted_data"]["value"], 812);
    }

    #[test]
    fn query_falls_back_to_config_dataset() {
        let file = dataset_file();
        let config = CliConfig {
            dataset_path: Some(file.path().display().to_string()),
            ..CliConfig::default()
        };
        let out = run(
            Command::Query {
                text: "rain".into(),
                turn: 0,
                dataset: None,
            },
            &config,
        )
        .unwrap();
        assert_eq!(out["status"], "clarification_needed");
        assert!(out.get("data").is_none());
    }

    #[test]
    fn query_without_dataset_errors() {
        let err = run(
            Command::Query {
                text: "wind speed".into(),
                turn: 0,
                dataset: None,
            },
            &CliConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("no dataset given"));
    }

    #[test]
    fn intent_command() {
        let out = run(
            Command::Intent {
                text: "FWI 95th percentile".into(),
            },
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(out["variable"], "Fire Weather Index");
        assert_eq!(out["fwi_subtype"], "95");
        assert_eq!(out["variable_match_type"], "exact");
    }

    #[test]
    fn key_command() {
        let out = run(
            Command::Key {
                variable: "Wind Speed".into(),
                season: "Annual".into(),
                scenario: "End-Century RCP4.5".into(),
            },
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(out["key"], "windspeed_rcp45_endc");

        let out = run(
            Command::Key {
                variable: "Wind Speed".into(),
                season: "Winter".into(),
                scenario: "Historical".into(),
            },
            &CliConfig::default(),
        )
        .unwrap();
        assert!(out["key"].is_null());
    }

    #[test]
    fn template_command() {
        let out = run(
            Command::Template {
                text: "{hdd_hist} vs {{hdd_rcp85_midc - hdd_hist}}".into(),
            },
            &CliConfig::default(),
        )
        .unwrap();
        assert_eq!(out["variables"], json!(["hdd_hist"]));
        assert_eq!(out["expressions"], json!(["hdd_rcp85_midc - hdd_hist"]));
    }
}
