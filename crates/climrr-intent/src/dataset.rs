//! Read-only view over the caller's projection dataset.
//!
//! Shape of the results mapping:
//!
//! ```text
//! { "<variable label>": { "<Season>": {
//!     "historical": { "value": .. },
//!     "rcp45": { "mid_century": { "value": .. }, "end_century": { "value": .. } },
//!     "rcp85": { .. } } } }
//! ```
//!
//! The bare mapping, the loader's record list (`[{ "results": { .. } }, ..]`)
//! and a single `{ "results": { .. } }` record are accepted. Missing nodes simply mean
//! "no value"; lookups never fail.

use std::path::Path;

use serde_json::{Map, Value};

use climrr_protocol::{Scenario, Season};

use crate::error::{DatasetError, DatasetResult};

/// Read-only lookup surface over a dataset document.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// The document exactly as supplied.
    raw: Value,
    /// Variable label → season block.
    results: Map<String, Value>,
}

impl Dataset {
    /// Wrap a parsed JSON document. Unrecognised shapes give an empty view.
    pub fn from_value(raw: Value) -> Self {
        let results = match &raw {
            Value::Array(records) => records
                .first()
                .and_then(|record| record.get("results"))
                .and_then(Value::as_object)
                .cloned(),
            // A lone "results" key is the single-record envelope
            Value::Object(map) => match map.get("results") {
                Some(Value::Object(results)) if map.len() == 1 => Some(results.clone()),
                _ => Some(map.clone()),
            },
            _ => None,
        };

        let results = results.unwrap_or_else(|| {
            tracing::warn!("dataset document has no results mapping; treating as empty");
            Map::new()
        });

        Self { raw, results }
    }

    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(raw))
    }

    pub fn from_file(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// The document as supplied by the caller.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Number of variable blocks in the view.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Variable block whose label matches case-insensitively.
    fn variable_block(&self, label: &str) -> Option<&Value> {
        self.results
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(label))
            .map(|(_, block)| block)
    }

    /// Value for (label, season, scenario), or `None` if any level is
    /// missing or the value itself is null.
    pub fn value(&self, label: &str, season: Season, scenario: Scenario) -> Option<&Value> {
        let season_block = self.variable_block(label)?.get(season.as_str())?;
        let node = match scenario {
            Scenario::Historical => season_block.get("historical")?,
            Scenario::Future { horizon, pathway } => {
                season_block.get(pathway.code())?.get(horizon.code())?
            }
        };
        node.get("value").filter(|v| !v.is_null())
    }
}
