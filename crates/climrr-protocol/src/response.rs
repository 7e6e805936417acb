//! Extraction payloads and the response envelope returned to callers.

use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;
use crate::variable::{ClimateVariable, Season};

/// One resolved data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedItem {
    /// Dataset label the value was read from. For Fire Weather Index this
    /// is the subtype label (e.g. "Fire Weather Index Class").
    pub variable: String,
    pub season: Season,
    pub scenario: Scenario,
    /// Column identifier in the flat CSV export.
    pub csv_key: String,
    pub value: serde_json::Value,
}

/// Either a single item or several (comparison and multi-subtype queries).
///
/// Untagged so the JSON shape stays a bare object or a bare list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedData {
    Single(ExtractedItem),
    Many(Vec<ExtractedItem>),
}

impl ExtractedData {
    /// Collapse a non-empty list: one item stays unwrapped, more become a list.
    /// Returns `None` for an empty list.
    pub fn from_items(mut items: Vec<ExtractedItem>) -> Option<Self> {
        match items.len() {
            0 => None,
            1 => items.pop().map(Self::Single),
            _ => Some(Self::Many(items)),
        }
    }

    pub fn items(&self) -> &[ExtractedItem] {
        match self {
            Self::Single(item) => std::slice::from_ref(item),
            Self::Many(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Intent as it was applied during extraction, defaults included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIntent {
    pub variable: Option<ClimateVariable>,
    pub season: Season,
    /// Every scenario that was attempted, historical first.
    pub scenario: Vec<Scenario>,
}

/// Successful extraction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPayload {
    pub status: ResponseStatus,
    pub intent: ResolvedIntent,
    pub extracted_data: ExtractedData,
}

impl ExtractedPayload {
    pub fn new(intent: ResolvedIntent, extracted_data: ExtractedData) -> Self {
        Self {
            status: ResponseStatus::Success,
            intent,
            extracted_data,
        }
    }
}

/// Outcome of a single pipeline turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    ClarificationNeeded,
    Success,
    Fallback,
}

/// Data attached to a non-clarification response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    Extracted(ExtractedPayload),
    /// Nothing resolved; the caller's dataset document, untouched.
    FullDataset(serde_json::Value),
}

/// Response envelope returned by the clarification orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl Response {
    pub fn clarification(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::ClarificationNeeded,
            message: message.into(),
            data: None,
        }
    }

    pub fn success(message: impl Into<String>, payload: ExtractedPayload) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(ResponseData::Extracted(payload)),
        }
    }

    pub fn fallback(message: impl Into<String>, dataset: serde_json::Value) -> Self {
        Self {
            status: ResponseStatus::Fallback,
            message: message.into(),
            data: Some(ResponseData::FullDataset(dataset)),
        }
    }

    /// Extraction payload, if this response carries one.
    pub fn payload(&self) -> Option<&ExtractedPayload> {
        match &self.data {
            Some(ResponseData::Extracted(payload)) => Some(payload),
            _ => None,
        }
    }
}
