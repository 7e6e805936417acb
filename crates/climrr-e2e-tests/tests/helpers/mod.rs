//! Shared fixtures for E2E tests: a small but realistic site dataset.

#![allow(dead_code)]

use serde_json::{Value, json};

use climrr_intent::Dataset;
use climrr_protocol::{ExtractedItem, Response};

/// Site document in the loader's record-list envelope.
pub fn site_document() -> Value {
    json!([{
        "results": {
            "Maximum Avg Temperature": {
                "Annual": {
                    "historical": { "value": 70.2 },
                    "rcp45": {
                        "mid_century": { "value": 72.0 },
                        "end_century": { "value": 73.1 }
                    },
                    "rcp85": {
                        "mid_century": { "value": 73.4 },
                        "end_century": { "value": 77.9 }
                    }
                },
                "Summer": {
                    "historical": { "value": 88.1 },
                    "rcp85": {
                        "mid_century": { "value": 91.2 },
                        "end_century": { "value": 96.4 }
                    }
                }
            },
            "Minimum Avg Temperature": {
                "Winter": {
                    "historical": { "value": 18.3 },
                    "rcp85": { "mid_century": { "value": 22.7 } }
                }
            },
            "Annual Precipitation": {
                "Annual": {
                    "historical": { "value": 38.2 },
                    "rcp45": { "mid_century": { "value": 39.0 } },
                    "rcp85": { "end_century": { "value": 40.1 } }
                }
            },
            "Days Without Precipitation": {
                "Annual": {
                    "historical": { "value": 180 },
                    "rcp85": { "end_century": { "value": 191 } }
                }
            },
            "Fire Weather Index (95th Percentile)": {
                "Spring": {
                    "historical": { "value": 22.0 },
                    "rcp85": { "mid_century": { "value": 27.5 } }
                }
            },
            "Fire Weather Index Class": {
                "Spring": {
                    "historical": { "value": "Low" },
                    "rcp85": { "mid_century": { "value": "Moderate" } }
                }
            },
            "Fire Weather Index (Average)": {
                "Spring": {
                    "rcp85": { "mid_century": { "value": 9.8 } }
                }
            }
        }
    }])
}

pub fn site_dataset() -> Dataset {
    Dataset::from_value(site_document())
}

/// Extracted items of a response, or an empty list.
pub fn items(response: &Response) -> Vec<ExtractedItem> {
    response
        .payload()
        .map(|p| p.extracted_data.items().to_vec())
        .unwrap_or_default()
}
