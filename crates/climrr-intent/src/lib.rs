//! Intent resolution pipeline for climate projection questions.
//!
//! Turns free text ("average max temperature in summer, rcp 8.5 end century")
//! into a dataset column and value. Four stages, leaf first:
//! the static key map, the rule-based classifier, the extractor, and the
//! clarification orchestrator that decides whether to ask a follow-up
//! question or answer with defaults.
//!
//! Everything here is synchronous and pure: the dataset is borrowed
//! read-only and all tables are immutable statics.

pub mod clarify;
pub mod classifier;
pub mod dataset;
pub mod error;
pub mod extractor;
pub mod key_map;
pub mod templater;

// Re-export the public entry points
pub use clarify::{ClarificationPolicy, Orchestrator, process_query_with_clarification};
pub use classifier::parse_raw_intent;
pub use dataset::Dataset;
pub use error::{DatasetError, DatasetResult};
pub use extractor::{Extraction, extract_relevant_data};
pub use key_map::{KEY_MAP, KeyEntry, get_final_data_key};
pub use templater::separate_vars_and_exprs;
