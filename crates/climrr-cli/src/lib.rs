//! Library half of the `climrr` binary: configuration and subcommands.

pub mod commands;
pub mod config;

pub use commands::{Command, run};
pub use config::{CliConfig, ConfigError};
