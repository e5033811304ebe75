//! Configuration management for tego
//!
//! This crate handles:
//! - Locating the project's hook configuration file
//! - Decoding JSON, TOML and YAML into a [`HookConfig`]
//! - Logging initialization

pub mod config;
pub mod logging;

// Re-export error types from core
pub use tego_core::{Error, Result};

// Re-export main types
pub use config::{
    CONFIG_FILES, CommandSpec, ConfigFormat, ConfigSource, HookConfig, SAMPLE_CONFIG,
    SAMPLE_CONFIG_FILE, write_sample,
};
