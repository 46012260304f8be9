//! Configuration loading and parsing for pathfix.
//!
//! This module handles:
//! - TOML config file parsing
//! - Directory cascade discovery
//! - Merging config values over the built-in defaults

pub mod cascade;
pub mod parser;
pub mod types;

pub use cascade::{
	CONFIG_FILE_NAME, discover_configs, load_settings, merge_configs, user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{
	Config, DEFAULT_PATTERN, DEFAULT_REPLACEMENT, DEFAULT_SEARCH, LoadedConfig, Settings,
};
