use crate::error::{PathfixError, Result};
use crate::rewrite::Substitution;
use crate::rewrite::substitution::check_pair;
use serde::Deserialize;
use std::path::PathBuf;

/// Files rewritten when nothing else is configured.
pub const DEFAULT_PATTERN: &str = "grading/*.cl.out";

/// Absolute path prefix left behind by the grading environment.
pub const DEFAULT_SEARCH: &str = "/usr/class/cs143/cool";

/// Relative prefix substituted for [`DEFAULT_SEARCH`].
pub const DEFAULT_REPLACEMENT: &str = "..";

/// Top-level configuration from a `.pathfix.toml` file.
///
/// Every field is optional; unset fields fall through to less specific
/// config files and finally to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop directory cascade and jump directly to ~/.pathfix.toml.
	#[serde(default)]
	pub root: bool,

	/// Glob pattern, relative to the base directory (`--dir` or the cwd).
	pub pattern: Option<String>,

	/// Literal text to search for.
	pub search: Option<String>,

	/// Literal text substituted for each occurrence of `search`.
	pub replace: Option<String>,
}

impl Config {
	/// Reject values that can never produce a valid run.
	pub fn validate(&self) -> Result<()> {
		match (self.search.as_deref(), self.replace.as_deref()) {
			(Some(search), Some(replace)) => check_pair(search, replace),
			(Some(""), None) => Err(PathfixError::EmptySearch),
			_ => Ok(()),
		}
	}
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Effective settings for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub pattern: String,
	pub search: String,
	pub replacement: String,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			pattern: DEFAULT_PATTERN.to_string(),
			search: DEFAULT_SEARCH.to_string(),
			replacement: DEFAULT_REPLACEMENT.to_string(),
		}
	}
}

impl Settings {
	/// Build the substitution these settings describe.
	pub fn substitution(&self) -> Result<Substitution> {
		Substitution::new(self.search.as_str(), self.replacement.as_str())
	}
}
