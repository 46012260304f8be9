use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, Settings};
use crate::error::{PathfixError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the config file looked up in each directory.
pub const CONFIG_FILE_NAME: &str = ".pathfix.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.pathfix.toml`
/// 2. If found and `root = true`, skip to user config only
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.pathfix.toml
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = discover_local_configs(start_dir)?;

	if let Some(user_config) = load_user_config(&configs)? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Walk up from `start_dir`, stopping after a config with `root = true`.
fn discover_local_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();

	for dir in start_dir.ancestors() {
		let config_path = dir.join(CONFIG_FILE_NAME);
		if !config_path.is_file() {
			continue;
		}

		let config = parse_config_file(&config_path)?;
		debug!(path = %config_path.display(), root = config.root, "loaded config");

		let is_root = config.root;
		configs.push(LoadedConfig {
			config,
			path: config_path,
		});

		if is_root {
			break;
		}
	}

	Ok(configs)
}

/// Load the user's ~/.pathfix.toml if it exists and wasn't already found.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	let user_config_path = user_config_path()?;

	// The walk up from a directory under $HOME can already have picked it up.
	if existing_configs
		.iter()
		.any(|loaded| loaded.path == user_config_path)
	{
		return Ok(None);
	}

	if user_config_path.is_file() {
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Merge configs in cascade order over the built-in defaults.
///
/// For each field, the most specific config that sets it wins.
pub fn merge_configs(configs: &[LoadedConfig]) -> Settings {
	let mut settings = Settings::default();

	for loaded in configs.iter().rev() {
		let config = &loaded.config;
		if let Some(ref pattern) = config.pattern {
			settings.pattern = pattern.clone();
		}
		if let Some(ref search) = config.search {
			settings.search = search.clone();
		}
		if let Some(ref replace) = config.replace {
			settings.replacement = replace.clone();
		}
	}

	settings
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_settings(start_dir: &Path) -> Result<Settings> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(PathfixError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
