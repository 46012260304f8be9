use crate::config::types::Config;
use crate::error::{PathfixError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content = std::fs::read_to_string(path).map_err(|source| PathfixError::ConfigReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| PathfixError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	config.validate()?;

	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_config() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str("", &path).unwrap();

		assert!(!config.root);
		assert!(config.pattern.is_none());
		assert!(config.search.is_none());
		assert!(config.replace.is_none());
	}

	#[test]
	fn test_parse_full_config() {
		let content = r#"
root = true
pattern = "out/*.txt"
search = "/srv/build"
replace = "."
"#;
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(content, &path).unwrap();

		assert!(config.root);
		assert_eq!(config.pattern.as_deref(), Some("out/*.txt"));
		assert_eq!(config.search.as_deref(), Some("/srv/build"));
		assert_eq!(config.replace.as_deref(), Some("."));
	}

	#[test]
	fn test_parse_empty_replace_allowed() {
		let path = PathBuf::from("test.toml");
		let config = parse_config_str(r#"replace = """#, &path).unwrap();
		assert_eq!(config.replace.as_deref(), Some(""));
	}

	#[test]
	fn test_empty_search_rejected() {
		let path = PathBuf::from("test.toml");
		let result = parse_config_str(r#"search = """#, &path);
		assert!(matches!(result, Err(PathfixError::EmptySearch)));
	}

	#[test]
	fn test_replace_containing_search_rejected() {
		let content = r#"
search = "/srv"
replace = "/srv/old"
"#;
		let path = PathBuf::from("test.toml");
		match parse_config_str(content, &path).unwrap_err() {
			PathfixError::ReplacementContainsSearch {
				search,
				replacement,
			} => {
				assert_eq!(search, "/srv");
				assert_eq!(replacement, "/srv/old");
			}
			other => panic!("Expected ReplacementContainsSearch, got {other:?}"),
		}
	}

	#[test]
	fn test_invalid_toml() {
		let path = PathBuf::from("bad.toml");
		match parse_config_str("invalid toml [[[", &path).unwrap_err() {
			PathfixError::ConfigParseError { path: err_path, .. } => {
				assert_eq!(err_path, path);
			}
			other => panic!("Expected ConfigParseError, got {other:?}"),
		}
	}

	#[test]
	fn test_wrong_value_type() {
		let path = PathBuf::from("test.toml");
		assert!(parse_config_str("pattern = 3", &path).is_err());
	}

	#[test]
	fn test_missing_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join(".pathfix.toml");
		let result = parse_config_file(&path);
		assert!(matches!(result, Err(PathfixError::ConfigReadError { .. })));
	}
}
