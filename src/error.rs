use std::path::PathBuf;

/// Library-level structured errors for pathfix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum PathfixError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Search string must not be empty")]
	EmptySearch,

	#[error("Replacement {replacement:?} contains search string {search:?}")]
	ReplacementContainsSearch { search: String, replacement: String },

	#[error("Invalid glob pattern: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},

	#[error("Failed to read directory entry while expanding pattern")]
	GlobTraversal {
		#[source]
		source: glob::GlobError,
	},

	#[error("Base directory is not valid UTF-8: {path}")]
	NonUtf8Directory { path: PathBuf },

	#[error("Failed to open file: {path}")]
	FileOpenError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read file: {path}")]
	FileReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	FileWriteError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using PathfixError.
pub type Result<T> = std::result::Result<T, PathfixError>;
