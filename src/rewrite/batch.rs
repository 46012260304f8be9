use crate::error::{PathfixError, Result};
use crate::rewrite::file::{RewriteOutcome, rewrite_file};
use crate::rewrite::substitution::Substitution;
use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Totals for one run over a file set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
	/// Number of files rewritten (including no-op rewrites).
	pub files: usize,

	/// Number of files that contained at least one occurrence.
	pub files_changed: usize,

	/// Total occurrences replaced across all files.
	pub replacements: usize,
}

impl RunSummary {
	fn record(&mut self, outcome: &RewriteOutcome) {
		self.files += 1;
		self.replacements += outcome.replacements;
		if outcome.changed() {
			self.files_changed += 1;
		}
	}
}

/// Hidden files are not matched by `*`, mirroring shell globbing.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
	case_sensitive: true,
	require_literal_separator: true,
	require_literal_leading_dot: true,
};

/// Expand `pattern` relative to `base_dir`.
///
/// Absolute patterns are used as-is. Glob metacharacters in `base_dir` are
/// escaped so only `pattern` is interpreted.
pub fn find_targets(base_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
	let full_pattern = if Path::new(pattern).is_absolute() {
		pattern.to_string()
	} else {
		let base = base_dir
			.to_str()
			.ok_or_else(|| PathfixError::NonUtf8Directory {
				path: base_dir.to_path_buf(),
			})?;
		format!("{}/{}", Pattern::escape(base.trim_end_matches('/')), pattern)
	};

	let paths = glob::glob_with(&full_pattern, MATCH_OPTIONS).map_err(|source| {
		PathfixError::InvalidPattern {
			pattern: pattern.to_string(),
			source,
		}
	})?;

	paths
		.map(|entry| entry.map_err(|source| PathfixError::GlobTraversal { source }))
		.collect()
}

/// Rewrite every file matching `pattern` under `base_dir`, one at a time.
///
/// The first failing file aborts the run. Files processed before it remain
/// rewritten.
pub fn rewrite_all(
	base_dir: &Path,
	pattern: &str,
	substitution: &Substitution,
) -> Result<RunSummary> {
	let targets = find_targets(base_dir, pattern)?;
	debug!(pattern, matched = targets.len(), "expanded file pattern");

	let mut summary = RunSummary::default();
	for path in &targets {
		let outcome = rewrite_file(path, substitution)?;
		summary.record(&outcome);
	}

	debug!(
		files = summary.files,
		files_changed = summary.files_changed,
		replacements = summary.replacements,
		"run complete"
	);

	Ok(summary)
}
