use crate::error::{PathfixError, Result};
use crate::rewrite::substitution::Substitution;
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result of rewriting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
	/// The file that was rewritten.
	pub path: PathBuf,

	/// Number of occurrences replaced.
	pub replacements: usize,

	/// File length before the rewrite.
	pub bytes_before: u64,

	/// File length after the rewrite.
	pub bytes_after: u64,
}

impl RewriteOutcome {
	pub fn changed(&self) -> bool {
		self.replacements > 0
	}
}

/// Rewrite one file in place.
///
/// The file is opened once for reading and writing, read fully, rewound,
/// overwritten and truncated to the new content's length. A file with no
/// occurrences is still written back unchanged.
pub fn rewrite_file(path: &Path, substitution: &Substitution) -> Result<RewriteOutcome> {
	let mut file = OpenOptions::new()
		.read(true)
		.write(true)
		.open(path)
		.map_err(|source| PathfixError::FileOpenError {
			path: path.to_path_buf(),
			source,
		})?;

	let mut content = String::new();
	file.read_to_string(&mut content)
		.map_err(|source| PathfixError::FileReadError {
			path: path.to_path_buf(),
			source,
		})?;

	let (rewritten, replacements) = substitution.apply(&content);

	let write_err = |source| PathfixError::FileWriteError {
		path: path.to_path_buf(),
		source,
	};
	file.seek(SeekFrom::Start(0)).map_err(write_err)?;
	file.write_all(rewritten.as_bytes()).map_err(write_err)?;
	file.set_len(rewritten.len() as u64).map_err(write_err)?;
	file.flush().map_err(write_err)?;

	debug!(
		path = %path.display(),
		replacements,
		bytes_before = content.len(),
		bytes_after = rewritten.len(),
		"rewrote file"
	);

	Ok(RewriteOutcome {
		path: path.to_path_buf(),
		replacements,
		bytes_before: content.len() as u64,
		bytes_after: rewritten.len() as u64,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn grading_sub() -> Substitution {
		Substitution::new("/usr/class/cs143/cool", "..").unwrap()
	}

	#[test]
	fn test_rewrite_replaces_path_and_keeps_other_lines() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("foo.cl.out");
		fs::write(
			&path,
			"header\n/usr/class/cs143/cool/tests/foo.cl\nfooter\n",
		)
		.unwrap();

		let outcome = rewrite_file(&path, &grading_sub()).unwrap();

		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"header\n../tests/foo.cl\nfooter\n"
		);
		assert_eq!(outcome.replacements, 1);
		assert!(outcome.changed());
	}

	#[test]
	fn test_rewrite_truncates_stale_bytes() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("short.cl.out");
		let original = "/usr/class/cs143/cool/a\n/usr/class/cs143/cool/b\n";
		fs::write(&path, original).unwrap();

		let outcome = rewrite_file(&path, &grading_sub()).unwrap();

		let after = fs::read(&path).unwrap();
		assert_eq!(after, b"../a\n../b\n");
		assert_eq!(outcome.bytes_before, original.len() as u64);
		assert_eq!(outcome.bytes_after, after.len() as u64);
		assert_eq!(fs::metadata(&path).unwrap().len(), after.len() as u64);
	}

	#[test]
	fn test_rewrite_grows_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("grow.txt");
		fs::write(&path, "x-x-x").unwrap();

		let sub = Substitution::new("x", "longer").unwrap();
		let outcome = rewrite_file(&path, &sub).unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "longer-longer-longer");
		assert_eq!(outcome.bytes_after, 5 + 3 * 5);
	}

	#[test]
	fn test_rewrite_without_occurrences_is_byte_identical() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("clean.cl.out");
		let original = "no paths here\r\n\ttabs and trailing spaces   \n";
		fs::write(&path, original).unwrap();

		let outcome = rewrite_file(&path, &grading_sub()).unwrap();

		assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
		assert!(!outcome.changed());
		assert_eq!(outcome.bytes_before, outcome.bytes_after);
	}

	#[test]
	fn test_rewrite_empty_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("empty.cl.out");
		fs::write(&path, "").unwrap();

		let outcome = rewrite_file(&path, &grading_sub()).unwrap();

		assert_eq!(outcome.replacements, 0);
		assert_eq!(fs::read(&path).unwrap(), b"");
	}

	#[test]
	fn test_rewrite_missing_file_is_open_error() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("missing.cl.out");

		let result = rewrite_file(&path, &grading_sub());

		match result.unwrap_err() {
			PathfixError::FileOpenError { path: err_path, .. } => assert_eq!(err_path, path),
			other => panic!("Expected FileOpenError, got {other:?}"),
		}
	}

	#[test]
	fn test_rewrite_directory_fails() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("dir.cl.out");
		fs::create_dir(&path).unwrap();

		// Unix refuses a read-write open of a directory; elsewhere the read fails.
		match rewrite_file(&path, &grading_sub()).unwrap_err() {
			PathfixError::FileOpenError { path: err_path, .. }
			| PathfixError::FileReadError { path: err_path, .. } => assert_eq!(err_path, path),
			other => panic!("Expected FileOpenError or FileReadError, got {other:?}"),
		}
		assert!(path.is_dir());
	}

	#[test]
	fn test_rewrite_non_utf8_is_read_error_and_leaves_file() {
		let temp_dir = tempfile::tempdir().unwrap();
		let path = temp_dir.path().join("binary.cl.out");
		let original = [0xff, 0xfe, b'/', b'u'];
		fs::write(&path, original).unwrap();

		let result = rewrite_file(&path, &grading_sub());

		assert!(matches!(result, Err(PathfixError::FileReadError { .. })));
		assert_eq!(fs::read(&path).unwrap(), original);
	}
}
