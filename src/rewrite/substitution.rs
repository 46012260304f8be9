use crate::error::{PathfixError, Result};

/// A literal find-and-replace pair.
///
/// Matching is exact substring matching with no pattern semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
	search: String,
	replacement: String,
}

impl Substitution {
	/// Build a substitution.
	///
	/// The search string must be non-empty and must not occur in the
	/// replacement, otherwise a second run would keep rewriting.
	pub fn new(search: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
		let search = search.into();
		let replacement = replacement.into();
		check_pair(&search, &replacement)?;

		Ok(Substitution {
			search,
			replacement,
		})
	}

	pub fn search(&self) -> &str {
		&self.search
	}

	pub fn replacement(&self) -> &str {
		&self.replacement
	}

	/// Replace every non-overlapping occurrence, scanning left to right.
	///
	/// Returns the rewritten text and the number of occurrences replaced.
	pub fn apply(&self, input: &str) -> (String, usize) {
		let mut output = String::with_capacity(input.len());
		let mut count = 0;
		let mut last_end = 0;

		for (start, matched) in input.match_indices(self.search.as_str()) {
			output.push_str(&input[last_end..start]);
			output.push_str(&self.replacement);
			last_end = start + matched.len();
			count += 1;
		}
		output.push_str(&input[last_end..]);

		(output, count)
	}
}

/// Validate a search/replacement pair.
pub(crate) fn check_pair(search: &str, replacement: &str) -> Result<()> {
	if search.is_empty() {
		return Err(PathfixError::EmptySearch);
	}
	if replacement.contains(search) {
		return Err(PathfixError::ReplacementContainsSearch {
			search: search.to_string(),
			replacement: replacement.to_string(),
		});
	}
	Ok(())
}
