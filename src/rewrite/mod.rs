//! In-place literal path rewriting.
//!
//! This module handles:
//! - The literal search/replacement pair
//! - The read-modify-write cycle for a single file
//! - Glob expansion and the sequential batch run

pub mod batch;
pub mod file;
pub mod substitution;

pub use batch::{RunSummary, find_targets, rewrite_all};
pub use file::{RewriteOutcome, rewrite_file};
pub use substitution::Substitution;
