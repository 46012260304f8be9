//! Pathfix - rewrite absolute grading-environment paths in output files.
//!
//! This library provides the core functionality for pathfix, including:
//! - Literal, in-place substitution over a glob of files
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```no_run
//! use pathfix::config::load_settings;
//! use pathfix::rewrite::rewrite_all;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let settings = load_settings(&cwd).unwrap();
//! let substitution = settings.substitution().unwrap();
//!
//! let summary = rewrite_all(&cwd, &settings.pattern, &substitution).unwrap();
//! println!("{} replacements", summary.replacements);
//! ```

pub mod config;
pub mod error;
pub mod rewrite;

pub use error::{PathfixError, Result};
