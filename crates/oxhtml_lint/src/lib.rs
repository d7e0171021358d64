//! Analyses the tag names of HTML documents to find unrecognised elements
//!
//! The linter doesn't tokenize documents itself, instead it's given the [`Tag`]s found by a
//! tokenizer along with the source they were found in.
//!
//! ```
//! use oxhtml_lint::{Rules, Tag};
//!
//! let source = "<p><MFrac></MFrac></p>";
//! let tags = [Tag::new("p", 1..2), Tag::new("MFrac", 4..9)];
//! let errors = Rules::default().lint(&tags);
//! assert_eq!(errors.len(), 1);
//!
//! let mut report = String::new();
//! assert!(Rules::default().lint_to(&mut report, source, &tags).is_err());
//! assert!(report.contains("<mfrac>"));
//! ```
pub mod error;
mod rules;
mod utils;

pub use rules::{Rules, Severity, Tag};
