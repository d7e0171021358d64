use std::{fmt::Write, ops::Range, path::PathBuf};

use oxhtml_collections::ElementId;
use rayon::prelude::*;

use crate::error::{Error, LintingError, Report};

mod no_legacy_elements;
mod no_miscased_math_elements;
mod no_unknown_elements;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
/// What is the severity of the reported error.
pub enum Severity {
    /// The error emits no message
    Off,
    /// The error emits a message as a warning
    Warn,
    #[default]
    /// The error emits a message as an error
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A tag name found by a tokenizer
pub struct Tag<'input> {
    /// The name of the tag, as written in the source
    pub name: &'input str,
    /// The span of the source the name was found at.
    ///
    /// An empty range is treated as the offset of the tag's `<`, and the name is searched
    /// for from there.
    pub range: Option<Range<usize>>,
}

impl<'input> Tag<'input> {
    /// Creates a tag for the name found at the given range
    pub fn new(name: &'input str, range: Range<usize>) -> Self {
        Self {
            name,
            range: Some(range),
        }
    }

    /// Creates a tag without any source position
    pub fn unpositioned(name: &'input str) -> Self {
        Self { name, range: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
/// A set of rules to assert against the tags of a document.
///
/// The [`Severity`] provided for each rule determines the display of each problem
/// by the [`crate::error::Report`].
pub struct Rules {
    /// Disallow tag names that aren't HTML or MathML elements
    pub no_unknown_elements: Severity,
    /// Disallow MathML names written in the wrong case, e.g. `<MFrac>`
    pub no_miscased_math_elements: Severity,
    /// Disallow elements that are obsolete, e.g. `<keygen>`
    pub no_legacy_elements: Severity,
}

impl Default for Rules {
    fn default() -> Self {
        Self::recommended()
    }
}

impl Rules {
    /// Returns a set of rules with all the rules set to [`Severity::Off`]
    pub fn off() -> Self {
        Self {
            no_unknown_elements: Severity::Off,
            no_miscased_math_elements: Severity::Off,
            no_legacy_elements: Severity::Off,
        }
    }

    /// Returns a balanced set of rules
    pub fn recommended() -> Self {
        Self {
            no_unknown_elements: Severity::Error,
            no_miscased_math_elements: Severity::Error,
            no_legacy_elements: Severity::Warn,
        }
    }

    /// Checks each tag against the rules, returning the problems in the order of `tags`
    pub fn lint<'input>(&self, tags: &[Tag<'input>]) -> Vec<Error<'input>> {
        tags.par_iter().filter_map(|tag| self.lint_tag(tag)).collect()
    }

    fn lint_tag<'input>(&self, tag: &Tag<'input>) -> Option<Error<'input>> {
        let range = tag.range.as_ref();
        if let Some(id) = ElementId::from_name(tag.name) {
            return match self.no_legacy_elements {
                Severity::Off => None,
                severity => no_legacy_elements::no_legacy_elements(id, range, severity),
            };
        }

        let miscased = match self.no_miscased_math_elements {
            Severity::Off => None,
            severity => {
                no_miscased_math_elements::no_miscased_math_elements(tag.name, range, severity)
            }
        };
        if miscased.is_some() {
            return miscased;
        }

        match self.no_unknown_elements {
            Severity::Off => None,
            severity => no_unknown_elements::no_unknown_elements(tag.name, range, severity),
        }
    }

    /// Analyses the tags and reports any problems to the given writer
    ///
    /// # Errors
    ///
    /// When writing fails, or when any problems are reported
    pub fn lint_to<W>(&self, w: &mut W, source: &str, tags: &[Tag<'_>]) -> Result<(), LintingError>
    where
        W: std::fmt::Write,
    {
        self.lint_internal(w, None, source, tags)
    }

    /// Analyses the tags and reports any problems to the given writer, labelled with the path
    /// of the source
    ///
    /// # Errors
    ///
    /// When writing fails, or when any problems are reported
    pub fn lint_to_with_path<W>(
        &self,
        w: &mut W,
        source: &str,
        tags: &[Tag<'_>],
        path: Option<&PathBuf>,
    ) -> Result<(), LintingError>
    where
        W: std::fmt::Write,
    {
        self.lint_internal(w, path, source, tags)
    }

    fn lint_internal<W>(
        &self,
        w: &mut W,
        path: Option<&PathBuf>,
        source: &str,
        tags: &[Tag<'_>],
    ) -> Result<(), LintingError>
    where
        W: std::fmt::Write,
    {
        let errors = self.lint(tags);
        if errors.is_empty() {
            return Ok(());
        }
        let error_count = errors
            .iter()
            .filter(|error| matches!(error.severity, Severity::Error))
            .count();
        let warning_count = errors
            .iter()
            .filter(|error| matches!(error.severity, Severity::Warn))
            .count();

        let report = Report {
            source,
            errors,
            path: path.cloned(),
        };
        write!(w, "{report}").map_err(LintingError::Format)?;
        Err(LintingError::Reported {
            errors: error_count,
            warnings: warning_count,
        })
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => Ok(()),
            Self::Warn => f.write_char('⚠'),
            Self::Error => f.write_char('×'),
        }
    }
}
impl Severity {
    pub(crate) fn color_start(self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => Ok(()),
            Self::Warn => f.write_str("\x1b[33m"),  // Yellow
            Self::Error => f.write_str("\x1b[31m"), // Red
        }
    }
    pub(crate) fn color_reset(f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("\x1b[0m")
    }
}
