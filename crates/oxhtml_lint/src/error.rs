//! Errors that may be created or reported by the linter
use core::str;
use std::{
    fmt::{self, Display, Write},
    ops::Range,
    path::PathBuf,
};

use oxhtml_collections::{ElementId, MathMlElement};

use crate::{utils::naive_range, Severity};

#[derive(Debug)]
/// Errors that may occur while linting
pub enum LintingError {
    /// The linter was unable to format the report
    Format(std::fmt::Error),
    /// The linter reported some errors and/or warnings
    Reported {
        /// The number of errors reported
        errors: usize,
        /// The number of warnings reported
        warnings: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A problem with the document that the linter reported
pub enum Problem<'input> {
    /// There was a tag name that isn't a HTML or MathML element
    UnknownElement {
        /// The name as written in the document
        name: &'input str,
    },
    /// There was a tag name that only matches a MathML element when ignoring case
    MiscasedMathElement {
        /// The name as written in the document
        name: &'input str,
        /// The element the name was likely meant to be
        element: MathMlElement,
    },
    /// There was an element that is obsolete
    LegacyElement {
        /// The legacy element
        element: ElementId,
    },
}
impl Display for Problem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownElement { name } => {
                f.write_fmt(format_args!("Unknown element <{name}>"))
            }
            Self::MiscasedMathElement { name, element } => f.write_fmt(format_args!(
                "Unknown element <{name}>, did you mean <{element}>?"
            )),
            Self::LegacyElement { element } => {
                f.write_fmt(format_args!("Legacy element <{element}>"))
            }
        }
    }
}

#[derive(Debug)]
/// An error for a problem the linter reported for the document
pub struct Error<'input> {
    /// The problem that was found
    pub problem: Problem<'input>,
    /// The error level of the problem
    pub severity: Severity,
    /// The span of the document the error was reported for
    pub range: Option<Range<usize>>,
    /// Some arbitrary help text provided by the reporter
    pub help: Option<String>,
}
impl Error<'_> {
    fn display_context(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        source: &str,
        path: Option<&PathBuf>,
    ) -> std::fmt::Result {
        let path = path.and_then(|path| path.to_str()).unwrap_or("");
        let Some(range) = &self.range else {
            f.write_fmt(format_args!(" \x1b[1;34m{path}\x1b[0m\n"))?;
            return self.display_help(f);
        };
        let source_bytes = source.as_bytes();
        let range = if range.is_empty() {
            naive_range(source_bytes, range.start)
        } else {
            range.clone()
        };
        let start = range.start.min(source_bytes.len());
        let end = range.end.clamp(start, source_bytes.len());

        let line_start = source_bytes[..start]
            .iter()
            .rposition(|char| *char == b'\n')
            .map_or(0, |i| i + 1);
        let line_end = source_bytes[end..]
            .iter()
            .position(|char| *char == b'\n')
            .map_or(source_bytes.len(), |i| i + end);

        let prev_line = if line_start == 0 {
            ""
        } else {
            let before = &source_bytes[..line_start - 1];
            let prev_start = before
                .iter()
                .rposition(|char| *char == b'\n')
                .map_or(0, |i| i + 1);
            str::from_utf8(&before[prev_start..]).map_err(|_| fmt::Error)?
        };
        let next_line = {
            let after = &source_bytes[source_bytes.len().min(line_end + 1)..];
            let next_end = after
                .iter()
                .position(|char| *char == b'\n')
                .unwrap_or(after.len());
            str::from_utf8(&after[..next_end]).map_err(|_| fmt::Error)?
        };
        let lines = str::from_utf8(&source_bytes[line_start..line_end]).map_err(|_| fmt::Error)?;

        let line_number = bytecount::count(&source_bytes[..start], b'\n') + 1;
        let column = start - line_start;
        let padding = (line_number + lines.split('\n').count()).to_string().len();
        f.write_fmt(format_args!(
            "\n {: <1$} ╭─[\x1b[34m{path}\x1b[0m:{line_number}:{column}]",
            "", padding,
        ))?;

        let mut current_line_number = line_number - 1;
        if !prev_line.is_empty() {
            f.write_fmt(format_args!(
                "\n {current_line_number: >padding$} │ {prev_line}"
            ))?;
        }

        for line in lines.split('\n') {
            current_line_number += 1;
            f.write_fmt(format_args!("\n {current_line_number: >padding$} │ {line}"))?;
        }
        let width = (end - start).max(1);
        if current_line_number > line_number {
            f.write_fmt(format_args!("\n {: <padding$} · \x1b[35m", ""))?;
            f.write_fmt(format_args!("{:─<1$}\x1b[0m", "", column + width))?;
        } else {
            f.write_fmt(format_args!("\n {: <1$} · ", "", padding))?;
            f.write_fmt(format_args!("{: <1$}\x1b[35m", "", column))?;
            f.write_fmt(format_args!("{:─<1$}\x1b[0m", "", width))?;
        }

        if !next_line.is_empty() {
            current_line_number += 1;
            f.write_fmt(format_args!(
                "\n {current_line_number: >padding$} │ {next_line}"
            ))?;
        }

        f.write_fmt(format_args!("\n {: <1$} ╰────\n", "", padding))?;
        self.display_help(f)
    }

    fn display_help(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(help) = &self.help {
            f.write_fmt(format_args!(" \x1b[36mhelp:\x1b[0m {help}\n"))?;
        }
        Ok(())
    }
}
impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(' ')?;
        self.severity.color_start(f)?;
        self.severity.fmt(f)?;
        f.write_char(' ')?;
        self.problem.fmt(f)?;
        Severity::color_reset(f)
    }
}

#[derive(Debug)]
/// The list of errors reported for the given document
pub struct Report<'input> {
    /// The source data that the errors were reported for
    pub source: &'input str,
    /// The list of errors that the linter found for the document
    pub errors: Vec<Error<'input>>,
    /// The path of the source data
    pub path: Option<PathBuf>,
}
impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for error in &self.errors {
            error.fmt(f)?;
            error.display_context(f, self.source, self.path.as_ref())?;
        }
        Ok(())
    }
}
impl std::error::Error for Report<'_> {}

impl std::fmt::Display for LintingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(err) => err.fmt(f),
            Self::Reported { errors, warnings } => f.write_fmt(format_args!(
                "Found {warnings} warning{} and {errors} error{}.",
                if *warnings == 1 { "" } else { "s" },
                if *errors == 1 { "" } else { "s" }
            )),
        }
    }
}
impl std::error::Error for LintingError {}
