use std::ops::Range;

use crate::error::{Error, Problem};

use super::Severity;

pub fn no_unknown_elements<'input>(
    name: &'input str,
    range: Option<&Range<usize>>,
    severity: Severity,
) -> Option<Error<'input>> {
    // NOTE: Only called for names that aren't recognised
    log::debug!("reporting unknown element `{name}`");
    Some(Error {
        problem: Problem::UnknownElement { name },
        severity,
        range: range.cloned(),
        help: name.contains(':').then(|| {
            String::from("Prefixed names aren't resolved to a namespace, try an unprefixed name")
        }),
    })
}
