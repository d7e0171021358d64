use std::ops::Range;

use oxhtml_collections::MathMlElement;

use crate::error::{Error, Problem};

use super::Severity;

pub fn no_miscased_math_elements<'input>(
    name: &'input str,
    range: Option<&Range<usize>>,
    severity: Severity,
) -> Option<Error<'input>> {
    if MathMlElement::from_name(name).is_some() {
        return None;
    }
    let element = MathMlElement::from_name_ignore_case(name)?;
    log::debug!("reporting `{name}` as miscased `{element}`");
    Some(Error {
        problem: Problem::MiscasedMathElement { name, element },
        severity,
        range: range.cloned(),
        help: Some(format!(
            "MathML names are case-sensitive, replace `{name}` with `{element}`"
        )),
    })
}
