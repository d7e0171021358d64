use std::ops::Range;

use oxhtml_collections::ElementId;

use crate::error::{Error, Problem};

use super::Severity;

pub fn no_legacy_elements<'input>(
    element: ElementId,
    range: Option<&Range<usize>>,
    severity: Severity,
) -> Option<Error<'input>> {
    if !element.is_legacy() {
        return None;
    }
    log::debug!("reporting legacy element `{element}`");
    Some(Error {
        problem: Problem::LegacyElement { element },
        severity,
        range: range.cloned(),
        help: None,
    })
}

#[cfg(test)]
mod test {
    use super::no_legacy_elements;
    use crate::{error::Problem, Severity};
    use oxhtml_collections::{ElementId, HtmlElement, MathMlElement};

    #[test]
    fn report_legacy_element_ok() {
        let report = no_legacy_elements(HtmlElement::Div.into(), None, Severity::Warn);
        assert!(report.is_none());
    }

    #[test]
    fn report_legacy_element() {
        let element = ElementId::MathMl(MathMlElement::Mfenced);
        let report = no_legacy_elements(element, Some(&(0..0)), Severity::Warn).unwrap();
        assert_eq!(report.problem, Problem::LegacyElement { element });
        assert_eq!(report.severity, Severity::Warn);
        assert_eq!(report.range, Some(0..0));
    }
}
