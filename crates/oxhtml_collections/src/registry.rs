//! Classification queries over the element vocabularies.
//!
//! HTML names are ASCII case-insensitive, whereas MathML names are case-sensitive. Each query
//! applies the case rule of the vocabulary it looks in, so `DIV` is an HTML element while
//! `MFRAC` is not a MathML element.
//!
//! None of these functions fail or allocate; malformed names are simply unrecognised.
//!
//! ```
//! use oxhtml_collections::{is_element, is_html_element, is_mathml_element};
//!
//! assert!(is_html_element("DiV"));
//! assert!(is_mathml_element("mfrac"));
//! assert!(!is_mathml_element("MFrac"));
//! assert!(!is_element("svg"));
//! ```
use crate::element::{ContentModel, HtmlElement, MathMlElement, TagOmission};

/// Whether `name` is a standard HTML element, ignoring ASCII case.
pub fn is_html_element(name: &str) -> bool {
    HtmlElement::from_name(name).is_some()
}

/// Whether `name` is exactly the name of a MathML presentation element.
pub fn is_mathml_element(name: &str) -> bool {
    MathMlElement::from_name(name).is_some()
}

/// Whether `name` is meaningful in an HTML document, counting embedded MathML.
pub fn is_element(name: &str) -> bool {
    is_html_element(name) || is_mathml_element(name)
}

/// Returns how the body of the HTML element `name` is tokenized.
///
/// MathML and unknown elements are always [`ContentModel::Normal`].
pub fn content_model_of(name: &str) -> ContentModel {
    HtmlElement::from_name(name).map_or(ContentModel::Normal, HtmlElement::content_model)
}

/// Returns which tags of the HTML element `name` may be omitted when serialised.
///
/// MathML and unknown elements never have omittable tags.
pub fn tag_omission(name: &str) -> TagOmission {
    HtmlElement::from_name(name).map_or(TagOmission::empty(), HtmlElement::tag_omission)
}

/// Whether `name` is a void HTML element, such as `br`.
pub fn is_void_element(name: &str) -> bool {
    HtmlElement::from_name(name).is_some_and(HtmlElement::is_void)
}
