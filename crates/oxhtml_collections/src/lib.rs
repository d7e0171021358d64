//! Collections of data and types for HTML and MathML element names
//!
//! The vocabularies are compile-time perfect-hash tables, so every query in this crate is
//! pure and safe to call from any number of threads.

#[macro_use]
extern crate bitflags;

pub mod element;
pub mod name;
pub mod registry;

pub use element::{ContentModel, ElementId, ElementInfo, HtmlElement, MathMlElement, TagOmission};
pub use name::Namespace;
pub use registry::{
    content_model_of, is_element, is_html_element, is_mathml_element, is_void_element,
    tag_omission,
};
