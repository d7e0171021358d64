//! Data that can be assigned to an element name.
//!
//! Essentially an embedding of the [HTML 5](http://dev.w3.org/html5/markup/elements.html) element
//! index and the presentation subset of [MathML](https://developer.mozilla.org/en-US/docs/Web/MathML/Reference/Element).
//! Content model and tag omission data is from the
//! [WHATWG HTML standard](https://html.spec.whatwg.org/multipage/syntax.html#elements-2).

use crate::name::Namespace;
use std::fmt::Display;

pub use info::{ContentModel, ElementInfo, TagOmission};

mod info;

macro_rules! info_else {
    ($info:expr) => {
        $info
    };
    () => {
        ElementInfo::empty()
    };
}

macro_rules! define_elements {
    (
        $(#[$meta:meta])*
        $id:ident in $namespace:ident as $set:ident {
            $($element:ident {
                name: $name:tt,
                $(info: $info:expr,)?
            },)+
        }
    ) => {
        #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $(#[$meta])*
        pub enum $id {
            $(
                #[doc=concat!("The `", $name, "` element")]
                #[cfg_attr(feature = "serde", serde(rename = $name))]
                $element,
            )+
        }

        static $set: phf::Map<&'static str, $id> = phf::phf_map! {
            $($name => $id::$element,)+
        };

        impl $id {
            /// Every element of the vocabulary
            pub const ALL: &'static [Self] = &[$(Self::$element,)+];

            /// The length of the longest name in the vocabulary
            pub const MAX_NAME_LEN: usize = {
                let names: &[&str] = &[$($name,)+];
                let mut max = 0;
                let mut i = 0;
                while i < names.len() {
                    if names[i].len() > max {
                        max = names[i].len();
                    }
                    i += 1;
                }
                max
            };

            /// Returns the element whose canonical name is exactly `name`
            pub fn from_exact(name: &str) -> Option<Self> {
                $set.get(name).copied()
            }

            /// Returns the canonical name of the element
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$element => $name,)+
                }
            }

            /// Returns the namespace of the element
            pub const fn namespace(self) -> Namespace {
                Namespace::$namespace
            }

            /// Returns info flags about this element.
            pub const fn info(self) -> ElementInfo {
                match self {
                    $(Self::$element => info_else!($($info)?),)+
                }
            }

            /// Returns how the body of this element is tokenized
            pub const fn content_model(self) -> ContentModel {
                self.info().content_model()
            }

            /// Returns which of this element's tags may be omitted
            pub const fn tag_omission(self) -> TagOmission {
                self.info().tag_omission()
            }

            /// Whether the element has no content and no end tag
            pub const fn is_void(self) -> bool {
                self.info().contains(ElementInfo::Void)
            }

            /// Whether the element is obsolete in current standards
            pub const fn is_legacy(self) -> bool {
                self.info().contains(ElementInfo::Legacy)
            }

            /// Whether the element's children are parsed as HTML within foreign content
            pub const fn is_text_integration_point(self) -> bool {
                self.info().contains(ElementInfo::TextIntegrationPoint)
            }
        }

        impl Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Folds `name` to ASCII lowercase, borrowing `buf` only when `name` contains uppercase.
///
/// Returns `None` when `name` is too long to fit `buf`.
fn fold_ascii_lowercase<'a>(name: &'a str, buf: &'a mut [u8]) -> Option<&'a str> {
    if !name.bytes().any(|byte| byte.is_ascii_uppercase()) {
        return Some(name);
    }
    let folded = buf.get_mut(..name.len())?;
    folded.copy_from_slice(name.as_bytes());
    folded.make_ascii_lowercase();
    // Only ASCII bytes were changed, so the result is still valid UTF-8
    std::str::from_utf8(folded).ok()
}

impl HtmlElement {
    /// Returns the element named by `name`, ignoring ASCII case.
    ///
    /// Non-ASCII characters are compared as is, so `DİV` is not `div`.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut buf = [0; Self::MAX_NAME_LEN];
        Self::from_exact(fold_ascii_lowercase(name, &mut buf)?)
    }
}

impl MathMlElement {
    /// Returns the element named by `name`.
    ///
    /// MathML names are case-sensitive, so `MFrac` is not `mfrac`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_exact(name)
    }

    /// Returns the element named by `name` when ASCII case is ignored.
    ///
    /// This is useful for diagnostics, where `MFrac` should hint at `mfrac`, but shouldn't
    /// be used for classification.
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        let mut buf = [0; Self::MAX_NAME_LEN];
        Self::from_exact(fold_ascii_lowercase(name, &mut buf)?)
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
/// Identifies a recognised element by its namespace and local-name
pub enum ElementId {
    /// A standard HTML element
    Html(HtmlElement),
    /// A MathML presentation element
    MathMl(MathMlElement),
}

impl ElementId {
    /// Returns the element named by `name`, using the case rules of each vocabulary.
    ///
    /// HTML names are matched ignoring ASCII case, MathML names are matched exactly.
    pub fn from_name(name: &str) -> Option<Self> {
        let id = HtmlElement::from_name(name)
            .map(Self::Html)
            .or_else(|| MathMlElement::from_name(name).map(Self::MathMl));
        if id.is_none() {
            log::trace!("`{name}` is not a recognised element");
        }
        id
    }

    /// Returns the canonical name of the element
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html(element) => element.name(),
            Self::MathMl(element) => element.name(),
        }
    }

    /// Returns the namespace of the element
    pub const fn namespace(self) -> Namespace {
        match self {
            Self::Html(element) => element.namespace(),
            Self::MathMl(element) => element.namespace(),
        }
    }

    /// Returns info flags about this element.
    pub const fn info(self) -> ElementInfo {
        match self {
            Self::Html(element) => element.info(),
            Self::MathMl(element) => element.info(),
        }
    }

    /// Returns how the body of this element is tokenized
    pub const fn content_model(self) -> ContentModel {
        self.info().content_model()
    }

    /// Returns which of this element's tags may be omitted
    pub const fn tag_omission(self) -> TagOmission {
        self.info().tag_omission()
    }

    /// Whether the element has no content and no end tag
    pub const fn is_void(self) -> bool {
        self.info().contains(ElementInfo::Void)
    }

    /// Whether the element is obsolete in current standards
    pub const fn is_legacy(self) -> bool {
        self.info().contains(ElementInfo::Legacy)
    }

    /// Whether the element's children are parsed as HTML within foreign content
    pub const fn is_text_integration_point(self) -> bool {
        self.info().contains(ElementInfo::TextIntegrationPoint)
    }
}

impl From<HtmlElement> for ElementId {
    fn from(value: HtmlElement) -> Self {
        Self::Html(value)
    }
}

impl From<MathMlElement> for ElementId {
    fn from(value: MathMlElement) -> Self {
        Self::MathMl(value)
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Start and end tags may be omitted
const OMIT_BOTH: ElementInfo = ElementInfo::OmitStart.union(ElementInfo::OmitEnd);

// NOTE: Elements are ordered according to the element index, with `data` left out
// [w3 | HTML 5](http://dev.w3.org/html5/markup/elements.html)
define_elements! {
    /// Identifies a standard HTML element.
    ///
    /// [MDN | HTML element reference](https://developer.mozilla.org/en-US/docs/Web/HTML/Reference/Elements)
    HtmlElement in Html as HTML_ELEMENTS {
        A { name: "a", },
        Abbr { name: "abbr", },
        Address { name: "address", },
        Area { name: "area", info: ElementInfo::Void, },
        Article { name: "article", },
        Aside { name: "aside", },
        Audio { name: "audio", },
        B { name: "b", },
        Base { name: "base", info: ElementInfo::Void, },
        Bdi { name: "bdi", },
        Bdo { name: "bdo", },
        Blockquote { name: "blockquote", },
        Body { name: "body", info: OMIT_BOTH, },
        Br { name: "br", info: ElementInfo::Void, },
        Button { name: "button", },
        Canvas { name: "canvas", },
        Caption { name: "caption", info: ElementInfo::OmitEnd, },
        Cite { name: "cite", },
        Code { name: "code", },
        Col { name: "col", info: ElementInfo::Void, },
        Colgroup { name: "colgroup", info: OMIT_BOTH, },
        Command { name: "command", info: ElementInfo::Void.union(ElementInfo::Legacy), },
        Datalist { name: "datalist", },
        Dd { name: "dd", info: ElementInfo::OmitEnd, },
        Del { name: "del", },
        Details { name: "details", },
        Dfn { name: "dfn", },
        Dialog { name: "dialog", },
        Div { name: "div", },
        Dl { name: "dl", },
        Dt { name: "dt", info: ElementInfo::OmitEnd, },
        Em { name: "em", },
        Embed { name: "embed", info: ElementInfo::Void, },
        Fieldset { name: "fieldset", },
        Figcaption { name: "figcaption", },
        Figure { name: "figure", },
        Footer { name: "footer", },
        Form { name: "form", },
        H1 { name: "h1", },
        H2 { name: "h2", },
        H3 { name: "h3", },
        H4 { name: "h4", },
        H5 { name: "h5", },
        H6 { name: "h6", },
        Head { name: "head", info: OMIT_BOTH, },
        Header { name: "header", },
        Hgroup { name: "hgroup", },
        Hr { name: "hr", info: ElementInfo::Void, },
        Html { name: "html", info: OMIT_BOTH, },
        I { name: "i", },
        Iframe { name: "iframe", info: ElementInfo::RawText, },
        Img { name: "img", info: ElementInfo::Void, },
        Input { name: "input", info: ElementInfo::Void, },
        Kbd { name: "kbd", },
        Ins { name: "ins", },
        Keygen { name: "keygen", info: ElementInfo::Void.union(ElementInfo::Legacy), },
        Label { name: "label", },
        Legend { name: "legend", },
        Li { name: "li", info: ElementInfo::OmitEnd, },
        Link { name: "link", info: ElementInfo::Void, },
        Map { name: "map", },
        Mark { name: "mark", },
        Menu { name: "menu", },
        Meta { name: "meta", info: ElementInfo::Void, },
        Meter { name: "meter", },
        Nav { name: "nav", },
        // NOTE: Treated as normal content, i.e. as if scripting is disabled
        Noscript { name: "noscript", },
        Object { name: "object", },
        Ol { name: "ol", },
        Optgroup { name: "optgroup", info: ElementInfo::OmitEnd, },
        Option { name: "option", info: ElementInfo::OmitEnd, },
        Output { name: "output", },
        P { name: "p", info: ElementInfo::OmitEnd, },
        Param { name: "param", info: ElementInfo::Void, },
        Pre { name: "pre", },
        Progress { name: "progress", },
        Q { name: "q", },
        Rp { name: "rp", info: ElementInfo::OmitEnd, },
        Rt { name: "rt", info: ElementInfo::OmitEnd, },
        Ruby { name: "ruby", },
        S { name: "s", },
        Samp { name: "samp", },
        Script { name: "script", info: ElementInfo::RawText, },
        Section { name: "section", },
        Select { name: "select", },
        Small { name: "small", },
        Source { name: "source", info: ElementInfo::Void, },
        Span { name: "span", },
        Strong { name: "strong", },
        Style { name: "style", info: ElementInfo::RawText, },
        Sub { name: "sub", },
        Summary { name: "summary", },
        Sup { name: "sup", },
        Table { name: "table", },
        Tbody { name: "tbody", info: OMIT_BOTH, },
        Td { name: "td", info: ElementInfo::OmitEnd, },
        Textarea { name: "textarea", info: ElementInfo::ReplaceableData, },
        Tfoot { name: "tfoot", info: ElementInfo::OmitEnd, },
        Th { name: "th", info: ElementInfo::OmitEnd, },
        Thead { name: "thead", info: ElementInfo::OmitEnd, },
        Time { name: "time", },
        Title { name: "title", info: ElementInfo::ReplaceableData, },
        Tr { name: "tr", info: ElementInfo::OmitEnd, },
        Track { name: "track", info: ElementInfo::Void, },
        U { name: "u", },
        Ul { name: "ul", },
        Var { name: "var", },
        Video { name: "video", },
        Wbr { name: "wbr", info: ElementInfo::Void, },
    }
}

// NOTE: Only presentation MathML is included, content MathML is not recognised
// [w3 | MathML elements](http://www.w3.org/wiki/MathML/Elements)
define_elements! {
    /// Identifies a MathML presentation element.
    ///
    /// [MDN | MathML element reference](https://developer.mozilla.org/en-US/docs/Web/MathML/Reference/Element)
    MathMlElement in MathMl as MATHML_ELEMENTS {
        Maction { name: "maction", },
        Maligngroup { name: "maligngroup", },
        Malignmark { name: "malignmark", },
        Math { name: "math", },
        Menclose { name: "menclose", },
        Merror { name: "merror", },
        Mfenced { name: "mfenced", info: ElementInfo::Legacy, },
        Mfrac { name: "mfrac", },
        Mglyph { name: "mglyph", },
        Mi { name: "mi", info: ElementInfo::TextIntegrationPoint, },
        Mlabeledtr { name: "mlabeledtr", },
        Mlongdiv { name: "mlongdiv", },
        Mmultiscripts { name: "mmultiscripts", },
        Mn { name: "mn", info: ElementInfo::TextIntegrationPoint, },
        Mo { name: "mo", info: ElementInfo::TextIntegrationPoint, },
        Mover { name: "mover", },
        Mpadded { name: "mpadded", },
        Mphantom { name: "mphantom", },
        Mroot { name: "mroot", },
        Mrow { name: "mrow", },
        Ms { name: "ms", info: ElementInfo::TextIntegrationPoint, },
        Mscarries { name: "mscarries", },
        Mscarry { name: "mscarry", },
        Msgroup { name: "msgroup", },
        Msline { name: "msline", },
        Mspace { name: "mspace", },
        Msqrt { name: "msqrt", },
        Msrow { name: "msrow", },
        Mstack { name: "mstack", },
        Mstyle { name: "mstyle", },
        Msub { name: "msub", },
        Msup { name: "msup", },
        Msubsup { name: "msubsup", },
        Mtable { name: "mtable", },
        Mtd { name: "mtd", },
        Mtext { name: "mtext", info: ElementInfo::TextIntegrationPoint, },
        Mtr { name: "mtr", },
        Munder { name: "munder", },
        Munderover { name: "munderover", },
    }
}

#[cfg(test)]
mod test {
    use super::{
        fold_ascii_lowercase, ContentModel, ElementId, ElementInfo, HtmlElement, MathMlElement,
        TagOmission,
    };
    use crate::name::Namespace;
    use pretty_assertions::assert_eq;

    #[test]
    fn vocabulary_sizes() {
        assert_eq!(HtmlElement::ALL.len(), 109);
        assert_eq!(MathMlElement::ALL.len(), 39);
        assert_eq!(HtmlElement::MAX_NAME_LEN, "blockquote".len());
        assert_eq!(MathMlElement::MAX_NAME_LEN, "mmultiscripts".len());
    }

    #[test]
    fn names_are_canonical() {
        for element in HtmlElement::ALL {
            let name = element.name();
            assert_eq!(name, name.to_ascii_lowercase());
            assert_eq!(HtmlElement::from_exact(name), Some(*element));
            assert_eq!(element.namespace(), Namespace::Html);
        }
        for element in MathMlElement::ALL {
            assert_eq!(MathMlElement::from_exact(element.name()), Some(*element));
            assert_eq!(element.namespace(), Namespace::MathMl);
        }
    }

    #[test]
    fn fold() {
        let mut buf = [0; 8];
        assert_eq!(fold_ascii_lowercase("div", &mut buf), Some("div"));
        let mut buf = [0; 8];
        assert_eq!(fold_ascii_lowercase("DiV", &mut buf), Some("div"));
        let mut buf = [0; 2];
        assert_eq!(fold_ascii_lowercase("DIV", &mut buf), None);
        let mut buf = [0; 8];
        assert_eq!(fold_ascii_lowercase("Dİv", &mut buf), Some("dİv"));
    }

    #[test]
    fn html_from_name() {
        assert_eq!(HtmlElement::from_name("a"), Some(HtmlElement::A));
        assert_eq!(HtmlElement::from_name("A"), Some(HtmlElement::A));
        assert_eq!(
            HtmlElement::from_name("BlockQuote"),
            Some(HtmlElement::Blockquote)
        );
        assert_eq!(HtmlElement::from_name("blockquotes"), None);
        assert_eq!(HtmlElement::from_name("BLOCKQUOTES"), None);
        assert_eq!(HtmlElement::from_name("data"), None);
        assert_eq!(HtmlElement::from_name(""), None);
        // Kelvin sign is not folded to `k`
        assert_eq!(HtmlElement::from_name("\u{212A}bd"), None);
    }

    #[test]
    fn mathml_from_name() {
        assert_eq!(MathMlElement::from_name("mfrac"), Some(MathMlElement::Mfrac));
        assert_eq!(MathMlElement::from_name("MFrac"), None);
        assert_eq!(MathMlElement::from_name("Math"), None);
        assert_eq!(
            MathMlElement::from_name_ignore_case("MFrac"),
            Some(MathMlElement::Mfrac)
        );
        assert_eq!(MathMlElement::from_name_ignore_case("div"), None);
    }

    #[test]
    fn element_id_from_name() {
        assert_eq!(
            ElementId::from_name("TABLE"),
            Some(ElementId::Html(HtmlElement::Table))
        );
        assert_eq!(
            ElementId::from_name("mrow"),
            Some(ElementId::MathMl(MathMlElement::Mrow))
        );
        assert_eq!(ElementId::from_name("MROW"), None);
        assert_eq!(ElementId::from_name("svg"), None);
        assert_eq!(
            ElementId::from(MathMlElement::Math).namespace(),
            Namespace::MathMl
        );
    }

    #[test]
    fn html_info() {
        assert_eq!(HtmlElement::Script.content_model(), ContentModel::RawText);
        assert_eq!(HtmlElement::Style.content_model(), ContentModel::RawText);
        assert_eq!(HtmlElement::Iframe.content_model(), ContentModel::RawText);
        assert_eq!(
            HtmlElement::Title.content_model(),
            ContentModel::ReplaceableData
        );
        assert_eq!(
            HtmlElement::Textarea.content_model(),
            ContentModel::ReplaceableData
        );
        assert_eq!(HtmlElement::Noscript.content_model(), ContentModel::Normal);
        assert_eq!(HtmlElement::Div.content_model(), ContentModel::Normal);

        assert_eq!(HtmlElement::Html.tag_omission(), TagOmission::all());
        assert_eq!(HtmlElement::P.tag_omission(), TagOmission::End);
        assert_eq!(HtmlElement::Div.tag_omission(), TagOmission::empty());
        assert_eq!(HtmlElement::Br.tag_omission(), TagOmission::empty());

        assert!(HtmlElement::Br.is_void());
        assert!(!HtmlElement::P.is_void());
        assert!(HtmlElement::Keygen.is_legacy());
        assert!(!HtmlElement::Div.is_legacy());
    }

    #[test]
    fn mathml_info() {
        for element in MathMlElement::ALL {
            assert_eq!(element.content_model(), ContentModel::Normal);
            assert_eq!(element.tag_omission(), TagOmission::empty());
            assert!(!element.is_void());
        }
        assert!(MathMlElement::Mtext.is_text_integration_point());
        assert!(!MathMlElement::Mrow.is_text_integration_point());
        assert!(MathMlElement::Mfenced.is_legacy());
    }

    #[test]
    fn no_element_is_both_raw_and_replaceable() {
        let both = ElementInfo::RawText.union(ElementInfo::ReplaceableData);
        for element in HtmlElement::ALL {
            assert!(!element.info().contains(both), "{element}");
        }
    }

    #[test]
    fn void_elements_have_no_content() {
        for element in HtmlElement::ALL.iter().filter(|element| element.is_void()) {
            assert_eq!(element.content_model(), ContentModel::Normal, "{element}");
            assert_eq!(element.tag_omission(), TagOmission::empty(), "{element}");
        }
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(HtmlElement::Figcaption, @"figcaption");
        insta::assert_snapshot!(ElementId::MathMl(MathMlElement::Munderover), @"munderover");
    }
}
