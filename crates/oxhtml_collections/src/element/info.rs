//! Content model and serialisation info for elements
bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Specifies how an element is parsed and serialised
    pub struct ElementInfo: u16 {
        /// The element's body is raw text, e.g. `<script>`
        const RawText = 1 << 0;
        /// The element's body is only parsed for character references, e.g. `<title>`
        const ReplaceableData = 1 << 1;
        /// The element's start tag may be omitted
        const OmitStart = 1 << 2;
        /// The element's end tag may be omitted
        const OmitEnd = 1 << 3;
        /// The element has no content and no end tag, e.g. `<br>`
        const Void = 1 << 4;
        /// The element's children are parsed as HTML when nested in foreign content
        const TextIntegrationPoint = 1 << 5;
        /// Element is a legacy element
        const Legacy = 1 << 6;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Which tags of an element may be left out of serialised output.
    ///
    /// An empty set means neither tag can be omitted.
    pub struct TagOmission: u8 {
        /// The start tag may be omitted
        const Start = 1 << 0;
        /// The end tag may be omitted
        const End = 1 << 1;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
/// How the body of an element is tokenized
pub enum ContentModel {
    #[default]
    /// The body is parsed as nested markup
    Normal,
    /// The body is not parsed as markup at all
    RawText,
    /// The body is parsed for character references but not for nested tags
    ReplaceableData,
}

impl ElementInfo {
    /// Returns the content model described by the flags.
    ///
    /// `RawText` takes precedence, though no known element carries both flags.
    pub const fn content_model(self) -> ContentModel {
        if self.contains(Self::RawText) {
            ContentModel::RawText
        } else if self.contains(Self::ReplaceableData) {
            ContentModel::ReplaceableData
        } else {
            ContentModel::Normal
        }
    }

    /// Returns which tags may be omitted according to the flags.
    pub const fn tag_omission(self) -> TagOmission {
        let mut omission = TagOmission::empty();
        if self.contains(Self::OmitStart) {
            omission = omission.union(TagOmission::Start);
        }
        if self.contains(Self::OmitEnd) {
            omission = omission.union(TagOmission::End);
        }
        omission
    }
}
