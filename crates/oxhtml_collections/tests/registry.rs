use oxhtml_collections::{
    content_model_of, is_element, is_html_element, is_mathml_element, tag_omission, ContentModel,
    ElementId, HtmlElement, MathMlElement, Namespace, TagOmission,
};

#[test]
fn tokenizer_switches() {
    // A tokenizer deciding what state to enter after a start tag
    let states: Vec<_> = ["p", "SCRIPT", "Title", "math", "MATH", "blink"]
        .into_iter()
        .map(|name| match ElementId::from_name(name) {
            Some(ElementId::MathMl(MathMlElement::Math)) => "foreign",
            Some(id) => match id.content_model() {
                ContentModel::Normal => "data",
                ContentModel::RawText => "rawtext",
                ContentModel::ReplaceableData => "rcdata",
            },
            None => "unknown",
        })
        .collect();
    assert_eq!(
        states,
        ["data", "rawtext", "rcdata", "foreign", "unknown", "unknown"]
    );
}

#[test]
fn serializer_omissions() {
    let omitted: Vec<_> = HtmlElement::ALL
        .iter()
        .filter(|element| element.tag_omission().contains(TagOmission::Start))
        .map(|element| element.name())
        .collect();
    assert_eq!(omitted, ["body", "colgroup", "head", "html", "tbody"]);

    assert_eq!(tag_omission("LI"), TagOmission::End);
    assert_eq!(content_model_of("Style"), ContentModel::RawText);
}

#[test]
fn namespaces() {
    assert_eq!(
        ElementId::from_name("mi").map(ElementId::namespace),
        Some(Namespace::MathMl)
    );
    assert_eq!(
        ElementId::from_name("MI").map(ElementId::namespace),
        None
    );
    assert_eq!(
        ElementId::from_name("MeTa").map(ElementId::namespace),
        Some(Namespace::Html)
    );
}

#[test]
fn queries_are_total() {
    for name in ["", "\0", "🦀", "a\u{0301}", "ＤＩＶ", "div\0", "div".repeat(100).as_str()] {
        assert!(!is_html_element(name), "{name:?}");
        assert!(!is_mathml_element(name), "{name:?}");
        assert!(!is_element(name), "{name:?}");
        assert_eq!(content_model_of(name), ContentModel::Normal);
        assert_eq!(tag_omission(name), TagOmission::empty());
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde() -> serde_json::Result<()> {
    assert_eq!(
        serde_json::to_string(&HtmlElement::Blockquote)?,
        r#""blockquote""#
    );
    assert_eq!(
        serde_json::from_str::<ElementId>(r#""mfrac""#)?,
        ElementId::MathMl(MathMlElement::Mfrac)
    );
    assert_eq!(
        serde_json::to_string(&ContentModel::ReplaceableData)?,
        r#""replaceableData""#
    );
    Ok(())
}
