#![cfg(test)]

use crate::test_utils::{el, el_attrs, page, render_body, render_collecting, render_with, text};
use html2txt_dom::parse_document;

#[test]
fn test_inline_markup() {
    let doc = parse_document(
        r#"<html>
  <body>
    This is <a href="http://unkrig.de">a link</a>.<br />
    This is <a name="middle" />an anchor.<br />
    This is <abbr>an abbreviation</abbr>.<br />
    This is <b>bold text</b>.<br />
    This is <button>a button</button>.<br />
    This text is <em>emphasized</em>.<br />
    This is an image: <img /><br />
    This is an input control: <input /><br />
    This is <kbd>keyboard text</kbd>.<br />
    This is <q>a quote</q>.<br />
    This is <sup>superscript text</sup>.<br />
    This is <tt>teletype-style text</tt>.<br />
    This is <u>underlined text</u>.<br />
    This is <var>variable text</var>.
  </body>
</html>
"#,
    )
    .unwrap();
    let lines = render_with(&doc, &page(80)).unwrap();
    assert_eq!(
        lines,
        vec![
            "This is a link (see \"http://unkrig.de\").",
            "This is an anchor.",
            "This is an abbreviation.",
            "This is *bold text*.",
            "This is [ a button ].",
            "This text is <emphasized>.",
            "This is an image: [IMG]",
            "This is an input control: []",
            "This is [ keyboard text ].",
            "This is \"a quote\".",
            "This is ^superscript text.",
            "This is teletype-style text.",
            "This is _underlined text_.",
            "This is <variable text>.",
        ]
    );
}

#[test]
fn test_attributes_add_context() {
    let lines = render_body(vec![
        el_attrs("abbr", &[("title", "HyperText Markup Language")], vec![text("HTML")]),
        el("br", vec![]),
        el_attrs("q", &[("cite", "Hamlet")], vec![text("To be")]),
    ]);
    assert_eq!(
        lines,
        vec!["HTML (\"HyperText Markup Language\")", "\"To be\" (Hamlet)"]
    );
}

#[test]
fn test_inline_diagnostics() {
    let doc = crate::test_utils::html(vec![
        el_attrs("a", &[("name", "n")], vec![text("dropped")]),
        el_attrs("a", &[("name", "n"), ("href", "h")], vec![text(" kept")]),
        el("br", vec![text("x")]),
        el("b", vec![el("div", vec![text("block in inline")])]),
        el("bdo", vec![text(" bdo")]),
    ]);
    let (lines, messages) = render_collecting(&doc, &page(80));
    assert_eq!(lines, vec!["kept", "** bdo"]);
    assert_eq!(messages.len(), 5);
    assert!(messages[0].contains("should not have content"));
    assert!(messages[1].contains("exactly one of"));
    assert!(messages[2].contains("<br>"));
    assert!(messages[3].contains("Unexpected element <div>"));
    assert!(messages[4].contains("<bdo> is not yet implemented"));
}

#[test]
fn test_strict_handler_aborts_on_unexpected_inline_element() {
    let doc = crate::test_utils::html(vec![el("b", vec![el("p", vec![text("x")])])]);
    let err = render_with(&doc, &page(80)).unwrap_err();
    assert_eq!(err.severity, crate::Severity::Error);
    assert_eq!(err.node.description, "<p>");
}
