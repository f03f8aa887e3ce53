#![cfg(test)]

use crate::test_utils::{
    ONE_THRU_TWENTYFIVE, el, el_attrs, html, page, render_body, render_collecting, render_with,
    text,
};
use html2txt_dom::Element;
use crate::{BlockContext, Bulleting, Bullets, LayoutEngine, PageConfig, StrictErrorHandler};

#[test]
fn test_simple_text() {
    let lines = render_body(vec![text("\n    BLA\n  ")]);
    assert_eq!(lines, vec!["BLA"]);
}

#[test]
fn test_text_wrapping_at_last_fitting_space() {
    let doc = html(vec![text(ONE_THRU_TWENTYFIVE)]);
    let lines = render_with(&doc, &page(80)).unwrap();
    assert_eq!(
        lines,
        vec![
            "one two three four five six seven eight nine ten eleven twelve thirteen",
            "fourteen fifteen sixteen seventeen eighteen nineteen twenty twenty-one",
            "twenty-two twenty-three twenty-four twenty-five",
        ]
    );
}

#[test]
fn test_alignments() {
    let doc = html(vec![
        el_attrs("div", &[("align", "left")], vec![text(ONE_THRU_TWENTYFIVE)]),
        el_attrs("div", &[("align", "right")], vec![text(ONE_THRU_TWENTYFIVE)]),
        el_attrs("div", &[("align", "center")], vec![text(ONE_THRU_TWENTYFIVE)]),
        el_attrs("div", &[("align", "justify")], vec![text(ONE_THRU_TWENTYFIVE)]),
    ]);
    let lines = render_with(&doc, &page(80)).unwrap();
    assert_eq!(
        lines,
        vec![
            "one two three four five six seven eight nine ten eleven twelve thirteen",
            "fourteen fifteen sixteen seventeen eighteen nineteen twenty twenty-one",
            "twenty-two twenty-three twenty-four twenty-five",
            "        one two three four five six seven eight nine ten eleven twelve thirteen",
            "         fourteen fifteen sixteen seventeen eighteen nineteen twenty twenty-one",
            "                                twenty-two twenty-three twenty-four twenty-five",
            "    one two three four five six seven eight nine ten eleven twelve thirteen",
            "    fourteen fifteen sixteen seventeen eighteen nineteen twenty twenty-one",
            "                twenty-two twenty-three twenty-four twenty-five",
            "one  two  three four  five  six seven  eight  nine ten  eleven  twelve thirteen",
            "fourteen   fifteen  sixteen  seventeen   eighteen  nineteen  twenty  twenty-one",
            "twenty-two twenty-three twenty-four twenty-five",
        ]
    );
}

#[test]
fn test_alignment_is_inherited() {
    let doc = html(vec![el_attrs(
        "div",
        &[("align", "right")],
        vec![
            text(ONE_THRU_TWENTYFIVE),
            el("div", vec![text(ONE_THRU_TWENTYFIVE)]),
            el_attrs("div", &[("align", "center")], vec![text(ONE_THRU_TWENTYFIVE)]),
            text(ONE_THRU_TWENTYFIVE),
        ],
    )]);
    let lines = render_with(&doc, &page(80)).unwrap();
    let right = [
        "        one two three four five six seven eight nine ten eleven twelve thirteen",
        "         fourteen fifteen sixteen seventeen eighteen nineteen twenty twenty-one",
        "                                twenty-two twenty-three twenty-four twenty-five",
    ];
    let center = [
        "    one two three four five six seven eight nine ten eleven twelve thirteen",
        "    fourteen fifteen sixteen seventeen eighteen nineteen twenty twenty-one",
        "                twenty-two twenty-three twenty-four twenty-five",
    ];
    let expected: Vec<&str> = [right, right, center, right].concat();
    assert_eq!(lines, expected);
}

#[test]
fn test_long_word_is_not_broken() {
    let doc = html(vec![text("a supercalifragilistic word")]);
    let lines = render_with(&doc, &page(11)).unwrap();
    assert_eq!(lines, vec!["a", "supercalifragilistic", "word"]);
}

#[test]
fn test_pathologically_narrow_page() {
    let narrow = PageConfig {
        page_width: 2,
        left_margin: 3,
        right_margin: 5,
    };
    let doc = html(vec![text("ab cd-ef")]);
    let lines = render_with(&doc, &narrow).unwrap();
    assert_eq!(lines, vec!["   ab", "   cd-", "   ef"]);
}

#[test]
fn test_line_breaks_force_new_lines() {
    let lines = render_body(vec![
        text("first"),
        el("br", vec![]),
        text("\n   second"),
        el("br", vec![]),
        el("br", vec![]),
        text("third"),
    ]);
    assert_eq!(lines, vec!["first", "second", "third"]);
}

#[test]
fn test_headings() {
    let lines = render_body(vec![
        el("h1", vec![text("Title")]),
        el("p", vec![text("Body")]),
        el("h2", vec![text("Sub  title")]),
        el("h4", vec![text("Four")]),
        el("h6", vec![text("Six")]),
        el("h3", vec![]),
    ]);
    assert_eq!(
        lines,
        vec![
            "Title", "*****", "", "Body", "", "Sub title", "=========", "", "=== Four ===",
            "= Six =",
        ]
    );
}

#[test]
fn test_heading_is_indented_with_its_block() {
    let lines = render_body(vec![el("blockquote", vec![el("h5", vec![text("Quoted")])])]);
    assert_eq!(lines, vec!["  == Quoted =="]);
}

#[test]
fn test_preformatted_keeps_spacing() {
    let lines = render_body(vec![el(
        "blockquote",
        vec![el(
            "pre",
            vec![
                text("\nfn main() {\n    run(<"),
                el("b", vec![text("x")]),
                text(">);\n}\n"),
            ],
        )],
    )]);
    assert_eq!(lines, vec!["  fn main() {", "      run(<*x*>);", "  }"]);
}

#[test]
fn test_horizontal_rule_spans_the_measure() {
    let lines = render_with(
        &html(vec![text("a"), el("hr", vec![]), text("b")]),
        &page(11),
    )
    .unwrap();
    assert_eq!(lines, vec!["a", "----------", "b"]);
}

#[test]
fn test_suppressed_and_unknown_blocks() {
    let doc = html(vec![
        el("style", vec![text("p { color: red }")]),
        el("marquee", vec![text("moving")]),
        el("video", vec![text("fallback")]),
    ]);
    let (lines, messages) = render_collecting(&doc, &page(80));
    assert_eq!(lines, vec!["moving", "fallback"]);
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("<marquee> is not yet implemented"));

    assert!(render_with(&doc, &page(80)).is_err());
}

#[test]
fn test_non_html_root_is_a_single_block() {
    let doc = Element::new("blockquote").with_text("quoted");
    let lines = render_with(&doc, &page(80)).unwrap();
    assert_eq!(lines, vec!["  quoted"]);
}

#[test]
fn test_word_wrap_leaves_bullet_unused_for_empty_text() {
    let engine = LayoutEngine::new(&StrictErrorHandler);
    let bulleting = Bulleting::once("*".to_string());
    let mut lines: Vec<String> = Vec::new();
    let ctx = BlockContext::new(3, 10);
    engine.word_wrap(ctx, &bulleting, "   ", &mut lines);
    assert!(lines.is_empty());
    engine.word_wrap(ctx, &bulleting, "alpha beta gamma", &mut lines);
    assert_eq!(lines, vec![" * alpha beta", "   gamma"]);

    let none = Bulleting::None;
    engine
        .format_blocks(ctx, Bullets::both(&none), &[text("x")], &mut lines)
        .unwrap();
    assert_eq!(lines.last().map(String::as_str), Some("   x"));
}
