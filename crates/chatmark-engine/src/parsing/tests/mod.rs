//! Integration tests for the parsing module.
//!
//! Each case runs the full pipeline and checks the output against
//! [`invariants::check`] as well as the expected segments.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    parsing::{Parser, expand_list_item, parse_formatted_text},
    segment::Segment,
};

fn text(s: &str) -> Segment {
    Segment::Text(s.to_string())
}

fn parse_checked(input: &str) -> Vec<Segment> {
    let segments = parse_formatted_text(input);
    invariants::check(input, &segments);
    segments
}

#[test]
fn plain_text_is_a_single_segment() {
    assert_eq!(
        parse_checked("just some words, no markup"),
        vec![text("just some words, no markup")]
    );
}

#[test]
fn bold_suppresses_nested_italic() {
    assert_eq!(
        parse_checked("**a*b*c**"),
        vec![Segment::Bold("a*b*c".to_string())]
    );
}

#[test]
fn two_bold_spans_on_one_line_stay_separate() {
    assert_eq!(
        parse_checked("**a** and **b**"),
        vec![
            Segment::Bold("a".to_string()),
            text(" and "),
            Segment::Bold("b".to_string())
        ]
    );
    assert_eq!(
        parse_checked("***a*** ***b***"),
        vec![
            Segment::Bold("a".to_string()),
            text(" "),
            Segment::Bold("b".to_string())
        ]
    );
}

#[test]
fn stray_star_does_not_extend_bold_into_next_span() {
    assert_eq!(
        parse_checked("**a* and **b**"),
        vec![text("**a* and "), Segment::Bold("b".to_string())]
    );
}

#[rstest]
#[case("#  ")]
#[case("###\t \t")]
#[case("-  ")]
#[case("+ \t")]
fn marker_with_only_whitespace_yields_nothing(#[case] input: &str) {
    assert!(parse_checked(input).is_empty());
}

#[test]
fn blank_block_line_still_gets_its_line_break() {
    assert_eq!(
        parse_checked("a\n-  \nb"),
        vec![text("a"), Segment::LineBreak, Segment::LineBreak, text("b")]
    );
}

#[rstest]
#[case("# Title", 1)]
#[case("### Title", 3)]
#[case("###### Title", 6)]
fn heading_levels(#[case] input: &str, #[case] level: u8) {
    assert_eq!(
        parse_checked(input),
        vec![Segment::Heading {
            content: "Title".to_string(),
            level
        }]
    );
}

#[test]
fn seven_hashes_fall_through_to_text() {
    assert_eq!(parse_checked("####### Title"), vec![text("####### Title")]);
}

#[test]
fn heading_content_is_left_unparsed() {
    assert_eq!(
        parse_checked("## A **big** deal"),
        vec![Segment::Heading {
            content: "A **big** deal".to_string(),
            level: 2
        }]
    );
}

#[test]
fn list_item_keeps_raw_content_and_expands_on_demand() {
    let segments = parse_checked("- **bold** item");
    assert_eq!(segments, vec![Segment::ListItem("**bold** item".to_string())]);

    assert_eq!(
        expand_list_item("**bold** item"),
        vec![Segment::Bold("bold".to_string()), text(" item")]
    );
}

#[test]
fn list_expansion_does_not_nest() {
    // `- - x` is a list item whose body is `- x`; the body stays text.
    let segments = parse_checked("- - x");
    assert_eq!(segments, vec![Segment::ListItem("- x".to_string())]);
    assert_eq!(expand_list_item("- x"), vec![text("- x")]);
}

#[test]
fn list_expansion_of_star_marker_body_is_emphasis() {
    assert_eq!(
        expand_list_item("*soft* start"),
        vec![Segment::Italic("soft".to_string()), text(" start")]
    );
}

#[test]
fn link_with_adjacent_text() {
    assert_eq!(
        parse_checked("see [docs](http://x) now"),
        vec![
            text("see "),
            Segment::Link {
                content: "docs".to_string(),
                href: "http://x".to_string()
            },
            text(" now"),
        ]
    );
}

#[test]
fn lines_are_joined_by_line_breaks() {
    assert_eq!(
        parse_checked("a\nb"),
        vec![text("a"), Segment::LineBreak, text("b")]
    );
}

#[test]
fn empty_input_yields_nothing() {
    assert!(parse_checked("").is_empty());
}

#[test]
fn newlines_only_yield_only_line_breaks() {
    assert_eq!(
        parse_checked("\n\n\n"),
        vec![Segment::LineBreak, Segment::LineBreak, Segment::LineBreak]
    );
}

#[test]
fn blank_line_between_paragraphs_keeps_both_breaks() {
    assert_eq!(
        parse_checked("one\n\ntwo"),
        vec![
            text("one"),
            Segment::LineBreak,
            Segment::LineBreak,
            text("two")
        ]
    );
}

#[test]
fn crlf_input_parses_like_lf() {
    assert_eq!(
        parse_formatted_text("# T\r\n- i\r\nx"),
        parse_formatted_text("# T\n- i\nx")
    );
}

#[test]
fn mixed_message() {
    let input = "## Steps\n- Open the **menu**\n- Click [here](http://h)\nDone, *really*.";
    assert_eq!(
        parse_checked(input),
        vec![
            Segment::Heading {
                content: "Steps".to_string(),
                level: 2
            },
            Segment::LineBreak,
            Segment::ListItem("Open the **menu**".to_string()),
            Segment::LineBreak,
            Segment::ListItem("Click [here](http://h)".to_string()),
            Segment::LineBreak,
            text("Done, "),
            Segment::Italic("really".to_string()),
            text("."),
        ]
    );
}

#[rstest]
#[case("**")]
#[case("***")]
#[case("*")]
#[case("`")]
#[case("[")]
#[case("[a](")]
#[case("** unmatched")]
#[case("a ** b ** c")]
#[case("`a``b`")]
#[case("*a**b*")]
#[case("**`x`** and [`y`](z)")]
#[case("*[a*](b)*")]
#[case("# ")]
#[case("-")]
fn malformed_input_keeps_invariants(#[case] input: &str) {
    parse_checked(input);
}

#[test]
fn pathological_delimiter_runs_keep_invariants() {
    for run in ["*", "**", "*a", "**a", "`", "[a](", "[a](b)", "* ", "*`"] {
        let input = run.repeat(500);
        parse_checked(&input);
    }
}

#[test]
fn parser_is_deterministic() {
    let parser = Parser::default();
    let input = "**a** *b* `c` [d](e)\n- *x*\n# y";
    assert_eq!(parser.parse(input), parser.parse(input));
}

#[test]
fn parser_is_shareable_across_threads() {
    let parser = Parser::default();
    let expected = parser.parse("**a** `b`");
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(parser.parse("**a** `b`"), expected));
        }
    });
}
