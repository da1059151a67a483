use std::sync::OnceLock;

use regex::Regex;

/// Classification of a single line, borrowing from the input.
///
/// Each line is classified on its own, without reference to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// `#`..`######`, whitespace, then at least one character.
    Heading { level: usize, content: &'a str },
    /// `-`, `*` or `+`, whitespace, then at least one character.
    ListItem { content: &'a str },
    /// Anything else, handed to the inline tokenizer as-is.
    Plain(&'a str),
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX
        .get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid heading regex"))
}

fn list_item_regex() -> &'static Regex {
    static LIST_ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
    LIST_ITEM_REGEX
        .get_or_init(|| Regex::new(r"^[-*+]\s+(.+)$").expect("Invalid list item regex"))
}

/// Classifies individual lines for the line-splitting phase.
#[derive(Debug, Clone, Copy)]
pub struct LineClassifier {
    /// Whether list markers are recognised. Off inside an expanded list item,
    /// which is what keeps list expansion one level deep.
    pub list_items: bool,
}

impl LineClassifier {
    /// Rules for top-level input.
    pub const TOP_LEVEL: Self = Self { list_items: true };
    /// Rules for the body of a list item.
    pub const LIST_BODY: Self = Self { list_items: false };

    /// Classifies a line. Headings are tested before list items.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if let Some(caps) = heading_regex().captures(line)
            && let (Some(hashes), Some(content)) = (caps.get(1), caps.get(2))
        {
            return LineClass::Heading {
                level: hashes.len(),
                content: content.as_str(),
            };
        }

        if self.list_items
            && let Some(content) = list_item_regex().captures(line).and_then(|c| c.get(1))
        {
            return LineClass::ListItem {
                content: content.as_str(),
            };
        }

        LineClass::Plain(line)
    }
}

/// Splits `text` into lines on `\n`, dropping one trailing `\r` per line.
///
/// Always yields at least one (possibly empty) line, so `n` newlines give
/// `n + 1` lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("### Title", 3, "Title")]
    #[case("###### Deep", 6, "Deep")]
    #[case("##\tTabbed", 2, "Tabbed")]
    #[case("# **bold** title", 1, "**bold** title")]
    fn headings(#[case] line: &str, #[case] level: usize, #[case] content: &str) {
        assert_eq!(
            LineClassifier::TOP_LEVEL.classify(line),
            LineClass::Heading { level, content }
        );
    }

    #[rstest]
    #[case("####### Title")]
    #[case("#Title")]
    #[case("# ")]
    #[case("#")]
    #[case(" # indented")]
    fn malformed_headings_are_plain(#[case] line: &str) {
        assert_eq!(LineClassifier::TOP_LEVEL.classify(line), LineClass::Plain(line));
    }

    #[rstest]
    #[case("- item", "item")]
    #[case("* item", "item")]
    #[case("+ item", "item")]
    #[case("- **bold** item", "**bold** item")]
    #[case("-   spaced", "spaced")]
    fn list_items(#[case] line: &str, #[case] content: &str) {
        assert_eq!(
            LineClassifier::TOP_LEVEL.classify(line),
            LineClass::ListItem { content }
        );
    }

    #[rstest]
    #[case("-item")]
    #[case("- ")]
    #[case("*italic* start")]
    #[case("**bold** start")]
    #[case("1. numbered")]
    fn non_list_lines_are_plain(#[case] line: &str) {
        assert_eq!(LineClassifier::TOP_LEVEL.classify(line), LineClass::Plain(line));
    }

    #[test]
    fn heading_wins_over_list_rules() {
        assert!(matches!(
            LineClassifier::TOP_LEVEL.classify("# - x"),
            LineClass::Heading { level: 1, .. }
        ));
    }

    #[test]
    fn list_body_rules_ignore_list_markers() {
        assert_eq!(
            LineClassifier::LIST_BODY.classify("- nested"),
            LineClass::Plain("- nested")
        );
        assert!(matches!(
            LineClassifier::LIST_BODY.classify("## still a heading"),
            LineClass::Heading { level: 2, .. }
        ));
    }

    #[rstest]
    #[case("", vec![""])]
    #[case("a", vec!["a"])]
    #[case("a\nb", vec!["a", "b"])]
    #[case("a\r\nb\r\n", vec!["a", "b", ""])]
    #[case("\n\n", vec!["", "", ""])]
    fn splits_on_newlines(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_lines(text).collect::<Vec<_>>(), expected);
    }
}
