pub mod inline;
pub mod lines;
pub mod span;

#[cfg(test)]
mod tests;

use crate::segment::Segment;

use inline::{OverlapPolicy, tokenize_line};
use lines::{LineClass, LineClassifier, split_lines};

/// Knobs for [`Parser`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub overlap: OverlapPolicy,
}

/// Stateless formatter: turns marked-up text into [`Segment`]s.
///
/// Holds only options, so one parser can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Splits `text` into lines and formats each one.
    ///
    /// A [`Segment::LineBreak`] separates consecutive lines. Headings and
    /// list items become single segments with their inline markup left
    /// unparsed; plain lines go through the inline tokenizer.
    pub fn parse(&self, text: &str) -> Vec<Segment> {
        let segments = self.parse_lines(text, LineClassifier::TOP_LEVEL);
        log::debug!(
            "parsed {} bytes into {} segments",
            text.len(),
            segments.len()
        );
        segments
    }

    /// Expands the body of a list item.
    ///
    /// Runs the same pipeline as [`Parser::parse`] except that list markers
    /// are not recognised, so a body starting with `-`, `*` or `+` is text or
    /// emphasis rather than a nested list.
    pub fn expand_list_item(&self, content: &str) -> Vec<Segment> {
        self.parse_lines(content, LineClassifier::LIST_BODY)
    }

    /// Tokenizes a single line of inline markup.
    pub fn tokenize_inline(&self, line: &str) -> Vec<Segment> {
        tokenize_line(line, self.options.overlap)
    }

    fn parse_lines(&self, text: &str, classifier: LineClassifier) -> Vec<Segment> {
        let mut out = Vec::new();

        for (index, line) in split_lines(text).enumerate() {
            if index > 0 {
                out.push(Segment::LineBreak);
            }

            match classifier.classify(line) {
                // A marker followed only by whitespace has nothing to show.
                LineClass::Heading { content, .. } | LineClass::ListItem { content }
                    if content.trim().is_empty() =>
                {
                    log::trace!("dropping blank block line {line:?}");
                }
                LineClass::Heading { level, content } => {
                    out.push(Segment::heading(content, level));
                }
                LineClass::ListItem { content } => {
                    out.push(Segment::ListItem(content.to_string()));
                }
                LineClass::Plain(line) => {
                    out.extend(self.tokenize_inline(line));
                }
            }
        }

        out
    }
}

/// Parses `text` with default options.
pub fn parse_formatted_text(text: &str) -> Vec<Segment> {
    Parser::default().parse(text)
}

/// Tokenizes one line with default options.
pub fn tokenize_inline(line: &str) -> Vec<Segment> {
    Parser::default().tokenize_inline(line)
}

/// Expands list-item content with default options.
pub fn expand_list_item(content: &str) -> Vec<Segment> {
    Parser::default().expand_list_item(content)
}
