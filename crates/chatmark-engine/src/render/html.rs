use std::fmt::Write as _;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{parsing::Parser, segment::Segment};

use super::DEFAULT_BULLET;

/// Options for [`HtmlRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Class attribute of the wrapping `<div>`; omitted when `None`.
    pub class: Option<String>,
    /// Marker shown before each list item.
    pub bullet: String,
    /// Adds `target="_blank" rel="noopener noreferrer"` to links.
    pub links_in_new_tab: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            class: None,
            bullet: DEFAULT_BULLET.to_string(),
            links_in_new_tab: true,
        }
    }
}

/// Renders segments as an HTML fragment.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    parser: Parser,
    options: HtmlOptions,
}

impl HtmlRenderer {
    pub fn new(parser: Parser, options: HtmlOptions) -> Self {
        Self { parser, options }
    }

    /// Parses and renders `text` in one go.
    pub fn render_text(&self, text: &str) -> String {
        self.render(&self.parser.parse(text))
    }

    /// Renders `segments` wrapped in a single `<div>`.
    pub fn render(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        match &self.options.class {
            Some(class) => {
                let _ = write!(out, "<div class=\"{}\">", encode_double_quoted_attribute(class));
            }
            None => out.push_str("<div>"),
        }
        self.write_segments(&mut out, segments);
        out.push_str("</div>");
        out
    }

    fn write_segments(&self, out: &mut String, segments: &[Segment]) {
        for segment in segments {
            self.write_segment(out, segment);
        }
    }

    fn write_segment(&self, out: &mut String, segment: &Segment) {
        match segment {
            Segment::Text(text) => out.push_str(&encode_text(text)),
            Segment::Bold(text) => wrap(out, "strong", text),
            Segment::Italic(text) => wrap(out, "em", text),
            Segment::Code(text) => wrap(out, "code", text),
            Segment::Link { content, href } => {
                let _ = write!(out, "<a href=\"{}\"", encode_double_quoted_attribute(href));
                if self.options.links_in_new_tab {
                    out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
                }
                let _ = write!(out, ">{}</a>", encode_text(content));
            }
            Segment::Heading { content, level } => {
                let _ = write!(out, "<h{level}>");
                self.write_segments(out, &self.parser.tokenize_inline(content));
                let _ = write!(out, "</h{level}>");
            }
            Segment::ListItem(content) => {
                let _ = write!(
                    out,
                    "<div class=\"list-item\"><span class=\"bullet\">{}</span><div class=\"list-item-body\">",
                    encode_text(&self.options.bullet)
                );
                self.write_segments(out, &self.parser.expand_list_item(content));
                out.push_str("</div></div>");
            }
            Segment::LineBreak => out.push_str("<br>"),
        }
    }
}

fn wrap(out: &mut String, tag: &str, text: &str) {
    let _ = write!(out, "<{tag}>{}</{tag}>", encode_text(text));
}

/// Renders `text` as HTML with default options.
pub fn to_html(text: &str) -> String {
    HtmlRenderer::default().render_text(text)
}
