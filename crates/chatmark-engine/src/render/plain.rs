use crate::{
    parsing::Parser,
    segment::{Segment, visible_text},
};

/// Renders segments as unstyled text.
///
/// Markup is dropped, headings show their formatted content, and list items
/// are prefixed with `bullet` and a space.
pub fn render_plain(parser: &Parser, segments: &[Segment], bullet: &str) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Heading { content, .. } => {
                out.push_str(&visible_text(&parser.tokenize_inline(content)));
            }
            Segment::ListItem(content) => {
                out.push_str(bullet);
                out.push(' ');
                out.push_str(&visible_text(&parser.expand_list_item(content)));
            }
            other => out.push_str(other.visible_text()),
        }
    }
    out
}
