use chatmark_engine::{Parser, Segment};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

/// Styles applied to each kind of segment in the terminal.
#[derive(Debug, Clone)]
pub struct TerminalStyles {
    pub bold: Style,
    pub italic: Style,
    pub code: Style,
    pub link: Style,
    pub href: Style,
    pub bullet: Style,
    /// Indexed by heading level - 1.
    pub headings: [Style; 6],
}

impl Default for TerminalStyles {
    fn default() -> Self {
        let heading = Style::default().add_modifier(Modifier::BOLD);
        Self {
            bold: Style::default().add_modifier(Modifier::BOLD),
            italic: Style::default().add_modifier(Modifier::ITALIC),
            code: Style::default().fg(Color::Gray).bg(Color::DarkGray),
            link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            href: Style::default().fg(Color::DarkGray),
            bullet: Style::default().fg(Color::DarkGray),
            headings: [
                heading.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED),
                heading.fg(Color::Yellow),
                heading.fg(Color::Cyan),
                heading.fg(Color::Cyan),
                heading,
                heading.add_modifier(Modifier::DIM),
            ],
        }
    }
}

/// Renders segments into styled terminal text.
///
/// Each `LineBreak` starts a new line. Heading content is inline-formatted
/// in the heading's style; list items are indented behind `bullet`.
pub struct TerminalRenderer<'a> {
    pub parser: Parser,
    pub styles: TerminalStyles,
    pub bullet: &'a str,
}

impl TerminalRenderer<'_> {
    pub fn render(&self, segments: &[Segment]) -> Text<'static> {
        let mut lines = Vec::new();
        let mut current: Vec<Span<'static>> = Vec::new();

        for segment in segments {
            match segment {
                Segment::LineBreak => lines.push(Line::from(std::mem::take(&mut current))),
                Segment::ListItem(content) => {
                    current.push(Span::styled(format!("  {} ", self.bullet), self.styles.bullet));
                    for inner in self.parser.expand_list_item(content) {
                        self.push_inline(&mut current, &inner, Style::default());
                    }
                }
                other => self.push_inline(&mut current, other, Style::default()),
            }
        }
        lines.push(Line::from(current));

        Text::from(lines)
    }

    fn push_inline(&self, out: &mut Vec<Span<'static>>, segment: &Segment, base: Style) {
        let styles = &self.styles;
        match segment {
            Segment::Text(text) => out.push(Span::styled(text.clone(), base)),
            Segment::Bold(text) => out.push(Span::styled(text.clone(), base.patch(styles.bold))),
            Segment::Italic(text) => {
                out.push(Span::styled(text.clone(), base.patch(styles.italic)))
            }
            Segment::Code(text) => out.push(Span::styled(text.clone(), base.patch(styles.code))),
            Segment::Link { content, href } => {
                out.push(Span::styled(content.clone(), base.patch(styles.link)));
                out.push(Span::styled(format!(" ({href})"), styles.href));
            }
            Segment::Heading { content, level } => {
                let style = styles.headings[usize::from((*level).clamp(1, 6) - 1)];
                for inner in self.parser.tokenize_inline(content) {
                    self.push_inline(out, &inner, style);
                }
            }
            // Expanded list bodies are single lines without list items.
            Segment::ListItem(text) => out.push(Span::styled(text.clone(), base)),
            Segment::LineBreak => out.push(Span::raw(" ")),
        }
    }
}
