use serde::{Serialize, Serializer};

/// Deepest heading level; `#######` and beyond are not headings.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// One classified, typed unit of formatted output.
///
/// Every variant owns its text. Nothing borrows from the string that was
/// parsed, so a segment list can outlive its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text between (or instead of) formatted spans.
    Text(String),
    /// `**text**` or `***text***`.
    Bold(String),
    /// `*text*`.
    Italic(String),
    /// `` `text` ``.
    Code(String),
    /// `[content](href)`.
    Link { content: String, href: String },
    /// `# content` .. `###### content`. Content is not inline-parsed yet.
    Heading { content: String, level: u8 },
    /// `- content`, `* content` or `+ content`.
    ///
    /// Content is the raw item body; renderers expand it with
    /// [`crate::expand_list_item`].
    ListItem(String),
    /// Boundary between two source lines.
    LineBreak,
}

impl Segment {
    /// Builds a heading, clamping `level` into `1..=6`.
    pub fn heading(content: impl Into<String>, level: usize) -> Self {
        let level = level.clamp(1, MAX_HEADING_LEVEL as usize) as u8;
        Segment::Heading {
            content: content.into(),
            level,
        }
    }

    /// The text this segment shows, without markup.
    ///
    /// `LineBreak` reads as `"\n"`. Heading and list-item content is returned
    /// as stored, i.e. before inline expansion.
    pub fn visible_text(&self) -> &str {
        match self {
            Segment::Text(s)
            | Segment::Bold(s)
            | Segment::Italic(s)
            | Segment::Code(s)
            | Segment::ListItem(s) => s,
            Segment::Link { content, .. } | Segment::Heading { content, .. } => content,
            Segment::LineBreak => "\n",
        }
    }

    /// True for segments that occupy a whole source line on their own.
    pub fn is_block(&self) -> bool {
        matches!(self, Segment::Heading { .. } | Segment::ListItem(_))
    }

    /// Short lowercase name of the variant, used in serialized output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Segment::Text(_) => "text",
            Segment::Bold(_) => "bold",
            Segment::Italic(_) => "italic",
            Segment::Code(_) => "code",
            Segment::Link { .. } => "link",
            Segment::Heading { .. } => "heading",
            Segment::ListItem(_) => "list-item",
            Segment::LineBreak => "line-break",
        }
    }
}

/// Concatenates the visible text of `segments` in order.
pub fn visible_text(segments: &[Segment]) -> String {
    segments.iter().map(Segment::visible_text).collect()
}

/// Flat wire shape: `{"type": "...", "content": "...", "level"?, "href"?}`.
#[derive(Serialize)]
struct SegmentRecord<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<&'a str>,
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (level, href) = match self {
            Segment::Heading { level, .. } => (Some(*level), None),
            Segment::Link { href, .. } => (None, Some(href.as_str())),
            _ => (None, None),
        };
        SegmentRecord {
            kind: self.kind_name(),
            content: self.visible_text(),
            level,
            href,
        }
        .serialize(serializer)
    }
}
