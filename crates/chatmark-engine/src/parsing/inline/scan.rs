use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::span::Span;

use super::kinds::{InlineKind, STAR};

/// A candidate inline span found by one of the scanners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineMatch {
    pub kind: InlineKind,
    /// Full span including delimiters.
    pub full: Span,
    /// Content between the delimiters (link text for links).
    pub inner: Span,
    /// Link destination; `None` for every other kind.
    pub href: Option<Span>,
}

impl InlineMatch {
    fn new(kind: InlineKind, full: Span, inner: Span) -> Self {
        Self {
            kind,
            full,
            inner,
            href: None,
        }
    }
}

// The triple form is the first alternative so it wins at any position where
// both could match. Double-star content starts with a non-star and may only
// hold `*` as balanced `*x*` pairs, so it can never run into a later `**`.
fn bold_regex() -> &'static Regex {
    static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
    BOLD_REGEX.get_or_init(|| {
        Regex::new(r"\*\*\*([^*]+)\*\*\*|\*\*([^*](?:[^*]|\*[^*\s][^*]*\*)*)\*\*")
            .expect("Invalid bold regex")
    })
}

// Star-adjacency is checked by hand in `scan_italic`; the regex crate has no
// lookaround.
fn italic_regex() -> &'static Regex {
    static ITALIC_REGEX: OnceLock<Regex> = OnceLock::new();
    ITALIC_REGEX.get_or_init(|| {
        Regex::new(r"\*([^*\s][^*]*[^*\s]|[^*\s])\*").expect("Invalid italic regex")
    })
}

fn code_regex() -> &'static Regex {
    static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
    CODE_REGEX.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX
        .get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"))
}

fn group_span(caps: &Captures<'_>, i: usize) -> Option<Span> {
    caps.get(i).map(|m| Span::new(m.start(), m.end()))
}

/// Finds all non-overlapping `**x**` / `***x***` spans.
pub fn scan_bold(text: &str) -> Vec<InlineMatch> {
    bold_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let full = group_span(&caps, 0)?;
            let inner = group_span(&caps, 1).or_else(|| group_span(&caps, 2))?;
            Some(InlineMatch::new(InlineKind::Bold, full, inner))
        })
        .collect()
}

/// Finds all non-overlapping `*x*` spans not touching another `*`.
///
/// A candidate rejected for star-adjacency only gives up its opening star;
/// scanning resumes one byte later, so its closing star can still open a
/// later span.
pub fn scan_italic(text: &str) -> Vec<InlineMatch> {
    let bytes = text.as_bytes();
    let re = italic_regex();
    let mut out = Vec::new();
    let mut at = 0;

    while at < text.len() {
        let Some(caps) = re.captures_at(text, at) else {
            break;
        };
        let (Some(full), Some(inner)) = (group_span(&caps, 0), group_span(&caps, 1)) else {
            break;
        };

        let star_before = full.start > 0 && bytes[full.start - 1] == STAR;
        let star_after = bytes.get(full.end) == Some(&STAR);
        if star_before || star_after {
            // `*` is one byte, so start + 1 is a char boundary
            at = full.start + 1;
            continue;
        }

        out.push(InlineMatch::new(InlineKind::Italic, full, inner));
        at = full.end;
    }

    out
}

/// Finds all non-overlapping `` `x` `` spans.
pub fn scan_code(text: &str) -> Vec<InlineMatch> {
    code_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            Some(InlineMatch::new(
                InlineKind::Code,
                group_span(&caps, 0)?,
                group_span(&caps, 1)?,
            ))
        })
        .collect()
}

/// Finds all non-overlapping `[text](href)` spans.
pub fn scan_links(text: &str) -> Vec<InlineMatch> {
    link_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            Some(InlineMatch {
                kind: InlineKind::Link,
                full: group_span(&caps, 0)?,
                inner: group_span(&caps, 1)?,
                href: Some(group_span(&caps, 2)?),
            })
        })
        .collect()
}

/// Runs every scanner over `text`, concatenating results in scan order.
pub fn scan_all(text: &str) -> Vec<InlineMatch> {
    let mut out = Vec::new();
    for kind in InlineKind::SCAN_ORDER {
        let found = match kind {
            InlineKind::Bold => scan_bold(text),
            InlineKind::Italic => scan_italic(text),
            InlineKind::Code => scan_code(text),
            InlineKind::Link => scan_links(text),
        };
        out.extend(found);
    }
    out
}
