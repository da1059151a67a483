use crate::segment::Segment;

use super::{
    kinds::InlineKind,
    resolve::{OverlapPolicy, resolve},
    scan::{InlineMatch, scan_all},
};

/// Tokenizes one line of text into inline segments.
///
/// The four scanners run independently, [`resolve`] reconciles their
/// candidates, and the survivors are walked left to right. Text between
/// spans is emitted as [`Segment::Text`], so under the strict policy the
/// visible text of the result equals `text`.
pub fn tokenize_line(text: &str, policy: OverlapPolicy) -> Vec<Segment> {
    let candidates = scan_all(text);
    let candidate_count = candidates.len();
    let matches = resolve(candidates, policy);
    log::trace!(
        "inline: {} candidates, {} kept for {:?}",
        candidate_count,
        matches.len(),
        text
    );
    assemble(text, &matches)
}

/// Walks resolved matches, filling gaps with text.
///
/// The cursor moves to the end of every match even when a compatible-mode
/// match ends before an earlier one did.
fn assemble(text: &str, matches: &[InlineMatch]) -> Vec<Segment> {
    let mut out = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;

    for m in matches {
        if m.full.start > cursor {
            out.push(Segment::Text(text[cursor..m.full.start].to_string()));
        }
        out.push(segment_for(text, m));
        cursor = m.full.end;
    }

    if cursor < text.len() {
        out.push(Segment::Text(text[cursor..].to_string()));
    }

    out
}

fn segment_for(text: &str, m: &InlineMatch) -> Segment {
    let content = m.inner.slice(text).to_string();
    match m.kind {
        InlineKind::Bold => Segment::Bold(content),
        InlineKind::Italic => Segment::Italic(content),
        InlineKind::Code => Segment::Code(content),
        InlineKind::Link => Segment::Link {
            content,
            href: m
                .href
                .map(|h| h.slice(text).to_string())
                .unwrap_or_default(),
        },
    }
}
