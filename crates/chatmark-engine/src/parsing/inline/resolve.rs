use serde::{Deserialize, Serialize};

use super::{kinds::InlineKind, scan::InlineMatch};

/// How overlapping inline candidates are reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// One reconciliation pass over the precedence table. Accepted spans
    /// never overlap, so every byte of a line is shown exactly once.
    #[default]
    Strict,
    /// Only an italic lying inside a bold is dropped; code and links are
    /// accepted unconditionally, so overlapping spans may repeat text.
    Compatible,
}

/// Reconciles raw scanner candidates into the ordered list of spans to emit.
///
/// The result is sorted by start offset. Under [`OverlapPolicy::Strict`] no
/// two results overlap.
pub fn resolve(candidates: Vec<InlineMatch>, policy: OverlapPolicy) -> Vec<InlineMatch> {
    match policy {
        OverlapPolicy::Strict => resolve_strict(candidates),
        OverlapPolicy::Compatible => resolve_compatible(candidates),
    }
}

fn resolve_strict(mut candidates: Vec<InlineMatch>) -> Vec<InlineMatch> {
    candidates.sort_by_key(|m| (m.kind.rank(), m.full.start));

    // Kept sorted by start and pairwise disjoint, so only the neighbours at
    // the insertion point can clash.
    let mut accepted: Vec<InlineMatch> = Vec::with_capacity(candidates.len());
    for m in candidates {
        let pos = accepted.partition_point(|a| a.full.start < m.full.start);
        let clash = pos
            .checked_sub(1)
            .and_then(|prev| accepted.get(prev))
            .into_iter()
            .chain(accepted.get(pos))
            .find(|a| a.full.overlaps(m.full));

        if let Some(winner) = clash {
            log::trace!(
                "dropping {:?} at {:?}: overlaps {:?} at {:?}",
                m.kind,
                m.full,
                winner.kind,
                winner.full
            );
            continue;
        }
        accepted.insert(pos, m);
    }
    accepted
}

fn resolve_compatible(mut candidates: Vec<InlineMatch>) -> Vec<InlineMatch> {
    let bold_spans: Vec<_> = candidates
        .iter()
        .filter(|m| m.kind == InlineKind::Bold)
        .map(|m| m.full)
        .collect();

    candidates.retain(|m| {
        let inside_bold =
            m.kind == InlineKind::Italic && bold_spans.iter().any(|b| b.contains(m.full));
        if inside_bold {
            log::trace!("dropping italic at {:?}: inside bold", m.full);
        }
        !inside_bold
    });

    candidates.sort_by_key(|m| (m.full.start, m.kind.scan_index()));
    candidates
}
