//! # Inline Kinds
//!
//! The span kinds the inline tokenizer recognises and the precedence table
//! used to reconcile overlapping candidates.

/// A kind of inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Bold,
    Italic,
    Code,
    Link,
}

impl InlineKind {
    /// Scan order. Also the tie-break order under the compatible policy.
    pub const SCAN_ORDER: [InlineKind; 4] = [
        InlineKind::Bold,
        InlineKind::Italic,
        InlineKind::Code,
        InlineKind::Link,
    ];

    /// Precedence table, highest first.
    ///
    /// Code spans are raw zones: nothing inside backticks is formatted.
    /// Links beat emphasis; bold beats italic.
    pub const PRECEDENCE: [InlineKind; 4] = [
        InlineKind::Code,
        InlineKind::Link,
        InlineKind::Bold,
        InlineKind::Italic,
    ];

    /// Position in [`Self::PRECEDENCE`]; lower wins.
    pub fn rank(self) -> usize {
        match self {
            InlineKind::Code => 0,
            InlineKind::Link => 1,
            InlineKind::Bold => 2,
            InlineKind::Italic => 3,
        }
    }

    /// Position in [`Self::SCAN_ORDER`].
    pub fn scan_index(self) -> usize {
        match self {
            InlineKind::Bold => 0,
            InlineKind::Italic => 1,
            InlineKind::Code => 2,
            InlineKind::Link => 3,
        }
    }
}

/// Emphasis delimiter shared by bold and italic.
pub const STAR: u8 = b'*';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_matches_precedence_table() {
        for (i, kind) in InlineKind::PRECEDENCE.iter().enumerate() {
            assert_eq!(kind.rank(), i);
        }
    }

    #[test]
    fn scan_index_matches_scan_order() {
        for (i, kind) in InlineKind::SCAN_ORDER.iter().enumerate() {
            assert_eq!(kind.scan_index(), i);
        }
    }
}
