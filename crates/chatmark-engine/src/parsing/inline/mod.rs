//! # Inline Parsing
//!
//! Scan, reconcile, assemble.
//!
//! ## Architecture
//!
//! Inline parsing runs over the text of a single line: a plain line, or the
//! content of a heading or list item once a renderer asks for it.
//!
//! Four scanners (bold, italic, code, link) each find every non-overlapping
//! occurrence of their own construct. Their candidates are then reconciled
//! in one pass and the survivors walked left to right, with the gaps emitted
//! as plain text.
//!
//! ## Modules
//!
//! - **`kinds`**: `InlineKind` and the precedence table
//! - **`scan`**: the four regex scanners producing `InlineMatch` candidates
//! - **`resolve`**: `OverlapPolicy` and candidate reconciliation
//! - **`parser`**: `tokenize_line()` main entry point and segment assembly
//!
//! ## Precedence
//!
//! Under the default strict policy, `Code > Link > Bold > Italic`:
//! `` `**x**` `` is a single code span, and `**a*b*c**` is a single bold span
//! with no italic inside it.

pub mod kinds;
pub mod parser;
pub mod resolve;
pub mod scan;

pub use kinds::InlineKind;
pub use parser::tokenize_line;
pub use resolve::OverlapPolicy;
pub use scan::InlineMatch;
