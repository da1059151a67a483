//! # Rendering
//!
//! Renderers that consume [`Segment`](crate::Segment) lists. Heading content
//! is inline-tokenized at render time and list-item content is expanded with
//! [`Parser::expand_list_item`](crate::Parser::expand_list_item), so both go
//! through the same rules as top-level text.

pub mod html;
pub mod plain;

pub use html::{HtmlOptions, HtmlRenderer, to_html};
pub use plain::render_plain;

/// Marker placed before list items when none is configured.
pub const DEFAULT_BULLET: &str = "•";
