pub mod parsing;
pub mod render;
pub mod segment;

// Re-export key types for easier usage
pub use parsing::inline::OverlapPolicy;
pub use parsing::{ParseOptions, Parser, expand_list_item, parse_formatted_text, tokenize_inline};
pub use segment::{MAX_HEADING_LEVEL, Segment, visible_text};
