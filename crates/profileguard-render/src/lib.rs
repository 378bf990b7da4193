//! Presentation consumers of enforcement output (Markdown, rule toggles, highlights).
//!
//! Renderers only read what they are given; none of them touch the catalog or profiles.

#![forbid(unsafe_code)]

mod highlight;
mod markdown;
mod rules;

pub use highlight::{HIGHLIGHT_DECAY, HighlightSchedule};
pub use markdown::render_markdown;
pub use rules::render_rule_table;
