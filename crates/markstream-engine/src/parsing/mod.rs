//! Markdown structure, one completed line at a time.
//!
//! [`lines::LineAccumulator`] turns chunks into lines, [`blocks`] turns lines
//! into block events, and [`inline`] resolves the text those events carry.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod span;

pub use lines::LineAccumulator;
pub use span::Span;
