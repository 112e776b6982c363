//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser asks
//! these types where a construct starts and ends; it never hardcodes `**`,
//! `[` or `` ` `` itself.

pub mod checkbox;
pub mod code_span;
pub mod emoji;
pub mod emphasis;
pub mod escape;
pub mod footnote_ref;
pub mod line_break;
pub mod link;
pub mod math;

pub use checkbox::Checkbox;
pub use code_span::CodeSpan;
pub use emoji::Emoji;
pub use emphasis::{Emphasis, EmphasisKind};
pub use escape::Escape;
pub use footnote_ref::FootnoteRef;
pub use line_break::LineBreak;
pub use link::Link;
pub use math::Math;
