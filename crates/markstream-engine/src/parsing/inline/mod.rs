//! # Inline Parsing
//!
//! Cursor-based inline parsing with explicit raw zones, run once per
//! completed line of textual content (paragraph lines, headings, list item
//! text, table cells, definitions). Nothing spans lines: a marker whose
//! partner is not on the same line is literal text.
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode` tree with spans into the line
//! - **`kinds`**: inline-specific types with owned delimiters
//! - **`cursor`**: `Cursor`, a char-stepping read position reporting line offsets
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//! - **`resolve`**: flattens the tree into styled runs for rendering
//!
//! ## Raw Zone Precedence
//!
//! Math, escapes and code spans take precedence: `` `**not bold**` `` parses
//! as a single code span and `\(a*b\)` stays verbatim.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod resolve;
pub mod types;

pub use parser::{parse_inline, parse_task_item};
pub use resolve::{InlineStyle, SpanKind, StyledSpan, resolve_line};
pub use types::InlineNode;
