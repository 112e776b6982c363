//! From block events to terminal bytes.
//!
//! [`FlushScheduler`] decides when each block's output may be released and
//! turns it into [`RenderEvent`]s; [`OutputWriter`] styles those through the
//! theme mapper and appends them to the sink.

pub mod events;
pub mod footnotes;
pub mod highlight;
pub mod scheduler;
pub mod table;
pub mod writer;

pub use events::{NodeKind, RenderEvent};
pub use footnotes::{Footnote, FootnoteTable};
pub use highlight::{
    CodeToken, HighlightError, PlainHighlighter, SyntaxHighlighter, SyntectHighlighter, TokenStyle,
};
pub use scheduler::{CodeMode, FlushScheduler};
pub use table::{BoxTableLayout, LayoutError, TableData, TableLayout, TablePiece};
pub use writer::{OutputWriter, WriterOptions};
