use super::kinds::{Alignment, CalloutKind, ListMarker};

/// A frame in the container stack representing a nesting level.
///
/// Containers wrap leaf blocks and can nest arbitrarily. The stack is a
/// plain vector: the parent of a frame is the one below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    /// A blockquote container with its nesting depth.
    BlockQuote {
        /// How many `>` prefixes (1 = single quote, 2 = nested, etc.)
        depth: usize,
        /// Set when the quote opened with a `[!KIND]` header.
        callout: Option<CalloutKind>,
    },
    /// An open list item.
    ListItem {
        /// Column of the marker.
        marker_col: usize,
        /// Column where the item's text starts.
        content_col: usize,
        /// 1-based list nesting depth.
        depth: usize,
        ordered: bool,
    },
}

/// One block-level fact produced for a completed line.
///
/// Events are emitted in source order; each carries the quote context of
/// the line that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEvent {
    pub quote_depth: usize,
    pub callout: Option<CalloutKind>,
    pub kind: BlockEventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEventKind {
    /// A blank line. Inside a quote this still carries the border.
    Blank,
    /// One line of paragraph text; `depth` is the enclosing list depth.
    ParagraphLine { text: String, depth: usize },
    Heading { level: u8, text: String },
    ListItem {
        marker: ListMarker,
        depth: usize,
        text: String,
    },
    Progress { percent: u8, depth: usize, text: String },
    /// The `[!KIND]` header line of a callout quote.
    Callout { kind: CalloutKind, text: String },
    ThematicBreak,
    Definition { term: String, definition: String },
    DefinitionContinuation { definition: String },
    FenceOpen { lang: String, depth: usize },
    /// Verbatim fence content; never inline-parsed.
    FenceLine { text: String },
    /// Emitted for a closing fence and for a fence still open at EOF.
    FenceClose,
    /// `depth` is the enclosing list depth.
    TableStart {
        header: Vec<String>,
        alignments: Vec<Alignment>,
        depth: usize,
    },
    /// Cells already padded or truncated to the header's column count.
    TableRow { cells: Vec<String> },
    TableEnd,
    FootnoteDefinition { id: String, text: String },
}
