use crate::parsing::{
    blocks::kinds::{CalloutKind, ProgressBand},
    inline::InlineStyle,
};

use super::highlight::TokenStyle;

/// What a piece of output is, for the theme mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Heading(u8),
    InlineCode,
    Link,
    Image,
    FootnoteRef,
    Emoji,
    Checkbox(bool),
    ListMarker,
    QuoteBorder,
    /// Border and header of a callout quote.
    Callout(CalloutKind),
    CodeGutter,
    CodeToken(TokenStyle),
    TableBorder,
    TableHeader,
    Rule,
    Progress(ProgressBand),
    DefinitionTerm,
    DefinitionMarker,
    FootnoteHeading,
    FootnoteLabel,
    Muted,
    /// Ends the current output line.
    LineBreak,
    /// A paragraph gap; consecutive gaps collapse into one.
    BlankLine,
}

/// One ordered unit of styled output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEvent {
    pub content: String,
    pub kind: NodeKind,
    pub depth: usize,
    pub style: InlineStyle,
}

impl RenderEvent {
    pub fn new(content: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            content: content.into(),
            kind,
            depth: 0,
            style: InlineStyle::default(),
        }
    }

    pub fn at_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn styled(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn line_break() -> Self {
        Self::new("", NodeKind::LineBreak)
    }

    pub fn blank_line() -> Self {
        Self::new("", NodeKind::BlankLine)
    }
}
