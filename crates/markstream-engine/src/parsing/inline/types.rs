use crate::parsing::span::Span;

use super::kinds::EmphasisKind;

/// A parsed inline node with byte spans into its line.
///
/// Leaf variants store spans rather than text; only the nodes that wrap
/// other inline content own children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// `\(...\)` or `\[...\]` math, kept verbatim.
    Math(Span),
    /// A `<br>` tag.
    LineBreak(Span),
    /// A backslash escape; `ch` covers the escaped character only.
    Escaped { full: Span, ch: Span },
    /// A code span. This is a "raw zone": no parsing inside.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Content between the backtick runs.
        inner: Span,
    },
    /// Bold, italic, highlight or strikethrough around nested content.
    Emphasis {
        kind: EmphasisKind,
        full: Span,
        children: Vec<InlineNode>,
    },
    /// `[text](url)`.
    Link {
        full: Span,
        children: Vec<InlineNode>,
        url: Span,
    },
    /// `<scheme://...>`.
    Autolink { full: Span, url: Span },
    /// `![alt](url)`; the alt text is not parsed further.
    Image { full: Span, alt: Span, url: Span },
    /// `[^id]`.
    FootnoteRef { full: Span, id: Span },
    /// `[ ]` or `[x]` opening a task item.
    Checkbox { full: Span, checked: bool },
    /// A known `:shortcode:`.
    Emoji { full: Span, name: Span },
}

impl InlineNode {
    /// The full source range covered by this node.
    pub fn full(&self) -> Span {
        match self {
            InlineNode::Text(sp) | InlineNode::Math(sp) | InlineNode::LineBreak(sp) => *sp,
            InlineNode::Escaped { full, .. }
            | InlineNode::CodeSpan { full, .. }
            | InlineNode::Emphasis { full, .. }
            | InlineNode::Link { full, .. }
            | InlineNode::Autolink { full, .. }
            | InlineNode::Image { full, .. }
            | InlineNode::FootnoteRef { full, .. }
            | InlineNode::Checkbox { full, .. }
            | InlineNode::Emoji { full, .. } => *full,
        }
    }
}
