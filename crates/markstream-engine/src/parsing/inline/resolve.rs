//! Flattens an inline tree into non-overlapping styled runs.

use super::{
    kinds::{Emoji, EmphasisKind},
    parser::{parse_inline, parse_task_item},
    types::InlineNode,
};

/// Character styles accumulated from enclosing emphasis and links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub highlight: bool,
    pub strikethrough: bool,
    /// Destination of the enclosing link.
    pub link: Option<String>,
}

impl InlineStyle {
    fn with(&self, kind: EmphasisKind) -> Self {
        let mut s = self.clone();
        match kind {
            EmphasisKind::Bold => s.bold = true,
            EmphasisKind::Italic => s.italic = true,
            EmphasisKind::BoldItalic => {
                s.bold = true;
                s.italic = true;
            }
            EmphasisKind::Highlight => s.highlight = true,
            EmphasisKind::Strikethrough => s.strikethrough = true,
        }
        s
    }
}

/// What a run of text is, independent of its character style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    Text,
    Code,
    Link,
    Image,
    FootnoteRef,
    Checkbox(bool),
    Emoji,
    /// Ends the output line; the text is `\n`.
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub kind: SpanKind,
    pub style: InlineStyle,
}

pub const CHECKED_GLYPH: &str = "☑";
pub const UNCHECKED_GLYPH: &str = "☐";
pub const IMAGE_ICON: &str = "🖼";
pub const IMAGE_FALLBACK_ALT: &str = "image";

/// Parses and resolves one line of text.
///
/// `task` enables a leading checkbox. `footnote_number` is called for each
/// footnote reference in order and returns the number to display.
pub fn resolve_line(
    text: &str,
    task: bool,
    footnote_number: &mut dyn FnMut(&str) -> usize,
) -> Vec<StyledSpan> {
    let nodes = if task {
        parse_task_item(0, text)
    } else {
        parse_inline(0, text)
    };
    let mut out = Vec::new();
    walk(
        text,
        &nodes,
        &InlineStyle::default(),
        &SpanKind::Text,
        footnote_number,
        &mut out,
    );
    out
}

fn walk(
    line: &str,
    nodes: &[InlineNode],
    style: &InlineStyle,
    text_kind: &SpanKind,
    footnote_number: &mut dyn FnMut(&str) -> usize,
    out: &mut Vec<StyledSpan>,
) {
    for node in nodes {
        match node {
            InlineNode::Text(sp) => push(out, sp.slice(line), text_kind.clone(), style),
            InlineNode::Math(sp) => push(out, sp.slice(line), text_kind.clone(), style),
            InlineNode::LineBreak(_) => push(out, "\n", SpanKind::LineBreak, style),
            InlineNode::Escaped { ch, .. } => push(out, ch.slice(line), text_kind.clone(), style),
            InlineNode::CodeSpan { inner, .. } => {
                push(out, trim_code(inner.slice(line)), SpanKind::Code, style)
            }
            InlineNode::Emphasis { kind, children, .. } => walk(
                line,
                children,
                &style.with(*kind),
                text_kind,
                footnote_number,
                out,
            ),
            InlineNode::Link { children, url, .. } => {
                let linked = InlineStyle {
                    link: Some(url.slice(line).to_string()),
                    ..style.clone()
                };
                walk(
                    line,
                    children,
                    &linked,
                    &SpanKind::Link,
                    footnote_number,
                    out,
                );
            }
            InlineNode::Autolink { url, .. } => {
                let url = url.slice(line);
                let linked = InlineStyle {
                    link: Some(url.to_string()),
                    ..style.clone()
                };
                push(out, url, SpanKind::Link, &linked);
            }
            InlineNode::Image { alt, url, .. } => {
                let alt = match alt.slice(line).trim() {
                    "" => IMAGE_FALLBACK_ALT,
                    a => a,
                };
                push(
                    out,
                    &format!("▐ {IMAGE_ICON} {alt} ▌"),
                    SpanKind::Image,
                    style,
                );
                let url = url.slice(line);
                if !url.is_empty() {
                    push(out, " ", SpanKind::Text, style);
                    let linked = InlineStyle {
                        link: Some(url.to_string()),
                        ..style.clone()
                    };
                    push(out, url, SpanKind::Link, &linked);
                }
            }
            InlineNode::FootnoteRef { id, .. } => {
                let n = footnote_number(id.slice(line));
                push(out, &format!("[{n}]"), SpanKind::FootnoteRef, style);
            }
            InlineNode::Checkbox { checked, .. } => {
                let glyph = if *checked {
                    CHECKED_GLYPH
                } else {
                    UNCHECKED_GLYPH
                };
                push(out, glyph, SpanKind::Checkbox(*checked), style);
            }
            InlineNode::Emoji { full, name } => {
                let text = Emoji::lookup(name.slice(line)).unwrap_or(full.slice(line));
                push(out, text, SpanKind::Emoji, style);
            }
        }
    }
}

/// One space of padding is dropped from each side when both are present,
/// so `` ` a ` `` shows `a`.
fn trim_code(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with(' ') && s.ends_with(' ') && !s.trim().is_empty() {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Appends a run, merging with the previous one when nothing differs.
fn push(out: &mut Vec<StyledSpan>, text: &str, kind: SpanKind, style: &InlineStyle) {
    if text.is_empty() {
        return;
    }
    if let Some(last) = out.last_mut()
        && last.kind == kind
        && last.style == *style
        && matches!(kind, SpanKind::Text | SpanKind::Link | SpanKind::Code)
    {
        last.text.push_str(text);
        return;
    }
    out.push(StyledSpan {
        text: text.to_string(),
        kind,
        style: style.clone(),
    });
}
