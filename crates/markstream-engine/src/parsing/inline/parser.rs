use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Checkbox, CodeSpan, Emoji, Emphasis, Escape, FootnoteRef, LineBreak, Link, Math},
    types::InlineNode,
};

type TryParse = fn(&mut Cursor<'_>) -> Option<InlineNode>;

/// Constructs in the order they are tried at each position. Math, escapes
/// and code spans come first so their content is never reinterpreted.
const PARSERS: [TryParse; 10] = [
    try_parse_math,
    try_parse_escape,
    try_parse_code_span,
    try_parse_line_break,
    try_parse_image,
    try_parse_footnote_ref,
    try_parse_link,
    try_parse_autolink,
    try_parse_emphasis,
    try_parse_emoji,
];

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the line where `s` begins
/// - `s`: The text to parse
///
/// # Returns
/// Nodes covering the entire input in order. Text between constructs, and
/// any marker that never finds its partner, is emitted as
/// `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.line_pos();

    'scan: while !cur.done() {
        for parse in PARSERS {
            if let Some(node) = parse(&mut cur) {
                let full = node.full();
                flush_text(&mut out, text_start, full.start);
                text_start = full.end;
                out.push(node);
                continue 'scan;
            }
        }
        cur.advance();
    }

    flush_text(&mut out, text_start, cur.line_pos());
    out
}

/// Like [`parse_inline`], but a leading `[ ]`/`[x]` becomes a checkbox.
/// Used for list item text.
pub fn parse_task_item(base: usize, s: &str) -> Vec<InlineNode> {
    let Some((checked, len)) = Checkbox::parse(s) else {
        return parse_inline(base, s);
    };
    let mut out = vec![InlineNode::Checkbox {
        full: Span::new(base, base + len),
        checked,
    }];
    out.extend(parse_inline(base + len, &s[len..]));
    out
}

fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
    if end > start {
        out.push(InlineNode::Text(Span::new(start, end)));
    }
}

/// Math is a raw zone: nothing inside is unescaped or styled.
fn try_parse_math(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.byte() != Some(Escape::BACKSLASH) {
        return None;
    }
    let end = Math::find(cur.src, cur.at)?;
    let node = InlineNode::Math(cur.span_to(end));
    cur.jump_to(end);
    Some(node)
}

fn try_parse_escape(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let (ch_start, ch_end) = Escape::find(cur.src, cur.at)?;
    let node = InlineNode::Escaped {
        full: cur.span_to(ch_end),
        ch: cur.span(ch_start, ch_end),
    };
    cur.jump_to(ch_end);
    Some(node)
}

/// Code spans are raw zones: their content is never parsed.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.byte() != Some(CodeSpan::TICK) {
        return None;
    }
    let (inner_start, inner_end, end) = CodeSpan::find(cur.src, cur.at)?;
    let node = InlineNode::CodeSpan {
        full: cur.span_to(end),
        inner: cur.span(inner_start, inner_end),
    };
    cur.jump_to(end);
    Some(node)
}

fn try_parse_line_break(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let end = LineBreak::find(cur.src, cur.at)?;
    let node = InlineNode::LineBreak(cur.span_to(end));
    cur.jump_to(end);
    Some(node)
}

fn try_parse_image(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if !cur.looking_at(Link::IMAGE) {
        return None;
    }
    let close = Link::matching_bracket(cur.src, cur.at + 1)?;
    let (url_start, url_end, end) = Link::destination(cur.src, close + 1)?;
    let node = InlineNode::Image {
        full: cur.span_to(end),
        alt: cur.span(cur.at + Link::IMAGE.len(), close),
        url: cur.span(url_start, url_end),
    };
    cur.jump_to(end);
    Some(node)
}

fn try_parse_footnote_ref(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let (id_start, id_end, end) = FootnoteRef::find(cur.src, cur.at)?;
    let node = InlineNode::FootnoteRef {
        full: cur.span_to(end),
        id: cur.span(id_start, id_end),
    };
    cur.jump_to(end);
    Some(node)
}

fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.byte() != Some(Link::OPEN) {
        return None;
    }
    let close = Link::matching_bracket(cur.src, cur.at)?;
    let (url_start, url_end, end) = Link::destination(cur.src, close + 1)?;
    let text_start = cur.at + 1;
    let node = InlineNode::Link {
        full: cur.span_to(end),
        children: parse_inline(cur.origin + text_start, &cur.src[text_start..close]),
        url: cur.span(url_start, url_end),
    };
    cur.jump_to(end);
    Some(node)
}

fn try_parse_autolink(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let (url_start, url_end, end) = Link::autolink(cur.src, cur.at)?;
    let node = InlineNode::Autolink {
        full: cur.span_to(end),
        url: cur.span(url_start, url_end),
    };
    cur.jump_to(end);
    Some(node)
}

/// The outer delimiter's closer is found first and its content parsed
/// recursively, so the lexically innermost marker always nests inside.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    for (delim, kind) in Emphasis::ORDER {
        if !cur.looking_at(delim.as_bytes()) || !Emphasis::can_open(cur.src, cur.at, delim) {
            continue;
        }
        let content_start = cur.at + delim.len();
        let Some((content_end, end)) = Emphasis::find_closer(cur.src, content_start, delim)
        else {
            continue;
        };
        let node = InlineNode::Emphasis {
            kind,
            full: cur.span_to(end),
            children: parse_inline(
                cur.origin + content_start,
                &cur.src[content_start..content_end],
            ),
        };
        cur.jump_to(end);
        return Some(node);
    }
    None
}

fn try_parse_emoji(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    let (name_start, name_end, end) = Emoji::find(cur.src, cur.at)?;
    let node = InlineNode::Emoji {
        full: cur.span_to(end),
        name: cur.span(name_start, name_end),
    };
    cur.jump_to(end);
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::kinds::EmphasisKind;

    fn emphasis(node: &InlineNode) -> (EmphasisKind, &[InlineNode]) {
        match node {
            InlineNode::Emphasis { kind, children, .. } => (*kind, children.as_slice()),
            other => panic!("expected emphasis, got {other:?}"),
        }
    }

    #[test]
    fn parse_simple_text() {
        let nodes = parse_inline(0, "hello world");
        assert_eq!(nodes, vec![InlineNode::Text(Span::new(0, 11))]);
    }

    #[test]
    fn parse_code_span() {
        let nodes = parse_inline(0, "`code`");
        assert_eq!(
            nodes,
            vec![InlineNode::CodeSpan {
                full: Span::new(0, 6),
                inner: Span::new(1, 5),
            }]
        );
    }

    #[test]
    fn code_span_suppresses_emphasis() {
        let nodes = parse_inline(0, "`**not bold**`");
        assert_eq!(nodes.len(), 1);
        assert!(matches!(nodes[0], InlineNode::CodeSpan { .. }));
    }

    #[test]
    fn bold_and_italic() {
        let s = "a **b** *c*";
        let nodes = parse_inline(0, s);
        assert_eq!(nodes.len(), 4);
        assert_eq!(emphasis(&nodes[1]).0, EmphasisKind::Bold);
        assert_eq!(emphasis(&nodes[3]).0, EmphasisKind::Italic);
        assert_eq!(nodes[1].full().slice(s), "**b**");
    }

    #[test]
    fn bold_italic_triple() {
        let nodes = parse_inline(0, "***both***");
        assert_eq!(emphasis(&nodes[0]).0, EmphasisKind::BoldItalic);
    }

    #[test]
    fn innermost_marker_nests_inside() {
        let s = "==**x**==";
        let nodes = parse_inline(0, s);
        let (outer, children) = emphasis(&nodes[0]);
        assert_eq!(outer, EmphasisKind::Highlight);
        assert_eq!(emphasis(&children[0]).0, EmphasisKind::Bold);

        let nodes = parse_inline(0, "**==x==**");
        let (outer, children) = emphasis(&nodes[0]);
        assert_eq!(outer, EmphasisKind::Bold);
        assert_eq!(emphasis(&children[0]).0, EmphasisKind::Highlight);
    }

    #[test]
    fn nested_spans_keep_line_offsets() {
        let s = "xx **a `b`**";
        let nodes = parse_inline(0, s);
        let (_, children) = emphasis(&nodes[1]);
        match &children[1] {
            InlineNode::CodeSpan { inner, .. } => assert_eq!(inner.slice(s), "b"),
            other => panic!("expected code span, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_markers_are_text() {
        let s = "**open and `tick";
        assert_eq!(parse_inline(0, s), vec![InlineNode::Text(Span::new(0, s.len()))]);
        let s = "a ** b ** c";
        assert_eq!(parse_inline(0, s), vec![InlineNode::Text(Span::new(0, s.len()))]);
    }

    #[test]
    fn link_with_inline_text() {
        let s = "see [the **docs**](https://docs.rs) now";
        let nodes = parse_inline(0, s);
        match &nodes[1] {
            InlineNode::Link { children, url, .. } => {
                assert_eq!(url.slice(s), "https://docs.rs");
                assert_eq!(emphasis(&children[1]).0, EmphasisKind::Bold);
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn image_and_autolink() {
        let s = "![logo](img.png) <https://x.io>";
        let nodes = parse_inline(0, s);
        match &nodes[0] {
            InlineNode::Image { alt, url, .. } => {
                assert_eq!(alt.slice(s), "logo");
                assert_eq!(url.slice(s), "img.png");
            }
            other => panic!("expected image, got {other:?}"),
        }
        match &nodes[2] {
            InlineNode::Autolink { url, .. } => assert_eq!(url.slice(s), "https://x.io"),
            other => panic!("expected autolink, got {other:?}"),
        }
    }

    #[test]
    fn footnote_reference_beats_link() {
        let s = "claim[^1](not a link)";
        let nodes = parse_inline(0, s);
        match &nodes[1] {
            InlineNode::FootnoteRef { id, .. } => assert_eq!(id.slice(s), "1"),
            other => panic!("expected footnote ref, got {other:?}"),
        }
    }

    #[test]
    fn escapes_block_markers() {
        let s = r"\*not italic\*";
        let nodes = parse_inline(0, s);
        assert!(matches!(nodes[0], InlineNode::Escaped { .. }));
        assert!(
            nodes
                .iter()
                .all(|n| !matches!(n, InlineNode::Emphasis { .. }))
        );
    }

    #[test]
    fn math_is_kept_whole() {
        let s = r"Area \(a*b*c\) and \[x_1\]";
        let nodes = parse_inline(0, s);
        let texts: Vec<&str> = nodes.iter().map(|n| n.full().slice(s)).collect();
        assert_eq!(texts, vec!["Area ", r"\(a*b*c\)", " and ", r"\[x_1\]"]);
        assert!(matches!(nodes[1], InlineNode::Math(_)));
        assert!(matches!(nodes[3], InlineNode::Math(_)));
    }

    #[test]
    fn unclosed_math_falls_back_to_escapes() {
        let nodes = parse_inline(0, r"\(x");
        assert!(matches!(nodes[0], InlineNode::Escaped { .. }));
    }

    #[test]
    fn br_tags_break_lines() {
        let s = "one<br>two<br />three";
        let nodes = parse_inline(0, s);
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[1], InlineNode::LineBreak(Span::new(3, 7)));
        assert_eq!(nodes[3].full().slice(s), "<br />");
    }

    #[test]
    fn emoji_shortcodes() {
        let s = "ship it :rocket: :nope_not_real:";
        let nodes = parse_inline(0, s);
        assert!(matches!(nodes[1], InlineNode::Emoji { .. }));
        assert_eq!(nodes[2], InlineNode::Text(Span::new(16, s.len())));
    }

    #[test]
    fn task_item_checkbox() {
        let nodes = parse_task_item(2, "[x] done");
        assert_eq!(
            nodes[0],
            InlineNode::Checkbox {
                full: Span::new(2, 5),
                checked: true
            }
        );
        assert_eq!(nodes[1], InlineNode::Text(Span::new(5, 10)));
    }

    #[test]
    fn checkbox_only_in_task_items() {
        let nodes = parse_inline(0, "[x] plain");
        assert!(nodes.iter().all(|n| !matches!(n, InlineNode::Checkbox { .. })));
    }

    #[test]
    fn multibyte_text_is_kept_whole() {
        let s = "héllo **wörld** ✓";
        let nodes = parse_inline(0, s);
        let texts: Vec<&str> = nodes.iter().map(|n| n.full().slice(s)).collect();
        assert_eq!(texts, vec!["héllo ", "**wörld**", " ✓"]);
    }
}
