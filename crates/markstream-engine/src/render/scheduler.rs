//! Flush policy.
//!
//! Block events arrive as soon as the line that completes them does. Most
//! become render events immediately; tables and buffered code blocks are
//! held until their terminator, and footnote definitions until [`drain`].
//!
//! [`drain`]: FlushScheduler::drain

use log::{debug, warn};
use unicode_width::UnicodeWidthStr;

use crate::parsing::{
    blocks::{
        BlockEvent, BlockEventKind,
        kinds::{CalloutKind, ProgressBand, ProgressItem},
    },
    inline::{SpanKind, StyledSpan, resolve_line},
};

use super::{
    events::{NodeKind, RenderEvent},
    footnotes::FootnoteTable,
    highlight::{CodeToken, SyntaxHighlighter},
    table::{TableData, TableLayout, TablePiece, plain_rows},
};

/// When fenced code is highlighted and written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeMode {
    /// Each line is highlighted on its own as soon as it completes.
    #[default]
    Streaming,
    /// The whole block is held until its closing fence and highlighted
    /// with cross-line context.
    Buffered,
}

pub const RULE_GLYPH: &str = "─";
pub const RULE_MAX_WIDTH: usize = 80;
pub const QUOTE_BORDER: &str = "│ ";
pub const FOOTNOTE_HEADING: &str = "Footnotes:";
pub const UNDEFINED_FOOTNOTE: &str = "(undefined)";
const TAB: &str = "    ";

/// Line prefix shared by every line of a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Prefix {
    quote_depth: usize,
    callout: Option<CalloutKind>,
    /// Indent units of two columns.
    indent: usize,
}

impl Prefix {
    fn of(ev: &BlockEvent, indent: usize) -> Self {
        Self {
            quote_depth: ev.quote_depth,
            callout: ev.callout,
            indent,
        }
    }

    /// The same prefix, indented `units` further.
    fn indented(self, units: usize) -> Self {
        Self {
            indent: self.indent + units,
            ..self
        }
    }

    /// Display columns taken by the prefix.
    fn width(&self) -> usize {
        self.quote_depth * QUOTE_BORDER.width() + self.indent * 2
    }

    fn events(&self) -> Vec<RenderEvent> {
        let mut out = Vec::new();
        let border = match self.callout {
            Some(kind) => NodeKind::Callout(kind),
            None => NodeKind::QuoteBorder,
        };
        for level in 0..self.quote_depth {
            out.push(RenderEvent::new(QUOTE_BORDER, border).at_depth(level + 1));
        }
        if self.indent > 0 {
            out.push(RenderEvent::new("  ".repeat(self.indent), NodeKind::Text));
        }
        out
    }
}

#[derive(Debug)]
struct OpenFence {
    lang: String,
    prefix: Prefix,
    line_no: usize,
    /// Lines held back in buffered mode.
    held: Vec<String>,
}

#[derive(Debug)]
struct OpenTable {
    prefix: Prefix,
    data: TableData,
}

pub struct FlushScheduler {
    highlighter: Box<dyn SyntaxHighlighter>,
    layout: Box<dyn TableLayout>,
    /// Highlighting style handed to the highlighter.
    style: String,
    code_mode: CodeMode,
    line_numbers: bool,
    width: usize,
    footnotes: FootnoteTable,
    fence: Option<OpenFence>,
    table: Option<OpenTable>,
}

impl FlushScheduler {
    pub fn new(
        highlighter: Box<dyn SyntaxHighlighter>,
        layout: Box<dyn TableLayout>,
        style: impl Into<String>,
        code_mode: CodeMode,
        line_numbers: bool,
        width: usize,
    ) -> Self {
        Self {
            highlighter,
            layout,
            style: style.into(),
            code_mode,
            line_numbers,
            width,
            footnotes: FootnoteTable::new(),
            fence: None,
            table: None,
        }
    }

    pub fn footnotes(&self) -> &FootnoteTable {
        &self.footnotes
    }

    /// Turns one block event into whatever output it releases.
    pub fn on_block(&mut self, ev: BlockEvent) -> Vec<RenderEvent> {
        let mut out = Vec::new();
        match ev.kind {
            BlockEventKind::Blank => {
                let prefix = Prefix::of(&ev, 0);
                if prefix.quote_depth > 0 {
                    out.extend(prefix.events());
                    out.push(RenderEvent::line_break());
                } else {
                    out.push(RenderEvent::blank_line());
                }
            }
            BlockEventKind::ParagraphLine { ref text, depth } => {
                let prefix = Prefix::of(&ev, depth);
                out.extend(prefix.events());
                let spans = self.inline(text, false);
                push_spans(&mut out, spans, None, prefix);
                out.push(RenderEvent::line_break());
            }
            BlockEventKind::Heading { level, ref text } => {
                out.push(RenderEvent::blank_line());
                let prefix = Prefix::of(&ev, 0);
                out.extend(prefix.events());
                let spans = self.inline(text, false);
                push_spans(&mut out, spans, Some(NodeKind::Heading(level)), prefix);
                out.push(RenderEvent::line_break());
            }
            BlockEventKind::ListItem {
                ref marker,
                depth,
                ref text,
            } => {
                out.extend(Prefix::of(&ev, depth.saturating_sub(1)).events());
                out.push(
                    RenderEvent::new(format!("{} ", marker.glyph(depth)), NodeKind::ListMarker)
                        .at_depth(depth),
                );
                let spans = self.inline(text, !marker.is_ordered());
                push_spans(&mut out, spans, None, Prefix::of(&ev, depth));
                out.push(RenderEvent::line_break());
            }
            BlockEventKind::Progress {
                percent,
                depth,
                ref text,
            } => {
                let band = ProgressBand::for_percent(percent);
                let prefix = Prefix::of(&ev, depth);
                out.extend(prefix.events());
                out.push(RenderEvent::new(
                    ProgressItem::bar(percent),
                    NodeKind::Progress(band),
                ));
                out.push(RenderEvent::new(
                    format!(" {percent:>3}%"),
                    NodeKind::Progress(band),
                ));
                if band == ProgressBand::Complete {
                    out.push(RenderEvent::new(
                        format!(" {}", ProgressItem::COMPLETE),
                        NodeKind::Progress(band),
                    ));
                }
                if !text.is_empty() {
                    out.push(RenderEvent::new(" ", NodeKind::Text));
                    let spans = self.inline(text, false);
                    push_spans(&mut out, spans, None, prefix);
                }
                out.push(RenderEvent::line_break());
            }
            BlockEventKind::Callout { kind, ref text } => {
                let prefix = Prefix::of(&ev, 0);
                out.extend(prefix.events());
                out.push(RenderEvent::new(
                    format!("{} {}", kind.icon(), kind.label()),
                    NodeKind::Callout(kind),
                ));
                if !text.is_empty() {
                    out.push(RenderEvent::new(" ", NodeKind::Text));
                    let spans = self.inline(text, false);
                    push_spans(&mut out, spans, None, prefix);
                }
                out.push(RenderEvent::line_break());
            }
            BlockEventKind::ThematicBreak => {
                out.extend(Prefix::of(&ev, 0).events());
                out.push(RenderEvent::new(
                    RULE_GLYPH.repeat(self.width.min(RULE_MAX_WIDTH)),
                    NodeKind::Rule,
                ));
                out.push(RenderEvent::line_break());
            }
            BlockEventKind::Definition {
                ref term,
                ref definition,
            } => {
                let prefix = Prefix::of(&ev, 0);
                out.extend(prefix.events());
                let spans = self.inline(term, false);
                push_spans(&mut out, spans, Some(NodeKind::DefinitionTerm), prefix);
                out.push(RenderEvent::line_break());
                out.extend(self.definition_line(prefix, definition));
            }
            BlockEventKind::DefinitionContinuation { ref definition } => {
                out.extend(self.definition_line(Prefix::of(&ev, 0), definition));
            }
            BlockEventKind::FenceOpen { ref lang, depth } => {
                debug!("code block opened lang={lang:?} mode={:?}", self.code_mode);
                if ev.quote_depth == 0 {
                    out.push(RenderEvent::blank_line());
                }
                self.fence = Some(OpenFence {
                    lang: lang.clone(),
                    prefix: Prefix::of(&ev, depth),
                    line_no: 0,
                    held: Vec::new(),
                });
            }
            BlockEventKind::FenceLine { text } => out.extend(self.code_line(text)),
            BlockEventKind::FenceClose => out.extend(self.close_fence()),
            BlockEventKind::TableStart {
                ref header,
                ref alignments,
                depth,
            } => {
                let header = header.iter().map(|c| self.cell(c)).collect();
                self.table = Some(OpenTable {
                    prefix: Prefix::of(&ev, depth),
                    data: TableData {
                        header,
                        rows: Vec::new(),
                        alignments: alignments.clone(),
                    },
                });
            }
            BlockEventKind::TableRow { cells } => {
                let row: Vec<Vec<StyledSpan>> = cells.iter().map(|c| self.cell(c)).collect();
                if let Some(table) = &mut self.table {
                    table.data.rows.push(row);
                }
            }
            BlockEventKind::TableEnd => out.extend(self.flush_table()),
            BlockEventKind::FootnoteDefinition { id, text } => {
                debug!("footnote definition stored id={id}");
                self.footnotes.define(&id, &text);
            }
        }
        out
    }

    /// Releases everything still held: an open code block, a pending table,
    /// then the collected footnotes.
    pub fn drain(&mut self) -> Vec<RenderEvent> {
        let mut out = self.close_fence();
        out.extend(self.flush_table());
        if self.footnotes.is_empty() {
            return out;
        }

        debug!("draining footnotes");
        out.push(RenderEvent::blank_line());
        out.push(RenderEvent::new(FOOTNOTE_HEADING, NodeKind::FootnoteHeading));
        out.push(RenderEvent::line_break());
        let mut number = 1;
        loop {
            if number > self.footnotes.numbered() && !self.footnotes.number_next_unreferenced() {
                break;
            }
            let Some(note) = self.footnotes.entry(number) else {
                break;
            };
            out.push(RenderEvent::new(format!("[{number}] "), NodeKind::FootnoteLabel));
            out.push(RenderEvent::new(format!("{}: ", note.id), NodeKind::Muted));
            match note.text {
                Some(text) => {
                    let spans = self.inline(&text, false);
                    push_spans(&mut out, spans, None, Prefix::default().indented(2));
                }
                None => out.push(RenderEvent::new(UNDEFINED_FOOTNOTE, NodeKind::Muted)),
            }
            out.push(RenderEvent::line_break());
            number += 1;
        }
        out
    }

    fn inline(&mut self, text: &str, task: bool) -> Vec<StyledSpan> {
        let footnotes = &mut self.footnotes;
        resolve_line(text, task, &mut |id| footnotes.reference(id))
    }

    /// Table cells stay on one row, so a `<br>` inside one becomes a space.
    fn cell(&mut self, text: &str) -> Vec<StyledSpan> {
        let mut spans = self.inline(text, false);
        for span in &mut spans {
            if span.kind == SpanKind::LineBreak {
                span.kind = SpanKind::Text;
                span.text = " ".into();
            }
        }
        spans
    }

    fn definition_line(&mut self, prefix: Prefix, definition: &str) -> Vec<RenderEvent> {
        let mut out = prefix.events();
        out.push(RenderEvent::new("  : ", NodeKind::DefinitionMarker));
        let spans = self.inline(definition, false);
        push_spans(&mut out, spans, None, prefix.indented(2));
        out.push(RenderEvent::line_break());
        out
    }

    fn code_line(&mut self, text: String) -> Vec<RenderEvent> {
        let text = text.replace('\t', TAB);
        let Some(fence) = &mut self.fence else {
            return Vec::new();
        };
        match self.code_mode {
            CodeMode::Buffered => {
                fence.held.push(text);
                Vec::new()
            }
            CodeMode::Streaming => {
                fence.line_no += 1;
                let (lang, prefix, n) = (fence.lang.clone(), fence.prefix, fence.line_no);
                let lines = [text];
                let tokens = self.highlight(&lang, &lines);
                let tokens = tokens.into_iter().next().unwrap_or_default();
                self.code_row(prefix, n, n, tokens)
            }
        }
    }

    fn close_fence(&mut self) -> Vec<RenderEvent> {
        let Some(fence) = self.fence.take() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        if !fence.held.is_empty() {
            let highlighted = self.highlight(&fence.lang, &fence.held);
            let last = fence.held.len();
            for (i, tokens) in highlighted.into_iter().enumerate() {
                out.extend(self.code_row(fence.prefix, i + 1, last, tokens));
            }
        }
        if fence.prefix.quote_depth == 0 {
            out.push(RenderEvent::blank_line());
        }
        out
    }

    /// Highlights code, falling back to unstyled tokens if the highlighter
    /// fails.
    fn highlight(&self, lang: &str, lines: &[String]) -> Vec<Vec<CodeToken>> {
        match self.highlighter.highlight(lang, lines, &self.style) {
            Ok(tokens) if tokens.len() == lines.len() => tokens,
            Ok(tokens) => {
                warn!(
                    "highlighter returned {} lines for {}, using plain code",
                    tokens.len(),
                    lines.len()
                );
                plain_code(lines)
            }
            Err(e) => {
                warn!("highlighting {lang:?} failed, using plain code: {e}");
                plain_code(lines)
            }
        }
    }

    fn code_row(
        &self,
        prefix: Prefix,
        n: usize,
        last: usize,
        tokens: Vec<CodeToken>,
    ) -> Vec<RenderEvent> {
        let mut out = prefix.events();
        if self.line_numbers {
            let w = last.to_string().len().max(3);
            out.push(RenderEvent::new(format!("{n:>w$} │ "), NodeKind::CodeGutter));
        }
        out.extend(
            tokens
                .into_iter()
                .map(|t| RenderEvent::new(t.text, NodeKind::CodeToken(t.style))),
        );
        out.push(RenderEvent::line_break());
        out
    }

    fn flush_table(&mut self) -> Vec<RenderEvent> {
        let Some(table) = self.table.take() else {
            return Vec::new();
        };
        debug!(
            "flushing table columns={} rows={}",
            table.data.alignments.len(),
            table.data.rows.len()
        );
        let available = self.width.saturating_sub(table.prefix.width());
        let lines = match self.layout.layout(&table.data, available) {
            Ok(lines) => lines,
            Err(e) => {
                warn!("table layout failed, using plain rows: {e}");
                plain_rows(&table.data)
            }
        };
        let mut out = Vec::new();
        for line in lines {
            out.extend(table.prefix.events());
            for piece in line {
                out.push(match piece {
                    TablePiece::Border(s) => RenderEvent::new(s, NodeKind::TableBorder),
                    TablePiece::Pad(n) => RenderEvent::new(" ".repeat(n), NodeKind::Text),
                    TablePiece::Header(span) => span_event(span, Some(NodeKind::TableHeader)),
                    TablePiece::Cell(span) => span_event(span, None),
                });
            }
            out.push(RenderEvent::line_break());
        }
        out
    }
}

fn plain_code(lines: &[String]) -> Vec<Vec<CodeToken>> {
    lines
        .iter()
        .map(|l| vec![CodeToken::plain(l.as_str())])
        .collect()
}

/// Render event for a resolved span. `text_as` restyles plain text runs,
/// e.g. as heading text.
fn span_event(span: StyledSpan, text_as: Option<NodeKind>) -> RenderEvent {
    let kind = match span.kind {
        SpanKind::Text => text_as.unwrap_or(NodeKind::Text),
        SpanKind::Code => NodeKind::InlineCode,
        SpanKind::Link => NodeKind::Link,
        SpanKind::Image => NodeKind::Image,
        SpanKind::FootnoteRef => NodeKind::FootnoteRef,
        SpanKind::Checkbox(checked) => NodeKind::Checkbox(checked),
        SpanKind::Emoji => NodeKind::Emoji,
        SpanKind::LineBreak => return RenderEvent::line_break(),
    };
    RenderEvent::new(span.text, kind).styled(span.style)
}

/// Pushes resolved spans. A line break inside them restarts the line with
/// `cont`, so wrapped text keeps its quote border and indent.
fn push_spans(
    out: &mut Vec<RenderEvent>,
    spans: Vec<StyledSpan>,
    text_as: Option<NodeKind>,
    cont: Prefix,
) {
    for span in spans {
        let breaks = span.kind == SpanKind::LineBreak;
        out.push(span_event(span, text_as));
        if breaks {
            out.extend(cont.events());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::BlockBuilder;
    use crate::render::highlight::{HighlightError, PlainHighlighter};
    use crate::render::table::BoxTableLayout;
    use pretty_assertions::assert_eq;

    fn scheduler(mode: CodeMode) -> FlushScheduler {
        FlushScheduler::new(
            Box::new(PlainHighlighter),
            Box::new(BoxTableLayout),
            "base16-ocean.dark",
            mode,
            true,
            40,
        )
    }

    /// Renders events as plain text lines, one entry per line break.
    fn text(events: &[RenderEvent]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut cur = String::new();
        for ev in events {
            match ev.kind {
                NodeKind::LineBreak => lines.push(std::mem::take(&mut cur)),
                NodeKind::BlankLine => lines.push("<blank>".into()),
                _ => cur.push_str(&ev.content),
            }
        }
        if !cur.is_empty() {
            lines.push(cur);
        }
        lines
    }

    fn run(s: &mut FlushScheduler, src: &str) -> Vec<RenderEvent> {
        let mut builder = BlockBuilder::new();
        let mut out = Vec::new();
        for line in src.lines() {
            for ev in builder.push(line) {
                out.extend(s.on_block(ev));
            }
        }
        for ev in builder.finish() {
            out.extend(s.on_block(ev));
        }
        out.extend(s.drain());
        out
    }

    fn render(src: &str) -> Vec<String> {
        text(&run(&mut scheduler(CodeMode::Streaming), src))
    }

    #[test]
    fn paragraph_and_heading() {
        assert_eq!(
            render("# Title\nsome *text*"),
            vec!["<blank>", "Title", "some text"]
        );
    }

    #[test]
    fn heading_text_takes_heading_kind() {
        let events = run(&mut scheduler(CodeMode::Streaming), "## Hi");
        assert!(events.iter().any(|e| e.kind == NodeKind::Heading(2)));
    }

    #[test]
    fn list_glyphs_by_depth() {
        assert_eq!(
            render("- a\n  - b\n    - c\n- d"),
            vec!["● a", "  ○ b", "    ■ c", "● d"]
        );
    }

    #[test]
    fn task_items_get_checkboxes() {
        assert_eq!(render("- [x] done\n- [ ] todo"), vec!["● ☑ done", "● ☐ todo"]);
    }

    #[test]
    fn quote_border_per_depth() {
        assert_eq!(render("> a\n> > b"), vec!["│ a", "│ │ b"]);
    }

    #[test]
    fn callout_header() {
        assert_eq!(
            render("> [!WARNING]\n> careful"),
            vec!["│ ⚠ WARNING", "│ careful"]
        );
        let events = run(&mut scheduler(CodeMode::Streaming), "> [!TIP]\n> ok");
        assert!(
            events
                .iter()
                .any(|e| e.kind == NodeKind::Callout(CalloutKind::Tip) && e.content == QUOTE_BORDER)
        );
    }

    #[test]
    fn extended_callout_headers() {
        assert_eq!(
            render("> [!QUESTION] why\n> because"),
            vec!["│ ❓ QUESTION why", "│ because"]
        );
        assert_eq!(render("> [!bug]"), vec!["│ 🐛 BUG"]);
    }

    #[test]
    fn pipe_border_renders_as_quote() {
        assert_eq!(render("| piped"), vec!["│ piped"]);
        let events = run(&mut scheduler(CodeMode::Streaming), "│ boxed");
        assert_eq!(events[0].kind, NodeKind::QuoteBorder);
    }

    #[test]
    fn br_continues_under_the_prefix() {
        assert_eq!(render("> one<br>two"), vec!["│ one", "│ two"]);
        assert_eq!(render("- a<br />b"), vec!["● a", "  b"]);
    }

    #[test]
    fn br_in_table_cell_is_a_space() {
        assert_eq!(
            render("| a<br>b |\n|---|"),
            vec!["┌─────┐", "│ a b │", "├─────┤", "└─────┘"]
        );
    }

    #[test]
    fn table_in_list_item_is_indented() {
        assert_eq!(
            render("- item\n  | a |\n  |---|\n  | 1 |"),
            vec![
                "● item",
                "  ┌───┐",
                "  │ a │",
                "  ├───┤",
                "  │ 1 │",
                "  └───┘",
            ]
        );
    }

    #[test]
    fn progress_bar() {
        assert_eq!(
            render("- [50%] half\n- [100%] done"),
            vec!["█████░░░░░  50% half", "██████████ 100% ✅ done"]
        );
    }

    #[test]
    fn rule_is_capped_by_width() {
        assert_eq!(render("---"), vec!["─".repeat(40)]);
    }

    #[test]
    fn definitions() {
        assert_eq!(
            render("Term : first\n: second"),
            vec!["Term", "  : first", "  : second"]
        );
    }

    #[test]
    fn streaming_code_numbers_lines() {
        assert_eq!(
            render("```rust\nfn a() {}\n\tx\n```\nafter"),
            vec!["<blank>", "  1 │ fn a() {}", "  2 │     x", "<blank>", "after"]
        );
    }

    #[test]
    fn buffered_code_waits_for_closer() {
        let mut s = scheduler(CodeMode::Buffered);
        let mut builder = BlockBuilder::new();
        let mut early = Vec::new();
        for line in ["```", "one", "two"] {
            for ev in builder.push(line) {
                early.extend(s.on_block(ev));
            }
        }
        assert_eq!(text(&early), vec!["<blank>"]);
        let mut rest = Vec::new();
        for ev in builder.push("```") {
            rest.extend(s.on_block(ev));
        }
        assert_eq!(text(&rest), vec!["  1 │ one", "  2 │ two", "<blank>"]);
    }

    struct Failing;

    impl SyntaxHighlighter for Failing {
        fn highlight(
            &self,
            _lang: &str,
            _lines: &[String],
            style: &str,
        ) -> Result<Vec<Vec<CodeToken>>, HighlightError> {
            Err(HighlightError::UnknownStyle(style.to_string()))
        }
    }

    #[test]
    fn failing_highlighter_falls_back_to_plain() {
        let mut s = FlushScheduler::new(
            Box::new(Failing),
            Box::new(BoxTableLayout),
            "nope",
            CodeMode::Buffered,
            false,
            40,
        );
        assert_eq!(text(&run(&mut s, "```\nkept\n```")), vec!["<blank>", "kept", "<blank>"]);
    }

    #[test]
    fn table_is_held_until_end() {
        let mut s = scheduler(CodeMode::Streaming);
        let mut builder = BlockBuilder::new();
        let mut out = Vec::new();
        for line in ["| a | b |", "|---|--:|", "| x | 1 |"] {
            for ev in builder.push(line) {
                out.extend(s.on_block(ev));
            }
        }
        assert!(out.is_empty());
        for ev in builder.push("") {
            out.extend(s.on_block(ev));
        }
        assert_eq!(
            text(&out),
            vec![
                "┌───┬───┐",
                "│ a │ b │",
                "├───┼───┤",
                "│ x │ 1 │",
                "└───┴───┘",
                "<blank>",
            ]
        );
    }

    #[test]
    fn footnotes_follow_reference_order() {
        assert_eq!(
            render("see[^b] and[^a]\n\n[^a]: alpha\n[^b]: beta\n[^c]: gamma"),
            vec![
                "see[1] and[2]",
                "<blank>",
                "<blank>",
                "Footnotes:",
                "[1] b: beta",
                "[2] a: alpha",
                "[3] c: gamma",
            ]
        );
    }

    #[test]
    fn undefined_footnote() {
        assert_eq!(
            render("x[^gone]"),
            vec!["x[1]", "<blank>", "Footnotes:", "[1] gone: (undefined)"]
        );
    }

    #[test]
    fn drain_closes_fence_before_footnotes() {
        let mut s = scheduler(CodeMode::Buffered);
        let mut builder = BlockBuilder::new();
        let mut out = Vec::new();
        for line in ["a[^1]", "```", "code"] {
            for ev in builder.push(line) {
                out.extend(s.on_block(ev));
            }
        }
        out.extend(s.drain());
        let lines = text(&out);
        let code = lines.iter().position(|l| l.ends_with("code"));
        let notes = lines.iter().position(|l| l == FOOTNOTE_HEADING);
        assert!(code < notes, "{lines:?}");
        assert!(code.is_some());
    }
}
