use log::{debug, trace};

use super::{
    classify::{LineClass, MarkdownLineClassifier, strip_columns},
    containers::ContainerPath,
    kinds::{Alignment, BlockQuote, CalloutKind, CodeFence, Definition, FenceSig, TableRow},
    open::{BlockOpen, try_open},
    types::{BlockEvent, BlockEventKind},
};

#[derive(Debug, Clone, Default)]
enum LeafState {
    #[default]
    None,
    Paragraph,
    Fence {
        sig: FenceSig,
        /// List content column stripped before the fence's own indent.
        base: usize,
        quote_depth: usize,
    },
    /// A pipe row waiting for its separator line.
    TableCandidate { cells: Vec<String>, line: LineClass },
    Table { columns: usize },
    Definition,
}

/// Line-at-a-time block state machine.
///
/// Each completed line goes through [`BlockBuilder::push`], which returns
/// the block events the line completes. Nothing is held back except the
/// one-line lookahead a table header needs for its separator row.
#[derive(Debug, Default)]
pub struct BlockBuilder {
    classifier: MarkdownLineClassifier,
    containers: ContainerPath,
    leaf: LeafState,
    out: Vec<BlockEvent>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) -> Vec<BlockEvent> {
        let c = self.classifier.classify(line);
        trace!(
            "line quote_depth={} indent={} blank={}",
            c.quote_depth, c.indent, c.is_blank
        );
        self.process(c);
        std::mem::take(&mut self.out)
    }

    /// Closes whatever is still open at end of input.
    pub fn finish(&mut self) -> Vec<BlockEvent> {
        match std::mem::take(&mut self.leaf) {
            LeafState::Fence { .. } => {
                debug!("closing unterminated fence at end of input");
                self.emit(BlockEventKind::FenceClose);
            }
            LeafState::TableCandidate { line, .. } => {
                debug!("table header never confirmed, replaying as paragraph");
                self.paragraph_line(&line);
            }
            LeafState::Table { .. } => self.emit(BlockEventKind::TableEnd),
            _ => {}
        }
        std::mem::take(&mut self.out)
    }

    pub fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn process(&mut self, c: LineClass) {
        if self.in_fence() && self.consume_fence_line(&c) {
            return;
        }

        match std::mem::take(&mut self.leaf) {
            LeafState::TableCandidate { cells, line } => {
                if c.quote_depth == line.quote_depth
                    && !cells.is_empty()
                    && let Some(mut alignments) = TableRow::separator(&c.remainder)
                {
                    let columns = cells.len();
                    alignments.resize(columns, Alignment::None);
                    debug!("table confirmed with {columns} columns");
                    self.emit(BlockEventKind::TableStart {
                        header: cells,
                        alignments,
                        depth: self.containers.list_depth(),
                    });
                    self.leaf = LeafState::Table { columns };
                    return;
                }
                debug!("table header without separator, replaying as paragraph");
                self.paragraph_line(&line);
            }
            LeafState::Table { columns } => {
                if !c.is_blank
                    && c.quote_depth == self.containers.quote_depth()
                    && TableRow::is_row(&c.remainder)
                {
                    let cells = TableRow::normalize(TableRow::cells(&c.remainder), columns);
                    self.emit(BlockEventKind::TableRow { cells });
                    self.leaf = LeafState::Table { columns };
                    return;
                }
                self.emit(BlockEventKind::TableEnd);
            }
            other => self.leaf = other,
        }

        self.process_line(c);
    }

    fn process_line(&mut self, c: LineClass) {
        let deeper = self.containers.set_blockquote_depth(c.quote_depth);

        if c.is_blank {
            self.leaf = LeafState::None;
            self.emit(BlockEventKind::Blank);
            return;
        }

        if deeper && let Some((kind, text)) = CalloutKind::parse(c.remainder.trim_start()) {
            self.containers.set_callout(kind);
            self.leaf = LeafState::None;
            self.emit(BlockEventKind::Callout {
                kind,
                text: text.to_string(),
            });
            return;
        }

        let fence_base = match self.containers.content_col() {
            Some(col) if c.indent >= col => col,
            _ => 0,
        };
        match try_open(&c.remainder, c.indent, fence_base) {
            Some(open) => self.open_block(open, c),
            None => self.continue_text(&c),
        }
    }

    fn open_block(&mut self, open: BlockOpen, c: LineClass) {
        self.leaf = LeafState::None;
        match open {
            BlockOpen::FencedCode { sig, base } => {
                self.containers.close_lists_for_indent(c.indent);
                debug!("open fence lang={:?} len={}", sig.lang, sig.len);
                self.emit(BlockEventKind::FenceOpen {
                    lang: sig.lang.clone(),
                    depth: self.containers.list_depth(),
                });
                self.leaf = LeafState::Fence {
                    sig,
                    base,
                    quote_depth: c.quote_depth,
                };
            }
            BlockOpen::TableRow { cells } => {
                self.containers.close_lists_for_indent(c.indent);
                self.leaf = LeafState::TableCandidate { cells, line: c };
            }
            BlockOpen::FootnoteDefinition { id, text } => {
                self.containers.close_lists();
                self.emit(BlockEventKind::FootnoteDefinition { id, text });
            }
            BlockOpen::Progress { percent, text } => {
                self.containers.close_lists_for_indent(c.indent);
                self.emit(BlockEventKind::Progress {
                    percent,
                    depth: self.containers.list_depth(),
                    text,
                });
            }
            BlockOpen::ListItem(item) => {
                let depth =
                    self.containers
                        .open_list_item(item.indent, item.width, item.marker.is_ordered());
                self.emit(BlockEventKind::ListItem {
                    marker: item.marker,
                    depth,
                    text: item.text,
                });
                self.leaf = LeafState::Paragraph;
            }
            BlockOpen::Heading { level, text } => {
                self.containers.close_lists();
                self.emit(BlockEventKind::Heading { level, text });
            }
            BlockOpen::ThematicBreak => {
                self.containers.close_lists();
                self.emit(BlockEventKind::ThematicBreak);
            }
            BlockOpen::Definition { term, definition } => {
                self.containers.close_lists();
                self.emit(BlockEventKind::Definition { term, definition });
                self.leaf = LeafState::Definition;
            }
        }
    }

    fn continue_text(&mut self, c: &LineClass) {
        if matches!(self.leaf, LeafState::Definition)
            && let Some(definition) = Definition::continuation(&c.remainder)
        {
            self.emit(BlockEventKind::DefinitionContinuation { definition });
            return;
        }
        self.containers.close_lists_for_indent(c.indent);
        self.paragraph_line(c);
        self.leaf = LeafState::Paragraph;
    }

    fn paragraph_line(&mut self, c: &LineClass) {
        self.emit(BlockEventKind::ParagraphLine {
            text: c.remainder.trim().to_string(),
            depth: self.containers.list_depth(),
        });
    }

    /// Returns false when the line ended the fence without being part of
    /// it, so the caller should process it as an ordinary line.
    fn consume_fence_line(&mut self, c: &LineClass) -> bool {
        let LeafState::Fence {
            sig,
            base,
            quote_depth,
        } = &self.leaf
        else {
            return false;
        };

        if *quote_depth > 0 && c.quote_depth < *quote_depth {
            self.leaf = LeafState::None;
            self.emit(BlockEventKind::FenceClose);
            return false;
        }

        let local = strip_columns(BlockQuote::strip_up_to(&c.raw, *quote_depth), *base);
        if CodeFence::closes(sig, local) {
            debug!("close fence");
            self.leaf = LeafState::None;
            self.emit(BlockEventKind::FenceClose);
            return true;
        }

        let text = CodeFence::content(sig, local).to_string();
        self.emit(BlockEventKind::FenceLine { text });
        true
    }

    fn emit(&mut self, kind: BlockEventKind) {
        self.out.push(BlockEvent {
            quote_depth: self.containers.quote_depth(),
            callout: self.containers.callout(),
            kind,
        });
    }
}
