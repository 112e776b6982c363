use super::{
    classify::strip_columns,
    kinds::{
        CodeFence, Definition, FenceSig, FootnoteDef, Heading, ListItem, ListItemOpen,
        ProgressItem, TableRow, ThematicBreak,
    },
};

/// A block opener recognised at the start of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    /// `base` columns of list indentation were stripped before the fence.
    FencedCode { sig: FenceSig, base: usize },
    TableRow { cells: Vec<String> },
    FootnoteDefinition { id: String, text: String },
    Progress { percent: u8, text: String },
    ListItem(ListItemOpen),
    Heading { level: u8, text: String },
    ThematicBreak,
    Definition { term: String, definition: String },
}

/// Detects the opener for `remainder` in precedence order.
///
/// `fence_base` is the content column of the enclosing list item, if the
/// line is indented at least that far; fences are matched relative to it.
pub fn try_open(remainder: &str, indent: usize, fence_base: usize) -> Option<BlockOpen> {
    // Precedence: fence beats everything else.
    if let Some(sig) = CodeFence::open(strip_columns(remainder, fence_base)) {
        return Some(BlockOpen::FencedCode {
            sig,
            base: fence_base,
        });
    }
    if TableRow::is_row(remainder) {
        return Some(BlockOpen::TableRow {
            cells: TableRow::cells(remainder),
        });
    }
    if let Some((id, text)) = FootnoteDef::parse(remainder) {
        return Some(BlockOpen::FootnoteDefinition { id, text });
    }
    if let Some((percent, text)) = ProgressItem::parse(remainder) {
        return Some(BlockOpen::Progress { percent, text });
    }
    if let Some(item) = ListItem::parse(remainder, indent) {
        return Some(BlockOpen::ListItem(item));
    }
    if let Some((level, text)) = Heading::parse(remainder) {
        return Some(BlockOpen::Heading { level, text });
    }
    if ThematicBreak::matches(remainder) {
        return Some(BlockOpen::ThematicBreak);
    }
    if let Some((term, definition)) = Definition::parse(remainder) {
        return Some(BlockOpen::Definition { term, definition });
    }
    None
}
