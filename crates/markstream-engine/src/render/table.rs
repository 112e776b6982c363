//! Table-layout collaborator.
//!
//! The scheduler only ever hands a complete table to a [`TableLayout`].

use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::parsing::{
    blocks::kinds::Alignment,
    inline::StyledSpan,
};

/// A table with every cell already resolved into styled runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    pub header: Vec<Vec<StyledSpan>>,
    pub rows: Vec<Vec<Vec<StyledSpan>>>,
    pub alignments: Vec<Alignment>,
}

/// One piece of a laid-out table line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TablePiece {
    Border(String),
    Header(StyledSpan),
    Cell(StyledSpan),
    Pad(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("table has no columns")]
    NoColumns,
}

pub trait TableLayout {
    /// Lays out `table` for a terminal `width` columns wide.
    fn layout(&self, table: &TableData, width: usize) -> Result<Vec<Vec<TablePiece>>, LayoutError>;
}

/// Box-drawn tables whose cells word-wrap to fit the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoxTableLayout;

fn cell_width(cell: &[StyledSpan]) -> usize {
    cell.iter().map(|s| s.text.width()).sum()
}

fn longest_word(cell: &[StyledSpan]) -> usize {
    cell.iter()
        .flat_map(|s| s.text.split(' '))
        .map(UnicodeWidthStr::width)
        .max()
        .unwrap_or(0)
}

/// Starting from natural widths, narrows the widest column one cell at a
/// time until the table fits or no column can shrink below its longest
/// word.
fn fit_columns(natural: &[usize], minimum: &[usize], available: usize) -> Vec<usize> {
    let mut widths = natural.to_vec();
    while widths.iter().sum::<usize>() > available {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(i, w)| **w > minimum[*i])
            .max_by_key(|(_, w)| **w)
            .map(|(i, _)| i);
        match candidate {
            Some(i) => widths[i] -= 1,
            None => break,
        }
    }
    widths
}

fn push_run(line: &mut Vec<StyledSpan>, text: &str, like: &StyledSpan) {
    if let Some(last) = line.last_mut()
        && last.kind == like.kind
        && last.style == like.style
    {
        last.text.push_str(text);
        return;
    }
    line.push(StyledSpan {
        text: text.to_string(),
        kind: like.kind.clone(),
        style: like.style.clone(),
    });
}

fn trim_trailing_space(line: &mut Vec<StyledSpan>) {
    if let Some(last) = line.last_mut()
        && last.text.ends_with(' ')
    {
        last.text.pop();
        if last.text.is_empty() {
            line.pop();
        }
    }
}

/// Greedy word wrap across styled runs. Words wider than `width` are
/// broken by character.
pub fn wrap_spans(cell: &[StyledSpan], width: usize) -> Vec<Vec<StyledSpan>> {
    let width = width.max(1);
    let mut lines: Vec<Vec<StyledSpan>> = vec![Vec::new()];
    let mut col = 0usize;

    for span in cell {
        for (i, word) in span.text.split(' ').enumerate() {
            if i > 0 {
                if col > 0 && col < width {
                    if let Some(line) = lines.last_mut() {
                        push_run(line, " ", span);
                    }
                    col += 1;
                } else if col >= width {
                    lines.push(Vec::new());
                    col = 0;
                }
            }
            if word.is_empty() {
                continue;
            }
            let w = word.width();
            if col > 0 && col + w > width {
                if let Some(line) = lines.last_mut() {
                    trim_trailing_space(line);
                }
                lines.push(Vec::new());
                col = 0;
            }
            if w <= width {
                if let Some(line) = lines.last_mut() {
                    push_run(line, word, span);
                }
                col += w;
                continue;
            }
            for ch in word.chars() {
                let cw = ch.to_string().width();
                if col + cw > width && col > 0 {
                    lines.push(Vec::new());
                    col = 0;
                }
                if let Some(line) = lines.last_mut() {
                    push_run(line, &ch.to_string(), span);
                }
                col += cw;
            }
        }
    }
    if let Some(line) = lines.last_mut() {
        trim_trailing_space(line);
    }
    lines
}

fn padding(alignment: Alignment, used: usize, width: usize) -> (usize, usize) {
    let free = width.saturating_sub(used);
    match alignment {
        Alignment::Right => (free, 0),
        Alignment::Center => (free / 2, free - free / 2),
        Alignment::Left | Alignment::None => (0, free),
    }
}

fn border(left: &str, mid: &str, right: &str, widths: &[usize]) -> Vec<TablePiece> {
    let inner: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    vec![TablePiece::Border(format!("{left}{}{right}", inner.join(mid)))]
}

fn row_lines(
    cells: &[Vec<StyledSpan>],
    widths: &[usize],
    alignments: &[Alignment],
    header: bool,
) -> Vec<Vec<TablePiece>> {
    let wrapped: Vec<Vec<Vec<StyledSpan>>> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| wrap_spans(cells.get(i).map(Vec::as_slice).unwrap_or(&[]), *w))
        .collect();
    let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

    (0..height)
        .map(|l| {
            let mut line = vec![TablePiece::Border("│ ".into())];
            for (c, w) in widths.iter().enumerate() {
                if c > 0 {
                    line.push(TablePiece::Border(" │ ".into()));
                }
                let part = wrapped[c].get(l).map(Vec::as_slice).unwrap_or(&[]);
                let (left, right) = padding(alignments[c], cell_width(part), *w);
                if left > 0 {
                    line.push(TablePiece::Pad(left));
                }
                for span in part {
                    line.push(if header {
                        TablePiece::Header(span.clone())
                    } else {
                        TablePiece::Cell(span.clone())
                    });
                }
                if right > 0 {
                    line.push(TablePiece::Pad(right));
                }
            }
            line.push(TablePiece::Border(" │".into()));
            line
        })
        .collect()
}

impl TableLayout for BoxTableLayout {
    fn layout(&self, table: &TableData, width: usize) -> Result<Vec<Vec<TablePiece>>, LayoutError> {
        let columns = table.alignments.len();
        if columns == 0 {
            return Err(LayoutError::NoColumns);
        }

        let all_rows = std::iter::once(&table.header).chain(table.rows.iter());
        let mut natural = vec![1usize; columns];
        let mut minimum = vec![1usize; columns];
        for row in all_rows {
            for (i, cell) in row.iter().enumerate().take(columns) {
                natural[i] = natural[i].max(cell_width(cell));
                minimum[i] = minimum[i].max(longest_word(cell));
            }
        }

        let chrome = 3 * columns + 1;
        let widths = fit_columns(&natural, &minimum, width.saturating_sub(chrome));

        let mut out = vec![border("┌", "┬", "┐", &widths)];
        out.extend(row_lines(&table.header, &widths, &table.alignments, true));
        out.push(border("├", "┼", "┤", &widths));
        for row in &table.rows {
            out.extend(row_lines(row, &widths, &table.alignments, false));
        }
        out.push(border("└", "┴", "┘", &widths));
        Ok(out)
    }
}

/// Unboxed `a | b` rows, used when layout fails.
pub fn plain_rows(table: &TableData) -> Vec<Vec<TablePiece>> {
    std::iter::once((&table.header, true))
        .chain(table.rows.iter().map(|r| (r, false)))
        .map(|(row, header)| {
            let mut line = Vec::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push(TablePiece::Border(" | ".into()));
                }
                for span in cell {
                    line.push(if header {
                        TablePiece::Header(span.clone())
                    } else {
                        TablePiece::Cell(span.clone())
                    });
                }
            }
            line
        })
        .collect()
}

/// Plain text of a laid-out line, for tests and width checks.
pub fn line_text(line: &[TablePiece]) -> String {
    line.iter()
        .map(|p| match p {
            TablePiece::Border(s) => s.clone(),
            TablePiece::Header(s) | TablePiece::Cell(s) => s.text.clone(),
            TablePiece::Pad(n) => " ".repeat(*n),
        })
        .collect()
}
