/// Column alignment from a separator row token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
}

/// Pipe table rows and separator rows.
pub struct TableRow;

impl TableRow {
    pub const PIPE: char = '|';

    /// A line is a candidate table row when it starts with a pipe.
    pub fn is_row(remainder: &str) -> bool {
        remainder.trim_start().starts_with(Self::PIPE)
    }

    /// Splits a row into trimmed cells. Escaped pipes (`\|`) stay in the
    /// cell; pipes inside code spans do not split.
    pub fn cells(remainder: &str) -> Vec<String> {
        let t = remainder.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);

        let mut cells = Vec::new();
        let mut cur = String::new();
        let mut in_code = false;
        let mut chars = t.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\\' if chars.peek() == Some(&Self::PIPE) => {
                    cur.push('\\');
                    if let Some(p) = chars.next() {
                        cur.push(p);
                    }
                }
                '`' => {
                    in_code = !in_code;
                    cur.push(c);
                }
                Self::PIPE if !in_code => {
                    cells.push(cur.trim().to_string());
                    cur.clear();
                }
                _ => cur.push(c),
            }
        }
        if !cur.trim().is_empty() {
            cells.push(cur.trim().to_string());
        }
        cells
    }

    /// Parses a separator row such as `|---|:--:|--:|`.
    pub fn separator(remainder: &str) -> Option<Vec<Alignment>> {
        if !Self::is_row(remainder) {
            return None;
        }
        let cells = Self::cells(remainder);
        if cells.is_empty() {
            return None;
        }
        cells.iter().map(|c| Self::alignment(c)).collect()
    }

    fn alignment(token: &str) -> Option<Alignment> {
        let left = token.starts_with(':');
        let right = token.ends_with(':') && token.len() > 1;
        let dashes = token.trim_start_matches(':').trim_end_matches(':');
        if dashes.is_empty() || !dashes.chars().all(|c| c == '-') {
            return None;
        }
        Some(match (left, right) {
            (true, true) => Alignment::Center,
            (true, false) => Alignment::Left,
            (false, true) => Alignment::Right,
            (false, false) => Alignment::None,
        })
    }

    /// Pads or truncates `cells` to `columns` entries.
    pub fn normalize(mut cells: Vec<String>, columns: usize) -> Vec<String> {
        cells.resize(columns, String::new());
        cells
    }
}
