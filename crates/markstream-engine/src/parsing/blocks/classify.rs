use super::kinds::BlockQuote;

/// Tab stop used when measuring indentation.
pub const TAB_WIDTH: usize = 4;

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass {
    /// The full line as received, without its terminator.
    pub raw: String,
    /// Whether the line is blank (whitespace only after stripping prefixes).
    pub is_blank: bool,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: usize,
    /// Text content after stripping quote prefixes.
    pub remainder: String,
    /// Leading whitespace of `remainder`, in columns.
    pub indent: usize,
}

/// Classifies individual lines for the block parsing phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify(&self, line: &str) -> LineClass {
        let (qd, idx) = BlockQuote::strip_prefixes(line);
        let remainder = &line[idx..];

        LineClass {
            raw: line.to_string(),
            is_blank: remainder.trim().is_empty(),
            quote_depth: qd,
            remainder: remainder.to_string(),
            indent: indent_columns(remainder),
        }
    }
}

/// Width of the leading whitespace of `s` with tabs expanded.
pub fn indent_columns(s: &str) -> usize {
    let mut col = 0;
    for c in s.chars() {
        match c {
            ' ' => col += 1,
            '\t' => col += TAB_WIDTH - col % TAB_WIDTH,
            _ => break,
        }
    }
    col
}

/// Removes at most `cols` leading spaces.
pub fn strip_columns(s: &str, cols: usize) -> &str {
    let spaces = s.len() - s.trim_start_matches(' ').len();
    &s[spaces.min(cols)..]
}
