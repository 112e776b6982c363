use super::{code_span::run_len, CodeSpan, Escape};

/// The style a delimiter pair applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Bold,
    Italic,
    BoldItalic,
    Highlight,
    Strikethrough,
}

/// Paired emphasis delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_ITALIC: &'static str = "***";
    pub const BOLD: &'static str = "**";
    pub const HIGHLIGHT: &'static str = "==";
    pub const STRIKE: &'static str = "~~";
    pub const ITALIC: &'static str = "*";

    /// Delimiters in the order they are tried; longer runs first.
    pub const ORDER: [(&'static str, EmphasisKind); 5] = [
        (Self::BOLD_ITALIC, EmphasisKind::BoldItalic),
        (Self::BOLD, EmphasisKind::Bold),
        (Self::HIGHLIGHT, EmphasisKind::Highlight),
        (Self::STRIKE, EmphasisKind::Strikethrough),
        (Self::ITALIC, EmphasisKind::Italic),
    ];

    /// True if `delim` at `at` can open: it must be followed by a character
    /// that is neither whitespace nor the delimiter's own character.
    pub fn can_open(s: &str, at: usize, delim: &str) -> bool {
        let b = s.as_bytes();
        match b.get(at + delim.len()) {
            Some(&next) => !next.is_ascii_whitespace() && next != delim.as_bytes()[0],
            None => false,
        }
    }

    /// Finds the closer for `delim` scanning from `from`.
    ///
    /// Returns `(content_end, after_closer)`. Code spans and escapes are
    /// skipped. The closer must follow a non-whitespace character, and when
    /// it sits in a longer run the last `delim.len()` characters close, so
    /// `**a *b***` closes bold after the italic. A single `*` search steps
    /// over `**` pairs.
    pub fn find_closer(s: &str, from: usize, delim: &str) -> Option<(usize, usize)> {
        let b = s.as_bytes();
        let d = delim.as_bytes();
        let c = d[0];
        let mut j = from;
        while j < b.len() {
            if b[j] == Escape::BACKSLASH {
                j += 1 + s[j + 1..].chars().next().map_or(0, char::len_utf8);
                continue;
            }
            if b[j] == CodeSpan::TICK {
                match CodeSpan::find(s, j) {
                    Some((_, _, end)) => j = end,
                    None => j += run_len(b, j, CodeSpan::TICK),
                }
                continue;
            }
            if b[j] == c {
                let run = run_len(b, j, c);
                let prev_ok = j > from && !b[j - 1].is_ascii_whitespace();
                if prev_ok && run >= d.len() && !(d.len() == 1 && run == 2) {
                    return Some((j + run - d.len(), j + run));
                }
                j += run;
                continue;
            }
            j += 1;
        }
        None
    }
}
