/// Blockquote block type with owned delimiter constants.
///
/// All blockquote-related syntax knowledge lives here, including the
/// box-drawing border form and the `[!KIND]` callout header that may open
/// a quote.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';
    /// Box-drawing border accepted as a quote marker.
    pub const BOX: char = '│';
    /// ASCII border accepted as a quote marker when the line is not a
    /// table row.
    pub const PIPE: char = '|';

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`,
    /// and the border forms `│ text` and `| text`.
    ///
    /// # Returns
    /// - `depth`: Number of prefixes found (0 if not a blockquote)
    /// - `byte_offset`: Index into `s` where content begins after prefixes
    pub fn strip_prefixes(s: &str) -> (usize, usize) {
        let (depth, i) = Self::strip_markers(s, usize::MAX, &[Self::PREFIX]);
        if depth > 0 {
            return (depth, i);
        }
        Self::strip_box(s).unwrap_or((0, 0))
    }

    /// Border-style quote: a run of `│` or `|` markers.
    ///
    /// A `|` run only counts when the text after it is non-empty and holds
    /// no further pipe, so pipe tables are left alone.
    fn strip_box(s: &str) -> Option<(usize, usize)> {
        let (depth, i) = Self::strip_markers(s, usize::MAX, &[Self::BOX, Self::PIPE]);
        let rest = &s[i..];
        if depth > 0
            && (!s[..i].contains(Self::PIPE)
                || !(rest.trim().is_empty() || rest.contains(Self::PIPE)))
        {
            return Some((depth, i));
        }
        let (depth, i) = Self::strip_markers(s, usize::MAX, &[Self::BOX]);
        (depth > 0).then_some((depth, i))
    }

    /// Strips at most `max` prefixes, for lines inside a fence opened within
    /// a quote.
    pub fn strip_up_to(s: &str, max: usize) -> &str {
        let (_, i) = Self::strip_markers(s, max, &[Self::PREFIX, Self::BOX, Self::PIPE]);
        &s[i..]
    }

    /// Counts up to `max` leading markers drawn from `markers`. Each marker
    /// may follow up to three spaces and swallows one space after it.
    fn strip_markers(s: &str, max: usize, markers: &[char]) -> (usize, usize) {
        let mut i = 0;
        let mut depth = 0;
        while depth < max {
            let rest = &s[i..];
            let pad = rest.len() - rest.trim_start_matches(' ').len();
            if pad > 3 {
                break;
            }
            let Some(c) = rest[pad..].chars().next().filter(|c| markers.contains(c)) else {
                break;
            };
            depth += 1;
            i += pad + c.len_utf8();
            if s[i..].starts_with(' ') {
                i += 1;
            }
        }
        (depth, i)
    }
}

/// The kind named by a `> [!KIND]` callout header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalloutKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
    Question,
    Failure,
    Bug,
    Example,
    Quote,
}

impl CalloutKind {
    const OPEN: &'static str = "[!";

    /// Parses a callout header at the start of quote content, returning the
    /// kind and the text after the header.
    pub fn parse(content: &str) -> Option<(Self, &str)> {
        let rest = content.strip_prefix(Self::OPEN)?;
        let close = rest.find(']')?;
        let kind = match rest[..close].to_ascii_uppercase().as_str() {
            "NOTE" | "INFO" => CalloutKind::Note,
            "TIP" | "SUCCESS" => CalloutKind::Tip,
            "IMPORTANT" => CalloutKind::Important,
            "WARNING" | "ATTENTION" => CalloutKind::Warning,
            "CAUTION" | "DANGER" => CalloutKind::Caution,
            "QUESTION" => CalloutKind::Question,
            "FAILURE" => CalloutKind::Failure,
            "BUG" => CalloutKind::Bug,
            "EXAMPLE" => CalloutKind::Example,
            "QUOTE" => CalloutKind::Quote,
            _ => return None,
        };
        Some((kind, rest[close + 1..].trim()))
    }

    pub fn label(self) -> &'static str {
        match self {
            CalloutKind::Note => "NOTE",
            CalloutKind::Tip => "TIP",
            CalloutKind::Important => "IMPORTANT",
            CalloutKind::Warning => "WARNING",
            CalloutKind::Caution => "CAUTION",
            CalloutKind::Question => "QUESTION",
            CalloutKind::Failure => "FAILURE",
            CalloutKind::Bug => "BUG",
            CalloutKind::Example => "EXAMPLE",
            CalloutKind::Quote => "QUOTE",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CalloutKind::Note => "ℹ",
            CalloutKind::Tip => "💡",
            CalloutKind::Important => "❗",
            CalloutKind::Warning => "⚠",
            CalloutKind::Caution => "⛔",
            CalloutKind::Question => "❓",
            CalloutKind::Failure => "✖",
            CalloutKind::Bug => "🐛",
            CalloutKind::Example => "📋",
            CalloutKind::Quote => "❝",
        }
    }
}
