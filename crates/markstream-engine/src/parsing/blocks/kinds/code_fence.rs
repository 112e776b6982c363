#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn byte(self) -> u8 {
        match self {
            FenceKind::Backticks => b'`',
            FenceKind::Tildes => b'~',
        }
    }
}

/// Everything an opening fence line tells us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    /// Number of fence characters; a closer needs at least this many.
    pub len: usize,
    /// Columns of indentation before the fence, stripped from content lines.
    pub indent: usize,
    /// Language tag: the first word of the info string, possibly empty.
    pub lang: String,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Recognises an opening fence, capturing its language tag.
    pub fn open(remainder: &str) -> Option<FenceSig> {
        let indent = remainder.len() - remainder.trim_start_matches(' ').len();
        if indent > 3 {
            return None;
        }
        let t = &remainder[indent..];
        let kind = if t.starts_with(Self::BACKTICKS) {
            FenceKind::Backticks
        } else if t.starts_with(Self::TILDES) {
            FenceKind::Tildes
        } else {
            return None;
        };

        let len = t.bytes().take_while(|&b| b == kind.byte()).count();
        let info = t[len..].trim();
        // A backtick fence's info string may not itself contain backticks.
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        let lang = info.split_whitespace().next().unwrap_or("");
        let lang = lang.trim_start_matches('{').trim_end_matches('}');

        Some(FenceSig {
            kind,
            len,
            indent,
            lang: lang.to_string(),
        })
    }

    /// True if `remainder` closes a fence opened with `open`.
    pub fn closes(open: &FenceSig, remainder: &str) -> bool {
        let t = remainder.trim();
        let len = t.bytes().take_while(|&b| b == open.kind.byte()).count();
        len >= open.len && len == t.len()
    }

    /// Strips up to the opener's indentation from a content line.
    pub fn content<'a>(open: &FenceSig, line: &'a str) -> &'a str {
        let spaces = line.len() - line.trim_start_matches(' ').len();
        &line[spaces.min(open.indent)..]
    }
}
