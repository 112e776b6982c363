use super::{CodeSpan, Escape};

/// Links, images and autolinks.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    pub const IMAGE: &'static [u8; 2] = b"![";
    pub const AUTO_OPEN: u8 = b'<';
    pub const AUTO_CLOSE: u8 = b'>';

    /// Index of the `]` matching the `[` at `at`, honouring nesting, code
    /// spans and escapes.
    pub fn matching_bracket(s: &str, at: usize) -> Option<usize> {
        let b = s.as_bytes();
        let mut depth = 0usize;
        let mut j = at;
        while j < b.len() {
            match b[j] {
                Escape::BACKSLASH => {
                    j += 1 + s[j + 1..].chars().next().map_or(0, char::len_utf8);
                    continue;
                }
                CodeSpan::TICK => {
                    if let Some((_, _, end)) = CodeSpan::find(s, j) {
                        j = end;
                        continue;
                    }
                }
                Self::OPEN => depth += 1,
                Self::CLOSE => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(j);
                    }
                }
                _ => {}
            }
            j += 1;
        }
        None
    }

    /// Parses `(destination "title")` starting at `at`.
    ///
    /// Returns the destination range and the index just past `)`. Angle
    /// brackets around the destination are dropped, as is any title.
    pub fn destination(s: &str, at: usize) -> Option<(usize, usize, usize)> {
        let b = s.as_bytes();
        if b.get(at) != Some(&Self::DEST_OPEN) {
            return None;
        }
        let mut depth = 0usize;
        let mut j = at;
        let close = loop {
            match *b.get(j)? {
                Escape::BACKSLASH => j += 1,
                Self::DEST_OPEN => depth += 1,
                Self::DEST_CLOSE => {
                    depth -= 1;
                    if depth == 0 {
                        break j;
                    }
                }
                _ => {}
            }
            j += 1;
        };

        let inner = &s[at + 1..close];
        let lead = inner.len() - inner.trim_start().len();
        let token = inner.trim_start().split_whitespace().next().unwrap_or("");
        let (mut start, mut end) = (at + 1 + lead, at + 1 + lead + token.len());
        if token.len() >= 2
            && token.as_bytes()[0] == Self::AUTO_OPEN
            && token.as_bytes()[token.len() - 1] == Self::AUTO_CLOSE
        {
            start += 1;
            end -= 1;
        }
        Some((start, end, close + 1))
    }

    /// Recognises `<scheme://...>` or `<mailto:...>` at `at`, returning the
    /// URL range and the index just past `>`.
    pub fn autolink(s: &str, at: usize) -> Option<(usize, usize, usize)> {
        let b = s.as_bytes();
        if b.get(at) != Some(&Self::AUTO_OPEN) {
            return None;
        }
        let rel = s[at + 1..].find(Self::AUTO_CLOSE as char)?;
        let url = &s[at + 1..at + 1 + rel];
        if url.contains(char::is_whitespace) || !is_absolute_uri(url) {
            return None;
        }
        Some((at + 1, at + 1 + rel, at + rel + 2))
    }
}

fn is_absolute_uri(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return false;
    };
    let scheme = &url[..colon];
    (2..=32).contains(&scheme.len())
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
        && colon + 1 < url.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_matching_nests() {
        assert_eq!(Link::matching_bracket("[a [b] c](u)", 0), Some(8));
        assert_eq!(Link::matching_bracket("[a `]` b]", 0), Some(8));
        assert_eq!(Link::matching_bracket("[open", 0), None);
    }

    #[test]
    fn destination_with_title() {
        let s = "(https://x.io \"Title\") rest";
        let (start, end, after) = Link::destination(s, 0).unwrap();
        assert_eq!(&s[start..end], "https://x.io");
        assert_eq!(&s[after..], " rest");
    }

    #[test]
    fn destination_with_parens_and_angles() {
        let s = "(<a>)";
        let s2 = "(https://en.wikipedia.org/wiki/Rust_(language))";
        let (start, end, _) = Link::destination(s, 0).unwrap();
        assert_eq!(&s[start..end], "a");
        let (start, end, after) = Link::destination(s2, 0).unwrap();
        assert_eq!(&s2[start..end], "https://en.wikipedia.org/wiki/Rust_(language)");
        assert_eq!(after, s2.len());
    }

    #[test]
    fn autolinks() {
        let s = "<https://rust-lang.org> x";
        assert_eq!(Link::autolink(s, 0), Some((1, 22, 23)));
        assert_eq!(Link::autolink("<not a link>", 0), None);
        assert_eq!(Link::autolink("<div>", 0), None);
    }
}
