/// `:shortcode:` emoji, resolved against the GitHub shortcode set.
pub struct Emoji;

impl Emoji {
    pub const COLON: u8 = b':';

    /// Returns the name range and the index just past the closing colon when
    /// the shortcode is known.
    pub fn find(s: &str, at: usize) -> Option<(usize, usize, usize)> {
        let b = s.as_bytes();
        if b.get(at) != Some(&Self::COLON) {
            return None;
        }
        let name_start = at + 1;
        let len = b[name_start..]
            .iter()
            .take_while(|&&c| c.is_ascii_alphanumeric() || matches!(c, b'_' | b'+' | b'-'))
            .count();
        let name_end = name_start + len;
        if len == 0 || b.get(name_end) != Some(&Self::COLON) {
            return None;
        }
        Self::lookup(&s[name_start..name_end])?;
        Some((name_start, name_end, name_end + 1))
    }

    pub fn lookup(name: &str) -> Option<&'static str> {
        emojis::get_by_shortcode(name).map(|e| e.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_shortcode() {
        assert_eq!(Emoji::find(":rocket: go", 0), Some((1, 7, 8)));
        assert_eq!(Emoji::lookup("rocket"), Some("🚀"));
    }

    #[test]
    fn unknown_or_malformed() {
        assert_eq!(Emoji::find(":not_a_real_emoji_name:", 0), None);
        assert_eq!(Emoji::find("::", 0), None);
        assert_eq!(Emoji::find(":smile", 0), None);
    }
}
