/// ATX heading: one to six `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARK: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the level and the heading text with any closing `#` run
    /// removed.
    pub fn parse(remainder: &str) -> Option<(u8, String)> {
        let t = remainder.trim_start();
        let level = t.chars().take_while(|&c| c == Self::MARK).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &t[level..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }

        let mut text = rest.trim();
        let stripped = text.trim_end_matches(Self::MARK);
        if stripped.is_empty() || stripped.ends_with([' ', '\t']) {
            text = stripped.trim_end();
        }
        Some((level as u8, text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!(Heading::parse("# Title"), Some((1, "Title".into())));
        assert_eq!(Heading::parse("###### Six"), Some((6, "Six".into())));
    }

    #[test]
    fn strips_closing_hashes() {
        assert_eq!(Heading::parse("## Title ##"), Some((2, "Title".into())));
        assert_eq!(Heading::parse("# C#"), Some((1, "C#".into())));
    }

    #[test]
    fn rejects_non_headings() {
        assert_eq!(Heading::parse("####### seven"), None);
        assert_eq!(Heading::parse("#hashtag"), None);
    }

    #[test]
    fn empty_heading_is_allowed() {
        assert_eq!(Heading::parse("#"), Some((1, String::new())));
    }
}
