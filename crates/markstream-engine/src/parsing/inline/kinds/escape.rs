/// Backslash escape: `\` before ASCII punctuation yields that character.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Returns the range of the escaped character.
    pub fn find(s: &str, at: usize) -> Option<(usize, usize)> {
        let b = s.as_bytes();
        if b.get(at) != Some(&Self::BACKSLASH) {
            return None;
        }
        let next = *b.get(at + 1)?;
        next.is_ascii_punctuation().then_some((at + 1, at + 2))
    }
}
