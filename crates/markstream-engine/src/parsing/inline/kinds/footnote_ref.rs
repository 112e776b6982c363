/// Footnote reference `[^id]`.
pub struct FootnoteRef;

impl FootnoteRef {
    pub const OPEN: &'static [u8; 2] = b"[^";
    pub const CLOSE: u8 = b']';

    /// Returns the id range and the index just past `]`.
    pub fn find(s: &str, at: usize) -> Option<(usize, usize, usize)> {
        if !s.as_bytes().get(at..)?.starts_with(Self::OPEN) {
            return None;
        }
        let id_start = at + Self::OPEN.len();
        let rel = s[id_start..].find(Self::CLOSE as char)?;
        let id = &s[id_start..id_start + rel];
        if id.is_empty() || id.contains(char::is_whitespace) || id.contains('[') {
            return None;
        }
        Some((id_start, id_start + rel, id_start + rel + 1))
    }
}
