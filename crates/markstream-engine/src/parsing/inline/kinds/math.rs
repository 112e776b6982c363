/// TeX math written as `\(...\)` or `\[...\]`. The whole span is a raw
/// zone and is shown exactly as written.
pub struct Math;

impl Math {
    pub const INLINE: (&'static str, &'static str) = (r"\(", r"\)");
    pub const DISPLAY: (&'static str, &'static str) = (r"\[", r"\]");

    /// Returns the end of a math span opening at `at`. The body must hold
    /// at least one character.
    pub fn find(s: &str, at: usize) -> Option<usize> {
        let rest = s.get(at..)?;
        [Self::INLINE, Self::DISPLAY]
            .into_iter()
            .find_map(|(open, close)| {
                let body = rest.strip_prefix(open)?;
                let first = body.chars().next()?.len_utf8();
                let inner = first + body[first..].find(close)?;
                Some(at + open.len() + inner + close.len())
            })
    }
}
