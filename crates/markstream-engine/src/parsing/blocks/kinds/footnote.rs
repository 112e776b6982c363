/// Footnote definition line: `[^id]: text`.
pub struct FootnoteDef;

impl FootnoteDef {
    pub const OPEN: &'static str = "[^";
    pub const CLOSE: &'static str = "]:";

    pub fn parse(remainder: &str) -> Option<(String, String)> {
        let t = remainder.trim_start().strip_prefix(Self::OPEN)?;
        let end = t.find(Self::CLOSE)?;
        let id = &t[..end];
        if id.is_empty() || id.contains([']', ' ', '\t']) {
            return None;
        }
        let text = t[end + Self::CLOSE.len()..].trim();
        Some((id.to_string(), text.to_string()))
    }
}
