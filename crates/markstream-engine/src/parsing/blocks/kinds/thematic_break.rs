/// Horizontal rule: three or more `-`, `*` or `_`, optionally spaced.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];

    pub fn matches(remainder: &str) -> bool {
        let t = remainder.trim();
        let Some(first) = t.chars().next() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }
        let mut count = 0;
        for c in t.chars() {
            if c == first {
                count += 1;
            } else if c != ' ' && c != '\t' {
                return false;
            }
        }
        count >= 3
    }
}
