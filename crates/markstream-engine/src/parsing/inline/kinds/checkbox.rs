/// Task checkbox at the start of a list item: `[ ]`, `[x]` or `[X]`.
pub struct Checkbox;

impl Checkbox {
    pub const UNCHECKED: &'static str = "[ ]";
    pub const CHECKED: [&'static str; 2] = ["[x]", "[X]"];

    /// Returns whether the box is checked and its byte length.
    pub fn parse(s: &str) -> Option<(bool, usize)> {
        let head = s.get(..3)?;
        let checked = if head == Self::UNCHECKED {
            false
        } else if Self::CHECKED.contains(&head) {
            true
        } else {
            return None;
        };
        match s.as_bytes().get(3) {
            None | Some(b' ') | Some(b'\t') => Some((checked, 3)),
            _ => None,
        }
    }
}
