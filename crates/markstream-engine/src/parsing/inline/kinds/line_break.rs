/// An HTML `<br>` tag, which ends the output line in place.
pub struct LineBreak;

impl LineBreak {
    pub const TAGS: [&'static str; 3] = ["<br>", "<br/>", "<br />"];

    /// Returns the end of the tag opening at `at`.
    pub fn find(s: &str, at: usize) -> Option<usize> {
        let rest = s.get(at..)?;
        Self::TAGS
            .iter()
            .find(|tag| rest.starts_with(*tag))
            .map(|tag| at + tag.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_each_form() {
        assert_eq!(LineBreak::find("a<br>b", 1), Some(5));
        assert_eq!(LineBreak::find("<br/>", 0), Some(5));
        assert_eq!(LineBreak::find("<br />", 0), Some(6));
        assert_eq!(LineBreak::find("<b>", 0), None);
    }
}
