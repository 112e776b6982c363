/// Footnote side table.
///
/// References get numbers in first-seen order as they stream past;
/// definitions may arrive before or after their first reference. Nothing
/// here is rendered until the document is finalized.
#[derive(Debug, Default, Clone)]
pub struct FootnoteTable {
    /// Ids in first-reference order; position + 1 is the display number.
    referenced: Vec<String>,
    /// Definitions in the order they arrived.
    defined: Vec<(String, String)>,
}

/// One entry of the drained footnote section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    pub number: usize,
    pub id: String,
    /// `None` when referenced but never defined.
    pub text: Option<String>,
}

impl FootnoteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reference and returns its display number.
    pub fn reference(&mut self, id: &str) -> usize {
        match self.referenced.iter().position(|r| r == id) {
            Some(i) => i + 1,
            None => {
                self.referenced.push(id.to_string());
                self.referenced.len()
            }
        }
    }

    /// Stores a definition. The first definition of an id wins.
    pub fn define(&mut self, id: &str, text: &str) {
        if self.definition(id).is_none() {
            self.defined.push((id.to_string(), text.to_string()));
        }
    }

    pub fn definition(&self, id: &str) -> Option<&str> {
        self.defined
            .iter()
            .find(|(d, _)| d == id)
            .map(|(_, t)| t.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.referenced.is_empty() && self.defined.is_empty()
    }

    /// Number of ids that have a number so far.
    pub fn numbered(&self) -> usize {
        self.referenced.len()
    }

    /// The entry with display number `number` (1-based).
    pub fn entry(&self, number: usize) -> Option<Footnote> {
        let id = self.referenced.get(number.checked_sub(1)?)?;
        Some(Footnote {
            number,
            id: id.clone(),
            text: self.definition(id).map(str::to_string),
        })
    }

    /// Gives the first defined-but-unreferenced id a number, in definition
    /// order. Returns false when every definition is numbered.
    pub fn number_next_unreferenced(&mut self) -> bool {
        let next = self
            .defined
            .iter()
            .find(|(id, _)| !self.referenced.contains(id))
            .map(|(id, _)| id.clone());
        match next {
            Some(id) => {
                self.referenced.push(id);
                true
            }
            None => false,
        }
    }
}
