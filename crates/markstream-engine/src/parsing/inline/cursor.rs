use crate::parsing::span::Span;

/// Read position over one slice of a line.
///
/// `origin` is where `src` starts within its line, so a nested parse over
/// emphasis content or link text still yields spans into the whole line.
/// The position only ever rests on a char boundary.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    pub src: &'a str,
    pub origin: usize,
    /// Byte index into `src`.
    pub at: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str, origin: usize) -> Self {
        Self { src, origin, at: 0 }
    }

    /// Line offset of the current position.
    pub fn line_pos(&self) -> usize {
        self.origin + self.at
    }

    /// Span in line offsets from the current position to local index `end`.
    pub fn span_to(&self, end: usize) -> Span {
        self.span(self.at, end)
    }

    /// Span in line offsets for the local range `start..end`.
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span::new(self.origin + start, self.origin + end)
    }

    pub fn done(&self) -> bool {
        self.at >= self.src.len()
    }

    /// Unread input.
    pub fn rest(&self) -> &'a str {
        self.src.get(self.at..).unwrap_or("")
    }

    pub fn byte(&self) -> Option<u8> {
        self.rest().bytes().next()
    }

    pub fn looking_at(&self, pat: &[u8]) -> bool {
        self.rest().as_bytes().starts_with(pat)
    }

    /// Steps over the current char.
    pub fn advance(&mut self) {
        self.at += self.rest().chars().next().map_or(1, char::len_utf8);
    }

    pub fn jump_to(&mut self, local: usize) {
        self.at = local;
    }
}
