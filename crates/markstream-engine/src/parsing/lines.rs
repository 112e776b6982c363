//! Line accumulation: turns arbitrarily split chunks into logical lines.

/// Reassembles raw chunks into complete logical lines.
///
/// Everything after the last newline is held back until a later chunk
/// completes it or [`LineAccumulator::drain_final`] is called at end of
/// stream. Newlines are byte `0x0a`, which never occurs inside a multi-byte
/// UTF-8 sequence, so a completed line is always valid UTF-8 when the stream
/// is, even if a chunk boundary split a character.
#[derive(Debug, Default)]
pub struct LineAccumulator {
    /// Bytes after the most recent newline.
    pending: Vec<u8>,
    /// Bytes already handed out as lines (newlines included).
    consumed: usize,
}

impl LineAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a chunk and returns every line it completed, in order.
    ///
    /// Returned lines carry no trailing `\n` and no trailing `\r`.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut lines = vec![];
        let mut rest = chunk;

        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            self.pending.extend_from_slice(&rest[..pos]);
            self.consumed += self.pending.len() + 1;
            lines.push(self.take_pending());
            rest = &rest[pos + 1..];
        }

        self.pending.extend_from_slice(rest);
        lines
    }

    /// Hands out the unterminated trailing fragment, treating end of stream
    /// as an implicit line terminator.
    pub fn drain_final(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        self.consumed += self.pending.len();
        Some(self.take_pending())
    }

    /// Bytes already returned as lines, newlines included.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Bytes currently held as an incomplete fragment.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn take_pending(&mut self) -> String {
        let bytes = std::mem::take(&mut self.pending);
        let mut line = match String::from_utf8(bytes) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };
        if line.ends_with('\r') {
            line.pop();
        }
        line
    }
}
