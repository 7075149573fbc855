use super::line::{Line, is_space};

/// A forward-only scan position over the source buffer.
///
/// Lookahead happens on [`SourceCursor::rest`], which never moves the cursor.
#[derive(Debug, Clone)]
pub struct SourceCursor<'a> {
    src: &'a [u8],
    pos: usize,
}

impl<'a> SourceCursor<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset into the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn source(&self) -> &'a [u8] {
        self.src
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The unconsumed remainder of the buffer.
    pub fn rest(&self) -> &'a [u8] {
        &self.src[self.pos..]
    }

    pub fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    /// Advances by `n` bytes, stopping at the end of the buffer.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.src.len());
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    /// True when the line starting at the cursor is empty or whitespace-only.
    ///
    /// At end of buffer there is no line, so this returns false.
    pub fn at_blank_line(&self) -> bool {
        if self.is_eof() {
            return false;
        }
        let rest = self.rest();
        let end = rest
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .unwrap_or(rest.len());
        Line::new(self.pos, &rest[..end]).is_blank()
    }

    /// Consumes one line and its terminator, returning the line without it.
    ///
    /// `\n`, `\r\n` and a bare `\r` all terminate a line. At end of buffer the
    /// returned line is empty and the cursor does not move.
    pub fn extract_line(&mut self) -> Line<'a> {
        let start = self.pos;
        while let Some(b) = self.peek() {
            match b {
                b'\n' => {
                    let line = Line::new(start, &self.src[start..self.pos]);
                    self.pos += 1;
                    return line;
                }
                b'\r' => {
                    let line = Line::new(start, &self.src[start..self.pos]);
                    self.pos += 1;
                    if self.peek() == Some(b'\n') {
                        self.pos += 1;
                    }
                    return line;
                }
                _ => self.pos += 1,
            }
        }
        Line::new(start, &self.src[start..self.pos])
    }
}
