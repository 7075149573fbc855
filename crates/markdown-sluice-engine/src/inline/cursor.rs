/// A cursor for byte-by-byte inline scanning of one line.
///
/// Cheap to clone, so parse attempts save a copy and restore it on failure.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The line being scanned.
    pub s: &'a [u8],
    /// Current index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a [u8]) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of line.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s.get(self.i..).is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances while `pred` holds, returning the bytes passed over.
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a [u8] {
        let start = self.i;
        while self.peek().is_some_and(&pred) {
            self.i += 1;
        }
        &self.s[start..self.i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new(b"hello");
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.i, 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new(b"**bold**");
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"~~"));
    }

    #[test]
    fn empty_line_input() {
        let cur = Cursor::new(b"");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new(b"ab");
        assert!(!cur.starts_with(b"abcdef"));

        cur.bump();
        assert!(!cur.starts_with(b"bc"));
        assert!(cur.starts_with(b"b"));
    }

    #[test]
    fn bump_n_past_end() {
        // bump_n does not bounds check; caller must ensure validity
        let mut cur = Cursor::new(b"hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert!(!cur.starts_with(b"x"));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new(b"x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn eat_while_returns_consumed_run() {
        let mut cur = Cursor::new(b"123abc");
        assert_eq!(cur.eat_while(|b| b.is_ascii_digit()), b"123");
        assert_eq!(cur.peek(), Some(b'a'));
        assert_eq!(cur.eat_while(|b| b.is_ascii_digit()), b"");
    }
}
