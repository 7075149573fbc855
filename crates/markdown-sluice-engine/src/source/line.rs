use super::span::Span;

/// Whitespace as classified by C's `isspace` in the "C" locale.
///
/// Unlike [`u8::is_ascii_whitespace`] this includes vertical tab (0x0B).
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// A non-owning view of one line (or part of one) in the source buffer.
///
/// Trimming and sub-viewing only narrow the view; nothing is copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Byte offset of `bytes` in the source buffer.
    pub start: usize,
    /// The viewed bytes, never including a line terminator.
    pub bytes: &'a [u8],
}

impl<'a> Line<'a> {
    pub fn new(start: usize, bytes: &'a [u8]) -> Self {
        Self { start, bytes }
    }

    pub fn len(self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(self) -> bool {
        self.bytes.is_empty()
    }

    /// The source range covered by this view.
    pub fn span(self) -> Span {
        Span::new(self.start, self.start + self.bytes.len())
    }

    /// True when the view holds nothing but whitespace.
    pub fn is_blank(self) -> bool {
        self.bytes.iter().all(|&b| is_space(b))
    }

    pub fn trim_start(self) -> Self {
        let skip = self.bytes.iter().take_while(|&&b| is_space(b)).count();
        Self::new(self.start + skip, &self.bytes[skip..])
    }

    pub fn trim_end(self) -> Self {
        let keep = self.bytes.len()
            - self
                .bytes
                .iter()
                .rev()
                .take_while(|&&b| is_space(b))
                .count();
        Self::new(self.start, &self.bytes[..keep])
    }

    /// Strips leading and trailing whitespace.
    #[must_use]
    pub fn trim(self) -> Self {
        self.trim_end().trim_start()
    }

    /// Returns the sub-view of at most `len` bytes starting at `offset`.
    ///
    /// An `offset` at or past the end yields an empty view positioned at the
    /// end of this one; `len` is clamped to what remains.
    #[must_use]
    pub fn sub(self, offset: usize, len: usize) -> Self {
        if offset >= self.bytes.len() {
            return Self::new(self.start + self.bytes.len(), &[]);
        }
        let len = len.min(self.bytes.len() - offset);
        Self::new(self.start + offset, &self.bytes[offset..offset + len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"  hello  ", b"hello", 2)]
    #[case(b"hello", b"hello", 0)]
    #[case(b"\t\x0b\x0cx\r", b"x", 3)]
    #[case(b"   ", b"", 0)]
    #[case(b"", b"", 0)]
    fn trim_strips_c_whitespace(
        #[case] input: &[u8],
        #[case] expected: &[u8],
        #[case] skipped: usize,
    ) {
        let line = Line::new(100, input).trim();
        assert_eq!(line.bytes, expected);
        assert_eq!(line.start, 100 + skipped);
    }

    #[test]
    fn trim_is_idempotent() {
        let once = Line::new(0, b"  a b  ").trim();
        assert_eq!(once.trim(), once);
    }

    #[test]
    fn sub_within_bounds() {
        let line = Line::new(10, b"```rust");
        let lang = line.sub(3, 4);
        assert_eq!(lang.bytes, b"rust");
        assert_eq!(lang.start, 13);
    }

    #[test]
    fn sub_clamps_length() {
        let line = Line::new(0, b"abc");
        assert_eq!(line.sub(1, 100).bytes, b"bc");
    }

    #[test]
    fn sub_past_end_is_empty() {
        let line = Line::new(5, b"```");
        let rest = line.sub(3, usize::MAX);
        assert!(rest.is_empty());
        assert_eq!(rest.start, 8);
        assert!(line.sub(99, 1).is_empty());
    }

    #[test]
    fn blank_detection() {
        assert!(Line::new(0, b" \t ").is_blank());
        assert!(Line::new(0, b"").is_blank());
        assert!(!Line::new(0, b" x ").is_blank());
    }

    #[test]
    fn span_covers_view() {
        let line = Line::new(4, b"  word ").trim();
        assert_eq!(line.span(), Span::new(6, 10));
    }
}
