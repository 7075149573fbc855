/// Name used when a footnote's digit run is empty.
pub const DEFAULT_NAME: &[u8] = b"0";

/// Resolves the emitted footnote name from its digit run.
pub fn footnote_name(digits: &[u8]) -> &[u8] {
    if digits.is_empty() {
        DEFAULT_NAME
    } else {
        digits
    }
}

/// Footnote definition opener: `[^` digits `]:`.
pub struct FootnoteDef;

/// What a footnote definition opener consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootnoteOpen<'a> {
    /// The digit run between `[^` and `]:`.
    pub digits: &'a [u8],
    /// Bytes covered by the whole opener, `]:` included.
    pub len: usize,
}

impl FootnoteOpen<'_> {
    pub fn name(&self) -> &[u8] {
        footnote_name(self.digits)
    }
}

impl FootnoteDef {
    pub const OPEN: &'static [u8; 2] = b"[^";
    pub const CLOSE: &'static [u8; 2] = b"]:";

    pub fn detect(rest: &[u8]) -> Option<FootnoteOpen<'_>> {
        let body = rest.strip_prefix(Self::OPEN)?;
        let digits = body.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || !body[digits..].starts_with(Self::CLOSE) {
            return None;
        }
        Some(FootnoteOpen {
            digits: &body[..digits],
            len: Self::OPEN.len() + digits + Self::CLOSE.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_definition() {
        let open = FootnoteDef::detect(b"[^12]: text").unwrap();
        assert_eq!(open.digits, b"12");
        assert_eq!(open.len, 6);
        assert_eq!(open.name(), b"12");
    }

    #[test]
    fn rejects_malformed_openers() {
        assert_eq!(FootnoteDef::detect(b"[^]: text"), None);
        assert_eq!(FootnoteDef::detect(b"[^a]: text"), None);
        assert_eq!(FootnoteDef::detect(b"[^1] text"), None);
        assert_eq!(FootnoteDef::detect(b"[1]: text"), None);
    }

    #[test]
    fn empty_digit_run_is_named_zero() {
        assert_eq!(footnote_name(b""), b"0");
        assert_eq!(footnote_name(b"7"), b"7");
    }
}
