use crate::emit::is_escapable;

/// Backslash escape of a single punctuation byte, `\*`.
pub struct Escape;

impl Escape {
    pub const MARKER: u8 = b'\\';

    /// Returns the escaped byte when `rest` starts with a valid escape.
    pub fn detect(rest: &[u8]) -> Option<u8> {
        match rest {
            [Self::MARKER, b, ..] if is_escapable(*b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_punctuation() {
        assert_eq!(Escape::detect(b"\\*"), Some(b'*'));
        assert_eq!(Escape::detect(b"\\\\x"), Some(b'\\'));
        assert_eq!(Escape::detect(b"\\<"), Some(b'<'));
    }

    #[test]
    fn ignores_other_bytes() {
        assert_eq!(Escape::detect(b"\\a"), None);
        assert_eq!(Escape::detect(b"\\~"), None);
        assert_eq!(Escape::detect(b"\\"), None);
        assert_eq!(Escape::detect(b"x"), None);
    }
}
