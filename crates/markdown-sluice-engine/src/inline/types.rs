use super::kinds::Marker;

/// One recognized piece of an inline line.
///
/// Tokens borrow from the line and are rendered as soon as they are scanned;
/// nothing is collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineToken<'a> {
    /// `<url>`: the url is both target and text.
    QuickLink { url: &'a [u8] },
    /// `[text](url)`.
    Link { text: &'a [u8], url: &'a [u8] },
    /// `![alt](src)`.
    Image { alt: &'a [u8], src: &'a [u8] },
    /// `[^digits]`, holding the digit run (possibly empty).
    FootnoteRef { digits: &'a [u8] },
    /// A backslash-escaped punctuation byte.
    Escaped(u8),
    /// An emphasis, strikethrough or code toggle.
    Toggle(Marker),
    /// Any other byte, passed through (angle brackets get escaped on output).
    Literal(u8),
}
