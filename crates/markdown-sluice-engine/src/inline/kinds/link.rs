/// Quick link: a bare URL in angle brackets, `<https://example.com>`.
pub struct QuickLink;

impl QuickLink {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: u8 = b'>';
}

/// Inline link, `[text](url)`.
///
/// The text runs to the first `]` that is not preceded by a backslash and
/// must not be empty. The url is a run of printable non-space bytes up to `)`.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    /// Byte that keeps a following `]` inside the link text.
    pub const TEXT_ESCAPE: u8 = b'\\';
}

/// Image, `![alt](src)`: a link prefixed with `!`.
pub struct Image;

impl Image {
    pub const MARKER: u8 = b'!';
}

/// Bytes allowed in a url: printable ASCII excluding space.
pub fn is_url_byte(b: u8) -> bool {
    b.is_ascii_graphic()
}
