//! # Emission Policy
//!
//! Escaping and tag-name rules shared by the block compiler and the inline
//! renderer. All HTML is written through [`HtmlBuffer`]:
//!
//! - [`HtmlBuffer::text`] for document text: `<` and `>` become entities,
//!   every other byte passes through untouched
//! - [`HtmlBuffer::attr`] for attribute values (href, src, alt, class), which
//!   additionally escapes `&` and `"`
//! - [`HtmlBuffer::raw`] for markup the compiler generates itself

/// Punctuation that a backslash turns into a literal character.
pub const ESCAPABLE: &[u8] = b"\\`*_{}[]()<>#+-.!|";

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Tag name for a heading of `level` (clamped to 1..=6).
pub fn heading_tag(level: usize) -> &'static str {
    HEADING_TAGS[level.clamp(1, HEADING_TAGS.len()) - 1]
}

pub fn is_escapable(b: u8) -> bool {
    ESCAPABLE.contains(&b)
}

fn entity(b: u8) -> Option<&'static str> {
    match b {
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        _ => None,
    }
}

/// Growable HTML output for one top-level block.
#[derive(Debug, Default)]
pub struct HtmlBuffer {
    bytes: Vec<u8>,
}

impl HtmlBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends generated markup verbatim.
    pub fn raw(&mut self, markup: &str) {
        self.bytes.extend_from_slice(markup.as_bytes());
    }

    pub fn newline(&mut self) {
        self.bytes.push(b'\n');
    }

    /// Appends document text, replacing `<` and `>` with entities.
    pub fn text(&mut self, text: &[u8]) {
        let mut run_start = 0;
        for (i, &b) in text.iter().enumerate() {
            if let Some(replacement) = entity(b) {
                self.bytes.extend_from_slice(&text[run_start..i]);
                self.raw(replacement);
                run_start = i + 1;
            }
        }
        self.bytes.extend_from_slice(&text[run_start..]);
    }

    /// Appends an attribute value for use inside double quotes.
    ///
    /// Bytes that are not valid UTF-8 are copied through untouched.
    pub fn attr(&mut self, value: &[u8]) {
        for chunk in value.utf8_chunks() {
            let encoded = html_escape::encode_double_quoted_attribute(chunk.valid());
            self.text(encoded.as_bytes());
            self.bytes.extend_from_slice(chunk.invalid());
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}
