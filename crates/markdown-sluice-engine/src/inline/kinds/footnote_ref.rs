/// Footnote reference, `[^1]`.
///
/// The digit run may be empty (`[^]`), which names footnote `0`.
pub struct FootnoteRef;

impl FootnoteRef {
    pub const OPEN: &'static [u8; 2] = b"[^";
    pub const CLOSE: u8 = b']';
}
