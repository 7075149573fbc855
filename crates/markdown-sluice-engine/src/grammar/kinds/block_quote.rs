/// Block quote opener.
///
/// Only the first line of a quote carries the prefix; the body is an ordinary
/// paragraph, so lines that follow without `>` still belong to the quote.
pub struct BlockQuote;

impl BlockQuote {
    /// The byte consumed when a quote opens.
    pub const PREFIX: u8 = b'>';
    pub const OPENER: &'static [u8; 2] = b"> ";

    pub fn detect(rest: &[u8]) -> bool {
        rest.starts_with(Self::OPENER)
    }
}
