/// Unordered list item marker: `- `.
pub struct UnorderedItem;

impl UnorderedItem {
    pub const MARKER: &'static [u8; 2] = b"- ";

    pub fn detect(rest: &[u8]) -> bool {
        rest.starts_with(Self::MARKER)
    }
}

/// Ordered list item marker: decimal digits, `.`, space.
pub struct OrderedItem;

impl OrderedItem {
    pub const DELIMITER: &'static [u8; 2] = b". ";

    /// Returns the length of the item prefix (digits plus `. `) when `rest`
    /// opens an ordered item.
    pub fn detect(rest: &[u8]) -> Option<usize> {
        let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || !rest[digits..].starts_with(Self::DELIMITER) {
            return None;
        }
        Some(digits + Self::DELIMITER.len())
    }
}
