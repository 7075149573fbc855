/// Thematic break: three dashes. Anything after them on the line is ignored.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const MARKER: &'static [u8; 3] = b"---";

    pub fn detect(rest: &[u8]) -> bool {
        rest.starts_with(Self::MARKER)
    }
}
