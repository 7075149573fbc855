use super::kinds::Marker;

/// Open/closed state of the four toggle markers within one block.
///
/// Created fresh for every paragraph-like block and threaded through each of
/// its lines. Anything still open when the block ends is an unterminated
/// marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InlineToggles {
    pub bold: bool,
    pub italic: bool,
    pub struck: bool,
    pub code: bool,
}

impl InlineToggles {
    pub fn is_open(&self, marker: Marker) -> bool {
        match marker {
            Marker::Bold => self.bold,
            Marker::Italic => self.italic,
            Marker::Strike => self.struck,
            Marker::Code => self.code,
        }
    }

    /// Flips `marker`, returning true if this occurrence opened it.
    pub fn toggle(&mut self, marker: Marker) -> bool {
        let flag = match marker {
            Marker::Bold => &mut self.bold,
            Marker::Italic => &mut self.italic,
            Marker::Strike => &mut self.struck,
            Marker::Code => &mut self.code,
        };
        *flag = !*flag;
        *flag
    }

    /// True when every marker is closed.
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    /// Markers left open, in priority order.
    pub fn open_markers(&self) -> impl Iterator<Item = Marker> + '_ {
        Marker::ALL.into_iter().filter(|m| self.is_open(*m))
    }
}
