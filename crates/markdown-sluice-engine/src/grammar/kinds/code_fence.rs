use crate::source::Line;

/// Fenced code block delimited by three backticks.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static [u8; 3] = b"```";

    /// True for both the opening and the closing fence line.
    pub fn detect(rest: &[u8]) -> bool {
        rest.starts_with(Self::FENCE)
    }

    /// Extracts the language tag from a trimmed opening fence line.
    ///
    /// Empty when the fence carries no tag.
    pub fn language(opening: Line<'_>) -> Line<'_> {
        opening.sub(Self::FENCE.len(), usize::MAX).trim()
    }
}
