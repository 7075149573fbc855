use std::fmt;

use crate::{inline::kinds::Marker, source::Span};

pub const W_UNTERMINATED_MARKER: &str = "W_UNTERMINATED_MARKER";
pub const W_UNCLOSED_FENCE: &str = "W_UNCLOSED_FENCE";

/// A non-fatal problem found while compiling.
///
/// Diagnostics never stop emission: the HTML for the offending block has
/// already been written (with its closing block tags) when one is reported.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    /// The block the problem was found in.
    pub span: Span,
    pub code: &'static str,
    pub message: String,
}

impl Diagnostic {
    pub fn new(span: Span, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            span,
            code,
            message: message.into(),
        }
    }

    pub fn unterminated_marker(span: Span, marker: Marker) -> Self {
        Self::new(
            span,
            W_UNTERMINATED_MARKER,
            format!("unterminated {} marker", marker.name()),
        )
    }

    pub fn unclosed_fence(span: Span) -> Self {
        Self::new(
            span,
            W_UNCLOSED_FENCE,
            "code fence is not closed before end of input",
        )
    }

    /// 1-based line and byte column of the diagnostic's start in `source`.
    ///
    /// `\r\n` and a bare `\r` each count as one line break.
    pub fn line_col(&self, source: &[u8]) -> (usize, usize) {
        let end = self.span.start.min(source.len());
        let mut line = 1;
        let mut line_start = 0;
        let mut i = 0;
        while i < end {
            match source[i] {
                b'\n' => {
                    line += 1;
                    line_start = i + 1;
                }
                b'\r' => {
                    if source.get(i + 1) == Some(&b'\n') && i + 1 < end {
                        i += 1;
                    }
                    line += 1;
                    line_start = i + 1;
                }
                _ => {}
            }
            i += 1;
        }
        (line, end - line_start + 1)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}
