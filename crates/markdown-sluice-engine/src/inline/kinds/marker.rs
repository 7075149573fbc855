/// A toggle marker: the first occurrence in a block opens its tag, the next
/// one closes it. There is no nesting awareness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Bold,
    Italic,
    Strike,
    Code,
}

impl Marker {
    /// Markers in match priority order; `**` must be tried before `*`.
    pub const ALL: [Marker; 4] = [Marker::Bold, Marker::Italic, Marker::Strike, Marker::Code];

    pub fn delimiter(self) -> &'static [u8] {
        match self {
            Marker::Bold => b"**",
            Marker::Italic => b"*",
            Marker::Strike => b"~~",
            Marker::Code => b"`",
        }
    }

    /// Human-readable name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Marker::Bold => "bold",
            Marker::Italic => "italic",
            Marker::Strike => "strikethrough",
            Marker::Code => "inline code",
        }
    }

    pub fn open_tag(self) -> &'static str {
        match self {
            Marker::Bold => "<strong>",
            Marker::Italic => "<em>",
            Marker::Strike => "<del>",
            Marker::Code => "<code>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            Marker::Bold => "</strong>",
            Marker::Italic => "</em>",
            Marker::Strike => "</del>",
            Marker::Code => "</code>",
        }
    }

    /// Returns the marker that `rest` starts with, if any.
    pub fn detect(rest: &[u8]) -> Option<Marker> {
        Self::ALL
            .into_iter()
            .find(|m| rest.starts_with(m.delimiter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_star_is_bold_not_italic() {
        assert_eq!(Marker::detect(b"**x"), Some(Marker::Bold));
        assert_eq!(Marker::detect(b"*x"), Some(Marker::Italic));
    }

    #[test]
    fn single_tilde_is_not_strike() {
        assert_eq!(Marker::detect(b"~~x"), Some(Marker::Strike));
        assert_eq!(Marker::detect(b"~x"), None);
    }

    #[test]
    fn backtick_is_code() {
        assert_eq!(Marker::detect(b"`x`"), Some(Marker::Code));
    }

    #[test]
    fn tags_pair_up() {
        for marker in Marker::ALL {
            assert_eq!(marker.close_tag().replacen("</", "<", 1), marker.open_tag());
        }
    }
}
