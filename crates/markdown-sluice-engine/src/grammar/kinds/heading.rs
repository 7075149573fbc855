/// ATX heading opener: one to six `#` followed by a space.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level when `rest` opens a heading.
    pub fn detect(rest: &[u8]) -> Option<usize> {
        let level = rest.iter().take_while(|&&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        (rest.get(level) == Some(&b' ')).then_some(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(b"# Title", Some(1))]
    #[case(b"### Third", Some(3))]
    #[case(b"###### Six", Some(6))]
    #[case(b"####### Seven", None)]
    #[case(b"#NoSpace", None)]
    #[case(b"#", None)]
    #[case(b"text", None)]
    #[case(b"", None)]
    fn detects_levels(#[case] input: &[u8], #[case] expected: Option<usize>) {
        assert_eq!(Heading::detect(input), expected);
    }
}
