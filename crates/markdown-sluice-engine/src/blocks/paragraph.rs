use crate::{
    diagnostic::Diagnostic,
    grammar::interrupts_paragraph,
    inline::{InlineToggles, render_line},
    source::Span,
};

use super::compiler::Compiler;

impl Compiler<'_> {
    /// Compiles a paragraph-like body: a top-level paragraph, a list item, or
    /// a block quote's content.
    ///
    /// Lines are trimmed and rendered one at a time until the input ends, a
    /// blank line follows, or another block starts at the next line. Only
    /// top-level paragraphs and quotes are wrapped in `<p>`.
    pub(super) fn paragraph(&mut self, wrap: bool) {
        let start = self.cur.pos();
        if wrap {
            self.out.raw("<p>\n");
        }

        let mut toggles = InlineToggles::default();
        while !self.paragraph_ends() {
            let line = self.cur.extract_line().trim();
            render_line(line.bytes, &mut toggles, &mut self.out);
            self.out.newline();
        }

        if wrap {
            self.out.raw("</p>\n");
        }
        self.check_toggles(toggles, Span::new(start, self.cur.pos()));
    }

    fn paragraph_ends(&self) -> bool {
        self.cur.is_eof() || self.cur.at_blank_line() || interrupts_paragraph(self.cur.rest())
    }

    /// Reports every marker still open at the end of a block.
    pub(super) fn check_toggles(&mut self, toggles: InlineToggles, span: Span) {
        for marker in toggles.open_markers() {
            self.report(Diagnostic::unterminated_marker(span, marker));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{compile, compile_with_diagnostics, diagnostic::W_UNTERMINATED_MARKER};
    use pretty_assertions::assert_eq;

    #[test]
    fn multi_line_paragraph() {
        assert_eq!(
            compile("first line  \n  second line\n"),
            "<p>\nfirst line\nsecond line\n</p>\n"
        );
    }

    #[test]
    fn blank_line_separates_paragraphs() {
        assert_eq!(compile("a\n\nb"), "<p>\na\n</p>\n<p>\nb\n</p>\n");
    }

    #[test]
    fn whitespace_only_line_ends_paragraph() {
        assert_eq!(compile("a\n   \nb"), "<p>\na\n</p>\n<p>\nb\n</p>\n");
    }

    #[test]
    fn block_opener_interrupts_paragraph() {
        assert_eq!(
            compile("text\n# Head\n"),
            "<p>\ntext\n</p>\n<h1>Head</h1>\n"
        );
    }

    #[test]
    fn indented_marker_does_not_interrupt() {
        assert_eq!(compile("text\n  - not a list\n"), "<p>\ntext\n- not a list\n</p>\n");
    }

    #[test]
    fn emphasis_spans_lines_of_one_paragraph() {
        assert_eq!(
            compile("*start\nend*\n"),
            "<p>\n<em>start\nend</em>\n</p>\n"
        );
    }

    #[test]
    fn toggles_reset_between_paragraphs() {
        let out = compile_with_diagnostics("**open\n\n**again**\n");
        assert_eq!(
            out.html,
            "<p>\n<strong>open\n</p>\n<p>\n<strong>again</strong>\n</p>\n"
        );
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].code, W_UNTERMINATED_MARKER);
        assert_eq!(out.diagnostics[0].span.start, 0);
    }

    #[test]
    fn each_open_marker_is_reported() {
        let out = compile_with_diagnostics("`code and *em\n");
        let messages: Vec<_> = out.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["unterminated italic marker", "unterminated inline code marker"]
        );
    }
}
