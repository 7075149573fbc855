use crate::{
    diagnostic::Diagnostic,
    emit::heading_tag,
    grammar::kinds::{CodeFence, FootnoteOpen},
    inline::{InlineToggles, render_line},
    source::Span,
};

use super::compiler::Compiler;

impl Compiler<'_> {
    /// `# Title` with the level already counted by the grammar.
    ///
    /// Heading text is escaped but not inline-rendered.
    pub(super) fn heading(&mut self, level: usize) {
        self.cur.advance(level);
        let content = self.cur.extract_line().trim();

        let tag = heading_tag(level);
        self.out.raw("<");
        self.out.raw(tag);
        self.out.raw(">");
        self.out.text(content.bytes);
        self.out.raw("</");
        self.out.raw(tag);
        self.out.raw(">\n");
    }

    /// `---`: the rest of the line is discarded.
    pub(super) fn thematic_break(&mut self) {
        self.cur.extract_line();
        self.out.raw("<hr />\n");
    }

    /// A fenced block copies its lines verbatim, escaping only angle brackets.
    ///
    /// A missing closing fence consumes the rest of the input; the closing
    /// tags are still written and the fence is reported.
    pub(super) fn fenced_code(&mut self) {
        let start = self.cur.pos();
        let opening = self.cur.extract_line().trim();
        let language = CodeFence::language(opening);

        self.out.raw("<pre><code");
        if !language.is_empty() {
            self.out.raw(" class=\"lang-");
            self.out.attr(language.bytes);
            self.out.raw("\"");
        }
        self.out.raw(">\n");

        loop {
            if self.cur.is_eof() {
                self.report(Diagnostic::unclosed_fence(Span::new(start, self.cur.pos())));
                break;
            }
            if CodeFence::detect(self.cur.rest()) {
                self.cur.extract_line();
                break;
            }
            let line = self.cur.extract_line();
            self.out.text(line.bytes);
            self.out.newline();
        }

        self.out.raw("</code></pre>\n");
    }

    /// `[^N]: text`, a single line of inline content.
    pub(super) fn footnote(&mut self, open: FootnoteOpen<'_>) {
        let start = self.cur.pos();
        self.cur.advance(open.len);
        let name = open.name();

        self.out.raw("<div id=\"fn:");
        self.out.attr(name);
        self.out.raw("\" role=\"doc-endnote\">");
        self.out.text(name);
        self.out.raw(". ");

        let line = self.cur.extract_line().trim();
        let mut toggles = InlineToggles::default();
        render_line(line.bytes, &mut toggles, &mut self.out);
        self.out.raw("</div>\n");

        self.check_toggles(toggles, Span::new(start, self.cur.pos()));
    }
}
