use crate::{
    diagnostic::Diagnostic,
    emit::HtmlBuffer,
    grammar::{BlockStart, classify},
    source::SourceCursor,
};

/// What a finished compilation leaves behind besides its HTML.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

/// Single-pass Markdown to HTML compiler over one source buffer.
///
/// Each call to [`Compiler::next_block`] consumes one top-level block and
/// hands back its HTML, so callers can stream output without the whole
/// document ever existing in memory as HTML. No block structure is kept once
/// its markup has been produced.
pub struct Compiler<'a> {
    pub(super) cur: SourceCursor<'a>,
    pub(super) out: HtmlBuffer,
    pub(super) diagnostics: Vec<Diagnostic>,
}

impl<'a> Compiler<'a> {
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            cur: SourceCursor::new(source),
            out: HtmlBuffer::new(),
            diagnostics: vec![],
        }
    }

    /// Compiles the next top-level block and returns its HTML.
    ///
    /// Returns `None` once only whitespace remains.
    pub fn next_block(&mut self) -> Option<&[u8]> {
        self.out.clear();
        self.cur.skip_whitespace();
        if self.cur.is_eof() {
            return None;
        }
        self.compile_block();
        Some(self.out.as_bytes())
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn finish(self) -> Report {
        Report {
            diagnostics: self.diagnostics,
        }
    }

    fn compile_block(&mut self) {
        let start = classify(self.cur.rest());
        log::debug!("block at byte {}: {:?}", self.cur.pos(), start);

        match start {
            BlockStart::Heading { level } => self.heading(level),
            BlockStart::BlockQuote => self.block_quote(),
            BlockStart::ThematicBreak => self.thematic_break(),
            BlockStart::UnorderedList => self.unordered_list(),
            BlockStart::OrderedList => self.ordered_list(),
            BlockStart::FencedCode => self.fenced_code(),
            BlockStart::Footnote(open) => self.footnote(open),
            BlockStart::Paragraph => self.paragraph(true),
        }
    }

    pub(super) fn report(&mut self, diagnostic: Diagnostic) {
        let (line, col) = diagnostic.line_col(self.cur.source());
        log::warn!("{line}:{col}: {diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}
