use crate::grammar::kinds::{OrderedItem, UnorderedItem};

use super::compiler::Compiler;

impl Compiler<'_> {
    /// `> text`: strips the one `>` and compiles the rest as a wrapped
    /// paragraph, so unmarked lines that follow stay inside the quote.
    pub(super) fn block_quote(&mut self) {
        self.cur.advance(1);

        self.out.raw("<blockquote>\n");
        self.paragraph(true);
        self.out.raw("</blockquote>\n");
    }

    /// Consecutive `- ` items, each body an unwrapped paragraph.
    pub(super) fn unordered_list(&mut self) {
        self.out.raw("<ul>");
        while UnorderedItem::detect(self.cur.rest()) {
            self.cur.advance(UnorderedItem::MARKER.len());
            self.list_item();
        }
        self.out.raw("</ul>\n");
    }

    /// Consecutive `N. ` items, each body an unwrapped paragraph.
    pub(super) fn ordered_list(&mut self) {
        self.out.raw("<ol>");
        while let Some(prefix) = OrderedItem::detect(self.cur.rest()) {
            self.cur.advance(prefix);
            self.list_item();
        }
        self.out.raw("</ol>\n");
    }

    fn list_item(&mut self) {
        self.out.raw("<li>\n");
        self.paragraph(false);
        self.out.raw("</li>\n");
    }
}
