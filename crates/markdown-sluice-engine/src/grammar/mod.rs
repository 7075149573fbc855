//! # Lookahead Grammar
//!
//! Non-consuming tests of which block construct starts at a position. The
//! block compiler asks [`classify`] at the top level and
//! [`interrupts_paragraph`] between the lines of paragraph-like bodies.
//!
//! Priority order (first match wins): heading, block quote, thematic break,
//! unordered item, ordered item, fenced code, footnote definition, and
//! finally paragraph, which always matches.

pub mod kinds;

use kinds::{
    BlockQuote, CodeFence, FootnoteDef, FootnoteOpen, Heading, OrderedItem, ThematicBreak,
    UnorderedItem,
};

/// The block construct found at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStart<'a> {
    Heading { level: usize },
    BlockQuote,
    ThematicBreak,
    UnorderedList,
    OrderedList,
    FencedCode,
    Footnote(FootnoteOpen<'a>),
    Paragraph,
}

/// Classifies the unconsumed bytes `rest`.
pub fn classify(rest: &[u8]) -> BlockStart<'_> {
    if let Some(level) = Heading::detect(rest) {
        BlockStart::Heading { level }
    } else if BlockQuote::detect(rest) {
        BlockStart::BlockQuote
    } else if ThematicBreak::detect(rest) {
        BlockStart::ThematicBreak
    } else if UnorderedItem::detect(rest) {
        BlockStart::UnorderedList
    } else if OrderedItem::detect(rest).is_some() {
        BlockStart::OrderedList
    } else if CodeFence::detect(rest) {
        BlockStart::FencedCode
    } else if let Some(open) = FootnoteDef::detect(rest) {
        BlockStart::Footnote(open)
    } else {
        BlockStart::Paragraph
    }
}

/// True when a block other than a paragraph starts at `rest`.
pub fn interrupts_paragraph(rest: &[u8]) -> bool {
    classify(rest) != BlockStart::Paragraph
}
