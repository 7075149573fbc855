//! # Block Kinds
//!
//! Block openers that own their syntax delimiters. Each `detect` is the one
//! place its construct is recognized, and it hands back whatever the block
//! compiler needs (level, prefix length, name) so nothing is scanned twice.

pub mod block_quote;
pub mod code_fence;
pub mod footnote;
pub mod heading;
pub mod list;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use footnote::{FootnoteDef, FootnoteOpen, footnote_name};
pub use heading::Heading;
pub use list::{OrderedItem, UnorderedItem};
pub use thematic_break::ThematicBreak;
