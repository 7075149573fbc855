//! # Source Cursor
//!
//! Byte-level access to the input document. The buffer is borrowed from the
//! caller and never modified; everything here hands out views into it.
//!
//! - **`cursor`**: `SourceCursor`, the forward-only scan position with line
//!   extraction
//! - **`line`**: `Line`, a trimmable, sub-viewable window onto one line
//! - **`span`**: `Span`, a plain byte range used by diagnostics

pub mod cursor;
pub mod line;
pub mod span;

pub use cursor::SourceCursor;
pub use line::{Line, is_space};
pub use span::Span;
