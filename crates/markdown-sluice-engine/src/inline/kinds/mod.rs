//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters. The parser calls these
//! constants; it never hardcodes `[`, `](` or `**` itself.
//!
//! - **`QuickLink`**: `<url>`
//! - **`Link`** / **`Image`**: `[text](url)`, `![alt](src)`
//! - **`FootnoteRef`**: `[^digits]`
//! - **`Escape`**: `\` before punctuation
//! - **`Marker`**: toggles `**`, `*`, `~~`, `` ` ``

pub mod escape;
pub mod footnote_ref;
pub mod link;
pub mod marker;

pub use escape::Escape;
pub use footnote_ref::FootnoteRef;
pub use link::{Image, Link, QuickLink, is_url_byte};
pub use marker::Marker;
