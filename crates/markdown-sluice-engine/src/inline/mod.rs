//! # Inline Renderer
//!
//! Scans one trimmed line and writes HTML as it goes. Links, images and
//! footnote references are self-contained spans; emphasis, strikethrough and
//! code are toggles whose state persists across the lines of a block.
//!
//! ## Modules
//!
//! - **`kinds`**: delimiter-owning construct types (`Link`, `Marker`, ...)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning of a line
//! - **`types`**: `InlineToken`, one scanned construct
//! - **`parser`**: `next_token()` with the `try_parse_*` helpers
//! - **`toggles`**: `InlineToggles`, the per-block marker state
//! - **`render`**: `render_line()`, which turns tokens into markup
//!
//! ## Bounded Scanning
//!
//! Every construct is matched inside the current line only. An opener with
//! no closer on the same line is plain text.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod render;
pub mod toggles;
pub mod types;

pub use render::render_line;
pub use toggles::InlineToggles;
pub use types::InlineToken;
