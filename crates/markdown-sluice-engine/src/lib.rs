//! Single-pass Markdown to HTML compiler.
//!
//! The dialect is small: ATX headings, one-level block quotes, flat lists,
//! fenced code, footnotes, thematic breaks, and paragraphs with links,
//! images, footnote references, backslash escapes and toggle markers for
//! bold, italic, strikethrough and inline code. HTML is produced while the
//! source is scanned; nothing resembling a document tree is kept.
//!
//! ```
//! let html = markdown_sluice_engine::compile("# Title\n");
//! assert_eq!(html, "<h1>Title</h1>\n");
//! ```

pub mod blocks;
pub mod diagnostic;
pub mod emit;
pub mod error;
pub mod grammar;
pub mod inline;
pub mod source;

use std::io::Write;

pub use blocks::{Compiler, Report};
pub use diagnostic::{Diagnostic, W_UNCLOSED_FENCE, W_UNTERMINATED_MARKER};
pub use error::CompileError;
pub use source::Span;

/// HTML together with the diagnostics found while producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiled {
    pub html: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Compiles `source` to HTML, discarding diagnostics.
pub fn compile(source: &str) -> String {
    compile_with_diagnostics(source).html
}

pub fn compile_with_diagnostics(source: &str) -> Compiled {
    let mut compiler = Compiler::new(source.as_bytes());
    let mut html = Vec::with_capacity(source.len() + source.len() / 2);
    while let Some(block) = compiler.next_block() {
        html.extend_from_slice(block);
    }
    let report = compiler.finish();

    // Input is UTF-8 and markup is only ever inserted between whole
    // characters, so the lossy path never runs in practice.
    let html = String::from_utf8(html)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned());
    Compiled {
        html,
        diagnostics: report.diagnostics,
    }
}

/// Compiles `source` and streams the HTML of each top-level block to `sink`
/// as soon as it is complete.
///
/// `source` need not be UTF-8; bytes outside markup pass through unchanged.
pub fn compile_to_writer<W: Write>(source: &[u8], mut sink: W) -> Result<Report, CompileError> {
    let mut compiler = Compiler::new(source);
    while let Some(block) = compiler.next_block() {
        sink.write_all(block)?;
    }
    sink.flush()?;
    Ok(compiler.finish())
}
