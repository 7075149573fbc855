use std::io;

/// Failure to deliver compiled HTML.
///
/// Compilation itself cannot fail; only the sink handed to
/// [`compile_to_writer`](crate::compile_to_writer) can.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("failed to write HTML output: {0}")]
    Write(#[from] io::Error),
}
