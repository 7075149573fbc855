//! # Block Compiler
//!
//! Consumes the source one top-level block at a time and writes its HTML.
//! There is no tree: each routine emits opening markup, compiles its body,
//! and emits closing markup before returning.
//!
//! ## Modules
//!
//! - **`compiler`**: `Compiler`, the driver and its streaming interface
//! - **`leaf`**: headings, thematic breaks, fenced code, footnote definitions
//! - **`container`**: block quotes and lists
//! - **`paragraph`**: the shared paragraph-like body routine
//!
//! Containers hold exactly one paragraph-like body per quote or list item,
//! so nesting never goes deeper than one level.

mod compiler;
mod container;
mod leaf;
mod paragraph;

pub use compiler::{Compiler, Report};
