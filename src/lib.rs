//! Render Shiki syntax highlighting into annotated HTML.
//!
//! Shiki itself runs under Node; we hand it source code and get back a
//! matrix of coloured tokens. Everything after that, working out which
//! lines are highlighted, added, deleted or focused and turning the tokens
//! into markup, happens here.

pub mod annotation;
pub mod highlighter;
pub mod highlighting;
pub mod language;
pub mod rendering;
pub mod templating;

pub use highlighter::{Highlighter, Options, Output, Renderer};
pub use language::{HighlightError, Result};
