// Types shared between the tokenizer, the annotation resolver and the
// renderers

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
