//! Template trait for presenting rendered code

use crate::language::Result;

/// Trait for templates that take rendered HTML and produce the final output
pub trait Template {
    /// Combine the markup of a code block with a title into a document
    fn fill(&self, markup: &str, title: &str) -> Result<String>;
}
