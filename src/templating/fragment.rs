//! Fragment template - the code block on its own, for embedding

use crate::language::Result;

use super::Template;

/// Template passing the rendered block through untouched
pub struct Fragment;

impl Template for Fragment {
    fn fill(&self, markup: &str, _title: &str) -> Result<String> {
        let mut result = String::with_capacity(markup.len() + 1);
        result.push_str(markup);
        result.push('\n');
        Ok(result)
    }
}
