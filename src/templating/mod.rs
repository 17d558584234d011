//! Templates wrapping rendered markup for output

mod fragment;
mod page;
mod template;

pub use fragment::Fragment;
pub use page::Page;
pub use template::Template;

use crate::language::Result;

/// Wrap rendered markup using the specified template
pub fn fill(template: &impl Template, markup: &str, title: &str) -> Result<String> {
    template.fill(markup, title)
}
