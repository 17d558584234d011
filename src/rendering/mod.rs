//! Renderers turning Shiki tokens into markup

use crate::highlighter::Options;
use crate::language::TokenizeResult;

mod html;

pub use html::{css_for_font_style, escape_html, HtmlRenderer, DEFAULT_BACKGROUND};

/// Trait for rendering backends. The default is HtmlRenderer; callers can
/// supply their own, in which case it owns the shape of the output.
pub trait Render: Send + Sync {
    /// Turn a complete tokenizer result into markup, applying the line
    /// annotations and label given in options.
    fn render(&self, result: &TokenizeResult, options: &Options) -> String;
}

impl<F> Render for F
where
    F: Fn(&TokenizeResult, &Options) -> String + Send + Sync,
{
    fn render(&self, result: &TokenizeResult, options: &Options) -> String {
        self(result, options)
    }
}
