//! HTML markup for embedding highlighted code in web pages

use std::borrow::Cow;

use crate::annotation::Annotations;
use crate::highlighter::Options;
use crate::language::*;

use super::Render;

/// Used when the theme doesn't declare a background colour.
pub const DEFAULT_BACKGROUND: &str = "#000";

/// Lookup from font style bitset to CSS declaration. Only exact single-flag
/// values have an entry; combined values such as italic|bold (3) get no
/// declaration at all. Consumers of the markup depend on this, so don't
/// turn it into a per-bit mapping.
const FONT_STYLE_TO_CSS: [(i32, &str); 3] = [
    (STYLE_ITALIC, "font-style: italic"),
    (STYLE_BOLD, "font-weight: bold"),
    (STYLE_UNDERLINE, "text-decoration: underline"),
];

/// Emit a `<pre class="shiki">` block with one `<span class="line">` per
/// source line and one styled span per token.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Render for HtmlRenderer {
    fn render(&self, result: &TokenizeResult, options: &Options) -> String {
        let annotations = Annotations::resolve(options);

        let mut html = String::new();

        html.push_str("<pre class=\"");
        html.push_str(&annotations.block_classes());
        html.push_str("\" style=\"background-color: ");
        html.push_str(
            result
                .background_color
                .as_deref()
                .unwrap_or(DEFAULT_BACKGROUND),
        );
        html.push_str("\">");

        if let Some(id) = &options.language_id {
            html.push_str("<div class=\"language-id\">");
            html.push_str(id);
            html.push_str("</div>");
        }

        html.push_str("<code>");

        for (index, line) in result
            .lines
            .iter()
            .enumerate()
        {
            let number = index as i64 + 1;

            html.push_str("<span class=\"");
            html.push_str(&annotations.line_classes(number));
            html.push_str("\">");

            for token in line {
                append_token(&mut html, token);
            }

            html.push_str("</span>\n");
        }

        // no blank lines at the end of the block
        let trimmed = html
            .trim_end_matches('\n')
            .len();
        html.truncate(trimmed);

        html.push_str("</code></pre>");
        html
    }
}

fn append_token(html: &mut String, token: &Token) {
    html.push_str("<span style=\"color: ");
    html.push_str(&token.color);
    if token.font_style > STYLE_NONE {
        if let Some(css) = css_for_font_style(token.font_style) {
            html.push_str("; ");
            html.push_str(css);
        }
    }
    html.push_str("\">");
    html.push_str(&escape_html(&token.content));
    html.push_str("</span>");
}

/// The CSS declaration for a font style bitset, if it is exactly one of
/// italic, bold or underline.
pub fn css_for_font_style(font_style: i32) -> Option<&'static str> {
    FONT_STYLE_TO_CSS
        .iter()
        .find(|(style, _)| *style == font_style)
        .map(|(_, css)| *css)
}

/// Replace the five characters that are special in HTML text and attribute
/// values with their entities. Done in one pass so an `&` introduced by one
/// replacement is never escaped again.
pub fn escape_html(content: &str) -> Cow<'_, str> {
    if !content.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(content);
    }

    let mut result = String::with_capacity(content.len() + 16);
    for c in content.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
