//! Page template - a standalone HTML document around the code block

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::language::Result;

use super::Template;

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
pre.shiki \{ padding: 1em; overflow-x: auto; }
pre.shiki .line \{ display: inline-block; width: 100%; }
pre.shiki .language-id \{ float: right; opacity: 0.6; }
pre.shiki .highlight \{ background-color: rgba(255, 255, 255, 0.1); }
pre.shiki .add \{ background-color: rgba(0, 255, 0, 0.1); }
pre.shiki .del \{ background-color: rgba(255, 0, 0, 0.1); }
pre.shiki.focus .line:not(.focus) \{ opacity: 0.5; }
</style>
</head>
<body>
{markup | unescaped}
</body>
</html>
"#;

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    markup: &'a str,
}

/// Template producing a complete HTML page, with enough CSS for the line
/// annotations to be visible.
pub struct Page;

impl Template for Page {
    fn fill(&self, markup: &str, title: &str) -> Result<String> {
        let mut tt = TinyTemplate::new();
        tt.add_template("page", TEMPLATE)?;

        let context = Context { title, markup };

        let rendered = tt.render("page", &context)?;
        Ok(rendered)
    }
}
