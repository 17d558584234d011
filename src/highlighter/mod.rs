//! Putting it together: tokenize with Shiki, then render

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::highlighting::{Node, TokenSource};
use crate::language::{Result, TokenizeResult};
use crate::rendering::{HtmlRenderer, Render};

mod options;

pub use options::Options;

pub const DEFAULT_LANGUAGE: &str = "php";
pub const DEFAULT_THEME: &str = "nord";

/// Which renderer to apply to the tokens.
#[derive(Default)]
pub enum Renderer {
    #[default]
    Html,
    Custom(Box<dyn Render>),
    /// Hand back the raw tokens instead of markup.
    Disabled,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Renderer::Html => write!(f, "Html"),
            Renderer::Custom(_) => write!(f, "Custom"),
            Renderer::Disabled => write!(f, "Disabled"),
        }
    }
}

/// Result of a highlight call: markup, or when rendering is disabled the
/// tokens themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Markup(String),
    Tokens(TokenizeResult),
}

impl Output {
    pub fn markup(&self) -> Option<&str> {
        match self {
            Output::Markup(markup) => Some(markup),
            Output::Tokens(_) => None,
        }
    }

    pub fn tokens(&self) -> Option<&TokenizeResult> {
        match self {
            Output::Markup(_) => None,
            Output::Tokens(result) => Some(result),
        }
    }
}

/// Configured once, then used for any number of highlight calls.
#[derive(Debug)]
pub struct Highlighter<S = Node> {
    source: S,
    default_theme: String,
    renderer: Renderer,
}

impl Highlighter<Node> {
    pub fn new() -> Highlighter<Node> {
        Highlighter::with_source(Node::new())
    }

    /// Run the Shiki engine from a different directory, for installations
    /// that keep shiki.js and its node_modules elsewhere.
    pub fn with_working_directory(mut self, path: impl Into<PathBuf>) -> Highlighter<Node> {
        self.source = self
            .source
            .with_working_directory(path);
        self
    }
}

impl Default for Highlighter<Node> {
    fn default() -> Self {
        Highlighter::new()
    }
}

impl<S: TokenSource> Highlighter<S> {
    pub fn with_source(source: S) -> Highlighter<S> {
        Highlighter {
            source,
            default_theme: DEFAULT_THEME.to_string(),
            renderer: Renderer::Html,
        }
    }

    pub fn with_theme(mut self, theme: &str) -> Highlighter<S> {
        self.default_theme = theme.to_string();
        self
    }

    pub fn with_renderer(mut self, renderer: impl Render + 'static) -> Highlighter<S> {
        self.renderer = Renderer::Custom(Box::new(renderer));
        self
    }

    pub fn without_renderer(mut self) -> Highlighter<S> {
        self.renderer = Renderer::Disabled;
        self
    }

    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }

    /// Tokenize code and render it. Language defaults to PHP and theme to
    /// this highlighter's default theme.
    pub fn highlight(
        &self,
        code: &str,
        language: Option<&str>,
        theme: Option<&str>,
        options: &Options,
    ) -> Result<Output> {
        let language = language.unwrap_or(DEFAULT_LANGUAGE);
        let theme = theme.unwrap_or(&self.default_theme);

        let result = self.tokenize(code, language, theme, options)?;

        let output = match &self.renderer {
            Renderer::Html => Output::Markup(HtmlRenderer.render(&result, options)),
            Renderer::Custom(renderer) => Output::Markup(renderer.render(&result, options)),
            Renderer::Disabled => Output::Tokens(result),
        };

        Ok(output)
    }

    pub fn tokenize(
        &self,
        code: &str,
        language: &str,
        theme: &str,
        options: &Options,
    ) -> Result<TokenizeResult> {
        debug!(language, theme, "Tokenizing {} bytes", code.len());

        let result = self
            .source
            .tokenize(code, language, theme, options)?;

        debug!(
            "Received {} line{}",
            result
                .lines
                .len(),
            if result.lines.len() == 1 { "" } else { "s" }
        );

        Ok(result)
    }

    pub fn available_languages(&self) -> Result<Vec<String>> {
        self.source
            .languages()
    }

    pub fn available_themes(&self) -> Result<Vec<String>> {
        self.source
            .themes()
    }

    pub fn language_is_available(&self, language: &str) -> Result<bool> {
        let languages = self.available_languages()?;
        Ok(languages
            .iter()
            .any(|id| id == language))
    }

    pub fn theme_is_available(&self, theme: &str) -> Result<bool> {
        let themes = self.available_themes()?;
        Ok(themes
            .iter()
            .any(|name| name == theme))
    }
}
