//! Shapes of the JSON written by shiki.js

use serde::Deserialize;

use crate::language::{Line, TokenizeResult};

#[derive(Deserialize)]
pub(super) struct Reply {
    #[serde(default)]
    theme: Theme,
    #[serde(default)]
    tokens: Vec<Line>,
}

#[derive(Deserialize, Default)]
struct Theme {
    bg: Option<String>,
}

impl From<Reply> for TokenizeResult {
    fn from(reply: Reply) -> TokenizeResult {
        TokenizeResult {
            background_color: reply
                .theme
                .bg,
            lines: reply.tokens,
        }
    }
}

#[derive(Deserialize)]
pub(super) struct LanguageProperties {
    pub id: String,
}

/// Identifiers of the languages listed, sorted.
pub(super) fn language_ids(properties: Vec<LanguageProperties>) -> Vec<String> {
    let mut languages: Vec<String> = properties
        .into_iter()
        .map(|language| language.id)
        .collect();
    languages.sort();
    languages
}
