//! Types representing the tokens returned by the Shiki engine

use serde::{Deserialize, Serialize};

/// Font style bitset value used by Shiki when a theme says nothing about
/// the style of a token.
pub const STYLE_NOT_SET: i32 = -1;
pub const STYLE_NONE: i32 = 0;
pub const STYLE_ITALIC: i32 = 1;
pub const STYLE_BOLD: i32 = 2;
pub const STYLE_UNDERLINE: i32 = 4;

/// A run of source text sharing one colour and font style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub content: String,
    #[serde(default)]
    pub color: String,
    #[serde(rename = "fontStyle", default = "not_set")]
    pub font_style: i32,
}

fn not_set() -> i32 {
    STYLE_NOT_SET
}

impl Token {
    pub fn new(content: &str, color: &str, font_style: i32) -> Token {
        Token {
            content: content.to_string(),
            color: color.to_string(),
            font_style,
        }
    }
}

/// One physical line of source, tokens in left to right order. An empty
/// line is an empty Vec.
pub type Line = Vec<Token>;

/// Everything the renderer needs from a single tokenizer run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeResult {
    #[serde(rename = "backgroundColor")]
    pub background_color: Option<String>,
    pub lines: Vec<Line>,
}

impl TokenizeResult {
    pub fn new(background_color: Option<&str>, lines: Vec<Line>) -> TokenizeResult {
        TokenizeResult {
            background_color: background_color.map(str::to_string),
            lines,
        }
    }
}
