//! Obtaining tokens from the Shiki engine

use crate::highlighter::Options;
use crate::language::{Result, TokenizeResult};

mod node;
mod wire;

pub use node::{find_executable, Node, SEARCH_PATHS};

/// Something that can tokenize code into coloured lines. The real one runs
/// Shiki under Node; tests substitute their own.
pub trait TokenSource {
    fn tokenize(
        &self,
        code: &str,
        language: &str,
        theme: &str,
        options: &Options,
    ) -> Result<TokenizeResult>;

    /// Identifiers of the languages the engine knows, sorted.
    fn languages(&self) -> Result<Vec<String>>;

    /// Names of the themes the engine knows.
    fn themes(&self) -> Result<Vec<String>>;
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn tokenize(
        &self,
        code: &str,
        language: &str,
        theme: &str,
        options: &Options,
    ) -> Result<TokenizeResult> {
        (**self).tokenize(code, language, theme, options)
    }

    fn languages(&self) -> Result<Vec<String>> {
        (**self).languages()
    }

    fn themes(&self) -> Result<Vec<String>> {
        (**self).themes()
    }
}
