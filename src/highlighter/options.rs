use serde::Serialize;

/// Per-call rendering options. These are also forwarded to the Shiki
/// engine as is, so the field names on the wire are the camelCase ones it
/// expects.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub highlight_lines: Vec<String>,
    pub add_lines: Vec<String>,
    pub delete_lines: Vec<String>,
    pub focus_lines: Vec<String>,
    /// Label shown above the code, typically the language name.
    #[serde(rename = "langId", skip_serializing_if = "Option::is_none")]
    pub language_id: Option<String>,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }

    pub fn highlight<S: Into<String>>(mut self, specs: impl IntoIterator<Item = S>) -> Options {
        self.highlight_lines
            .extend(specs.into_iter().map(Into::into));
        self
    }

    pub fn add<S: Into<String>>(mut self, specs: impl IntoIterator<Item = S>) -> Options {
        self.add_lines
            .extend(specs.into_iter().map(Into::into));
        self
    }

    pub fn delete<S: Into<String>>(mut self, specs: impl IntoIterator<Item = S>) -> Options {
        self.delete_lines
            .extend(specs.into_iter().map(Into::into));
        self
    }

    pub fn focus<S: Into<String>>(mut self, specs: impl IntoIterator<Item = S>) -> Options {
        self.focus_lines
            .extend(specs.into_iter().map(Into::into));
        self
    }

    pub fn label(mut self, id: &str) -> Options {
        self.language_id = Some(id.to_string());
        self
    }
}
