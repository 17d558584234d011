#[cfg(test)]
mod verify {
    use std::cell::RefCell;
    use std::process::Command;

    use shiki::highlighting::TokenSource;
    use shiki::language::*;
    use shiki::{HighlightError, Highlighter, Options, Output};

    /// Splits code on newlines into one plain token per line, remembering
    /// what it was asked for.
    #[derive(Default)]
    struct Fake {
        requests: RefCell<Vec<(String, String)>>,
    }

    impl TokenSource for Fake {
        fn tokenize(
            &self,
            code: &str,
            language: &str,
            theme: &str,
            _options: &Options,
        ) -> Result<TokenizeResult> {
            self.requests
                .borrow_mut()
                .push((language.to_string(), theme.to_string()));

            let lines = code
                .split('\n')
                .map(|text| {
                    if text.is_empty() {
                        vec![]
                    } else {
                        vec![Token::new(text, "#D8DEE9", STYLE_NOT_SET)]
                    }
                })
                .collect();

            Ok(TokenizeResult::new(Some("#2e3440"), lines))
        }

        fn languages(&self) -> Result<Vec<String>> {
            Ok(vec!["javascript".to_string(), "php".to_string()])
        }

        fn themes(&self) -> Result<Vec<String>> {
            Ok(vec!["nord".to_string(), "github-light".to_string()])
        }
    }

    /// Fails the way a crashed node process does.
    struct Broken;

    impl TokenSource for Broken {
        fn tokenize(&self, _: &str, _: &str, _: &str, _: &Options) -> Result<TokenizeResult> {
            let output = Command::new("sh")
                .arg("-c")
                .arg("echo 'Error: No language registration' >&2; exit 1")
                .output()?;

            Err(HighlightError::ProcessFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                stdout: String::new(),
            })
        }

        fn languages(&self) -> Result<Vec<String>> {
            Ok(vec![])
        }

        fn themes(&self) -> Result<Vec<String>> {
            Ok(vec![])
        }
    }

    #[test]
    fn defaults_language_and_theme() {
        let fake = Fake::default();
        let highlighter = Highlighter::with_source(&fake);

        let output = highlighter
            .highlight("<?php", None, None, &Options::default())
            .unwrap();
        assert!(output
            .markup()
            .is_some());

        assert_eq!(
            *fake
                .requests
                .borrow(),
            vec![("php".to_string(), "nord".to_string())]
        );
    }

    #[test]
    fn configured_theme_used_when_none_given() {
        let fake = Fake::default();
        let highlighter = Highlighter::with_source(&fake).with_theme("github-light");
        assert_eq!(highlighter.default_theme(), "github-light");

        highlighter
            .highlight("x", Some("javascript"), None, &Options::default())
            .unwrap();
        highlighter
            .highlight("x", Some("rust"), Some("monokai"), &Options::default())
            .unwrap();

        assert_eq!(
            *fake
                .requests
                .borrow(),
            vec![
                ("javascript".to_string(), "github-light".to_string()),
                ("rust".to_string(), "monokai".to_string()),
            ]
        );
    }

    #[test]
    fn renders_html_by_default() {
        let highlighter = Highlighter::with_source(Fake::default());
        let options = Options::new().focus(["2"]);

        let output = highlighter
            .highlight("<?php\necho 1;\n", None, None, &options)
            .unwrap();

        assert_eq!(
            output,
            Output::Markup(
                concat!(
                    "<pre class=\"shiki focus\" style=\"background-color: #2e3440\">",
                    "<code>",
                    "<span class=\"line\"><span style=\"color: #D8DEE9\">&lt;?php</span></span>\n",
                    "<span class=\"line focus\"><span style=\"color: #D8DEE9\">echo 1;</span></span>\n",
                    "<span class=\"line\"></span>",
                    "</code></pre>"
                )
                .to_string()
            )
        );
    }

    #[test]
    fn disabled_renderer_returns_tokens() {
        let highlighter = Highlighter::with_source(Fake::default()).without_renderer();

        let output = highlighter
            .highlight("a\nb", None, None, &Options::default())
            .unwrap();

        let result = output
            .tokens()
            .unwrap();
        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.lines[1][0].content, "b");
        assert_eq!(output.markup(), None);
    }

    #[test]
    fn custom_renderer_owns_output() {
        let highlighter = Highlighter::with_source(Fake::default()).with_renderer(
            |result: &TokenizeResult, options: &Options| {
                format!(
                    "{} lines, {} highlighted",
                    result
                        .lines
                        .len(),
                    options
                        .highlight_lines
                        .len()
                )
            },
        );

        let output = highlighter
            .highlight("a\nb\nc", None, None, &Options::new().highlight(["1", "3"]))
            .unwrap();

        assert_eq!(output.markup(), Some("3 lines, 2 highlighted"));
    }

    #[test]
    fn availability() {
        let highlighter = Highlighter::with_source(Fake::default());

        assert!(highlighter
            .language_is_available("php")
            .unwrap());
        assert!(!highlighter
            .language_is_available("cobol")
            .unwrap());
        assert!(highlighter
            .theme_is_available("nord")
            .unwrap());
        assert!(!highlighter
            .theme_is_available("solarized")
            .unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn source_failure_carries_diagnostics() {
        let highlighter = Highlighter::with_source(Broken);

        let error = highlighter
            .highlight("x", None, None, &Options::default())
            .unwrap_err();

        match &error {
            HighlightError::ProcessFailed { status, stderr, .. } => {
                assert!(!status.success());
                assert!(stderr.contains("No language registration"));
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(error
            .to_string()
            .contains("No language registration"));
    }
}
