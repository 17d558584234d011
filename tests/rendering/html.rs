#[cfg(test)]
mod verify {
    use shiki::language::*;
    use shiki::rendering::*;
    use shiki::Options;

    fn three_lines() -> TokenizeResult {
        TokenizeResult::new(
            Some("#2e3440"),
            vec![
                vec![Token::new("a", "#fff", STYLE_NONE)],
                vec![Token::new("b", "#eee", STYLE_ITALIC)],
                vec![Token::new("c", "#ddd", STYLE_NOT_SET)],
            ],
        )
    }

    fn count_lines(html: &str) -> usize {
        html.matches("<span class=\"line")
            .count()
    }

    #[test]
    fn highlighted_and_added_lines() {
        let options = Options::new()
            .highlight(["2"])
            .add(["1-1"]);

        let html = HtmlRenderer.render(&three_lines(), &options);

        assert_eq!(
            html,
            concat!(
                "<pre class=\"shiki highlighted added\" style=\"background-color: #2e3440\">",
                "<code>",
                "<span class=\"line add\"><span style=\"color: #fff\">a</span></span>\n",
                "<span class=\"line highlight\"><span style=\"color: #eee; font-style: italic\">b</span></span>\n",
                "<span class=\"line\"><span style=\"color: #ddd\">c</span></span>",
                "</code></pre>"
            )
        );
    }

    #[test]
    fn trailing_empty_line_leaves_no_blank_line() {
        let result = TokenizeResult::new(
            Some("#fff"),
            vec![
                vec![Token::new("x", "#000", STYLE_NONE)],
                vec![],
                vec![Token::new("y", "#000", STYLE_NONE)],
                vec![],
            ],
        );

        let html = HtmlRenderer.render(&result, &Options::default());

        assert_eq!(
            html,
            concat!(
                "<pre class=\"shiki\" style=\"background-color: #fff\">",
                "<code>",
                "<span class=\"line\"><span style=\"color: #000\">x</span></span>\n",
                "<span class=\"line\"></span>\n",
                "<span class=\"line\"><span style=\"color: #000\">y</span></span>\n",
                "<span class=\"line\"></span>",
                "</code></pre>"
            )
        );
        assert!(!html.contains("\n</code>"));
        assert_eq!(count_lines(&html), 4);
    }

    #[test]
    fn out_of_range_annotations_are_harmless() {
        let options = Options::new().highlight(["99"]);

        let html = HtmlRenderer.render(&three_lines(), &options);

        assert!(html.starts_with("<pre class=\"shiki highlighted\""));
        assert_eq!(count_lines(&html), 3);
        assert!(!html.contains("line highlight"));
    }

    #[test]
    fn missing_background_uses_default() {
        let mut result = three_lines();
        result.background_color = None;

        let html = HtmlRenderer.render(&result, &Options::default());

        assert!(html.starts_with(
            "<pre class=\"shiki\" style=\"background-color: #000\"><code>"
        ));
    }

    #[test]
    fn language_label_precedes_code() {
        let options = Options::new().label("php");

        let html = HtmlRenderer.render(&three_lines(), &options);

        assert!(html.starts_with(concat!(
            "<pre class=\"shiki\" style=\"background-color: #2e3440\">",
            "<div class=\"language-id\">php</div>",
            "<code><span class=\"line\">"
        )));
    }

    #[test]
    fn font_styles() {
        let result = TokenizeResult::new(
            None,
            vec![vec![
                Token::new("i", "#1", STYLE_ITALIC),
                Token::new("b", "#2", STYLE_BOLD),
                Token::new("u", "#3", STYLE_UNDERLINE),
                Token::new("n", "#4", STYLE_NONE),
                Token::new("s", "#5", STYLE_NOT_SET),
                Token::new("c", "#6", STYLE_ITALIC | STYLE_BOLD),
            ]],
        );

        let html = HtmlRenderer.render(&result, &Options::default());

        assert!(html.contains("<span style=\"color: #1; font-style: italic\">i</span>"));
        assert!(html.contains("<span style=\"color: #2; font-weight: bold\">b</span>"));
        assert!(html.contains("<span style=\"color: #3; text-decoration: underline\">u</span>"));
        assert!(html.contains("<span style=\"color: #4\">n</span>"));
        assert!(html.contains("<span style=\"color: #5\">s</span>"));

        // combined styles have no entry in the lookup, so only the colour
        assert!(html.contains("<span style=\"color: #6\">c</span>"));
    }

    #[test]
    fn token_content_is_escaped() {
        let result = TokenizeResult::new(
            None,
            vec![vec![Token::new(
                "if (a < b && c > 'd') echo \"e\";",
                "#fff",
                STYLE_NONE,
            )]],
        );

        let html = HtmlRenderer.render(&result, &Options::default());

        assert!(html.contains(
            ">if (a &lt; b &amp;&amp; c &gt; &#39;d&#39;) echo &quot;e&quot;;</span>"
        ));
    }

    #[test]
    fn every_kind_on_one_line() {
        let options = Options::new()
            .highlight(["1"])
            .add(["1"])
            .delete(["1-2"])
            .focus(["1"]);

        let html = HtmlRenderer.render(&three_lines(), &options);

        assert!(html.starts_with("<pre class=\"shiki highlighted added deleted focus\""));
        assert!(html.contains("<span class=\"line highlight add del focus\">"));
        assert!(html.contains("<span class=\"line del\">"));
    }
}
