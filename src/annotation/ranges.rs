//! Expanding line specifications like "3" and "5-8" into sets of lines

use std::ops::RangeInclusive;

/// The 1-based line numbers named by one annotation option. Stored as
/// inclusive spans rather than individual numbers so that an enormous range
/// costs nothing; only membership is ever asked of it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineSet {
    spans: Vec<RangeInclusive<i64>>,
}

impl LineSet {
    pub fn new() -> LineSet {
        LineSet { spans: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.spans
            .is_empty()
    }

    pub fn contains(&self, line: i64) -> bool {
        self.spans
            .iter()
            .any(|span| span.contains(&line))
    }

    /// Add every line from begin to end inclusive. An inverted range adds
    /// nothing.
    pub fn insert_range(&mut self, begin: i64, end: i64) {
        if begin > end {
            return;
        }
        self.spans
            .push(begin..=end);
    }

    pub fn insert(&mut self, line: i64) {
        self.insert_range(line, line);
    }

    /// The individual line numbers, in the order they were specified.
    pub fn lines(&self) -> impl Iterator<Item = i64> + '_ {
        self.spans
            .iter()
            .flat_map(|span| span.clone())
    }
}

/// Turn a list of line specifications into the set of lines they describe.
/// Garbage never fails: unparseable numbers count as 0 and backwards ranges
/// are empty.
pub fn expand_ranges<S: AsRef<str>>(specs: &[S]) -> LineSet {
    let mut lines = LineSet::new();

    for spec in specs {
        let spec = spec.as_ref();

        if spec.contains('-') {
            let mut parts = spec.split('-');
            let begin = parse_lenient(
                parts
                    .next()
                    .unwrap_or(""),
            );
            let end = parse_lenient(
                parts
                    .next()
                    .unwrap_or(""),
            );
            lines.insert_range(begin, end);
        } else if !spec
            .trim()
            .is_empty()
        {
            lines.insert(parse_lenient(spec));
        }
    }

    lines
}

/// Read an integer from the front of the text the forgiving way: skip
/// leading whitespace, accept an optional sign, take as many digits as
/// there are, and give 0 if there aren't any. Saturates rather than
/// overflowing.
pub(crate) fn parse_lenient(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: i64 = 0;
    for b in digits
        .bytes()
        .take_while(u8::is_ascii_digit)
    {
        let digit = i64::from(b - b'0');
        value = if negative {
            value
                .saturating_mul(10)
                .saturating_sub(digit)
        } else {
            value
                .saturating_mul(10)
                .saturating_add(digit)
        };
    }

    value
}
