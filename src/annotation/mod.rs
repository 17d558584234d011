//! Resolve the line annotation options into sets of line numbers, and work
//! out the classes that go on the block and on each line.

mod ranges;

pub use ranges::{expand_ranges, LineSet};

use crate::highlighter::Options;

/// The kinds of line annotation a caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Highlight,
    Add,
    Delete,
    Focus,
}

/// How one kind of annotation appears in the markup: the class put on the
/// enclosing block when the option is non-empty, and the class put on each
/// line it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub kind: Kind,
    pub key: &'static str,
    pub block_class: &'static str,
    pub line_class: &'static str,
}

/// Class emission order follows this table.
pub const KINDS: [Descriptor; 4] = [
    Descriptor {
        kind: Kind::Highlight,
        key: "highlightLines",
        block_class: "highlighted",
        line_class: "highlight",
    },
    Descriptor {
        kind: Kind::Add,
        key: "addLines",
        block_class: "added",
        line_class: "add",
    },
    Descriptor {
        kind: Kind::Delete,
        key: "deleteLines",
        block_class: "deleted",
        line_class: "del",
    },
    Descriptor {
        kind: Kind::Focus,
        key: "focusLines",
        block_class: "focus",
        line_class: "focus",
    },
];

pub const BLOCK_CLASS: &str = "shiki";
pub const LINE_CLASS: &str = "line";

impl Kind {
    fn specs(self, options: &Options) -> &[String] {
        match self {
            Kind::Highlight => &options.highlight_lines,
            Kind::Add => &options.add_lines,
            Kind::Delete => &options.delete_lines,
            Kind::Focus => &options.focus_lines,
        }
    }
}

/// The resolved line sets, one per entry in KINDS and in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Annotations {
    sets: [LineSet; 4],
}

impl Annotations {
    pub fn resolve(options: &Options) -> Annotations {
        Annotations {
            sets: KINDS.map(|descriptor| expand_ranges(descriptor.kind.specs(options))),
        }
    }

    pub fn lines(&self, kind: Kind) -> &LineSet {
        let i = KINDS
            .iter()
            .position(|descriptor| descriptor.kind == kind)
            .unwrap_or_default();
        &self.sets[i]
    }

    /// Classes for the enclosing block. A kind contributes whenever its
    /// option resolved to any lines at all, whether or not those lines
    /// exist in the code.
    pub fn block_classes(&self) -> String {
        let mut classes = String::from(BLOCK_CLASS);

        for (descriptor, set) in KINDS
            .iter()
            .zip(&self.sets)
        {
            if set.is_empty() {
                continue;
            }
            classes.push(' ');
            classes.push_str(descriptor.block_class);
        }

        classes
    }

    /// Classes for the given 1-based line.
    pub fn line_classes(&self, line: i64) -> String {
        let mut classes = String::from(LINE_CLASS);

        for (descriptor, set) in KINDS
            .iter()
            .zip(&self.sets)
        {
            if !set.contains(line) {
                continue;
            }
            classes.push(' ');
            classes.push_str(descriptor.line_class);
        }

        classes
            .trim()
            .to_string()
    }
}
