//! Supported external formatters and the languages they handle.

use std::fmt;
use std::str::FromStr;

use crate::syntax;

/// A formatting tool this crate knows how to drive.
///
/// Declaration order matters: when two formatters could claim the same
/// language, the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formatter {
    AutoPep8,
    ClangFormat,
    Gn,
    Prettier,
    RustFmt,
}

struct FormatterInfo {
    name: &'static str,
    binaries: &'static [&'static str],
    languages: &'static [&'static str],
}

const FORMATTERS: [FormatterInfo; 5] = [
    FormatterInfo {
        name: "autopep8",
        binaries: if cfg!(windows) {
            &["autopep8.cmd", "autopep8.exe"]
        } else {
            &["autopep8"]
        },
        languages: &["Python"],
    },
    FormatterInfo {
        name: "clang-format",
        binaries: if cfg!(windows) {
            &["clang-format.bat", "clang-format.exe"]
        } else {
            &["clang-format"]
        },
        languages: &["C", "C++", "Objective-C", "Objective-C++", "Java"],
    },
    FormatterInfo {
        name: "gn",
        binaries: if cfg!(windows) { &["gn.exe"] } else { &["gn"] },
        languages: &["GN"],
    },
    FormatterInfo {
        name: "prettier",
        binaries: if cfg!(windows) {
            &["prettier.cmd", "prettier.exe"]
        } else {
            &["prettier"]
        },
        languages: &[
            "CSS",
            "HTML",
            "JavaScript",
            "JavaScript (Babel)",
            "JSON",
            "TypeScript",
        ],
    },
    FormatterInfo {
        name: "rustfmt",
        binaries: if cfg!(windows) {
            &["rustfmt.exe"]
        } else {
            &["rustfmt"]
        },
        languages: &["Rust"],
    },
];

impl Formatter {
    /// All formatters in priority order.
    pub const ALL: [Formatter; 5] = [
        Formatter::AutoPep8,
        Formatter::ClangFormat,
        Formatter::Gn,
        Formatter::Prettier,
        Formatter::RustFmt,
    ];

    fn info(self) -> &'static FormatterInfo {
        &FORMATTERS[self as usize]
    }

    /// Name used for display and as the settings key.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Executable file names to look for, in preference order.
    pub fn binaries(self) -> &'static [&'static str] {
        self.info().binaries
    }

    /// Language identifiers this formatter accepts.
    pub fn languages(self) -> &'static [&'static str] {
        self.info().languages
    }

    /// Whether `syntax` names one of this formatter's languages.
    pub fn supports(self, syntax: &str) -> bool {
        let stem = syntax::syntax_stem(syntax);
        self.languages().iter().any(|lang| stem.ends_with(lang))
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formatter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formatter::ALL
            .into_iter()
            .find(|formatter| formatter.name() == s)
            .ok_or_else(|| format!("unknown formatter '{}'", s))
    }
}

/// Pick the formatter for a syntax: the first one, in priority order, whose
/// language list matches.
pub fn formatter_type(syntax: &str) -> Option<Formatter> {
    Formatter::ALL
        .into_iter()
        .find(|formatter| formatter.supports(syntax))
}
