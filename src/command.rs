//! Per-formatter command-line construction.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::formatter::Formatter;
use crate::syntax;

/// An editor selection, as two character offsets in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub a: usize,
    pub b: usize,
}

impl Selection {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    pub fn begin(&self) -> usize {
        self.a.min(self.b)
    }

    pub fn end(&self) -> usize {
        self.a.max(self.b)
    }

    pub fn size(&self) -> usize {
        self.end() - self.begin()
    }

    pub fn is_empty(&self) -> bool {
        self.a == self.b
    }
}

impl FromStr for Selection {
    type Err = String;

    /// Parse `START:END`, e.g. `10:20`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s.split_once(':').ok_or_else(|| {
            format!(
                "Invalid selection '{}'. Expected START:END (e.g., 10:20)",
                s
            )
        })?;
        let a = a
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid selection start '{}'", a))?;
        let b = b
            .trim()
            .parse::<usize>()
            .map_err(|_| format!("Invalid selection end '{}'", b))?;
        Ok(Self::new(a, b))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.a, self.b)
    }
}

/// The first non-empty selection. Range-limited formatters only honor one.
pub fn first_selection(selections: &[Selection]) -> Option<Selection> {
    selections.iter().copied().find(|s| !s.is_empty())
}

/// Zero-based line containing character offset `offset`.
fn row_of(text: &str, offset: usize) -> usize {
    text.chars().take(offset).filter(|&c| c == '\n').count()
}

/// UTF-8 byte offset of character offset `offset`, clamped to the text.
fn byte_offset(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map_or(text.len(), |(index, _)| index)
}

/// Everything needed to build one formatter invocation.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub binary: &'a Path,
    pub file: &'a Path,
    pub syntax: &'a str,
    pub text: &'a str,
    pub selection: Option<Selection>,
}

fn prettier_parser(syntax: &str) -> &'static str {
    let stem = syntax::syntax_stem(syntax);
    if stem.ends_with("CSS") {
        "css"
    } else if stem.ends_with("HTML") {
        "html"
    } else if stem.ends_with("JSON") {
        "json"
    } else if stem.ends_with("TypeScript") {
        "typescript"
    } else {
        "babel"
    }
}

/// Build the argument list for `formatter`. The first element is the binary.
pub fn build_command(formatter: Formatter, ctx: &CommandContext<'_>) -> Vec<String> {
    let mut command = vec![ctx.binary.to_string_lossy().into_owned()];

    match formatter {
        Formatter::AutoPep8 => {
            if let Some(selection) = ctx.selection {
                let begin = row_of(ctx.text, selection.begin());
                let end = row_of(ctx.text, selection.end());
                command.extend([
                    "--line-range".to_string(),
                    (begin + 1).to_string(),
                    (end + 1).to_string(),
                ]);
            }
            command.push("-".to_string());
        }
        Formatter::ClangFormat => {
            command.push("-assume-filename".to_string());
            command.push(ctx.file.to_string_lossy().into_owned());

            if let Some(selection) = ctx.selection {
                let begin = byte_offset(ctx.text, selection.begin());
                let end = byte_offset(ctx.text, selection.end());
                command.extend([
                    "-offset".to_string(),
                    begin.to_string(),
                    "-length".to_string(),
                    (end - begin).to_string(),
                ]);
            }
        }
        Formatter::Gn => {
            command.extend(["format".to_string(), "--stdin".to_string()]);
        }
        Formatter::Prettier => {
            command.push("--parser".to_string());
            command.push(prettier_parser(ctx.syntax).to_string());

            if let Some(selection) = ctx.selection {
                let len = ctx.text.chars().count();
                command.extend([
                    "--range-start".to_string(),
                    selection.begin().min(len).to_string(),
                    "--range-end".to_string(),
                    selection.end().min(len).to_string(),
                ]);
            }
        }
        Formatter::RustFmt => {}
    }

    log::debug!("Built {} command: {}", formatter, command.join(" "));
    command
}
