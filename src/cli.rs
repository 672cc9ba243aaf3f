use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "formatrelay")]
#[command(author, version)]
#[command(about = "Pipe editor buffers through external code formatters")]
#[command(
    long_about = "Formatrelay runs the right external formatter (clang-format, prettier, \
    autopep8, rustfmt or gn) over a file or editor buffer and hands back the result. It finds \
    the formatter executable in a configured directory, on PATH, or in a tool-specific \
    fallback location such as node_modules/.bin or ~/.cargo/bin."
)]
#[command(after_help = "\
EXAMPLES:

    # Format a file in place
    formatrelay format src/main.c

    # Format only characters 120..240 of a buffer piped from an editor
    cat src/app.ts | formatrelay format --stdin --selection 120:240 src/app.ts

    # Check if a file is formatted
    formatrelay format --check src/main.rs

    # Pre-save hook: formats only if on_save is enabled for the file
    formatrelay on-save src/main.c

    # Show which formatter and executable would be used
    formatrelay resolve web/index.html

CONFIGURATION:

Formatrelay looks for configuration files in this order:
  1. Explicit --config path
  2. .formatrelay.toml, formatrelay.toml or *.sublime-project in current/parent directories
  3. ~/.config/formatrelay/config.toml (XDG)
  4. Built-in defaults

Example .formatrelay.toml:

    [[folders]]
    name = \"Frontend\"
    path = \"web\"

    [environment]
    NODE_PATH = \"$HOME/lib/node\"

    [formatters.clang-format]
    path = \"$HOME/workspace/tools\"
    on_save = true

    [formatters.prettier]
    on_save = [\"Frontend\"]")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true)]
    #[arg(help = "Path to configuration file")]
    #[arg(
        long_help = "Path to a custom configuration file (TOML, or a Sublime Text \
        .sublime-project). If not specified, formatrelay searches the file's directory and its \
        parents, then falls back to ~/.config/formatrelay/config.toml."
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a file with its external formatter
    #[command(
        long_about = "Format a file with the external formatter configured for its language. \
        By default the file is rewritten in place. With --stdin the buffer is read from stdin \
        and the result written to stdout; FILE then only provides the language and the \
        working directory."
    )]
    #[command(after_help = "\
EXAMPLES:

    # Format in place
    formatrelay format src/main.c

    # Format a buffer from stdin
    cat src/lib.rs | formatrelay format --stdin src/lib.rs

    # Format only a selection (character offsets)
    formatrelay format --selection 10:20 src/main.c

    # Check formatting (exit code 1 if not formatted)
    formatrelay format --check src/main.c

Only the first non-empty selection is used; clang-format, prettier and autopep8 \
support range formatting, gn and rustfmt always format the whole buffer.")]
    Format {
        /// File to format
        #[arg(help = "File to format")]
        file: PathBuf,

        /// Editor syntax, e.g. Packages/C++/C++.sublime-syntax
        #[arg(long)]
        #[arg(
            long_help = "Editor syntax name or path used to pick the formatter. Matched by \
            suffix, so both `C++` and `Packages/C++/C++.sublime-syntax` work. Inferred from the \
            file extension when omitted."
        )]
        syntax: Option<String>,

        /// Selection as START:END character offsets (repeatable)
        #[arg(long = "selection", value_name = "START:END")]
        selections: Vec<String>,

        /// Read the buffer from stdin and write the result to stdout
        #[arg(long)]
        stdin: bool,

        /// Print the result to stdout instead of writing the file
        #[arg(long)]
        stdout: bool,

        /// Check if the file is formatted without making changes
        #[arg(long)]
        #[arg(help = "Check if file is formatted (exit code 1 if not)")]
        check: bool,
    },
    /// Run the pre-save hook for a file
    #[command(
        long_about = "Format the whole file before it is saved, but only if the on_save \
        setting of its formatter enables it (true, or a list of project folders containing \
        the file). Otherwise nothing is changed."
    )]
    OnSave {
        /// File about to be saved
        file: PathBuf,

        /// Editor syntax, e.g. Packages/Python/Python.sublime-syntax
        #[arg(long)]
        syntax: Option<String>,

        /// Read the buffer from stdin and always echo the (possibly formatted) result
        #[arg(long)]
        stdin: bool,
    },
    /// Show the formatter and executable that would be used for a file
    #[command(
        long_about = "Print the formatter and the resolved executable for a file. Exits with \
        code 1 when no formatter handles the file's language or no executable can be found."
    )]
    Resolve {
        /// File to resolve a formatter for
        file: PathBuf,

        /// Editor syntax, e.g. Packages/Rust/Rust.sublime-syntax
        #[arg(long)]
        syntax: Option<String>,
    },
}
