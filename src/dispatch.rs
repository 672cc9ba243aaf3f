//! Tying it together: from a buffer to formatted text.

use std::path::{Path, PathBuf};

use crate::command::{self, CommandContext, Selection};
use crate::config::Config;
use crate::error::FormatError;
use crate::external_formatters;
use crate::formatter::{self, Formatter};
use crate::on_save;
use crate::resolver::{self, ResolveContext, SearchPath};
use crate::syntax;

/// A buffer to format.
#[derive(Debug, Clone, Copy)]
pub struct FormatRequest<'a> {
    /// Path of the file backing the buffer; gives the working directory
    pub file: &'a Path,
    /// Buffer contents
    pub contents: &'a str,
    /// Editor syntax; inferred from the file extension when absent
    pub syntax: Option<&'a str>,
    pub selections: &'a [Selection],
    /// Format the whole buffer even if selections are active
    pub ignore_selections: bool,
}

impl<'a> FormatRequest<'a> {
    pub fn new(file: &'a Path, contents: &'a str) -> Self {
        Self {
            file,
            contents,
            syntax: None,
            selections: &[],
            ignore_selections: false,
        }
    }

    pub fn with_syntax(mut self, syntax: Option<&'a str>) -> Self {
        self.syntax = syntax;
        self
    }

    pub fn with_selections(mut self, selections: &'a [Selection]) -> Self {
        self.selections = selections;
        self
    }

    pub fn ignoring_selections(mut self) -> Self {
        self.ignore_selections = true;
        self
    }

    fn syntax(&self) -> Option<&'a str> {
        self.syntax.or_else(|| syntax::language_for_path(self.file))
    }
}

/// Formats buffers using project settings and a fixed search path.
///
/// Nothing is cached between calls: every `format` resolves the binary again.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: Config,
    search_path: SearchPath,
}

impl Dispatcher {
    pub fn new(config: Config, search_path: SearchPath) -> Self {
        Self {
            config,
            search_path,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn search_path(&self) -> &SearchPath {
        &self.search_path
    }

    /// Formatter for a syntax, if any.
    pub fn formatter_for(&self, syntax: &str) -> Option<Formatter> {
        formatter::formatter_type(syntax)
    }

    /// Formatter for a request, from its syntax or file extension.
    pub fn formatter_for_request(
        &self,
        request: &FormatRequest<'_>,
    ) -> Result<Formatter, FormatError> {
        request
            .syntax()
            .and_then(|syntax| self.formatter_for(syntax))
            .ok_or_else(|| {
                FormatError::NoFormatter(
                    request
                        .syntax
                        .map_or_else(|| request.file.display().to_string(), str::to_string),
                )
            })
    }

    /// Locate the executable for `formatter` when formatting `file`.
    pub fn resolve(&self, formatter: Formatter, file: &Path) -> Option<PathBuf> {
        let folders = self.config.project_folders();
        let context = ResolveContext {
            file,
            folders: &folders,
        };
        let configured = self.config.formatter_path(formatter);
        resolver::find_binary(formatter, configured.as_deref(), &context, &self.search_path)
    }

    /// Whether formatting `request` is possible at all: a formatter applies
    /// and its binary resolves.
    pub fn is_enabled(&self, request: &FormatRequest<'_>) -> bool {
        self.formatter_for_request(request)
            .is_ok_and(|formatter| self.resolve(formatter, request.file).is_some())
    }

    /// Pipe the buffer through its formatter.
    ///
    /// Returns `Ok(None)` when the formatter printed nothing, meaning there is
    /// nothing to replace. A non-zero exit is always an error; partial output
    /// of a failed run is never returned.
    pub fn format(&self, request: &FormatRequest<'_>) -> Result<Option<String>, FormatError> {
        let formatter = self.formatter_for_request(request)?;
        let binary = self
            .resolve(formatter, request.file)
            .ok_or(FormatError::BinaryNotFound(formatter))?;

        let selection = if request.ignore_selections {
            None
        } else {
            command::first_selection(request.selections)
        };

        let ctx = CommandContext {
            binary: &binary,
            file: request.file,
            syntax: request.syntax().unwrap_or_default(),
            text: request.contents,
            selection,
        };
        let command = command::build_command(formatter, &ctx);

        let working_directory = request
            .file
            .parent()
            .filter(|dir| dir.is_dir())
            .unwrap_or(Path::new("."));

        log::info!("Formatting {} with {}", request.file.display(), formatter);
        external_formatters::execute(
            &command,
            working_directory,
            request.contents,
            &self.config.environment,
        )
    }

    /// Pre-save hook: format the whole buffer if `on_save` enables it for
    /// this file. Returns `Ok(None)` without running anything otherwise.
    pub fn on_pre_save(
        &self,
        request: &FormatRequest<'_>,
    ) -> Result<Option<String>, FormatError> {
        let Ok(formatter) = self.formatter_for_request(request) else {
            return Ok(None);
        };
        if !on_save::is_enabled(&self.config, formatter, request.file) {
            log::debug!("Format on save disabled for {}", request.file.display());
            return Ok(None);
        }

        self.format(&request.ignoring_selections())
    }
}
