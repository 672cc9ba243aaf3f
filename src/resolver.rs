//! Locating formatter executables on disk.
//!
//! Candidates are tried in a fixed order and the first regular file the
//! current user may execute wins:
//!
//! 1. the directory configured for the formatter in the project settings,
//! 2. the search path (inherited `PATH` plus a few conventional directories),
//! 3. a formatter-specific fallback (`node_modules/.bin` of the project folder
//!    holding the file for prettier, `~/.cargo/bin` for rustfmt).

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::formatter::Formatter;

/// Directories searched for executables, fixed at startup.
///
/// Built from the inherited `PATH` plus platform conventional directories.
/// The process environment itself is never modified.
#[derive(Debug, Clone, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
    home: Option<PathBuf>,
}

impl SearchPath {
    pub fn new(dirs: Vec<PathBuf>, home: Option<PathBuf>) -> Self {
        Self { dirs, home }
    }

    /// Build from the current process environment.
    pub fn from_env() -> Self {
        Self::inherit(env::var_os("PATH").as_deref(), dirs::home_dir())
    }

    /// Build from a `PATH`-style value and a home directory, adding the
    /// conventional directories that exist and are readable.
    pub(crate) fn inherit(path: Option<&OsStr>, home: Option<PathBuf>) -> Self {
        let inherited = path
            .map(|path| env::split_paths(path).collect())
            .unwrap_or_default();
        let mut search_path = Self::new(inherited, home);

        for dir in conventional_dirs(search_path.home.as_deref()) {
            search_path.append(dir);
        }

        log::debug!("Search path: {:?}", search_path.dirs);
        search_path
    }

    /// Append `dir` if it is a readable directory not already present.
    pub fn append(&mut self, dir: PathBuf) {
        if is_directory(&dir) && !self.dirs.contains(&dir) {
            self.dirs.push(dir);
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    fn which(&self, binary: &str) -> Option<PathBuf> {
        which_in_dirs(binary, &self.dirs)
    }
}

/// Look `binary` up in `dirs`. Relative entries resolve against the process
/// working directory, like a shell does.
fn which_in_dirs<I>(binary: &str, dirs: I) -> Option<PathBuf>
where
    I: IntoIterator,
    I::Item: AsRef<OsStr>,
{
    let paths: OsString = env::join_paths(dirs).ok()?;
    // An empty list would make `which` search the working directory
    if paths.is_empty() {
        return None;
    }
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    which::which_in(binary, Some(paths), cwd).ok()
}

fn conventional_dirs(home: Option<&Path>) -> Vec<PathBuf> {
    if cfg!(target_os = "linux") {
        home.map(|h| h.join(".local").join("bin")).into_iter().collect()
    } else if cfg!(target_os = "macos") {
        vec![PathBuf::from("/opt/homebrew/bin")]
    } else {
        Vec::new()
    }
}

/// Where the file being formatted lives.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Absolute path of the file being formatted
    pub file: &'a Path,
    /// Project folders, used to find a package-local `node_modules/.bin`
    pub folders: &'a [PathBuf],
}

impl ResolveContext<'_> {
    fn project_folder(&self) -> Option<&Path> {
        self.folders
            .iter()
            .find(|folder| self.file.starts_with(folder))
            .map(PathBuf::as_path)
    }
}

pub(crate) fn is_directory(path: &Path) -> bool {
    path.is_dir() && fs::read_dir(path).is_ok()
}

fn find_in_directory(binaries: &[&str], directory: Option<&Path>) -> Option<PathBuf> {
    let directory = directory.filter(|d| is_directory(d))?;
    binaries
        .iter()
        .find_map(|binary| which_in_dirs(binary, [directory]))
}

/// Find an executable for `formatter`, or `None` if no tier has one.
pub fn find_binary(
    formatter: Formatter,
    configured: Option<&Path>,
    context: &ResolveContext<'_>,
    search_path: &SearchPath,
) -> Option<PathBuf> {
    let binaries = formatter.binaries();

    if let Some(found) = find_in_directory(binaries, configured) {
        log::debug!("Found {} in configured directory: {}", formatter, found.display());
        return Some(found);
    }

    if let Some(found) = binaries.iter().find_map(|binary| search_path.which(binary)) {
        log::debug!("Found {} on search path: {}", formatter, found.display());
        return Some(found);
    }

    let fallback = match formatter {
        Formatter::Prettier => context
            .project_folder()
            .map(|folder| folder.join("node_modules").join(".bin")),
        Formatter::RustFmt => search_path.home().map(|h| h.join(".cargo").join("bin")),
        _ => None,
    };

    let found = find_in_directory(binaries, fallback.as_deref());
    match &found {
        Some(path) => log::debug!("Found {} in fallback location: {}", formatter, path.display()),
        None => log::debug!("No {} executable found", formatter),
    }
    found
}
