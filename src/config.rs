use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::formatter::Formatter;
use crate::utils::{expand_vars, normalize_path};

/// When a formatter runs automatically before a file is saved.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OnSave {
    /// Always (`true`) or never (`false`)
    Enabled(bool),
    /// Only for files inside the named project folders
    Folders(Vec<String>),
}

/// Settings for a single formatter.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FormatterSettings {
    /// Directory searched for the formatter before the search path
    pub path: Option<String>,
    pub on_save: Option<OnSave>,
}

/// A named project folder. Relative paths are relative to the project directory.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Folder {
    #[serde(default)]
    pub name: Option<String>,
    pub path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub folders: Vec<Folder>,
    /// Extra environment variables for formatter processes
    pub environment: HashMap<String, String>,
    /// Per-formatter settings, keyed by formatter name (`clang-format`, ...)
    pub formatters: HashMap<String, FormatterSettings>,
    /// Directory of the file the config was loaded from
    #[serde(skip)]
    pub project_dir: Option<PathBuf>,
}

impl Config {
    pub fn formatter(&self, formatter: Formatter) -> Option<&FormatterSettings> {
        self.formatters.get(formatter.name())
    }

    /// The configured search directory for `formatter`, with variables expanded.
    pub fn formatter_path(&self, formatter: Formatter) -> Option<PathBuf> {
        let path = self.formatter(formatter)?.path.as_deref()?;
        Some(PathBuf::from(expand_vars(path).into_owned()))
    }

    pub fn on_save(&self, formatter: Formatter) -> Option<&OnSave> {
        self.formatter(formatter)?.on_save.as_ref()
    }

    fn folder_path(&self, folder: &Folder) -> PathBuf {
        let path = Path::new(&folder.path);
        match &self.project_dir {
            Some(dir) => normalize_path(&dir.join(path)),
            None => normalize_path(path),
        }
    }

    /// Named folders mapped to their full paths.
    pub fn folder_paths(&self) -> HashMap<&str, PathBuf> {
        self.folders
            .iter()
            .filter_map(|folder| Some((folder.name.as_deref()?, self.folder_path(folder))))
            .collect()
    }

    /// All project folders. Without declared folders the project directory
    /// itself is the only one.
    pub fn project_folders(&self) -> Vec<PathBuf> {
        if self.folders.is_empty() {
            return self.project_dir.iter().cloned().collect();
        }
        self.folders.iter().map(|f| self.folder_path(f)).collect()
    }

    fn warn_unknown_formatters(&self) {
        for key in self.formatters.keys() {
            if key.parse::<Formatter>().is_err() {
                log::warn!("Ignoring settings for unknown formatter '{}'", key);
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SublimeProject {
    folders: Vec<Folder>,
    settings: SublimeSettings,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SublimeSettings {
    format: Option<SublimeFormat>,
}

#[derive(Debug, Default, Deserialize)]
struct SublimeFormat {
    #[serde(default)]
    environment: HashMap<String, String>,
    #[serde(flatten)]
    formatters: HashMap<String, FormatterSettings>,
}

impl From<SublimeProject> for Config {
    fn from(project: SublimeProject) -> Self {
        let format = project.settings.format.unwrap_or_default();
        Self {
            folders: project.folders,
            environment: format.environment,
            formatters: format.formatters,
            project_dir: None,
        }
    }
}

const CANDIDATE_NAMES: &[&str] = &[".formatrelay.toml", "formatrelay.toml"];
const SUBLIME_PROJECT_EXTENSION: &str = "sublime-project";

fn invalid_config(path: &Path, e: impl std::fmt::Display) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid config {}: {e}", path.display()),
    )
}

fn is_sublime_project(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == SUBLIME_PROJECT_EXTENSION)
}

fn parse_config_str(s: &str, path: &Path) -> io::Result<Config> {
    if is_sublime_project(path) {
        json5::from_str::<SublimeProject>(s)
            .map(Config::from)
            .map_err(|e| invalid_config(path, e))
    } else {
        toml::from_str::<Config>(s).map_err(|e| invalid_config(path, e))
    }
}

fn read_config(path: &Path) -> io::Result<Config> {
    log::debug!("Reading config from: {}", path.display());
    let s = fs::read_to_string(path)?;
    let mut config = parse_config_str(&s, path)?;
    config.project_dir = path.parent().map(|dir| {
        let dir = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
        normalize_path(&dir)
    });
    config.warn_unknown_formatters();
    log::info!("Loaded config from: {}", path.display());
    Ok(config)
}

fn sublime_project_in(dir: &Path) -> Option<PathBuf> {
    let mut projects: Vec<PathBuf> = fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_sublime_project(p))
        .collect();
    projects.sort();
    projects.into_iter().next()
}

fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CANDIDATE_NAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
        if let Some(p) = sublime_project_in(dir) {
            return Some(p);
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        let p = Path::new(&xdg).join("formatrelay").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    if let Some(home) = dirs::home_dir() {
        let p = home.join(".config").join("formatrelay").join("config.toml");
        if p.is_file() {
            return Some(p);
        }
    }
    None
}

/// Load configuration with precedence:
/// 1) explicit path (error if unreadable/invalid)
/// 2) walk up from start_dir: .formatrelay.toml, formatrelay.toml, *.sublime-project
/// 3) XDG: $XDG_CONFIG_HOME/formatrelay/config.toml or ~/.config/formatrelay/config.toml
/// 4) default config
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let cfg = read_config(path)?;
        return Ok((cfg, Some(path.to_path_buf())));
    }

    if let Some(p) = find_in_tree(start_dir) {
        match read_config(&p) {
            Ok(cfg) => return Ok((cfg, Some(p))),
            Err(e) => log::warn!("Skipping {}: {}", p.display(), e),
        }
    }

    if let Some(p) = xdg_config_path()
        && let Ok(cfg) = read_config(&p)
    {
        return Ok((cfg, Some(p)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
