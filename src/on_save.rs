//! Deciding whether saving a file should format it first.

use std::path::Path;

use crate::config::{Config, OnSave};
use crate::formatter::Formatter;

/// Whether the `on_save` setting of `formatter` covers `file`.
///
/// `file` should be absolute; folder paths from the config are compared
/// component-wise, so `web` does not match `web-old/index.js`.
pub fn is_enabled(config: &Config, formatter: Formatter, file: &Path) -> bool {
    match config.on_save(formatter) {
        None => false,
        Some(OnSave::Enabled(enabled)) => *enabled,
        Some(OnSave::Folders(names)) => {
            let folders = config.folder_paths();
            names.iter().any(|name| match folders.get(name.as_str()) {
                Some(folder) => file.starts_with(folder),
                None => {
                    log::warn!("on_save for {} names unknown folder '{}'", formatter, name);
                    false
                }
            })
        }
    }
}
