//! Default configuration locations.

use std::path::{Path, PathBuf};

use directories::UserDirs;

/// File names probed in each default directory, lowest precedence first.
pub const DEFAULT_FILE_NAMES: [&str; 2] = [".dj.yaml", ".dj.json"];

/// `~/.dj.yaml`, `~/.dj.json`, `./.dj.yaml`, `./.dj.json`, in precedence order.
///
/// A directory that cannot be determined is left out.
pub fn default_config_paths() -> Vec<PathBuf> {
    let home = UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    if home.is_none() {
        tracing::debug!("home directory unknown, skipping home config files");
    }

    let cwd = match std::env::current_dir() {
        Ok(cwd) => Some(cwd),
        Err(e) => {
            tracing::debug!("current directory unavailable ({e}), skipping local config files");
            None
        }
    };

    default_config_paths_in(home.as_deref(), cwd.as_deref())
}

pub fn default_config_paths_in(home: Option<&Path>, cwd: Option<&Path>) -> Vec<PathBuf> {
    [home, cwd]
        .into_iter()
        .flatten()
        .flat_map(|dir| DEFAULT_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .collect()
}
