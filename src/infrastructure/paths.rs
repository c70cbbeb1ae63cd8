//! Platform path resolution.
//!
//! This module locates the per-user configuration and data directories and
//! expands `~` in user-supplied paths (theme files, config overrides).
//!
//! | purpose | location (Linux)                          |
//! |---------|-------------------------------------------|
//! | config  | `~/.config/betters3tui/config.toml`       |
//! | data    | `~/.local/share/betters3tui/`             |
//! | log     | `~/.local/share/betters3tui/betters3tui.log` |

use std::path::{Path, PathBuf};

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "betters3tui";

/// Configuration file name inside [`config_dir`].
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file name inside [`data_dir`].
pub const LOG_FILE_NAME: &str = "betters3tui.log";

/// Returns the configuration directory, or `None` if the platform has none.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Returns the default configuration file path.
#[must_use]
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Returns the data directory holding the log file.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// Returns the log file path.
#[must_use]
pub fn log_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use betters3tui::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expansion() {
        let home = Path::new("/home/user");
        assert_eq!(expand_tilde_with("~", Some(home)), PathBuf::from("/home/user"));
        assert_eq!(
            expand_tilde_with("~/themes/dark.toml", Some(home)),
            PathBuf::from("/home/user/themes/dark.toml")
        );
        assert_eq!(expand_tilde_with("~other/x", Some(home)), PathBuf::from("~other/x"));
        assert_eq!(expand_tilde_with("~/x", None), PathBuf::from("~/x"));
    }

    #[test]
    fn app_paths_share_directory_name() {
        if let (Some(config), Some(log)) = (config_file(), log_file()) {
            assert!(config.ends_with("betters3tui/config.toml"));
            assert!(log.ends_with("betters3tui/betters3tui.log"));
        }
    }
}
