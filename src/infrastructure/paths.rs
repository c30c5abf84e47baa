//! Path utilities: tilde expansion and the per-user data directory.
//!
//! Both read the environment through a lookup function so callers (and tests)
//! can supply their own.

use std::path::{Path, PathBuf};

/// Directory name under the platform data directory.
const APP_DIR: &str = "linedisplay";

/// Returns the data directory used for trace files.
///
/// `$XDG_DATA_HOME/linedisplay` when set and non-empty, otherwise
/// `$HOME/.local/share/linedisplay`, otherwise `./linedisplay`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    data_dir_from(|key| std::env::var(key).ok())
}

fn data_dir_from(env: impl Fn(&str) -> Option<String>) -> PathBuf {
    let non_empty = |key: &str| env(key).filter(|value| !value.is_empty());

    non_empty("XDG_DATA_HOME").map_or_else(
        || {
            non_empty("HOME").map_or_else(
                || PathBuf::from(APP_DIR),
                |home| PathBuf::from(home).join(".local").join("share").join(APP_DIR),
            )
        },
        |data_home| PathBuf::from(data_home).join(APP_DIR),
    )
}

/// Expands a leading `~` to `$HOME`. Other paths are returned unchanged.
///
/// # Examples
///
/// ```
/// use linedisplay::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_from(path, |key| std::env::var(key).ok())
}

fn expand_tilde_from(path: &str, env: impl Fn(&str) -> Option<String>) -> PathBuf {
    let Some(home) = env("HOME").filter(|home| !home.is_empty()) else {
        return PathBuf::from(path);
    };

    if path == "~" {
        PathBuf::from(home)
    } else if let Some(rest) = path.strip_prefix("~/") {
        PathBuf::from(home).join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// Resolves a configured trace file location.
///
/// A bare file name (no directory part) is placed in the data directory;
/// anything else goes through [`expand_tilde`].
#[must_use]
pub fn resolve_trace_file(configured: &Path) -> PathBuf {
    let has_dir = configured
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());

    if has_dir {
        expand_tilde(&configured.to_string_lossy())
    } else {
        get_data_dir().join(configured)
    }
}
