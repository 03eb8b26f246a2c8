//! Path helpers
//!
//! Fragment definitions refer to home-relative paths using the `~` shorthand
//! (`~/.config/nvim`). These helpers expand that shorthand and extract the
//! basename used to name entries inside a fragment.
//!
//! # Examples
//!
//! ```
//! use nastrajacz_core::path::{basename, expand_home_with};
//! use std::path::Path;
//!
//! let home = Path::new("/home/user");
//! let path = expand_home_with("~/.config/nvim", Some(home));
//! assert_eq!(path, Path::new("/home/user/.config/nvim"));
//! assert_eq!(basename(&path), "nvim");
//! ```

use std::path::{Path, PathBuf};

/// Current user's home directory
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expand a leading `~` using an explicit home directory
///
/// Paths without the shorthand, and `~user` forms, are returned unchanged.
/// When `home` is `None` the path is also returned unchanged.
pub fn expand_home_with(path: &str, home: Option<&Path>) -> PathBuf {
    // Early return for common case (no tilde)
    if !path.starts_with('~') {
        return PathBuf::from(path);
    }

    let Some(home) = home else {
        return PathBuf::from(path);
    };

    if path == "~" {
        return home.to_path_buf();
    }

    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// Last component of a path as a string
///
/// Returns an empty string for paths without a final component (`/`, `..`).
pub fn basename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
