//! Path utilities: expand `~/` and resolve `-` as stdin.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `None` and `-` both mean standard input.
pub fn is_stdin(path: Option<&str>) -> bool {
    matches!(path, None | Some("-"))
}
