//! Paths inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which points at the cwd of
//! the last focused terminal (usually the user's home directory).

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Directory holding the trace file.
///
/// ```
/// use pokedex::infrastructure::paths::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/pokedex"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/pokedex")
}

/// OTLP JSON trace file inside [`data_dir`].
#[must_use]
pub fn trace_file() -> PathBuf {
    data_dir().join("pokedex-otlp.json")
}

/// Maps a user-supplied path (`~/themes/red.toml`) into the sandbox.
///
/// Only a leading `~` is rewritten; absolute and relative paths are returned
/// unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from(HOST_ROOT),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("{HOST_ROOT}{rest}")),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_host_root() {
        assert_eq!(expand_tilde("~"), PathBuf::from("/host"));
        assert_eq!(expand_tilde("~/themes/red.toml"), PathBuf::from("/host/themes/red.toml"));
    }

    #[test]
    fn other_paths_are_untouched() {
        assert_eq!(expand_tilde("/etc/theme.toml"), PathBuf::from("/etc/theme.toml"));
        assert_eq!(expand_tilde("~user/theme.toml"), PathBuf::from("~user/theme.toml"));
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert!(trace_file().starts_with(data_dir()));
    }
}
