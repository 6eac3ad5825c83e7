//! Centralized path utilities
//!
//! All project-local heymark paths in one place for consistency

use std::path::{Path, PathBuf};

use crate::constants::{CACHE_DIR, CONFIG_FILE, HEYMARK_DIR};

/// Get the heymark directory of a project (`<root>/.heymark`)
pub fn heymark_dir(root: &Path) -> PathBuf {
    root.join(HEYMARK_DIR)
}

/// Get the link config file (`<root>/.heymark/config.json`)
pub fn config_path(root: &Path) -> PathBuf {
    heymark_dir(root).join(CONFIG_FILE)
}

/// Get the config file path relative to the project root, for display
pub fn config_relative() -> String {
    format!("{}/{}", HEYMARK_DIR, CONFIG_FILE)
}

/// Get the repository cache directory (`<root>/.heymark/cache`)
pub fn cache_dir(root: &Path) -> PathBuf {
    heymark_dir(root).join(CACHE_DIR)
}

/// Render `path` relative to `root` with forward slashes.
///
/// Falls back to the full path when `path` is not under `root`.
pub fn display_relative(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_heymark_dir() {
        let root = Path::new("/work/project");
        assert_eq!(
            config_path(root),
            PathBuf::from("/work/project/.heymark/config.json")
        );
        assert_eq!(
            cache_dir(root),
            PathBuf::from("/work/project/.heymark/cache")
        );
    }

    #[test]
    fn display_relative_uses_forward_slashes() {
        let root = Path::new("/work/project");
        let nested = root.join(".cursor").join("rules");
        assert_eq!(display_relative(root, &nested), ".cursor/rules");
        assert_eq!(display_relative(root, root), ".");
        assert_eq!(
            display_relative(root, Path::new("/elsewhere")),
            "/elsewhere"
        );
    }
}
