//! Link configuration
//!
//! Stored in `.heymark/config.json`. Older releases wrote the same fields
//! under different names; [`LinkConfig::normalize`] reads all of them and
//! yields the canonical shape without rewriting the file.

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_BRANCH;
use crate::error::{Result, SyncError};
use crate::paths;

/// Repository URL field names, in precedence order
const REPO_URL_KEYS: &[&str] = &["repoUrl", "skillSource", "rulesSource"];

/// Folder field names, in precedence order
const FOLDER_KEYS: &[&str] = &["folder", "skillSourceDir", "rulesSourceDir"];

/// Remote skill source linked to a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkConfig {
    pub repo_url: String,
    #[serde(skip_serializing_if = "is_default_branch")]
    pub branch: String,
    /// Subdirectory inside the repository; empty means the repository root
    #[serde(skip_serializing_if = "String::is_empty")]
    pub folder: String,
}

fn is_default_branch(branch: &str) -> bool {
    branch == DEFAULT_BRANCH
}

impl LinkConfig {
    pub fn new(
        repo_url: impl Into<String>,
        branch: Option<&str>,
        folder: Option<&str>,
    ) -> Option<Self> {
        let repo_url = repo_url.into().trim().to_string();
        if repo_url.is_empty() {
            return None;
        }
        let branch = branch
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .unwrap_or(DEFAULT_BRANCH)
            .to_string();
        let folder = folder.map(str::trim).unwrap_or_default().to_string();
        Some(Self {
            repo_url,
            branch,
            folder,
        })
    }

    /// Coalesce an untyped payload into a config.
    ///
    /// Returns `None` when no recognized field holds a non-blank repository URL.
    pub fn normalize(raw: &Value) -> Option<Self> {
        let obj = raw.as_object()?;

        let repo_url = REPO_URL_KEYS.iter().find_map(|key| {
            obj.get(*key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })?;

        let branch = obj.get("branch").and_then(Value::as_str);

        // A present folder string wins even when blank.
        let folder = FOLDER_KEYS
            .iter()
            .find_map(|key| obj.get(*key).and_then(Value::as_str));

        Self::new(repo_url, branch, folder)
    }

    pub fn is_default_branch(&self) -> bool {
        is_default_branch(&self.branch)
    }

    /// Folder for display, `(root)` when the repository root is used
    pub fn folder_label(&self) -> &str {
        if self.folder.is_empty() {
            "(root)"
        } else {
            &self.folder
        }
    }
}

/// Normalize `config`, save it under `root`, and return the absolute path written.
pub fn write_config(root: &Path, config: &Value) -> Result<PathBuf> {
    let config = LinkConfig::normalize(config).ok_or(SyncError::InvalidConfig)?;

    let dir = paths::heymark_dir(root);
    fs::create_dir_all(&dir).map_err(|source| SyncError::ConfigWrite {
        path: dir.clone(),
        source,
    })?;

    let path = paths::config_path(root);
    let mut contents = serde_json::to_string_pretty(&config).map_err(|e| SyncError::ConfigWrite {
        path: path.clone(),
        source: e.into(),
    })?;
    contents.push('\n');

    fs::write(&path, contents).map_err(|source| SyncError::ConfigWrite {
        path: path.clone(),
        source,
    })?;

    let path = path.canonicalize().unwrap_or(path);
    tracing::info!("Saved link config to {:?}", path);
    Ok(path)
}

/// Save a typed config. See [`write_config`].
pub fn save(root: &Path, config: &LinkConfig) -> Result<PathBuf> {
    let raw = serde_json::to_value(config).map_err(|_| SyncError::InvalidConfig)?;
    write_config(root, &raw)
}

/// Load the link config of `root`.
///
/// Absent, unreadable, or unusable files all yield `None`.
pub fn read_config(root: &Path) -> Option<LinkConfig> {
    let path = paths::config_path(root);
    if !path.exists() {
        tracing::debug!("No link config at {:?}", path);
        return None;
    }

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!("Failed to read {:?}: {}", path, e);
            return None;
        }
    };

    match serde_json::from_str::<Value>(&raw) {
        Ok(value) => LinkConfig::normalize(&value),
        Err(e) => {
            tracing::debug!("Failed to parse {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn normalize_fills_defaults() {
        let config = LinkConfig::normalize(&json!({ "repoUrl": "  https://github.com/acme/rules.git " }))
            .unwrap();
        assert_eq!(config.repo_url, "https://github.com/acme/rules.git");
        assert_eq!(config.branch, "main");
        assert_eq!(config.folder, "");
    }

    #[test]
    fn normalize_rejects_missing_or_blank_url() {
        assert!(LinkConfig::normalize(&json!({})).is_none());
        assert!(LinkConfig::normalize(&json!({ "repoUrl": "   " })).is_none());
        assert!(LinkConfig::normalize(&json!({ "repoUrl": 42 })).is_none());
        assert!(LinkConfig::normalize(&json!("https://github.com/acme/rules.git")).is_none());
        assert!(LinkConfig::normalize(&Value::Null).is_none());
    }

    #[test]
    fn normalize_prefers_canonical_names() {
        let config = LinkConfig::normalize(&json!({
            "rulesSource": "https://example.com/legacy.git",
            "skillSource": "https://example.com/older.git",
            "repoUrl": "https://example.com/current.git",
            "rulesSourceDir": "rules",
            "folder": "skills",
        }))
        .unwrap();
        assert_eq!(config.repo_url, "https://example.com/current.git");
        assert_eq!(config.folder, "skills");
    }

    #[test]
    fn normalize_upgrades_legacy_aliases_in_order() {
        let config = LinkConfig::normalize(&json!({
            "rulesSource": "https://example.com/legacy.git",
            "skillSource": "https://example.com/older.git",
            "rulesSourceDir": "rules",
            "skillSourceDir": "skills",
            "branch": "develop",
        }))
        .unwrap();
        assert_eq!(config.repo_url, "https://example.com/older.git");
        assert_eq!(config.folder, "skills");
        assert_eq!(config.branch, "develop");

        let config = LinkConfig::normalize(&json!({
            "repoUrl": "",
            "rulesSource": "https://example.com/legacy.git",
            "rulesSourceDir": " rules ",
        }))
        .unwrap();
        assert_eq!(config.repo_url, "https://example.com/legacy.git");
        assert_eq!(config.folder, "rules");
        assert_eq!(config.branch, "main");
    }

    #[test]
    fn blank_canonical_folder_still_wins() {
        let config = LinkConfig::normalize(&json!({
            "repoUrl": "https://example.com/r.git",
            "folder": "",
            "rulesSourceDir": "rules",
        }))
        .unwrap();
        assert_eq!(config.folder, "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = json!({
            "skillSource": " git@github.com:acme/rules.git ",
            "branch": "  ",
            "skillSourceDir": "docs/skills",
        });
        let once = LinkConfig::normalize(&raw).unwrap();
        let twice = LinkConfig::normalize(&serde_json::to_value(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn write_omits_default_fields() {
        let temp = tempdir().unwrap();
        let path = write_config(
            temp.path(),
            &json!({ "repoUrl": "https://github.com/acme/rules.git", "branch": "main", "folder": "" }),
        )
        .unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with(".heymark/config.json"));

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, json!({ "repoUrl": "https://github.com/acme/rules.git" }));
    }

    #[test]
    fn write_then_read_round_trips() {
        let temp = tempdir().unwrap();
        let original = LinkConfig::new(
            "https://github.com/acme/rules.git",
            Some("release"),
            Some("skills"),
        )
        .unwrap();
        save(temp.path(), &original).unwrap();
        assert_eq!(read_config(temp.path()), Some(original));
    }

    #[test]
    fn write_fails_without_repo_url() {
        let temp = tempdir().unwrap();
        let err = write_config(temp.path(), &json!({ "branch": "main" })).unwrap_err();
        assert!(matches!(err, SyncError::InvalidConfig));
        assert!(!paths::config_path(temp.path()).exists());
    }

    #[test]
    fn read_never_fails() {
        let temp = tempdir().unwrap();
        assert_eq!(read_config(temp.path()), None);

        fs::create_dir_all(paths::heymark_dir(temp.path())).unwrap();
        fs::write(paths::config_path(temp.path()), "{ not json").unwrap();
        assert_eq!(read_config(temp.path()), None);

        fs::write(paths::config_path(temp.path()), r#"{"branch":"dev"}"#).unwrap();
        assert_eq!(read_config(temp.path()), None);
    }

    #[test]
    fn read_accepts_legacy_file_without_rewriting() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(paths::heymark_dir(temp.path())).unwrap();
        let legacy = r#"{"rulesSource":"https://github.com/acme/rules.git","rulesSourceDir":"rules"}"#;
        fs::write(paths::config_path(temp.path()), legacy).unwrap();

        let config = read_config(temp.path()).unwrap();
        assert_eq!(config.repo_url, "https://github.com/acme/rules.git");
        assert_eq!(config.folder, "rules");
        assert_eq!(
            fs::read_to_string(paths::config_path(temp.path())).unwrap(),
            legacy
        );
    }
}
