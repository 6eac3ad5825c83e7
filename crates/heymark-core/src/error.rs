//! Error taxonomy for link, fetch, parse, selection and write failures
//!
//! Every variant is fatal for the current command. The recovered
//! refresh-failure case is not an error; see [`crate::cache::CacheStatus`].

use std::path::PathBuf;

use thiserror::Error;

use crate::paths;

/// Result alias used across the core library
pub type Result<T> = std::result::Result<T, SyncError>;

/// Coarse category of a [`SyncError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid link config
    Configuration,
    /// First-time fetch of the linked repository failed
    Fetch,
    /// Declared folder missing from the fetched repository
    Resolution,
    /// Skill documents missing or unusable
    Content,
    /// Unknown tool or malformed tool list
    Selection,
    /// Filesystem failure while writing or removing output
    Write,
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("No linked repository found.")]
    NotLinked,

    #[error("Invalid link config: a repository URL is required.")]
    InvalidConfig,

    #[error("Failed to save link config to {}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Clone failed for {repo_url} (branch {branch}). Check repo access (SSH or token).")]
    CloneFailed {
        repo_url: String,
        branch: String,
        detail: String,
    },

    #[error("Folder not found in repo: {}", display_folder(.folder))]
    FolderNotFound { folder: String },

    #[error("Skills folder not found: {}", .0.display())]
    SkillsDirMissing(PathBuf),

    #[error("No .md files in: {}", .0.display())]
    NoSkillDocuments(PathBuf),

    #[error("Failed to read skill document {}", .path.display())]
    SkillRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid skill name '{name}' in {file}")]
    InvalidSkillName { name: String, file: String },

    #[error("Duplicate skill name '{name}' in {first} and {second}")]
    DuplicateSkill {
        name: String,
        first: String,
        second: String,
    },

    #[error("Use spaces between tools, not commas.")]
    CommaSeparatedTools,

    #[error("'.' cannot be combined with tool names.")]
    AllTokenCombined,

    #[error("'all' is not supported. Use '.' for all tools.")]
    AllKeyword,

    #[error("Unknown tool(s): {}", .unknown.join(", "))]
    UnknownTools {
        unknown: Vec<String>,
        available: Vec<String>,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove {}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyncError::NotLinked | SyncError::InvalidConfig | SyncError::ConfigWrite { .. } => {
                ErrorKind::Configuration
            }
            SyncError::CloneFailed { .. } => ErrorKind::Fetch,
            SyncError::FolderNotFound { .. } => ErrorKind::Resolution,
            SyncError::SkillsDirMissing(_)
            | SyncError::NoSkillDocuments(_)
            | SyncError::SkillRead { .. }
            | SyncError::InvalidSkillName { .. }
            | SyncError::DuplicateSkill { .. } => ErrorKind::Content,
            SyncError::CommaSeparatedTools
            | SyncError::AllTokenCombined
            | SyncError::AllKeyword
            | SyncError::UnknownTools { .. } => ErrorKind::Selection,
            SyncError::Write { .. } | SyncError::Remove { .. } => ErrorKind::Write,
        }
    }

    /// Hint lines printed under the summary line.
    pub fn details(&self) -> Vec<String> {
        match self {
            SyncError::NotLinked => vec![
                "Run: heymark link <repo-url>".to_string(),
                format!("Config: {}", paths::config_relative()),
            ],
            SyncError::CloneFailed { detail, .. } if !detail.is_empty() => {
                detail.lines().map(str::to_string).collect()
            }
            SyncError::CommaSeparatedTools => {
                vec!["Example: heymark sync cursor claude-code".to_string()]
            }
            SyncError::UnknownTools { available, .. } => {
                vec![format!("Available: {}", available.join(", "))]
            }
            SyncError::ConfigWrite { source, .. }
            | SyncError::SkillRead { source, .. }
            | SyncError::Write { source, .. }
            | SyncError::Remove { source, .. } => vec![source.to_string()],
            _ => Vec::new(),
        }
    }
}

fn display_folder(folder: &str) -> &str {
    if folder.is_empty() {
        "(root)"
    } else {
        folder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tools_lists_available_keys() {
        let err = SyncError::UnknownTools {
            unknown: vec!["nonexistent-tool".to_string()],
            available: vec!["cursor".to_string(), "codex".to_string()],
        };
        assert_eq!(err.kind(), ErrorKind::Selection);
        assert_eq!(err.to_string(), "Unknown tool(s): nonexistent-tool");
        assert_eq!(err.details(), vec!["Available: cursor, codex".to_string()]);
    }

    #[test]
    fn root_folder_is_named_in_resolution_error() {
        let err = SyncError::FolderNotFound {
            folder: String::new(),
        };
        assert_eq!(err.kind(), ErrorKind::Resolution);
        assert_eq!(err.to_string(), "Folder not found in repo: (root)");
    }

    #[test]
    fn not_linked_points_at_link_command() {
        let details = SyncError::NotLinked.details();
        assert!(details[0].contains("heymark link"));
        assert!(details[1].ends_with(".heymark/config.json"));
    }
}
