//! Local cache of the linked skill repository
//!
//! The first fetch must succeed. Later refreshes may fail (offline, revoked
//! token) and the previous copy is used as-is.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::config::LinkConfig;
use crate::error::{Result, SyncError};
use crate::git::RepoFetcher;
use crate::paths;

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid cache key regex"));

/// How the cached copy was obtained for this run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheStatus {
    /// No copy existed; fetched now
    Cloned,
    /// Existing copy refreshed from the remote
    Refreshed,
    /// Refresh failed; the previous copy is used
    Stale { reason: String },
}

impl CacheStatus {
    pub fn is_stale(&self) -> bool {
        matches!(self, CacheStatus::Stale { .. })
    }
}

/// Local copy of a linked repository
#[derive(Debug, Clone)]
pub struct CachedSource {
    pub path: PathBuf,
    pub status: CacheStatus,
}

/// Deterministic, filesystem-safe directory name for `repo_url`.
///
/// `https://github.com/acme/rules.git` becomes `acme-rules-<hash8>`; the hash
/// keeps the same org/repo on different hosts apart.
pub fn cache_key(repo_url: &str) -> String {
    let normalized = normalize_url(repo_url);

    let segments: Vec<&str> = normalized
        .split(['/', ':', '\\'])
        .filter(|s| !s.is_empty())
        .collect();
    let tail = match segments.as_slice() {
        [] => "repo".to_string(),
        [only] => (*only).to_string(),
        [.., org, repo] => format!("{}-{}", org, repo),
    };
    let name = UNSAFE_CHARS.replace_all(&tail, "-");
    let name = name.trim_matches('-');
    let name = if name.is_empty() || name.chars().all(|c| c == '.') {
        "repo"
    } else {
        name
    };

    let digest = Sha256::digest(normalized.as_bytes());
    let hash: String = digest.iter().take(4).map(|b| format!("{:02x}", b)).collect();

    format!("{}-{}", name, hash)
}

fn normalize_url(repo_url: &str) -> String {
    let trimmed = repo_url.trim().trim_end_matches('/');
    trimmed.strip_suffix(".git").unwrap_or(trimmed).to_string()
}

/// Cache directory for `config` under `root`; may not exist yet.
pub fn cache_path(root: &Path, config: &LinkConfig) -> PathBuf {
    paths::cache_dir(root).join(cache_key(&config.repo_url))
}

/// Make sure a local copy of the linked repository exists and is as fresh as possible.
pub fn ensure(root: &Path, config: &LinkConfig, fetcher: &dyn RepoFetcher) -> Result<CachedSource> {
    let path = cache_path(root, config);

    // Left over from an interrupted clone, or created by hand: never refresh it.
    if path.exists() && !fetcher.is_checkout(&path) {
        tracing::warn!("{:?} is not a usable checkout, fetching again", path);
        remove_copy(&path).map_err(|source| SyncError::Remove {
            path: path.clone(),
            source,
        })?;
    }

    if !path.exists() {
        let cache_dir = paths::cache_dir(root);
        fs::create_dir_all(&cache_dir).map_err(|source| SyncError::Write {
            path: cache_dir.clone(),
            source,
        })?;

        tracing::info!(
            "Cloning {} (branch {}) into {:?}",
            config.repo_url,
            config.branch,
            path
        );
        if let Err(e) = fetcher.clone_shallow(&config.repo_url, &config.branch, &path) {
            let mut detail = format!("{:#}", e);
            if let Err(cleanup) = remove_copy(&path) {
                tracing::warn!("Failed to remove partial clone {:?}: {}", path, cleanup);
                detail.push_str(&format!(
                    "\nFailed to remove partial clone {}: {}",
                    path.display(),
                    cleanup
                ));
            }
            return Err(SyncError::CloneFailed {
                repo_url: config.repo_url.clone(),
                branch: config.branch.clone(),
                detail,
            });
        }

        return Ok(CachedSource {
            path,
            status: CacheStatus::Cloned,
        });
    }

    let status = match fetcher.refresh(&path, &config.branch) {
        Ok(()) => {
            tracing::debug!("Refreshed cache {:?}", path);
            CacheStatus::Refreshed
        }
        Err(e) => {
            tracing::warn!("Refresh of {:?} failed, using cached copy: {:#}", path, e);
            CacheStatus::Stale {
                reason: format!("{:#}", e),
            }
        }
    };

    Ok(CachedSource { path, status })
}

/// Remove a cached copy, file or tree; absence is success.
fn remove_copy(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
    }
}

/// Join `folder` onto the cached copy and check it is a directory.
///
/// The folder must stay inside the copy: absolute paths and `..` are rejected.
pub fn resolve_folder(local: &Path, folder: &str) -> Result<PathBuf> {
    let folder = folder.trim();
    let not_found = || SyncError::FolderNotFound {
        folder: folder.to_string(),
    };

    let relative = Path::new(folder);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(not_found());
    }

    let resolved = if folder.is_empty() {
        local.to_path_buf()
    } else {
        local.join(relative)
    };

    if !resolved.is_dir() {
        return Err(not_found());
    }

    Ok(resolved)
}
