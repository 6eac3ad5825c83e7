//! Read-only project status
//!
//! Never fetches and never fails; a missing or broken config reads as "not linked".

use std::path::{Path, PathBuf};

use crate::cache;
use crate::config::{self, LinkConfig};
use crate::paths;
use crate::tools::ToolRegistry;

/// Whether the linked repository has a local copy yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Ready,
    NotFetched,
}

impl CacheState {
    pub fn label(&self) -> &'static str {
        match self {
            CacheState::Ready => "ready",
            CacheState::NotFetched => "not-fetched",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinkStatus {
    pub config: LinkConfig,
    pub cache_dir: PathBuf,
    pub cache: CacheState,
}

#[derive(Debug, Clone)]
pub struct StatusReport {
    pub root: PathBuf,
    /// Config location relative to the project root
    pub config_file: String,
    pub tools: Vec<String>,
    pub link: Option<LinkStatus>,
}

impl StatusReport {
    pub fn is_linked(&self) -> bool {
        self.link.is_some()
    }
}

pub fn status(root: &Path, tools: &ToolRegistry) -> StatusReport {
    let link = config::read_config(root).map(|config| {
        let cache_dir = cache::cache_path(root, &config);
        let cache = if cache_dir.is_dir() {
            CacheState::Ready
        } else {
            CacheState::NotFetched
        };
        LinkStatus {
            config,
            cache_dir,
            cache,
        }
    });

    StatusReport {
        root: root.to_path_buf(),
        config_file: paths::config_relative(),
        tools: tools.keys(),
        link,
    }
}
