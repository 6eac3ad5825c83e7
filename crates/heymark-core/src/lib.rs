//! Heymark Core - shared library for the heymark CLI
//!
//! Keeps one repository of skill documents as the source of truth and
//! projects it into the rule/instruction layouts of several AI coding tools:
//! - Link configuration (`.heymark/config.json`) with legacy field names
//! - Local cache of the linked repository, refreshed on every run
//! - Skill document parsing (front-matter header + body)
//! - Tool adapters that generate and clean per-tool output
//! - Sync/clean orchestration over a selected set of tools

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod git;
pub mod paths;
pub mod skills;
pub mod status;
pub mod sync;
pub mod tools;

pub use error::{ErrorKind, Result, SyncError};
