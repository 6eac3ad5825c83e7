//! Skill filesystem loading

use std::fs;
use std::path::Path;
use tracing::debug;

use super::parser::parse_document;
use super::skill::Skill;
use crate::constants::SKILL_FILE_EXTENSION;
use crate::error::{Result, SyncError};

/// Load every skill document in `dir`, ordered by file name.
///
/// A missing folder or a folder without documents is an error: an empty
/// skill set would wipe every tool's output on sync.
pub fn load_all(dir: &Path) -> Result<Vec<Skill>> {
    if !dir.is_dir() {
        return Err(SyncError::SkillsDirMissing(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| SyncError::SkillRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut file_names: Vec<String> = entries
        .flatten()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(SKILL_FILE_EXTENSION))
        .collect();

    if file_names.is_empty() {
        return Err(SyncError::NoSkillDocuments(dir.to_path_buf()));
    }

    file_names.sort();

    let mut skills = Vec::with_capacity(file_names.len());
    for file_name in file_names {
        let skill = load_skill_file(dir, &file_name)?;
        debug!("Loaded skill: {} from {}", skill.name, file_name);
        skills.push(skill);
    }

    Ok(skills)
}

/// Read and parse a single skill document inside `dir`
pub fn load_skill_file(dir: &Path, file_name: &str) -> Result<Skill> {
    let path = dir.join(file_name);
    let raw = fs::read_to_string(&path).map_err(|source| SyncError::SkillRead {
        path: path.clone(),
        source,
    })?;

    let parsed = parse_document(&raw);
    let stem = file_name
        .strip_suffix(SKILL_FILE_EXTENSION)
        .unwrap_or(file_name);

    Ok(Skill::from_parts(stem, file_name, parsed.metadata, parsed.body))
}
