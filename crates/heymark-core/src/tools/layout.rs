//! Output layouts shared by tool adapters
//!
//! Two shapes cover every supported tool:
//! - file per skill: `<dir>/<name><suffix>`
//! - folder per skill: `<dir>/<name>/<file_name>`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, SyncError};
use crate::skills::Skill;

/// How each skill maps onto the output root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    FilePerSkill { suffix: &'static str },
    FolderPerSkill { file_name: &'static str },
}

/// What `clean` removes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanStrategy {
    /// The whole output root; the tool owns it exclusively
    OutputRoot,
    /// Only the artifacts of the named skills
    PerSkill,
}

/// Where and how a tool's files are laid out under the project root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Output root, relative to the project root, one component per entry
    pub dir: &'static [&'static str],
    pub shape: Shape,
    pub clean: CleanStrategy,
}

impl Layout {
    pub fn output_root(&self, root: &Path) -> PathBuf {
        self.dir.iter().fold(root.to_path_buf(), |p, c| p.join(c))
    }

    /// File written for `skill_name`
    pub fn artifact_file(&self, root: &Path, skill_name: &str) -> PathBuf {
        let base = self.output_root(root);
        match self.shape {
            Shape::FilePerSkill { suffix } => base.join(format!("{}{}", skill_name, suffix)),
            Shape::FolderPerSkill { file_name } => base.join(skill_name).join(file_name),
        }
    }

    /// Top-level entry owned by `skill_name`: the file, or the skill folder
    fn artifact_entry(&self, root: &Path, skill_name: &str) -> PathBuf {
        let base = self.output_root(root);
        match self.shape {
            Shape::FilePerSkill { suffix } => base.join(format!("{}{}", skill_name, suffix)),
            Shape::FolderPerSkill { .. } => base.join(skill_name),
        }
    }

    /// Write one artifact per skill with `render` producing its content.
    pub fn write(
        &self,
        root: &Path,
        skills: &[Skill],
        render: impl Fn(&Skill) -> String,
    ) -> Result<usize> {
        for skill in skills {
            let path = self.artifact_file(root, &skill.name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| SyncError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, render(skill)).map_err(|source| SyncError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!("Wrote {:?}", path);
        }

        Ok(skills.len())
    }

    /// Remove previously generated output; returns removed paths relative to `root`.
    pub fn remove(&self, root: &Path, skill_names: &[String]) -> Result<Vec<String>> {
        let mut removed = Vec::new();

        match self.clean {
            CleanStrategy::OutputRoot => {
                let target = self.output_root(root);
                if remove_entry(&target)? {
                    removed.push(self.dir.join("/"));
                }
            }
            CleanStrategy::PerSkill => {
                for name in skill_names {
                    let target = self.artifact_entry(root, name);
                    if remove_entry(&target)? {
                        removed.push(crate::paths::display_relative(root, &target));
                    }
                }
            }
        }

        Ok(removed)
    }
}

/// Remove a file or directory tree; `false` when nothing was there.
fn remove_entry(path: &Path) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(SyncError::Remove {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|source| SyncError::Remove {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Removed {:?}", path);
    Ok(true)
}
