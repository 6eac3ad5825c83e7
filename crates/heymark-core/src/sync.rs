//! Sync and clean orchestration
//!
//! One request runs strictly in sequence:
//! resolve tools → load skills (config → cache → parser) → clean → [generate] → report.
//! Every run recomputes the full skill set; there is no incremental mode.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cache::{self, CacheStatus, CachedSource};
use crate::config::{self, LinkConfig};
use crate::constants::ALL_TOOLS_TOKEN;
use crate::error::{Result, SyncError};
use crate::git::RepoFetcher;
use crate::skills::{self, Skill};
use crate::tools::ToolRegistry;

/// Everything a request needs, built once at startup
pub struct SyncContext {
    /// Project root: holds `.heymark/` and receives generated output
    pub root: PathBuf,
    pub tools: ToolRegistry,
    pub fetcher: Box<dyn RepoFetcher>,
}

impl SyncContext {
    pub fn new(root: impl Into<PathBuf>, tools: ToolRegistry, fetcher: impl RepoFetcher + 'static) -> Self {
        Self {
            root: root.into(),
            tools,
            fetcher: Box::new(fetcher),
        }
    }
}

/// Skills loaded from the linked repository for one request
#[derive(Debug, Clone)]
pub struct LoadedSkills {
    pub config: LinkConfig,
    pub cache: CachedSource,
    pub skills_dir: PathBuf,
    pub skills: Vec<Skill>,
}

impl LoadedSkills {
    pub fn names(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.name.clone()).collect()
    }
}

/// Paths one tool removed during clean
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCleanup {
    pub key: String,
    pub name: String,
    pub removed: Vec<String>,
}

/// Artifacts one tool generated during sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub key: String,
    pub name: String,
    pub output_pattern: String,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct SyncReport {
    pub config: LinkConfig,
    pub cache_status: CacheStatus,
    pub skills_dir: PathBuf,
    pub skill_names: Vec<String>,
    pub cleaned: Vec<ToolCleanup>,
    pub generated: Vec<ToolOutput>,
}

#[derive(Debug, Clone)]
pub struct CleanReport {
    pub config: LinkConfig,
    pub cache_status: CacheStatus,
    pub cleaned: Vec<ToolCleanup>,
}

impl CleanReport {
    /// Number of tools that had something to remove
    pub fn tools_cleaned(&self) -> usize {
        self.cleaned.iter().filter(|c| !c.removed.is_empty()).count()
    }
}

/// Resolve command-line tool arguments to registered tool keys.
///
/// No arguments (or `.`) selects every tool in registration order.
pub fn select_tools(args: &[String], tools: &ToolRegistry) -> Result<Vec<String>> {
    let requested: Vec<String> = args
        .iter()
        .map(|a| a.trim().to_lowercase())
        .filter(|a| !a.is_empty())
        .collect();

    if requested.is_empty() {
        return Ok(tools.keys());
    }

    if requested.iter().any(|t| t.contains(',')) {
        return Err(SyncError::CommaSeparatedTools);
    }

    if requested.iter().any(|t| t == "all") {
        return Err(SyncError::AllKeyword);
    }

    if requested.iter().any(|t| t == ALL_TOOLS_TOKEN) {
        if requested.len() > 1 {
            return Err(SyncError::AllTokenCombined);
        }
        return Ok(tools.keys());
    }

    let unknown: Vec<String> = requested
        .iter()
        .filter(|t| !tools.contains(t))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(SyncError::UnknownTools {
            unknown,
            available: tools.keys(),
        });
    }

    let mut selected: Vec<String> = Vec::with_capacity(requested.len());
    for tool in requested {
        if !selected.contains(&tool) {
            selected.push(tool);
        }
    }
    Ok(selected)
}

/// Load the skill set through config, cache and parser.
pub fn load_skills(ctx: &SyncContext) -> Result<LoadedSkills> {
    let config = config::read_config(&ctx.root).ok_or(SyncError::NotLinked)?;
    let cache = cache::ensure(&ctx.root, &config, ctx.fetcher.as_ref())?;
    let skills_dir = cache::resolve_folder(&cache.path, &config.folder)?;
    let skills = skills::load_all(&skills_dir)?;
    validate_names(&skills)?;

    tracing::info!(
        "Loaded {} skill(s) from {:?}",
        skills.len(),
        skills_dir
    );

    Ok(LoadedSkills {
        config,
        cache,
        skills_dir,
        skills,
    })
}

/// Reject names that cannot be a single path component, and duplicates.
pub fn validate_names(skills: &[Skill]) -> Result<()> {
    let mut seen: HashMap<&str, &str> = HashMap::with_capacity(skills.len());

    for skill in skills {
        if !is_safe_name(&skill.name) {
            return Err(SyncError::InvalidSkillName {
                name: skill.name.clone(),
                file: skill.source_file.clone(),
            });
        }
        if let Some(first) = seen.insert(&skill.name, &skill.source_file) {
            return Err(SyncError::DuplicateSkill {
                name: skill.name.clone(),
                first: first.to_string(),
                second: skill.source_file.clone(),
            });
        }
    }

    Ok(())
}

fn is_safe_name(name: &str) -> bool {
    !name.trim().is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}

/// Remove previous output, then regenerate it for every current skill.
pub fn sync(ctx: &SyncContext, tool_args: &[String]) -> Result<SyncReport> {
    let selected = select_tools(tool_args, &ctx.tools)?;
    let loaded = load_skills(ctx)?;
    let names = loaded.names();

    let cleaned = clean_tools(&ctx.tools, &selected, &names, &ctx.root)?;

    let mut generated = Vec::with_capacity(selected.len());
    for key in &selected {
        let Some(tool) = ctx.tools.get(key) else {
            continue;
        };
        let count = tool.generate(&loaded.skills, &ctx.root)?;
        tracing::info!(tool = key.as_str(), count, "Generated output");
        generated.push(ToolOutput {
            key: key.clone(),
            name: tool.name().to_string(),
            output_pattern: tool.output_pattern().to_string(),
            count,
        });
    }

    Ok(SyncReport {
        config: loaded.config,
        cache_status: loaded.cache.status,
        skills_dir: loaded.skills_dir,
        skill_names: names,
        cleaned,
        generated,
    })
}

/// Remove previously generated output of the selected tools.
pub fn clean(ctx: &SyncContext, tool_args: &[String]) -> Result<CleanReport> {
    let selected = select_tools(tool_args, &ctx.tools)?;
    let loaded = load_skills(ctx)?;
    let cleaned = clean_tools(&ctx.tools, &selected, &loaded.names(), &ctx.root)?;

    Ok(CleanReport {
        config: loaded.config,
        cache_status: loaded.cache.status,
        cleaned,
    })
}

fn clean_tools(
    tools: &ToolRegistry,
    selected: &[String],
    skill_names: &[String],
    root: &Path,
) -> Result<Vec<ToolCleanup>> {
    let mut cleaned = Vec::with_capacity(selected.len());
    for key in selected {
        let Some(tool) = tools.get(key) else {
            continue;
        };
        let removed = tool.clean(skill_names, root)?;
        if !removed.is_empty() {
            tracing::debug!(tool = key.as_str(), "Removed {} path(s)", removed.len());
        }
        cleaned.push(ToolCleanup {
            key: key.clone(),
            name: tool.name().to_string(),
            removed,
        });
    }
    Ok(cleaned)
}
