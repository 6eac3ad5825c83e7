//! Built-in tool adapters
//!
//! - antigravity: `.agent/skills/<name>/SKILL.md`
//! - claude-code: `.claude/skills/<name>/SKILL.md`
//! - codex: `.agents/skills/<name>/SKILL.md`
//! - copilot: `.github/instructions/<name>.instructions.md`
//! - cursor: `.cursor/rules/<name>.mdc`

pub mod antigravity;
pub mod claude_code;
pub mod codex;
pub mod copilot;
pub mod cursor;

use std::sync::Arc;

use crate::skills::Skill;
use crate::tools::frontmatter;
use crate::tools::registry::ToolRegistry;

/// Register all built-in tools, ordered by key
pub fn register_builtin_tools(registry: &mut ToolRegistry) {
    registry.register(Arc::new(antigravity::tool()));
    registry.register(Arc::new(claude_code::tool()));
    registry.register(Arc::new(codex::tool()));
    registry.register(Arc::new(copilot::tool()));
    registry.register(Arc::new(cursor::tool()));
}

/// `SKILL.md` content shared by the folder-per-skill tools
pub(crate) fn skill_md(skill: &Skill) -> String {
    let header = [
        format!("name: {}", skill.name),
        format!("description: {}", frontmatter::quoted(&skill.description)),
    ];
    frontmatter::document(&header, &skill.body)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeMap;

    use crate::skills::{parse_document, Skill};

    /// Build a skill the way the loader would from `raw` in `file_name`.
    pub fn skill_from(file_name: &str, raw: &str) -> Skill {
        let parsed = parse_document(raw);
        let stem = file_name.strip_suffix(".md").unwrap_or(file_name);
        Skill::from_parts(stem, file_name, parsed.metadata, parsed.body)
    }

    pub fn plain(name: &str) -> Skill {
        Skill::from_parts(name, format!("{}.md", name), BTreeMap::new(), "Body".into())
    }
}
