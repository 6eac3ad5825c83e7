//! Tool adapter contract and registry
//!
//! The registry is built once at startup and passed down with each request;
//! nothing looks tools up through global state.

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::skills::Skill;
use crate::tools::layout::Layout;

/// Projects skills into one tool's native file layout
pub trait ToolAdapter: Send + Sync {
    /// Selection key (`heymark sync <key>`)
    fn key(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    /// Where the tool writes, for help and reports
    fn output_pattern(&self) -> &str;

    /// Write one artifact per skill; returns `skills.len()`.
    fn generate(&self, skills: &[Skill], root: &Path) -> Result<usize>;

    /// Remove previously generated output; returns removed paths relative to `root`.
    fn clean(&self, skill_names: &[String], root: &Path) -> Result<Vec<String>>;
}

/// Adapter described entirely by data: a layout plus a content renderer
#[derive(Clone, Copy)]
pub struct LayoutTool {
    pub key: &'static str,
    pub name: &'static str,
    pub output_pattern: &'static str,
    pub layout: Layout,
    pub render: fn(&Skill) -> String,
}

impl ToolAdapter for LayoutTool {
    fn key(&self) -> &str {
        self.key
    }

    fn name(&self) -> &str {
        self.name
    }

    fn output_pattern(&self) -> &str {
        self.output_pattern
    }

    fn generate(&self, skills: &[Skill], root: &Path) -> Result<usize> {
        self.layout.write(root, skills, self.render)
    }

    fn clean(&self, skill_names: &[String], root: &Path) -> Result<Vec<String>> {
        self.layout.remove(root, skill_names)
    }
}

/// Registered tools, in registration order
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolAdapter>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in tool
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        crate::tools::register_builtin_tools(&mut registry);
        registry
    }

    /// Register a tool, replacing any tool with the same key
    pub fn register(&mut self, tool: Arc<dyn ToolAdapter>) {
        if let Some(slot) = self.tools.iter_mut().find(|t| t.key() == tool.key()) {
            tracing::debug!("Replacing tool: {}", tool.key());
            *slot = tool;
        } else {
            self.tools.push(tool);
        }
    }

    /// Get a tool by key
    pub fn get(&self, key: &str) -> Option<Arc<dyn ToolAdapter>> {
        self.tools.iter().find(|t| t.key() == key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tools.iter().any(|t| t.key() == key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.key().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ToolAdapter>> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::layout::{CleanStrategy, Shape};

    fn render_body(skill: &Skill) -> String {
        skill.body.clone()
    }

    fn tool(key: &'static str, name: &'static str) -> Arc<dyn ToolAdapter> {
        Arc::new(LayoutTool {
            key,
            name,
            output_pattern: ".x/*.md",
            layout: Layout {
                dir: &[".x"],
                shape: Shape::FilePerSkill { suffix: ".md" },
                clean: CleanStrategy::OutputRoot,
            },
            render: render_body,
        })
    }

    #[test]
    fn keeps_registration_order() {
        let mut registry = ToolRegistry::new();
        registry.register(tool("zeta", "Zeta"));
        registry.register(tool("alpha", "Alpha"));
        assert_eq!(registry.keys(), vec!["zeta", "alpha"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_replaces_same_key() {
        let mut registry = ToolRegistry::new();
        registry.register(tool("zeta", "Old"));
        registry.register(tool("zeta", "New"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("zeta").unwrap().name(), "New");
    }

    #[test]
    fn lookup_of_unknown_key() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("cursor").is_none());
        assert!(!registry.contains("cursor"));
    }

    #[test]
    fn builtin_tools_are_registered() {
        let registry = ToolRegistry::with_builtin_tools();
        assert_eq!(
            registry.keys(),
            vec!["antigravity", "claude-code", "codex", "copilot", "cursor"]
        );
    }
}
