//! Cursor: one `.mdc` rule per skill under `.cursor/rules`

use crate::skills::Skill;
use crate::tools::frontmatter;
use crate::tools::layout::{CleanStrategy, Layout, Shape};
use crate::tools::registry::LayoutTool;

pub const KEY: &str = "cursor";

pub fn tool() -> LayoutTool {
    LayoutTool {
        key: KEY,
        name: "Cursor",
        output_pattern: ".cursor/rules/*.mdc",
        layout: Layout {
            dir: &[".cursor", "rules"],
            shape: Shape::FilePerSkill { suffix: ".mdc" },
            clean: CleanStrategy::OutputRoot,
        },
        render,
    }
}

fn render(skill: &Skill) -> String {
    let mut header = vec![format!(
        "description: {}",
        frontmatter::quoted(&skill.description)
    )];
    if !skill.globs.is_empty() {
        header.push(format!("globs: {}", frontmatter::quoted(&skill.globs)));
    }
    header.push(format!("alwaysApply: {}", skill.always_apply));
    frontmatter::document(&header, &skill.body)
}
