//! Antigravity: one `SKILL.md` per skill folder under `.agent/skills`

use crate::tools::layout::{CleanStrategy, Layout, Shape};
use crate::tools::registry::LayoutTool;

pub const KEY: &str = "antigravity";

pub fn tool() -> LayoutTool {
    LayoutTool {
        key: KEY,
        name: "Antigravity",
        output_pattern: ".agent/skills/*/SKILL.md",
        layout: Layout {
            dir: &[".agent", "skills"],
            shape: Shape::FolderPerSkill {
                file_name: "SKILL.md",
            },
            clean: CleanStrategy::OutputRoot,
        },
        render: super::skill_md,
    }
}
