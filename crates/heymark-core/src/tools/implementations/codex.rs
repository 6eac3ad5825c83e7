//! Codex: one `SKILL.md` per skill folder under `.agents/skills`

use crate::tools::layout::{CleanStrategy, Layout, Shape};
use crate::tools::registry::LayoutTool;

pub const KEY: &str = "codex";

pub fn tool() -> LayoutTool {
    LayoutTool {
        key: KEY,
        name: "Codex",
        output_pattern: ".agents/skills/*/SKILL.md",
        layout: Layout {
            dir: &[".agents", "skills"],
            shape: Shape::FolderPerSkill {
                file_name: "SKILL.md",
            },
            clean: CleanStrategy::OutputRoot,
        },
        render: super::skill_md,
    }
}
