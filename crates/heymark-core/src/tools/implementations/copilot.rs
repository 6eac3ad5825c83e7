//! GitHub Copilot: one `.instructions.md` file per skill under `.github/instructions`

use crate::skills::Skill;
use crate::tools::frontmatter;
use crate::tools::layout::{CleanStrategy, Layout, Shape};
use crate::tools::registry::LayoutTool;

pub const KEY: &str = "copilot";

/// `applyTo` for skills without globs
const DEFAULT_GLOB: &str = "**";

pub fn tool() -> LayoutTool {
    LayoutTool {
        key: KEY,
        name: "Copilot",
        output_pattern: ".github/instructions/*.instructions.md",
        layout: Layout {
            dir: &[".github", "instructions"],
            shape: Shape::FilePerSkill {
                suffix: ".instructions.md",
            },
            clean: CleanStrategy::OutputRoot,
        },
        render,
    }
}

fn render(skill: &Skill) -> String {
    let globs = skill.glob_list();
    let apply_to = if globs.is_empty() {
        DEFAULT_GLOB.to_string()
    } else {
        globs.join(",")
    };

    let header = [
        format!("description: {}", frontmatter::quoted(&skill.description)),
        format!("applyTo: {}", frontmatter::quoted(&apply_to)),
    ];
    frontmatter::document(&header, &skill.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::implementations::test_support::{plain, skill_from};

    #[test]
    fn unscoped_skill_applies_everywhere() {
        assert_eq!(
            render(&plain("style")),
            "---\ndescription: \"style\"\napplyTo: \"**\"\n---\n\nBody\n"
        );
    }

    #[test]
    fn globs_are_normalized() {
        let skill = skill_from(
            "rust.md",
            "---\ndescription: Rust rules\nglobs: src/**/*.rs , tests/**/*.rs,\n---\nUse clippy.",
        );
        assert_eq!(
            render(&skill),
            "---\ndescription: \"Rust rules\"\napplyTo: \"src/**/*.rs,tests/**/*.rs\"\n---\n\nUse clippy.\n"
        );
    }

    #[test]
    fn file_is_named_after_skill() {
        let path = tool()
            .layout
            .artifact_file(std::path::Path::new("/p"), "style");
        assert_eq!(
            path,
            std::path::PathBuf::from("/p/.github/instructions/style.instructions.md")
        );
    }
}
