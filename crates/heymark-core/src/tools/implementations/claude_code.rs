//! Claude Code: one `SKILL.md` per skill folder under `.claude/skills`

use crate::tools::layout::{CleanStrategy, Layout, Shape};
use crate::tools::registry::LayoutTool;

pub const KEY: &str = "claude-code";

pub fn tool() -> LayoutTool {
    LayoutTool {
        key: KEY,
        name: "Claude Code",
        output_pattern: ".claude/skills/*/SKILL.md",
        layout: Layout {
            dir: &[".claude", "skills"],
            shape: Shape::FolderPerSkill {
                file_name: "SKILL.md",
            },
            clean: CleanStrategy::OutputRoot,
        },
        render: super::skill_md,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::implementations::test_support::skill_from;
    use crate::tools::registry::ToolAdapter;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn renders_skill_md() {
        let skill = skill_from(
            "commit.md",
            "---\nname: git-commit\ndescription: Write \"good\" commits\n---\n\n# Commit\n\nSteps",
        );
        assert_eq!(
            (tool().render)(&skill),
            "---\nname: git-commit\ndescription: \"Write \\\"good\\\" commits\"\n---\n\n# Commit\n\nSteps\n"
        );
    }

    #[test]
    fn generate_then_clean_restores_project() {
        let temp = tempdir().unwrap();
        let skills = vec![skill_from("a.md", "A"), skill_from("b.md", "B")];

        assert_eq!(tool().generate(&skills, temp.path()).unwrap(), 2);
        let a = temp.path().join(".claude/skills/a/SKILL.md");
        assert_eq!(
            fs::read_to_string(&a).unwrap(),
            "---\nname: a\ndescription: \"a\"\n---\n\nA\n"
        );

        let names = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            tool().clean(&names, temp.path()).unwrap(),
            vec![".claude/skills".to_string()]
        );
        assert!(!temp.path().join(".claude/skills").exists());
        assert!(tool().clean(&names, temp.path()).unwrap().is_empty());
    }
}
