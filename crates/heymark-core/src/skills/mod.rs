//! Skill documents from the linked repository
//!
//! A skill document is a Markdown file with an optional front-matter header:
//!
//! ```text
//! ---
//! name: git-commit
//! description: "Write conventional commit messages"
//! globs: src/**/*.rs, tests/**/*.rs
//! alwaysApply: false
//! ---
//!
//! # Git Commit
//!
//! [Instructions...]
//! ```
//!
//! Every document in the skills folder becomes one [`Skill`], the unit that
//! tool adapters turn into tool-specific files.

mod loader;
mod parser;
mod skill;

pub use loader::{load_all, load_skill_file};
pub use parser::{parse_document, ParsedDocument};
pub use skill::{MetaValue, Skill};
