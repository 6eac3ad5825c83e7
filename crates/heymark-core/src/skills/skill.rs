//! Skill record

use std::collections::BTreeMap;

/// Header value: quoted or plain text, or a literal `true`/`false`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaValue {
    Text(String),
    Flag(bool),
}

impl MetaValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetaValue::Text(s) => Some(s),
            MetaValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            MetaValue::Flag(b) => Some(*b),
            MetaValue::Text(_) => None,
        }
    }
}

/// Normalized skill, built fresh from the cache on every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    /// Identity key; header `name` or the file stem
    pub name: String,
    /// Defaults to `name`
    pub description: String,
    /// Comma-separated file patterns; empty means always relevant
    pub globs: String,
    pub always_apply: bool,
    /// Document content after the header, trimmed
    pub body: String,
    /// Raw header fields
    pub metadata: BTreeMap<String, MetaValue>,
    /// File name of the source document
    pub source_file: String,
}

impl Skill {
    /// Map parsed header fields onto a skill, defaulting from `file_stem`.
    pub fn from_parts(
        file_stem: &str,
        source_file: impl Into<String>,
        metadata: BTreeMap<String, MetaValue>,
        body: String,
    ) -> Self {
        let text = |key: &str| {
            metadata
                .get(key)
                .and_then(MetaValue::as_text)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let name = text("name").unwrap_or_else(|| file_stem.to_string());
        let description = text("description").unwrap_or_else(|| name.clone());
        let globs = metadata
            .get("globs")
            .and_then(MetaValue::as_text)
            .unwrap_or_default()
            .to_string();
        let always_apply = metadata
            .get("alwaysApply")
            .and_then(MetaValue::as_flag)
            .unwrap_or(false);

        Self {
            name,
            description,
            globs,
            always_apply,
            body,
            metadata,
            source_file: source_file.into(),
        }
    }

    /// Individual glob patterns, trimmed, empty entries dropped
    pub fn glob_list(&self) -> Vec<&str> {
        self.globs
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .collect()
    }
}
