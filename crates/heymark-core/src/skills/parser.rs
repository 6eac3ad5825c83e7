//! Front-matter header parsing
//!
//! The header is a flat list of `key: value` lines between two `---` lines,
//! the first of which must open the document. Nothing nests.

use std::collections::BTreeMap;

use super::skill::MetaValue;

const DELIMITER: &str = "---";

/// Header fields and body of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub metadata: BTreeMap<String, MetaValue>,
    pub body: String,
}

/// Split a skill document into header fields and trimmed body.
///
/// Without an opening delimiter on the first line, or without a closing one,
/// the whole text is body.
pub fn parse_document(raw: &str) -> ParsedDocument {
    let Some((header, body)) = split_header(raw) else {
        return ParsedDocument {
            metadata: BTreeMap::new(),
            body: raw.trim().to_string(),
        };
    };

    let mut metadata = BTreeMap::new();
    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        metadata.insert(key.to_string(), parse_value(value));
    }

    ParsedDocument {
        metadata,
        body: body.trim().to_string(),
    }
}

/// Returns `(header, body)` when `raw` opens with a delimited header.
fn split_header(raw: &str) -> Option<(&str, &str)> {
    let rest = raw
        .strip_prefix(DELIMITER)
        .and_then(|r| r.strip_prefix("\r\n").or_else(|| r.strip_prefix('\n')))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let content = line.trim_end_matches(['\r', '\n']);
        if content == DELIMITER {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }

    None
}

fn parse_value(raw: &str) -> MetaValue {
    let value = raw.trim();

    if let Some(inner) = strip_matching_quotes(value) {
        return MetaValue::Text(inner.to_string());
    }

    match value {
        "true" => MetaValue::Flag(true),
        "false" => MetaValue::Flag(false),
        _ => MetaValue::Text(value.to_string()),
    }
}

fn strip_matching_quotes(value: &str) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    ['"', '\''].into_iter().find_map(|quote| {
        value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
    })
}
