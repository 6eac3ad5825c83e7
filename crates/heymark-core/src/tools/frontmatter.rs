//! Front-matter rendering for generated files

/// Quote `value` as a double-quoted scalar.
///
/// A JSON string literal is also a valid YAML double-quoted scalar, so
/// quotes, backslashes and newlines come out escaped.
pub fn quoted(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

/// Assemble `---`-delimited header lines and a body into a document.
pub fn document(header: &[String], body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 64);
    out.push_str("---\n");
    for line in header {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("---\n\n");
    out.push_str(body);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_escapes_special_characters() {
        assert_eq!(quoted("plain"), "\"plain\"");
        assert_eq!(quoted("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(quoted("a\\b"), r#""a\\b""#);
    }

    #[test]
    fn document_layout() {
        let doc = document(&["name: x".to_string(), "alwaysApply: true".to_string()], "Body");
        assert_eq!(doc, "---\nname: x\nalwaysApply: true\n---\n\nBody\n");
    }
}
