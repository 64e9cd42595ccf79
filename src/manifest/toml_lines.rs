//! Line-oriented reader for the subset of TOML that manifests use.
//!
//! Understands `[section]` headers, `key = value` pairs with string, inline
//! table and array values, and arrays of strings spread over several lines.
//! Arrays of tables are recorded by header only, multi-line strings and
//! inline tables spanning lines are not supported.

use anyhow::Result;
use regex::Regex;

#[derive(Debug, Clone, PartialEq)]
pub enum TomlValue {
    Str(String),
    Array(Vec<String>),
    /// Inline table as `(key, value)` pairs; nested values are kept raw.
    Table(Vec<(String, String)>),
    /// Numbers, booleans, and anything else, unparsed.
    Other(String),
}

impl TomlValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TomlValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn table_get(&self, key: &str) -> Option<&str> {
        match self {
            TomlValue::Table(pairs) => pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TomlEntry {
    /// Dotted section name, empty for the top level.
    pub section: String,
    pub key: String,
    pub value: TomlValue,
    /// The value text exactly as written (joined for multi-line arrays).
    pub raw: String,
}

#[derive(Debug, Clone, Default)]
pub struct TomlDocument {
    pub sections: Vec<String>,
    pub entries: Vec<TomlEntry>,
}

impl TomlDocument {
    pub fn section<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TomlEntry> + 'a {
        self.entries.iter().filter(move |e| e.section == name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&TomlEntry> {
        self.entries
            .iter()
            .find(|e| e.section == section && e.key == key)
    }

    pub fn get_str(&self, section: &str, key: &str) -> Option<String> {
        self.get(section, key)
            .and_then(|e| e.value.as_str())
            .map(str::to_string)
    }

    pub fn get_array(&self, section: &str, key: &str) -> Vec<String> {
        match self.get(section, key).map(|e| &e.value) {
            Some(TomlValue::Array(items)) => items.clone(),
            _ => Vec::new(),
        }
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|s| s == name)
    }
}

struct Patterns {
    quoted: Regex,
    pair: Regex,
}

impl Patterns {
    fn new() -> Result<Self> {
        Ok(Self {
            quoted: Regex::new(r#""((?:[^"\\]|\\.)*)"|'([^']*)'"#)?,
            pair: Regex::new(
                r#"([A-Za-z0-9_.-]+|"[^"]*")\s*=\s*("[^"]*"|'[^']*'|\[[^\]]*\]|\{[^}]*\}|[^,}]+)"#,
            )?,
        })
    }
}

pub fn parse(content: &str) -> Result<TomlDocument> {
    let patterns = Patterns::new()?;
    let mut doc = TomlDocument::default();
    let mut section = String::new();
    let mut pending: Option<(String, String)> = None;

    for line in content.lines() {
        let line = strip_comment(line).trim();

        if let Some((key, mut raw)) = pending.take() {
            raw.push(' ');
            raw.push_str(line);
            if array_closed(&raw) {
                doc.entries.push(entry(&patterns, &section, key, raw));
            } else {
                pending = Some((key, raw));
            }
            continue;
        }

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix("[[") {
            section = format!("[[{}]]", header.trim_end_matches("]]").trim());
            doc.sections.push(section.clone());
            continue;
        }
        if let Some(header) = line.strip_prefix('[') {
            section = normalize_key(header.trim_end_matches(']').trim());
            doc.sections.push(section.clone());
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = normalize_key(key.trim());
        let raw = value.trim().to_string();
        if raw.starts_with('[') && !array_closed(&raw) {
            pending = Some((key, raw));
        } else {
            doc.entries.push(entry(&patterns, &section, key, raw));
        }
    }
    Ok(doc)
}

fn entry(patterns: &Patterns, section: &str, key: String, raw: String) -> TomlEntry {
    TomlEntry {
        section: section.to_string(),
        key,
        value: parse_value(patterns, &raw),
        raw,
    }
}

fn parse_value(patterns: &Patterns, raw: &str) -> TomlValue {
    if raw.starts_with('"') || raw.starts_with('\'') {
        return TomlValue::Str(unquote(raw));
    }
    if raw.starts_with('[') {
        let items = patterns
            .quoted
            .captures_iter(raw)
            .filter_map(|c| c.get(1).or_else(|| c.get(2)))
            .map(|m| m.as_str().to_string())
            .collect();
        return TomlValue::Array(items);
    }
    if let Some(inner) = raw.strip_prefix('{') {
        let inner = inner.trim_end_matches('}');
        let pairs = patterns
            .pair
            .captures_iter(inner)
            .map(|c| (normalize_key(&c[1]), unquote(c[2].trim())))
            .collect();
        return TomlValue::Table(pairs);
    }
    TomlValue::Other(raw.to_string())
}

fn unquote(s: &str) -> String {
    let s = s.trim();
    for q in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(q) && s.ends_with(q) {
            return s[1..s.len() - 1].to_string();
        }
    }
    s.to_string()
}

/// Strip quotes around a key or each part of a dotted section name.
fn normalize_key(key: &str) -> String {
    if !key.contains('"') && !key.contains('\'') {
        return key.split('.').map(str::trim).collect::<Vec<_>>().join(".");
    }
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    for c in key.chars() {
        match (c, quote) {
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            ('.', None) => parts.push(std::mem::take(&mut current).trim().to_string()),
            (c, _) => current.push(c),
        }
    }
    parts.push(current.trim().to_string());
    parts.join(".")
}

/// Cut a trailing `#` comment, ignoring `#` inside quoted strings.
pub(crate) fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    for (i, c) in line.char_indices() {
        match (c, quote) {
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            ('#', None) => return &line[..i],
            _ => {}
        }
    }
    line
}

fn array_closed(raw: &str) -> bool {
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    for c in raw.chars() {
        match (c, quote) {
            ('"' | '\'', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            ('[', None) => depth += 1,
            (']', None) => depth -= 1,
            _ => {}
        }
    }
    depth <= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_and_values() {
        let doc = parse(
            r#"
name = "top"

[package]
name = "demo" # trailing comment
version = '0.1.0'
keywords = ["cli", "scan"]

[dependencies]
serde = { version = "1", features = ["derive"] }
"tokio" = "1.0"
publish = false
"#,
        )
        .unwrap();
        assert_eq!(doc.get_str("", "name").as_deref(), Some("top"));
        assert_eq!(doc.get_str("package", "name").as_deref(), Some("demo"));
        assert_eq!(doc.get_str("package", "version").as_deref(), Some("0.1.0"));
        assert_eq!(doc.get_array("package", "keywords"), vec!["cli", "scan"]);
        let serde = doc.get("dependencies", "serde").unwrap();
        assert_eq!(serde.value.table_get("version"), Some("1"));
        assert_eq!(doc.get_str("dependencies", "tokio").as_deref(), Some("1.0"));
        assert_eq!(
            doc.get("dependencies", "publish").unwrap().value,
            TomlValue::Other("false".to_string())
        );
    }

    #[test]
    fn test_multiline_string_array() {
        let doc = parse(
            r#"
[project]
dependencies = [
    "django>=4.2",  # web
    "psycopg2-binary==2.9.9",
]
name = "svc"
"#,
        )
        .unwrap();
        assert_eq!(
            doc.get_array("project", "dependencies"),
            vec!["django>=4.2", "psycopg2-binary==2.9.9"]
        );
        assert_eq!(doc.get_str("project", "name").as_deref(), Some("svc"));
    }

    #[test]
    fn test_quoted_section_parts_and_array_tables() {
        let doc = parse(
            r#"
[target.'cfg(unix)'.dependencies]
libc = "0.2"

[[bin]]
name = "tool"
"#,
        )
        .unwrap();
        assert!(doc.has_section("target.cfg(unix).dependencies"));
        assert_eq!(
            doc.get_str("target.cfg(unix).dependencies", "libc").as_deref(),
            Some("0.2")
        );
        assert!(doc.has_section("[[bin]]"));
    }
}
