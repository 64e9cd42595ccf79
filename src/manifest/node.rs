use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;

use crate::models::{DependencyScope, Ecosystem, ManifestRecord, PackageInfo};

pub struct PackageJsonReader;

impl super::ManifestReader for PackageJsonReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        super::existing(root, "package.json")
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let json = read_package_json(path)?;
        Ok(parse_package_json(path, &json))
    }
}

pub fn read_package_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

const SECTIONS: &[(&str, DependencyScope)] = &[
    ("dependencies", DependencyScope::Production),
    ("devDependencies", DependencyScope::Development),
    ("peerDependencies", DependencyScope::Peer),
    ("optionalDependencies", DependencyScope::Optional),
];

fn parse_package_json(path: &Path, json: &Value) -> ManifestRecord {
    let mut record = ManifestRecord::new(Ecosystem::Npm, path);

    for (section, scope) in SECTIONS {
        if let Some(pkgs) = json.get(section).and_then(|v| v.as_object()) {
            for (name, range) in pkgs {
                record.insert(*scope, name.clone(), range.as_str().unwrap_or("*"));
            }
        }
    }

    record.package = PackageInfo {
        name: string_field(json, "name"),
        version: string_field(json, "version"),
        description: string_field(json, "description"),
        license: string_or_key(json.get("license"), "type"),
        repository: string_or_key(json.get("repository"), "url"),
        homepage: string_field(json, "homepage"),
        authors: people(json),
        keywords: json
            .get("keywords")
            .and_then(|v| v.as_array())
            .map(|a| a.iter().filter_map(|k| k.as_str().map(str::to_string)).collect())
            .unwrap_or_default(),
        workspace: json.get("workspaces").is_some(),
    };
    record
}

fn string_field(json: &Value, key: &str) -> Option<String> {
    json.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

/// `"x"` or `{ "<key>": "x" }`.
fn string_or_key(value: Option<&Value>, key: &str) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get(key).and_then(|v| v.as_str()).map(str::to_string),
        _ => None,
    }
}

fn people(json: &Value) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(author) = string_or_key(json.get("author"), "name") {
        out.push(author);
    }
    if let Some(list) = json.get("contributors").and_then(|v| v.as_array()) {
        out.extend(list.iter().filter_map(|p| string_or_key(Some(p), "name")));
    }
    out
}

/// Every script command declared in package.json.
pub fn scripts(json: &Value) -> Vec<String> {
    json.get("scripts")
        .and_then(|v| v.as_object())
        .map(|m| m.values().filter_map(|v| v.as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}

/// Tool name from the `packageManager` field, e.g. `pnpm@8.6.0` → `pnpm`.
pub fn package_manager_field(json: &Value) -> Option<String> {
    let field = json.get("packageManager")?.as_str()?;
    let name = field.split('@').next()?.trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::ManifestReader;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_package_json() {
        let json = r#"{
  "name": "my-app",
  "version": "1.2.0",
  "license": "MIT",
  "author": { "name": "Ada" },
  "repository": { "type": "git", "url": "https://example.com/my-app.git" },
  "keywords": ["web"],
  "packageManager": "pnpm@8.6.0",
  "scripts": { "dev": "vite", "test": "pnpm vitest" },
  "dependencies": {
    "express": "^4.18.2",
    "lodash": "^4.17.21"
  },
  "devDependencies": {
    "jest": "^29.0.0"
  },
  "peerDependencies": { "react": ">=17" }
}"#;
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{}", json).unwrap();
        let record = PackageJsonReader.read(f.path()).unwrap();
        assert_eq!(record.dependencies.len(), 2);
        assert_eq!(record.dependencies["express"], "^4.18.2");
        assert_eq!(record.dev_dependencies["jest"], "^29.0.0");
        assert_eq!(record.peer_dependencies["react"], ">=17");
        assert_eq!(record.package.name.as_deref(), Some("my-app"));
        assert_eq!(record.package.license.as_deref(), Some("MIT"));
        assert_eq!(record.package.authors, vec!["Ada"]);
        assert_eq!(
            record.package.repository.as_deref(),
            Some("https://example.com/my-app.git")
        );

        let value = read_package_json(f.path()).unwrap();
        assert_eq!(package_manager_field(&value).as_deref(), Some("pnpm"));
        assert_eq!(scripts(&value).len(), 2);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{{ nope").unwrap();
        assert!(PackageJsonReader.read(f.path()).is_err());
    }
}
