use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;

use crate::models::{DependencyScope, Ecosystem, ManifestRecord, PackageInfo};

pub struct ComposerJsonReader;

impl super::ManifestReader for ComposerJsonReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Composer
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        super::existing(root, "composer.json")
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let content = std::fs::read_to_string(path)?;
        let json: Value = serde_json::from_str(&content)?;
        Ok(parse_composer_json(path, &json))
    }
}

/// Platform requirements (`php`, `ext-*`, `lib-*`) are not packages.
fn is_platform(name: &str) -> bool {
    name == "php" || name.starts_with("ext-") || name.starts_with("lib-") || name == "composer-plugin-api"
}

fn parse_composer_json(path: &Path, json: &Value) -> ManifestRecord {
    let mut record = ManifestRecord::new(Ecosystem::Composer, path);

    for (section, scope) in [
        ("require", DependencyScope::Production),
        ("require-dev", DependencyScope::Development),
        ("suggest", DependencyScope::Optional),
    ] {
        if let Some(pkgs) = json.get(section).and_then(|v| v.as_object()) {
            for (name, constraint) in pkgs.iter().filter(|(n, _)| !is_platform(n)) {
                let version = if scope == DependencyScope::Optional {
                    "*"
                } else {
                    constraint.as_str().unwrap_or("*")
                };
                record.insert(scope, name.clone(), version);
            }
        }
    }

    let str_field = |key: &str| json.get(key).and_then(|v| v.as_str()).map(str::to_string);
    let license = match json.get("license") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Array(list)) => {
            let ids: Vec<&str> = list.iter().filter_map(|v| v.as_str()).collect();
            (!ids.is_empty()).then(|| ids.join(" OR "))
        }
        _ => None,
    };

    record.package = PackageInfo {
        name: str_field("name"),
        version: str_field("version"),
        description: str_field("description"),
        license,
        repository: json
            .pointer("/support/source")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        homepage: str_field("homepage"),
        authors: json
            .get("authors")
            .and_then(|v| v.as_array())
            .map(|a| {
                a.iter()
                    .filter_map(|p| p.get("name").and_then(|n| n.as_str()).map(str::to_string))
                    .collect()
            })
            .unwrap_or_default(),
        keywords: json
            .get("keywords")
            .and_then(|v| v.as_array())
            .map(|a| a.iter().filter_map(|k| k.as_str().map(str::to_string)).collect())
            .unwrap_or_default(),
        workspace: false,
    };
    record
}
