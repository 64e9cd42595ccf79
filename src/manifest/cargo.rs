use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::Result;

use super::toml_lines::{self, TomlDocument, TomlValue};
use crate::models::{DependencyScope, Ecosystem, ManifestRecord, PackageInfo};

pub struct CargoTomlReader;

impl super::ManifestReader for CargoTomlReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Cargo
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        super::existing(root, "Cargo.toml")
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let content = std::fs::read_to_string(path)?;
        let doc = toml_lines::parse(&content)?;
        Ok(parse_cargo_toml(path, &doc))
    }
}

fn scope_of(section: &str) -> Option<DependencyScope> {
    let last = section.rsplit('.').next().unwrap_or(section);
    match last {
        "dependencies" => Some(DependencyScope::Production),
        "dev-dependencies" | "build-dependencies" => Some(DependencyScope::Development),
        _ => None,
    }
}

fn parse_cargo_toml(path: &Path, doc: &TomlDocument) -> ManifestRecord {
    let mut record = ManifestRecord::new(Ecosystem::Cargo, path);

    // `[dependencies.serde]` style: one section per dependency.
    let mut detailed: BTreeSet<(String, DependencyScope)> = BTreeSet::new();

    for entry in &doc.entries {
        if let Some(scope) = scope_of(&entry.section) {
            // `serde.workspace = true` is a dotted key on the dependency name.
            let name = entry.key.split('.').next().unwrap_or(&entry.key);
            record.insert(scope, name, version_of(&entry.value));
            continue;
        }
        if let Some((parent, name)) = entry.section.rsplit_once('.') {
            if let Some(scope) = scope_of(parent) {
                if entry.key == "version" {
                    if let Some(v) = entry.value.as_str() {
                        record.insert(scope, name, v);
                    }
                }
                detailed.insert((name.to_string(), scope));
            }
        }
    }
    for section in &doc.sections {
        if let Some((parent, name)) = section.rsplit_once('.') {
            if let Some(scope) = scope_of(parent) {
                detailed.insert((name.to_string(), scope));
            }
        }
    }
    for (name, scope) in detailed {
        record.insert(scope, name, "*");
    }

    record.package = PackageInfo {
        name: doc.get_str("package", "name"),
        version: doc.get_str("package", "version"),
        description: doc.get_str("package", "description"),
        license: doc.get_str("package", "license"),
        repository: doc.get_str("package", "repository"),
        homepage: doc.get_str("package", "homepage"),
        authors: doc.get_array("package", "authors"),
        keywords: doc.get_array("package", "keywords"),
        workspace: doc.has_section("workspace"),
    };
    record
}

/// Version requirement of a dependency value; `*` for path/git dependencies.
fn version_of(value: &TomlValue) -> String {
    match value {
        TomlValue::Str(v) => v.clone(),
        TomlValue::Table(_) => value.table_get("version").unwrap_or("*").to_string(),
        _ => "*".to_string(),
    }
}
