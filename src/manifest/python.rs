use std::path::{Path, PathBuf};

use anyhow::Result;
use regex::Regex;

use super::toml_lines::{self, TomlDocument, TomlValue};
use crate::models::{DependencyScope, Ecosystem, ManifestRecord, PackageInfo};

/// Optional-dependency groups treated as development-only.
const DEV_GROUPS: &[&str] = &["dev", "develop", "test", "tests", "testing", "lint", "docs", "typing"];

/// PEP 508 requirement: name, optional extras, then the version spec.
fn requirement_re() -> Result<Regex> {
    Ok(Regex::new(r"^\s*([A-Za-z0-9][A-Za-z0-9._-]*)\s*(?:\[[^\]]*\])?\s*([^;#]*)")?)
}

fn parse_requirement(re: &Regex, line: &str) -> Option<(String, String)> {
    let caps = re.captures(line)?;
    let name = caps[1].to_string();
    let spec = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
    let spec = if spec.is_empty() { "*" } else { spec };
    Some((name, spec.to_string()))
}

pub struct PyprojectReader;

impl super::ManifestReader for PyprojectReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Pypi
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        super::existing(root, "pyproject.toml")
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let content = std::fs::read_to_string(path)?;
        let doc = toml_lines::parse(&content)?;
        parse_pyproject(path, &doc)
    }
}

fn parse_pyproject(path: &Path, doc: &TomlDocument) -> Result<ManifestRecord> {
    let re = requirement_re()?;
    let mut record = ManifestRecord::new(Ecosystem::Pypi, path);

    // PEP 621
    for req in doc.get_array("project", "dependencies") {
        if let Some((name, spec)) = parse_requirement(&re, &req) {
            record.insert(DependencyScope::Production, name, spec);
        }
    }
    for entry in doc.section("project.optional-dependencies") {
        let scope = group_scope(&entry.key, DependencyScope::Optional);
        if let TomlValue::Array(items) = &entry.value {
            for req in items {
                if let Some((name, spec)) = parse_requirement(&re, req) {
                    record.insert(scope, name, spec);
                }
            }
        }
    }
    // PEP 735
    for entry in doc.section("dependency-groups") {
        if let TomlValue::Array(items) = &entry.value {
            for req in items {
                if let Some((name, spec)) = parse_requirement(&re, req) {
                    record.insert(DependencyScope::Development, name, spec);
                }
            }
        }
    }

    // Poetry
    for entry in &doc.entries {
        let scope = match entry.section.as_str() {
            "tool.poetry.dependencies" => DependencyScope::Production,
            "tool.poetry.dev-dependencies" => DependencyScope::Development,
            s if s.starts_with("tool.poetry.group.") && s.ends_with(".dependencies") => {
                DependencyScope::Development
            }
            _ => continue,
        };
        if entry.key.eq_ignore_ascii_case("python") {
            continue;
        }
        let version = match &entry.value {
            TomlValue::Str(v) => v.clone(),
            value => value.table_get("version").unwrap_or("*").to_string(),
        };
        record.insert(scope, entry.key.clone(), version);
    }

    let meta = |key: &str| {
        doc.get_str("project", key)
            .or_else(|| doc.get_str("tool.poetry", key))
    };
    let license = doc
        .get("project", "license")
        .and_then(|e| match &e.value {
            TomlValue::Str(s) => Some(s.clone()),
            value => value.table_get("text").map(str::to_string),
        })
        .or_else(|| doc.get_str("tool.poetry", "license"));

    record.package = PackageInfo {
        name: meta("name"),
        version: meta("version"),
        description: meta("description"),
        license,
        repository: doc
            .get_str("project.urls", "Repository")
            .or_else(|| doc.get_str("project.urls", "Source"))
            .or_else(|| doc.get_str("tool.poetry", "repository")),
        homepage: doc
            .get_str("project.urls", "Homepage")
            .or_else(|| doc.get_str("tool.poetry", "homepage")),
        authors: authors(doc),
        keywords: {
            let mut k = doc.get_array("project", "keywords");
            if k.is_empty() {
                k = doc.get_array("tool.poetry", "keywords");
            }
            k
        },
        workspace: doc.has_section("tool.uv.workspace"),
    };
    Ok(record)
}

fn group_scope(group: &str, default: DependencyScope) -> DependencyScope {
    if DEV_GROUPS.contains(&group.to_lowercase().as_str()) {
        DependencyScope::Development
    } else {
        default
    }
}

/// PEP 621 `authors = [{ name = "..." }]` or poetry's `["Name <mail>"]`.
fn authors(doc: &TomlDocument) -> Vec<String> {
    if let Some(entry) = doc.get("project", "authors") {
        let names: Vec<String> = entry
            .raw
            .split('{')
            .skip(1)
            .filter_map(|chunk| {
                let (_, rest) = chunk.split_once("name")?;
                let rest = rest.trim_start().strip_prefix('=')?.trim_start();
                let quote = rest.chars().next().filter(|c| matches!(c, '"' | '\''))?;
                rest[1..].split(quote).next().map(str::to_string)
            })
            .collect();
        if !names.is_empty() {
            return names;
        }
    }
    doc.get_array("tool.poetry", "authors")
        .into_iter()
        .map(|a| a.split('<').next().unwrap_or(&a).trim().to_string())
        .collect()
}

/// `requirements.txt`, plus `requirements-dev.txt` beside it as development
/// dependencies.
pub struct RequirementsReader;

impl super::ManifestReader for RequirementsReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Pypi
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        super::existing(root, "requirements.txt")
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let re = requirement_re()?;
        let mut record = ManifestRecord::new(Ecosystem::Pypi, path);
        let content = std::fs::read_to_string(path)?;
        parse_requirements_txt(&re, &content, DependencyScope::Production, &mut record);

        if let Some(dir) = path.parent() {
            for dev in ["requirements-dev.txt", "requirements_dev.txt", "dev-requirements.txt"] {
                if let Ok(content) = std::fs::read_to_string(dir.join(dev)) {
                    parse_requirements_txt(&re, &content, DependencyScope::Development, &mut record);
                }
            }
        }
        Ok(record)
    }
}

fn parse_requirements_txt(re: &Regex, content: &str, scope: DependencyScope, record: &mut ManifestRecord) {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') || line.contains("://") {
            continue;
        }
        if let Some((name, spec)) = parse_requirement(re, line) {
            record.insert(scope, name, spec);
        }
    }
}
