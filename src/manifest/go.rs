use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::{DependencyScope, Ecosystem, ManifestRecord};

pub struct GoModReader;

impl super::ManifestReader for GoModReader {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }

    fn locate(&self, root: &Path) -> Option<PathBuf> {
        super::existing(root, "go.mod")
    }

    fn read(&self, path: &Path) -> Result<ManifestRecord> {
        let content = std::fs::read_to_string(path)?;
        Ok(parse_go_mod(path, &content))
    }
}

/// Parse `go.mod`: the module path plus single-line and block `require`s.
/// Indirect requirements are kept as production dependencies.
fn parse_go_mod(path: &Path, content: &str) -> ManifestRecord {
    let mut record = ManifestRecord::new(Ecosystem::Go, path);
    let mut in_require = false;

    for line in content.lines() {
        let line = line.split("//").next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        if in_require {
            if line == ")" {
                in_require = false;
            } else {
                insert_requirement(&mut record, line);
            }
            continue;
        }
        if let Some(module) = line.strip_prefix("module ") {
            record.package.name = Some(module.trim().trim_matches('"').to_string());
        } else if let Some(rest) = line.strip_prefix("require") {
            let rest = rest.trim();
            if rest == "(" {
                in_require = true;
            } else {
                insert_requirement(&mut record, rest);
            }
        }
    }
    record
}

fn insert_requirement(record: &mut ManifestRecord, line: &str) {
    let mut parts = line.split_whitespace();
    if let Some(module) = parts.next() {
        let version = parts.next().unwrap_or("*");
        record.insert(DependencyScope::Production, module, version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go_mod() {
        let content = r#"module github.com/acme/api

go 1.21

require github.com/gin-gonic/gin v1.9.1

require (
	github.com/lib/pq v1.10.9
	golang.org/x/text v0.14.0 // indirect
)
"#;
        let record = parse_go_mod(Path::new("go.mod"), content);
        assert_eq!(record.package.name.as_deref(), Some("github.com/acme/api"));
        assert_eq!(record.dependencies["github.com/gin-gonic/gin"], "v1.9.1");
        assert_eq!(record.dependencies["github.com/lib/pq"], "v1.10.9");
        assert_eq!(record.dependencies.len(), 3);
    }
}
