//! Manifest readers normalizing each ecosystem into a [`ManifestRecord`].
//!
//! Readers are tried in a fixed priority order; the first manifest that parses
//! becomes the project's record. A manifest that exists but fails to parse is
//! logged and skipped.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::{Ecosystem, ManifestRecord};

pub mod cargo;
pub mod composer;
pub mod dotnet;
pub mod go;
pub mod java;
pub mod node;
pub mod python;
pub mod ruby;
pub mod toml_lines;

pub trait ManifestReader: Send + Sync {
    fn ecosystem(&self) -> Ecosystem;

    /// Path of this reader's manifest under `root`, when present.
    fn locate(&self, root: &Path) -> Option<PathBuf>;

    fn read(&self, path: &Path) -> Result<ManifestRecord>;
}

/// All readers in priority order.
pub fn readers() -> Vec<Box<dyn ManifestReader>> {
    vec![
        Box::new(node::PackageJsonReader),
        Box::new(cargo::CargoTomlReader),
        Box::new(python::PyprojectReader),
        Box::new(composer::ComposerJsonReader),
        Box::new(python::RequirementsReader),
        Box::new(go::GoModReader),
        Box::new(ruby::GemfileReader),
        Box::new(java::PomReader),
        Box::new(java::GradleReader),
        Box::new(dotnet::ProjectFileReader),
    ]
}

/// The project's manifest: the first one, in priority order, that parses.
pub fn read_manifest(root: &Path) -> Option<ManifestRecord> {
    readers()
        .iter()
        .find_map(|reader| read_with(reader.as_ref(), root))
}

/// Every manifest under `root` that parses, in priority order.
pub fn read_all(root: &Path) -> Vec<ManifestRecord> {
    readers()
        .iter()
        .filter_map(|reader| read_with(reader.as_ref(), root))
        .collect()
}

fn read_with(reader: &dyn ManifestReader, root: &Path) -> Option<ManifestRecord> {
    let path = reader.locate(root)?;
    match reader.read(&path) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(path = %path.display(), ecosystem = %reader.ecosystem(), error = %e, "failed to parse manifest");
            None
        }
    }
}

/// `root/name` when it is an existing file.
pub(crate) fn existing(root: &Path, name: &str) -> Option<PathBuf> {
    let path = root.join(name);
    path.is_file().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_priority_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask==2.0\n").unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"dependencies": {"express": "^4.18.0"}}"#,
        )
        .unwrap();

        let record = read_manifest(dir.path()).unwrap();
        assert_eq!(record.ecosystem, Ecosystem::Npm);
        assert_eq!(read_all(dir.path()).len(), 2);
    }

    #[test]
    fn test_broken_manifest_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{ not json").unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/x\n").unwrap();

        let record = read_manifest(dir.path()).unwrap();
        assert_eq!(record.ecosystem, Ecosystem::Go);
    }

    #[test]
    fn test_no_manifest() {
        let dir = TempDir::new().unwrap();
        assert!(read_manifest(dir.path()).is_none());
        assert!(read_all(dir.path()).is_empty());
    }
}
