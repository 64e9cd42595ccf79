use std::path::Path;

use anyhow::Result;

use crate::catalog::project::ProjectTables;
use crate::license::{license_kind, normalize_license};
use crate::models::{DocumentationProfile, ManifestRecord, ProjectMetadata};

/// Fallback project name: the root's directory name.
pub fn directory_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}

/// `git+https://host/repo.git` → `https://host/repo`.
fn clean_repository(url: &str) -> String {
    let url = url.trim();
    let url = url.strip_prefix("git+").unwrap_or(url);
    url.strip_suffix(".git").unwrap_or(url).to_string()
}

/// Project metadata from the manifest, falling back to the directory name and
/// the LICENSE file.
pub fn collect_metadata(
    root: &Path,
    manifest: Option<&ManifestRecord>,
    documentation: &DocumentationProfile,
    tables: &ProjectTables,
) -> Result<ProjectMetadata> {
    let package = manifest.map(|m| m.package.clone()).unwrap_or_default();

    let license = package
        .license
        .as_deref()
        .and_then(normalize_license)
        .or_else(|| documentation.license.clone());
    let is_monorepo = package.workspace
        || tables
            .monorepo_markers
            .iter()
            .any(|m| root.join(m.as_str()).is_file());

    Ok(ProjectMetadata {
        name: package
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| directory_name(root)),
        version: package.version,
        description: package.description,
        license_kind: license.as_deref().map(license_kind),
        license,
        repository: package.repository.as_deref().map(clean_repository),
        homepage: package.homepage,
        authors: package.authors,
        keywords: package.keywords,
        ecosystem: manifest.map(|m| m.ecosystem),
        is_git_repo: root.join(".git").exists(),
        is_monorepo,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ecosystem, LicenseKind, PackageInfo};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_metadata_from_manifest() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("pnpm-workspace.yaml"), "packages: []\n").unwrap();

        let mut record = ManifestRecord::new(Ecosystem::Npm, dir.path().join("package.json"));
        record.package = PackageInfo {
            name: Some("acme-web".to_string()),
            version: Some("2.0.0".to_string()),
            license: Some("MIT/Apache-2.0".to_string()),
            repository: Some("git+https://github.com/acme/web.git".to_string()),
            ..Default::default()
        };

        let meta = collect_metadata(
            dir.path(),
            Some(&record),
            &DocumentationProfile::default(),
            &ProjectTables::default(),
        )
        .unwrap();
        assert_eq!(meta.name, "acme-web");
        assert_eq!(meta.license.as_deref(), Some("MIT OR Apache-2.0"));
        assert_eq!(meta.license_kind, Some(LicenseKind::Permissive));
        assert_eq!(meta.repository.as_deref(), Some("https://github.com/acme/web"));
        assert_eq!(meta.ecosystem, Some(Ecosystem::Npm));
        assert!(meta.is_git_repo && meta.is_monorepo);
    }

    #[test]
    fn test_fallbacks_without_manifest() {
        let dir = TempDir::new().unwrap();
        let docs = DocumentationProfile {
            license: Some("GPL-3.0".to_string()),
            ..Default::default()
        };
        let meta = collect_metadata(dir.path(), None, &docs, &ProjectTables::default()).unwrap();
        assert_eq!(meta.name, directory_name(dir.path()));
        assert_eq!(meta.license.as_deref(), Some("GPL-3.0"));
        assert_eq!(meta.license_kind, Some(LicenseKind::StrongCopyleft));
        assert!(!meta.is_git_repo && !meta.is_monorepo);
        assert_eq!(meta.ecosystem, None);
    }
}
