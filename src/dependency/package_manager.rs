use std::collections::BTreeSet;
use std::path::Path;

use crate::catalog::project::ProjectTables;
use crate::manifest::node::{package_manager_field, read_package_json, scripts};
use crate::models::PackageManager;
use crate::scanner::glob_files;

/// Package managers in use under `root`.
///
/// Lock files decide first. Without any, package.json is consulted (its
/// `packageManager` field, then command prefixes in its scripts), and as a
/// last resort each manifest implies its ecosystem's default manager.
pub fn detect_package_manager(root: &Path, tables: &ProjectTables) -> BTreeSet<PackageManager> {
    let mut managers: BTreeSet<PackageManager> = tables
        .lock_files
        .iter()
        .filter(|(file, _)| root.join(file).is_file())
        .map(|(_, pm)| *pm)
        .collect();
    if !managers.is_empty() {
        return managers;
    }

    let package_json = root.join("package.json");
    if package_json.is_file() {
        match read_package_json(&package_json) {
            Ok(json) => {
                if let Some(id) = package_manager_field(&json) {
                    if let Some(pm) = parse_manager(&id) {
                        managers.insert(pm);
                    }
                }
                for script in scripts(&json) {
                    managers.extend(script_managers(&script, tables));
                }
            }
            Err(e) => tracing::debug!(error = %e, "package.json unreadable for manager detection"),
        }
    }
    if !managers.is_empty() {
        return managers;
    }

    tables
        .manifest_managers
        .iter()
        .filter(|(pattern, _)| !glob_files(root, pattern).is_empty())
        .map(|(_, pm)| *pm)
        .collect()
}

/// Managers invoked anywhere in a script string, including after `&&`.
fn script_managers(script: &str, tables: &ProjectTables) -> Vec<PackageManager> {
    let padded = format!(" {}", script);
    tables
        .script_hints
        .iter()
        .filter(|(prefix, _)| {
            padded.contains(&format!(" {}", prefix)) || padded.contains(&format!("&&{}", prefix))
        })
        .map(|(_, pm)| *pm)
        .collect()
}

fn parse_manager(id: &str) -> Option<PackageManager> {
    match id.to_lowercase().as_str() {
        "npm" => Some(PackageManager::Npm),
        "yarn" => Some(PackageManager::Yarn),
        "pnpm" => Some(PackageManager::Pnpm),
        "bun" => Some(PackageManager::Bun),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn detect(dir: &TempDir) -> Vec<PackageManager> {
        detect_package_manager(dir.path(), &ProjectTables::default())
            .into_iter()
            .collect()
    }

    #[test]
    fn test_lock_files_win() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"scripts": {"dev": "pnpm run x"}}"#).unwrap();
        fs::write(dir.path().join("yarn.lock"), "").unwrap();
        fs::write(dir.path().join("package-lock.json"), "{}").unwrap();

        assert_eq!(detect(&dir), vec![PackageManager::Npm, PackageManager::Yarn]);
    }

    #[test]
    fn test_package_json_field_and_scripts() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"packageManager": "pnpm@8.6.0", "scripts": {"build": "tsc && bun run bundle.ts"}}"#,
        )
        .unwrap();

        assert_eq!(detect(&dir), vec![PackageManager::Pnpm, PackageManager::Bun]);
    }

    #[test]
    fn test_manifest_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"scripts": {"start": "node index.js"}}"#).unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask\n").unwrap();

        assert_eq!(detect(&dir), vec![PackageManager::Npm, PackageManager::Pip]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(detect(&dir).is_empty());
    }
}
