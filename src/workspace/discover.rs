use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::catalog::project::ProjectTables;
use crate::dependency::detect_package_manager;
use crate::models::{ComponentKind, WorkspaceRoot};
use crate::scanner::Walker;

/// Find the independent project roots under `root`.
///
/// Every directory holding at least one known manifest is a root. Roots are
/// sorted by relative path string and numbered `proj-001`, `proj-002`, ... When no manifest
/// exists anywhere, the workspace root itself is the only root.
pub fn discover_roots(root: &Path, ignore: &[String], tables: &ProjectTables) -> Vec<WorkspaceRoot> {
    let patterns: Vec<glob::Pattern> = tables
        .manifests
        .iter()
        .filter_map(|m| glob::Pattern::new(m).ok())
        .collect();

    // Keyed by relative path string so ids follow plain string order.
    let mut grouped: BTreeMap<String, (PathBuf, Vec<PathBuf>)> = BTreeMap::new();
    let walker = Walker::new(root, ignore);
    for path in walker.files() {
        let is_manifest = path
            .file_name()
            .is_some_and(|n| patterns.iter().any(|p| p.matches(&n.to_string_lossy())));
        if !is_manifest {
            continue;
        }
        if let Some(dir) = path.parent() {
            grouped
                .entry(walker.relative(dir))
                .or_insert_with(|| (dir.to_path_buf(), Vec::new()))
                .1
                .push(path);
        }
    }
    if grouped.is_empty() {
        grouped.insert(String::new(), (root.to_path_buf(), Vec::new()));
    }

    grouped
        .into_iter()
        .enumerate()
        .map(|(index, (relative, (dir, manifests)))| {
            let relative_path = if relative.is_empty() {
                ".".to_string()
            } else {
                relative
            };
            let hint_source = if relative_path == "." {
                dir.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            } else {
                relative_path.clone()
            };
            WorkspaceRoot {
                id: format!("proj-{:03}", index + 1),
                package_managers: detect_package_manager(&dir, tables),
                type_hints: type_hints(&hint_source, tables),
                path: dir,
                relative_path,
                manifests,
            }
        })
        .collect()
}

/// Component kinds suggested by tokens in a root's relative path.
pub fn type_hints(relative_path: &str, tables: &ProjectTables) -> BTreeSet<ComponentKind> {
    let lower = relative_path.to_lowercase();
    tables
        .type_hints
        .iter()
        .filter(|(token, _)| lower.contains(token.as_str()))
        .map(|(_, kind)| *kind)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PackageManager;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_roots_grouped_and_numbered() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("services/api")).unwrap();
        fs::create_dir_all(dir.path().join("apps/frontend")).unwrap();
        fs::create_dir_all(dir.path().join("apps/frontend/node_modules/x")).unwrap();
        fs::write(dir.path().join("services/api/go.mod"), "module api\n").unwrap();
        fs::write(dir.path().join("services/api/go.sum"), "").unwrap();
        fs::write(dir.path().join("apps/frontend/package.json"), "{}").unwrap();
        fs::write(dir.path().join("apps/frontend/yarn.lock"), "").unwrap();
        fs::write(dir.path().join("apps/frontend/node_modules/x/package.json"), "{}").unwrap();

        let roots = discover_roots(dir.path(), &[], &ProjectTables::default());
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].id, "proj-001");
        assert_eq!(roots[0].relative_path, "apps/frontend");
        assert_eq!(roots[1].id, "proj-002");
        assert_eq!(roots[1].relative_path, "services/api");

        assert!(roots[0].type_hints.contains(&ComponentKind::Frontend));
        assert!(roots[1].type_hints.contains(&ComponentKind::Backend));
        assert!(roots[1].type_hints.contains(&ComponentKind::Service));
        assert_eq!(roots[0].package_managers, BTreeSet::from([PackageManager::Yarn]));
        assert_eq!(roots[1].manifests.len(), 1);
    }

    #[test]
    fn test_ids_follow_string_order_of_paths() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("api/v2")).unwrap();
        fs::create_dir_all(dir.path().join("api-gateway")).unwrap();
        fs::write(dir.path().join("api/v2/package.json"), "{}").unwrap();
        fs::write(dir.path().join("api-gateway/package.json"), "{}").unwrap();

        let roots = discover_roots(dir.path(), &[], &ProjectTables::default());
        let order: Vec<(&str, &str)> = roots
            .iter()
            .map(|r| (r.id.as_str(), r.relative_path.as_str()))
            .collect();
        assert_eq!(order, vec![("proj-001", "api-gateway"), ("proj-002", "api/v2")]);
        assert_eq!(roots[1].path, dir.path().join("api/v2"));
    }

    #[test]
    fn test_root_manifest_and_multiple_manifests_per_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("pyproject.toml"), "[project]\nname = \"x\"\n").unwrap();

        let roots = discover_roots(dir.path(), &[], &ProjectTables::default());
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].relative_path, ".");
        assert_eq!(roots[0].manifests.len(), 2);
    }

    #[test]
    fn test_falls_back_to_workspace_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), "hi").unwrap();

        let roots = discover_roots(dir.path(), &[], &ProjectTables::default());
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].path, dir.path());
        assert!(roots[0].manifests.is_empty());
    }
}
