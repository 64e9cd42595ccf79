//! Workspace-level analysis: discover every project root, profile each in
//! turn and summarize components and languages across them.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::ScanConfig;
use crate::error::{ensure_root, ScanResult};
use crate::models::{
    ComponentKind, ComponentProfile, ComponentRef, LanguageTotal, RootFailure, WorkspaceProfile,
    WorkspaceSummary,
};
use crate::profile::{AnalysisOptions, ProjectAnalyzer};

pub mod discover;

pub use discover::discover_roots;

pub struct WorkspaceAnalyzer {
    catalog: Arc<Catalog>,
    scan: ScanConfig,
}

impl WorkspaceAnalyzer {
    pub fn new(catalog: Arc<Catalog>, scan: ScanConfig) -> Self {
        Self { catalog, scan }
    }

    /// Profile every root under `root`, one after another.
    ///
    /// The cancellation token is shared with every root and also checked
    /// between roots. A root that fails is recorded in `failures`; the rest
    /// still run.
    pub async fn analyze(&self, root: &Path, options: &AnalysisOptions) -> ScanResult<WorkspaceProfile> {
        ensure_root(root)?;

        let roots = discover_roots(root, &self.scan.ignore, &self.catalog.project);
        tracing::info!(root = %root.display(), roots = roots.len(), "workspace roots discovered");

        let analyzer = ProjectAnalyzer::new(Arc::clone(&self.catalog), self.scan.clone());
        let mut profiles = Vec::new();
        let mut failures = Vec::new();
        let mut cancelled = false;

        for workspace_root in &roots {
            if options.cancel.is_cancelled() {
                cancelled = true;
                break;
            }
            match analyzer.analyze(&workspace_root.path, options).await {
                Ok(profile) => {
                    cancelled |= profile.cancelled;
                    profiles.push((workspace_root.id.clone(), profile));
                }
                Err(e) => {
                    tracing::warn!(root_id = %workspace_root.id, path = %workspace_root.path.display(), error = %e, "root analysis failed");
                    failures.push(RootFailure {
                        root_id: workspace_root.id.clone(),
                        path: workspace_root.path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        let summary = summarize(&profiles);
        Ok(WorkspaceProfile {
            root: root.to_path_buf(),
            roots,
            profiles: profiles.into_iter().map(|(_, p)| p).collect(),
            summary,
            failures,
            cancelled,
        })
    }
}

/// Flatten every root's components into per-kind lists and roll up languages.
pub fn summarize(profiles: &[(String, ComponentProfile)]) -> WorkspaceSummary {
    let mut summary = WorkspaceSummary::default();

    for (root_id, profile) in profiles {
        for component in &profile.components {
            let entry = ComponentRef {
                root_id: root_id.clone(),
                component_id: component.id.clone(),
                name: component.name.clone(),
                framework: component.framework.clone(),
                path: component.path.clone(),
            };
            match component.kind {
                ComponentKind::Frontend => summary.frontend.push(entry),
                ComponentKind::Backend => summary.backend.push(entry),
                ComponentKind::Service | ComponentKind::Unknown => summary.unknown.push(entry),
            }
        }

        for stat in &profile.languages {
            match summary.languages.iter_mut().find(|t| t.name == stat.name) {
                Some(total) => {
                    total.files += stat.files;
                    total.lines += stat.lines;
                    total.roots += 1;
                }
                None => summary.languages.push(LanguageTotal {
                    name: stat.name.clone(),
                    files: stat.files,
                    lines: stat.lines,
                    roots: 1,
                }),
            }
        }
    }

    summary.languages.sort_by(|a, b| b.files.cmp(&a.files));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Phase;
    use crate::profile::{CancelToken, ProgressSink};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn analyzer() -> WorkspaceAnalyzer {
        WorkspaceAnalyzer::new(Arc::new(Catalog::default()), ScanConfig::default())
    }

    fn sibling_workspace() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("api")).unwrap();
        fs::create_dir_all(dir.path().join("web/src")).unwrap();
        fs::write(
            dir.path().join("api/package.json"),
            r#"{"name": "api", "dependencies": {"express": "^4.18.2"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("api/server.js"), "const express = require('express');\n").unwrap();
        fs::write(
            dir.path().join("web/package.json"),
            r#"{"name": "web", "dependencies": {"react": "^18.2.0", "react-dom": "^18.2.0"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("web/src/App.jsx"), "export const App = () => null;\n").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_sibling_frontend_and_backend() {
        let dir = sibling_workspace();
        let workspace = analyzer().analyze(dir.path(), &AnalysisOptions::default()).await.unwrap();

        assert_eq!(workspace.roots.len(), 2);
        assert_eq!(workspace.profiles.len(), 2);
        assert!(workspace.failures.is_empty());
        assert!(!workspace.cancelled);

        assert_eq!(workspace.summary.backend.len(), 1);
        assert_eq!(workspace.summary.backend[0].framework, "Express");
        assert_eq!(workspace.summary.backend[0].root_id, "proj-001");
        assert_eq!(workspace.summary.frontend.len(), 1);
        assert_eq!(workspace.summary.frontend[0].framework, "React");
        assert_eq!(workspace.summary.frontend[0].component_id, "web-frontend-1");
        assert!(workspace.summary.unknown.is_empty());

        let js = workspace
            .summary
            .languages
            .iter()
            .find(|l| l.name == "JavaScript")
            .unwrap();
        assert_eq!(js.roots, 2);
        assert_eq!(js.files, 2);

        assert_eq!(workspace.roots[1].id, "proj-002");
        assert_eq!(workspace.roots[1].relative_path, "web");
        assert_eq!(workspace.profiles[1].root, workspace.roots[1].path);
    }

    /// Deletes `target` once any root reports its last phase.
    struct RemoveAfterFirstRoot {
        target: PathBuf,
    }

    impl ProgressSink for RemoveAfterFirstRoot {
        fn report(&self, phase: Phase, _percent: u8) {
            if phase == Phase::Metadata && self.target.exists() {
                fs::remove_dir_all(&self.target).unwrap();
            }
        }
    }

    #[tokio::test]
    async fn test_failed_root_is_recorded_and_siblings_complete() {
        let dir = sibling_workspace();
        let options = AnalysisOptions {
            progress: Some(Arc::new(RemoveAfterFirstRoot {
                target: dir.path().join("web"),
            })),
            cancel: CancelToken::new(),
        };

        let workspace = analyzer().analyze(dir.path(), &options).await.unwrap();
        assert_eq!(workspace.roots.len(), 2);
        assert!(!workspace.cancelled);

        assert_eq!(workspace.profiles.len(), 1);
        assert_eq!(workspace.profiles[0].root, dir.path().join("api"));
        assert_eq!(workspace.summary.backend.len(), 1);
        assert!(workspace.summary.frontend.is_empty());

        assert_eq!(workspace.failures.len(), 1);
        assert_eq!(workspace.failures[0].root_id, "proj-002");
        assert_eq!(workspace.failures[0].path, dir.path().join("web"));
        assert!(workspace.failures[0].message.contains("path not found"));
    }

    #[tokio::test]
    async fn test_cancelled_before_first_root() {
        let dir = sibling_workspace();
        let options = AnalysisOptions {
            progress: None,
            cancel: CancelToken::new(),
        };
        options.cancel.cancel();

        let workspace = analyzer().analyze(dir.path(), &options).await.unwrap();
        assert!(workspace.cancelled);
        assert!(workspace.profiles.is_empty());
        assert_eq!(workspace.roots.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_workspace_root() {
        let result = analyzer()
            .analyze(Path::new("/definitely/not/here"), &AnalysisOptions::default())
            .await;
        assert!(result.is_err());
    }
}
