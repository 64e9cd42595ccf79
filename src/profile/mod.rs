//! Per-root analysis: eight phases run strictly in order, each filling its
//! slice of the [`ComponentProfile`].
//!
//! A phase that fails is logged and leaves its fields at their defaults; the
//! pipeline moves on. Cancellation is checked before every phase and yields
//! the partial profile. Only an unusable root is an error.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::Utc;

use crate::catalog::Catalog;
use crate::config::ScanConfig;
use crate::dependency::DependencyResolver;
use crate::error::{ensure_root, ScanResult};
use crate::framework::{BackendDetector, FrontendDetector};
use crate::languages::LanguageProfiler;
use crate::manifest::read_manifest;
use crate::models::{ComponentProfile, Phase};
use crate::testing::TestingDetector;

pub mod components;
pub mod configuration;
pub mod documentation;
pub mod metadata;
pub mod structure;

pub use components::derive_components;

/// Receives progress after each phase: the phase just finished and the
/// overall percentage.
pub trait ProgressSink: Send + Sync {
    fn report(&self, phase: Phase, percent: u8);
}

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Default)]
pub struct AnalysisOptions {
    pub progress: Option<Arc<dyn ProgressSink>>,
    pub cancel: CancelToken,
}

pub struct ProjectAnalyzer {
    catalog: Arc<Catalog>,
    scan: ScanConfig,
}

impl ProjectAnalyzer {
    pub fn new(catalog: Arc<Catalog>, scan: ScanConfig) -> Self {
        Self { catalog, scan }
    }

    /// Profile one project root.
    pub async fn analyze(&self, root: &Path, options: &AnalysisOptions) -> ScanResult<ComponentProfile> {
        ensure_root(root)?;

        let started_at = Utc::now();
        let mut profile = ComponentProfile {
            root: root.to_path_buf(),
            languages: Vec::new(),
            configuration: Default::default(),
            frontend: Default::default(),
            backend: Default::default(),
            testing: Default::default(),
            dependencies: Default::default(),
            structure: Default::default(),
            documentation: Default::default(),
            metadata: Default::default(),
            components: Vec::new(),
            completed_phases: Vec::new(),
            cancelled: false,
            started_at,
            finished_at: started_at,
        };

        let total = Phase::ALL.len();
        for (index, phase) in Phase::ALL.into_iter().enumerate() {
            if options.cancel.is_cancelled() {
                tracing::info!(root = %root.display(), %phase, "analysis cancelled");
                profile.cancelled = true;
                break;
            }

            tracing::debug!(root = %root.display(), %phase, "phase started");
            match self.run_phase(phase, root, &mut profile).await {
                Ok(()) => profile.completed_phases.push(phase),
                Err(e) => {
                    tracing::warn!(root = %root.display(), %phase, error = %e, "phase failed, keeping defaults")
                }
            }

            if let Some(sink) = &options.progress {
                sink.report(phase, ((index + 1) * 100 / total) as u8);
            }
        }

        let name = if profile.metadata.name.is_empty() {
            metadata::directory_name(root)
        } else {
            profile.metadata.name.clone()
        };
        profile.components = derive_components(
            root,
            &name,
            &profile.frontend,
            &profile.backend,
            &profile.languages,
        );
        profile.finished_at = Utc::now();
        Ok(profile)
    }

    async fn run_phase(&self, phase: Phase, root: &Path, profile: &mut ComponentProfile) -> Result<()> {
        let tables = &self.catalog.project;
        match phase {
            Phase::Language => {
                profile.languages = LanguageProfiler::new(Arc::clone(&self.catalog), &self.scan)
                    .analyze(root)
                    .await;
            }
            Phase::Configuration => {
                profile.configuration = configuration::detect_configuration(root, tables)?;
            }
            Phase::Framework => self.detect_frameworks(root, profile).await?,
            Phase::Testing => {
                profile.testing = TestingDetector::new(Arc::clone(&self.catalog), &self.scan)
                    .detect(root)
                    .await?;
            }
            Phase::Dependency => {
                profile.dependencies = DependencyResolver::new(Arc::clone(&self.catalog)).resolve(root)?;
            }
            Phase::ProjectStructure => {
                let (dir, ignore) = (root.to_path_buf(), self.scan.ignore.clone());
                let catalog = Arc::clone(&self.catalog);
                profile.structure = tokio::task::spawn_blocking(move || {
                    structure::analyze_structure(&dir, &ignore, &catalog.project, &catalog.testing.directories)
                })
                .await??;
            }
            Phase::Documentation => {
                profile.documentation = documentation::analyze_documentation(root, tables)?;
            }
            Phase::Metadata => {
                let manifest = match &profile.dependencies.manifest {
                    Some(m) => Some(m.clone()),
                    None => read_manifest(root),
                };
                profile.metadata =
                    metadata::collect_metadata(root, manifest.as_ref(), &profile.documentation, tables)?;
            }
        }
        Ok(())
    }

    /// Frontend and backend detection side by side on the blocking pool. Each
    /// side that succeeds is kept even when the other fails.
    async fn detect_frameworks(&self, root: &Path, profile: &mut ComponentProfile) -> Result<()> {
        let frontend = FrontendDetector::new(Arc::clone(&self.catalog), self.scan.ignore.clone());
        let backend = BackendDetector::new(Arc::clone(&self.catalog));
        let (frontend_root, backend_root) = (root.to_path_buf(), root.to_path_buf());

        let (frontend, backend) = tokio::join!(
            tokio::task::spawn_blocking(move || frontend.detect(&frontend_root)),
            tokio::task::spawn_blocking(move || backend.detect(&backend_root)),
        );

        let mut failures = Vec::new();
        match frontend {
            Ok(Ok(p)) => profile.frontend = p,
            Ok(Err(e)) => failures.push(format!("frontend: {}", e)),
            Err(e) => failures.push(format!("frontend task: {}", e)),
        }
        match backend {
            Ok(Ok(p)) => profile.backend = p,
            Ok(Err(e)) => failures.push(format!("backend: {}", e)),
            Err(e) => failures.push(format!("backend task: {}", e)),
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(failures.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::models::{ComponentKind, TestingProfile, UNKNOWN_FRAMEWORK};
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn analyzer() -> ProjectAnalyzer {
        ProjectAnalyzer::new(Arc::new(Catalog::default()), ScanConfig::default())
    }

    /// Records every report and cancels once `stop_after` has finished.
    struct Recorder {
        seen: Mutex<Vec<(Phase, u8)>>,
        stop_after: Option<Phase>,
        cancel: CancelToken,
    }

    impl ProgressSink for Recorder {
        fn report(&self, phase: Phase, percent: u8) {
            self.seen.lock().unwrap().push((phase, percent));
            if self.stop_after == Some(phase) {
                self.cancel.cancel();
            }
        }
    }

    fn react_app(dir: &Path) {
        fs::write(
            dir.join("package.json"),
            r#"{"name": "web", "dependencies": {"react": "^18.2.0", "react-router-dom": "^6.14.0"}}"#,
        )
        .unwrap();
        fs::create_dir(dir.join("src")).unwrap();
        fs::write(dir.join("src/App.jsx"), "export default function App() {\n  return null;\n}\n").unwrap();
    }

    #[tokio::test]
    async fn test_empty_directory_profile() {
        let dir = TempDir::new().unwrap();
        let profile = analyzer().analyze(dir.path(), &AnalysisOptions::default()).await.unwrap();

        assert!(profile.languages.is_empty());
        assert_eq!(profile.frontend.framework.name, UNKNOWN_FRAMEWORK);
        assert_eq!(profile.backend.framework.name, UNKNOWN_FRAMEWORK);
        assert!(profile.dependencies.classified.all.is_empty());
        assert_eq!(profile.completed_phases, Phase::ALL.to_vec());
        assert!(!profile.cancelled);
        assert_eq!(profile.components.len(), 1);
        assert_eq!(profile.components[0].kind, ComponentKind::Unknown);
    }

    #[tokio::test]
    async fn test_react_project_profile() {
        let dir = TempDir::new().unwrap();
        react_app(dir.path());

        let profile = analyzer().analyze(dir.path(), &AnalysisOptions::default()).await.unwrap();
        assert!(profile.languages.iter().any(|l| l.name == "JavaScript"));
        assert_eq!(profile.frontend.framework.name, "React");
        assert!(profile.frontend.has_router);
        assert_eq!(profile.dependencies.total, 2);
        assert_eq!(profile.metadata.name, "web");
        assert_eq!(profile.components[0].id, "web-frontend-1");
        assert!(profile.finished_at >= profile.started_at);
    }

    #[tokio::test]
    async fn test_cancel_after_framework_phase() {
        let dir = TempDir::new().unwrap();
        react_app(dir.path());
        fs::write(dir.path().join("README.md"), "# Web\n").unwrap();

        let cancel = CancelToken::new();
        let recorder = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
            stop_after: Some(Phase::Framework),
            cancel: cancel.clone(),
        });
        let options = AnalysisOptions {
            progress: Some(recorder.clone()),
            cancel,
        };

        let profile = analyzer().analyze(dir.path(), &options).await.unwrap();
        assert!(profile.cancelled);
        assert_eq!(
            profile.completed_phases,
            vec![Phase::Language, Phase::Configuration, Phase::Framework]
        );
        assert!(!profile.languages.is_empty());
        assert_eq!(profile.frontend.framework.name, "React");
        assert!(profile.backend.runtime.is_some());
        assert_eq!(profile.testing, TestingProfile::default());
        assert!(profile.dependencies.classified.all.is_empty());
        assert!(!profile.documentation.has_readme);
        assert!(profile.metadata.name.is_empty());

        let seen = recorder.seen.lock().unwrap();
        let percents: Vec<u8> = seen.iter().map(|(_, p)| *p).collect();
        assert_eq!(percents, vec![12, 25, 37]);
    }

    #[tokio::test]
    async fn test_progress_is_monotonic_to_100() {
        let dir = TempDir::new().unwrap();
        let recorder = Arc::new(Recorder {
            seen: Mutex::new(Vec::new()),
            stop_after: None,
            cancel: CancelToken::new(),
        });
        let options = AnalysisOptions {
            progress: Some(recorder.clone()),
            cancel: CancelToken::new(),
        };
        analyzer().analyze(dir.path(), &options).await.unwrap();

        let seen = recorder.seen.lock().unwrap();
        assert_eq!(seen.len(), 8);
        assert!(seen.windows(2).all(|w| w[0].1 < w[1].1));
        assert_eq!(seen.last(), Some(&(Phase::Metadata, 100)));
    }

    #[tokio::test]
    async fn test_failed_phase_keeps_defaults_and_later_phases_run() {
        let dir = TempDir::new().unwrap();
        react_app(dir.path());
        fs::write(dir.path().join("README.md"), "# Web\n").unwrap();
        fs::write(dir.path().join("App.test.jsx"), "it('works', () => {});\n").unwrap();

        let mut catalog = Catalog::default();
        catalog.testing.file_patterns.push("[".to_string());
        let analyzer = ProjectAnalyzer::new(Arc::new(catalog), ScanConfig::default());

        let profile = analyzer.analyze(dir.path(), &AnalysisOptions::default()).await.unwrap();
        assert!(!profile.cancelled);
        assert!(!profile.completed_phases.contains(&Phase::Testing));
        assert_eq!(profile.completed_phases.len(), 7);
        assert_eq!(profile.testing, TestingProfile::default());
        assert_eq!(profile.dependencies.total, 2);
        assert!(profile.documentation.has_readme);
        assert_eq!(profile.metadata.name, "web");
    }

    #[tokio::test]
    async fn test_malformed_pyproject_does_not_abort_analysis() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nname = \"svc\"\nauthors = [{ name = \u{201c}Bob\u{201d} }]\ndependencies = [\"flask>=2.0\"]\n",
        )
        .unwrap();

        let profile = analyzer().analyze(dir.path(), &AnalysisOptions::default()).await.unwrap();
        assert_eq!(profile.completed_phases, Phase::ALL.to_vec());
        assert_eq!(profile.metadata.name, "svc");
        assert!(profile.metadata.authors.is_empty());
        assert_eq!(profile.backend.framework.name, "Flask");
    }

    #[tokio::test]
    async fn test_missing_root_is_fatal() {
        let result = analyzer()
            .analyze(Path::new("/definitely/not/here"), &AnalysisOptions::default())
            .await;
        assert!(matches!(result, Err(ScanError::PathNotFound(_))));
    }
}
