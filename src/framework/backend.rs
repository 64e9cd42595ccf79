use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::manifest::read_all;
use crate::models::{BackendProfile, DetectionStage, FrameworkSignal, Runtime, SignalOrigin};

use super::{identify_runtimes, merge_signal, merge_unique, select_primary, DependencySet};

const REST: &str = "REST";

pub struct BackendDetector {
    catalog: Arc<Catalog>,
}

impl BackendDetector {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn detect(&self, root: &Path) -> Result<BackendProfile> {
        let tables = &self.catalog.frameworks;
        let mut profile = BackendProfile {
            runtimes: identify_runtimes(root, &tables.runtime_markers),
            ..Default::default()
        };
        profile.runtime = select_primary(&profile.runtimes, &tables.runtime_priority);

        if let Some(runtime) = profile.runtime {
            profile.stage = DetectionStage::RuntimeIdentified;
            let records: Vec<_> = read_all(root)
                .into_iter()
                .filter(|r| r.ecosystem.runtime() == runtime)
                .collect();
            let deps = DependencySet::from_records(&records);
            self.collect(runtime, &deps, &mut profile);
        }

        self.verify(root, &mut profile);
        Ok(profile)
    }

    fn collect(&self, runtime: Runtime, deps: &DependencySet, profile: &mut BackendProfile) {
        let tables = &self.catalog.frameworks;

        if let Some(rules) = tables.backend.get(&runtime) {
            for signal in deps.signals(rules) {
                merge_signal(&mut profile.frameworks, signal);
            }
        }
        profile.stage = DetectionStage::FrameworkCandidatesCollected;

        if let Some(primary) = profile.frameworks.first() {
            profile.framework = primary.clone();
            profile.stage = DetectionStage::PrimarySelected;
        }
        profile.framework.server = deps.features(&tables.servers).into_iter().next();

        merge_unique(&mut profile.databases, deps.features(&tables.databases));
        merge_unique(&mut profile.orms, deps.features(&tables.orms));
        merge_unique(&mut profile.api_styles, deps.features(&tables.api_styles));
        merge_unique(&mut profile.auth, deps.features(&tables.auth));
        merge_unique(&mut profile.caching, deps.features(&tables.caching));
        merge_unique(&mut profile.message_queues, deps.features(&tables.message_queues));
    }

    /// Entry-point files confirm a framework the manifests did not reveal.
    fn verify(&self, root: &Path, profile: &mut BackendProfile) {
        for (file, runtime, name) in &self.catalog.frameworks.backend_entry_points {
            if profile.runtime.is_some_and(|r| r != *runtime) || !root.join(file).is_file() {
                continue;
            }
            let signal = FrameworkSignal::new(name, SignalOrigin::Content);
            if profile.framework.is_unknown() {
                tracing::debug!(framework = %name, entry_point = %file, "backend framework from entry point");
                let server = profile.framework.server.take();
                profile.framework = FrameworkSignal { server, ..signal.clone() };
                profile.runtime.get_or_insert(*runtime);
                if !profile.runtimes.contains(runtime) {
                    profile.runtimes.push(*runtime);
                }
            }
            merge_signal(&mut profile.frameworks, signal);
        }

        if !profile.frameworks.is_empty() && !profile.api_styles.iter().any(|s| s == REST) {
            profile.api_styles.push(REST.to_string());
        }
        profile.has_api = !profile.api_styles.is_empty();
        profile.has_database = !profile.databases.is_empty() || !profile.orms.is_empty();
        profile.has_auth = !profile.auth.is_empty();

        if profile.stage > DetectionStage::Unknown || !profile.framework.is_unknown() {
            profile.stage = DetectionStage::FeaturesVerified;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_FRAMEWORK;
    use std::fs;
    use tempfile::TempDir;

    fn detect(root: &Path) -> BackendProfile {
        BackendDetector::new(Arc::new(Catalog::default()))
            .detect(root)
            .unwrap()
    }

    #[test]
    fn test_django_without_database_driver() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), "Django==4.2.0\n").unwrap();
        fs::write(dir.path().join("manage.py"), "#!/usr/bin/env python\n").unwrap();

        let profile = detect(dir.path());
        assert_eq!(profile.runtime, Some(Runtime::Python));
        assert_eq!(profile.framework.name, "Django");
        assert_eq!(profile.framework.version.as_deref(), Some("4.2.0"));
        assert_eq!(profile.frameworks.len(), 1);
        assert!(!profile.databases.contains(&"PostgreSQL".to_string()));
        assert!(!profile.has_database);
        assert_eq!(profile.stage, DetectionStage::FeaturesVerified);
    }

    #[test]
    fn test_django_with_postgres_driver() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("requirements.txt"),
            "Django==4.2.0\npsycopg2==2.9.6\ngunicorn==21.2.0\ndjangorestframework==3.14.0\n",
        )
        .unwrap();
        fs::write(dir.path().join("manage.py"), "").unwrap();

        let profile = detect(dir.path());
        assert_eq!(profile.databases, vec!["PostgreSQL"]);
        assert_eq!(profile.framework.server.as_deref(), Some("Gunicorn"));
        assert_eq!(profile.api_styles, vec!["REST"]);
        assert!(profile.has_api && profile.has_database);
    }

    #[test]
    fn test_entry_point_promotes_unknown_primary() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("composer.json"), r#"{"require": {"php": "^8.1"}}"#).unwrap();
        fs::write(dir.path().join("artisan"), "#!/usr/bin/env php\n").unwrap();

        let profile = detect(dir.path());
        assert_eq!(profile.runtime, Some(Runtime::Php));
        assert_eq!(profile.framework.name, "Laravel");
        assert_eq!(profile.framework.origin, Some(SignalOrigin::Content));
    }

    #[test]
    fn test_only_primary_runtime_is_examined() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"dependencies": {"express": "^4.18.2", "mongoose": "^7.0.0"}}"#).unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask==2.3.0\n").unwrap();

        let profile = detect(dir.path());
        assert_eq!(profile.runtimes, vec![Runtime::NodeJs, Runtime::Python]);
        assert_eq!(profile.runtime, Some(Runtime::NodeJs));
        let names: Vec<&str> = profile.frameworks.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Express"]);
        assert_eq!(profile.databases, vec!["MongoDB"]);
        assert_eq!(profile.orms, vec!["Mongoose"]);
    }

    #[test]
    fn test_empty_directory_is_unknown() {
        let dir = TempDir::new().unwrap();
        let profile = detect(dir.path());
        assert_eq!(profile.framework.name, UNKNOWN_FRAMEWORK);
        assert_eq!(profile.runtime, None);
        assert!(profile.runtimes.is_empty());
        assert_eq!(profile.stage, DetectionStage::Unknown);
        assert!(!profile.has_api);
    }
}
