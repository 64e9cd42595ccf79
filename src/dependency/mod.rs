//! Dependency resolution: read the project manifest, classify every entry,
//! flag risky version patterns and detect package managers.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::manifest::read_manifest;
use crate::models::{ClassifiedDependencies, Dependency, DependencyProfile, DependencyScope};

pub mod classifier;
pub mod package_manager;
pub mod risk;

pub use classifier::DependencyClassifier;
pub use package_manager::detect_package_manager;
pub use risk::risk_assess;

pub struct DependencyResolver {
    catalog: Arc<Catalog>,
    classifier: DependencyClassifier,
}

impl DependencyResolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            classifier: DependencyClassifier::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    /// Build the dependency profile of `root`. A root without a readable
    /// manifest yields an empty profile, not an error.
    pub fn resolve(&self, root: &Path) -> Result<DependencyProfile> {
        let package_managers = detect_package_manager(root, &self.catalog.project);

        let Some(manifest) = read_manifest(root) else {
            tracing::debug!(root = %root.display(), "no manifest found");
            return Ok(DependencyProfile {
                package_managers,
                ..Default::default()
            });
        };

        let all: Vec<Dependency> = manifest
            .entries()
            .into_iter()
            .map(|(name, version, scope)| {
                self.classifier
                    .classify(name, version, scope, manifest.ecosystem)
            })
            .collect();

        let risks = risk_assess(&all, &self.catalog.categories.deprecated);
        let classified = group(all);
        tracing::debug!(
            manifest = %manifest.path.display(),
            dependencies = classified.all.len(),
            risks = risks.len(),
            "dependencies classified"
        );

        Ok(DependencyProfile {
            total: classified.all.len(),
            manifest: Some(manifest),
            package_managers,
            classified,
            risks,
        })
    }
}

fn group(all: Vec<Dependency>) -> ClassifiedDependencies {
    let mut by_category: BTreeMap<_, Vec<String>> = BTreeMap::new();
    let mut production = Vec::new();
    let mut development = Vec::new();

    for dep in &all {
        by_category.entry(dep.category).or_default().push(dep.name.clone());
        match dep.scope {
            DependencyScope::Development => development.push(dep.name.clone()),
            DependencyScope::Production | DependencyScope::Peer | DependencyScope::Optional => {
                production.push(dep.name.clone())
            }
        }
    }

    ClassifiedDependencies {
        all,
        by_category,
        production,
        development,
    }
}
