use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::catalog::frameworks::ContentEvidence;
use crate::catalog::Catalog;
use crate::manifest::node::PackageJsonReader;
use crate::manifest::ManifestReader;
use crate::models::{ComponentFileCounts, DetectionStage, FrameworkSignal, FrontendProfile, Runtime, SignalOrigin};
use crate::scanner::Walker;

use super::{identify_runtimes, merge_signal, merge_unique, DependencySet};

pub struct FrontendDetector {
    catalog: Arc<Catalog>,
    ignore: Vec<String>,
}

impl FrontendDetector {
    pub fn new(catalog: Arc<Catalog>, ignore: Vec<String>) -> Self {
        Self { catalog, ignore }
    }

    pub fn detect(&self, root: &Path) -> Result<FrontendProfile> {
        let tables = &self.catalog.frameworks;
        let mut profile = FrontendProfile::default();

        let runtimes = identify_runtimes(root, &tables.runtime_markers);
        if runtimes.contains(&Runtime::NodeJs) {
            profile.stage = DetectionStage::RuntimeIdentified;
            if let Some(path) = PackageJsonReader.locate(root) {
                match PackageJsonReader.read(&path) {
                    Ok(record) => {
                        let deps = DependencySet::from_records([&record]);
                        self.collect(&deps, &mut profile);
                    }
                    Err(e) => tracing::warn!(path = %path.display(), error = %e, "package.json unreadable"),
                }
            }
        }
        profile.has_typescript |= root.join("tsconfig.json").is_file();

        self.verify(root, &mut profile);

        if !profile.framework.is_unknown() || profile.has_typescript || profile.stage > DetectionStage::Unknown {
            profile.language = Some(if profile.has_typescript { "TypeScript" } else { "JavaScript" }.to_string());
        }
        Ok(profile)
    }

    /// Candidate collection, primary selection and feature flags from package.json.
    fn collect(&self, deps: &DependencySet, profile: &mut FrontendProfile) {
        let tables = &self.catalog.frameworks;

        for signal in deps.signals(&tables.frontend) {
            merge_signal(&mut profile.frameworks, signal);
        }
        profile.stage = DetectionStage::FrameworkCandidatesCollected;

        if let Some(primary) = profile.frameworks.first() {
            profile.framework = primary.clone();
            profile.stage = DetectionStage::PrimarySelected;
        }

        merge_unique(&mut profile.build_tools, deps.features(&tables.build_tools));
        merge_unique(&mut profile.styling, deps.features(&tables.styling));
        merge_unique(&mut profile.state_management, deps.features(&tables.state_management));
        merge_unique(&mut profile.ui_libraries, deps.features(&tables.ui_libraries));
        profile.has_router |= deps.contains_any(&tables.routers);
        profile.has_ssr |= deps.contains_any(&tables.ssr);
        profile.has_pwa |= deps.contains_any(&tables.pwa);
        profile.has_typescript |= deps.contains_any(&["typescript".to_string()]);
    }

    /// Count component files and credit the frameworks they imply.
    fn verify(&self, root: &Path, profile: &mut FrontendProfile) {
        let (counts, saw_typescript) = count_component_files(&Walker::new(root, &self.ignore));
        for (evidence, name) in &self.catalog.frameworks.content_evidence {
            let count = match evidence {
                ContentEvidence::Jsx => counts.jsx,
                ContentEvidence::Vue => counts.vue,
                ContentEvidence::Svelte => counts.svelte,
                ContentEvidence::AngularComponent => counts.angular,
            };
            if count == 0 {
                continue;
            }
            let signal = FrameworkSignal::new(name, SignalOrigin::Content);
            if profile.framework.is_unknown() {
                tracing::debug!(framework = %name, files = count, "frontend framework from file evidence");
                profile.framework = signal.clone();
            }
            merge_signal(&mut profile.frameworks, signal);
        }

        profile.has_typescript |= saw_typescript;
        profile.file_counts = counts;
        if profile.stage > DetectionStage::Unknown || !profile.framework.is_unknown() {
            profile.stage = DetectionStage::FeaturesVerified;
        }
    }
}

/// Component-file counts, plus whether any TypeScript source was seen.
fn count_component_files(walker: &Walker) -> (ComponentFileCounts, bool) {
    let mut counts = ComponentFileCounts::default();
    let mut typescript = false;
    for path in walker.files() {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        typescript |= [".ts", ".tsx", ".mts", ".cts"].iter().any(|ext| name.ends_with(ext))
            && !name.ends_with(".d.ts");
        if name.ends_with(".component.ts") {
            counts.angular += 1;
        } else if name.ends_with(".jsx") || name.ends_with(".tsx") {
            counts.jsx += 1;
        } else if name.ends_with(".vue") {
            counts.vue += 1;
        } else if name.ends_with(".svelte") {
            counts.svelte += 1;
        }
    }
    (counts, typescript)
}
