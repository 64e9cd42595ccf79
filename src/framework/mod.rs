//! Frontend and backend framework detection.
//!
//! Both detectors walk the same stages: identify the runtimes present, collect
//! every framework candidate from the primary runtime's dependencies, select a
//! primary by table priority, then verify against file evidence. Verification
//! may fill in a primary the manifests missed but never replaces one.

use std::path::Path;

use crate::catalog::frameworks::FrameworkRule;
use crate::catalog::matches_pattern;
use crate::dependency::risk::leading_version;
use crate::models::{FrameworkSignal, ManifestRecord, Runtime, SignalOrigin};
use crate::scanner::glob_files;

pub mod backend;
pub mod frontend;

pub use backend::BackendDetector;
pub use frontend::FrontendDetector;

/// Runtimes whose marker files exist under `root`, in marker-table order.
pub fn identify_runtimes(root: &Path, markers: &[(Runtime, Vec<String>)]) -> Vec<Runtime> {
    markers
        .iter()
        .filter(|(_, files)| files.iter().any(|f| !glob_files(root, f).is_empty()))
        .map(|(runtime, _)| *runtime)
        .collect()
}

/// The runtime ranked highest in `priority`. Runtimes missing from the
/// priority list rank last, in their given order.
pub fn select_primary(runtimes: &[Runtime], priority: &[Runtime]) -> Option<Runtime> {
    runtimes
        .iter()
        .min_by_key(|r| priority.iter().position(|p| p == *r).unwrap_or(usize::MAX))
        .copied()
}

/// Flat `(name, version)` view over one or more manifests.
#[derive(Debug, Default)]
pub struct DependencySet {
    entries: Vec<(String, String)>,
}

impl DependencySet {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a ManifestRecord>) -> Self {
        let entries = records
            .into_iter()
            .flat_map(|r| r.entries())
            .map(|(name, version, _)| (name.to_string(), version.to_string()))
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First dependency matching any of `patterns`, tried in pattern order.
    pub fn find(&self, patterns: &[String]) -> Option<(&str, &str)> {
        patterns.iter().find_map(|pattern| {
            self.entries
                .iter()
                .find(|(name, _)| matches_pattern(pattern, name))
                .map(|(n, v)| (n.as_str(), v.as_str()))
        })
    }

    pub fn contains_any(&self, patterns: &[String]) -> bool {
        self.find(patterns).is_some()
    }

    /// Every rule with a matching dependency, as manifest signals in rule order.
    pub fn signals(&self, rules: &[FrameworkRule]) -> Vec<FrameworkSignal> {
        rules
            .iter()
            .filter_map(|rule| {
                let (_, version) = self.find(&rule.patterns)?;
                Some(FrameworkSignal::new(&rule.name, SignalOrigin::Manifest).with_version(clean_version(version)))
            })
            .collect()
    }

    /// Names of every rule with a matching dependency, in rule order.
    pub fn features(&self, rules: &[FrameworkRule]) -> Vec<String> {
        rules
            .iter()
            .filter(|rule| self.contains_any(&rule.patterns))
            .map(|rule| rule.name.clone())
            .collect()
    }
}

/// `^18.2.0` → `18.2.0`; wildcard and non-numeric specs carry no version.
fn clean_version(spec: &str) -> Option<String> {
    let version = leading_version(spec);
    version
        .starts_with(|c: char| c.is_ascii_digit())
        .then(|| version.to_string())
}

/// Append the items of `extra` missing from `list`, keeping first-seen order.
pub fn merge_unique(list: &mut Vec<String>, extra: impl IntoIterator<Item = String>) {
    for item in extra {
        if !list.contains(&item) {
            list.push(item);
        }
    }
}

/// Append `signal` unless a signal of the same name is already listed.
pub fn merge_signal(list: &mut Vec<FrameworkSignal>, signal: FrameworkSignal) {
    if !list.iter().any(|s| s.name == signal.name) {
        list.push(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::frameworks::FrameworkTables;
    use crate::models::{DependencyScope, Ecosystem};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_identify_runtimes_and_primary() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module x\n").unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask\n").unwrap();
        fs::write(dir.path().join("Api.csproj"), "<Project />").unwrap();

        let tables = FrameworkTables::default();
        let runtimes = identify_runtimes(dir.path(), &tables.runtime_markers);
        assert_eq!(runtimes, vec![Runtime::Python, Runtime::Go, Runtime::DotNet]);
        assert_eq!(select_primary(&runtimes, &tables.runtime_priority), Some(Runtime::Python));
        assert_eq!(select_primary(&[], &tables.runtime_priority), None);
    }

    #[test]
    fn test_primary_priority_is_fixed() {
        let tables = FrameworkTables::default();
        let primary = select_primary(&[Runtime::DotNet, Runtime::Java, Runtime::Go], &tables.runtime_priority);
        assert_eq!(primary, Some(Runtime::Java));
    }

    #[test]
    fn test_dependency_set_signals() {
        let mut record = ManifestRecord::new(Ecosystem::Npm, "package.json");
        record.insert(DependencyScope::Production, "express", "^4.18.2");
        record.insert(DependencyScope::Production, "@nestjs/core", "latest");

        let set = DependencySet::from_records([&record]);
        let tables = FrameworkTables::default();
        let signals = set.signals(&tables.backend[&Runtime::NodeJs]);
        let names: Vec<&str> = signals.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["NestJS", "Express"]);
        assert_eq!(signals[0].version, None);
        assert_eq!(signals[1].version.as_deref(), Some("4.18.2"));
    }

    #[test]
    fn test_merge_helpers_deduplicate() {
        let mut list = vec!["Vite".to_string()];
        merge_unique(&mut list, ["Vite".to_string(), "Webpack".to_string()]);
        assert_eq!(list, vec!["Vite", "Webpack"]);

        let mut signals = vec![FrameworkSignal::new("React", SignalOrigin::Manifest)];
        merge_signal(&mut signals, FrameworkSignal::new("React", SignalOrigin::Content));
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].origin, Some(SignalOrigin::Manifest));
    }
}
