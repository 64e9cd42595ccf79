//! Testing stack detection: tools from dependencies and config files, test
//! directories, test files by naming convention, and keyword evidence sampled
//! from a handful of those files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use futures::future::join_all;

use crate::catalog::testing::{TestKind, TestMarker};
use crate::catalog::Catalog;
use crate::config::ScanConfig;
use crate::framework::{merge_unique, DependencySet};
use crate::manifest::read_all;
use crate::models::TestingProfile;
use crate::scanner::{glob_files, relative_path, Walker};

pub struct TestingDetector {
    catalog: Arc<Catalog>,
    ignore: Vec<String>,
    sample_limit: usize,
    search_depth: usize,
}

impl TestingDetector {
    pub fn new(catalog: Arc<Catalog>, scan: &ScanConfig) -> Self {
        Self {
            catalog,
            ignore: scan.ignore.clone(),
            sample_limit: scan.test_sample_limit,
            search_depth: scan.test_search_depth,
        }
    }

    pub async fn detect(&self, root: &Path) -> Result<TestingProfile> {
        let tables = &self.catalog.testing;
        let mut profile = TestingProfile::default();

        let records = read_all(root);
        let deps = DependencySet::from_records(&records);
        for tool in &tables.tools {
            if deps.contains_any(&tool.patterns) {
                merge_unique(kind_list(&mut profile, tool.kind), [tool.name.clone()]);
            }
        }

        for pattern in &tables.config_patterns {
            let found = glob_files(root, &pattern.glob);
            if found.is_empty() {
                continue;
            }
            let names = found.iter().map(|p| relative_path(root, p));
            merge_unique(&mut profile.config_files, names);
            merge_unique(kind_list(&mut profile, pattern.kind), [pattern.tool.clone()]);
        }

        let catalog = Arc::clone(&self.catalog);
        let (ignore, depth) = (self.ignore.clone(), self.search_depth);
        let dir = root.to_path_buf();
        let (directories, files) = tokio::task::spawn_blocking(move || -> Result<_> {
            let tables = &catalog.testing;
            Ok((
                test_directories(&dir, &ignore, depth, &tables.directories),
                test_files(&dir, &ignore, &tables.file_patterns)?,
            ))
        })
        .await??;
        profile.test_directories = directories;
        profile.test_file_count = files.len();
        self.sample(&files, &mut profile).await;

        profile.has_tests = profile.test_file_count > 0
            || !profile.test_directories.is_empty()
            || !profile.unit.is_empty()
            || !profile.component.is_empty()
            || !profile.e2e.is_empty();
        profile.has_visual_tests |= !profile.visual.is_empty();
        profile.has_performance_tests |= !profile.performance.is_empty();
        profile.has_security_tests |= !profile.security.is_empty();

        tracing::debug!(
            root = %root.display(),
            test_files = profile.test_file_count,
            sampled = profile.sampled_files,
            "testing stack detected"
        );
        Ok(profile)
    }

    /// Read up to the sample limit of test files and look for marker keywords.
    async fn sample(&self, files: &[PathBuf], profile: &mut TestingProfile) {
        let reads = files
            .iter()
            .take(self.sample_limit)
            .map(tokio::fs::read_to_string);
        let contents: Vec<String> = join_all(reads)
            .await
            .into_iter()
            .filter_map(|r| r.ok())
            .map(|c| c.to_lowercase())
            .collect();
        profile.sampled_files = contents.len();

        for (marker, words) in &self.catalog.testing.markers {
            let hit = contents
                .iter()
                .any(|content| words.iter().any(|w| content.contains(w.as_str())));
            if !hit {
                continue;
            }
            match marker {
                TestMarker::Snapshot => profile.has_snapshot_tests = true,
                TestMarker::Visual => profile.has_visual_tests = true,
                TestMarker::Performance => profile.has_performance_tests = true,
                TestMarker::Security => profile.has_security_tests = true,
            }
        }
    }
}

/// Conventional directories directly under the root, in preference order.
/// When none exist, a depth-bounded search collects nested ones.
fn test_directories(root: &Path, ignore: &[String], depth: usize, names: &[String]) -> Vec<String> {
    let direct: Vec<String> = names
        .iter()
        .filter(|name| root.join(name.as_str()).is_dir())
        .cloned()
        .collect();
    if !direct.is_empty() {
        return direct;
    }

    let walker = Walker::new(root, ignore).max_depth(depth);
    let mut nested = Vec::new();
    let found = walker.dirs().filter(|dir| {
        dir.file_name()
            .is_some_and(|n| names.iter().any(|name| n.to_string_lossy() == name.as_str()))
    });
    merge_unique(&mut nested, found.map(|dir| walker.relative(&dir)));
    nested
}

/// Every file whose name follows a test naming convention, in walk order.
fn test_files(root: &Path, ignore: &[String], file_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let patterns = file_patterns
        .iter()
        .map(|p| glob::Pattern::new(p))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Walker::new(root, ignore)
        .files()
        .filter(|path| {
            path.file_name()
                .is_some_and(|n| patterns.iter().any(|p| p.matches(&n.to_string_lossy())))
        })
        .collect())
}

fn kind_list(profile: &mut TestingProfile, kind: TestKind) -> &mut Vec<String> {
    match kind {
        TestKind::Unit => &mut profile.unit,
        TestKind::Component => &mut profile.component,
        TestKind::E2e => &mut profile.e2e,
        TestKind::Coverage => &mut profile.coverage,
        TestKind::Performance => &mut profile.performance,
        TestKind::Security => &mut profile.security,
        TestKind::Visual => &mut profile.visual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn detector(scan: &ScanConfig) -> TestingDetector {
        TestingDetector::new(Arc::new(Catalog::default()), scan)
    }

    #[tokio::test]
    async fn test_node_testing_stack() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("package.json"),
            r#"{"devDependencies": {"jest": "^29.0.0", "@testing-library/react": "^14.0.0", "cypress": "^13.0.0"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("jest.config.js"), "module.exports = {};\n").unwrap();
        fs::create_dir(dir.path().join("__tests__")).unwrap();
        fs::write(
            dir.path().join("__tests__/App.test.jsx"),
            "it('renders', () => { expect(tree).toMatchSnapshot(); });\n",
        )
        .unwrap();

        let profile = detector(&ScanConfig::default()).detect(dir.path()).await.unwrap();
        assert_eq!(profile.unit, vec!["Jest"]);
        assert_eq!(profile.component, vec!["Testing Library"]);
        assert_eq!(profile.e2e, vec!["Cypress"]);
        assert_eq!(profile.config_files, vec!["jest.config.js"]);
        assert_eq!(profile.test_directories, vec!["__tests__"]);
        assert_eq!(profile.test_file_count, 1);
        assert_eq!(profile.sampled_files, 1);
        assert!(profile.has_tests);
        assert!(profile.has_snapshot_tests);
        assert!(!profile.has_security_tests);
    }

    #[tokio::test]
    async fn test_directory_preference_order_and_nested_search() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("spec")).unwrap();
        fs::create_dir_all(dir.path().join("tests")).unwrap();
        let profile = detector(&ScanConfig::default()).detect(dir.path()).await.unwrap();
        assert_eq!(profile.test_directories, vec!["tests", "spec"]);

        let nested = TempDir::new().unwrap();
        fs::create_dir_all(nested.path().join("packages/core/tests")).unwrap();
        fs::create_dir_all(nested.path().join("a/b/c/d/tests")).unwrap();
        let profile = detector(&ScanConfig::default()).detect(nested.path()).await.unwrap();
        assert_eq!(profile.test_directories, vec!["packages/core/tests"]);
    }

    #[tokio::test]
    async fn test_sample_limit_bounds_reads() {
        let dir = TempDir::new().unwrap();
        for i in 0..5 {
            fs::write(dir.path().join(format!("test_{}.py", i)), "def test_x():\n    pass\n").unwrap();
        }
        let scan = ScanConfig {
            test_sample_limit: 2,
            ..Default::default()
        };
        let profile = detector(&scan).detect(dir.path()).await.unwrap();
        assert_eq!(profile.test_file_count, 5);
        assert_eq!(profile.sampled_files, 2);
    }

    #[tokio::test]
    async fn test_invalid_file_pattern_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::default();
        catalog.testing.file_patterns = vec!["[".to_string()];
        let detector = TestingDetector::new(Arc::new(catalog), &ScanConfig::default());
        assert!(detector.detect(dir.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let profile = detector(&ScanConfig::default()).detect(dir.path()).await.unwrap();
        assert_eq!(profile, TestingProfile::default());
    }
}
