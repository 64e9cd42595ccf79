use std::path::Path;

use anyhow::Result;

use crate::catalog::project::ProjectTables;
use crate::models::StructureProfile;
use crate::scanner::Walker;

/// File-tree summary of `root`: counts, depth, notable directories and
/// entry points.
pub fn analyze_structure(
    root: &Path,
    ignore: &[String],
    tables: &ProjectTables,
    test_directories: &[String],
) -> Result<StructureProfile> {
    let walker = Walker::new(root, ignore);
    let mut profile = StructureProfile::default();

    for entry in walker.entries() {
        profile.max_depth = profile.max_depth.max(entry.depth());
        if entry.file_type().is_dir() {
            profile.total_directories += 1;
            if entry.depth() == 1 {
                profile
                    .top_level_directories
                    .push(entry.file_name().to_string_lossy().into_owned());
            }
        } else if entry.file_type().is_file() {
            profile.total_files += 1;
        }
    }

    let top = &profile.top_level_directories;
    let has_top = |names: &[String]| names.iter().any(|n| top.contains(n));

    profile.source_directories = tables
        .source_directories
        .iter()
        .filter(|d| top.contains(d))
        .cloned()
        .collect();
    profile.entry_points = tables
        .entry_points
        .iter()
        .filter(|f| root.join(f.as_str()).is_file())
        .cloned()
        .collect();
    profile.has_src = top.iter().any(|d| d == "src");
    profile.has_tests = has_top(test_directories);
    profile.has_docs = has_top(&tables.docs_directories);
    profile.has_public_assets = has_top(&tables.public_directories);
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::testing::TestingTables;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_structure_summary() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();
        fs::create_dir_all(dir.path().join("tests")).unwrap();
        fs::create_dir_all(dir.path().join("public")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/react")).unwrap();
        fs::write(dir.path().join("src/index.ts"), "").unwrap();
        fs::write(dir.path().join("src/components/Button.tsx"), "").unwrap();
        fs::write(dir.path().join("tests/app.test.ts"), "").unwrap();
        fs::write(dir.path().join("node_modules/react/index.js"), "").unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        let testing = TestingTables::default();
        let profile =
            analyze_structure(dir.path(), &[], &ProjectTables::default(), &testing.directories).unwrap();
        assert_eq!(profile.total_files, 4);
        assert_eq!(profile.total_directories, 4);
        assert_eq!(profile.max_depth, 3);
        assert_eq!(profile.top_level_directories, vec!["public", "src", "tests"]);
        assert_eq!(profile.source_directories, vec!["src"]);
        assert_eq!(profile.entry_points, vec!["src/index.ts"]);
        assert!(profile.has_src && profile.has_tests && profile.has_public_assets);
        assert!(!profile.has_docs);
    }
}
