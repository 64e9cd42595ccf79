//! Ignore-aware directory walking and per-file language sniffing.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::catalog::languages::LanguageTables;
use crate::error::{ScanError, ScanResult};

/// Entries pruned before descent: VCS metadata, dependency caches, build output.
pub const DEFAULT_IGNORES: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "node_modules",
    "bower_components",
    "jspm_packages",
    "vendor",
    "target",
    "dist",
    "build",
    "out",
    "obj",
    "coverage",
    ".next",
    ".nuxt",
    ".svelte-kit",
    ".turbo",
    ".cache",
    ".parcel-cache",
    "__pycache__",
    ".venv",
    "venv",
    ".tox",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    ".gradle",
    ".idea",
    ".vscode",
    ".terraform",
];

/// Restartable walk over a project tree.
///
/// Every call to [`Walker::files`] or [`Walker::dirs`] walks the tree again,
/// so the result always reflects the current contents on disk.
#[derive(Debug, Clone)]
pub struct Walker {
    root: PathBuf,
    ignore: Vec<glob::Pattern>,
    max_depth: Option<usize>,
}

impl Walker {
    /// Walker over `root` pruning [`DEFAULT_IGNORES`] plus `extra` patterns.
    ///
    /// Patterns are globs matched against an entry's file name. Invalid globs
    /// are logged and dropped.
    pub fn new(root: impl Into<PathBuf>, extra: &[String]) -> Self {
        let ignore = DEFAULT_IGNORES
            .iter()
            .map(|s| s.to_string())
            .chain(extra.iter().cloned())
            .filter_map(|p| match glob::Pattern::new(&p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!(pattern = %p, error = %e, "ignoring invalid ignore pattern");
                    None
                }
            })
            .collect();
        Self {
            root: root.into(),
            ignore,
            max_depth: None,
        }
    }

    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_ignored(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        self.ignore.iter().any(|p| p.matches(&name))
    }

    /// All reachable entries below the root (root excluded), sorted by file
    /// name within each directory. Unreadable entries are skipped.
    pub fn entries(&self) -> impl Iterator<Item = DirEntry> + '_ {
        let mut walk = WalkDir::new(&self.root).sort_by_file_name();
        if let Some(depth) = self.max_depth {
            walk = walk.max_depth(depth);
        }
        walk.into_iter()
            .filter_entry(move |e| e.depth() == 0 || !self.is_ignored(e))
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| e.depth() > 0)
    }

    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries()
            .filter(|e| e.file_type().is_file())
            .map(DirEntry::into_path)
    }

    pub fn dirs(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries()
            .filter(|e| e.file_type().is_dir())
            .map(DirEntry::into_path)
    }

    /// Like [`Walker::files`], but fails when the root itself cannot be listed.
    pub fn try_files(&self) -> ScanResult<Vec<PathBuf>> {
        std::fs::read_dir(&self.root).map_err(|source| ScanError::Traversal {
            path: self.root.clone(),
            source,
        })?;
        Ok(self.files().collect())
    }

    /// [`Walker::try_files`] on the blocking thread pool, for async callers.
    pub async fn files_blocking(self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(tokio::task::spawn_blocking(move || self.try_files()).await??)
    }

    /// Path of `path` relative to the root, with `/` separators.
    pub fn relative(&self, path: &Path) -> String {
        relative_path(&self.root, path)
    }
}

pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Files under `root` matching a glob relative to it, in sorted order.
///
/// Plain names resolve with a single `is_file` check. Unreadable matches and
/// invalid patterns yield nothing.
pub fn glob_files(root: &Path, pattern: &str) -> Vec<PathBuf> {
    if !pattern.contains(['*', '?', '[']) {
        let path = root.join(pattern);
        return if path.is_file() { vec![path] } else { Vec::new() };
    }
    let full = format!(
        "{}/{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        pattern
    );
    let mut matches: Vec<PathBuf> = match glob::glob(&full) {
        Ok(paths) => paths.flatten().filter(|p| p.is_file()).collect(),
        Err(e) => {
            tracing::debug!(pattern, error = %e, "invalid glob");
            Vec::new()
        }
    };
    matches.sort();
    matches
}

/// Identify the language of a single file.
///
/// Resolution order: special file names (Dockerfile, Makefile, dotenv files),
/// the extension table, then a shebang sniff for extension-less files.
/// Never fails; returns `None` when nothing matches or the file is unreadable.
pub fn detect_language_by_file<'a>(
    path: &Path,
    ext: Option<&str>,
    tables: &'a LanguageTables,
) -> Option<&'a str> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if let Some((_, lang)) = tables.special_files.iter().find(|(n, _)| *n == stem) {
        return Some(lang.as_str());
    }
    if name.starts_with(&tables.dotenv_prefix) {
        return Some(tables.dotenv_language.as_str());
    }

    match ext {
        Some(ext) => tables
            .extensions
            .get(&ext.to_lowercase())
            .map(String::as_str),
        None => sniff_shebang(path, tables),
    }
}

fn sniff_shebang<'a>(path: &Path, tables: &'a LanguageTables) -> Option<&'a str> {
    let file = File::open(path).ok()?;
    let mut line = String::new();
    BufReader::new(file.take(256)).read_line(&mut line).ok()?;
    let interpreter = line.strip_prefix("#!")?;
    tables
        .shebangs
        .iter()
        .find(|(token, _)| interpreter.contains(token.as_str()))
        .map(|(_, lang)| lang.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lang(path: &Path) -> Option<String> {
        let tables = LanguageTables::default();
        let ext = path.extension().and_then(|e| e.to_str());
        detect_language_by_file(path, ext, &tables).map(str::to_string)
    }

    #[test]
    fn test_special_names_and_extensions() {
        assert_eq!(lang(Path::new("Dockerfile")).as_deref(), Some("Dockerfile"));
        assert_eq!(lang(Path::new("Dockerfile.dev")).as_deref(), Some("Dockerfile"));
        assert_eq!(lang(Path::new("Makefile")).as_deref(), Some("Makefile"));
        assert_eq!(lang(Path::new(".env.local")).as_deref(), Some("Dotenv"));
        assert_eq!(lang(Path::new("src/App.TSX")).as_deref(), Some("TypeScript"));
        assert_eq!(lang(Path::new("main.rs")).as_deref(), Some("Rust"));
        assert_eq!(lang(Path::new("image.png")), None);
    }

    #[test]
    fn test_shebang_sniff() {
        let dir = TempDir::new().unwrap();
        let py = dir.path().join("run");
        fs::write(&py, "#!/usr/bin/env python3\nprint('hi')\n").unwrap();
        let sh = dir.path().join("deploy");
        fs::write(&sh, "#!/bin/bash\necho hi\n").unwrap();
        let plain = dir.path().join("NOTES");
        fs::write(&plain, "just text\n").unwrap();

        assert_eq!(lang(&py).as_deref(), Some("Python"));
        assert_eq!(lang(&sh).as_deref(), Some("Shell"));
        assert_eq!(lang(&plain), None);
        assert_eq!(lang(&dir.path().join("missing")), None);
    }

    #[test]
    fn test_walker_prunes_and_restarts() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/react")).unwrap();
        fs::create_dir_all(dir.path().join("fixtures")).unwrap();
        fs::write(dir.path().join("src/b.js"), "").unwrap();
        fs::write(dir.path().join("src/a.js"), "").unwrap();
        fs::write(dir.path().join("node_modules/react/index.js"), "").unwrap();
        fs::write(dir.path().join("fixtures/x.js"), "").unwrap();

        let walker = Walker::new(dir.path(), &["fixtures".to_string()]);
        let first: Vec<String> = walker.files().map(|p| walker.relative(&p)).collect();
        assert_eq!(first, vec!["src/a.js", "src/b.js"]);

        fs::write(dir.path().join("src/c.js"), "").unwrap();
        assert_eq!(walker.files().count(), 3);
        assert_eq!(walker.dirs().count(), 1);
    }

    #[test]
    fn test_max_depth() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.txt"), "").unwrap();
        fs::write(dir.path().join("a/b/deep.txt"), "").unwrap();

        let walker = Walker::new(dir.path(), &[]).max_depth(1);
        assert_eq!(walker.files().count(), 1);
    }

    #[test]
    fn test_glob_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".github/workflows")).unwrap();
        fs::write(dir.path().join(".github/workflows/ci.yml"), "").unwrap();
        fs::write(dir.path().join("Api.csproj"), "").unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        assert_eq!(glob_files(dir.path(), ".github/workflows/*.y*ml").len(), 1);
        assert_eq!(glob_files(dir.path(), "*.csproj").len(), 1);
        assert_eq!(glob_files(dir.path(), "package.json").len(), 1);
        assert!(glob_files(dir.path(), "Cargo.toml").is_empty());
    }

    #[test]
    fn test_try_files_missing_root() {
        let walker = Walker::new("/definitely/not/here", &[]);
        assert!(matches!(
            walker.try_files(),
            Err(ScanError::Traversal { .. })
        ));
    }

    #[tokio::test]
    async fn test_files_blocking_matches_sync_walk() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/main.rs"), "fn main() {}\n").unwrap();
        fs::write(dir.path().join("README.md"), "# x\n").unwrap();

        let walker = Walker::new(dir.path(), &[]);
        let expected: Vec<PathBuf> = walker.files().collect();
        assert_eq!(walker.files_blocking().await.unwrap(), expected);

        let missing = Walker::new("/definitely/not/here", &[]);
        assert!(missing.files_blocking().await.is_err());
    }
}
