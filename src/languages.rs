//! Per-language file, line and byte counts plus ranking.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;

use crate::catalog::languages::LanguageTables;
use crate::catalog::Catalog;
use crate::config::ScanConfig;
use crate::models::LanguageStat;
use crate::scanner::{detect_language_by_file, Walker};

pub struct LanguageProfiler {
    catalog: Arc<Catalog>,
    batch_size: usize,
    shallow_depth: usize,
    ignore: Vec<String>,
}

impl LanguageProfiler {
    pub fn new(catalog: Arc<Catalog>, scan: &ScanConfig) -> Self {
        Self {
            catalog,
            batch_size: scan.batch_size.max(1),
            shallow_depth: scan.shallow_depth,
            ignore: scan.ignore.clone(),
        }
    }

    /// Walk `root` and return the ranked language list.
    ///
    /// Never fails: when the tree cannot be walked the result comes from
    /// manifest presence checks and a shallow scan.
    pub async fn analyze(&self, root: &Path) -> Vec<LanguageStat> {
        let walker = Walker::new(root, &self.ignore);
        let stats = match walker.files_blocking().await {
            Ok(files) => self.profile_files(files).await,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "language walk failed, using fallback");
                self.fallback(root).await
            }
        };
        rank(stats, &self.catalog.languages)
    }

    /// Accumulate stats for `files`, reading them in fixed-size batches.
    /// The result is in discovery order and unranked.
    async fn profile_files(&self, files: Vec<PathBuf>) -> Vec<LanguageStat> {
        let tables = &self.catalog.languages;
        let classified: Vec<(PathBuf, String, String)> = files
            .into_iter()
            .filter_map(|path| {
                let ext = path.extension().and_then(|e| e.to_str());
                let lang = detect_language_by_file(&path, ext, tables)?.to_string();
                let key = extension_key(&path, tables);
                Some((path, lang, key))
            })
            .collect();

        let mut acc = Accumulator::default();
        for batch in classified.chunks(self.batch_size) {
            let reads: Vec<_> = batch.iter().map(|(path, _, _)| tokio::fs::read(path)).collect();
            let results = join_all(reads).await;

            for ((path, lang, key), result) in batch.iter().zip(results) {
                let content = match result {
                    Ok(bytes) => Some(bytes),
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "unreadable file counted without content");
                        None
                    }
                };
                acc.add(lang, key, content.as_deref());
            }
        }
        acc.finish()
    }

    async fn fallback(&self, root: &Path) -> Vec<LanguageStat> {
        let shallow = Walker::new(root, &self.ignore)
            .max_depth(self.shallow_depth)
            .files_blocking()
            .await
            .unwrap_or_default();
        let mut stats = self.profile_files(shallow).await;

        for (file, lang) in &self.catalog.languages.manifest_hints {
            if stats.iter().any(|s| &s.name == lang) || !root.join(file).exists() {
                continue;
            }
            stats.push(LanguageStat {
                name: lang.clone(),
                files: 0,
                lines: 0,
                bytes: 0,
                extensions: BTreeSet::from([file.clone()]),
                primary_extension: file.clone(),
                score: 0.0,
            });
        }
        stats
    }
}

/// Key a file contributes to its language's extension set.
fn extension_key(path: &Path, tables: &LanguageTables) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if name.starts_with(&tables.dotenv_prefix) {
        return tables.dotenv_prefix.clone();
    }
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or(name)
}

fn count_lines(content: &[u8]) -> u64 {
    if content.is_empty() {
        return 0;
    }
    let newlines = content.iter().filter(|b| **b == b'\n').count() as u64;
    if content.ends_with(b"\n") {
        newlines
    } else {
        newlines + 1
    }
}

#[derive(Default)]
struct Accumulator {
    order: Vec<Entry>,
    index: HashMap<String, usize>,
}

struct Entry {
    name: String,
    files: usize,
    lines: u64,
    bytes: u64,
    /// Extension counts in first-seen order.
    extensions: Vec<(String, usize)>,
}

impl Accumulator {
    fn add(&mut self, lang: &str, key: &str, content: Option<&[u8]>) {
        let idx = match self.index.get(lang) {
            Some(idx) => *idx,
            None => {
                self.order.push(Entry {
                    name: lang.to_string(),
                    files: 0,
                    lines: 0,
                    bytes: 0,
                    extensions: Vec::new(),
                });
                self.index.insert(lang.to_string(), self.order.len() - 1);
                self.order.len() - 1
            }
        };
        let entry = &mut self.order[idx];
        entry.files += 1;
        if let Some(content) = content {
            entry.lines += count_lines(content);
            entry.bytes += content.len() as u64;
        }
        match entry.extensions.iter_mut().find(|(k, _)| k == key) {
            Some((_, n)) => *n += 1,
            None => entry.extensions.push((key.to_string(), 1)),
        }
    }

    fn finish(self) -> Vec<LanguageStat> {
        self.order
            .into_iter()
            .map(|e| {
                let mut primary = &e.extensions[0];
                for ext in &e.extensions[1..] {
                    if ext.1 > primary.1 {
                        primary = ext;
                    }
                }
                LanguageStat {
                    primary_extension: primary.0.clone(),
                    extensions: e.extensions.iter().map(|(k, _)| k.clone()).collect(),
                    name: e.name,
                    files: e.files,
                    lines: e.lines,
                    bytes: e.bytes,
                    score: 0.0,
                }
            })
            .collect()
    }
}

pub fn score(stat: &LanguageStat, tables: &LanguageTables) -> f64 {
    const MIB: f64 = 1024.0 * 1024.0;
    0.4 * stat.files as f64
        + 0.3 * ((stat.lines as f64) + 1.0).ln()
        + 0.2 * (stat.bytes as f64 / MIB)
        + 0.1 * tables.priority_of(&stat.name)
}

/// Score, sort and cut the language list.
///
/// Ties keep discovery order. Languages in `always_include` survive the cut
/// whenever they were seen at all.
pub fn rank(mut stats: Vec<LanguageStat>, tables: &LanguageTables) -> Vec<LanguageStat> {
    for stat in &mut stats {
        stat.score = score(stat, tables);
    }
    stats.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut ranked: Vec<LanguageStat> = Vec::with_capacity(tables.top_n + tables.always_include.len());
    for (i, stat) in stats.into_iter().enumerate() {
        if i < tables.top_n || tables.always_include.contains(&stat.name) {
            ranked.push(stat);
        }
    }
    ranked
}
