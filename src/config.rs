use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::DependencyCategory;

/// Root configuration structure, deserialized from `.stackscan/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Walker and profiler tuning.
    pub scan: ScanConfig,
    /// Exact-name category overrides, e.g. `"acme-ui" = "ui-components"`.
    pub categories: HashMap<String, DependencyCategory>,
    /// Ranking priority overrides keyed by language name.
    pub language_priority: HashMap<String, f64>,
    pub risk: RiskConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extra directory names pruned by the walker, on top of the built-in list.
    pub ignore: Vec<String>,
    /// Number of files read concurrently per batch.
    pub batch_size: usize,
    /// Depth of the fallback scan used when a full walk fails.
    pub shallow_depth: usize,
    /// Maximum number of test files whose content is sampled.
    pub test_sample_limit: usize,
    /// Depth bound of the recursive test directory search.
    pub test_search_depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            batch_size: 100,
            shallow_depth: 2,
            test_sample_limit: 10,
            test_search_depth: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Names added to the built-in deprecated list.
    pub deprecated: Vec<String>,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<project_path>/.stackscan/config.toml`
/// 3. `~/.config/stackscan/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".stackscan").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("stackscan").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}
