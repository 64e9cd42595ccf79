//! Fixed lookup tables used by every detector.
//!
//! A [`Catalog`] is built once per run (built-in tables plus any overrides from
//! [`crate::config::Config`]) and shared read-only behind an `Arc`. Detectors
//! take it at construction, so tests can hand them a trimmed or altered copy.
//!
//! - [`languages`]: extension map, special file names, shebangs, ranking priority.
//! - [`categories`]: dependency category table, keyword heuristics, deny-list.
//! - [`frameworks`]: runtime markers, framework and feature rules.
//! - [`testing`]: test tools, config patterns, directory names, content markers.
//! - [`project`]: config-file groups, documentation names, manifests, lock files.

pub mod categories;
pub mod frameworks;
pub mod languages;
pub mod project;
pub mod testing;

use crate::config::Config;

use categories::CategoryTables;
use frameworks::FrameworkTables;
use languages::LanguageTables;
use project::ProjectTables;
use testing::TestingTables;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub languages: LanguageTables,
    pub categories: CategoryTables,
    pub frameworks: FrameworkTables,
    pub testing: TestingTables,
    pub project: ProjectTables,
}

impl Catalog {
    /// Built-in tables extended with the overrides declared in `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut catalog = Catalog::default();
        for (name, category) in &config.categories {
            catalog.categories.insert_exact(name, *category);
        }
        for (language, priority) in &config.language_priority {
            catalog.languages.priority.insert(language.clone(), *priority);
        }
        for name in &config.risk.deprecated {
            catalog.categories.deprecated.insert(name.to_lowercase());
        }
        catalog
    }
}

/// Match a dependency name against a table pattern.
///
/// A trailing `*` makes the pattern a prefix match; otherwise names must be
/// equal, ignoring ASCII case.
pub fn matches_pattern(pattern: &str, name: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => name
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix)),
        None => pattern.eq_ignore_ascii_case(name),
    }
}

/// Convert a static `(a, b)` table into owned strings.
pub(crate) fn owned_pairs(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

pub(crate) fn owned_list(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_pattern_exact_and_prefix() {
        assert!(matches_pattern("express", "express"));
        assert!(matches_pattern("Django", "django"));
        assert!(!matches_pattern("express", "express-session"));
        assert!(matches_pattern("github.com/labstack/echo*", "github.com/labstack/echo/v4"));
        assert!(matches_pattern("@nestjs/*", "@nestjs/core"));
        assert!(!matches_pattern("@nestjs/*", "@nest"));
    }

    #[test]
    fn test_from_config_overrides() {
        let mut config = Config::default();
        config
            .categories
            .insert("acme-widgets".to_string(), crate::models::DependencyCategory::UiComponents);
        config.language_priority.insert("Elm".to_string(), 5.0);
        config.risk.deprecated.push("Left-Pad".to_string());

        let catalog = Catalog::from_config(&config);
        assert_eq!(
            catalog.categories.exact.get("acme-widgets"),
            Some(&crate::models::DependencyCategory::UiComponents)
        );
        assert_eq!(catalog.languages.priority.get("Elm"), Some(&5.0));
        assert!(catalog.categories.deprecated.contains("left-pad"));
    }
}
