use std::sync::Arc;

use crate::catalog::categories::CategoryTables;
use crate::catalog::Catalog;
use crate::models::{ClassificationTier, Dependency, DependencyCategory, DependencyScope, Ecosystem};

/// Characters that split a package name into tokens.
const SEPARATORS: &[char] = &['-', '_', '/', '.', '@', ':'];

/// Files each dependency under exactly one category.
///
/// Three tiers, first hit wins:
/// 1. exact name in the category table;
/// 2. the longest table key that is a scope or name prefix of the dependency
///    (`@mui/` covers `@mui/icons-material`, `eslint` covers `eslint-plugin-x`);
/// 3. a keyword heuristic over the name's tokens, in table order.
///
/// Anything else is [`DependencyCategory::Other`].
pub struct DependencyClassifier {
    catalog: Arc<Catalog>,
}

impl DependencyClassifier {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Classify a single name. Pure: the same input always yields the same
    /// category and tier.
    pub fn categorize(&self, name: &str) -> (DependencyCategory, ClassificationTier) {
        categorize(&self.catalog.categories, name)
    }

    pub fn classify(
        &self,
        name: &str,
        version: &str,
        scope: DependencyScope,
        ecosystem: Ecosystem,
    ) -> Dependency {
        let (category, tier) = self.categorize(name);
        Dependency {
            name: name.to_string(),
            version: version.to_string(),
            category,
            tier,
            scope,
            ecosystem,
        }
    }
}

pub fn categorize(tables: &CategoryTables, name: &str) -> (DependencyCategory, ClassificationTier) {
    let lower = name.to_lowercase();

    if let Some(category) = tables.exact.get(&lower) {
        return (*category, ClassificationTier::Exact);
    }

    for key in &tables.prefix_order {
        if is_prefix_match(key, &lower) {
            if let Some(category) = tables.exact.get(key) {
                return (*category, ClassificationTier::Partial);
            }
        }
    }

    if let Some(category) = keyword_match(&tables.keywords, &lower) {
        return (category, ClassificationTier::Heuristic);
    }

    (DependencyCategory::Other, ClassificationTier::Heuristic)
}

/// `key` is a scope (`@mui/`, `eslint-plugin-`) or a whole-token prefix of `name`.
fn is_prefix_match(key: &str, name: &str) -> bool {
    if key.len() >= name.len() || !name.starts_with(key) {
        return false;
    }
    if key.ends_with(SEPARATORS) {
        return true;
    }
    name[key.len()..].starts_with(SEPARATORS)
}

fn keyword_match(keywords: &[(String, DependencyCategory)], name: &str) -> Option<DependencyCategory> {
    let tokens: Vec<&str> = name.split(SEPARATORS).filter(|t| !t.is_empty()).collect();

    keywords.iter().find_map(|(keyword, category)| {
        let hit = if keyword.ends_with('/') {
            name.starts_with(keyword.as_str())
        } else {
            tokens.iter().any(|token| {
                token.starts_with(keyword.as_str())
                    || (keyword.len() >= 3 && token.ends_with(keyword.as_str()))
                    || (keyword.len() >= 4 && token.contains(keyword.as_str()))
            })
        };
        hit.then_some(*category)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DependencyCategory as C;

    fn classifier() -> DependencyClassifier {
        DependencyClassifier::new(Arc::new(Catalog::default()))
    }

    #[test]
    fn test_exact_tier() {
        let c = classifier();
        assert_eq!(c.categorize("react"), (C::UiFramework, ClassificationTier::Exact));
        assert_eq!(c.categorize("Express"), (C::WebFramework, ClassificationTier::Exact));
    }

    #[test]
    fn test_partial_tier_uses_scope_and_longest_prefix() {
        let c = classifier();
        let (category, tier) = c.categorize("@angular/platform-browser");
        assert_eq!(tier, ClassificationTier::Partial);
        assert_eq!(category, C::UiFramework);
        assert_eq!(
            c.categorize("eslint-plugin-acme"),
            (C::Linting, ClassificationTier::Partial)
        );

        let (_, tier) = c.categorize("reactive-thing");
        assert_ne!(tier, ClassificationTier::Partial);
    }

    #[test]
    fn test_heuristic_testing_package() {
        let c = classifier();
        let dep = c.classify("my-test-package", "1.0.0", DependencyScope::Development, Ecosystem::Npm);
        assert_eq!(dep.category, C::Testing);
        assert_eq!(dep.tier, ClassificationTier::Heuristic);
    }

    #[test]
    fn test_heuristic_keyword_order_and_suffix() {
        let c = classifier();
        assert_eq!(c.categorize("acme-mockserver").0, C::Mocking);
        assert_eq!(c.categorize("super-oauth").0, C::Authentication);
        assert_eq!(c.categorize("tiny-esbuild-wrapper").0, C::BuildTool);
        assert_eq!(c.categorize("@types/some-lib").0, C::TypeDefinitions);
    }

    #[test]
    fn test_heuristic_keyword_inside_token() {
        let c = classifier();
        assert_eq!(
            c.categorize("oauthlib"),
            (C::Authentication, ClassificationTier::Heuristic)
        );
        assert_eq!(c.categorize("acme-oauth2-server").0, C::Authentication);
        assert_eq!(c.categorize("pyhttpx").0, C::HttpClient);
        // short keywords still need a token boundary
        assert_eq!(c.categorize("studbook").0, C::Other);
    }

    #[test]
    fn test_unmatched_is_other() {
        let c = classifier();
        assert_eq!(
            c.categorize("zzqx-unrelated"),
            (C::Other, ClassificationTier::Heuristic)
        );
    }

    #[test]
    fn test_is_prefix_match() {
        assert!(is_prefix_match("@mui/", "@mui/material"));
        assert!(is_prefix_match("eslint-plugin-", "eslint-plugin-react"));
        assert!(is_prefix_match("eslint", "eslint-plugin-react"));
        assert!(!is_prefix_match("eslint", "eslintish"));
        assert!(!is_prefix_match("react", "react"));
    }
}
