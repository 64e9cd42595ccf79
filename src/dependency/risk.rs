use std::collections::HashSet;

use crate::models::{Dependency, RiskFinding, RiskKind};

const PRE_RELEASE_TAGS: &[&str] = &["alpha", "beta", "rc", "pre", "canary", "next", "nightly", "snapshot", "dev"];

/// Flag version specs and names that deserve a second look.
///
/// Purely pattern-based: a `0.x` or pre-release version, or a bare
/// `major.minor` spec, is an `outdated-pattern`; a name on the deny-list is
/// `deprecated`. At most one finding of each kind per dependency.
pub fn risk_assess(deps: &[Dependency], deprecated: &HashSet<String>) -> Vec<RiskFinding> {
    let mut findings = Vec::new();
    for dep in deps {
        if let Some(reason) = outdated_reason(&dep.version) {
            findings.push(RiskFinding {
                name: dep.name.clone(),
                version: dep.version.clone(),
                kind: RiskKind::OutdatedPattern,
                reason: reason.to_string(),
            });
        }
        if deprecated.contains(&dep.name.to_lowercase()) {
            findings.push(RiskFinding {
                name: dep.name.clone(),
                version: dep.version.clone(),
                kind: RiskKind::Deprecated,
                reason: "package is deprecated or unmaintained".to_string(),
            });
        }
    }
    findings
}

/// The first version in a spec, with range operators stripped.
pub(crate) fn leading_version(spec: &str) -> &str {
    let trimmed = spec.trim_start_matches(|c: char| {
        c.is_whitespace() || matches!(c, '^' | '~' | '>' | '<' | '=' | '!' | 'v' | 'V')
    });
    let end = trimmed
        .find(|c: char| c == ',' || c == '|' || c.is_whitespace())
        .unwrap_or(trimmed.len());
    &trimmed[..end]
}

fn outdated_reason(spec: &str) -> Option<&'static str> {
    let version = leading_version(spec);
    if version.is_empty() || !version.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let lower = version.to_lowercase();
    if let Some((_, suffix)) = lower.split_once(['-', '+']) {
        if PRE_RELEASE_TAGS.iter().any(|tag| suffix.contains(tag)) {
            return Some("pre-release version");
        }
    }
    if PRE_RELEASE_TAGS
        .iter()
        .any(|tag| lower.trim_start_matches(|c: char| c.is_ascii_digit() || c == '.').starts_with(tag))
    {
        return Some("pre-release version");
    }
    if lower.starts_with("0.") || lower == "0" {
        return Some("pre-1.0 version");
    }

    let parts: Vec<&str> = lower.split('.').collect();
    if parts.len() == 2 && parts.iter().all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit())) {
        return Some("bare major.minor version");
    }
    None
}
