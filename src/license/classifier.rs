use crate::license::spdx::{kind_of, spdx_alias};
use crate::models::LicenseKind;

/// Rewrite a manifest license string as an SPDX expression where the parts
/// are recognized. `MIT/Apache-2.0` becomes `MIT OR Apache-2.0`; unrecognized
/// parts are kept as written. Blank input yields `None`.
pub fn normalize_license(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(id) = spdx_alias(trimmed) {
        return Some(id.to_string());
    }

    let spaced = trimmed.replace('/', " OR ");
    let tokens: Vec<String> = spaced
        .split_whitespace()
        .map(|token| match token {
            "or" | "Or" => "OR".to_string(),
            "and" | "And" => "AND".to_string(),
            "OR" | "AND" | "WITH" => token.to_string(),
            _ => {
                let bare = token.trim_matches(|c| c == '(' || c == ')');
                match spdx_alias(bare) {
                    Some(id) => token.replace(bare, id),
                    None => token.to_string(),
                }
            }
        })
        .collect();
    Some(tokens.join(" "))
}

/// License family of a raw license string or SPDX expression.
///
/// `OR` alternatives resolve to the most permissive family, `AND`
/// combinations to the most restrictive; `WITH` exceptions are ignored.
pub fn license_kind(raw: &str) -> LicenseKind {
    let lower = raw.to_lowercase();
    if lower.contains("proprietary") || lower.contains("commercial") {
        return LicenseKind::Proprietary;
    }
    let Some(expr) = normalize_license(raw) else {
        return LicenseKind::Unknown;
    };
    let expr = expr.replace(['(', ')'], "");

    if expr.contains(" OR ") {
        return expr
            .split(" OR ")
            .map(single_kind)
            .filter(|k| *k != LicenseKind::Unknown)
            .min_by_key(restrictiveness)
            .unwrap_or(LicenseKind::Unknown);
    }
    if expr.contains(" AND ") {
        let kinds: Vec<LicenseKind> = expr.split(" AND ").map(single_kind).collect();
        if kinds.contains(&LicenseKind::Unknown) {
            return LicenseKind::Unknown;
        }
        return kinds
            .into_iter()
            .max_by_key(restrictiveness)
            .unwrap_or(LicenseKind::Unknown);
    }
    single_kind(&expr)
}

fn single_kind(id: &str) -> LicenseKind {
    kind_of(id.split(" WITH ").next().unwrap_or(id))
}

fn restrictiveness(kind: &LicenseKind) -> u8 {
    match kind {
        LicenseKind::Permissive => 0,
        LicenseKind::WeakCopyleft => 1,
        LicenseKind::StrongCopyleft => 2,
        LicenseKind::Proprietary => 3,
        LicenseKind::Unknown => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_license() {
        assert_eq!(normalize_license("MIT/Apache-2.0").as_deref(), Some("MIT OR Apache-2.0"));
        assert_eq!(normalize_license("The MIT License").as_deref(), Some("MIT"));
        assert_eq!(normalize_license("(mit or GPLv3)").as_deref(), Some("(MIT OR GPL-3.0)"));
        assert_eq!(normalize_license("Acme-EULA").as_deref(), Some("Acme-EULA"));
        assert_eq!(normalize_license("  "), None);
    }

    #[test]
    fn test_or_picks_most_permissive() {
        assert_eq!(license_kind("MIT OR GPL-3.0"), LicenseKind::Permissive);
        assert_eq!(license_kind("GPL-3.0/LGPL-3.0"), LicenseKind::WeakCopyleft);
    }

    #[test]
    fn test_and_picks_most_restrictive() {
        assert_eq!(license_kind("MIT AND GPL-3.0"), LicenseKind::StrongCopyleft);
        assert_eq!(license_kind("MIT AND Acme-EULA"), LicenseKind::Unknown);
    }

    #[test]
    fn test_exceptions_and_proprietary() {
        assert_eq!(
            license_kind("GPL-2.0 WITH Classpath-exception-2.0"),
            LicenseKind::StrongCopyleft
        );
        assert_eq!(license_kind("Proprietary"), LicenseKind::Proprietary);
        assert_eq!(license_kind("Commercial license"), LicenseKind::Proprietary);
        assert_eq!(license_kind(""), LicenseKind::Unknown);
    }
}
