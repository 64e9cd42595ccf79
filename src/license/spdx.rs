use crate::models::LicenseKind;

/// License family of one canonical SPDX identifier. A trailing `+` and the
/// `-only` / `-or-later` suffixes do not change the family.
pub fn kind_of(id: &str) -> LicenseKind {
    let id = id.trim().trim_end_matches('+');
    let base = id
        .strip_suffix("-only")
        .or_else(|| id.strip_suffix("-or-later"))
        .unwrap_or(id);
    match base {
        "MIT" | "MIT-0" | "Apache-2.0" | "Apache-1.1" | "BSD-2-Clause" | "BSD-3-Clause"
        | "BSD-4-Clause" | "0BSD" | "ISC" | "Unlicense" | "Zlib" | "CC0-1.0" | "CC-BY-4.0"
        | "WTFPL" | "PSF-2.0" | "Python-2.0" | "BSL-1.0" | "PostgreSQL" | "Artistic-2.0"
        | "BlueOak-1.0.0" | "Ruby" => LicenseKind::Permissive,

        "LGPL-2.0" | "LGPL-2.1" | "LGPL-3.0" | "MPL-2.0" | "MPL-1.1" | "EPL-1.0" | "EPL-2.0"
        | "CDDL-1.0" | "EUPL-1.2" | "OSL-3.0" => LicenseKind::WeakCopyleft,

        "GPL-2.0" | "GPL-3.0" | "AGPL-3.0" | "EUPL-1.1" | "SSPL-1.0" => LicenseKind::StrongCopyleft,

        "UNLICENSED" => LicenseKind::Proprietary,

        _ => LicenseKind::Unknown,
    }
}

/// SPDX identifier for a common free-form license name, if it is one.
pub fn spdx_alias(raw: &str) -> Option<&'static str> {
    let id = match raw.trim().to_lowercase().as_str() {
        "mit" | "mit license" | "the mit license" | "expat" => "MIT",
        "apache 2.0" | "apache-2" | "apache 2" | "apache license 2.0" | "apache license, version 2.0"
        | "apache software license" | "asl 2.0" => "Apache-2.0",
        "bsd" | "bsd license" | "new bsd" | "modified bsd" | "bsd 3-clause" | "3-clause bsd" => "BSD-3-Clause",
        "bsd 2-clause" | "simplified bsd" | "freebsd" => "BSD-2-Clause",
        "isc license" => "ISC",
        "gplv2" | "gpl v2" | "gpl-2" | "gnu gpl v2" | "gnu general public license v2" => "GPL-2.0",
        "gplv3" | "gpl v3" | "gpl-3" | "gnu gpl v3" | "gnu general public license v3" => "GPL-3.0",
        "lgplv2.1" | "lgpl v2.1" | "gnu lgpl v2.1" => "LGPL-2.1",
        "lgplv3" | "lgpl v3" | "gnu lgpl v3" => "LGPL-3.0",
        "agplv3" | "agpl v3" | "gnu agpl v3" => "AGPL-3.0",
        "mpl 2.0" | "mplv2" | "mozilla public license 2.0" => "MPL-2.0",
        "cc0" | "public domain" => "CC0-1.0",
        "unlicense" | "the unlicense" => "Unlicense",
        "proprietary" | "commercial" | "private" => "UNLICENSED",
        _ => return None,
    };
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of() {
        assert_eq!(kind_of("MIT"), LicenseKind::Permissive);
        assert_eq!(kind_of("LGPL-2.1-or-later"), LicenseKind::WeakCopyleft);
        assert_eq!(kind_of("GPL-3.0-only"), LicenseKind::StrongCopyleft);
        assert_eq!(kind_of("GPL-2.0+"), LicenseKind::StrongCopyleft);
        assert_eq!(kind_of("UNLICENSED"), LicenseKind::Proprietary);
        assert_eq!(kind_of("Acme-EULA"), LicenseKind::Unknown);
    }

    #[test]
    fn test_spdx_alias() {
        assert_eq!(spdx_alias("The MIT License"), Some("MIT"));
        assert_eq!(spdx_alias("Apache License, Version 2.0"), Some("Apache-2.0"));
        assert_eq!(spdx_alias("GPLv3"), Some("GPL-3.0"));
        assert_eq!(spdx_alias("MIT"), Some("MIT"));
        assert_eq!(spdx_alias("Apache-2.0"), None);
    }
}
