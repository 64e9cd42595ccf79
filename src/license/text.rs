/// Identify the license in a LICENSE file by its distinctive wording.
/// An explicit `SPDX-License-Identifier:` line takes precedence.
pub fn identify_license_text(content: &str) -> Option<String> {
    if let Some(id) = content.lines().find_map(|line| {
        line.split_once("SPDX-License-Identifier:")
            .map(|(_, id)| id.trim().to_string())
    }) {
        if !id.is_empty() {
            return Some(id);
        }
    }

    let text = content
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    let has = |phrase: &str| text.contains(phrase);

    let id = if has("gnu affero general public license") {
        "AGPL-3.0"
    } else if has("gnu lesser general public license") {
        if has("version 3") { "LGPL-3.0" } else { "LGPL-2.1" }
    } else if has("gnu general public license") {
        if has("version 3") { "GPL-3.0" } else { "GPL-2.0" }
    } else if has("mozilla public license") {
        "MPL-2.0"
    } else if has("eclipse public license") {
        if has("version 2.0") || has("v 2.0") { "EPL-2.0" } else { "EPL-1.0" }
    } else if has("apache license") && has("version 2.0") {
        "Apache-2.0"
    } else if has("boost software license") {
        "BSL-1.0"
    } else if has("free and unencumbered software released into the public domain") {
        "Unlicense"
    } else if has("permission is hereby granted, free of charge") {
        "MIT"
    } else if has("permission to use, copy, modify, and/or distribute this software for any purpose") {
        "ISC"
    } else if has("redistribution and use in source and binary forms") {
        if has("neither the name") || has("names of its contributors") {
            "BSD-3-Clause"
        } else {
            "BSD-2-Clause"
        }
    } else {
        return None;
    };
    Some(id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identify_common_texts() {
        let mit = "MIT License\n\nCopyright (c) 2024 Acme\n\nPermission is hereby granted, free of charge, to any person\nobtaining a copy of this software";
        assert_eq!(identify_license_text(mit).as_deref(), Some("MIT"));

        let apache = "                                 Apache License\n                           Version 2.0, January 2004";
        assert_eq!(identify_license_text(apache).as_deref(), Some("Apache-2.0"));

        let gpl = "GNU GENERAL PUBLIC LICENSE\nVersion 3, 29 June 2007";
        assert_eq!(identify_license_text(gpl).as_deref(), Some("GPL-3.0"));

        let bsd2 = "Redistribution and use in source and binary forms, with or without\nmodification, are permitted";
        assert_eq!(identify_license_text(bsd2).as_deref(), Some("BSD-2-Clause"));
    }

    #[test]
    fn test_spdx_header_and_unknown() {
        assert_eq!(
            identify_license_text("// SPDX-License-Identifier: MPL-2.0\n").as_deref(),
            Some("MPL-2.0")
        );
        assert_eq!(identify_license_text("All rights reserved."), None);
    }
}
