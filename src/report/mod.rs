//! Report renderers for profiles.
//!
//! - [`terminal`]: colored summary box and tables; respects `--verbose` / `--quiet`.
//! - JSON output is the profile serialized as-is ([`to_json`]).

use anyhow::Result;
use serde::Serialize;

pub mod terminal;

/// Pretty-printed JSON for any profile.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkspaceSummary;

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = to_json(&WorkspaceSummary::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["frontend"].as_array().unwrap().is_empty());
        assert!(value.get("languages").is_some());
    }
}
