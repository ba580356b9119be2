//! Group mapping files for `collapse` and `recode`.
//!
//! A mapping file is TOML with an optional `fallback` and an ordered list of
//! `[[groups]]` tables:
//!
//! ```toml
//! fallback = "Other"
//!
//! [[groups]]
//! name = "fruit"
//! levels = ["apple", "pear"]
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use catfact_model::GroupSpec;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingFile {
    /// Catch-all level for `collapse`; a `--fallback` flag overrides it.
    #[serde(default)]
    pub fallback: Option<String>,
    #[serde(default)]
    pub groups: GroupSpec,
}

impl MappingFile {
    /// Parse a mapping file from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse mapping file")
    }
}

/// Read and parse a mapping file.
pub fn load_mapping_file(path: &Path) -> Result<MappingFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read mapping file {}", path.display()))?;
    let mapping = MappingFile::from_toml(&text)
        .with_context(|| format!("load mapping file {}", path.display()))?;
    debug!(
        path = %path.display(),
        groups = mapping.groups.len(),
        fallback = mapping.fallback.as_deref(),
        "loaded mapping file"
    );
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fallback_and_groups() {
        let mapping = MappingFile::from_toml(
            r#"
            fallback = "rest"

            [[groups]]
            name = "x"
            levels = ["a", "b"]
            "#,
        )
        .unwrap();
        assert_eq!(mapping.fallback.as_deref(), Some("rest"));
        assert_eq!(mapping.groups, GroupSpec::new().group("x", ["a", "b"]));
    }

    #[test]
    fn empty_file_is_an_empty_mapping() {
        assert_eq!(MappingFile::from_toml("").unwrap(), MappingFile::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(MappingFile::from_toml("fallbak = \"x\"").is_err());
    }
}
