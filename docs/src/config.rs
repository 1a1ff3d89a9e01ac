//! Generator configuration, loadable from TOML.
//!
//! ```toml
//! format = "md"
//! include_css = false
//! default_language = "en"
//! prefix_policy = "stored"
//!
//! [prefixes]
//! ex = "https://example.org/"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use ontdoc_model::OutputFormat;
use serde::Deserialize;

use crate::error::{Error, Result};

/// How namespace prefixes are found for IRIs the document mentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixPolicy {
    /// Only prefixes known locally: configured, declared in the source, or
    /// well-known.
    #[default]
    Stored,
    /// Local prefixes first, then a prefix.cc lookup (needs the `online`
    /// feature).
    Online,
}

impl FromStr for PrefixPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stored" => Ok(PrefixPolicy::Stored),
            "online" => Ok(PrefixPolicy::Online),
            other => Err(format!(
                "unknown prefix policy '{other}' (expected stored or online)"
            )),
        }
    }
}

/// Options consumed by [`crate::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output markup.
    pub format: OutputFormat,
    /// Inline the stylesheet into HTML output instead of linking it.
    pub include_css: bool,
    /// Preferred language tag when a field has several literals.
    pub default_language: String,
    /// Prefix resolution policy.
    pub prefix_policy: PrefixPolicy,
    /// Extra prefix bindings; these win over every other source.
    pub prefixes: BTreeMap<String, String>,
    /// Where the RDF source can be downloaded, shown in the metadata.
    pub source_link: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            include_css: false,
            default_language: String::from("en"),
            prefix_policy: PrefixPolicy::default(),
            prefixes: BTreeMap::new(),
            source_link: None,
        }
    }
}

impl Config {
    /// Parses a TOML document. Absent keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for malformed TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Config`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_language, "en");
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_toml_str(
            r#"
format = "adoc"
include_css = true
default_language = "de"
prefix_policy = "online"
source_link = "https://example.org/onto.ttl"

[prefixes]
ex = "https://example.org/"
"#,
        )
        .unwrap();
        assert_eq!(config.format, OutputFormat::AsciiDoc);
        assert!(config.include_css);
        assert_eq!(config.default_language, "de");
        assert_eq!(config.prefix_policy, PrefixPolicy::Online);
        assert_eq!(config.prefixes["ex"], "https://example.org/");
        assert_eq!(
            config.source_link.as_deref(),
            Some("https://example.org/onto.ttl")
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            Config::from_toml_str("colour = \"red\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn markdown_alias_accepted() {
        let config = Config::from_toml_str("format = \"markdown\"").unwrap();
        assert_eq!(config.format, OutputFormat::Markdown);
    }
}
