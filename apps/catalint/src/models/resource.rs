//! Catalog resource schema as read from a YAML document.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value as Yaml;
use std::collections::BTreeMap;

/// Label carrying the resource version.
pub const VERSION_LABEL: &str = "app.kubernetes.io/version";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A parsed catalog entry. Read-only after parsing.
pub struct Resource {
    #[serde(default)]
    pub api_version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default = "empty_spec")]
    pub spec: Yaml,
}

fn empty_spec() -> Yaml {
    Yaml::Null
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Object metadata; labels and annotations are string maps.
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "string_map")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "string_map")]
    pub annotations: BTreeMap<String, String>,
}

/// Label and annotation values must be strings; unquoted numbers would lose
/// their text (`0.10` reads back as `0.1`).
fn string_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Yaml>>::deserialize(deserializer)?.unwrap_or_default();
    raw.into_iter()
        .map(|(key, value)| match value {
            Yaml::String(s) => Ok((key, s)),
            _ => Err(D::Error::custom(format!(
                "value of `{key}` must be a quoted string"
            ))),
        })
        .collect()
}

impl Resource {
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Version taken from the `app.kubernetes.io/version` label, or an
    /// empty string when the label is missing.
    pub fn version(&self) -> &str {
        self.label(VERSION_LABEL).unwrap_or_default()
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.metadata.labels.get(key).map(String::as_str)
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.metadata.annotations.get(key).map(String::as_str)
    }

    /// Look up a top-level field of `spec`.
    pub fn spec_field(&self, key: &str) -> Option<&Yaml> {
        self.spec.get(key)
    }
}
