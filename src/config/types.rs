//! Typed configuration tree shared by parts, composer, and validator.
//!
//! The tree mirrors the shape the downstream bundling engine consumes; key
//! names and nesting are its wire contract, so every serde rename here is
//! load-bearing. All keyed collections are `BTreeMap` so serialization order
//! never depends on hash iteration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An entry chunk: a single module path or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryPoint {
    Single(String),
    Multi(Vec<String>),
}

impl EntryPoint {
    /// All module paths in this chunk, in declaration order.
    pub fn modules(&self) -> Vec<&str> {
        match self {
            EntryPoint::Single(path) => vec![path.as_str()],
            EntryPoint::Multi(paths) => paths.iter().map(|p| p.as_str()).collect(),
        }
    }
}

/// Output section: where bundles land and how emitted files are named.
///
/// Filename patterns may carry engine placeholders such as `[name]` and
/// `[chunkhash]`; they are opaque to the composer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

impl OutputSection {
    pub fn is_empty(&self) -> bool {
        self.path.is_none()
            && self.filename.is_none()
            && self.chunk_filename.is_none()
            && self.public_path.is_none()
    }
}

/// Module resolution settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveSection {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
}

impl ResolveSection {
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

/// A module transformation rule: a test pattern mapped to named processing
/// steps, optionally limited to specific include paths.
///
/// The test pattern is carried as data; the downstream engine compiles it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub test: String,

    /// Named processing steps, applied right-to-left by the engine.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loaders: Vec<String>,

    /// Single pre-joined loader expression, when the chain is one string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
}

impl Rule {
    /// Whether this rule names at least one processing step.
    pub fn has_loader(&self) -> bool {
        !self.loaders.is_empty() || self.loader.is_some()
    }
}

/// Module section: ordered rule lists. Pre-loader rules run before the main
/// chain (linting, instrumentation).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSection {
    #[serde(default, rename = "preLoaders", skip_serializing_if = "Vec::is_empty")]
    pub pre_loaders: Vec<Rule>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loaders: Vec<Rule>,
}

impl ModuleSection {
    pub fn is_empty(&self) -> bool {
        self.pre_loaders.is_empty() && self.loaders.is_empty()
    }
}

/// A plugin as a data descriptor: name plus parameters.
///
/// The composer never instantiates plugins; an adapter at the boundary with
/// the bundling engine maps descriptors to concrete plugin instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginSpec {
    pub name: String,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl PluginSpec {
    pub fn new(name: impl Into<String>, options: Value) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    /// A descriptor with no parameters.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::new(name, Value::Null)
    }
}

/// Development server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_api_fallback: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hot: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl DevServerSection {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// File-watching settings, used when inotify-style watching is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_timeout: Option<u64>,

    /// Polling interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<u64>,
}

/// A sparse configuration fragment.
///
/// Every part produces one of these, touching only the sections relevant to
/// its concern; the composer folds fragments together with the structured
/// merge in [`crate::config::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub entry: BTreeMap<String, EntryPoint>,

    #[serde(default, skip_serializing_if = "OutputSection::is_empty")]
    pub output: OutputSection,

    #[serde(default, skip_serializing_if = "ResolveSection::is_empty")]
    pub resolve: ResolveSection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<String>,

    #[serde(default, skip_serializing_if = "ModuleSection::is_empty")]
    pub module: ModuleSection,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginSpec>,

    #[serde(
        default,
        rename = "devServer",
        skip_serializing_if = "DevServerSection::is_empty"
    )]
    pub dev_server: DevServerSection,

    #[serde(
        default,
        rename = "watchOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub watch_options: Option<WatchSection>,

    /// Extension namespaces (e.g. `stylus`), emitted at the top level of the
    /// configuration. Accepted only when registered with the schema.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

impl PartialConfig {
    /// Plugin descriptors with the given name.
    pub fn plugins_named(&self, name: &str) -> Vec<&PluginSpec> {
        self.plugins.iter().filter(|p| p.name == name).collect()
    }
}

/// The composed, validated configuration handed to the bundling engine.
///
/// Immutable once produced; sections are reachable read-only through `Deref`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FinalConfig(PartialConfig);

impl FinalConfig {
    pub(crate) fn new(config: PartialConfig) -> Self {
        Self(config)
    }

    /// Render as pretty-printed JSON.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }

    /// Render as YAML.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.0)
    }

    /// Give up immutability and return the underlying tree.
    pub fn into_inner(self) -> PartialConfig {
        self.0
    }
}

impl std::ops::Deref for FinalConfig {
    type Target = PartialConfig;

    fn deref(&self) -> &PartialConfig {
        &self.0
    }
}
