//! Schema validation for the merged configuration.
//!
//! The schema is a closed base shape (the sections of
//! [`PartialConfig`](super::types::PartialConfig)) plus a registry of
//! accepted extension namespaces. Registered namespaces are permissive: any
//! shape is accepted under them, so domain-specific parts can carry their own
//! sub-configuration without the composer knowing its structure.

use super::types::{PartialConfig, Rule};
use crate::error::{ValidationError, ValidationIssue};
use std::collections::BTreeSet;

/// Source-map styles the downstream engine understands.
pub const KNOWN_DEVTOOLS: &[&str] = &[
    "source-map",
    "inline-source-map",
    "eval-source-map",
    "eval",
    "cheap-source-map",
    "cheap-module-source-map",
    "hidden-source-map",
    "nosources-source-map",
];

/// Declarative acceptance rule for the final merged configuration.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    accepted_extensions: BTreeSet<String>,
}

impl Schema {
    /// The base schema: core sections only, no extension namespaces.
    pub fn base() -> Self {
        Self::default()
    }

    /// Register an extension namespace (e.g. `stylus`).
    ///
    /// Contents under a registered namespace are not inspected further.
    pub fn accept_extension(mut self, namespace: impl Into<String>) -> Self {
        self.accepted_extensions.insert(namespace.into());
        self
    }

    /// Whether a namespace is registered.
    pub fn accepts(&self, namespace: &str) -> bool {
        self.accepted_extensions.contains(namespace)
    }

    /// Validate a merged configuration, collecting every violation.
    pub fn validate(&self, config: &PartialConfig) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if config.entry.is_empty() {
            issues.push(ValidationIssue::new("entry", "at least one entry chunk"));
        }
        for (name, chunk) in &config.entry {
            if chunk.modules().iter().any(|m| m.is_empty()) {
                issues.push(ValidationIssue::new(
                    format!("entry.{name}"),
                    "non-empty module paths",
                ));
            }
        }

        if config.output.path.is_none() {
            issues.push(ValidationIssue::new("output.path", "an output directory"));
        }
        if config.output.filename.is_none() {
            issues.push(ValidationIssue::new(
                "output.filename",
                "a filename pattern",
            ));
        }

        if let Some(devtool) = &config.devtool {
            if !KNOWN_DEVTOOLS.contains(&devtool.as_str()) {
                issues.push(ValidationIssue::new(
                    "devtool",
                    format!("one of {KNOWN_DEVTOOLS:?}"),
                ));
            }
        }

        self.check_rules(&config.module.pre_loaders, "module.preLoaders", &mut issues);
        self.check_rules(&config.module.loaders, "module.loaders", &mut issues);

        for (index, plugin) in config.plugins.iter().enumerate() {
            if plugin.name.is_empty() {
                issues.push(ValidationIssue::new(
                    format!("plugins[{index}].name"),
                    "a non-empty plugin name",
                ));
            }
        }

        if config.dev_server.port == Some(0) {
            issues.push(ValidationIssue::new("devServer.port", "a non-zero port"));
        }

        for namespace in config.extensions.keys() {
            if !self.accepts(namespace) {
                issues.push(ValidationIssue::new(
                    namespace.clone(),
                    "a registered extension namespace",
                ));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(issues))
        }
    }

    fn check_rules(&self, rules: &[Rule], section: &str, issues: &mut Vec<ValidationIssue>) {
        for (index, rule) in rules.iter().enumerate() {
            if rule.test.is_empty() {
                issues.push(ValidationIssue::new(
                    format!("{section}[{index}].test"),
                    "a non-empty test pattern",
                ));
            }
            if !rule.has_loader() {
                issues.push(ValidationIssue::new(
                    format!("{section}[{index}]"),
                    "at least one loader",
                ));
            }
        }
    }
}
