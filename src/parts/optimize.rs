//! Production optimization parts.
//!
//! All three declare plugin descriptors only; the actual minification,
//! substitution, and cleanup run in the downstream engine.

use super::Part;
use crate::config::{PartialConfig, PluginSpec};
use serde_json::{Value, json};

/// Minify emitted bundles.
pub fn minify() -> Part {
    Part::pure("minify", |_| PartialConfig {
        plugins: vec![PluginSpec::new(
            "minify",
            json!({ "compress": { "warnings": false } }),
        )],
        ..Default::default()
    })
}

/// Substitute a free variable with a constant at build time.
///
/// Setting `process.env.NODE_ENV` to `"production"` this way lets the
/// minifier drop development-only branches as dead code.
pub fn define(key: impl Into<String>, value: impl Into<Value>) -> Part {
    let key = key.into();
    let value = value.into();
    Part::pure("define", move |_| {
        let mut substitutions = serde_json::Map::new();
        substitutions.insert(key.clone(), value.clone());
        PartialConfig {
            plugins: vec![PluginSpec::new("define", Value::Object(substitutions))],
            ..Default::default()
        }
    })
}

/// Remove the build directory before emitting a fresh build.
pub fn clean(path: impl Into<String>) -> Part {
    let path = path.into();
    Part::pure("clean", move |_| PartialConfig {
        plugins: vec![PluginSpec::new("clean", json!({ "paths": [path.clone()] }))],
        ..Default::default()
    })
}
