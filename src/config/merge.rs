//! Structured merge over the typed configuration tree.
//!
//! Merge policy, applied section by section:
//! - object-valued sections merge recursively, later fields overriding
//!   earlier ones;
//! - list-valued sections (rules, plugins, resolve extensions) concatenate,
//!   right appended after left — plugin and rule lists compose additively
//!   across parts, and replacing them would silently disable prior-declared
//!   behavior;
//! - scalars: the later value overrides the earlier one.
//!
//! Extension namespaces are loose `serde_json::Value` trees merged by
//! [`deep_merge`] under the same policy.

use super::types::{DevServerSection, OutputSection, PartialConfig};
use serde_json::Value;

/// Merge two fragments, with `overlay` taking precedence over `base`.
pub fn merge(base: PartialConfig, overlay: PartialConfig) -> PartialConfig {
    let mut entry = base.entry;
    entry.extend(overlay.entry);

    let mut resolve = base.resolve;
    resolve.extensions.extend(overlay.resolve.extensions);

    let mut module = base.module;
    module.pre_loaders.extend(overlay.module.pre_loaders);
    module.loaders.extend(overlay.module.loaders);

    let mut plugins = base.plugins;
    plugins.extend(overlay.plugins);

    let mut extensions = base.extensions;
    for (namespace, value) in overlay.extensions {
        let merged = match extensions.remove(&namespace) {
            Some(existing) => deep_merge(existing, value),
            None => value,
        };
        extensions.insert(namespace, merged);
    }

    PartialConfig {
        entry,
        output: merge_output(base.output, overlay.output),
        resolve,
        devtool: overlay.devtool.or(base.devtool),
        module,
        plugins,
        dev_server: merge_dev_server(base.dev_server, overlay.dev_server),
        watch_options: overlay.watch_options.or(base.watch_options),
        extensions,
    }
}

/// Merge a sequence of fragments left-to-right.
///
/// Equivalent to folding [`merge`] over the list.
pub fn merge_all(fragments: impl IntoIterator<Item = PartialConfig>) -> PartialConfig {
    fragments
        .into_iter()
        .fold(PartialConfig::default(), merge)
}

fn merge_output(base: OutputSection, overlay: OutputSection) -> OutputSection {
    OutputSection {
        path: overlay.path.or(base.path),
        filename: overlay.filename.or(base.filename),
        chunk_filename: overlay.chunk_filename.or(base.chunk_filename),
        public_path: overlay.public_path.or(base.public_path),
    }
}

fn merge_dev_server(base: DevServerSection, overlay: DevServerSection) -> DevServerSection {
    DevServerSection {
        history_api_fallback: overlay.history_api_fallback.or(base.history_api_fallback),
        hot: overlay.hot.or(base.hot),
        inline: overlay.inline.or(base.inline),
        stats: overlay.stats.or(base.stats),
        host: overlay.host.or(base.host),
        port: overlay.port.or(base.port),
    }
}

/// Deep merge two loose values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Arrays are concatenated, overlay items after base items
/// - If overlay is null, the base value is preserved (null means "not specified")
/// - Anything else: overlay replaces base entirely
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged_value = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged_value);
            }
            Value::Object(base_map)
        }
        (Value::Array(mut base_items), Value::Array(overlay_items)) => {
            base_items.extend(overlay_items);
            Value::Array(base_items)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}
