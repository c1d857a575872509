//! Entry, output, and bundle-splitting parts.

use super::Part;
use crate::config::{EntryPoint, OutputSection, PartialConfig, PluginSpec, ResolveSection};
use crate::error::ComposeError;
use serde_json::json;

/// Options for [`split_bundle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Name of the extracted chunk (e.g. `vendor`).
    pub name: String,
    /// Modules pulled out of the main bundle into the chunk.
    pub modules: Vec<String>,
}

/// Main application entry chunk, rooted at the project's app directory.
pub fn app_entry() -> Part {
    Part::new("app-entry", |cx| {
        if cx.paths.app.is_empty() {
            return Err(ComposeError::part("app-entry", "project app path is empty"));
        }
        let mut config = PartialConfig::default();
        config
            .entry
            .insert("app".to_string(), EntryPoint::Single(cx.paths.app.clone()));
        Ok(config)
    })
}

/// Separate style entry chunk from the project's style files.
pub fn style_entry() -> Part {
    Part::new("style-entry", |cx| {
        if cx.paths.style.is_empty() {
            return Err(ComposeError::part("style-entry", "no style entry files"));
        }
        let mut config = PartialConfig::default();
        config.entry.insert(
            "style".to_string(),
            EntryPoint::Multi(cx.paths.style.clone()),
        );
        Ok(config)
    })
}

/// Plain output naming into the project's build directory.
pub fn base_output() -> Part {
    Part::new("base-output", |cx| {
        if cx.paths.build.is_empty() {
            return Err(ComposeError::part("base-output", "build directory is empty"));
        }
        Ok(PartialConfig {
            output: OutputSection {
                path: Some(cx.paths.build.clone()),
                filename: Some("[name].js".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
    })
}

/// Content-hashed output naming for reliable long-term caching.
///
/// Overrides the filename pattern from [`base_output`] when merged after it.
pub fn hashed_output() -> Part {
    Part::new("hashed-output", |cx| {
        if cx.paths.build.is_empty() {
            return Err(ComposeError::part(
                "hashed-output",
                "build directory is empty",
            ));
        }
        Ok(PartialConfig {
            output: OutputSection {
                path: Some(cx.paths.build.clone()),
                filename: Some("[name].[chunkhash].js".to_string()),
                chunk_filename: Some("[chunkhash].js".to_string()),
                ..Default::default()
            },
            ..Default::default()
        })
    })
}

/// Module resolution extensions, tried in list order.
pub fn resolve_extensions(extensions: Vec<String>) -> Part {
    Part::pure("resolve-extensions", move |_| PartialConfig {
        resolve: ResolveSection {
            extensions: extensions.clone(),
        },
        ..Default::default()
    })
}

/// Source-map style for the emitted bundles.
pub fn devtool(style: impl Into<String>) -> Part {
    let style = style.into();
    Part::pure("devtool", move |_| PartialConfig {
        devtool: Some(style.clone()),
        ..Default::default()
    })
}

/// Split named modules into their own chunk, plus a manifest chunk so
/// the runtime bookkeeping does not invalidate the chunk hash.
pub fn split_bundle(options: SplitOptions) -> Part {
    Part::new("split-bundle", move |_| {
        if options.modules.is_empty() {
            return Err(ComposeError::part("split-bundle", "no modules to split"));
        }
        let mut config = PartialConfig::default();
        config.entry.insert(
            options.name.clone(),
            EntryPoint::Multi(options.modules.clone()),
        );
        config.plugins.push(PluginSpec::new(
            "commons-chunk",
            json!({
                "names": [options.name, "manifest"],
                "minChunks": "Infinity",
            }),
        ));
        Ok(config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{BuildContext, ProjectPaths};

    #[test]
    fn app_entry_uses_project_path() {
        let cx = BuildContext::default();
        let config = app_entry().produce(&cx).unwrap();
        assert_eq!(config.entry["app"], EntryPoint::Single("app".into()));
    }

    #[test]
    fn app_entry_rejects_empty_path() {
        let cx = BuildContext {
            paths: ProjectPaths {
                app: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = app_entry().produce(&cx).unwrap_err();
        assert!(err.to_string().contains("app-entry"));
    }

    #[test]
    fn hashed_output_carries_hash_placeholder() {
        let cx = BuildContext::default();
        let config = hashed_output().produce(&cx).unwrap();
        assert!(
            config
                .output
                .filename
                .as_deref()
                .unwrap()
                .contains("[chunkhash]")
        );
    }

    #[test]
    fn split_bundle_declares_chunk_and_plugin() {
        let cx = BuildContext::default();
        let config = split_bundle(SplitOptions {
            name: "vendor".into(),
            modules: vec!["react".into(), "react-dom".into()],
        })
        .produce(&cx)
        .unwrap();

        assert_eq!(
            config.entry["vendor"],
            EntryPoint::Multi(vec!["react".into(), "react-dom".into()])
        );
        assert_eq!(config.plugins.len(), 1);
        assert_eq!(config.plugins[0].name, "commons-chunk");
    }

    #[test]
    fn split_bundle_rejects_empty_module_list() {
        let cx = BuildContext::default();
        let err = split_bundle(SplitOptions {
            name: "vendor".into(),
            modules: vec![],
        })
        .produce(&cx)
        .unwrap_err();
        assert!(err.to_string().contains("split-bundle"));
    }
}
