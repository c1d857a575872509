//! Style-pipeline parts.
//!
//! Both parts contribute a `stylus` extension namespace carrying the
//! post-processor chain; the namespace must be registered with the schema
//! (see [`Schema::accept_extension`](crate::config::Schema::accept_extension)).

use super::Part;
use crate::config::{ModuleSection, PartialConfig, PluginSpec, Rule};
use crate::error::ComposeError;
use serde_json::{Value, json};

const STYLE_TEST: &str = r"\.styl$";

fn stylus_namespace() -> Value {
    json!({
        "use": [
            { "name": "poststylus", "options": ["autoprefixer"] },
        ],
    })
}

/// Inline styles into the bundle (development: fast rebuilds, hot reload).
pub fn inline_styles(include: Vec<String>) -> Part {
    Part::new("inline-styles", move |_| {
        if include.is_empty() {
            return Err(ComposeError::part("inline-styles", "include list is empty"));
        }
        let mut config = PartialConfig {
            module: ModuleSection {
                loaders: vec![Rule {
                    test: STYLE_TEST.to_string(),
                    loaders: vec![
                        "style".to_string(),
                        "css".to_string(),
                        "stylus".to_string(),
                    ],
                    include: include.clone(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        };
        config
            .extensions
            .insert("stylus".to_string(), stylus_namespace());
        Ok(config)
    })
}

/// Extract styles into a standalone, content-hashed stylesheet (production:
/// cacheable CSS, no flash of unstyled content).
pub fn extract_styles(include: Vec<String>) -> Part {
    Part::new("extract-styles", move |_| {
        if include.is_empty() {
            return Err(ComposeError::part(
                "extract-styles",
                "include list is empty",
            ));
        }
        let mut config = PartialConfig {
            module: ModuleSection {
                loaders: vec![Rule {
                    test: STYLE_TEST.to_string(),
                    loader: Some("extract-text?fallback=style!css!stylus".to_string()),
                    include: include.clone(),
                    ..Default::default()
                }],
                ..Default::default()
            },
            plugins: vec![PluginSpec::new(
                "extract-text",
                json!({ "filename": "[name].[chunkhash].css" }),
            )],
            ..Default::default()
        };
        config
            .extensions
            .insert("stylus".to_string(), stylus_namespace());
        Ok(config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BuildContext;

    #[test]
    fn inline_styles_chains_loaders_in_order() {
        let cx = BuildContext::default();
        let config = inline_styles(vec!["app/stylus/master.styl".into()])
            .produce(&cx)
            .unwrap();

        let rule = &config.module.loaders[0];
        assert_eq!(rule.loaders, vec!["style", "css", "stylus"]);
        assert!(config.extensions.contains_key("stylus"));
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn extract_styles_declares_stylesheet_plugin() {
        let cx = BuildContext::default();
        let config = extract_styles(vec!["app/stylus/master.styl".into()])
            .produce(&cx)
            .unwrap();

        assert_eq!(config.plugins.len(), 1);
        assert_eq!(config.plugins[0].name, "extract-text");
        assert!(
            config.plugins[0]
                .options
                .get("filename")
                .unwrap()
                .as_str()
                .unwrap()
                .contains("[chunkhash]")
        );
        assert!(config.extensions.contains_key("stylus"));
    }
}
