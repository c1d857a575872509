//! Auxiliary tooling parts: page template, dependency auto-install, and
//! module exposure for instrumentation.

use super::Part;
use crate::config::{ModuleSection, PartialConfig, PluginSpec, Rule};
use crate::error::ComposeError;
use serde_json::json;

/// Options for [`page_template`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Document title of the generated page.
    pub title: String,
    /// Id of the element the application mounts into.
    pub mount_id: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "Application".to_string(),
            mount_id: "app".to_string(),
        }
    }
}

/// Options for [`expose_module`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposeOptions {
    /// Module to expose.
    pub module: String,
    /// Global name it becomes reachable under.
    pub global: String,
}

/// Generate the host page from a template.
pub fn page_template(options: PageOptions) -> Part {
    Part::new("page-template", move |_| {
        if options.mount_id.is_empty() {
            return Err(ComposeError::part("page-template", "mount id is empty"));
        }
        Ok(PartialConfig {
            plugins: vec![PluginSpec::new(
                "html-template",
                json!({
                    "title": options.title,
                    "appMountId": options.mount_id,
                    "inject": false,
                }),
            )],
            ..Default::default()
        })
    })
}

/// Install missing dependencies as they are imported during development.
pub fn auto_install() -> Part {
    Part::pure("auto-install", |_| PartialConfig {
        plugins: vec![PluginSpec::bare("npm-install")],
        ..Default::default()
    })
}

/// Expose a module under a global name so browser tooling can reach it.
pub fn expose_module(options: ExposeOptions) -> Part {
    Part::new("expose-module", move |_| {
        if options.module.is_empty() {
            return Err(ComposeError::part("expose-module", "module name is empty"));
        }
        Ok(PartialConfig {
            module: ModuleSection {
                loaders: vec![Rule {
                    test: options.module.clone(),
                    loader: Some(format!("expose?{}", options.global)),
                    ..Default::default()
                }],
                ..Default::default()
            },
            ..Default::default()
        })
    })
}
