//! Source-transformation rule parts.
//!
//! Each part injects one rule: a test pattern mapped to a named processing
//! step, limited to the given include paths. Pre-loader rules (lint,
//! coverage) run before the main transformation chain.

use super::Part;
use crate::config::{ModuleSection, PartialConfig, Rule};
use crate::error::ComposeError;

const SCRIPT_TEST: &str = r"\.(js|jsx)$";

fn script_rule(loaders: Vec<String>, include: Vec<String>) -> Rule {
    Rule {
        test: SCRIPT_TEST.to_string(),
        loaders,
        include,
        ..Default::default()
    }
}

/// Transpile scripts under the include paths.
///
/// Caching is enabled on the transpiler for repeat-build performance.
pub fn transpile(include: Vec<String>) -> Part {
    Part::new("transpile", move |_| {
        if include.is_empty() {
            return Err(ComposeError::part("transpile", "include list is empty"));
        }
        Ok(PartialConfig {
            module: ModuleSection {
                loaders: vec![script_rule(
                    vec!["babel?cacheDirectory".to_string()],
                    include.clone(),
                )],
                ..Default::default()
            },
            ..Default::default()
        })
    })
}

/// Lint scripts before transformation.
pub fn lint(include: Vec<String>) -> Part {
    Part::new("lint", move |_| {
        if include.is_empty() {
            return Err(ComposeError::part("lint", "include list is empty"));
        }
        Ok(PartialConfig {
            module: ModuleSection {
                pre_loaders: vec![script_rule(vec!["eslint".to_string()], include.clone())],
                ..Default::default()
            },
            ..Default::default()
        })
    })
}

/// Instrument scripts for coverage reporting before transformation.
pub fn coverage(include: Vec<String>) -> Part {
    Part::new("coverage", move |_| {
        if include.is_empty() {
            return Err(ComposeError::part("coverage", "include list is empty"));
        }
        Ok(PartialConfig {
            module: ModuleSection {
                pre_loaders: vec![script_rule(vec!["isparta".to_string()], include.clone())],
                ..Default::default()
            },
            ..Default::default()
        })
    })
}
