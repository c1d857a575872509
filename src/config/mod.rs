//! Typed configuration tree, structured merge, and schema validation.
//!
//! The tree's key names and nesting are the wire contract with the
//! downstream bundling engine and must be preserved exactly.
//!
//! ## Merge Strategy
//! - Object-valued sections: merged field-by-field, later values win
//! - List-valued sections (rules, plugins, resolve extensions): concatenated
//! - Extension namespaces: generic deep merge, arrays concatenated

mod merge;
mod types;
mod validate;

pub use merge::{deep_merge, merge, merge_all};
pub use types::{
    DevServerSection, EntryPoint, FinalConfig, ModuleSection, OutputSection, PartialConfig,
    PluginSpec, ResolveSection, Rule, WatchSection,
};
pub use validate::{KNOWN_DEVTOOLS, Schema};
