//! packplan — declarative bundler configuration composer.
//!
//! Assembles a final bundler configuration from small, named configuration
//! parts, selected and merged according to the build context. The composer
//! produces one static, validated configuration tree and hands it off; it is
//! not a bundler, a task runner, or a dependency resolver.

pub mod cli;
pub mod compose;
pub mod config;
pub mod context;
pub mod error;
pub mod parts;
pub mod plan;
