//! Build context resolution.
//!
//! Derives the discrete build mode from the invocation signal and snapshots
//! the environment hints exactly once, so parts never read ambient state
//! themselves.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Discrete build mode tag, resolved once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    /// Production build: hashed output, minification, extracted styles.
    Build,
    /// Test run: coverage instrumentation, inline source maps.
    Test,
    /// Local development with a live-reload server (default).
    #[default]
    Develop,
}

impl Context {
    /// Resolve a raw invocation signal to a context.
    ///
    /// Exact string match against the known tags; unknown or absent signals
    /// fall back to [`Context::Develop`]. Total — resolution never fails.
    pub fn resolve(signal: Option<&str>) -> Self {
        match signal {
            Some("build") | Some("stats") => Context::Build,
            Some("test") | Some("test:tdd") => Context::Test,
            Some(other) => {
                debug!(signal = other, "unknown invocation signal, using develop");
                Context::Develop
            }
            None => Context::Develop,
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Build => write!(f, "build"),
            Context::Test => write!(f, "test"),
            Context::Develop => write!(f, "develop"),
        }
    }
}

/// Environment hints consumed by specific parts.
///
/// Absent values fall back to part-internal defaults (the dev server leaves
/// host/port unset so the engine uses its own defaults).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvHints {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Poll for file changes instead of relying on filesystem events.
    pub poll: bool,
}

impl EnvHints {
    /// Snapshot `HOST`, `PORT`, and `ENABLE_POLLING` from the process
    /// environment.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").ok().filter(|h| !h.is_empty());
        let port = std::env::var("PORT").ok().and_then(|p| p.parse().ok());
        let poll = std::env::var("ENABLE_POLLING")
            .map(|v| !v.is_empty() && v != "0" && v != "false")
            .unwrap_or(false);
        Self { host, port, poll }
    }
}

/// Filesystem layout of the project being bundled.
///
/// Paths are carried as engine-facing strings; the composer never touches the
/// filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// Application source directory (main entry chunk).
    pub app: String,
    /// Style entry files.
    pub style: Vec<String>,
    /// Build output directory.
    pub build: String,
    /// Test sources directory.
    pub test: String,
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self {
            app: "app".to_string(),
            style: vec!["app/stylus/master.styl".to_string()],
            build: "build".to_string(),
            test: "tests".to_string(),
        }
    }
}

/// Everything a part may consult while producing its fragment.
///
/// Constructed once by the resolver; parts receive it read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildContext {
    pub paths: ProjectPaths,
    pub hints: EnvHints,
}

impl BuildContext {
    pub fn new(paths: ProjectPaths, hints: EnvHints) -> Self {
        Self { paths, hints }
    }

    /// Default project layout plus a fresh environment snapshot.
    pub fn from_env() -> Self {
        Self::new(ProjectPaths::default(), EnvHints::from_env())
    }
}
