//! Catalogue of configuration parts.
//!
//! Each part is a named, pure producer of one sparse configuration fragment.
//! A catalogue function takes an options record and returns a [`Part`]; the
//! composer later invokes the part with the shared
//! [`BuildContext`](crate::context::BuildContext). Parts never read ambient
//! state and never perform I/O — cleanup and install actions are declared as
//! plugin descriptors in the returned fragment, executed downstream.
//!
//! Merge order, not invocation order, determines precedence, so no part may
//! assume another has already run.

mod bundle;
mod optimize;
mod rules;
mod server;
mod style;
mod tooling;

pub use bundle::{
    SplitOptions, app_entry, base_output, devtool, hashed_output, resolve_extensions,
    split_bundle, style_entry,
};
pub use optimize::{clean, define, minify};
pub use rules::{coverage, lint, transpile};
pub use server::dev_server;
pub use style::{extract_styles, inline_styles};
pub use tooling::{ExposeOptions, PageOptions, auto_install, expose_module, page_template};

use crate::config::PartialConfig;
use crate::context::BuildContext;
use crate::error::ComposeResult;
use std::fmt;

type Producer = Box<dyn Fn(&BuildContext) -> ComposeResult<PartialConfig>>;

/// A named configuration part awaiting invocation by the composer.
pub struct Part {
    name: &'static str,
    produce: Producer,
}

impl Part {
    /// Wrap a fallible producer under a stable part name.
    pub fn new(
        name: &'static str,
        produce: impl Fn(&BuildContext) -> ComposeResult<PartialConfig> + 'static,
    ) -> Self {
        Self {
            name,
            produce: Box::new(produce),
        }
    }

    /// Wrap a producer that cannot fail.
    pub fn pure(
        name: &'static str,
        produce: impl Fn(&BuildContext) -> PartialConfig + 'static,
    ) -> Self {
        Self::new(name, move |cx| Ok(produce(cx)))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Produce this part's fragment with the shared context.
    pub fn produce(&self, cx: &BuildContext) -> ComposeResult<PartialConfig> {
        (self.produce)(cx)
    }
}

impl fmt::Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Part").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_are_referentially_transparent() {
        // Identical options + context must yield structurally equal fragments.
        let cx = BuildContext::default();
        for part in [
            app_entry(),
            transpile(vec!["app".into()]),
            dev_server(),
            minify(),
            inline_styles(vec!["app/stylus/master.styl".into()]),
        ] {
            let first = part.produce(&cx).unwrap();
            let second = part.produce(&cx).unwrap();
            assert_eq!(first, second, "part '{}' is not pure", part.name());
        }
    }
}
