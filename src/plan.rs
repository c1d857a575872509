//! Context-specific part selection.
//!
//! A [`BuildPlan`] pairs the shared baseline part list with the ordered
//! contextual list for one build mode. Contextual parts merge after the
//! baseline, so their fragments take precedence where sections overlap.

use crate::context::{BuildContext, Context};
use crate::parts::{self, PageOptions, Part, SplitOptions};

/// Modules split into the vendor chunk for production builds.
const VENDOR_MODULES: &[&str] = &["react", "react-dom"];

/// Options that vary per invocation rather than per context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanOptions {
    pub page: PageOptions,
}

/// The ordered part lists selected for one composition run.
#[derive(Debug)]
pub struct BuildPlan {
    pub context: Context,
    /// Applied to every run, regardless of context.
    pub baseline: Vec<Part>,
    /// Applied after the baseline, in list order.
    pub contextual: Vec<Part>,
}

impl BuildPlan {
    /// Select the part lists for a context.
    pub fn for_context(context: Context, cx: &BuildContext, options: PlanOptions) -> Self {
        let baseline = vec![
            parts::app_entry(),
            parts::base_output(),
            parts::resolve_extensions(vec![
                String::new(),
                ".js".to_string(),
                ".jsx".to_string(),
            ]),
            parts::page_template(options.page),
            parts::transpile(vec![cx.paths.app.clone()]),
            parts::lint(vec![cx.paths.app.clone()]),
        ];

        let contextual = match context {
            Context::Build => vec![
                parts::devtool("source-map"),
                parts::style_entry(),
                parts::hashed_output(),
                parts::clean(cx.paths.build.clone()),
                parts::define("process.env.NODE_ENV", "production"),
                parts::split_bundle(SplitOptions {
                    name: "vendor".to_string(),
                    modules: VENDOR_MODULES.iter().map(|m| m.to_string()).collect(),
                }),
                parts::minify(),
                parts::extract_styles(cx.paths.style.clone()),
            ],
            Context::Test => vec![
                parts::devtool("inline-source-map"),
                parts::coverage(vec![cx.paths.app.clone()]),
                parts::transpile(vec![cx.paths.test.clone()]),
            ],
            Context::Develop => vec![
                parts::devtool("eval-source-map"),
                parts::style_entry(),
                parts::inline_styles(cx.paths.style.clone()),
                parts::dev_server(),
                parts::expose_module(parts::ExposeOptions {
                    module: "react".to_string(),
                    global: "React".to_string(),
                }),
                parts::auto_install(),
            ],
        };

        Self {
            context,
            baseline,
            contextual,
        }
    }
}
