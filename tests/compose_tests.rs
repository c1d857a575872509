//! Integration tests for the composition engine.
//!
//! Exercises the end-to-end scenarios: context-gated part selection, the
//! merge laws, the validation gate, and determinism.

use packplan::compose::{compose, compose_plan};
use packplan::config::{EntryPoint, Schema};
use packplan::context::{BuildContext, ProjectPaths};
use packplan::context::Context;
use packplan::error::ComposeError;
use packplan::parts;
use packplan::plan::{BuildPlan, PlanOptions};

/// Schema used by the full plans (style parts carry a stylus namespace).
fn full_schema() -> Schema {
    Schema::base().accept_extension("stylus")
}

fn context_with_app(app: &str) -> BuildContext {
    BuildContext {
        paths: ProjectPaths {
            app: app.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn build_scenario_shapes_the_expected_config() {
        let cx = context_with_app("/app");
        let baseline = [parts::app_entry(), parts::transpile(vec!["/app".into()])];
        let contextual = [parts::minify(), parts::hashed_output()];

        let config = compose(&baseline, &contextual, &cx, &Schema::base()).unwrap();

        assert_eq!(config.entry["app"], EntryPoint::Single("/app".into()));
        assert!(
            config.module.loaders[0].include.contains(&"/app".to_string()),
            "transpile rule should be limited to the app path"
        );
        assert!(
            config
                .output
                .filename
                .as_deref()
                .unwrap()
                .contains("[chunkhash]")
        );
        assert_eq!(config.plugins_named("minify").len(), 1);
    }

    #[test]
    fn test_scenario_gates_out_optimizations() {
        let cx = BuildContext::default();
        let plan = BuildPlan::for_context(Context::Test, &cx, PlanOptions::default());
        let config = compose_plan(&plan, &cx, &full_schema()).unwrap();

        assert!(config.plugins_named("minify").is_empty());
        assert!(
            !config
                .output
                .filename
                .as_deref()
                .unwrap()
                .contains("[chunkhash]"),
            "test builds must not use hashed filenames"
        );
        // Coverage instrumentation runs before the main chain.
        assert!(
            config
                .module
                .pre_loaders
                .iter()
                .any(|r| r.loaders.contains(&"isparta".to_string()))
        );
    }

    #[test]
    fn full_build_plan_composes() {
        let cx = BuildContext::default();
        let plan = BuildPlan::for_context(Context::Build, &cx, PlanOptions::default());
        let config = compose_plan(&plan, &cx, &full_schema()).unwrap();

        // All three chunks: app, style, vendor.
        assert_eq!(config.entry.len(), 3);
        for name in ["clean", "define", "commons-chunk", "minify", "extract-text"] {
            assert_eq!(config.plugins_named(name).len(), 1, "missing plugin {name}");
        }
        assert!(config.dev_server.is_empty());
        assert_eq!(config.devtool.as_deref(), Some("source-map"));
    }

    #[test]
    fn full_develop_plan_composes() {
        let cx = BuildContext::default();
        let plan = BuildPlan::for_context(Context::Develop, &cx, PlanOptions::default());
        let config = compose_plan(&plan, &cx, &full_schema()).unwrap();

        assert_eq!(config.dev_server.hot, Some(true));
        assert_eq!(config.plugins_named("hot-module-replacement").len(), 1);
        assert_eq!(config.plugins_named("npm-install").len(), 1);
        assert!(config.plugins_named("minify").is_empty());
        assert_eq!(config.devtool.as_deref(), Some("eval-source-map"));
    }
}

mod merge_laws {
    use super::*;

    #[test]
    fn plugin_lists_concatenate_across_parts() {
        let cx = BuildContext::default();
        let baseline = [parts::app_entry(), parts::base_output()];
        let contextual = [parts::clean("first"), parts::clean("second")];

        let config = compose(&baseline, &contextual, &cx, &Schema::base()).unwrap();
        let cleans = config.plugins_named("clean");
        assert_eq!(cleans.len(), 2);
        assert_eq!(cleans[0].options["paths"][0], "first");
        assert_eq!(cleans[1].options["paths"][0], "second");
    }

    #[test]
    fn later_scalar_wins() {
        let cx = BuildContext::default();
        let baseline = [parts::app_entry(), parts::base_output()];
        let contextual = [parts::devtool("eval"), parts::devtool("source-map")];

        let config = compose(&baseline, &contextual, &cx, &Schema::base()).unwrap();
        assert_eq!(config.devtool.as_deref(), Some("source-map"));
    }

    #[test]
    fn contextual_parts_merge_after_baseline() {
        let cx = BuildContext::default();
        let baseline = [parts::app_entry(), parts::base_output()];
        let contextual = [parts::hashed_output()];

        let config = compose(&baseline, &contextual, &cx, &Schema::base()).unwrap();
        assert_eq!(
            config.output.filename.as_deref(),
            Some("[name].[chunkhash].js")
        );
    }
}

mod validation_gate {
    use super::*;

    #[test]
    fn missing_entry_is_rejected_naming_the_key() {
        let cx = BuildContext::default();
        let baseline = [parts::base_output()];

        let err = compose(&baseline, &[], &cx, &Schema::base()).unwrap_err();
        match err {
            ComposeError::Validation(err) => assert!(err.paths().contains(&"entry")),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn unregistered_namespace_is_rejected() {
        let cx = BuildContext::default();
        let baseline = [
            parts::app_entry(),
            parts::base_output(),
            parts::inline_styles(cx.paths.style.clone()),
        ];

        // Base schema: the stylus namespace was never registered.
        let err = compose(&baseline, &[], &cx, &Schema::base()).unwrap_err();
        match err {
            ComposeError::Validation(err) => assert!(err.paths().contains(&"stylus")),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn conformant_config_is_returned_unchanged_in_shape() {
        let cx = BuildContext::default();
        let baseline = [parts::app_entry(), parts::base_output()];

        let config = compose(&baseline, &[], &cx, &Schema::base()).unwrap();
        let value = serde_json::to_value(&*config).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["entry", "output"]);
    }

    #[test]
    fn part_failure_propagates_immediately() {
        let cx = BuildContext {
            paths: ProjectPaths {
                style: vec![],
                ..Default::default()
            },
            ..Default::default()
        };
        let baseline = [parts::app_entry(), parts::base_output()];
        let contextual = [parts::style_entry()];

        let err = compose(&baseline, &contextual, &cx, &Schema::base()).unwrap_err();
        assert!(matches!(
            err,
            ComposeError::Part {
                part: "style-entry",
                ..
            }
        ));
    }
}

mod determinism {
    use super::*;

    #[test]
    fn repeated_composition_is_bit_identical() {
        let cx = BuildContext::default();
        let schema = full_schema();

        let first = {
            let plan = BuildPlan::for_context(Context::Build, &cx, PlanOptions::default());
            compose_plan(&plan, &cx, &schema).unwrap().to_json_string().unwrap()
        };
        let second = {
            let plan = BuildPlan::for_context(Context::Build, &cx, PlanOptions::default());
            compose_plan(&plan, &cx, &schema).unwrap().to_json_string().unwrap()
        };

        assert_eq!(first, second);
    }
}
