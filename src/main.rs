//! packplan binary: resolve the build context, compose, emit.

use anyhow::{Context as _, Result};
use clap::Parser;
use packplan::cli::{Cli, EmitFormat};
use packplan::compose::compose_plan;
use packplan::config::Schema;
use packplan::context::{BuildContext, Context};
use packplan::parts::PageOptions;
use packplan::plan::{BuildPlan, PlanOptions};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Snapshot the environment once, then apply CLI overrides on top.
    let mut cx = BuildContext::from_env();
    if let Some(dir) = &cli.app_dir {
        cx.paths.app = dir.clone();
    }
    if let Some(dir) = &cli.build_dir {
        cx.paths.build = dir.clone();
    }
    if let Some(dir) = &cli.test_dir {
        cx.paths.test = dir.clone();
    }
    if !cli.styles.is_empty() {
        cx.paths.style = cli.styles.clone();
    }

    let signal = cli
        .target
        .clone()
        .or_else(|| std::env::var("PACKPLAN_TARGET").ok());
    let context = Context::resolve(signal.as_deref());
    info!(%context, "resolved build context");

    let options = PlanOptions {
        page: PageOptions {
            title: cli.title.clone().unwrap_or_else(|| "Application".to_string()),
            ..Default::default()
        },
    };
    let plan = BuildPlan::for_context(context, &cx, options);
    let schema = Schema::base().accept_extension("stylus");

    let config = compose_plan(&plan, &cx, &schema)?;

    let rendered = match cli.format {
        EmitFormat::Json => config
            .to_json_string()
            .context("serializing configuration to JSON")?,
        EmitFormat::Yaml => config
            .to_yaml_string()
            .context("serializing configuration to YAML")?,
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing configuration to {}", path.display()))?;
            info!(path = %path.display(), "configuration written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
