//! The composition engine.
//!
//! Invokes every part in declared order, folds the produced fragments with
//! the structured merge, and validates the result before handing it out.
//! Synchronous and deterministic: fixed inputs always produce the same
//! configuration.

use crate::config::{FinalConfig, PartialConfig, Schema, merge};
use crate::context::BuildContext;
use crate::error::ComposeResult;
use crate::parts::Part;
use crate::plan::BuildPlan;
use tracing::debug;

/// Compose a final configuration from ordered part lists.
///
/// Baseline parts are applied first, then contextual parts; within each list
/// the declared order is the merge order. A part failure or a schema
/// violation aborts the run — nothing partial is ever returned.
pub fn compose(
    baseline: &[Part],
    contextual: &[Part],
    cx: &BuildContext,
    schema: &Schema,
) -> ComposeResult<FinalConfig> {
    let mut merged = PartialConfig::default();
    for part in baseline.iter().chain(contextual) {
        debug!(part = part.name(), "applying part");
        let fragment = part.produce(cx)?;
        merged = merge(merged, fragment);
    }

    schema.validate(&merged)?;
    Ok(FinalConfig::new(merged))
}

/// Compose from a [`BuildPlan`].
pub fn compose_plan(
    plan: &BuildPlan,
    cx: &BuildContext,
    schema: &Schema,
) -> ComposeResult<FinalConfig> {
    compose(&plan.baseline, &plan.contextual, cx, schema)
}
