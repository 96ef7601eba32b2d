// crates/namescope-core/examples/minimal.rs
// ============================================================================
// Module: Namescope Minimal Example
// Description: Minimal end-to-end scope tree with composed identifiers.
// Purpose: Demonstrate pipeline/stage/stack/construct naming in one pass.
// Dependencies: namescope-core, serde_json
// ============================================================================

//! ## Overview
//! Assembles a pipeline with two stages, a stack per stage, and a nested
//! construct, then checks the identifiers the naming core composed at each
//! level. Suitable for quick verification without any host framework.

use std::collections::BTreeMap;

use namescope_core::ConstructProps;
use namescope_core::ScopeTree;
use namescope_core::StackProps;
use namescope_core::StageProps;
use serde_json::json;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(String);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Fails the example when a composed identifier differs from expectation.
fn expect_name(actual: &str, expected: &str) -> Result<(), ExampleError> {
    if actual == expected {
        Ok(())
    } else {
        Err(ExampleError(format!(
            "expected `{expected}`, composed `{actual}`"
        )))
    }
}

/// Assembles the demo tree and verifies the composed identifiers.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut context = BTreeMap::new();
    context.insert("APP_NAME".to_owned(), json!("acme"));
    context.insert("AWS_REGION".to_owned(), json!("eu-west-1"));

    let mut tree = ScopeTree::with_context(context);
    let root = ScopeTree::ROOT;

    let app_name = tree
        .try_get_context(root, "APP_NAME")?
        .and_then(|value| value.as_str())
        .ok_or_else(|| ExampleError("APP_NAME missing from context".to_owned()))?
        .to_owned();

    let pipeline = tree.add_pipeline(root, &app_name)?;
    expect_name(tree.registered_id(pipeline)?, "acme-pipeline")?;

    // Pipeline-owned resources are namespaced under the app name.
    let synth_id = tree.scoped_id(pipeline, "synth")?;
    expect_name(&synth_id, "acme-synth")?;
    let logs_id = tree.scoped_id(pipeline, "logs")?;
    tree.add_construct(pipeline, &logs_id, ConstructProps::default())?;

    for stage_name in ["sandbox", "production"] {
        let stage = tree.add_stage(pipeline, stage_name, StageProps::default())?;
        let stack_id = tree.scoped_id(stage, "Hello world")?;
        let stack = tree.add_stack(
            stage,
            &stack_id,
            StackProps {
                stack_type: Some("demo".to_owned()),
                stack_env: Some(stage_name.to_owned()),
            },
        )?;
        expect_name(
            tree.registered_id(stack)?,
            &format!("acme-{stage_name}"),
        )?;

        let bucket_id = tree.scoped_id(stack, "hello world bucket")?;
        expect_name(&bucket_id, &format!("hello-world-bucket-demo-{stage_name}"))?;
        tree.add_construct(stack, &bucket_id, ConstructProps::default())?;
    }

    Ok(())
}
