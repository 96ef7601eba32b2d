// crates/namescope-core/tests/tree_unit.rs
// ============================================================================
// Module: Scope Tree Unit Tests
// Description: Registration, ancestor caching, context lookup, collisions.
// Purpose: Replay the reference naming fixtures against the runtime tree.
// ============================================================================

//! Unit tests for the arena-backed scope tree and its composition entry
//! points, including the reference fixtures for nested construct naming.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeMap;

use namescope_core::ConstructProps;
use namescope_core::NodeId;
use namescope_core::ScopeTree;
use namescope_core::StackProps;
use namescope_core::StageProps;
use namescope_core::TreeError;
use serde_json::json;

/// Builds a root-level stack with the given type and env attributes.
fn stack_under_root(
    tree: &mut ScopeTree,
    stack_type: Option<&str>,
    stack_env: Option<&str>,
) -> NodeId {
    tree.add_stack(
        ScopeTree::ROOT,
        "stack",
        StackProps {
            stack_type: stack_type.map(str::to_owned),
            stack_env: stack_env.map(str::to_owned),
        },
    )
    .expect("stack registers under root")
}

#[test]
fn stack_builds_child_ids_by_slugifying_the_label() {
    let mut tree = ScopeTree::new();
    let stack = stack_under_root(&mut tree, None, None);
    assert_eq!(tree.scoped_id(stack, "Foo Bar").expect("compose"), "foo-bar");
}

#[test]
fn stack_child_ids_honor_a_custom_delimiter() {
    let mut tree = ScopeTree::new();
    let stack = stack_under_root(&mut tree, None, None);
    assert_eq!(
        tree.scoped_id_with(stack, Some("Foo Bar"), "_").expect("compose"),
        "foo_bar"
    );
}

#[test]
fn stack_type_is_appended_as_a_slug() {
    let mut tree = ScopeTree::new();
    let stack = stack_under_root(&mut tree, Some("My Type"), None);
    assert_eq!(
        tree.scoped_id(stack, "Foo Bar").expect("compose"),
        "foo-bar-my-type"
    );
}

#[test]
fn stack_env_is_appended_after_the_stack_type() {
    let mut tree = ScopeTree::new();
    let stack = stack_under_root(&mut tree, Some("My Type"), Some("User Acceptance"));
    assert_eq!(
        tree.scoped_id(stack, "Foo Bar").expect("compose"),
        "foo-bar-my-type-user-acceptance"
    );
}

#[test]
fn nested_constructs_inherit_the_stack_attributes() {
    let mut tree = ScopeTree::new();
    let stack = stack_under_root(&mut tree, Some("Demo"), Some("QA"));

    let child_id = tree.scoped_id(stack, "Child Construct").expect("compose");
    let child = tree
        .add_construct(stack, &child_id, ConstructProps::default())
        .expect("register child");
    assert_eq!(tree.registered_id(child).expect("id"), "child-construct-demo-qa");

    let nested_id = tree.scoped_id(child, "Nested Construct").expect("compose");
    assert_eq!(nested_id, "nested-construct-demo-qa");
}

#[test]
fn ancestor_envs_accumulate_nearest_first_between_label_and_stack_attributes() {
    let mut tree = ScopeTree::new();
    let stack = stack_under_root(&mut tree, Some("Demo"), Some("QA"));

    let child = tree
        .add_construct(
            stack,
            &tree.scoped_id(stack, "Child Construct").expect("compose"),
            ConstructProps {
                env: Some("One".to_owned()),
            },
        )
        .expect("register child");
    assert_eq!(tree.registered_id(child).expect("id"), "child-construct-demo-qa");

    // A construct without its own env passes the chain through unchanged.
    let skipped = tree
        .add_construct(
            child,
            &tree.scoped_id(child, "Child Construct").expect("compose"),
            ConstructProps::default(),
        )
        .expect("register skipped");

    let nested = tree
        .add_construct(
            skipped,
            &tree.scoped_id(skipped, "Nested Construct").expect("compose"),
            ConstructProps {
                env: Some("Two".to_owned()),
            },
        )
        .expect("register nested");
    assert_eq!(
        tree.registered_id(nested).expect("id"),
        "nested-construct-one-demo-qa"
    );

    let deeply_nested_id = tree
        .scoped_id(nested, "Deeply Nested Construct")
        .expect("compose");
    assert_eq!(deeply_nested_id, "deeply-nested-construct-two-one-demo-qa");
}

#[test]
fn pipeline_registers_under_its_raw_pipeline_suffix() {
    let mut tree = ScopeTree::new();
    let pipeline = tree.add_pipeline(ScopeTree::ROOT, "acme").expect("pipeline");
    assert_eq!(tree.registered_id(pipeline).expect("id"), "acme-pipeline");
    assert_eq!(
        tree.scoped_id(pipeline, "synth").expect("compose"),
        "acme-synth"
    );
}

#[test]
fn stack_under_a_single_stage_folds_its_id_into_the_stage_name() {
    let mut tree = ScopeTree::new();
    let pipeline = tree.add_pipeline(ScopeTree::ROOT, "acme").expect("pipeline");
    let stage = tree
        .add_stage(pipeline, "sandbox", StageProps::default())
        .expect("stage");

    let stack_id = tree.scoped_id(stage, "Hello world").expect("compose");
    assert_eq!(stack_id, "hello-world");

    let stack = tree
        .add_stack(stage, &stack_id, StackProps::default())
        .expect("stack");
    assert_eq!(tree.registered_id(stack).expect("id"), "acme-sandbox");
}

#[test]
fn stack_under_a_multi_stack_stage_keeps_its_id_as_a_segment() {
    let mut tree = ScopeTree::new();
    let pipeline = tree.add_pipeline(ScopeTree::ROOT, "acme").expect("pipeline");
    let stage = tree
        .add_stage(pipeline, "sandbox", StageProps { single: false })
        .expect("stage");
    let stack = tree
        .add_stack(stage, "hello-world", StackProps::default())
        .expect("stack");
    assert_eq!(
        tree.registered_id(stack).expect("id"),
        "acme-hello-world-sandbox"
    );
}

#[test]
fn stack_caches_its_ancestry_at_construction() {
    let mut tree = ScopeTree::new();
    let pipeline = tree.add_pipeline(ScopeTree::ROOT, "acme").expect("pipeline");
    let stage = tree
        .add_stage(pipeline, "sandbox", StageProps::default())
        .expect("stage");
    let stack = tree
        .add_stack(stage, "hello-world", StackProps::default())
        .expect("stack");

    let ancestry = tree
        .stack_ancestry(stack)
        .expect("lookup")
        .expect("stacks cache ancestry");
    assert_eq!(ancestry.app_name.as_deref(), Some("acme"));
    let stage_context = ancestry.stage.as_ref().expect("stage captured");
    assert_eq!(stage_context.stage, "sandbox");
    assert!(stage_context.single);

    // Non-stack nodes cache nothing.
    assert!(tree.stack_ancestry(stage).expect("lookup").is_none());
}

#[test]
fn duplicate_sibling_ids_are_rejected() {
    let mut tree = ScopeTree::new();
    let stack = stack_under_root(&mut tree, None, None);
    tree.add_construct(stack, "widget", ConstructProps::default())
        .expect("first registration");
    let err = tree
        .add_construct(stack, "widget", ConstructProps::default())
        .expect_err("duplicate sibling id");
    assert_eq!(
        err,
        TreeError::DuplicateId {
            parent: "stack".to_owned(),
            id: "widget".to_owned(),
        }
    );
}

#[test]
fn empty_registration_ids_are_rejected() {
    let mut tree = ScopeTree::new();
    let err = tree
        .add_construct(ScopeTree::ROOT, "  ", ConstructProps::default())
        .expect_err("empty id");
    assert_eq!(err, TreeError::EmptyId);
}

#[test]
fn unknown_handles_are_rejected() {
    let tree = ScopeTree::new();
    let missing = NodeId::from_raw(99).expect("non-zero");
    assert_eq!(
        tree.scoped_id(missing, "label"),
        Err(TreeError::UnknownNode(missing))
    );
}

#[test]
fn context_lookup_walks_toward_the_root() {
    let mut context = BTreeMap::new();
    context.insert("AWS_REGION".to_owned(), json!("eu-west-1"));
    let mut tree = ScopeTree::with_context(context);

    let stack = stack_under_root(&mut tree, None, None);
    let widget = tree
        .add_construct(stack, "widget", ConstructProps::default())
        .expect("register widget");

    assert_eq!(
        tree.try_get_context(widget, "AWS_REGION").expect("lookup"),
        Some(&json!("eu-west-1"))
    );
    assert_eq!(tree.try_get_context(widget, "MISSING").expect("lookup"), None);
}

#[test]
fn nearer_context_values_shadow_the_root() {
    let mut context = BTreeMap::new();
    context.insert("AWS_REGION".to_owned(), json!("eu-west-1"));
    let mut tree = ScopeTree::with_context(context);

    let stack = stack_under_root(&mut tree, None, None);
    tree.set_context(stack, "AWS_REGION", json!("us-east-1"))
        .expect("set context");
    let widget = tree
        .add_construct(stack, "widget", ConstructProps::default())
        .expect("register widget");

    assert_eq!(
        tree.try_get_context(widget, "AWS_REGION").expect("lookup"),
        Some(&json!("us-east-1"))
    );
    assert_eq!(
        tree.try_get_context(ScopeTree::ROOT, "AWS_REGION").expect("lookup"),
        Some(&json!("eu-west-1"))
    );
}

#[test]
fn composition_has_no_hidden_counter_state() {
    let mut tree = ScopeTree::new();
    let stack = stack_under_root(&mut tree, Some("Demo"), Some("QA"));
    let first = tree.scoped_id(stack, "Widget").expect("compose");
    let second = tree.scoped_id(stack, "Widget").expect("compose");
    assert_eq!(first, second);
}
