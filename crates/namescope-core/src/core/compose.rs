// crates/namescope-core/src/core/compose.rs
// ============================================================================
// Module: Namescope Name Composition
// Description: Role-specific segment rules for scoped identifiers.
// Purpose: Turn a label plus a tree position into a normalized identifier.
// Dependencies: crate::{core::scope, core::slug, interfaces}
// ============================================================================

//! ## Overview
//! Composition builds an ordered candidate-segment list from the caller's
//! role, then hands the list to [`stringify`]. The rules, per role:
//!
//! - pipeline: `[app_name, label]`
//! - stage: `[label]`
//! - stack: `[label, stack_type, stack_env]`
//! - construct: `[label, envs of construct-role nodes from the calling node
//!   upward nearest-first, stack_type, stack_env]` where the stack attributes
//!   come from the nearest stack-role ancestor
//!
//! Absent attributes simply drop out; composition never fails. An all-absent
//! candidate list yields the empty string, which the host framework may
//! reject under its own registration rules.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::scope::ScopeRole;
use crate::core::scope::StageContext;
use crate::core::slug::DEFAULT_DELIMITER;
use crate::core::slug::stringify;
use crate::interfaces::ScopeView;

// ============================================================================
// SECTION: Scoped Identifier Composition
// ============================================================================

/// Composes a scoped identifier for a proposed child of the viewed node.
///
/// `label` contributes a segment only when present; `delimiter` replaces
/// every hyphen in the normalized result, not only segment boundaries.
///
/// # Invariants
/// - Pure: same view, label, and delimiter always produce the same output.
/// - Never errors; missing context degrades to segment omission.
#[must_use]
pub fn compose_scoped_id(view: &dyn ScopeView, label: Option<&str>, delimiter: &str) -> String {
    match view.role() {
        ScopeRole::Pipeline { app_name } => {
            stringify(&[Some(app_name.as_str()), label], delimiter)
        }
        ScopeRole::Stage { .. } => stringify(&[label], delimiter),
        ScopeRole::Stack {
            stack_type,
            stack_env,
        } => stringify(
            &[label, stack_type.as_deref(), stack_env.as_deref()],
            delimiter,
        ),
        ScopeRole::Construct { .. } => compose_construct_id(view, label, delimiter),
    }
}

/// Composes the construct-role segment list: label, the env chain from the
/// calling node upward, then the nearest stack's attributes.
///
/// The calling node's own env is the nearest link in the chain; stack-role
/// nodes are excluded from the chain and contribute only their `stack_type`
/// and `stack_env`, appended last.
fn compose_construct_id(view: &dyn ScopeView, label: Option<&str>, delimiter: &str) -> String {
    let mut parts: Vec<Option<&str>> = vec![label];
    parts.push(view.role().construct_env().map(String::as_str));

    let mut stack_type: Option<&str> = None;
    let mut stack_env: Option<&str> = None;
    let mut stack_seen = false;
    for ancestor in view.ancestors() {
        match ancestor {
            ScopeRole::Construct { env } => parts.push(env.as_deref()),
            ScopeRole::Stack {
                stack_type: nearest_type,
                stack_env: nearest_env,
            } if !stack_seen => {
                stack_seen = true;
                stack_type = nearest_type.as_deref();
                stack_env = nearest_env.as_deref();
            }
            _ => {}
        }
    }
    parts.push(stack_type);
    parts.push(stack_env);
    stringify(&parts, delimiter)
}

// ============================================================================
// SECTION: Stack Internal Name
// ============================================================================

/// Composes a stack's own registration name from its cached ancestry.
///
/// The stack identifier stays a distinct segment unless the enclosing stage
/// folds it away (`single = true`); with no enclosing stage the identifier is
/// always included.
#[must_use]
pub fn compose_stack_name(app_name: Option<&str>, id: &str, stage: Option<&StageContext>) -> String {
    let keep_id = stage.is_none_or(|context| !context.single);
    stringify(
        &[
            app_name,
            keep_id.then_some(id),
            stage.map(|context| context.stage.as_str()),
        ],
        DEFAULT_DELIMITER,
    )
}
