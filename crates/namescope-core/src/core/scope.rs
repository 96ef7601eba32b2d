// crates/namescope-core/src/core/scope.rs
// ============================================================================
// Module: Namescope Scope Roles
// Description: Tagged scope-role model and construction-time props.
// Purpose: Discriminate naming contributions without runtime type inspection.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Each node in a scope tree carries exactly one [`ScopeRole`]. The role
//! decides which slice of context the node contributes to scoped identifiers:
//! pipelines contribute the project's `app_name`, stages contribute a stage
//! label and a folding flag, stacks contribute optional `stack_type` and
//! `stack_env` attributes, and plain constructs contribute an optional `env`.
//! All attributes are fixed at construction time; the props structs exist so
//! defaults are explicit values threaded through constructors rather than
//! global mutable state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Scope Roles
// ============================================================================

/// Naming role of a scope-tree node.
///
/// # Invariants
/// - Attributes are immutable once the node is constructed.
/// - Absent attributes contribute no segment; they are never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ScopeRole {
    /// Naming root carrying the project-wide application name.
    Pipeline {
        /// Root identifier of the whole project.
        app_name: String,
    },
    /// Deployment stage grouping stacks.
    Stage {
        /// Stage label, taken from the stage's own identifier.
        stage: String,
        /// Whether the stage folds into the stack name (`true`) or the stack
        /// identifier stays a distinct segment (`false`).
        single: bool,
    },
    /// Stack node contributing type and environment attributes.
    Stack {
        /// Optional stack classification appended after construct envs.
        stack_type: Option<String>,
        /// Optional stack environment appended last.
        stack_env: Option<String>,
    },
    /// Plain construct node.
    Construct {
        /// Optional environment label contributed to descendant names.
        env: Option<String>,
    },
}

impl ScopeRole {
    /// Returns the construct `env` attribute when this is a construct role.
    #[must_use]
    pub const fn construct_env(&self) -> Option<&String> {
        match self {
            Self::Construct { env: Some(env) } => Some(env),
            _ => None,
        }
    }

}

// ============================================================================
// SECTION: Construction Props
// ============================================================================

/// Construction-time props for a stage node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProps {
    /// Whether the stage folds into the stack name. Defaults to `true`.
    pub single: bool,
}

impl Default for StageProps {
    fn default() -> Self {
        Self { single: true }
    }
}

/// Construction-time props for a stack node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackProps {
    /// Optional stack classification, e.g. `"My Type"`.
    pub stack_type: Option<String>,
    /// Optional stack environment, e.g. `"User Acceptance"`.
    pub stack_env: Option<String>,
}

/// Construction-time props for a plain construct node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructProps {
    /// Optional environment label, set once and never reassigned.
    pub env: Option<String>,
}

// ============================================================================
// SECTION: Cached Stage Context
// ============================================================================

/// Stage attributes captured by a stack when it resolves its ancestors.
///
/// # Invariants
/// - Captured once at stack construction; never recomputed on tree mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageContext {
    /// Stage label of the nearest enclosing stage.
    pub stage: String,
    /// Folding flag of the nearest enclosing stage.
    pub single: bool,
}
