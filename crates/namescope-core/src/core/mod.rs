// crates/namescope-core/src/core/mod.rs
// ============================================================================
// Module: Namescope Core Types
// Description: Canonical scope roles, identifiers, and naming algorithms.
// Purpose: Provide the pure, side-effect-free naming layer shared by runtimes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the scope-role model, slug normalization, and the
//! composition rules that turn a label plus a tree position into a scoped
//! identifier. Everything here is a pure computation: no I/O, no clocks, no
//! hidden state.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod compose;
pub mod identifiers;
pub mod scope;
pub mod slug;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use compose::compose_scoped_id;
pub use compose::compose_stack_name;
pub use identifiers::NodeId;
pub use scope::ConstructProps;
pub use scope::ScopeRole;
pub use scope::StackProps;
pub use scope::StageContext;
pub use scope::StageProps;
pub use slug::DEFAULT_DELIMITER;
pub use slug::slugify;
pub use slug::stringify;
