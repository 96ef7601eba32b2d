// crates/namescope-core/src/runtime/mod.rs
// ============================================================================
// Module: Namescope Runtime
// Description: Concrete scope tree implementing the naming boundary.
// Purpose: Provide an in-process construct tree for hosts without their own.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime hosts an arena-backed scope tree that stands in for an
//! infrastructure framework's construct tree: strictly sequential
//! construction, typed registration per role, and composition entry points
//! that delegate to the pure core rules.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod tree;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use tree::NodeView;
pub use tree::ScopeTree;
pub use tree::StackAncestry;
pub use tree::TreeError;
