// crates/namescope-core/src/lib.rs
// ============================================================================
// Module: Namescope Core Library
// Description: Public API surface for the namescope naming core.
// Purpose: Expose scope roles, slug composition, and the runtime scope tree.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Namescope core provides deterministic, hierarchical naming for
//! infrastructure-as-code construct trees. Given a human-readable label and a
//! position in a scope tree, it produces a normalized, collision-resistant
//! identifier by walking ancestor scopes and concatenating their naming
//! contributions. The core is host-agnostic and integrates through the
//! [`interfaces::ScopeView`] boundary rather than embedding into any
//! particular infrastructure framework.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::ScopeView;
pub use runtime::NodeView;
pub use runtime::ScopeTree;
pub use runtime::StackAncestry;
pub use runtime::TreeError;
