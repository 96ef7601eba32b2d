// crates/namescope-core/src/interfaces/mod.rs
// ============================================================================
// Module: Namescope Interfaces
// Description: Host-agnostic boundary between the composer and scope trees.
// Purpose: Define the read-only tree view the naming rules are written against.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The naming core never owns or mutates a construct tree; it only reads
//! roles along a node's ancestry. [`ScopeView`] captures exactly that
//! boundary so any host framework tree can drive the composer by exposing
//! its own parent links, while the bundled [`crate::runtime::ScopeTree`]
//! provides a ready-made implementation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ScopeRole;

// ============================================================================
// SECTION: Scope View
// ============================================================================

/// Read-only view of a node's position in a scope tree.
///
/// Implementations must be deterministic: two calls with no tree mutation in
/// between observe the same roles in the same order.
pub trait ScopeView {
    /// Returns the role of the viewed node.
    fn role(&self) -> &ScopeRole;

    /// Returns ancestor roles ordered nearest to farthest, excluding the
    /// viewed node itself and ending at the tree root.
    fn ancestors(&self) -> Box<dyn Iterator<Item = &ScopeRole> + '_>;
}
