// crates/namescope-core/src/core/identifiers.rs
// ============================================================================
// Module: Namescope Identifiers
// Description: Opaque handles for scope-tree nodes.
// Purpose: Provide strongly typed, serializable node identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Scope-tree nodes are addressed through opaque numeric handles. Handles are
//! non-zero and 1-based so the zero value can never be confused with a live
//! node, and they serialize transparently as numbers on the wire.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroU64;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Node Identifier
// ============================================================================

/// Handle to a node in a scope tree.
///
/// # Invariants
/// - Always >= 1 (non-zero, 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(NonZeroU64);

impl NodeId {
    /// Creates a new node identifier from a non-zero value.
    #[must_use]
    pub const fn new(id: NonZeroU64) -> Self {
        Self(id)
    }

    /// Creates a node identifier from a raw value (returns `None` if zero).
    #[must_use]
    pub fn from_raw(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// Creates a node identifier from a zero-based arena index.
    ///
    /// Returns `None` when the index cannot be represented as a 1-based
    /// non-zero handle.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u64::try_from(index)
            .ok()
            .and_then(|raw| raw.checked_add(1))
            .and_then(NonZeroU64::new)
            .map(Self)
    }

    /// Returns the raw identifier value (always >= 1).
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Returns the zero-based arena index for this identifier.
    ///
    /// Saturates on platforms where the index exceeds the address space; a
    /// saturated index can never address a live node.
    #[must_use]
    pub fn index(self) -> usize {
        usize::try_from(self.0.get() - 1).unwrap_or(usize::MAX)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.get().fmt(f)
    }
}
