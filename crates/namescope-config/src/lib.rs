// crates/namescope-config/src/lib.rs
// ============================================================================
// Module: Namescope Config Library
// Description: Canonical context-document model, validation, and examples.
// Purpose: Single source of truth for the project context JSON semantics.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `namescope-config` defines the canonical context-document model consumed
//! by scope trees: the JSON `"context"` object a project template carries
//! alongside its infrastructure definition. Loading is strict and fail
//! closed; malformed documents are rejected rather than partially accepted.
//! Deterministic example generation keeps documentation and tests aligned
//! with the model.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod context;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use context::*;
pub use examples::context_json_example;
