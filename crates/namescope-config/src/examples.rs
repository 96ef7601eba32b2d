// crates/namescope-config/src/examples.rs
// ============================================================================
// Module: Namescope Config Examples
// Description: Deterministic example context documents.
// Purpose: Keep docs and tests aligned with the canonical context model.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Example generation is deterministic so documentation snippets and test
//! fixtures can be asserted byte-for-byte against the canonical model.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Example Documents
// ============================================================================

/// Returns the canonical example context document, in the on-disk wrapper
/// shape with a `"context"` member.
#[must_use]
pub fn context_json_example() -> Value {
    json!({
        "context": {
            "APP_NAME": "sample-app",
            "AWS_ACCOUNT_ID": "123456789012",
            "AWS_REGION": "eu-west-1",
            "PIPELINE_REPO": "acme/sample-app",
            "PIPELINE_BRANCH": "main",
            "PIPELINE_TOKEN_NAME": "github-oauth-token",
            "PIPELINE_ZONE_ID": "Z0000000000000000000A",
            "PIPELINE_ZONE_NAME": "example.com"
        }
    })
}
