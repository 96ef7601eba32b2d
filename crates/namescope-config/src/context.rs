// crates/namescope-config/src/context.rs
// ============================================================================
// Module: Namescope Context Model
// Description: Context map, strict loading, and well-known keys.
// Purpose: Validate the JSON context documents that seed scope trees.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Project templates carry their settings as a flat JSON `"context"` object:
//! scalar values keyed by upper-snake names, looked up at synth time through
//! the scope tree. This module models that object as [`ContextMap`], loads it
//! fail closed (object root, trimmed non-empty keys, scalar values only), and
//! names the keys the reference template reads so hosts and tests do not
//! scatter string literals.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Well-Known Keys
// ============================================================================

/// Context key carrying the project-wide application name.
pub const APP_NAME_KEY: &str = "APP_NAME";
/// Context key carrying the deployment account identifier.
pub const ACCOUNT_ID_KEY: &str = "AWS_ACCOUNT_ID";
/// Context key carrying the deployment region.
pub const REGION_KEY: &str = "AWS_REGION";
/// Context key carrying the source repository slug.
pub const PIPELINE_REPO_KEY: &str = "PIPELINE_REPO";
/// Context key carrying the tracked branch.
pub const PIPELINE_BRANCH_KEY: &str = "PIPELINE_BRANCH";
/// Context key carrying the name of the stored access token.
pub const PIPELINE_TOKEN_NAME_KEY: &str = "PIPELINE_TOKEN_NAME";
/// Context key carrying the root hosted-zone identifier.
pub const PIPELINE_ZONE_ID_KEY: &str = "PIPELINE_ZONE_ID";
/// Context key carrying the root hosted-zone name.
pub const PIPELINE_ZONE_NAME_KEY: &str = "PIPELINE_ZONE_NAME";

/// Context keys the reference template reads, in stable order.
pub const WELL_KNOWN_CONTEXT_KEYS: &[&str] = &[
    APP_NAME_KEY,
    ACCOUNT_ID_KEY,
    REGION_KEY,
    PIPELINE_REPO_KEY,
    PIPELINE_BRANCH_KEY,
    PIPELINE_TOKEN_NAME_KEY,
    PIPELINE_ZONE_ID_KEY,
    PIPELINE_ZONE_NAME_KEY,
];

/// Default tracked branch when the context omits one.
pub const DEFAULT_BRANCH: &str = "main";
/// Default stored-token name when the context omits one.
pub const DEFAULT_TOKEN_NAME: &str = "github-oauth-token";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Context-document loading and validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The document is not syntactically valid JSON.
    #[error("context document is not valid JSON: {0}")]
    Parse(String),
    /// The document root (or its `context` member) is not a JSON object.
    #[error("context document root must be a JSON object")]
    NotAnObject,
    /// Keys must be non-empty and carry no surrounding whitespace.
    #[error("context keys must be non-empty and trimmed: `{0}`")]
    InvalidKey(String),
    /// Values must be scalars: strings, numbers, or booleans.
    #[error("context value for `{key}` must be a string, number, or boolean")]
    InvalidValue {
        /// Key whose value was rejected.
        key: String,
    },
}

// ============================================================================
// SECTION: Context Map
// ============================================================================

/// Validated flat map of context keys to scalar JSON values.
///
/// # Invariants
/// - Keys are non-empty and trimmed.
/// - Values are strings, numbers, or booleans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextMap(BTreeMap<String, Value>);

impl ContextMap {
    /// Creates an empty context map.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a scalar value under a validated key, replacing any previous
    /// value for that key.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError`] when the key or value violates the map
    /// invariants.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Result<(), ContextError> {
        let key = key.into();
        validate_entry(&key, &value)?;
        self.0.insert(key, value);
        Ok(())
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the string value stored under `key`, if it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns `true` when the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Consumes the map, yielding the underlying entries for seeding a scope
    /// tree root.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, Value> {
        self.0
    }
}

// ============================================================================
// SECTION: Loading
// ============================================================================

/// Loads a context document from JSON text.
///
/// Accepts either a bare context object or a wrapper document with a
/// `"context"` member (the shape project templates keep on disk).
///
/// # Errors
///
/// Returns [`ContextError`] when the text is not valid JSON or the document
/// violates the context-map invariants.
pub fn load_context_str(input: &str) -> Result<ContextMap, ContextError> {
    let document: Value =
        serde_json::from_str(input).map_err(|err| ContextError::Parse(err.to_string()))?;
    load_context_value(&document)
}

/// Loads a context document from an already-parsed JSON value.
///
/// # Errors
///
/// Returns [`ContextError`] when the document violates the context-map
/// invariants.
pub fn load_context_value(document: &Value) -> Result<ContextMap, ContextError> {
    let root = document.as_object().ok_or(ContextError::NotAnObject)?;
    let entries = match root.get("context") {
        Some(wrapped) => wrapped.as_object().ok_or(ContextError::NotAnObject)?,
        None => root,
    };

    let mut map = ContextMap::new();
    for (key, value) in entries {
        map.insert(key.clone(), value.clone())?;
    }
    Ok(map)
}

/// Validates a single context entry against the map invariants.
fn validate_entry(key: &str, value: &Value) -> Result<(), ContextError> {
    if key.trim().is_empty() || key.trim() != key {
        return Err(ContextError::InvalidKey(key.to_owned()));
    }
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(()),
        Value::Null | Value::Array(_) | Value::Object(_) => Err(ContextError::InvalidValue {
            key: key.to_owned(),
        }),
    }
}

// ============================================================================
// SECTION: Pipeline Settings
// ============================================================================

/// Typed view of the pipeline-related context entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSettings {
    /// Source repository slug; no default exists.
    pub repo: Option<String>,
    /// Tracked branch; defaults to [`DEFAULT_BRANCH`].
    pub branch: String,
    /// Stored access-token name; defaults to [`DEFAULT_TOKEN_NAME`].
    pub token_name: String,
    /// Root hosted-zone identifier, if configured.
    pub zone_id: Option<String>,
    /// Root hosted-zone name, if configured.
    pub zone_name: Option<String>,
}

impl PipelineSettings {
    /// Extracts pipeline settings from a context map, applying the reference
    /// template's defaults for omitted entries.
    #[must_use]
    pub fn from_context(context: &ContextMap) -> Self {
        Self {
            repo: context.get_str(PIPELINE_REPO_KEY).map(str::to_owned),
            branch: context
                .get_str(PIPELINE_BRANCH_KEY)
                .unwrap_or(DEFAULT_BRANCH)
                .to_owned(),
            token_name: context
                .get_str(PIPELINE_TOKEN_NAME_KEY)
                .unwrap_or(DEFAULT_TOKEN_NAME)
                .to_owned(),
            zone_id: context.get_str(PIPELINE_ZONE_ID_KEY).map(str::to_owned),
            zone_name: context.get_str(PIPELINE_ZONE_NAME_KEY).map(str::to_owned),
        }
    }
}
