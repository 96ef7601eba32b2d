// crates/namescope-core/src/runtime/tree.rs
// ============================================================================
// Module: Namescope Scope Tree
// Description: Arena-backed construct tree with role-aware registration.
// Purpose: Assemble scope hierarchies and expose composition entry points.
// Dependencies: crate::{core, interfaces}, serde_json, thiserror
// ============================================================================

//! ## Overview
//! [`ScopeTree`] is the in-process stand-in for a host framework's construct
//! tree. Nodes are appended strictly sequentially, parents before children,
//! and every node's contextual attributes are fixed at construction. The tree
//! owns the host-side responsibilities the pure composer deliberately leaves
//! out: registration-key uniqueness within a parent scope, rejection of empty
//! identifiers, and upward context lookup. Stack nodes resolve their nearest
//! enclosing pipeline and stage once, at construction, and cache the result
//! for the remainder of their lifetime.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::num::NonZeroU64;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::core::compose::compose_scoped_id;
use crate::core::compose::compose_stack_name;
use crate::core::identifiers::NodeId;
use crate::core::scope::ConstructProps;
use crate::core::scope::ScopeRole;
use crate::core::scope::StackProps;
use crate::core::scope::StageContext;
use crate::core::scope::StageProps;
use crate::core::slug::DEFAULT_DELIMITER;
use crate::interfaces::ScopeView;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Scope-tree construction and lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Registration keys must be non-empty after trimming.
    #[error("scope identifiers must be non-empty")]
    EmptyId,
    /// A sibling with the same registration key already exists.
    #[error("identifier `{id}` is already registered under `{parent}`")]
    DuplicateId {
        /// Registration key of the parent scope.
        parent: String,
        /// Rejected child registration key.
        id: String,
    },
    /// The handle does not address a live node in this tree.
    #[error("unknown scope node: {0}")]
    UnknownNode(NodeId),
    /// The arena cannot allocate further node handles.
    #[error("scope tree capacity exhausted")]
    Capacity,
}

// ============================================================================
// SECTION: Cached Stack Ancestry
// ============================================================================

/// Ancestor attributes a stack captures once at construction.
///
/// # Invariants
/// - Never recomputed; tree mutation after construction does not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackAncestry {
    /// `app_name` of the nearest enclosing pipeline, if any.
    pub app_name: Option<String>,
    /// Attributes of the nearest enclosing stage, if any.
    pub stage: Option<StageContext>,
}

// ============================================================================
// SECTION: Node Records
// ============================================================================

/// Arena slot for a single scope node.
#[derive(Debug, Clone)]
struct NodeRecord {
    /// Registration key within the parent scope; empty only for the root.
    id: String,
    /// Parent handle; absent for the root.
    parent: Option<NodeId>,
    /// Naming role and construction-time attributes.
    role: ScopeRole,
    /// Cached ancestor attributes; present on stack nodes only.
    ancestry: Option<StackAncestry>,
    /// Context values visible from this node downward.
    context: BTreeMap<String, Value>,
    /// Registration keys of direct children, for collision detection.
    children: BTreeSet<String>,
}

// ============================================================================
// SECTION: Scope Tree
// ============================================================================

/// Arena-backed scope tree with role-aware registration.
#[derive(Debug, Clone)]
pub struct ScopeTree {
    /// Node arena; the root always occupies the first slot.
    nodes: Vec<NodeRecord>,
}

impl ScopeTree {
    /// Handle of the root node, present in every tree.
    pub const ROOT: NodeId = NodeId::new(NonZeroU64::MIN);

    /// Creates a tree containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self::with_context(BTreeMap::new())
    }

    /// Creates a tree whose root node carries the given context values.
    #[must_use]
    pub fn with_context(context: BTreeMap<String, Value>) -> Self {
        Self {
            nodes: vec![NodeRecord {
                id: String::new(),
                parent: None,
                role: ScopeRole::Construct { env: None },
                ancestry: None,
                context,
                children: BTreeSet::new(),
            }],
        }
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Registers a pipeline node under `parent`.
    ///
    /// The pipeline registers itself as `"{id}-pipeline"` and becomes the
    /// naming root supplying `app_name` to descendant stacks.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] when the parent is unknown, the identifier is
    /// empty, or a sibling already uses the registration key.
    pub fn add_pipeline(&mut self, parent: NodeId, id: &str) -> Result<NodeId, TreeError> {
        let role = ScopeRole::Pipeline {
            app_name: id.to_owned(),
        };
        self.register(parent, format!("{id}-pipeline"), role, None)
    }

    /// Registers a stage node under `parent`.
    ///
    /// The stage label is the identifier itself.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] when the parent is unknown, the identifier is
    /// empty, or a sibling already uses the registration key.
    pub fn add_stage(
        &mut self,
        parent: NodeId,
        id: &str,
        props: StageProps,
    ) -> Result<NodeId, TreeError> {
        let role = ScopeRole::Stage {
            stage: id.to_owned(),
            single: props.single,
        };
        self.register(parent, id.to_owned(), role, None)
    }

    /// Registers a stack node under `parent`.
    ///
    /// The stack resolves its nearest enclosing pipeline and stage once, here,
    /// caches both, and registers under its composed internal name:
    /// `[app_name, id unless the stage folds it away, stage]`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] when the parent is unknown, the composed name is
    /// empty, or a sibling already uses the registration key.
    pub fn add_stack(
        &mut self,
        parent: NodeId,
        id: &str,
        props: StackProps,
    ) -> Result<NodeId, TreeError> {
        let ancestry = self.resolve_stack_ancestry(parent)?;
        let name = compose_stack_name(ancestry.app_name.as_deref(), id, ancestry.stage.as_ref());
        let role = ScopeRole::Stack {
            stack_type: props.stack_type,
            stack_env: props.stack_env,
        };
        self.register(parent, name, role, Some(ancestry))
    }

    /// Registers a plain construct node under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError`] when the parent is unknown, the identifier is
    /// empty, or a sibling already uses the registration key.
    pub fn add_construct(
        &mut self,
        parent: NodeId,
        id: &str,
        props: ConstructProps,
    ) -> Result<NodeId, TreeError> {
        let role = ScopeRole::Construct { env: props.env };
        self.register(parent, id.to_owned(), role, None)
    }

    // ------------------------------------------------------------------
    // Composition
    // ------------------------------------------------------------------

    /// Composes a scoped identifier for a proposed child of `node` using the
    /// default hyphen delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when the handle is not live.
    pub fn scoped_id(&self, node: NodeId, label: &str) -> Result<String, TreeError> {
        self.scoped_id_with(node, Some(label), DEFAULT_DELIMITER)
    }

    /// Composes a scoped identifier with an explicit label and delimiter.
    ///
    /// An absent label contributes no segment; the delimiter replaces every
    /// hyphen in the normalized result.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when the handle is not live.
    pub fn scoped_id_with(
        &self,
        node: NodeId,
        label: Option<&str>,
        delimiter: &str,
    ) -> Result<String, TreeError> {
        let view = self.view(node)?;
        Ok(compose_scoped_id(&view, label, delimiter))
    }

    /// Returns a [`ScopeView`] over `node` for use with the pure composer.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when the handle is not live.
    pub fn view(&self, node: NodeId) -> Result<NodeView<'_>, TreeError> {
        let record = self.record(node)?;
        Ok(NodeView { tree: self, record })
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the registration key `node` holds within its parent scope.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when the handle is not live.
    pub fn registered_id(&self, node: NodeId) -> Result<&str, TreeError> {
        Ok(self.record(node)?.id.as_str())
    }

    /// Returns the naming role of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when the handle is not live.
    pub fn role(&self, node: NodeId) -> Result<&ScopeRole, TreeError> {
        Ok(&self.record(node)?.role)
    }

    /// Returns the parent handle of `node`, absent for the root.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when the handle is not live.
    pub fn parent(&self, node: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.record(node)?.parent)
    }

    /// Returns the ancestry a stack node cached at construction, or `None`
    /// for non-stack nodes.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when the handle is not live.
    pub fn stack_ancestry(&self, node: NodeId) -> Result<Option<&StackAncestry>, TreeError> {
        Ok(self.record(node)?.ancestry.as_ref())
    }

    // ------------------------------------------------------------------
    // Context
    // ------------------------------------------------------------------

    /// Looks up a context value visible from `node`, walking toward the root
    /// and returning the nearest match.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when the handle is not live.
    pub fn try_get_context(&self, node: NodeId, key: &str) -> Result<Option<&Value>, TreeError> {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            let record = self.record(current)?;
            if let Some(value) = record.context.get(key) {
                return Ok(Some(value));
            }
            cursor = record.parent;
        }
        Ok(None)
    }

    /// Sets a context value on `node`, shadowing values nearer the root for
    /// lookups from this node's subtree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnknownNode`] when the handle is not live.
    pub fn set_context(
        &mut self,
        node: NodeId,
        key: impl Into<String>,
        value: Value,
    ) -> Result<(), TreeError> {
        self.record_mut(node)?.context.insert(key.into(), value);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    /// Resolves the nearest enclosing pipeline and stage starting from
    /// `parent` inclusive, the way a stack observes its ancestry.
    fn resolve_stack_ancestry(&self, parent: NodeId) -> Result<StackAncestry, TreeError> {
        let mut app_name = None;
        let mut stage = None;
        let mut cursor = Some(parent);
        while let Some(current) = cursor {
            let record = self.record(current)?;
            match &record.role {
                ScopeRole::Pipeline { app_name: name } if app_name.is_none() => {
                    app_name = Some(name.clone());
                }
                ScopeRole::Stage {
                    stage: label,
                    single,
                } if stage.is_none() => {
                    stage = Some(StageContext {
                        stage: label.clone(),
                        single: *single,
                    });
                }
                _ => {}
            }
            cursor = record.parent;
        }
        Ok(StackAncestry { app_name, stage })
    }

    /// Appends a node under `parent`, enforcing non-empty and unique
    /// registration keys within the parent scope.
    fn register(
        &mut self,
        parent: NodeId,
        id: String,
        role: ScopeRole,
        ancestry: Option<StackAncestry>,
    ) -> Result<NodeId, TreeError> {
        if id.trim().is_empty() {
            return Err(TreeError::EmptyId);
        }
        let parent_record = self.record(parent)?;
        if parent_record.children.contains(&id) {
            return Err(TreeError::DuplicateId {
                parent: parent_record.id.clone(),
                id,
            });
        }
        let node = NodeId::from_index(self.nodes.len()).ok_or(TreeError::Capacity)?;
        self.nodes.push(NodeRecord {
            id: id.clone(),
            parent: Some(parent),
            role,
            ancestry,
            context: BTreeMap::new(),
            children: BTreeSet::new(),
        });
        self.record_mut(parent)?.children.insert(id);
        Ok(node)
    }

    /// Returns the record for a live node handle.
    fn record(&self, node: NodeId) -> Result<&NodeRecord, TreeError> {
        self.nodes
            .get(node.index())
            .ok_or(TreeError::UnknownNode(node))
    }

    /// Returns the mutable record for a live node handle.
    fn record_mut(&mut self, node: NodeId) -> Result<&mut NodeRecord, TreeError> {
        self.nodes
            .get_mut(node.index())
            .ok_or(TreeError::UnknownNode(node))
    }
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Node View
// ============================================================================

/// [`ScopeView`] implementation over a live tree node.
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'tree> {
    /// Owning tree, used to walk parent links.
    tree: &'tree ScopeTree,
    /// Record of the viewed node.
    record: &'tree NodeRecord,
}

impl ScopeView for NodeView<'_> {
    fn role(&self) -> &ScopeRole {
        &self.record.role
    }

    fn ancestors(&self) -> Box<dyn Iterator<Item = &ScopeRole> + '_> {
        Box::new(AncestorRoles {
            tree: self.tree,
            next: self.record.parent,
        })
    }
}

/// Iterator over ancestor roles, nearest first, ending at the root.
struct AncestorRoles<'tree> {
    /// Owning tree.
    tree: &'tree ScopeTree,
    /// Next ancestor to yield, absent once the root has been passed.
    next: Option<NodeId>,
}

impl<'tree> Iterator for AncestorRoles<'tree> {
    type Item = &'tree ScopeRole;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let record = self.tree.nodes.get(current.index())?;
        self.next = record.parent;
        Some(&record.role)
    }
}
