//! Schema compilation pipeline.
//!
//! [`Schema::resolve`] takes a merged [`Definition`] through four stages:
//!
//! 1. **Validate**: reserved names, group bindings, empty constructs
//! 2. **Check references**: every reference target must name a node type or
//!    meta type (policy set by [`Strictness`])
//! 3. **Resolve**: rewrite each property reference-free, expanding meta
//!    types to their groups
//! 4. **Parents**: invert the reference graph to find each node's possible
//!    parent node types
//!
//! Every stage records problems as diagnostics and keeps going, so one run
//! reports everything wrong with a definition.

mod dump;
mod expand;
mod extract;
mod parents;
mod resolve;
mod validate;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod parents_tests;

pub use extract::{FilterValue, NodeFilter};

use astgraft_core::{Definition, ValueType};
use indexmap::{IndexMap, IndexSet};

use crate::diagnostics::Diagnostics;

/// How resolution treats references to undefined node types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Undefined reference targets are errors.
    #[default]
    Strict,
    /// Undefined reference targets are warnings. Resolution keeps the name
    /// as an unresolved marker, and emitters surface it explicitly instead
    /// of silently widening the type.
    Lenient,
}

/// Options for schema compilation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaOptions {
    pub strictness: Strictness,
}

/// Error for name lookups against a resolved schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("`{name}` is not a defined node type or meta type")]
    UnknownType { name: String },
}

/// Concrete targets of one resolved reference position.
///
/// `unresolved` keeps reference names that matched nothing. Strict
/// compilation already reported them as errors; lenient compilation carries
/// them here so emitted types name the missing node type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    /// Node-type names, in definition order.
    pub types: IndexSet<String>,
    /// Reference names that did not resolve.
    pub unresolved: Vec<String>,
}

impl NodeSet {
    pub fn len(&self) -> usize {
        self.types.len() + self.unresolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.unresolved.is_empty()
    }
}

/// Reference-free property type on a resolved node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedProperty {
    /// Plain value type, unchanged from the definition.
    Value(ValueType),
    /// Single child position.
    Node(NodeSet),
    /// Sequence of children; the set is the element union.
    NodeList(NodeSet),
    /// Union of alternatives, in declaration order.
    Union(Vec<ResolvedProperty>),
}

/// Node types that can contain a given node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parents {
    /// No node type references this one; it can only be a root.
    None,
    /// Referring node types, in definition order.
    Nodes(IndexSet<String>),
}

/// One node type with every reference expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    pub name: String,
    /// Declared properties, reference-free. The generated properties
    /// (`type`, `range`, `loc`, `parent`) are not materialized here;
    /// emitters add them.
    pub properties: IndexMap<String, ResolvedProperty>,
    pub parents: Parents,
}

/// A compiled AST definition: validated, reference-free, with parent sets.
///
/// Compilation never fails outright. [`resolve`](Self::resolve) always
/// returns a schema; check [`is_valid`](Self::is_valid) or
/// [`diagnostics`](Self::diagnostics) for problems found along the way, or
/// use [`try_resolve`](Self::try_resolve) to require a clean result.
#[derive(Debug, Clone)]
pub struct Schema {
    definition: Definition,
    nodes: IndexMap<String, ResolvedNode>,
    statement_kinds: IndexSet<String>,
    expression_kinds: IndexSet<String>,
    options: SchemaOptions,
    validate_diagnostics: Diagnostics,
    resolve_diagnostics: Diagnostics,
}

impl Schema {
    /// Compile a definition with default options.
    pub fn resolve(definition: Definition) -> Self {
        Self::resolve_with(definition, SchemaOptions::default())
    }

    /// Compile a definition.
    pub fn resolve_with(definition: Definition, options: SchemaOptions) -> Self {
        let mut schema = Self {
            definition,
            nodes: IndexMap::new(),
            statement_kinds: IndexSet::new(),
            expression_kinds: IndexSet::new(),
            options,
            validate_diagnostics: Diagnostics::new(),
            resolve_diagnostics: Diagnostics::new(),
        };
        schema.validate();
        schema.check_references();
        schema.build_nodes();
        schema.infer_parents();
        schema
    }

    /// Compile and require a valid result.
    ///
    /// Returns [`Error::InvalidDefinition`](crate::Error::InvalidDefinition)
    /// carrying the collected diagnostics when any stage reported an error.
    pub fn try_resolve(definition: Definition) -> crate::Result<Self> {
        Self::try_resolve_with(definition, SchemaOptions::default())
    }

    /// Compile with options and require a valid result.
    pub fn try_resolve_with(definition: Definition, options: SchemaOptions) -> crate::Result<Self> {
        let schema = Self::resolve_with(definition, options);
        if schema.is_valid() {
            Ok(schema)
        } else {
            Err(crate::Error::InvalidDefinition(schema.diagnostics()))
        }
    }

    /// Whether no stage reported an error. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        !self.validate_diagnostics.has_errors() && !self.resolve_diagnostics.has_errors()
    }

    /// All diagnostics, in stage order.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut combined = self.validate_diagnostics.clone();
        combined.extend(self.resolve_diagnostics.clone());
        combined
    }

    /// The merged definition this schema was compiled from.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Number of resolved node types.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// A single resolved node type by exact name.
    pub fn get(&self, name: &str) -> Option<&ResolvedNode> {
        self.nodes.get(name)
    }

    /// Resolve a name to node types.
    ///
    /// A node-type name yields that one node; a meta type yields its group
    /// in definition order. Unknown names are an error carrying the
    /// requested name.
    pub fn node(&self, name: &str) -> Result<Vec<&ResolvedNode>, ResolveError> {
        match self.expand_name(name) {
            Some(names) => Ok(names.iter().filter_map(|n| self.nodes.get(n)).collect()),
            None => Err(ResolveError::UnknownType {
                name: name.to_string(),
            }),
        }
    }

    /// Possible parents of a concrete node type.
    pub fn parents_of(&self, name: &str) -> Result<&Parents, ResolveError> {
        self.nodes
            .get(name)
            .map(|node| &node.parents)
            .ok_or_else(|| ResolveError::UnknownType {
                name: name.to_string(),
            })
    }

    /// Iterate all resolved node types in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedNode> {
        self.nodes.values()
    }

    /// Resolved node types bound to the `Statement` group.
    pub fn statements(&self) -> impl Iterator<Item = &ResolvedNode> {
        self.statement_kinds
            .iter()
            .filter_map(|name| self.nodes.get(name))
    }

    /// Resolved node types bound to the `Expression` group.
    pub fn expressions(&self) -> impl Iterator<Item = &ResolvedNode> {
        self.expression_kinds
            .iter()
            .filter_map(|name| self.nodes.get(name))
    }

    /// Validated `Statement` group members.
    ///
    /// Binding entries that were not defined node types are excluded (and
    /// were reported during validation).
    pub fn statement_kinds(&self) -> &IndexSet<String> {
        &self.statement_kinds
    }

    /// Validated `Expression` group members.
    pub fn expression_kinds(&self) -> &IndexSet<String> {
        &self.expression_kinds
    }
}
