//! Definition data structures.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Property names present on every emitted node type.
///
/// Generators add these to each node, so definitions must not declare them.
pub const RESERVED_PROPERTIES: [&str; 4] = ["type", "range", "loc", "parent"];

/// An AST definition: node-type name → property shape, plus the group
/// bindings for `Statement` and `Expression`.
///
/// Node order is preserved from the authored document and is the order
/// resolution and emission follow. An enhancement layer is an ordinary
/// `Definition` whose parts may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Node-type name → declared properties.
    pub nodes: IndexMap<String, NodeShape>,
    /// Node types bound to the `Statement` group, in binding order.
    pub statement_kinds: Vec<String>,
    /// Node types bound to the `Expression` group, in binding order.
    pub expression_kinds: Vec<String>,
}

impl Definition {
    /// Number of node types.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the definition has no node types.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node type with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Shape of a node type, if defined.
    pub fn get(&self, name: &str) -> Option<&NodeShape> {
        self.nodes.get(name)
    }

    /// Iterate node types in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeShape)> {
        self.nodes.iter().map(|(name, shape)| (name.as_str(), shape))
    }
}

/// Declared properties of one node type, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeShape {
    pub properties: IndexMap<String, Property>,
}

/// Type of one declared property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Property {
    /// Plain value with no node references.
    Value(ValueType),
    /// Single child position naming a node type or meta type.
    Ref(String),
    /// Sequence of children; the names form the element union.
    RefList(Vec<String>),
    /// Union of alternatives.
    ///
    /// Always flat and deduplicated, with at most one `RefList` and at most
    /// one `StrEnum` member. Construction and merging maintain this.
    Union(Vec<Property>),
}

/// Value types without node references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    String,
    Number,
    Boolean,
    Null,
    /// Closed set of string literals.
    StrEnum(Vec<String>),
}

/// The three built-in meta types that expand to groups of node types.
///
/// Meta types are usable wherever a node-type name is: reference targets,
/// list elements, and lookups. They cannot be defined as node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaName {
    /// Every node type in the definition.
    Node,
    /// Node types listed in the `statementType` binding.
    Statement,
    /// Node types listed in the `expressionType` binding.
    Expression,
}

impl MetaName {
    pub const ALL: [MetaName; 3] = [MetaName::Node, MetaName::Statement, MetaName::Expression];

    /// Match a name against the meta types. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Node" => Some(Self::Node),
            "Statement" => Some(Self::Statement),
            "Expression" => Some(Self::Expression),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::Statement => "Statement",
            Self::Expression => "Expression",
        }
    }
}

impl fmt::Display for MetaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
