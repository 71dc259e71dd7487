//! Structural narrowing of node lookups.
//!
//! A [`NodeFilter`] keeps the node types whose declared shape could hold
//! given literal property values. Filtering checks shapes, not instances:
//! `kind=init` keeps node types whose `kind` admits the string `"init"`,
//! e.g. an enum containing it.

use astgraft_core::{Property, ValueType};
use indexmap::IndexMap;

use super::{ResolveError, ResolvedNode, Schema};

/// Literal value used to narrow node shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Null,
}

impl FilterValue {
    /// Parse a literal from CLI-style text.
    ///
    /// `true`, `false`, and `null` are keywords, anything numeric is a
    /// number, everything else is a string.
    pub fn parse(text: &str) -> Self {
        match text {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            "null" => Self::Null,
            _ => match text.parse::<f64>() {
                Ok(value) => Self::Num(value),
                Err(_) => Self::Str(text.to_string()),
            },
        }
    }
}

/// Property-value constraints for narrowing a node lookup.
///
/// A node type passes when its declared shape admits every entry: the
/// property must exist and its type must be able to hold the literal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeFilter {
    entries: IndexMap<String, FilterValue>,
}

impl NodeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint, replacing any previous one for the same property.
    pub fn with(mut self, property: impl Into<String>, value: FilterValue) -> Self {
        self.entries.insert(property.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Schema {
    /// Resolve a name, keeping node types whose declared shape admits every
    /// filter entry. An empty filter keeps everything.
    pub fn extract(
        &self,
        name: &str,
        filter: &NodeFilter,
    ) -> Result<Vec<&ResolvedNode>, ResolveError> {
        let candidates = self.node(name)?;
        if filter.is_empty() {
            return Ok(candidates);
        }
        Ok(candidates
            .into_iter()
            .filter(|node| self.shape_admits_all(&node.name, filter))
            .collect())
    }

    fn shape_admits_all(&self, name: &str, filter: &NodeFilter) -> bool {
        let Some(shape) = self.definition.get(name) else {
            return false;
        };
        filter.iter().all(|(property, value)| {
            shape
                .properties
                .get(property)
                .is_some_and(|declared| property_admits(declared, value))
        })
    }
}

/// Whether a declared property type can hold the literal.
fn property_admits(property: &Property, value: &FilterValue) -> bool {
    match (property, value) {
        (Property::Value(ValueType::String), FilterValue::Str(_)) => true,
        (Property::Value(ValueType::StrEnum(values)), FilterValue::Str(text)) => {
            values.contains(text)
        }
        (Property::Value(ValueType::Number), FilterValue::Num(_)) => true,
        (Property::Value(ValueType::Boolean), FilterValue::Bool(_)) => true,
        (Property::Value(ValueType::Null), FilterValue::Null) => true,
        (Property::Union(members), value) => {
            members.iter().any(|member| property_admits(member, value))
        }
        _ => false,
    }
}
