//! AST definition loading, merging, and access.
//!
//! A [`Definition`] maps node-type names to property shapes. Child positions
//! are symbolic references to other node types (or to one of the meta types
//! `Node`, `Statement`, `Expression`); nothing is expanded here. Enhancement
//! layers are ordinary definitions, folded onto a base with
//! [`Definition::extend`].

mod binary;
mod json;
mod merge;
mod types;

#[cfg(test)]
mod merge_tests;

pub use json::DefinitionError;
pub use types::{Definition, MetaName, NodeShape, Property, RESERVED_PROPERTIES, ValueType};
