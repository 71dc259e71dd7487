//! Core definition model for astgraft.
//!
//! An AST definition maps node-type names to property shapes. This crate
//! holds the data model, the JSON and binary codecs, and the layer-merge
//! operation. Validation, resolution, and code generation live in
//! `astgraft-lib`.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the authored definition JSON
//! - **Domain layer**: ordered maps of node shapes, ready for merging and
//!   resolution

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod colors;
mod definition;

pub use colors::Colors;
pub use definition::{
    Definition, DefinitionError, MetaName, NodeShape, Property, RESERVED_PROPERTIES, ValueType,
};
