//! TypeScript declaration emission.
//!
//! [`emit`] turns a resolved [`Schema`] into `.d.ts` source: one interface
//! per node type, the three group aliases (`Statement`, `Expression`,
//! `Node`), and a small set of support types. Every interface carries the
//! generated properties alongside the declared ones:
//!
//! - `type`: the node-type name as a string-literal discriminant
//! - `range`: character offsets into the source
//! - `loc`: line/column span
//! - `parent`: the union of node types that can contain this one, or the
//!   configured absence type for root-only nodes
//!
//! Emission is mechanical and never fails; feed it an invalid schema and it
//! happily writes interfaces for whatever resolved. Gate on
//! [`Schema::is_valid`] first.

mod config;
mod emitter;


pub use config::{AbsentParent, Config};

use crate::schema::Schema;

/// Emit TypeScript declarations with default options.
pub fn emit(schema: &Schema) -> String {
    emit_with_config(schema, &Config::default())
}

/// Emit TypeScript declarations.
pub fn emit_with_config(schema: &Schema, config: &Config) -> String {
    emitter::Emitter::new(schema, config).emit()
}
