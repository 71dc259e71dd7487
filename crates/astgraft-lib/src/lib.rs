//! Astgraft compiles AST definitions into resolved schemas and TypeScript
//! declaration files.
//!
//! A definition names node types and their property shapes; child positions
//! reference other node types by name, or one of the meta types `Node`,
//! `Statement`, `Expression`. Enhancement layers (dialects) merge onto a
//! base definition, then [`Schema::resolve`] validates the result, expands
//! every reference, and infers which node types can be each node's parent.
//!
//! # Example
//!
//! ```
//! use astgraft_core::Definition;
//! use astgraft_lib::Schema;
//!
//! let definition = Definition::from_json(
//!     r#"{
//!         "nodes": {
//!             "Program": { "body": { "list": "Statement" } },
//!             "ExpressionStatement": { "expression": { "ref": "Expression" } },
//!             "Identifier": { "name": "string" }
//!         },
//!         "statementType": "ExpressionStatement",
//!         "expressionType": "Identifier"
//!     }"#,
//! )
//! .expect("parses");
//!
//! let schema = Schema::resolve(definition);
//! assert!(schema.is_valid());
//!
//! let types = astgraft_lib::typegen::typescript::emit(&schema);
//! assert!(types.contains("export interface Program"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod schema;
pub mod typegen;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, SchemaPath, Severity};
pub use schema::{
    FilterValue, NodeFilter, NodeSet, Parents, ResolveError, ResolvedNode, ResolvedProperty,
    Schema, SchemaOptions, Strictness,
};

/// Errors from loading and compiling definitions.
///
/// Recoverable problems inside a definition are reported as
/// [`Diagnostics`] rather than errors; this type covers load failures and
/// the callers who require a valid schema.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Definition(#[from] astgraft_core::DefinitionError),

    #[error("definition is invalid ({} errors)", .0.error_count())]
    InvalidDefinition(Diagnostics),
}

/// Result type for definition compilation.
pub type Result<T> = std::result::Result<T, Error>;
