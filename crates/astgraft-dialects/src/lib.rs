//! Built-in AST definition dialects.
//!
//! The JSON definitions under `assets/` are parsed and converted to the
//! binary definition format by the build script, then embedded here. The
//! `core` dialect is a base ECMAScript grammar and is always available;
//! the enhancement dialects layer onto it and ride their `dialect-*`
//! features:
//!
//! - `es2017`: async functions, arrow functions, `await`
//! - `jsx`: JSX elements and attributes
//! - `typescript`: type annotations, parameter properties, interfaces,
//!   enums
//!
//! Enhancement dialects are partial definitions. They resolve cleanly
//! only after merging onto `core`:
//!
//! ```
//! use astgraft_lib::Schema;
//!
//! let merged = astgraft_dialects::core()
//!     .clone()
//!     .extend([astgraft_dialects::es2017().clone()]);
//! let schema = Schema::resolve(merged);
//! assert!(schema.is_valid());
//! assert!(schema.get("AwaitExpression").is_some());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use astgraft_core::Definition;

mod builtin;


pub use builtin::*;

/// One embedded dialect.
#[derive(Debug, Clone, Copy)]
pub struct DialectInfo {
    pub name: &'static str,
    /// Names accepted by [`from_name`], lowercase.
    pub aliases: &'static [&'static str],
    pub definition: &'static Definition,
}
