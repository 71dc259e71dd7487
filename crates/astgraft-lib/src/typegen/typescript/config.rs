/// The `parent` type for node types nothing references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AbsentParent {
    /// `parent: null`
    #[default]
    Null,
    /// `parent: undefined`
    Undefined,
}

/// Options for TypeScript emission.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix every declaration with `export`. Off, the output suits a
    /// global ambient declaration file.
    pub export: bool,
    /// Emit the `Position`, `SourceLocation`, and `Range` support types,
    /// plus the `UnknownNodeType` marker when the schema needs it. Turn
    /// off when the output is concatenated with a file that already
    /// declares them.
    pub support_types: bool,
    /// Give every interface a string index signature yielding `unknown`,
    /// so property access stays total across the node union.
    pub permissive_keys: bool,
    /// What `parent` holds for root-only node types.
    pub absent_parent: AbsentParent,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            support_types: true,
            permissive_keys: true,
            absent_parent: AbsentParent::Null,
        }
    }
}
