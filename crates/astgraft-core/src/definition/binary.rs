//! Binary serialization for definitions using postcard.
//!
//! The binary form is an internal format for embedding precompiled dialect
//! definitions; it is not stable across versions. Ship JSON when the document
//! has to outlive the binary that wrote it.

use super::json::DefinitionError;
use super::types::Definition;

impl Definition {
    /// Deserialize a definition from the binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, DefinitionError> {
        postcard::from_bytes(bytes).map_err(DefinitionError::Binary)
    }

    /// Serialize the definition to the binary format.
    ///
    /// Used at build time to embed dialects into the `astgraft-dialects`
    /// crate.
    pub fn to_binary(&self) -> Vec<u8> {
        postcard::to_allocvec(self).expect("serialization should not fail")
    }
}
