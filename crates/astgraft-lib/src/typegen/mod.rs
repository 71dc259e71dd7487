//! Code generators over resolved schemas.

pub mod typescript;
