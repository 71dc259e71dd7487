pub mod check;
pub mod definition_loader;
pub mod dialects;
pub mod dump;
pub mod node;
pub mod types;
