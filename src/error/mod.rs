//! Error types for scaffolding failures

pub mod types;

pub use types::ScaffoldError;
