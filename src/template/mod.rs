//! Template instantiation: token substitution and CI pruning

pub mod ci;
pub mod substitute;
pub mod tokens;

pub use substitute::substitute_tokens;
pub use tokens::{build_token_map, extract_realm};
