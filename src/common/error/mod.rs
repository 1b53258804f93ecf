//! Unified error types for stockdeck.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, InputError, Result};
