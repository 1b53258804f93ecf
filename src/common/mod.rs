//! Common types and utilities shared by the package writer and the deck builders.

// Submodule declarations
pub mod error;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, InputError, Result};
pub use style::RGBColor;
pub use unit::Rect;
