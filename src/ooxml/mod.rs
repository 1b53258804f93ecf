//! Office Open XML (OOXML) format implementation.
//!
//! Only PresentationML is supported, on top of a small Open Packaging
//! Conventions layer:
//!
//! 1. **OPC Layer** (`opc`): ZIP container, content types, relationships
//! 2. **Error** (`error`): errors shared by the OOXML layers
//! 3. **`pptx`**: presentation writer and read-back
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
