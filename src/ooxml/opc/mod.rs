//! Open Packaging Conventions (OPC) support.
//!
//! A `.pptx` file is a ZIP container of XML parts tied together by
//! relationship parts and described by `[Content_Types].xml`.

pub mod constants;
pub mod pkgreader;
pub mod pkgwriter;
pub mod rel;

pub use pkgreader::PackageReader;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
