//! Package reader for OPC packages.
//!
//! Reads parts out of a ZIP container by part name and resolves
//! relationships, which is all the presentation read-back needs.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::rel::Relationships;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

/// An opened OPC package.
pub struct PackageReader {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl PackageReader {
    /// Open a package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(bytes)
    }

    /// Open a package from its raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(bytes))?;
        Ok(Self { archive })
    }

    /// Check if a part exists in the package.
    pub fn contains(&self, partname: &str) -> bool {
        self.archive
            .index_for_name(partname.trim_start_matches('/'))
            .is_some()
    }

    /// Read the content of a part.
    pub fn blob(&mut self, partname: &str) -> Result<Vec<u8>> {
        let member = partname.trim_start_matches('/');
        let mut file = match self.archive.by_name(member) {
            Ok(file) => file,
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(OoxmlError::PartNotFound(partname.to_string()));
            },
            Err(e) => return Err(e.into()),
        };
        let mut blob = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut blob)?;
        Ok(blob)
    }

    /// Relationships of a part; empty when the part has no `.rels` member.
    pub fn rels_for(&mut self, partname: &str) -> Result<Relationships> {
        let rels_name = rels_partname(partname);
        if !self.contains(&rels_name) {
            return Ok(Relationships::new());
        }
        let blob = self.blob(&rels_name)?;
        Relationships::from_xml(&blob)
    }

    /// Part name of the main document, found via the package relationships.
    pub fn main_document_partname(&mut self) -> Result<String> {
        let rels = self.rels_for("/")?;
        let rel = rels
            .iter()
            .find(|rel| rel.reltype() == rt::OFFICE_DOCUMENT)
            .ok_or_else(|| OoxmlError::InvalidRelationship("no officeDocument relationship".into()))?;
        Ok(resolve_target("/", rel.target_ref()))
    }
}

/// Part name of the `.rels` part that belongs to `partname` (`/` for the package).
fn rels_partname(partname: &str) -> String {
    if partname == "/" {
        return "/_rels/.rels".to_string();
    }
    match partname.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("/_rels/{}.rels", partname),
    }
}

/// Resolve a relative relationship target against its source part name.
pub(crate) fn resolve_target(source_partname: &str, target_ref: &str) -> String {
    if target_ref.starts_with('/') {
        return target_ref.to_string();
    }

    let base = match source_partname.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    };

    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target_ref.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            other => segments.push(other),
        }
    }

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rels_partname() {
        assert_eq!(rels_partname("/"), "/_rels/.rels");
        assert_eq!(
            rels_partname("/ppt/presentation.xml"),
            "/ppt/_rels/presentation.xml.rels"
        );
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("/", "ppt/presentation.xml"), "/ppt/presentation.xml");
        assert_eq!(
            resolve_target("/ppt/presentation.xml", "slides/slide3.xml"),
            "/ppt/slides/slide3.xml"
        );
        assert_eq!(
            resolve_target("/ppt/slides/slide1.xml", "../slideLayouts/slideLayout1.xml"),
            "/ppt/slideLayouts/slideLayout1.xml"
        );
    }

    #[test]
    fn test_not_a_zip() {
        assert!(PackageReader::from_bytes(b"not a zip".to_vec()).is_err());
    }
}
