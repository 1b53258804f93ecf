//! Package writer for OPC packages.
//!
//! Parts are registered in memory with their content type and relationships,
//! then serialized in one pass: `[Content_Types].xml`, package relationships,
//! and every part followed by its `.rels` part.

use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::content_type as ct;
use crate::ooxml::opc::rel::Relationships;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// A part waiting to be written.
#[derive(Debug)]
struct PendingPart {
    /// Absolute part name, e.g. `/ppt/slides/slide1.xml`
    partname: String,
    content_type: &'static str,
    blob: Vec<u8>,
    rels: Relationships,
}

/// Package writer that serializes an OPC package to a ZIP archive.
///
/// # Example
///
/// ```
/// use stockdeck::ooxml::opc::PackageWriter;
/// use stockdeck::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
///
/// let mut pkg = PackageWriter::new();
/// pkg.add_package_rel(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
/// pkg.add_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, b"<p:presentation/>".to_vec());
/// let bytes = pkg.to_bytes().unwrap();
/// assert!(bytes.starts_with(b"PK"));
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    package_rels: Relationships,
    parts: Vec<PendingPart>,
}

impl PackageWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package-level relationship (`_rels/.rels`) and return its rId.
    pub fn add_package_rel(&mut self, reltype: &str, target_ref: &str) -> String {
        self.package_rels.add(reltype, target_ref)
    }

    /// Register a part. Returns its index for [`Self::add_part_rel`].
    pub fn add_part(&mut self, partname: &str, content_type: &'static str, blob: Vec<u8>) -> usize {
        self.parts.push(PendingPart {
            partname: partname.to_string(),
            content_type,
            blob,
            rels: Relationships::new(),
        });
        self.parts.len() - 1
    }

    /// Add a relationship from the part at `part_idx` and return its rId.
    pub fn add_part_rel(&mut self, part_idx: usize, reltype: &str, target_ref: &str) -> String {
        self.parts[part_idx].rels.add(reltype, target_ref)
    }

    /// Replace the content of an already registered part.
    ///
    /// Used for parts whose XML depends on rIds assigned after registration.
    pub fn set_blob(&mut self, part_idx: usize, blob: Vec<u8>) {
        self.parts[part_idx].blob = blob;
    }

    /// Serialize the package to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        // [Content_Types].xml must be the first member
        let content_types = ContentTypesItem::from_parts(&self.parts).to_xml();
        writer.start_file("[Content_Types].xml", options)?;
        writer.write_all(content_types.as_bytes())?;

        writer.start_file("_rels/.rels", options)?;
        writer.write_all(self.package_rels.to_xml().as_bytes())?;

        for part in &self.parts {
            writer.start_file(membername(&part.partname), options)?;
            writer.write_all(&part.blob)?;

            if !part.rels.is_empty() {
                writer.start_file(rels_membername(&part.partname), options)?;
                writer.write_all(part.rels.to_xml().as_bytes())?;
            }
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}

/// ZIP member name of a part (part name without the leading slash).
fn membername(partname: &str) -> &str {
    partname.trim_start_matches('/')
}

/// ZIP member name of a part's relationships, e.g.
/// `/ppt/slides/slide1.xml` -> `ppt/slides/_rels/slide1.xml.rels`.
fn rels_membername(partname: &str) -> String {
    let member = membername(partname);
    match member.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", member),
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl ContentTypesItem {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    fn from_parts(parts: &[PendingPart]) -> Self {
        let mut cti = Self::new();
        for part in parts {
            cti.overrides
                .insert(part.partname.clone(), part.content_type.to_string());
        }
        cti
    }

    /// Generate the XML for [Content_Types].xml, sorted for stable output.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );

        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                ext, content_type
            ));
        }

        for (partname, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                partname, content_type
            ));
        }

        xml.push_str("</Types>");

        xml
    }
}
