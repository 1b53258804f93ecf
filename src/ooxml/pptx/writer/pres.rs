//! Presentation writer for PPTX.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::PackageWriter;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::pptx::template;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use super::slide::MutableSlide;

/// Widescreen 16:9 slide width (13.333 in).
pub const WIDESCREEN_WIDTH: i64 = 12_191_695;
/// Widescreen 16:9 slide height (7.5 in).
pub const WIDESCREEN_HEIGHT: i64 = 6_858_000;

/// Written as `dc:creator` and `cp:lastModifiedBy`.
const CREATOR: &str = "stockdeck";

/// A mutable PowerPoint presentation for writing.
///
/// Holds slides in order plus the slide size and the document properties
/// written to `docProps/core.xml`.
#[derive(Debug)]
pub struct MutablePresentation {
    /// Slides in the presentation
    pub(crate) slides: Vec<MutableSlide>,
    /// Slide width in EMUs (English Metric Units, 914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
    /// Theme font (major and minor)
    font: String,
    title: String,
}

impl MutablePresentation {
    /// Create a new empty presentation with the widescreen 13.333" x 7.5" size.
    pub fn new() -> Self {
        Self::with_size(WIDESCREEN_WIDTH, WIDESCREEN_HEIGHT)
    }

    /// Create a new empty presentation with an explicit slide size in EMUs.
    pub fn with_size(slide_width: i64, slide_height: i64) -> Self {
        Self {
            slides: Vec::new(),
            slide_width,
            slide_height,
            font: "Calibri".to_string(),
            title: String::new(),
        }
    }

    /// Add a new blank slide to the end of the presentation.
    pub fn add_slide(&mut self) -> Result<&mut MutableSlide> {
        let slide_id = u32::try_from(self.slides.len() + 256)
            .map_err(|_| OoxmlError::Xml("too many slides".to_string()))?;
        self.slides.push(MutableSlide::new(slide_id));
        self.slides
            .last_mut()
            .ok_or_else(|| OoxmlError::Xml("slide was not added".to_string()))
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// All slides in presentation order.
    pub fn slides(&self) -> &[MutableSlide] {
        &self.slides
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&MutableSlide> {
        self.slides.get(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }

    /// Set the theme font used for the major and minor font faces.
    pub fn set_font(&mut self, font: impl Into<String>) {
        self.font = font.into();
    }

    /// Set the document title written to the core properties.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Generate presentation.xml content.
    ///
    /// `slide_rel_ids` holds the relationship ID of each slide, in slide order.
    pub(crate) fn generate_presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        if slide_rel_ids.len() != self.slides.len() {
            return Err(OoxmlError::InvalidRelationship(format!(
                "{} slide relationships for {} slides",
                slide_rel_ids.len(),
                self.slides.len()
            )));
        }

        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" saveSubsetFonts="1">"#);

        // Slide master is always rId1
        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialize the presentation to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut pkg = PackageWriter::new();

        pkg.add_package_rel(rt::OFFICE_DOCUMENT, "ppt/presentation.xml");
        pkg.add_package_rel(rt::CORE_PROPERTIES, "docProps/core.xml");
        pkg.add_package_rel(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        // Blob is filled in once the slide rIds are known
        let pres = pkg.add_part("/ppt/presentation.xml", ct::PML_PRESENTATION_MAIN, Vec::new());
        pkg.add_part_rel(pres, rt::SLIDE_MASTER, "slideMasters/slideMaster1.xml");

        let mut slide_rel_ids = Vec::with_capacity(self.slides.len());
        for (index, slide) in self.slides.iter().enumerate() {
            let number = index + 1;
            let partname = format!("/ppt/slides/slide{}.xml", number);
            let idx = pkg.add_part(&partname, ct::PML_SLIDE, slide.to_xml()?.into_bytes());
            pkg.add_part_rel(idx, rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
            slide_rel_ids.push(pkg.add_part_rel(pres, rt::SLIDE, &format!("slides/slide{}.xml", number)));
        }

        pkg.add_part_rel(pres, rt::PRES_PROPS, "presProps.xml");
        pkg.add_part_rel(pres, rt::VIEW_PROPS, "viewProps.xml");
        pkg.add_part_rel(pres, rt::THEME, "theme/theme1.xml");
        pkg.add_part_rel(pres, rt::TABLE_STYLES, "tableStyles.xml");
        pkg.set_blob(pres, self.generate_presentation_xml(&slide_rel_ids)?.into_bytes());

        let master = pkg.add_part(
            "/ppt/slideMasters/slideMaster1.xml",
            ct::PML_SLIDE_MASTER,
            template::slide_master_xml().into_bytes(),
        );
        pkg.add_part_rel(master, rt::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        pkg.add_part_rel(master, rt::THEME, "../theme/theme1.xml");

        let layout = pkg.add_part(
            "/ppt/slideLayouts/slideLayout1.xml",
            ct::PML_SLIDE_LAYOUT,
            template::blank_layout_xml().into_bytes(),
        );
        pkg.add_part_rel(layout, rt::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");

        pkg.add_part(
            "/ppt/theme/theme1.xml",
            ct::OFC_THEME,
            template::theme_xml(&self.font).into_bytes(),
        );
        pkg.add_part(
            "/ppt/presProps.xml",
            ct::PML_PRES_PROPS,
            template::pres_props_xml().into_bytes(),
        );
        pkg.add_part(
            "/ppt/viewProps.xml",
            ct::PML_VIEW_PROPS,
            template::view_props_xml().into_bytes(),
        );
        pkg.add_part(
            "/ppt/tableStyles.xml",
            ct::PML_TABLE_STYLES,
            template::table_styles_xml().into_bytes(),
        );

        let timestamp = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%SZ")
            .to_string();
        pkg.add_part(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            template::core_props_xml(&self.title, CREATOR, &timestamp).into_bytes(),
        );
        pkg.add_part(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            template::app_props_xml(self.slides.len()).into_bytes(),
        );

        pkg.to_bytes()
    }

    /// Write the presentation to a file in a single write.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for MutablePresentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{RGBColor, Rect};
    use crate::ooxml::pptx::format::{ParagraphSpec, TextStyle};
    use std::io::{Cursor, Read};

    #[test]
    fn test_create_presentation() {
        let pres = MutablePresentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 12_191_695);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_add_slide() {
        let mut pres = MutablePresentation::new();
        let first = pres.add_slide().unwrap().slide_id();
        let second = pres.add_slide().unwrap().slide_id();
        assert_eq!((first, second), (256, 257));
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_presentation_xml_requires_matching_ids() {
        let mut pres = MutablePresentation::new();
        pres.add_slide().unwrap();
        assert!(pres.generate_presentation_xml(&[]).is_err());

        let xml = pres.generate_presentation_xml(&["rId2".to_string()]).unwrap();
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    }

    #[test]
    fn test_package_contains_slides() {
        let mut pres = MutablePresentation::new();
        pres.set_title("Test deck");
        let slide = pres.add_slide().unwrap();
        slide.set_background(RGBColor::new(0x1B, 0x2A, 0x4A));
        slide.add_text_box(
            Rect::new(0, 0, 914_400, 914_400),
            vec![ParagraphSpec::plain(
                "Hello",
                TextStyle::new(12.0, RGBColor::new(0, 0, 0), "Calibri"),
            )],
        );
        pres.add_slide().unwrap();

        let bytes = pres.to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("ppt/slides/slide2.xml").is_ok());
        assert!(archive.by_name("ppt/slides/_rels/slide1.xml.rels").is_ok());
        assert!(archive.by_name("ppt/theme/theme1.xml").is_ok());

        let mut pres_xml = String::new();
        archive
            .by_name("ppt/presentation.xml")
            .unwrap()
            .read_to_string(&mut pres_xml)
            .unwrap();
        assert!(pres_xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));

        let mut slide_xml = String::new();
        archive
            .by_name("ppt/slides/slide1.xml")
            .unwrap()
            .read_to_string(&mut slide_xml)
            .unwrap();
        assert!(slide_xml.contains("<a:t>Hello</a:t>"));
    }
}
