//! Slide types and implementation for PPTX presentations.

use crate::common::{RGBColor, Rect};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

use super::shape::{Geometry, LineStyle, MutableShape, ParagraphSpec};
use super::table::GraphicTable;

/// A mutable slide in a presentation.
///
/// Shapes are kept in insertion order, which is also their z-order: later
/// shapes are drawn on top of earlier ones.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique within the presentation, starts at 256)
    pub(crate) slide_id: u32,
    /// Solid background fill; `None` inherits the master background
    pub(crate) background: Option<RGBColor>,
    /// Shapes on the slide
    pub(crate) shapes: Vec<MutableShape>,
}

impl MutableSlide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            background: None,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Fill the whole slide background with a solid color.
    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    /// Get the background color, if one was set.
    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    // IDs: 1=group, 2+=user shapes
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    fn push(&mut self, shape: MutableShape) -> &MutableShape {
        self.shapes.push(shape);
        &self.shapes[self.shapes.len() - 1]
    }

    /// Add a word-wrapped text box holding the given paragraphs.
    pub fn add_text_box(&mut self, rect: Rect, paragraphs: Vec<ParagraphSpec>) -> &MutableShape {
        let shape = MutableShape::new_text_box(self.next_shape_id(), rect, paragraphs);
        self.push(shape)
    }

    /// Add a preset-geometry shape (rectangle or rounded rectangle).
    pub fn add_autoshape(
        &mut self,
        geometry: Geometry,
        rect: Rect,
        fill: Option<RGBColor>,
        line: LineStyle,
    ) -> &MutableShape {
        let shape = MutableShape::new_autoshape(self.next_shape_id(), geometry, rect, fill, line);
        self.push(shape)
    }

    /// Add a fully styled table.
    pub fn add_table(&mut self, table: GraphicTable) -> &MutableShape {
        let shape = MutableShape::new_table(self.next_shape_id(), table);
        self.push(shape)
    }

    /// Shapes in z-order.
    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// First table on the slide.
    pub fn table(&self) -> Option<&GraphicTable> {
        self.shapes.iter().find_map(|s| s.table())
    }

    /// Text of every text box, in z-order.
    pub fn texts(&self) -> Vec<String> {
        self.shapes
            .iter()
            .filter(|s| s.is_text_box())
            .map(|s| s.text())
            .collect()
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        if let Some(color) = self.background {
            xml.push_str("<p:bg>");
            xml.push_str("<p:bgPr>");
            write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.to_hex()
            )?;
            xml.push_str("<a:effectLst/>");
            xml.push_str("</p:bgPr>");
            xml.push_str("</p:bg>");
        }

        xml.push_str("<p:spTree>");

        // Write group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::TextStyle;

    #[test]
    fn test_shape_ids_are_sequential() {
        let mut slide = MutableSlide::new(256);
        let style = TextStyle::new(12.0, RGBColor::new(0, 0, 0), "Calibri");
        let first = slide
            .add_autoshape(Geometry::Rectangle, Rect::default(), None, LineStyle::None)
            .shape_id();
        let second = slide
            .add_text_box(Rect::default(), vec![ParagraphSpec::plain("x", style)])
            .shape_id();
        assert_eq!((first, second), (2, 3));
        assert_eq!(slide.shape_count(), 2);
    }

    #[test]
    fn test_background_precedes_shape_tree() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(RGBColor::new(0x1B, 0x2A, 0x4A));
        let xml = slide.to_xml().unwrap();

        let bg = xml.find("<p:bg>").unwrap();
        let tree = xml.find("<p:spTree>").unwrap();
        assert!(bg < tree);
        assert!(xml.contains(r#"<a:srgbClr val="1B2A4A"/>"#));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_texts_skip_non_text_shapes() {
        let mut slide = MutableSlide::new(256);
        let style = TextStyle::new(12.0, RGBColor::new(0, 0, 0), "Calibri");
        slide.add_autoshape(Geometry::Rectangle, Rect::default(), None, LineStyle::None);
        slide.add_text_box(
            Rect::default(),
            vec![
                ParagraphSpec::plain("one", style.clone()),
                ParagraphSpec::plain("two", style),
            ],
        );
        assert_eq!(slide.texts(), vec!["one\ntwo".to_string()]);
    }
}
