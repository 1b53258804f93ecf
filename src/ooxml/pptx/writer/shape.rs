/// Shape types and implementation for PPTX presentations.
use crate::common::{RGBColor, Rect};
use crate::ooxml::error::Result;
use std::fmt::Write as FmtWrite;

// Import shared format types
pub use super::super::format::{Geometry, LineStyle, ParagraphSpec};
use super::table::GraphicTable;

/// A shape on a slide (text box, autoshape or table).
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    /// Shape type
    pub(crate) shape_type: ShapeType,
}

#[derive(Debug, Clone)]
pub enum ShapeType {
    TextBox {
        rect: Rect,
        paragraphs: Vec<ParagraphSpec>,
    },
    AutoShape {
        geometry: Geometry,
        rect: Rect,
        fill: Option<RGBColor>,
        line: LineStyle,
    },
    Table(GraphicTable),
}

impl MutableShape {
    /// Create a new word-wrapped text box.
    pub(crate) fn new_text_box(shape_id: u32, rect: Rect, paragraphs: Vec<ParagraphSpec>) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox { rect, paragraphs },
        }
    }

    /// Create a new preset-geometry shape.
    pub(crate) fn new_autoshape(
        shape_id: u32,
        geometry: Geometry,
        rect: Rect,
        fill: Option<RGBColor>,
        line: LineStyle,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::AutoShape {
                geometry,
                rect,
                fill,
                line,
            },
        }
    }

    /// Create a new table graphic frame.
    pub(crate) fn new_table(shape_id: u32, table: GraphicTable) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::Table(table),
        }
    }

    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    pub fn shape_type(&self) -> &ShapeType {
        &self.shape_type
    }

    /// Bounding rectangle of the shape.
    pub fn rect(&self) -> Rect {
        match &self.shape_type {
            ShapeType::TextBox { rect, .. } | ShapeType::AutoShape { rect, .. } => *rect,
            ShapeType::Table(table) => table.rect,
        }
    }

    /// Solid fill of an autoshape.
    pub fn fill(&self) -> Option<RGBColor> {
        match &self.shape_type {
            ShapeType::AutoShape { fill, .. } => *fill,
            _ => None,
        }
    }

    /// Paragraphs of a text box.
    pub fn paragraphs(&self) -> &[ParagraphSpec] {
        match &self.shape_type {
            ShapeType::TextBox { paragraphs, .. } => paragraphs,
            _ => &[],
        }
    }

    /// Text of a text box, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs()
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn table(&self) -> Option<&GraphicTable> {
        match &self.shape_type {
            ShapeType::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn is_text_box(&self) -> bool {
        matches!(self.shape_type, ShapeType::TextBox { .. })
    }

    pub fn geometry(&self) -> Option<Geometry> {
        match &self.shape_type {
            ShapeType::AutoShape { geometry, .. } => Some(*geometry),
            _ => None,
        }
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.shape_type {
            ShapeType::TextBox { rect, paragraphs } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
                    self.shape_id,
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr txBox=\"1\"/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0">"#);
                xml.push_str("<a:spAutoFit/>");
                xml.push_str("</a:bodyPr>");
                xml.push_str("<a:lstStyle/>");
                if paragraphs.is_empty() {
                    // txBody requires at least one paragraph
                    xml.push_str("<a:p/>");
                }
                for paragraph in paragraphs {
                    paragraph.to_xml(xml)?;
                }
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::AutoShape {
                geometry,
                rect,
                fill,
                line,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{} {}"/>"#,
                    self.shape_id,
                    geometry.display_name(),
                    self.shape_id - 1
                )?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, rect)?;
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    geometry.preset()
                )?;
                match fill {
                    Some(color) => {
                        write!(
                            xml,
                            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                            color.to_hex()
                        )?;
                    },
                    None => xml.push_str("<a:noFill/>"),
                }
                line.to_xml(xml)?;
                xml.push_str("</p:spPr>");

                // Autoshapes carry an empty text body so they can be edited in place
                xml.push_str("<p:txBody>");
                xml.push_str(r#"<a:bodyPr rtlCol="0" anchor="ctr"/>"#);
                xml.push_str("<a:lstStyle/>");
                xml.push_str(r#"<a:p><a:pPr algn="ctr"/><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeType::Table(table) => {
                table.to_xml(xml, self.shape_id)?;
            },
        }

        Ok(())
    }
}

fn write_xfrm(xml: &mut String, rect: &Rect) -> std::fmt::Result {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, rect.x, rect.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, rect.width, rect.height)?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::TextStyle;

    #[test]
    fn test_text_box_xml() {
        let style = TextStyle::new(18.0, RGBColor::new(0x33, 0x33, 0x33), "Calibri");
        let shape = MutableShape::new_text_box(
            3,
            Rect::new(10, 20, 300, 400),
            vec![ParagraphSpec::plain("Hello", style)],
        );

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<p:cNvPr id="3" name="TextBox 2"/>"#));
        assert!(xml.contains(r#"txBox="1""#));
        assert!(xml.contains(r#"<a:off x="10" y="20"/><a:ext cx="300" cy="400"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square""#));
        assert!(xml.contains("<a:t>Hello</a:t>"));
        assert_eq!(shape.text(), "Hello");
    }

    #[test]
    fn test_empty_text_box_has_paragraph() {
        let shape = MutableShape::new_text_box(3, Rect::default(), Vec::new());
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains("<a:p/>"));
    }

    #[test]
    fn test_rounded_rectangle_xml() {
        let green = RGBColor::new(0x27, 0xAE, 0x60);
        let shape = MutableShape::new_autoshape(
            4,
            Geometry::RoundedRectangle,
            Rect::new(0, 0, 100, 100),
            Some(RGBColor::new(0xE8, 0xF8, 0xF5)),
            LineStyle::Solid {
                color: green,
                width_pt: 2.0,
            },
        );

        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"name="Rounded Rectangle 3""#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="E8F8F5"/></a:solidFill>"#));
        assert!(xml.contains(r#"<a:ln w="25400">"#));
        assert_eq!(shape.fill(), Some(RGBColor::new(0xE8, 0xF8, 0xF5)));
        assert_eq!(shape.geometry(), Some(Geometry::RoundedRectangle));
    }
}
