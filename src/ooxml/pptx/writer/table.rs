/// Table graphic frames for PPTX slides.
///
/// A DrawingML table (`a:tbl`) lives inside a `p:graphicFrame`. Every cell is
/// fully styled here (fill, anchor, one paragraph), so the output does not
/// depend on any table style part.
use crate::common::RGBColor;
use crate::common::Rect;
use crate::ooxml::error::Result;
use crate::ooxml::pptx::format::ParagraphSpec;
use std::fmt::Write as FmtWrite;

const TABLE_URI: &str = "http://schemas.openxmlformats.org/drawingml/2006/table";

/// A single rendered table cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub paragraph: ParagraphSpec,
    pub fill: Option<RGBColor>,
}

impl TableCell {
    /// Plain text of the cell.
    pub fn text(&self) -> &str {
        &self.paragraph.text
    }
}

/// A positioned, fully styled table.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphicTable {
    pub rect: Rect,
    /// Column widths in EMU, one per column
    pub column_widths: Vec<i64>,
    /// Rows of cells; every row holds `column_widths.len()` cells
    pub rows: Vec<Vec<TableCell>>,
}

impl GraphicTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Cell at (row, column), row 0 being the header.
    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Text of one row, convenient for assertions and read-back.
    pub fn row_text(&self, row: usize) -> Vec<&str> {
        self.rows
            .get(row)
            .map(|cells| cells.iter().map(TableCell::text).collect())
            .unwrap_or_default()
    }

    /// Row height in EMU. The frame height is split evenly across rows.
    fn row_height(&self) -> i64 {
        if self.rows.is_empty() {
            return self.rect.height;
        }
        self.rect.height / self.rows.len() as i64
    }

    pub(crate) fn to_xml(&self, xml: &mut String, shape_id: u32) -> Result<()> {
        xml.push_str("<p:graphicFrame>");
        xml.push_str("<p:nvGraphicFramePr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="Table {}"/>"#,
            shape_id, shape_id
        )?;
        xml.push_str(r#"<p:cNvGraphicFramePr><a:graphicFrameLocks noGrp="1"/></p:cNvGraphicFramePr>"#);
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGraphicFramePr>");

        xml.push_str("<p:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, self.rect.x, self.rect.y)?;
        write!(
            xml,
            r#"<a:ext cx="{}" cy="{}"/>"#,
            self.rect.width, self.rect.height
        )?;
        xml.push_str("</p:xfrm>");

        xml.push_str("<a:graphic>");
        write!(xml, r#"<a:graphicData uri="{}">"#, TABLE_URI)?;
        xml.push_str("<a:tbl>");
        xml.push_str(r#"<a:tblPr firstRow="1" bandRow="1"/>"#);

        xml.push_str("<a:tblGrid>");
        for width in &self.column_widths {
            write!(xml, r#"<a:gridCol w="{}"/>"#, width)?;
        }
        xml.push_str("</a:tblGrid>");

        let row_height = self.row_height();
        for row in &self.rows {
            write!(xml, r#"<a:tr h="{}">"#, row_height)?;
            for cell in row {
                xml.push_str("<a:tc>");
                xml.push_str("<a:txBody><a:bodyPr/><a:lstStyle/>");
                cell.paragraph.to_xml(xml)?;
                xml.push_str("</a:txBody>");
                xml.push_str(r#"<a:tcPr anchor="ctr">"#);
                if let Some(fill) = cell.fill {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        fill.to_hex()
                    )?;
                }
                xml.push_str("</a:tcPr>");
                xml.push_str("</a:tc>");
            }
            xml.push_str("</a:tr>");
        }

        xml.push_str("</a:tbl>");
        xml.push_str("</a:graphicData>");
        xml.push_str("</a:graphic>");
        xml.push_str("</p:graphicFrame>");

        Ok(())
    }
}
