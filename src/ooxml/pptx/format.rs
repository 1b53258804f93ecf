//! Format types for PPTX shapes and text.

use crate::common::RGBColor;
use crate::common::unit::{pt_to_centipoints, pt_to_emu_f64};
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// Horizontal paragraph alignment (`a:pPr/@algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Text styling applied to every run of a paragraph.
///
/// A plain value bundle: drawing code copies it into each paragraph it
/// creates, so changing a style after drawing has no effect on the slide.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub size: f64,
    /// Bold text
    pub bold: bool,
    /// Text color
    pub color: RGBColor,
    /// Horizontal alignment
    pub alignment: Alignment,
    /// Latin font family
    pub font: String,
}

impl TextStyle {
    /// Create a regular, left-aligned style.
    pub fn new(size: f64, color: RGBColor, font: impl Into<String>) -> Self {
        Self {
            size,
            bold: false,
            color,
            alignment: Alignment::Left,
            font: font.into(),
        }
    }

    /// Builder method: set bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Builder method: set alignment.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Builder method: set color.
    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = color;
        self
    }

    /// Builder method: set font size in points.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Write the `a:rPr` element for a run in this style.
    pub(crate) fn write_run_properties(&self, xml: &mut String) -> std::fmt::Result {
        write!(
            xml,
            r#"<a:rPr lang="en-US" sz="{}" b="{}" dirty="0">"#,
            pt_to_centipoints(self.size),
            if self.bold { 1 } else { 0 }
        )?;
        // Fill must precede the font elements in CT_TextCharacterProperties
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            self.color.to_hex()
        )?;
        let font = escape_xml(&self.font);
        write!(
            xml,
            r#"<a:latin typeface="{font}"/><a:cs typeface="{font}"/>"#
        )?;
        xml.push_str("</a:rPr>");
        Ok(())
    }
}

/// Bullet marker for a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bullet {
    pub glyph: char,
    pub color: RGBColor,
}

impl Bullet {
    /// The round bullet used throughout the deck.
    pub const fn round(color: RGBColor) -> Self {
        Self { glyph: '\u{2022}', color }
    }
}

/// One paragraph of a text body: a single run plus paragraph properties.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphSpec {
    pub text: String,
    pub style: TextStyle,
    pub bullet: Option<Bullet>,
    /// Spacing after the paragraph, in points
    pub space_after: Option<f64>,
}

/// Left margin and hanging indent for bulleted paragraphs, in EMU.
const BULLET_MARGIN: i64 = 285_750;

impl ParagraphSpec {
    pub fn plain(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            bullet: None,
            space_after: None,
        }
    }

    pub fn bulleted(text: impl Into<String>, style: TextStyle, bullet: Bullet) -> Self {
        Self {
            text: text.into(),
            style,
            bullet: Some(bullet),
            space_after: None,
        }
    }

    pub fn with_space_after(mut self, points: f64) -> Self {
        self.space_after = Some(points);
        self
    }

    /// Write the full `a:p` element.
    pub(crate) fn to_xml(&self, xml: &mut String) -> std::fmt::Result {
        xml.push_str("<a:p>");

        write!(xml, r#"<a:pPr algn="{}""#, self.style.alignment.as_ooxml())?;
        if self.bullet.is_some() {
            write!(xml, r#" marL="{}" indent="-{}""#, BULLET_MARGIN, BULLET_MARGIN)?;
        }
        xml.push('>');
        if let Some(points) = self.space_after {
            // spcPts is in hundredths of a point
            write!(
                xml,
                r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                pt_to_centipoints(points)
            )?;
        }
        match self.bullet {
            Some(bullet) => {
                write!(
                    xml,
                    r#"<a:buClr><a:srgbClr val="{}"/></a:buClr>"#,
                    bullet.color.to_hex()
                )?;
                write!(
                    xml,
                    r#"<a:buFont typeface="Arial"/><a:buChar char="{}"/>"#,
                    escape_xml(&bullet.glyph.to_string())
                )?;
            },
            None => xml.push_str("<a:buNone/>"),
        }
        xml.push_str("</a:pPr>");

        xml.push_str("<a:r>");
        self.style.write_run_properties(xml)?;
        write!(xml, "<a:t>{}</a:t>", escape_xml(&self.text))?;
        xml.push_str("</a:r>");

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// Outline of an autoshape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineStyle {
    /// No outline (`a:ln/a:noFill`)
    None,
    /// Solid outline with width in points
    Solid { color: RGBColor, width_pt: f64 },
}

impl LineStyle {
    pub(crate) fn to_xml(&self, xml: &mut String) -> std::fmt::Result {
        match self {
            Self::None => {
                xml.push_str("<a:ln><a:noFill/></a:ln>");
            },
            Self::Solid { color, width_pt } => {
                write!(
                    xml,
                    r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                    pt_to_emu_f64(*width_pt),
                    color.to_hex()
                )?;
            },
        }
        Ok(())
    }
}

/// Preset geometry of an autoshape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
}

impl Geometry {
    pub fn preset(&self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
        }
    }
}
