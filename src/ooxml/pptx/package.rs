/// Read-back of generated PowerPoint packages.
use crate::common::RGBColor;
use crate::common::xml::unescape_xml;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::opc::PackageReader;
use crate::ooxml::opc::constants::relationship_type as rt;
use crate::ooxml::opc::pkgreader::resolve_target;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::path::Path;

/// A PowerPoint (.pptx) package opened for reading.
///
/// Only what is needed to verify a written deck is extracted: slide order,
/// slide size, and the text, shape count and background of every slide.
///
/// # Examples
///
/// ```rust,no_run
/// use stockdeck::ooxml::pptx::Package;
///
/// let mut pkg = Package::open("deck.pptx")?;
/// let summary = pkg.summary()?;
/// println!("{} slides", summary.slide_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Package {
    reader: PackageReader,
}

/// Content of one slide as read back from a package.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlideSummary {
    /// Part name, e.g. `/ppt/slides/slide1.xml`
    pub partname: String,
    /// Text of every non-empty paragraph, in document order
    pub paragraphs: Vec<String>,
    /// Number of top-level shapes and graphic frames
    pub shape_count: usize,
    /// Number of tables
    pub table_count: usize,
    /// Solid background color, if the slide sets one
    pub background: Option<RGBColor>,
}

impl SlideSummary {
    /// Whether any paragraph contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.paragraphs.iter().any(|p| p.contains(needle))
    }
}

/// Summary of a whole presentation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PresentationSummary {
    /// Slide width and height in EMU
    pub slide_size: (i64, i64),
    pub slides: Vec<SlideSummary>,
}

impl PresentationSummary {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

impl Package {
    /// Open a .pptx package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            reader: PackageReader::open(path)?,
        })
    }

    /// Open a .pptx package from its bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Ok(Self {
            reader: PackageReader::from_bytes(bytes)?,
        })
    }

    /// Read the presentation part and every slide it lists, in order.
    pub fn summary(&mut self) -> Result<PresentationSummary> {
        let pres_partname = self.reader.main_document_partname()?;
        let pres_rels = self.reader.rels_for(&pres_partname)?;
        let pres_xml = self.reader.blob(&pres_partname)?;
        let (slide_rids, slide_size) = parse_presentation(&pres_xml)?;

        let mut slides = Vec::with_capacity(slide_rids.len());
        for r_id in slide_rids {
            let rel = pres_rels.get(&r_id).ok_or_else(|| {
                OoxmlError::InvalidRelationship(format!("{} not found in presentation rels", r_id))
            })?;
            if rel.reltype() != rt::SLIDE {
                return Err(OoxmlError::InvalidRelationship(format!(
                    "{} is not a slide relationship",
                    r_id
                )));
            }
            let partname = resolve_target(&pres_partname, rel.target_ref());
            let blob = self.reader.blob(&partname)?;
            let mut slide = parse_slide(&blob)?;
            slide.partname = partname;
            slides.push(slide);
        }

        Ok(PresentationSummary { slide_size, slides })
    }
}

/// Slide rIds in `p:sldIdLst` order plus the `p:sldSz` extent.
fn parse_presentation(xml: &[u8]) -> Result<(Vec<String>, (i64, i64))> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut r_ids = Vec::new();
    let mut size = (0, 0);
    loop {
        match reader.read_event()? {
            Event::Start(ref e) | Event::Empty(ref e) => match e.local_name().as_ref() {
                b"sldId" => {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"r:id" {
                            r_ids.push(String::from_utf8_lossy(&attr.value).into_owned());
                        }
                    }
                },
                b"sldSz" => {
                    for attr in e.attributes().flatten() {
                        let value = String::from_utf8_lossy(&attr.value);
                        match attr.key.as_ref() {
                            b"cx" => size.0 = value.parse().unwrap_or(0),
                            b"cy" => size.1 = value.parse().unwrap_or(0),
                            _ => {},
                        }
                    }
                },
                _ => {},
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok((r_ids, size))
}

/// Resolve a general entity or character reference name (without `&`/`;`).
fn resolve_reference(name: &str) -> String {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => num.parse().ok(),
        };
        return code
            .and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_else(|| format!("&{};", name));
    }
    unescape_xml(&format!("&{};", name))
}

fn parse_slide(xml: &[u8]) -> Result<SlideSummary> {
    let mut reader = Reader::from_reader(xml);

    let mut summary = SlideSummary::default();
    let mut paragraph = String::new();
    let mut in_text = false;
    let mut in_background = false;
    // Depth inside p:spTree; only direct children count as shapes
    let mut tree_depth: Option<usize> = None;

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let name = e.local_name();
                if let Some(depth) = tree_depth.as_mut() {
                    if *depth == 0 && matches!(name.as_ref(), b"sp" | b"graphicFrame") {
                        summary.shape_count += 1;
                    }
                    *depth += 1;
                }
                match name.as_ref() {
                    b"spTree" => tree_depth = Some(0),
                    b"bg" => in_background = true,
                    b"tbl" => summary.table_count += 1,
                    b"p" => paragraph.clear(),
                    b"t" => in_text = true,
                    _ => {},
                }
            },
            Event::Empty(ref e) => {
                let name = e.local_name();
                if name.as_ref() == b"srgbClr" && in_background && summary.background.is_none() {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"val" {
                            summary.background =
                                RGBColor::from_hex(&String::from_utf8_lossy(&attr.value));
                        }
                    }
                }
            },
            Event::Text(ref e) if in_text => {
                let text = e.decode().map_err(|err| OoxmlError::Xml(err.to_string()))?;
                paragraph.push_str(&text);
            },
            Event::GeneralRef(ref e) if in_text => {
                let name = e.decode().map_err(|err| OoxmlError::Xml(err.to_string()))?;
                paragraph.push_str(&resolve_reference(&name));
            },
            Event::End(ref e) => {
                match e.local_name().as_ref() {
                    b"spTree" => tree_depth = None,
                    b"bg" => in_background = false,
                    b"t" => in_text = false,
                    b"p" if !paragraph.is_empty() => {
                        summary.paragraphs.push(std::mem::take(&mut paragraph));
                    },
                    _ => {},
                }
                if let Some(depth) = tree_depth.as_mut() {
                    *depth = depth.saturating_sub(1);
                }
            },
            Event::Eof => break,
            _ => {},
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Rect;
    use crate::ooxml::pptx::format::{Geometry, LineStyle, ParagraphSpec, TextStyle};
    use crate::ooxml::pptx::writer::MutablePresentation;

    fn style() -> TextStyle {
        TextStyle::new(14.0, RGBColor::new(0x33, 0x33, 0x33), "Calibri")
    }

    #[test]
    fn test_resolve_reference() {
        assert_eq!(resolve_reference("amp"), "&");
        assert_eq!(resolve_reference("#8211"), "\u{2013}");
        assert_eq!(resolve_reference("#x2022"), "\u{2022}");
        assert_eq!(resolve_reference("bogus"), "&bogus;");
    }

    #[test]
    fn test_summary_of_written_presentation() {
        let mut pres = MutablePresentation::new();

        let slide = pres.add_slide().unwrap();
        slide.set_background(RGBColor::new(0x1B, 0x2A, 0x4A));
        slide.add_text_box(
            Rect::new(0, 0, 100, 100),
            vec![
                ParagraphSpec::plain("Balance Sheet & Cash Flow", style()),
                ParagraphSpec::plain("<second>", style()),
            ],
        );
        slide.add_autoshape(
            Geometry::Rectangle,
            Rect::new(0, 0, 100, 100),
            Some(RGBColor::new(0x2E, 0x75, 0xB6)),
            LineStyle::None,
        );

        pres.add_slide().unwrap().add_text_box(
            Rect::new(0, 0, 100, 100),
            vec![ParagraphSpec::plain("Second slide", style())],
        );

        let bytes = pres.to_bytes().unwrap();
        let summary = Package::from_bytes(bytes).unwrap().summary().unwrap();

        assert_eq!(summary.slide_count(), 2);
        assert_eq!(summary.slide_size, (12_191_695, 6_858_000));

        let first = &summary.slides[0];
        assert_eq!(first.partname, "/ppt/slides/slide1.xml");
        assert_eq!(
            first.paragraphs,
            vec!["Balance Sheet & Cash Flow".to_string(), "<second>".to_string()]
        );
        assert_eq!(first.shape_count, 2);
        assert_eq!(first.background, Some(RGBColor::new(0x1B, 0x2A, 0x4A)));

        assert!(summary.slides[1].contains_text("Second"));
        assert_eq!(summary.slides[1].background, None);
    }
}
