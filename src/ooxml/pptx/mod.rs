//! PowerPoint (.pptx) presentation support.
//!
//! Writing goes through [`MutablePresentation`]: slides hold text boxes,
//! autoshapes and tables, and the whole package is serialized in one pass.
//! [`Package`] reads a written file back for verification.
//!
//! # Example
//!
//! ```rust,no_run
//! use stockdeck::common::{RGBColor, Rect};
//! use stockdeck::ooxml::pptx::{MutablePresentation, ParagraphSpec, TextStyle};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide()?;
//! slide.set_background(RGBColor::new(0x1B, 0x2A, 0x4A));
//! slide.add_text_box(
//!     Rect::inches(0.8, 1.8, 11.0, 1.2),
//!     vec![ParagraphSpec::plain("Acme Corp", TextStyle::new(44.0, RGBColor::new(255, 255, 255), "Calibri"))],
//! );
//! pres.save("deck.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use format::{Alignment, Bullet, Geometry, LineStyle, ParagraphSpec, TextStyle};
pub use package::{Package, PresentationSummary, SlideSummary};
pub use writer::{GraphicTable, MutablePresentation, MutableShape, MutableSlide, ShapeType, TableCell};
