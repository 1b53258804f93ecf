//! Mutable presentation writer components for PPTX.

pub mod pres;
pub mod shape;
pub mod slide;
pub mod table;

// Re-export main types
pub use pres::{MutablePresentation, WIDESCREEN_HEIGHT, WIDESCREEN_WIDTH};
pub use shape::{MutableShape, ShapeType};
pub use slide::MutableSlide;
pub use table::{GraphicTable, TableCell};
