//! Stock analysis deck generation.
//!
//! Layers, leaf-first:
//!
//! - [`theme`]: palette, font and canvas size
//! - [`table`]: validated table content
//! - [`draw`]: drawing primitives (backgrounds, text boxes, bullet lists,
//!   title bars, tables, rounded panels)
//! - [`slides`]: the eleven slide builders
//! - [`input`]: the JSON input record
//! - [`builder`]: [`StockAnalysisDeck`], which runs the builders in order
//!   and saves the result

pub mod builder;
pub mod draw;
pub mod input;
pub mod slides;
pub mod table;
pub mod theme;

pub use builder::{SLIDE_COUNT, StockAnalysisDeck};
pub use input::{DeckInput, REQUIRED_KEYS};
pub use table::{Cell, TableSpec};
pub use theme::Theme;
