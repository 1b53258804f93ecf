//! Style primitives shared across the writer and the deck layer.

pub mod color;

pub use color::RGBColor;
