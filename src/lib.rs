//! Stockdeck - investment analysis slide decks as PowerPoint packages
//!
//! This library turns one structured stock analysis record into an
//! eleven-slide widescreen `.pptx` deck: title, executive summary,
//! valuation snapshot, income statement, balance sheet and cash flow, peer
//! comparison, valuation summary, DCF sensitivity, bull/bear thesis,
//! catalysts and the final recommendation.
//!
//! # Features
//!
//! - **Deck builders**: one function per slide type, composed from a small
//!   set of drawing primitives over a shared [`deck::Theme`]
//! - **Validated tables**: header, row and column width counts are checked
//!   before anything is drawn
//! - **PPTX writer**: a self-contained PresentationML writer producing a
//!   complete OPC package in memory
//! - **Read-back**: reopen a written package to verify its slides
//!
//! # Example
//!
//! ```no_run
//! use stockdeck::deck::{DeckInput, StockAnalysisDeck};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = DeckInput::from_path("data.json")?;
//!
//! let mut deck = StockAnalysisDeck::new();
//! deck.build(&input)?;
//! let slides = deck.save("output/aapl-analysis.pptx")?;
//! println!("wrote {} slides", slides);
//! # Ok(())
//! # }
//! ```

/// Shared utilities: errors, units, colors and XML escaping
pub mod common;

/// Stock analysis deck: theme, drawing primitives, slide builders and the
/// deck orchestrator
pub mod deck;

/// OOXML (Office Open XML) presentation writer and reader
///
/// Covers the OPC container and the PresentationML parts a generated deck
/// contains.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, InputError, Result};
pub use deck::{DeckInput, StockAnalysisDeck, Theme};
