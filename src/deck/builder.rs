//! Deck orchestration: one input record in, one eleven-slide deck out.

use super::input::DeckInput;
use super::slides;
use super::theme::Theme;
use crate::common::Result;
use crate::ooxml::pptx::MutablePresentation;
use std::path::Path;
use tracing::{debug, info};

/// Number of slides in a complete deck.
pub const SLIDE_COUNT: usize = 11;

/// A stock analysis deck being built.
///
/// The deck owns a widescreen presentation and the theme every slide is
/// drawn with. Slides are only ever appended.
///
/// # Examples
///
/// ```rust,no_run
/// use stockdeck::deck::{DeckInput, StockAnalysisDeck};
///
/// let input = DeckInput::from_path("data.json")?;
/// let mut deck = StockAnalysisDeck::new();
/// deck.build(&input)?;
/// deck.save("output/aapl-analysis.pptx")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct StockAnalysisDeck {
    pres: MutablePresentation,
    theme: Theme,
}

impl StockAnalysisDeck {
    /// Create an empty deck with the default theme.
    pub fn new() -> Self {
        Self::with_theme(Theme::default())
    }

    /// Create an empty deck with a custom theme.
    pub fn with_theme(theme: Theme) -> Self {
        let mut pres =
            MutablePresentation::with_size(theme.slide_width_emu(), theme.slide_height_emu());
        pres.set_font(theme.font.as_str());
        Self { pres, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The underlying presentation.
    pub fn presentation(&self) -> &MutablePresentation {
        &self.pres
    }

    pub fn slide_count(&self) -> usize {
        self.pres.slide_count()
    }

    /// Build all eleven slides from `input`, in their fixed order.
    pub fn build(&mut self, input: &DeckInput) -> Result<()> {
        let theme = &self.theme;
        let pres = &mut self.pres;

        pres.set_title(format!(
            "Investment Analysis: {} ({})",
            input.company, input.ticker
        ));

        slides::build_title_slide(
            pres,
            theme,
            &input.ticker,
            &input.company,
            &input.date,
            &input.rating,
            input.price,
            input.target,
        )?;
        debug!(slide = 1, "built title slide");

        slides::build_executive_summary(pres, theme, &input.executive_summary)?;
        debug!(slide = 2, "built executive summary");

        slides::build_valuation_snapshot(pres, theme, &input.valuation_metrics)?;
        debug!(slide = 3, "built valuation snapshot");

        slides::build_income_statement(
            pres,
            theme,
            &input.income_years,
            &input.income_rows,
            input.income_note.as_deref(),
        )?;
        debug!(slide = 4, "built income statement");

        slides::build_balance_sheet_cashflow(
            pres,
            theme,
            &input.balance_years,
            &input.balance_rows,
            input.balance_note.as_deref(),
        )?;
        debug!(slide = 5, "built balance sheet and cash flow");

        slides::build_peer_comparison(pres, theme, &input.ticker, &input.peers, &input.peer_rows)?;
        debug!(slide = 6, peers = input.peers.len(), "built peer comparison");

        slides::build_valuation_summary(
            pres,
            theme,
            &input.valuation_rows,
            input.valuation_note.as_deref(),
        )?;
        debug!(slide = 7, "built valuation summary");

        slides::build_sensitivity_analysis(
            pres,
            theme,
            &input.sensitivity_scenarios,
            &input.sensitivity_waccs,
            &input.sensitivity_matrix,
            input.sensitivity_note.as_deref(),
        )?;
        debug!(slide = 8, "built sensitivity analysis");

        slides::build_bull_bear(pres, theme, &input.bull_case, &input.bear_case)?;
        debug!(slide = 9, "built bull/bear thesis");

        slides::build_catalysts(pres, theme, &input.catalysts)?;
        debug!(slide = 10, "built catalysts");

        slides::build_recommendation(
            pres,
            theme,
            &input.rating,
            input.price,
            input.target,
            &input.risk,
            &input.consensus,
            &input.rec_summary,
        )?;
        debug!(slide = 11, rating = %input.rating, "built recommendation");

        Ok(())
    }

    /// Serialize the deck to `.pptx` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.pres.to_bytes()?)
    }

    /// Write the deck to `path`, creating parent directories as needed.
    ///
    /// The package is assembled in memory first and written with a single
    /// write, so a failure never leaves a partial file behind. Returns the
    /// number of slides written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;

        let count = self.slide_count();
        info!("Saved: {} ({} slides)", path.display(), count);
        Ok(count)
    }
}

impl Default for StockAnalysisDeck {
    fn default() -> Self {
        Self::new()
    }
}
