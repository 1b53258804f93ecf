//! The deck input record.
//!
//! One JSON document describes one deck. Required keys are checked by name
//! before the typed decode, so a missing key is reported as
//! [`InputError::MissingKey`] naming the first absent key rather than as a
//! generic decode error.

use super::table::Cell;
use crate::common::{InputError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level keys every deck input must carry, in slide order.
pub const REQUIRED_KEYS: [&str; 24] = [
    "ticker",
    "company",
    "date",
    "rating",
    "price",
    "target",
    "executive_summary",
    "valuation_metrics",
    "income_years",
    "income_rows",
    "balance_years",
    "balance_rows",
    "peers",
    "peer_rows",
    "valuation_rows",
    "sensitivity_scenarios",
    "sensitivity_waccs",
    "sensitivity_matrix",
    "bull_case",
    "bear_case",
    "catalysts",
    "risk",
    "consensus",
    "rec_summary",
];

/// Everything needed to build one stock analysis deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckInput {
    pub ticker: String,
    pub company: String,
    /// Report date, printed verbatim
    pub date: String,
    /// Analyst rating, e.g. `Buy`
    pub rating: String,
    /// Current share price
    pub price: f64,
    /// Price target
    pub target: f64,

    pub executive_summary: Vec<String>,
    /// Rows of metric, value, interpretation
    pub valuation_metrics: Vec<Vec<Cell>>,

    pub income_years: Vec<String>,
    pub income_rows: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_note: Option<String>,

    pub balance_years: Vec<String>,
    pub balance_rows: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_note: Option<String>,

    /// Peer tickers, one table column each
    pub peers: Vec<String>,
    pub peer_rows: Vec<Vec<Cell>>,

    /// Rows of method, fair value, vs current, weight
    pub valuation_rows: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuation_note: Option<String>,

    pub sensitivity_scenarios: Vec<String>,
    pub sensitivity_waccs: Vec<String>,
    /// `sensitivity_matrix[scenario][wacc]`
    pub sensitivity_matrix: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity_note: Option<String>,

    pub bull_case: Vec<String>,
    pub bear_case: Vec<String>,
    pub catalysts: Vec<String>,

    /// Risk level shown on the recommendation slide
    pub risk: String,
    /// Analyst consensus, e.g. `Strong Buy ($135 median)`
    pub consensus: String,
    /// Closing sentence of the recommendation
    pub rec_summary: String,
}

impl DeckInput {
    /// Decode an input record from a JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let object = match value.as_object() {
            Some(object) => object,
            None => {
                return Err(InputError::Json(serde::de::Error::custom(
                    "deck input must be a JSON object",
                ))
                .into());
            },
        };

        if let Some(key) = REQUIRED_KEYS.iter().find(|key| !object.contains_key(**key)) {
            return Err(InputError::MissingKey(*key).into());
        }

        serde_json::from_value(value).map_err(|e| InputError::Json(e).into())
    }

    /// Decode an input record from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(InputError::Json)?;
        Self::from_value(value)
    }

    /// Read and decode an input file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
