//! Palette, fonts and canvas geometry shared by every drawing call.
//!
//! A [`Theme`] is an immutable value passed by reference into the drawing
//! helpers and slide builders. Every field has a default, so a theme file
//! only needs to name what it overrides:
//!
//! ```json
//! { "accent_blue": "#3366CC", "font": "Aptos" }
//! ```

use crate::common::unit::inches;
use crate::common::{InputError, RGBColor, Rect, Result};
use crate::ooxml::pptx::TextStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Title bar, table header row and dark slide backgrounds
    pub dark_blue: RGBColor,
    /// Default bullet color and the title slide accent line
    pub accent_blue: RGBColor,
    /// Bull case and positive recommendation badge
    pub accent_green: RGBColor,
    /// Bear case and negative recommendation badge
    pub accent_red: RGBColor,
    pub white: RGBColor,
    /// Even data rows of tables
    pub light_gray: RGBColor,
    /// Footnotes and disclaimers
    pub medium_gray: RGBColor,
    /// Body text
    pub text_black: RGBColor,
    /// Subtitles on dark backgrounds
    pub subtitle_gray: RGBColor,
    pub bull_fill: RGBColor,
    pub bear_fill: RGBColor,
    /// Font family for every run
    pub font: String,
    /// Canvas width in inches
    pub slide_width: f64,
    /// Canvas height in inches
    pub slide_height: f64,
    /// Height of the title bar banner in inches
    pub title_bar_height: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dark_blue: RGBColor::new(0x1B, 0x2A, 0x4A),
            accent_blue: RGBColor::new(0x2E, 0x75, 0xB6),
            accent_green: RGBColor::new(0x27, 0xAE, 0x60),
            accent_red: RGBColor::new(0xE7, 0x4C, 0x3C),
            white: RGBColor::new(0xFF, 0xFF, 0xFF),
            light_gray: RGBColor::new(0xF2, 0xF2, 0xF2),
            medium_gray: RGBColor::new(0x95, 0xA5, 0xA6),
            text_black: RGBColor::new(0x33, 0x33, 0x33),
            subtitle_gray: RGBColor::new(0xBD, 0xC3, 0xC7),
            bull_fill: RGBColor::new(0xE8, 0xF8, 0xF5),
            bear_fill: RGBColor::new(0xFD, 0xED, 0xEC),
            font: "Calibri".to_string(),
            slide_width: 13.333,
            slide_height: 7.5,
            title_bar_height: 1.2,
        }
    }
}

impl Theme {
    /// Parse a theme override from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| InputError::Json(e).into())
    }

    /// Load a theme override file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Canvas width in EMU.
    #[inline]
    pub fn slide_width_emu(&self) -> i64 {
        inches(self.slide_width)
    }

    /// Canvas height in EMU.
    #[inline]
    pub fn slide_height_emu(&self) -> i64 {
        inches(self.slide_height)
    }

    /// Full-width banner at the top of content slides.
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(0, 0, self.slide_width_emu(), inches(self.title_bar_height))
    }

    /// Regular body text of the given size in the theme font.
    pub fn text(&self, size: f64) -> TextStyle {
        TextStyle::new(size, self.text_black, self.font.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas() {
        let theme = Theme::default();
        assert_eq!(theme.slide_width_emu(), 12_191_695);
        assert_eq!(theme.slide_height_emu(), 6_858_000);
        assert_eq!(theme.title_bar_rect().height, 1_097_280);
    }

    #[test]
    fn test_partial_override() {
        let theme = Theme::from_json_str(r##"{"accent_blue": "#3366CC", "font": "Aptos"}"##).unwrap();
        assert_eq!(theme.accent_blue, RGBColor::new(0x33, 0x66, 0xCC));
        assert_eq!(theme.font, "Aptos");
        assert_eq!(theme.dark_blue, Theme::default().dark_blue);
    }

    #[test]
    fn test_bad_color_is_input_error() {
        let err = Theme::from_json_str(r#"{"white": "not-a-color"}"#).unwrap_err();
        assert!(matches!(err, crate::Error::Input(InputError::Json(_))));
    }
}
