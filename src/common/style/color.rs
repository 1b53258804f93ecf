use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// RGB color representation.
///
/// Each component is in the range 0-255. Serialized as a six digit hex
/// string so theme overrides can be written as `"1B2A4A"` or `"#1B2A4A"`.
///
/// # Examples
///
/// ```rust
/// use stockdeck::common::RGBColor;
///
/// let navy = RGBColor::new(0x1B, 0x2A, 0x4A);
/// assert_eq!(navy.to_hex(), "1B2A4A");
/// assert_eq!(RGBColor::from_hex("#1b2a4a"), Some(navy));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string (e.g., "FF0000" or "#FF0000").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an upper-case hex string without `#`, the form `a:srgbClr/@val` expects.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl Serialize for RGBColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RGBColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RGBColor::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color `{}`", s)))
    }
}
