//! The HSL value type.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ColorFormatError;

/// A color as a hue/saturation/lightness triple.
///
/// Hue is in degrees and wraps modulo 360; saturation and lightness are
/// percentages clamped to `[0, 100]`. The constructor enforces both, so a
/// constructed value is always in range.
///
/// The canonical text form is `"H S% L%"` (e.g. `"283 89% 37%"`), which is
/// also the serde representation. Components render without a fraction when
/// integral and with one decimal otherwise (`"0 84.2% 60.2%"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslColor {
    h: f32,
    s: f32,
    l: f32,
}

impl HslColor {
    /// Create a color, wrapping hue into `[0, 360)` and clamping
    /// saturation and lightness to `[0, 100]`.
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
        }
    }

    /// Hue in degrees, `[0, 360)`.
    pub fn hue(&self) -> f32 {
        self.h
    }

    /// Saturation percentage, `[0, 100]`.
    pub fn saturation(&self) -> f32 {
        self.s
    }

    /// Lightness percentage, `[0, 100]`.
    pub fn lightness(&self) -> f32 {
        self.l
    }

    /// Copy with a different lightness (clamped).
    pub fn with_lightness(&self, l: f32) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Copy with a different saturation (clamped).
    pub fn with_saturation(&self, s: f32) -> Self {
        Self::new(self.h, s, self.l)
    }
}

fn fmt_component(f: &mut fmt::Formatter<'_>, value: f32) -> fmt::Result {
    // One decimal of precision is what the catalog carries; anything finer
    // is below visual resolution.
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        write!(f, "{}", rounded as i32)
    } else {
        write!(f, "{:.1}", rounded)
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_component(f, self.h)?;
        write!(f, " ")?;
        fmt_component(f, self.s)?;
        write!(f, "% ")?;
        fmt_component(f, self.l)?;
        write!(f, "%")
    }
}

fn hsl_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d+(?:\.\d+)?)\s+(\d+(?:\.\d+)?)%\s+(\d+(?:\.\d+)?)%\s*$")
            .expect("HSL pattern is valid")
    })
}

impl FromStr for HslColor {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = hsl_pattern()
            .captures(s)
            .ok_or_else(|| ColorFormatError::InvalidHsl(s.to_string()))?;
        let component = |i: usize| -> Result<f32, ColorFormatError> {
            caps[i]
                .parse::<f32>()
                .map_err(|_| ColorFormatError::InvalidHsl(s.to_string()))
        };
        Ok(Self::new(component(1)?, component(2)?, component(3)?))
    }
}

impl Serialize for HslColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HslColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Pick a readable foreground for the given background.
///
/// Backgrounds with lightness strictly above 50 count as light and get a
/// near-black foreground; lightness of exactly 50 takes the dark branch
/// and gets near-white. The two constants match the catalog's own
/// foreground conventions.
pub fn high_contrast_foreground(background: HslColor) -> HslColor {
    if background.lightness() > 50.0 {
        HslColor::new(0.0, 0.0, 3.9)
    } else {
        HslColor::new(0.0, 0.0, 98.0)
    }
}
