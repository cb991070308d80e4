//! Conversion between hex RGB text and HSL values.

use crate::{ColorFormatError, HslColor};

/// Convert a `#RRGGBB` string to an HSL color.
///
/// Case-insensitive; a single leading `#` is optional. Components are
/// rounded to the nearest whole degree/percent, so `#7209B7` yields
/// exactly `276 91% 38%`. Anything that is not six hex digits is an
/// [`ColorFormatError::InvalidHex`].
pub fn hex_to_hsl(hex: &str) -> Result<HslColor, ColorFormatError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorFormatError::InvalidHex(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| -> f32 {
        // Validated above, cannot fail.
        u8::from_str_radix(&digits[range], 16).unwrap_or(0) as f32 / 255.0
    };
    let r = channel(0..2);
    let g = channel(2..4);
    let b = channel(4..6);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        // Achromatic: hue is undefined, report zero.
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Ok(HslColor::new(
        (h * 360.0).round(),
        (s * 100.0).round(),
        (l * 100.0).round(),
    ))
}

/// Convert an `"H S% L%"` string to a `#rrggbb` hex string.
///
/// On parse failure this returns black (`#000000`) instead of an error:
/// picker widgets feed transient half-typed text through here and must
/// keep rendering. Use [`HslColor::to_hex`] when the input is already
/// structured.
pub fn hsl_str_to_hex(hsl: &str) -> String {
    hsl.parse::<HslColor>()
        .map(|color| color.to_hex())
        .unwrap_or_else(|_| "#000000".to_string())
}

impl HslColor {
    /// Format as a `#rrggbb` hex string (lowercase, zero-padded).
    pub fn to_hex(&self) -> String {
        let h = self.hue();
        let s = self.saturation() / 100.0;
        let l = self.lightness() / 100.0;

        let k = |n: f32| (n + h / 30.0) % 12.0;
        let a = s * l.min(1.0 - l);
        let f = |n: f32| l - a * (k(n) - 3.0).min(9.0 - k(n)).min(1.0).max(-1.0);

        let channel = |x: f32| (x * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(f(0.0)),
            channel(f(8.0)),
            channel(f(4.0))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(hex: &str) -> [i32; 3] {
        let digits = hex.trim_start_matches('#');
        [
            i32::from_str_radix(&digits[0..2], 16).unwrap(),
            i32::from_str_radix(&digits[2..4], 16).unwrap(),
            i32::from_str_radix(&digits[4..6], 16).unwrap(),
        ]
    }

    #[test]
    fn test_known_conversion() {
        let hsl = hex_to_hsl("#7209B7").unwrap();
        assert_eq!(hsl.to_string(), "276 91% 38%");
    }

    #[test]
    fn test_primaries() {
        assert_eq!(hex_to_hsl("#FF0000").unwrap().to_string(), "0 100% 50%");
        assert_eq!(hex_to_hsl("#00FF00").unwrap().to_string(), "120 100% 50%");
        assert_eq!(hex_to_hsl("#0000FF").unwrap().to_string(), "240 100% 50%");
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(hex_to_hsl("#000000").unwrap().to_string(), "0 0% 0%");
        assert_eq!(hex_to_hsl("#FFFFFF").unwrap().to_string(), "0 0% 100%");
        assert_eq!(hex_to_hsl("#808080").unwrap().to_string(), "0 0% 50%");
    }

    #[test]
    fn test_case_and_prefix() {
        assert_eq!(hex_to_hsl("#7209b7").unwrap(), hex_to_hsl("7209B7").unwrap());
    }

    #[test]
    fn test_invalid_hex() {
        for bad in ["", "#FFF", "#GGGGGG", "#12345", "#1234567", "not a color"] {
            assert!(hex_to_hsl(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_hsl_string_to_hex() {
        assert_eq!(hsl_str_to_hex("0 100% 50%"), "#ff0000");
        assert_eq!(hsl_str_to_hex("240 100% 50%"), "#0000ff");
    }

    #[test]
    fn test_hsl_string_fallback_is_black() {
        assert_eq!(hsl_str_to_hex(""), "#000000");
        assert_eq!(hsl_str_to_hex("#7209B7"), "#000000");
        assert_eq!(hsl_str_to_hex("abc def ghi"), "#000000");
    }

    #[test]
    fn test_round_trip_example() {
        let original = channels("#7209B7");
        let back = channels(&hsl_str_to_hex(&hex_to_hsl("#7209B7").unwrap().to_string()));
        for i in 0..3 {
            assert!(
                (original[i] - back[i]).abs() <= 2,
                "channel {i} drifted: {original:?} vs {back:?}"
            );
        }
    }

    #[test]
    fn test_round_trip_grid() {
        // Sample the cube coarsely. Rounding each of H, S, L to whole
        // units can compound, so a small per-channel drift is expected;
        // it stays within 4/255 for this grid.
        let steps = [0x01u8, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
                    let hsl = hex_to_hsl(&hex).unwrap();
                    let back = channels(&hsl.to_hex());
                    let original = [r as i32, g as i32, b as i32];
                    for i in 0..3 {
                        assert!(
                            (original[i] - back[i]).abs() <= 4,
                            "{hex} -> {hsl} -> {back:?}"
                        );
                    }
                }
            }
        }
    }
}
