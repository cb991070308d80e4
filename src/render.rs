//! Terminal output helpers.

use crossterm::style::{Color, Stylize};
use malitrack_color::HslColor;

/// A two-cell block painted with the color, via true-color ANSI.
pub fn swatch(color: HslColor) -> String {
    let (r, g, b) = rgb(color);
    "  ".on(Color::Rgb { r, g, b }).to_string()
}

fn rgb(color: HslColor) -> (u8, u8, u8) {
    let hex = color.to_hex();
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).unwrap_or(0)
    };
    (channel(1..3), channel(3..5), channel(5..7))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hsl() {
        assert_eq!(rgb(HslColor::new(0.0, 100.0, 50.0)), (255, 0, 0));
        assert_eq!(rgb(HslColor::new(0.0, 0.0, 0.0)), (0, 0, 0));
        assert_eq!(rgb(HslColor::new(0.0, 0.0, 100.0)), (255, 255, 255));
    }

    #[test]
    fn test_swatch_carries_the_color() {
        let s = swatch(HslColor::new(120.0, 100.0, 50.0));
        assert!(s.contains("48;2;0;255;0"), "{s:?}");
    }
}
