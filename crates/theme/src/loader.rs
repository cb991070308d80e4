//! Theme loading from TOML documents.

use anyhow::Result;
use malitrack_color::HslColor;
use serde::Deserialize;

use crate::{ColorRole, Theme};

/// Color representation in TOML.
#[derive(Debug, Clone, Copy, Deserialize)]
struct TomlColor {
    h: f32,
    s: f32,
    l: f32,
}

impl TomlColor {
    fn to_color(self) -> HslColor {
        HslColor::new(self.h, self.s, self.l)
    }
}

/// TOML theme colors structure. Every field is required, so a document
/// missing any role fails to parse rather than producing a partial theme.
#[derive(Debug, Clone, Deserialize)]
struct TomlColors {
    background: TomlColor,
    foreground: TomlColor,
    card: TomlColor,
    card_foreground: TomlColor,
    popover: TomlColor,
    popover_foreground: TomlColor,
    primary: TomlColor,
    primary_foreground: TomlColor,
    secondary: TomlColor,
    secondary_foreground: TomlColor,
    muted: TomlColor,
    muted_foreground: TomlColor,
    accent: TomlColor,
    accent_foreground: TomlColor,
    destructive: TomlColor,
    destructive_foreground: TomlColor,
    border: TomlColor,
    input: TomlColor,
    ring: TomlColor,
    sidebar_background: TomlColor,
    sidebar_foreground: TomlColor,
}

/// TOML theme structure.
#[derive(Debug, Clone, Deserialize)]
struct TomlTheme {
    name: String,
    colors: TomlColors,
}

/// Load a theme from TOML content.
///
/// Returns the parsed theme with a leaked static name string (catalog
/// themes live for the whole program).
pub fn load_theme_from_str(content: &str) -> Result<Theme> {
    let toml_theme: TomlTheme = toml::from_str(content)?;
    let c = &toml_theme.colors;

    // Must line up with ColorRole::ALL.
    let colors = [
        c.background.to_color(),
        c.foreground.to_color(),
        c.card.to_color(),
        c.card_foreground.to_color(),
        c.popover.to_color(),
        c.popover_foreground.to_color(),
        c.primary.to_color(),
        c.primary_foreground.to_color(),
        c.secondary.to_color(),
        c.secondary_foreground.to_color(),
        c.muted.to_color(),
        c.muted_foreground.to_color(),
        c.accent.to_color(),
        c.accent_foreground.to_color(),
        c.destructive.to_color(),
        c.destructive_foreground.to_color(),
        c.border.to_color(),
        c.input.to_color(),
        c.ring.to_color(),
        c.sidebar_background.to_color(),
        c.sidebar_foreground.to_color(),
    ];
    debug_assert_eq!(colors.len(), ColorRole::COUNT);

    let name: &'static str = Box::leak(toml_theme.name.into_boxed_str());
    Ok(Theme::new(name, colors))
}
