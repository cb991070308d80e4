//! Theme catalog for malitrack.
//!
//! Provides the semantic color roles, the theme type, and the built-in
//! catalog of complete themes embedded at compile time.

mod colors;
mod loader;
mod role;

pub use colors::Theme;
pub use loader::load_theme_from_str;
pub use role::ColorRole;

use std::sync::OnceLock;

use malitrack_color::HslColor;

// Embed theme files at compile time
const THEME_DEFAULT_EARTHY_TOML: &str = include_str!("../themes/default-earthy.toml");
const THEME_PARTY_VIBE_TOML: &str = include_str!("../themes/party-vibe.toml");
const THEME_CREATIVE_UI_TOML: &str = include_str!("../themes/creative-ui.toml");
const THEME_STRONG_GRINDER_TOML: &str = include_str!("../themes/strong-grinder.toml");
const THEME_LUXURY_TOML: &str = include_str!("../themes/luxury.toml");
const THEME_CONQUEROR_TOML: &str = include_str!("../themes/conqueror.toml");
const THEME_DARK_ARTISTIC_TOML: &str = include_str!("../themes/dark-artistic.toml");

static CATALOG: OnceLock<Vec<Theme>> = OnceLock::new();

/// Hardcoded fallback theme in case of parse errors.
fn hardcoded_fallback_theme(name: &'static str) -> Theme {
    let dark = HslColor::new(0.0, 0.0, 3.9);
    let light = HslColor::new(0.0, 0.0, 98.0);
    let mut table = [HslColor::new(0.0, 0.0, 100.0); ColorRole::COUNT];
    for role in ColorRole::ALL {
        table[role.index()] = match role {
            ColorRole::Background | ColorRole::Card | ColorRole::Popover => {
                HslColor::new(0.0, 0.0, 100.0)
            }
            ColorRole::Primary | ColorRole::Ring => HslColor::new(210.0, 100.0, 50.0),
            ColorRole::PrimaryForeground => light,
            ColorRole::Secondary | ColorRole::Accent | ColorRole::Muted => {
                HslColor::new(0.0, 0.0, 94.0)
            }
            ColorRole::Destructive => HslColor::new(0.0, 84.2, 60.2),
            ColorRole::DestructiveForeground => light,
            ColorRole::Border | ColorRole::Input => HslColor::new(0.0, 0.0, 88.0),
            ColorRole::MutedForeground => HslColor::new(0.0, 0.0, 45.1),
            ColorRole::SidebarBackground => HslColor::new(0.0, 0.0, 97.0),
            _ => dark,
        };
    }
    Theme::new(name, table)
}

/// Load theme from embedded TOML content.
fn load_builtin(content: &str, name: &'static str) -> Theme {
    match load_theme_from_str(content) {
        Ok(theme) => theme,
        Err(e) => {
            eprintln!(
                "Failed to parse built-in theme '{}': {}. Using fallback theme.",
                name, e
            );
            hardcoded_fallback_theme(name)
        }
    }
}

/// The built-in themes, in their fixed display order.
///
/// The order is significant: cycling advances through it, so it must be
/// stable across runs.
pub fn catalog() -> &'static [Theme] {
    CATALOG.get_or_init(|| {
        vec![
            load_builtin(THEME_DEFAULT_EARTHY_TOML, "Default Earthy"),
            load_builtin(THEME_PARTY_VIBE_TOML, "Party Vibe"),
            load_builtin(THEME_CREATIVE_UI_TOML, "Creative UI"),
            load_builtin(THEME_STRONG_GRINDER_TOML, "Strong Grinder"),
            load_builtin(THEME_LUXURY_TOML, "Luxury"),
            load_builtin(THEME_CONQUEROR_TOML, "Conqueror"),
            load_builtin(THEME_DARK_ARTISTIC_TOML, "Dark Artistic"),
        ]
    })
}

/// Names of all built-in themes, in catalog order.
pub fn theme_names() -> Vec<&'static str> {
    catalog().iter().map(|t| t.name).collect()
}

/// Find a theme by exact name.
///
/// Returns the catalog index along with the theme so callers that track
/// the active position can use the hit directly. A miss is `None`; the
/// caller decides whether that is an error.
pub fn find(name: &str) -> Option<(usize, &'static Theme)> {
    catalog().iter().enumerate().find(|(_, t)| t.name == name)
}
