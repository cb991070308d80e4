//! Theme color definitions.

use malitrack_color::HslColor;

use crate::ColorRole;

/// A named theme: a display name plus a color for every [`ColorRole`].
///
/// The mapping is total by construction; [`Theme::color`] cannot miss.
/// Themes are created when the catalog loads and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Display name, unique within the catalog.
    pub name: &'static str,
    colors: [HslColor; ColorRole::COUNT],
}

impl Theme {
    /// Build a theme from a full role-indexed color table.
    pub(crate) fn new(name: &'static str, colors: [HslColor; ColorRole::COUNT]) -> Self {
        Self { name, colors }
    }

    /// The color assigned to a role. Total function.
    pub fn color(&self, role: ColorRole) -> HslColor {
        self.colors[role.index()]
    }
}
