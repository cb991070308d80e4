//! Override sets and saved palettes.

use std::collections::BTreeMap;

use malitrack_color::HslColor;
use malitrack_theme::ColorRole;
use serde::{Deserialize, Serialize};

/// User customizations layered on the active theme.
///
/// A partial role-to-color map; roles without an entry inherit from the
/// active theme. Serializes as a JSON object of style-variable keys to
/// `"H S% L%"` strings (`{"--primary": "283 89% 37%"}`), which is the
/// persisted wire form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideSet {
    colors: BTreeMap<ColorRole, HslColor>,
}

impl OverrideSet {
    /// An empty set: every role inherits from the theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// The override for `role`, if one is set.
    pub fn get(&self, role: ColorRole) -> Option<HslColor> {
        self.colors.get(&role).copied()
    }

    /// Insert or replace the override for `role`.
    pub fn set(&mut self, role: ColorRole, color: HslColor) {
        self.colors.insert(role, color);
    }

    /// Remove every override.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Overridden roles and their colors, in role order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, HslColor)> + '_ {
        self.colors.iter().map(|(role, color)| (*role, *color))
    }
}

/// A named snapshot of an override set.
///
/// Saved palettes live in a persisted collection independent of the
/// active theme; applying one replaces the current overrides wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub name: String,
    pub colors: OverrideSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let set = OverrideSet::new();
        assert!(set.is_empty());
        assert_eq!(set.get(ColorRole::Primary), None);
    }

    #[test]
    fn test_set_replaces() {
        let mut set = OverrideSet::new();
        set.set(ColorRole::Primary, HslColor::new(10.0, 50.0, 50.0));
        set.set(ColorRole::Primary, HslColor::new(20.0, 50.0, 50.0));
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(ColorRole::Primary),
            Some(HslColor::new(20.0, 50.0, 50.0))
        );
    }

    #[test]
    fn test_serializes_as_css_name_object() {
        let mut set = OverrideSet::new();
        set.set(ColorRole::Primary, HslColor::new(283.0, 89.0, 37.0));
        set.set(ColorRole::Background, HslColor::new(150.0, 11.0, 95.0));

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"--background":"150 11% 95%","--primary":"283 89% 37%"}"#
        );

        let back: OverrideSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_unknown_role_key_fails_to_parse() {
        let result: Result<OverrideSet, _> =
            serde_json::from_str(r#"{"--nonsense": "0 0% 0%"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_palette_round_trip() {
        let mut colors = OverrideSet::new();
        colors.set(ColorRole::Accent, HslColor::new(35.0, 26.0, 61.0));
        let palette = SavedPalette {
            name: "Warm".to_string(),
            colors,
        };

        let json = serde_json::to_string(&vec![palette.clone()]).unwrap();
        let back: Vec<SavedPalette> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![palette]);
    }
}
