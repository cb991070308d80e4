//! The theme engine: active theme, overrides, and saved palettes.

use anyhow::Result;
use rand::Rng;

use malitrack_color::HslColor;
use malitrack_store::KeyValueStore;
use malitrack_theme::{catalog, ColorRole, Theme};

use crate::randomize::random_override_set;
use crate::{OverrideSet, SavedPalette, StyleTarget};

/// Storage key for the active theme name.
pub const KEY_ACTIVE_THEME: &str = "active-theme";
/// Storage key for the override set.
pub const KEY_OVERRIDES: &str = "color-overrides";
/// Storage key for the saved-palette collection.
pub const KEY_PALETTES: &str = "saved-palettes";

/// Owns the appearance state: the active catalog theme, the override
/// set layered on it, and the saved-palette collection.
///
/// Constructed explicitly with its store and style target and passed by
/// handle; there is no ambient instance. Every mutation persists the
/// changed key and re-pushes the full set of effective colors to the
/// target before returning, so callers never observe a half-applied
/// state.
///
/// Operations that look something up by name return `Ok(false)` on a
/// miss instead of silently doing nothing; the `Result` layer carries
/// only store-write failures.
pub struct ThemeEngine {
    active_index: usize,
    overrides: OverrideSet,
    palettes: Vec<SavedPalette>,
    store: Box<dyn KeyValueStore>,
    target: Box<dyn StyleTarget>,
}

impl ThemeEngine {
    /// Restore state from the store, best-effort.
    ///
    /// `default_theme` is used when the store holds no active theme
    /// (first run). An unknown theme name or corrupt JSON falls back to
    /// defaults with a logged warning; restore never fails.
    pub fn new(
        store: Box<dyn KeyValueStore>,
        target: Box<dyn StyleTarget>,
        default_theme: &str,
    ) -> Self {
        let stored_name = store.get(KEY_ACTIVE_THEME);
        let name = stored_name.as_deref().unwrap_or(default_theme);
        let active_index = match malitrack_theme::find(name) {
            Some((index, _)) => index,
            None => {
                malitrack_logger::warn(format!(
                    "Unknown theme '{}', falling back to '{}'",
                    name,
                    catalog()[0].name
                ));
                0
            }
        };

        let overrides = restore_json(&*store, KEY_OVERRIDES).unwrap_or_default();
        let palettes = restore_json(&*store, KEY_PALETTES).unwrap_or_default();

        let mut engine = Self {
            active_index,
            overrides,
            palettes,
            store,
            target,
        };
        engine.push_effective_colors();
        engine
    }

    /// The active theme.
    pub fn active_theme(&self) -> &'static Theme {
        &catalog()[self.active_index]
    }

    /// The current override set.
    pub fn overrides(&self) -> &OverrideSet {
        &self.overrides
    }

    /// Saved palettes, oldest first.
    pub fn saved_palettes(&self) -> &[SavedPalette] {
        &self.palettes
    }

    /// The color a role renders with: its override if present, else the
    /// active theme's value. Total; every role resolves.
    pub fn effective_color(&self, role: ColorRole) -> HslColor {
        self.overrides
            .get(role)
            .unwrap_or_else(|| self.active_theme().color(role))
    }

    /// Switch to a catalog theme by name.
    ///
    /// Returns `Ok(false)` and changes nothing when the name is not in
    /// the catalog; the caller decides how loud to be about the miss.
    pub fn set_active_theme(&mut self, name: &str) -> Result<bool> {
        let Some((index, theme)) = malitrack_theme::find(name) else {
            return Ok(false);
        };
        self.active_index = index;
        self.store.set(KEY_ACTIVE_THEME, theme.name)?;
        self.push_effective_colors();
        Ok(true)
    }

    /// Advance to the next catalog theme, wrapping at the end.
    pub fn cycle_theme(&mut self) -> Result<&'static Theme> {
        self.active_index = (self.active_index + 1) % catalog().len();
        let theme = self.active_theme();
        self.store.set(KEY_ACTIVE_THEME, theme.name)?;
        self.push_effective_colors();
        Ok(theme)
    }

    /// Override a single role.
    pub fn update_override(&mut self, role: ColorRole, color: HslColor) -> Result<()> {
        self.overrides.set(role, color);
        self.persist_overrides()?;
        self.push_effective_colors();
        Ok(())
    }

    /// Drop every override, returning to the plain active theme.
    pub fn reset_overrides(&mut self) -> Result<()> {
        self.overrides.clear();
        self.persist_overrides()?;
        self.push_effective_colors();
        Ok(())
    }

    /// Replace the overrides with a generated palette.
    pub fn randomize(&mut self) -> Result<()> {
        self.randomize_with(&mut rand::thread_rng())
    }

    /// Replace the overrides with a palette generated from `rng`.
    ///
    /// The destructive pair keeps its current effective values;
    /// everything else is sampled or contrast-derived (see the
    /// generation order in `randomize`). The new set replaces the old
    /// one wholesale.
    pub fn randomize_with<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let destructive = self.effective_color(ColorRole::Destructive);
        let destructive_fg = self.effective_color(ColorRole::DestructiveForeground);
        self.overrides = random_override_set(rng, destructive, destructive_fg);
        self.persist_overrides()?;
        self.push_effective_colors();
        Ok(())
    }

    /// Snapshot the current overrides under `name` (trimmed).
    ///
    /// Empty and whitespace-only names are rejected with `Ok(false)`
    /// and nothing is stored. An existing palette with the same name is
    /// replaced.
    pub fn save_palette(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(false);
        }

        let palette = SavedPalette {
            name: name.to_string(),
            colors: self.overrides.clone(),
        };
        match self.palettes.iter_mut().find(|p| p.name == name) {
            Some(existing) => *existing = palette,
            None => self.palettes.push(palette),
        }
        self.persist_palettes()?;
        Ok(true)
    }

    /// Replace the overrides with a saved palette's colors.
    ///
    /// A full replace, not a merge. `Ok(false)` when no palette has
    /// that name.
    pub fn apply_palette(&mut self, name: &str) -> Result<bool> {
        let Some(index) = self.palettes.iter().position(|p| p.name == name) else {
            return Ok(false);
        };
        self.overrides = self.palettes[index].colors.clone();
        self.persist_overrides()?;
        self.push_effective_colors();
        Ok(true)
    }

    /// Remove a saved palette by exact name. `Ok(false)` when absent.
    pub fn delete_palette(&mut self, name: &str) -> Result<bool> {
        let Some(index) = self.palettes.iter().position(|p| p.name == name) else {
            return Ok(false);
        };
        self.palettes.remove(index);
        self.persist_palettes()?;
        Ok(true)
    }

    fn persist_overrides(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.overrides)?;
        self.store.set(KEY_OVERRIDES, &json)
    }

    fn persist_palettes(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.palettes)?;
        self.store.set(KEY_PALETTES, &json)
    }

    /// Push every effective color into the style target.
    fn push_effective_colors(&mut self) {
        for role in ColorRole::ALL {
            let value = self.effective_color(role).to_string();
            self.target.set_variable(role.css_name(), &value);
        }
    }
}

/// Parse a stored JSON value, treating corruption as absence.
fn restore_json<T: serde::de::DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Option<T> {
    let json = store.get(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            malitrack_logger::warn(format!(
                "Stored '{}' is not valid ({}), starting empty",
                key, e
            ));
            None
        }
    }
}
