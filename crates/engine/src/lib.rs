//! Theme engine for malitrack.
//!
//! Owns the mutable appearance state: which catalog theme is active,
//! the override set layered on it, and the saved-palette collection.
//! State is restored best-effort from a `KeyValueStore` at construction
//! and persisted after every change; effective colors are pushed to a
//! [`StyleTarget`] so the rendering side always matches.

mod engine;
mod overrides;
mod randomize;
mod target;

pub use engine::{ThemeEngine, KEY_ACTIVE_THEME, KEY_OVERRIDES, KEY_PALETTES};
pub use overrides::{OverrideSet, SavedPalette};
pub use target::{NullTarget, StyleTarget, VariableMap};
