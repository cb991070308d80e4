//! Semantic color roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A semantic slot a theme assigns a color to.
///
/// The set is closed: every theme defines a color for every role, and the
/// rest of the system relies on that totality. Roles serialize as their
/// style-variable spelling (`"--primary"`), which is the persisted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorRole {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
    SidebarBackground,
    SidebarForeground,
}

impl ColorRole {
    /// All roles, in the canonical stylesheet order.
    pub const ALL: [ColorRole; 21] = [
        ColorRole::Background,
        ColorRole::Foreground,
        ColorRole::Card,
        ColorRole::CardForeground,
        ColorRole::Popover,
        ColorRole::PopoverForeground,
        ColorRole::Primary,
        ColorRole::PrimaryForeground,
        ColorRole::Secondary,
        ColorRole::SecondaryForeground,
        ColorRole::Muted,
        ColorRole::MutedForeground,
        ColorRole::Accent,
        ColorRole::AccentForeground,
        ColorRole::Destructive,
        ColorRole::DestructiveForeground,
        ColorRole::Border,
        ColorRole::Input,
        ColorRole::Ring,
        ColorRole::SidebarBackground,
        ColorRole::SidebarForeground,
    ];

    /// Number of roles.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in [`ColorRole::ALL`]; themes store colors by this index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The style-variable spelling, e.g. `"--primary"`.
    pub fn css_name(self) -> &'static str {
        match self {
            ColorRole::Background => "--background",
            ColorRole::Foreground => "--foreground",
            ColorRole::Card => "--card",
            ColorRole::CardForeground => "--card-foreground",
            ColorRole::Popover => "--popover",
            ColorRole::PopoverForeground => "--popover-foreground",
            ColorRole::Primary => "--primary",
            ColorRole::PrimaryForeground => "--primary-foreground",
            ColorRole::Secondary => "--secondary",
            ColorRole::SecondaryForeground => "--secondary-foreground",
            ColorRole::Muted => "--muted",
            ColorRole::MutedForeground => "--muted-foreground",
            ColorRole::Accent => "--accent",
            ColorRole::AccentForeground => "--accent-foreground",
            ColorRole::Destructive => "--destructive",
            ColorRole::DestructiveForeground => "--destructive-foreground",
            ColorRole::Border => "--border",
            ColorRole::Input => "--input",
            ColorRole::Ring => "--ring",
            ColorRole::SidebarBackground => "--sidebar-background",
            ColorRole::SidebarForeground => "--sidebar-foreground",
        }
    }

    /// Inverse of [`css_name`](Self::css_name).
    pub fn from_css_name(name: &str) -> Option<ColorRole> {
        Self::ALL.iter().copied().find(|r| r.css_name() == name)
    }

    /// The `-foreground` companion of a base role, if it has one.
    ///
    /// Foreground roles themselves, plus border, input, and ring, have no
    /// companion.
    pub fn paired_foreground(self) -> Option<ColorRole> {
        match self {
            ColorRole::Background => Some(ColorRole::Foreground),
            ColorRole::Card => Some(ColorRole::CardForeground),
            ColorRole::Popover => Some(ColorRole::PopoverForeground),
            ColorRole::Primary => Some(ColorRole::PrimaryForeground),
            ColorRole::Secondary => Some(ColorRole::SecondaryForeground),
            ColorRole::Muted => Some(ColorRole::MutedForeground),
            ColorRole::Accent => Some(ColorRole::AccentForeground),
            ColorRole::Destructive => Some(ColorRole::DestructiveForeground),
            ColorRole::SidebarBackground => Some(ColorRole::SidebarForeground),
            _ => None,
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

impl FromStr for ColorRole {
    type Err = String;

    /// Accepts both the style-variable spelling and the bare name
    /// (`"--primary"` and `"primary"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bare = s.strip_prefix("--").unwrap_or(s);
        Self::ALL
            .iter()
            .copied()
            .find(|r| &r.css_name()[2..] == bare)
            .ok_or_else(|| format!("unknown color role '{}'", s))
    }
}

impl Serialize for ColorRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css_name())
    }
}

impl<'de> Deserialize<'de> for ColorRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_css_name(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown color role '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_role() {
        assert_eq!(ColorRole::COUNT, 21);
        for (i, role) in ColorRole::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn test_css_name_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(ColorRole::from_css_name(role.css_name()), Some(role));
        }
        assert_eq!(ColorRole::from_css_name("--nope"), None);
    }

    #[test]
    fn test_from_str_accepts_both_spellings() {
        assert_eq!("primary".parse::<ColorRole>().unwrap(), ColorRole::Primary);
        assert_eq!("--primary".parse::<ColorRole>().unwrap(), ColorRole::Primary);
        assert_eq!(
            "sidebar-background".parse::<ColorRole>().unwrap(),
            ColorRole::SidebarBackground
        );
        assert!("bogus".parse::<ColorRole>().is_err());
    }

    #[test]
    fn test_paired_foreground() {
        assert_eq!(
            ColorRole::Background.paired_foreground(),
            Some(ColorRole::Foreground)
        );
        assert_eq!(
            ColorRole::Destructive.paired_foreground(),
            Some(ColorRole::DestructiveForeground)
        );
        assert_eq!(ColorRole::Border.paired_foreground(), None);
        assert_eq!(ColorRole::Ring.paired_foreground(), None);
        assert_eq!(ColorRole::Foreground.paired_foreground(), None);
    }
}
