//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// Theme and palette manager for the MaliTrack business suite.
#[derive(Debug, Parser)]
#[command(name = "malitrack", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List catalog themes, marking the active one
    List,
    /// Print every effective color
    Show {
        /// Print hex values instead of HSL
        #[arg(long)]
        hex: bool,
    },
    /// Set the active theme
    Use {
        /// Theme name, as shown by `list`
        name: String,
    },
    /// Advance to the next theme, wrapping at the end of the catalog
    Cycle,
    /// Override one color role
    Set {
        /// Role name, e.g. `primary` or `--primary`
        role: String,
        /// Color as `#RRGGBB` or `'H S% L%'`
        color: String,
    },
    /// Replace the overrides with a random palette
    Randomize,
    /// Clear all overrides
    Reset,
    /// Manage saved palettes
    Palette {
        #[command(subcommand)]
        command: PaletteCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum PaletteCommand {
    /// Save the current overrides under a name
    Save { name: String },
    /// Replace the overrides with a saved palette
    Apply { name: String },
    /// Delete a saved palette
    Delete { name: String },
    /// List saved palettes
    List,
}
