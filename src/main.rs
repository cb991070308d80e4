mod cli;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use malitrack_color::{hex_to_hsl, HslColor};
use malitrack_config::Config;
use malitrack_engine::{ThemeEngine, VariableMap};
use malitrack_logger::LogLevel;
use malitrack_store::FileStore;
use malitrack_theme::{catalog, theme_names, ColorRole};

use cli::{Cli, Command, PaletteCommand};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config first to get logging and default-theme settings
    let config = Config::load().unwrap_or_default();

    let log_path = match &config.logging.file_path {
        Some(path) => PathBuf::from(path),
        None => malitrack_config::get_data_dir()?.join("malitrack.log"),
    };
    let min_level = config
        .logging
        .min_level
        .parse()
        .unwrap_or(LogLevel::Info);
    malitrack_logger::init(log_path, min_level);

    let store = FileStore::open(malitrack_config::get_data_dir()?.join("state.json"));

    // The engine pushes effective colors here on every change; `show`
    // reads them back out.
    let variables = VariableMap::new();
    let mut engine = ThemeEngine::new(
        Box::new(store),
        Box::new(variables.clone()),
        &config.general.theme,
    );

    match cli.command {
        Command::List => {
            let active = engine.active_theme().name;
            for theme in catalog() {
                let marker = if theme.name == active { "*" } else { " " };
                let swatches: String = [
                    ColorRole::Background,
                    ColorRole::Primary,
                    ColorRole::Secondary,
                    ColorRole::Accent,
                ]
                .iter()
                .map(|&role| render::swatch(theme.color(role)))
                .collect();
                println!("{} {} {}", marker, swatches, theme.name);
            }
        }
        Command::Show { hex } => {
            println!("Theme: {}", engine.active_theme().name);
            for role in ColorRole::ALL {
                let color = engine.effective_color(role);
                let shown = if hex {
                    color.to_hex()
                } else {
                    variables.get(role.css_name()).unwrap_or_default()
                };
                let origin = if engine.overrides().get(role).is_some() {
                    "  (override)"
                } else {
                    ""
                };
                println!(
                    "{} {:<24} {}{}",
                    render::swatch(color),
                    role.css_name(),
                    shown,
                    origin
                );
            }
        }
        Command::Use { name } => {
            if engine.set_active_theme(&name)? {
                malitrack_logger::info(format!("Active theme set to '{}'", name));
                println!("Active theme: {}", name);
            } else {
                eprintln!("Unknown theme '{}'. Available themes:", name);
                for known in theme_names() {
                    eprintln!("  {}", known);
                }
                std::process::exit(1);
            }
        }
        Command::Cycle => {
            let theme = engine.cycle_theme()?;
            println!("Active theme: {}", theme.name);
        }
        Command::Set { role, color } => {
            let role: ColorRole = role.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            let value = parse_color(&color)?;
            engine.update_override(role, value)?;
            println!("{} {} = {}", render::swatch(value), role.css_name(), value);
        }
        Command::Randomize => {
            engine.randomize()?;
            malitrack_logger::info("Generated a random palette");
            let preview: String = [
                ColorRole::Background,
                ColorRole::Primary,
                ColorRole::Secondary,
                ColorRole::Accent,
            ]
            .iter()
            .map(|&role| render::swatch(engine.effective_color(role)))
            .collect();
            println!("{} randomized (destructive colors kept)", preview);
        }
        Command::Reset => {
            engine.reset_overrides()?;
            println!("Overrides cleared.");
        }
        Command::Palette { command } => run_palette_command(&mut engine, command)?,
    }

    Ok(())
}

fn run_palette_command(engine: &mut ThemeEngine, command: PaletteCommand) -> Result<()> {
    match command {
        PaletteCommand::Save { name } => {
            if engine.save_palette(&name)? {
                println!("Saved palette '{}'.", name.trim());
            } else {
                eprintln!("Palette name must not be empty.");
                std::process::exit(1);
            }
        }
        PaletteCommand::Apply { name } => {
            if engine.apply_palette(&name)? {
                println!("Applied palette '{}'.", name);
            } else {
                eprintln!("No saved palette named '{}'.", name);
                std::process::exit(1);
            }
        }
        PaletteCommand::Delete { name } => {
            if engine.delete_palette(&name)? {
                println!("Deleted palette '{}'.", name);
            } else {
                eprintln!("No saved palette named '{}'.", name);
                std::process::exit(1);
            }
        }
        PaletteCommand::List => {
            if engine.saved_palettes().is_empty() {
                println!("No saved palettes.");
            }
            for palette in engine.saved_palettes() {
                println!("{}  ({} colors)", palette.name, palette.colors.len());
            }
        }
    }
    Ok(())
}

/// Accepts `#RRGGBB` (leading `#` required here) or `H S% L%`.
fn parse_color(input: &str) -> Result<HslColor> {
    let input = input.trim();
    if input.starts_with('#') {
        Ok(hex_to_hsl(input)?)
    } else {
        Ok(input.parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_hex() {
        let color = parse_color("#ff0000").unwrap();
        assert_eq!(color, HslColor::new(0.0, 100.0, 50.0));
    }

    #[test]
    fn test_parse_color_hsl() {
        let color = parse_color("283 89% 37%").unwrap();
        assert_eq!(color, HslColor::new(283.0, 89.0, 37.0));
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert!(parse_color("ff0000").is_err());
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("blue").is_err());
    }
}
