//! EliteAuto Showroom - Terminal-based luxury automotive showroom
//!
//! This application renders the EliteAuto showroom as a scrollable terminal
//! page: the vehicle collections, the story behind the dealership, and a
//! contact form for private viewings.

// Module declarations
mod config;
mod constants;
mod content;
mod inquiry;
mod tui;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use constants::{APP_BINARY_NAME, APP_NAME};
use inquiry::SimulatedSender;

/// Theme choice given on the command line, overriding the saved preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Detect the OS theme
    Auto,
    /// Start in the dark theme
    Dark,
    /// Start in the light theme
    Light,
}

impl ThemeArg {
    fn preference(self) -> config::ThemePreference {
        match self {
            Self::Auto => config::ThemePreference::Auto,
            Self::Dark => config::ThemePreference::Dark,
            Self::Light => config::ThemePreference::Light,
        }
    }
}

/// EliteAuto Showroom - Terminal-based luxury automotive showroom
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Theme to start in (overrides the saved preference)
    #[arg(long, value_enum, value_name = "THEME")]
    theme: Option<ThemeArg>,

    /// Write a default configuration file and exit
    #[arg(short, long)]
    init: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init {
        let config = config::Config::new();
        config.save()?;
        println!("{} configuration written to:", APP_NAME);
        println!("  {}", config::Config::config_path()?.display());
        println!();
        println!("Start the showroom with:");
        println!("  {}", APP_BINARY_NAME);
        return Ok(());
    }

    // A missing or unreadable config just means defaults.
    let config = config::Config::load().unwrap_or_default();

    let preference = cli
        .theme
        .map_or(config.ui.theme_mode, ThemeArg::preference);
    let theme_mode = preference.resolve();

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;
    let sender = Arc::new(SimulatedSender::default());
    let mut app_state = tui::AppState::new(config, theme_mode, sender);

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
