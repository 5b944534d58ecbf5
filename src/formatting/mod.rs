//! Colour handling for terminal output

use crate::fitness::Rating;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Detect based on terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Honour `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }
        if env::var("CLICOLOR").is_ok_and(|val| val == "0") {
            config.color = ColorMode::Never;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|val| val == "1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// Resolve the mode once and install it as the global override of
    /// `colored`
    pub fn apply(&self) -> bool {
        let enabled = self.color.should_use_color();
        colored::control::set_override(enabled);
        enabled
    }
}

/// Rating letter coloured by severity
pub fn paint_rating(rating: Rating) -> ColoredString {
    let letter = rating.to_string();
    match rating {
        Rating::A | Rating::B => letter.green().bold(),
        Rating::C | Rating::D => letter.yellow().bold(),
        Rating::E | Rating::F => letter.red().bold(),
    }
}

/// Percentage coloured by the rating it maps to
pub fn paint_percentage(percentage: f64) -> ColoredString {
    let text = format!("{percentage:.2}%");
    match Rating::from_percentage(percentage) {
        Rating::A | Rating::B => text.green(),
        Rating::C | Rating::D => text.yellow(),
        Rating::E | Rating::F => text.red(),
    }
}

fn detect_color_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}
