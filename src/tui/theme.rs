//! Color theme for the TUI
//!
//! Colors can be configured via a `tui_colors.toml` file in the current working directory.
//! If the file doesn't exist or is invalid, default colors are used.
//!
//! Example `tui_colors.toml`:
//! ```toml
//! disk = 200, 120, 60       # Resting disks
//! floating = 240, 200, 80   # The disk being moved
//! pole = 150, 150, 150      # Poles and base
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ratatui::style::{Color, Modifier, Style};

use crate::tower::{BASE, BASE_WITH_POLE, DISK, POLE};

/// Color theme for the towers TUI
pub struct Theme {
    pub disk: Color,
    pub floating: Color,
    pub pole: Color,
    pub border: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Try to load from config file, fall back to defaults
        Self::from_config_file().unwrap_or(Self {
            disk: Color::Rgb(200, 120, 60),
            floating: Color::Rgb(240, 200, 80),
            pole: Color::Rgb(150, 150, 150),
            border: Color::Gray,
            text: Color::White,
        })
    }
}

impl Theme {
    /// Load theme from `tui_colors.toml` file in the current working directory.
    /// Returns None if the file doesn't exist or can't be parsed.
    fn from_config_file() -> Option<Self> {
        let config_path = Path::new("tui_colors.toml");
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(config_path).ok()?;
        Self::from_config(&contents)
    }

    fn from_config(contents: &str) -> Option<Self> {
        let mut colors = HashMap::new();

        // Parse simple key = value format
        for line in contents.lines() {
            // Strip trailing comments
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            // Parse "key = r, g, b" format
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                // Parse RGB values: "r, g, b" or "[r, g, b]"
                let rgb_str = value.trim_start_matches('[').trim_end_matches(']');
                let rgb_parts: Vec<&str> = rgb_str.split(',').map(|s| s.trim()).collect();
                if rgb_parts.len() == 3 {
                    if let (Ok(r), Ok(g), Ok(b)) = (
                        rgb_parts[0].parse::<u8>(),
                        rgb_parts[1].parse::<u8>(),
                        rgb_parts[2].parse::<u8>(),
                    ) {
                        colors.insert(key.to_string(), Color::Rgb(r, g, b));
                    }
                }
            }
        }

        // All three colors must be present
        Some(Self {
            disk: *colors.get("disk")?,
            floating: *colors.get("floating")?,
            pole: *colors.get("pole")?,
            border: Color::Gray, // Not configurable for now
            text: Color::White,  // Not configurable for now
        })
    }

    /// Style for one character of a tower scene.
    pub fn cell_style(&self, ch: char, floating: bool) -> Style {
        match ch {
            DISK if floating => Style::default()
                .fg(self.floating)
                .add_modifier(Modifier::BOLD),
            DISK => Style::default().fg(self.disk),
            POLE | BASE | BASE_WITH_POLE => Style::default().fg(self.pole),
            _ => self.text_style(),
        }
    }

    /// Get style for text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get style for borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}
