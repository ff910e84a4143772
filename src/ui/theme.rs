use std::fs;
use std::path::Path;

use log::warn;
use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub text_muted: String,
    pub accent: String,
    pub accent_dim: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub card_bg: String,
    pub card_fg: String,
    pub option_bg: String,
    pub option_fg: String,
    pub option_selected_bg: String,
    pub option_disabled_bg: String,
    pub success: String,
    pub success_bg: String,
    pub warning: String,
    pub warning_bg: String,
}

impl Theme {
    /// User themes in `<config_dir>/themes` shadow the bundled ones.
    pub fn load(name: &str, config_dir: &Path) -> Option<Self> {
        let user_theme_path = config_dir.join("themes").join(format!("{name}.toml"));
        if let Ok(content) = fs::read_to_string(&user_theme_path) {
            match toml::from_str::<Theme>(&content) {
                Ok(theme) => return Some(theme),
                Err(err) => warn!("ignoring {}: {err}", user_theme_path.display()),
            }
        }

        let file = ThemeAssets::get(&format!("{name}.toml"))?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e2a24".to_string(),
            fg: "#e8efe9".to_string(),
            text_muted: "#7f958a".to_string(),
            accent: "#f6d776".to_string(),
            accent_dim: "#3b4a42".to_string(),
            border: "#4d6157".to_string(),
            border_focused: "#f6d776".to_string(),
            header_bg: "#26352d".to_string(),
            header_fg: "#e8efe9".to_string(),
            card_bg: "#6d4c9f".to_string(),
            card_fg: "#ffffff".to_string(),
            option_bg: "#3f6fb5".to_string(),
            option_fg: "#ffffff".to_string(),
            option_selected_bg: "#8a63d2".to_string(),
            option_disabled_bg: "#34403a".to_string(),
            success: "#9ee2a0".to_string(),
            success_bg: "#23422c".to_string(),
            warning: "#f5a962".to_string(),
            warning_bg: "#4a3322".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn text_muted(&self) -> Color { Self::parse_color(&self.text_muted) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn accent_dim(&self) -> Color { Self::parse_color(&self.accent_dim) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn card_bg(&self) -> Color { Self::parse_color(&self.card_bg) }
    pub fn card_fg(&self) -> Color { Self::parse_color(&self.card_fg) }
    pub fn option_bg(&self) -> Color { Self::parse_color(&self.option_bg) }
    pub fn option_fg(&self) -> Color { Self::parse_color(&self.option_fg) }
    pub fn option_selected_bg(&self) -> Color { Self::parse_color(&self.option_selected_bg) }
    pub fn option_disabled_bg(&self) -> Color { Self::parse_color(&self.option_disabled_bg) }
    pub fn success(&self) -> Color { Self::parse_color(&self.success) }
    pub fn success_bg(&self) -> Color { Self::parse_color(&self.success_bg) }
    pub fn warning(&self) -> Color { Self::parse_color(&self.warning) }
    pub fn warning_bg(&self) -> Color { Self::parse_color(&self.warning_bg) }
}
