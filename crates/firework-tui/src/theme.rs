use firework_core::{Rgb, UiConfig};
use ratatui::style::Color;

/// Convert a core colour into a terminal colour
#[inline]
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Canvas background
    pub background: Color,

    // Status bar
    pub bar_bg: Color,
    pub bar_fg: Color,
    pub hint: Color,

    // Semantic colors
    pub running: Color,
    pub paused: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox dark status bar over a black canvas
        Self {
            background: Color::Rgb(0x00, 0x00, 0x00),
            bar_bg: Color::Rgb(0x45, 0x40, 0x3d),
            bar_fg: Color::Rgb(0xd4, 0xbe, 0x98),
            hint: Color::Rgb(0xa8, 0x99, 0x84),
            running: Color::Rgb(0xa9, 0xb6, 0x65),
            paused: Color::Rgb(0xe7, 0x8a, 0x4e),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}

impl Theme {
    /// Default theme with the configured canvas background
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            background: to_color(ui.background),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_from_config() {
        let ui = UiConfig {
            background: Rgb(0x10, 0x20, 0x30),
            ..Default::default()
        };
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.background, Color::Rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.bar_bg, Theme::default().bar_bg);
    }
}
