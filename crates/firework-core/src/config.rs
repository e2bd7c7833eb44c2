use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::color::Rgb;
use crate::easing::EasingSpec;
use crate::error::Error;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub firework: FireworkSettings,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Settings the animation engine consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireworkSettings {
    /// Lifetime of a burst and its particles, in ticks
    #[serde(default = "default_duration")]
    pub duration: u32,
    /// Particles per burst
    #[serde(default = "default_fire_piece_number")]
    pub fire_piece_number: usize,
    /// Initial particle radius
    #[serde(default = "default_fire_piece_size")]
    pub fire_piece_size: f64,
    /// Maximum travel distance from the burst origin
    #[serde(default = "default_range")]
    pub range: f64,
    /// Preset name or explicit control points
    #[serde(default)]
    pub easing: EasingSpec,
    /// Particle palette, one colour picked per particle
    #[serde(default = "default_colors")]
    pub colors: Vec<Rgb>,
}

impl Default for FireworkSettings {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            fire_piece_number: default_fire_piece_number(),
            fire_piece_size: default_fire_piece_size(),
            range: default_range(),
            easing: EasingSpec::default(),
            colors: default_colors(),
        }
    }
}

impl FireworkSettings {
    /// Check the numeric settings; the easing is checked when it is resolved
    pub fn validate(&self) -> crate::Result<()> {
        if self.duration == 0 {
            return Err(Error::InvalidSetting("duration must be at least 1 tick".into()));
        }
        if !(self.fire_piece_size.is_finite() && self.fire_piece_size >= 0.0) {
            return Err(Error::InvalidSetting(format!(
                "fire_piece_size must be a non-negative number, got {}",
                self.fire_piece_size
            )));
        }
        if !(self.range.is_finite() && self.range >= 0.0) {
            return Err(Error::InvalidSetting(format!(
                "range must be a non-negative number, got {}",
                self.range
            )));
        }
        if self.colors.is_empty() {
            return Err(Error::InvalidSetting("colors must contain at least one colour".into()));
        }
        Ok(())
    }
}

/// Partial settings layered over a complete [`FireworkSettings`]
///
/// Only the fields that are `Some` replace the base values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverride {
    pub duration: Option<u32>,
    pub fire_piece_number: Option<usize>,
    pub fire_piece_size: Option<f64>,
    pub range: Option<f64>,
    pub easing: Option<EasingSpec>,
    pub colors: Option<Vec<Rgb>>,
}

impl SettingsOverride {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, settings: &mut FireworkSettings) {
        if let Some(duration) = self.duration {
            settings.duration = duration;
        }
        if let Some(count) = self.fire_piece_number {
            settings.fire_piece_number = count;
        }
        if let Some(size) = self.fire_piece_size {
            settings.fire_piece_size = size;
        }
        if let Some(range) = self.range {
            settings.range = range;
        }
        if let Some(ref easing) = self.easing {
            settings.easing = easing.clone();
        }
        if let Some(ref colors) = self.colors {
            settings.colors = colors.clone();
        }
    }

    /// Copy of `base` with this override applied
    pub fn merged(&self, base: &FireworkSettings) -> FireworkSettings {
        let mut settings = base.clone();
        self.apply_to(&mut settings);
        settings
    }
}

/// Which pointer events launch a burst
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    /// Left button press
    #[default]
    Click,
    /// Every pointer movement
    Move,
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerMode::Click => f.write_str("click"),
            TriggerMode::Move => f.write_str("move"),
        }
    }
}

impl FromStr for TriggerMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "click" => Ok(TriggerMode::Click),
            "move" => Ok(TriggerMode::Move),
            other => Err(Error::InvalidSetting(format!(
                "trigger must be 'click' or 'move', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Target frames per second
    #[serde(default = "default_fps")]
    pub fps: u32,
    /// Pointer events that launch bursts
    #[serde(default)]
    pub trigger: TriggerMode,
    /// Surface background colour
    #[serde(default = "default_background")]
    pub background: Rgb,
    /// Follow the terminal size instead of using `width` x `height`
    #[serde(default = "default_true")]
    pub full_screen: bool,
    /// Fixed surface width in surface units (used when `full_screen` is off)
    #[serde(default = "default_surface_extent")]
    pub width: f64,
    /// Fixed surface height in surface units (used when `full_screen` is off)
    #[serde(default = "default_surface_extent")]
    pub height: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            fps: default_fps(),
            trigger: TriggerMode::default(),
            background: default_background(),
            full_screen: default_true(),
            width: default_surface_extent(),
            height: default_surface_extent(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("firework")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_duration() -> u32 {
    30
}

fn default_fire_piece_number() -> usize {
    30
}

fn default_fire_piece_size() -> f64 {
    25.0
}

fn default_range() -> f64 {
    200.0
}

fn default_colors() -> Vec<Rgb> {
    Rgb::DEFAULT_PALETTE.to_vec()
}

fn default_fps() -> u32 {
    60
}

fn default_background() -> Rgb {
    Rgb::BLACK
}

fn default_true() -> bool {
    true
}

fn default_surface_extent() -> f64 {
    300.0
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<PathBuf> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(config_path)
    }

    /// Get the configuration file path
    /// Always uses ~/.config/firework/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("firework")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path used while the terminal UI is active
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("firework.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_effect() {
        let settings = FireworkSettings::default();
        assert_eq!(settings.duration, 30);
        assert_eq!(settings.fire_piece_number, 30);
        assert_eq!(settings.fire_piece_size, 25.0);
        assert_eq!(settings.range, 200.0);
        assert_eq!(settings.easing, EasingSpec::from("Quad"));
        assert_eq!(settings.colors.len(), 4);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [firework]
            duration = 45
            easing = "Circ"

            [ui]
            trigger = "move"
            "#,
        )
        .unwrap();
        assert_eq!(config.firework.duration, 45);
        assert_eq!(config.firework.easing, EasingSpec::from("Circ"));
        assert_eq!(config.firework.fire_piece_number, 30);
        assert_eq!(config.ui.trigger, TriggerMode::Move);
        assert_eq!(config.ui.fps, 60);
        assert!(config.ui.full_screen);
    }

    #[test]
    fn test_colors_parse_from_hex() {
        let config = AppConfig::from_toml(
            r##"
            [firework]
            colors = ["#ff0000", "0f0"]

            [ui]
            background = "#101010"
            "##,
        )
        .unwrap();
        assert_eq!(config.firework.colors, vec![Rgb(255, 0, 0), Rgb(0, 255, 0)]);
        assert_eq!(config.ui.background, Rgb(16, 16, 16));
    }

    #[test]
    fn test_bad_file_is_config_error() {
        let err = AppConfig::from_toml("[firework]\ncolors = [\"nope\"]").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        let err = AppConfig::from_toml("[ui]\ntrigger = \"hover\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let mut config = AppConfig::default();
        config.firework.easing = EasingSpec::ControlPoints([0.1, 0.2, 0.3, 0.4]);
        let text = config.to_toml().unwrap();
        let loaded = AppConfig::from_toml(&text).unwrap();
        assert_eq!(loaded.firework, config.firework);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = FireworkSettings {
            duration: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(Error::InvalidSetting(_))));

        let negative = FireworkSettings {
            range: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let no_colors = FireworkSettings {
            colors: Vec::new(),
            ..Default::default()
        };
        assert!(no_colors.validate().is_err());

        let nan = FireworkSettings {
            fire_piece_size: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_override_only_touches_present_fields() {
        let base = FireworkSettings::default();
        let overrides = SettingsOverride {
            duration: Some(10),
            easing: Some(EasingSpec::from("Expo")),
            ..Default::default()
        };
        let merged = overrides.merged(&base);
        assert_eq!(merged.duration, 10);
        assert_eq!(merged.easing, EasingSpec::from("Expo"));
        assert_eq!(merged.range, base.range);
        assert_eq!(merged.fire_piece_size, base.fire_piece_size);
        assert!(!overrides.is_empty());
        assert!(SettingsOverride::default().is_empty());
    }

    #[test]
    fn test_trigger_mode_from_str() {
        assert_eq!("Click".parse::<TriggerMode>().unwrap(), TriggerMode::Click);
        assert_eq!(" move ".parse::<TriggerMode>().unwrap(), TriggerMode::Move);
        assert!("hover".parse::<TriggerMode>().is_err());
    }

    #[test]
    fn test_tilde_expansion() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(std::path::Path::new("~/x")), home.join("x"));
        }
        assert_eq!(
            expand_tilde(std::path::Path::new("/tmp/x")),
            PathBuf::from("/tmp/x")
        );
    }
}
