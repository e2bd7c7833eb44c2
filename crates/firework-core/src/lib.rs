pub mod burst;
pub mod color;
pub mod config;
pub mod easing;
pub mod engine;
pub mod error;
pub mod particle;
pub mod surface;

pub use color::Rgb;
pub use config::{AppConfig, FireworkSettings, SettingsOverride, TriggerMode, UiConfig};
pub use easing::{get_easing, CubicBezier, EasingLibrary, EasingSpec};
pub use engine::{AnimationEngine, EngineState, TickReport};
pub use error::{Error, Result};
pub use surface::{Point, RecordingSurface, Surface, SurfaceSize};
