//! Easing system
//!
//! - `bezier` - cubic-bezier timing curve evaluator
//! - `library` - named presets built on top of `bezier`
//!
//! Configuration refers to a curve through [`EasingSpec`], either by preset
//! name or by explicit control points. Resolution happens once, when the
//! engine is built, so a bad curve never surfaces mid-animation.

pub mod bezier;
pub mod library;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use bezier::CubicBezier;
pub use library::{get_easing, EasingLibrary, PRESETS};

use crate::error::Result;

/// How a curve is chosen in configuration
///
/// In TOML either `easing = "Quad"` or `easing = [0.25, 0.1, 0.25, 1.0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EasingSpec {
    Named(String),
    ControlPoints([f64; 4]),
}

impl EasingSpec {
    /// Build (or fetch from the library) the curve this spec names
    pub fn resolve(&self) -> Result<Arc<CubicBezier>> {
        match self {
            EasingSpec::Named(name) => get_easing(name),
            EasingSpec::ControlPoints([x1, y1, x2, y2]) => {
                Ok(Arc::new(CubicBezier::new(*x1, *y1, *x2, *y2)?))
            }
        }
    }
}

impl Default for EasingSpec {
    fn default() -> Self {
        EasingSpec::Named("Quad".to_string())
    }
}

impl fmt::Display for EasingSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EasingSpec::Named(name) => f.write_str(name),
            EasingSpec::ControlPoints([x1, y1, x2, y2]) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

impl From<&str> for EasingSpec {
    fn from(name: &str) -> Self {
        EasingSpec::Named(name.to_string())
    }
}
