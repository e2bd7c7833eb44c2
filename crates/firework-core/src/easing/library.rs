//! Named easing presets
//!
//! Control points for the classic ease-in-out family (Quad through Circ),
//! plus `Linear` as a plain registration of the identity curve. Every curve
//! is built once on first access and shared afterwards.

use std::sync::{Arc, OnceLock};

use crate::error::{Error, Result};

use super::bezier::CubicBezier;

/// Preset names with their `[x1, y1, x2, y2]` control points, in listing order
pub const PRESETS: [(&str, [f64; 4]); 8] = [
    ("Quad", [0.455, 0.030, 0.515, 0.955]),
    ("Cubic", [0.645, 0.045, 0.355, 1.000]),
    ("Quart", [0.770, 0.000, 0.175, 1.000]),
    ("Quint", [0.860, 0.000, 0.070, 1.000]),
    ("Sine", [0.445, 0.050, 0.550, 0.950]),
    ("Expo", [1.000, 0.000, 0.000, 1.000]),
    ("Circ", [0.785, 0.135, 0.150, 0.860]),
    ("Linear", [0.000, 0.000, 1.000, 1.000]),
];

/// Registry of pre-built easing curves
#[derive(Debug)]
pub struct EasingLibrary {
    curves: Vec<(&'static str, Arc<CubicBezier>)>,
}

static LIBRARY: OnceLock<EasingLibrary> = OnceLock::new();

impl EasingLibrary {
    fn build() -> Self {
        let curves = PRESETS
            .iter()
            .map(|(name, [x1, y1, x2, y2])| {
                // Preset x values are all inside [0, 1]
                let curve = CubicBezier::new(*x1, *y1, *x2, *y2).unwrap_or_default();
                (*name, Arc::new(curve))
            })
            .collect();
        Self { curves }
    }

    /// The process-wide library, built on first use
    pub fn global() -> &'static EasingLibrary {
        LIBRARY.get_or_init(Self::build)
    }

    /// Look up a curve by name (case-insensitive)
    pub fn get(&self, name: &str) -> Result<Arc<CubicBezier>> {
        let wanted = name.trim();
        self.curves
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(wanted))
            .map(|(_, curve)| Arc::clone(curve))
            .ok_or_else(|| Error::UnknownEasing(name.to_string()))
    }

    /// Canonical spelling of a registered name
    pub fn canonical_name(&self, name: &str) -> Option<&'static str> {
        let wanted = name.trim();
        self.curves
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(wanted))
            .map(|(n, _)| *n)
    }

    /// Registered names in listing order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.curves.iter().map(|(name, _)| *name)
    }

    /// Name following `name` in listing order, wrapping around
    pub fn next_name(&self, name: &str) -> &'static str {
        let index = self
            .curves
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
            .map(|i| (i + 1) % self.curves.len())
            .unwrap_or(0);
        self.curves[index].0
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// Shorthand for `EasingLibrary::global().get(name)`
pub fn get_easing(name: &str) -> Result<Arc<CubicBezier>> {
    EasingLibrary::global().get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVED: [&str; 7] = ["Quad", "Cubic", "Quart", "Quint", "Sine", "Expo", "Circ"];

    #[test]
    fn test_all_presets_resolve() {
        let library = EasingLibrary::global();
        assert_eq!(library.len(), 8);
        for name in CURVED {
            let curve = library.get(name).unwrap();
            assert!(!curve.is_linear(), "{} should not be linear", name);
        }
        assert!(library.get("Linear").unwrap().is_linear());
    }

    #[test]
    fn test_presets_keep_control_points() {
        let quad = get_easing("Quad").unwrap();
        assert_eq!(quad.control_points(), [0.455, 0.030, 0.515, 0.955]);
        let expo = get_easing("Expo").unwrap();
        assert_eq!(expo.control_points(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_presets_are_cached() {
        let a = get_easing("Cubic").unwrap();
        let b = get_easing("cubic").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_unknown_name_fails() {
        let err = get_easing("Bounce").unwrap_err();
        assert!(matches!(err, Error::UnknownEasing(ref n) if n == "Bounce"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_presets_monotonic() {
        for name in CURVED {
            let curve = get_easing(name).unwrap();
            let mut prev = 0.0;
            for i in 0..=200 {
                let x = i as f64 / 200.0;
                let v = curve.ease(x);
                assert!(v >= prev - 1e-7, "{} not monotonic at x={}", name, x);
                prev = v;
            }
            assert_eq!(curve.ease(0.0), 0.0);
            assert_eq!(curve.ease(1.0), 1.0);
        }
    }

    #[test]
    fn test_next_name_wraps() {
        let library = EasingLibrary::global();
        assert_eq!(library.next_name("Quad"), "Cubic");
        assert_eq!(library.next_name("linear"), "Quad");
        assert_eq!(library.next_name("unknown"), "Quad");
    }

    #[test]
    fn test_canonical_name() {
        let library = EasingLibrary::global();
        assert_eq!(library.canonical_name(" circ "), Some("Circ"));
        assert_eq!(library.canonical_name("Bounce"), None);
    }
}
