//! Drawing surface abstraction
//!
//! The engine only ever fills circles and clears the whole surface, so that
//! is all a backend has to provide.

use serde::Serialize;

use crate::color::Rgb;

/// A point in surface space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Surface dimensions in surface units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface with no drawable area
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Something circles can be painted onto
pub trait Surface {
    /// Paint a filled circle
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb);

    /// Wipe the whole surface
    fn clear(&mut self);

    /// Current dimensions
    fn size(&self) -> SurfaceSize;
}

/// One recorded `fill_circle` call
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub color: Rgb,
}

/// Surface that remembers what was drawn since the last clear
///
/// Used for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    size: SurfaceSize,
    circles: Vec<Circle>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: SurfaceSize::new(width, height),
            circles: Vec::new(),
            clears: 0,
        }
    }

    /// Circles drawn since the last clear
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Number of times the surface was cleared
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = SurfaceSize::new(width, height);
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.circles.push(Circle {
            center,
            radius,
            color,
        });
    }

    fn clear(&mut self) {
        self.circles.clear();
        self.clears += 1;
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }
}
