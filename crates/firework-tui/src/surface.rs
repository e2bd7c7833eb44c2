//! Terminal drawing surface
//!
//! Surface units are braille dots: every terminal cell is two dots wide and
//! four dots tall. Circles are recorded during a tick and painted onto a
//! ratatui canvas when the frame is rendered.

use firework_core::surface::Circle;
use firework_core::{Point, Rgb, Surface, SurfaceSize};
use ratatui::layout::Rect;

/// Braille dots per terminal column
pub const DOTS_PER_COLUMN: f64 = 2.0;
/// Braille dots per terminal row
pub const DOTS_PER_ROW: f64 = 4.0;

/// Circle recorder sized to a terminal region
#[derive(Debug, Clone, Default)]
pub struct CanvasSurface {
    size: SurfaceSize,
    /// Fixed size requested by configuration, `None` to follow the terminal
    fixed: Option<SurfaceSize>,
    circles: Vec<Circle>,
}

impl CanvasSurface {
    /// Surface that follows the size of the terminal region it is given
    pub fn full_screen() -> Self {
        Self::default()
    }

    /// Surface with a fixed size in dots, clipped to the terminal region
    pub fn fixed(width: f64, height: f64) -> Self {
        Self {
            fixed: Some(SurfaceSize::new(width, height)),
            ..Self::default()
        }
    }

    /// Region inside `available` that the surface occupies, centred
    pub fn layout(&self, available: Rect) -> Rect {
        match self.fixed {
            None => available,
            Some(size) => {
                let columns = ((size.width / DOTS_PER_COLUMN).ceil() as u16).min(available.width);
                let rows = ((size.height / DOTS_PER_ROW).ceil() as u16).min(available.height);
                Rect {
                    x: available.x + (available.width - columns) / 2,
                    y: available.y + (available.height - rows) / 2,
                    width: columns,
                    height: rows,
                }
            }
        }
    }

    /// Match the surface to the region it is drawn in
    pub fn resize(&mut self, region: Rect) {
        let visible = SurfaceSize::new(
            region.width as f64 * DOTS_PER_COLUMN,
            region.height as f64 * DOTS_PER_ROW,
        );
        self.size = match self.fixed {
            None => visible,
            Some(fixed) => SurfaceSize::new(
                fixed.width.min(visible.width),
                fixed.height.min(visible.height),
            ),
        };
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }
}

impl Surface for CanvasSurface {
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        self.circles.push(Circle {
            center,
            radius,
            color,
        });
    }

    fn clear(&mut self) {
        self.circles.clear();
    }

    fn size(&self) -> SurfaceSize {
        self.size
    }
}

/// Map a terminal cell to the surface point at its centre.
///
/// Returns `None` for cells outside `region`.
pub fn cell_to_surface(column: u16, row: u16, region: Rect) -> Option<Point> {
    let inside = column >= region.x
        && column < region.x + region.width
        && row >= region.y
        && row < region.y + region.height;
    if !inside {
        return None;
    }
    Some(Point::new(
        (column - region.x) as f64 * DOTS_PER_COLUMN + DOTS_PER_COLUMN / 2.0,
        (row - region.y) as f64 * DOTS_PER_ROW + DOTS_PER_ROW / 2.0,
    ))
}

/// Dot positions covering a filled disc, clipped to `bounds`.
///
/// Only dots inside `[0, width] x [0, height]` are produced, so the result
/// never holds more than one point per dot of the surface.
pub fn disc_points(center: Point, radius: f64, bounds: SurfaceSize) -> Vec<(f64, f64)> {
    let finite_center = center.x.is_finite() && center.y.is_finite();
    if !(radius > 0.0) || !finite_center || bounds.is_empty() {
        return Vec::new();
    }
    let reach = radius.floor();
    let Some((x_lo, x_hi)) = clip_offsets(center.x, reach, bounds.width) else {
        return Vec::new();
    };
    let Some((y_lo, y_hi)) = clip_offsets(center.y, reach, bounds.height) else {
        return Vec::new();
    };

    let r2 = radius * radius;
    let capacity = ((x_hi - x_lo + 1) * (y_hi - y_lo + 1)) as usize;
    let mut points = Vec::with_capacity(capacity);
    for dy in y_lo..=y_hi {
        for dx in x_lo..=x_hi {
            let (fx, fy) = (dx as f64, dy as f64);
            if fx * fx + fy * fy <= r2 {
                points.push((center.x + fx, center.y + fy));
            }
        }
    }
    points
}

/// Integer offsets in `-reach..=reach` that keep `origin + offset` in `[0, extent]`
fn clip_offsets(origin: f64, reach: f64, extent: f64) -> Option<(i64, i64)> {
    let lo = (-reach).max((-origin).ceil());
    let hi = reach.min((extent - origin).floor());
    if !(lo <= hi) {
        return None;
    }
    Some((lo as i64, hi as i64))
}
