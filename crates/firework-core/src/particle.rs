//! A single spark of a burst

use std::sync::Arc;

use rand::Rng;

use crate::color::Rgb;
use crate::easing::CubicBezier;
use crate::surface::{Point, Surface};

/// Render state of a particle for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spark {
    pub position: Point,
    pub radius: f64,
    pub color: Rgb,
}

/// One spark: flies from its origin along a fixed direction while shrinking
#[derive(Debug, Clone)]
pub struct Particle {
    origin: Point,
    /// Each axis drawn independently from [-1, 1]
    direction: Point,
    max_size: f64,
    travel_range: f64,
    remaining_life: u32,
    total_life: u32,
    color: Rgb,
    easing: Arc<CubicBezier>,
    current_size: f64,
    current_position: Point,
}

/// Construction parameters shared by every particle of a burst
#[derive(Debug, Clone)]
pub struct ParticleSpec<'a> {
    pub duration: u32,
    pub size: f64,
    pub range: f64,
    pub palette: &'a [Rgb],
    pub easing: Arc<CubicBezier>,
}

impl Particle {
    /// Create a particle at `origin` with a random direction and colour
    pub fn spawn<R: Rng>(origin: Point, spec: &ParticleSpec<'_>, rng: &mut R) -> Self {
        let direction = Point::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        let color = if spec.palette.is_empty() {
            Rgb::DEFAULT_PALETTE[0]
        } else {
            spec.palette[rng.gen_range(0..spec.palette.len())]
        };
        Self::with_direction(origin, direction, color, spec)
    }

    /// Create a particle with a fixed direction and colour
    pub fn with_direction(
        origin: Point,
        direction: Point,
        color: Rgb,
        spec: &ParticleSpec<'_>,
    ) -> Self {
        Self {
            origin,
            direction,
            max_size: spec.size,
            travel_range: spec.range,
            remaining_life: spec.duration,
            total_life: spec.duration,
            color,
            easing: Arc::clone(&spec.easing),
            current_size: spec.size,
            current_position: origin,
        }
    }

    /// Age the particle by one tick and return where and how big it is now.
    ///
    /// Progress is taken after aging, so the first call shows one tick of
    /// movement and the call that ends the particle's life shows it at full
    /// travel with zero size.
    pub fn advance(&mut self) -> Spark {
        self.remaining_life = self.remaining_life.saturating_sub(1);

        let elapsed = if self.total_life == 0 {
            1.0
        } else {
            1.0 - self.remaining_life as f64 / self.total_life as f64
        };
        let progress = self.easing.ease(elapsed);

        self.current_size = (self.max_size * (1.0 - progress)).max(0.0);
        self.current_position = Point::new(
            self.origin.x + self.travel_range * self.direction.x * progress,
            self.origin.y + self.travel_range * self.direction.y * progress,
        );

        self.spark()
    }

    /// Advance one tick and paint the result
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let spark = self.advance();
        surface.fill_circle(spark.position, spark.radius, spark.color);
    }

    /// Render state from the most recent advance
    pub fn spark(&self) -> Spark {
        Spark {
            position: self.current_position,
            radius: self.current_size,
            color: self.color,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn direction(&self) -> Point {
        self.direction
    }

    pub fn remaining_life(&self) -> u32 {
        self.remaining_life
    }

    pub fn total_life(&self) -> u32 {
        self.total_life
    }

    pub fn current_size(&self) -> f64 {
        self.current_size
    }

    pub fn current_position(&self) -> Point {
        self.current_position
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining_life == 0
    }
}
