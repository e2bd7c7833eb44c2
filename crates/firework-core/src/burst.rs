//! One firework explosion: a fixed set of particles sharing an origin

use rand::Rng;

use crate::particle::{Particle, ParticleSpec};
use crate::surface::{Point, Surface};

#[derive(Debug, Clone)]
pub struct Burst {
    origin: Point,
    particles: Vec<Particle>,
    remaining_life: u32,
}

impl Burst {
    /// Spawn `count` independently randomized particles at `origin`
    pub fn new<R: Rng>(origin: Point, count: usize, spec: &ParticleSpec<'_>, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(origin, spec, rng))
            .collect();
        Self {
            origin,
            particles,
            remaining_life: spec.duration,
        }
    }

    /// Draw every particle in creation order, then age the burst by one tick
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for particle in &mut self.particles {
            particle.draw(&mut *surface);
        }
        self.remaining_life = self.remaining_life.saturating_sub(1);
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining_life == 0
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn remaining_life(&self) -> u32 {
        self.remaining_life
    }
}
