//! Animation engine
//!
//! Owns the active bursts and drives them one tick at a time. The engine
//! never owns a surface or a clock: the surface is borrowed for each tick,
//! and after every tick the engine raises a frame request that the driver
//! consumes with [`AnimationEngine::take_frame_request`] and turns into its
//! next wake-up.
//!
//! ```ignore
//! let mut engine = AnimationEngine::new(settings)?;
//! if engine.start(&surface) {
//!     engine.spawn(Point::new(100.0, 100.0));
//!     while engine.take_frame_request() {
//!         engine.tick(&mut surface);
//!     }
//! }
//! ```

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::burst::Burst;
use crate::color::Rgb;
use crate::config::FireworkSettings;
use crate::easing::CubicBezier;
use crate::error::Result;
use crate::particle::ParticleSpec;
use crate::surface::{Point, Surface};

/// Whether the engine is being ticked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No surface bound; ticks are ignored
    Idle,
    /// Bound to a surface and requesting frames
    Running,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TickReport {
    /// Bursts drawn this tick
    pub bursts_drawn: usize,
    /// `fill_circle` calls issued this tick
    pub circles_drawn: usize,
    /// Bursts that expired and were dropped at the end of the tick
    pub bursts_removed: usize,
}

#[derive(Debug)]
pub struct AnimationEngine {
    settings: FireworkSettings,
    easing: Arc<CubicBezier>,
    bursts: Vec<Burst>,
    state: EngineState,
    frame_requested: bool,
    rng: StdRng,
}

impl AnimationEngine {
    /// Validate `settings` and resolve the easing curve.
    ///
    /// Every configuration problem is reported here; a constructed engine
    /// cannot fail while animating.
    pub fn new(settings: FireworkSettings) -> Result<Self> {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Like [`AnimationEngine::new`] with a fixed random seed
    pub fn with_seed(settings: FireworkSettings, seed: u64) -> Result<Self> {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: FireworkSettings, rng: StdRng) -> Result<Self> {
        settings.validate()?;
        let easing = settings.easing.resolve()?;
        debug!(
            easing = %settings.easing,
            duration = settings.duration,
            pieces = settings.fire_piece_number,
            "animation engine configured"
        );
        Ok(Self {
            settings,
            easing,
            bursts: Vec::new(),
            state: EngineState::Idle,
            frame_requested: false,
            rng,
        })
    }

    /// Bind to `surface` and start running.
    ///
    /// A surface without drawable area leaves the engine idle; returns
    /// whether the engine is running afterwards.
    pub fn start<S: Surface + ?Sized>(&mut self, surface: &S) -> bool {
        if self.state == EngineState::Running {
            return true;
        }
        let size = surface.size();
        if size.is_empty() {
            warn!(
                width = size.width,
                height = size.height,
                "no drawable surface, animation not started"
            );
            return false;
        }
        info!(width = size.width, height = size.height, "animation started");
        self.state = EngineState::Running;
        self.frame_requested = true;
        true
    }

    /// Stop requesting frames. Active bursts are kept.
    pub fn stop(&mut self) {
        if self.state == EngineState::Running {
            info!(active = self.bursts.len(), "animation stopped");
        }
        self.state = EngineState::Idle;
        self.frame_requested = false;
    }

    /// Launch a burst at `position`
    pub fn spawn(&mut self, position: Point) {
        let spec = ParticleSpec {
            duration: self.settings.duration,
            size: self.settings.fire_piece_size,
            range: self.settings.range,
            palette: &self.settings.colors,
            easing: Arc::clone(&self.easing),
        };
        let burst = Burst::new(position, self.settings.fire_piece_number, &spec, &mut self.rng);
        self.bursts.push(burst);
        debug!(x = position.x, y = position.y, active = self.bursts.len(), "burst spawned");
    }

    /// Run one frame: clear, draw every burst in spawn order, drop the
    /// expired ones, and request the next frame.
    ///
    /// Returns `None` without touching the surface while idle.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Option<TickReport> {
        if self.state != EngineState::Running {
            return None;
        }

        surface.clear();

        let mut report = TickReport::default();
        for burst in &mut self.bursts {
            burst.advance(&mut *surface);
            report.bursts_drawn += 1;
            report.circles_drawn += burst.len();
        }

        let before = self.bursts.len();
        self.bursts.retain(|burst| !burst.is_expired());
        report.bursts_removed = before - self.bursts.len();
        if report.bursts_removed > 0 {
            debug!(
                removed = report.bursts_removed,
                active = self.bursts.len(),
                "expired bursts removed"
            );
        }

        self.frame_requested = true;
        Some(report)
    }

    /// Consume the pending frame request, if any
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Drop every active burst
    pub fn clear(&mut self) {
        self.bursts.clear();
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn active_bursts(&self) -> usize {
        self.bursts.len()
    }

    pub fn settings(&self) -> &FireworkSettings {
        &self.settings
    }

    pub fn easing(&self) -> &CubicBezier {
        &self.easing
    }

    pub fn palette(&self) -> &[Rgb] {
        &self.settings.colors
    }
}
