use anyhow::{bail, Result};
use serde::Serialize;

use firework_core::{
    AnimationEngine, AppConfig, FireworkSettings, Point, RecordingSurface, Surface, SurfaceSize,
    TickReport,
};

/// One rendered frame of a headless run
#[derive(Debug, Serialize)]
pub struct FrameRecord {
    pub tick: u32,
    #[serde(flatten)]
    pub report: TickReport,
    /// Bursts still alive after the tick
    pub active_bursts: usize,
    /// Largest radius drawn this tick
    pub max_radius: f64,
}

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub surface: SurfaceSize,
    pub origins: Vec<Point>,
    pub settings: FireworkSettings,
    pub frames: Vec<FrameRecord>,
}

pub async fn run(
    config: &AppConfig,
    at: &[Point],
    ticks: Option<u32>,
    seed: u64,
    json: bool,
) -> Result<()> {
    let report = simulate(config, at, ticks, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Simulating {} burst(s) on a {}x{} surface, easing {}, seed {}\n",
        report.origins.len(),
        report.surface.width,
        report.surface.height,
        report.settings.easing,
        report.seed
    );
    for frame in &report.frames {
        println!(
            "  tick {:>4}  bursts {:>3}  circles {:>5}  removed {:>3}  max radius {:>7.3}",
            frame.tick,
            frame.report.bursts_drawn,
            frame.report.circles_drawn,
            frame.report.bursts_removed,
            frame.max_radius
        );
    }
    if let Some(last) = report.frames.last() {
        println!("\n{} burst(s) still active", last.active_bursts);
    }

    Ok(())
}

/// Spawn a burst at every origin (the surface centre when none are given)
/// and run the engine for `ticks` frames against a recording surface
pub fn simulate(
    config: &AppConfig,
    at: &[Point],
    ticks: Option<u32>,
    seed: u64,
) -> Result<SimulationReport> {
    let mut engine = AnimationEngine::with_seed(config.firework.clone(), seed)?;
    let mut surface = RecordingSurface::new(config.ui.width, config.ui.height);
    if !engine.start(&surface) {
        bail!(
            "surface {}x{} has no drawable area",
            config.ui.width,
            config.ui.height
        );
    }

    let origins = if at.is_empty() {
        vec![surface.size().center()]
    } else {
        at.to_vec()
    };
    for origin in &origins {
        engine.spawn(*origin);
    }

    let ticks = ticks.unwrap_or(config.firework.duration);
    let mut frames = Vec::with_capacity(ticks as usize);
    for tick in 1..=ticks {
        if !engine.take_frame_request() {
            break;
        }
        let Some(report) = engine.tick(&mut surface) else {
            break;
        };
        let max_radius = surface
            .circles()
            .iter()
            .map(|c| c.radius)
            .fold(0.0, f64::max);
        frames.push(FrameRecord {
            tick,
            report,
            active_bursts: engine.active_bursts(),
            max_radius,
        });
    }

    Ok(SimulationReport {
        seed,
        surface: surface.size(),
        origins,
        settings: config.firework.clone(),
        frames,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(duration: u32, pieces: usize) -> AppConfig {
        let mut config = AppConfig::default();
        config.firework.duration = duration;
        config.firework.fire_piece_number = pieces;
        config
    }

    #[test]
    fn test_default_origin_is_centre() {
        let report = simulate(&config(5, 3), &[], None, 1).unwrap();
        assert_eq!(report.origins, vec![Point::new(150.0, 150.0)]);
        assert_eq!(report.frames.len(), 5);
    }

    #[test]
    fn test_burst_expires_on_last_tick() {
        let report = simulate(&config(4, 10), &[Point::new(10.0, 10.0)], Some(6), 2).unwrap();
        assert_eq!(report.frames.len(), 6);

        let last_live = &report.frames[3];
        assert_eq!(last_live.report.circles_drawn, 10);
        assert_eq!(last_live.report.bursts_removed, 1);
        assert_eq!(last_live.max_radius, 0.0);
        assert_eq!(last_live.active_bursts, 0);

        let after = &report.frames[4];
        assert_eq!(after.report, TickReport::default());
    }

    #[test]
    fn test_radius_shrinks_every_tick() {
        let report = simulate(&config(8, 5), &[], None, 3).unwrap();
        let radii: Vec<f64> = report.frames.iter().map(|f| f.max_radius).collect();
        assert!(radii.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_same_seed_same_report() {
        let a = simulate(&config(6, 4), &[Point::new(1.0, 2.0)], None, 9).unwrap();
        let b = simulate(&config(6, 4), &[Point::new(1.0, 2.0)], None, 9).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_empty_surface_is_rejected() {
        let mut config = config(5, 3);
        config.ui.width = 0.0;
        assert!(simulate(&config, &[], None, 0).is_err());
    }

    #[test]
    fn test_json_report_fields() {
        let report = simulate(&config(2, 1), &[], None, 0).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["frames"][0]["tick"], 1);
        assert_eq!(value["frames"][0]["circles_drawn"], 1);
        assert_eq!(value["settings"]["duration"], 2);
    }
}
