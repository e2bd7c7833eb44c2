use anyhow::{bail, Result};

use firework_core::CubicBezier;

use crate::overrides::parse_easing;

const BAR_WIDTH: f64 = 40.0;

pub async fn run(name: &str, steps: usize) -> Result<()> {
    if steps == 0 {
        bail!("--steps must be at least 1");
    }
    let spec = parse_easing(name).map_err(anyhow::Error::msg)?;
    let curve = spec.resolve()?;

    println!("{} ({} steps)\n", spec, steps);
    for (x, y) in sample_points(&curve, steps) {
        let bar = "#".repeat((y.clamp(0.0, 1.0) * BAR_WIDTH).round() as usize);
        println!("  {:.3}  {:>9.6}  {}", x, y, bar);
    }

    Ok(())
}

/// Evaluate `curve` at `steps + 1` evenly spaced inputs from 0 to 1
pub fn sample_points(curve: &CubicBezier, steps: usize) -> Vec<(f64, f64)> {
    (0..=steps)
        .map(|i| {
            let x = i as f64 / steps as f64;
            (x, curve.ease(x))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use firework_core::get_easing;

    #[test]
    fn test_sample_points_cover_unit_interval() {
        let curve = get_easing("Linear").unwrap();
        let points = sample_points(&curve, 4);
        assert_eq!(
            points,
            vec![(0.0, 0.0), (0.25, 0.25), (0.5, 0.5), (0.75, 0.75), (1.0, 1.0)]
        );
    }

    #[test]
    fn test_sample_points_hit_endpoints() {
        let curve = get_easing("Expo").unwrap();
        let points = sample_points(&curve, 7);
        assert_eq!(points.len(), 8);
        assert_eq!(points[0].1, 0.0);
        assert_eq!(points[7].1, 1.0);
    }
}
