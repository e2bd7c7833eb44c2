use clap::Args;
use firework_core::{AppConfig, EasingSpec, Point, Rgb, SettingsOverride, TriggerMode};

/// Command-line overrides of the configured effect
#[derive(Args, Debug, Clone, Default)]
pub struct OverrideArgs {
    /// Lifetime of a burst in ticks
    #[arg(long, global = true)]
    pub duration: Option<u32>,

    /// Particles per burst
    #[arg(long, global = true)]
    pub pieces: Option<usize>,

    /// Starting particle radius
    #[arg(long, global = true)]
    pub size: Option<f64>,

    /// Distance a particle travels along each axis
    #[arg(long, global = true)]
    pub range: Option<f64>,

    /// Easing preset name or four control points `x1,y1,x2,y2`
    #[arg(long, global = true, value_parser = parse_easing)]
    pub easing: Option<EasingSpec>,

    /// Comma separated palette, e.g. `#ff0080,#00ff80`
    #[arg(long, global = true, value_delimiter = ',')]
    pub colors: Option<Vec<Rgb>>,

    /// Pointer event that launches a burst: click or move
    #[arg(long, global = true)]
    pub trigger: Option<TriggerMode>,
}

impl OverrideArgs {
    pub fn settings(&self) -> SettingsOverride {
        SettingsOverride {
            duration: self.duration,
            fire_piece_number: self.pieces,
            fire_piece_size: self.size,
            range: self.range,
            easing: self.easing.clone(),
            colors: self.colors.clone(),
        }
    }

    /// Apply every override to a loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        self.settings().apply_to(&mut config.firework);
        if let Some(trigger) = self.trigger {
            config.ui.trigger = trigger;
        }
    }
}

/// Parse a preset name or `x1,y1,x2,y2`
pub fn parse_easing(s: &str) -> Result<EasingSpec, String> {
    if !s.contains(',') {
        return Ok(EasingSpec::Named(s.trim().to_string()));
    }
    let values = parse_floats(s)?;
    match values.as_slice() {
        &[x1, y1, x2, y2] => Ok(EasingSpec::ControlPoints([x1, y1, x2, y2])),
        _ => Err(format!("expected four control points, got {}", values.len())),
    }
}

/// Parse a surface position `x,y`
pub fn parse_point(s: &str) -> Result<Point, String> {
    let values = parse_floats(s)?;
    match values.as_slice() {
        &[x, y] => Ok(Point::new(x, y)),
        _ => Err(format!("expected a position as x,y, got '{}'", s)),
    }
}

fn parse_floats(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", part.trim()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_easing() {
        assert_eq!(parse_easing("Back"), Ok(EasingSpec::Named("Back".into())));
        assert_eq!(
            parse_easing("0.1, 0.7, 0.1, 1"),
            Ok(EasingSpec::ControlPoints([0.1, 0.7, 0.1, 1.0]))
        );
        assert!(parse_easing("0.1,0.7").is_err());
        assert!(parse_easing("a,b,c,d").is_err());
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("150,75.5"), Ok(Point::new(150.0, 75.5)));
        assert!(parse_point("150").is_err());
    }

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        overrides: OverrideArgs,
    }

    #[test]
    fn test_flags_parse() {
        let cli = TestCli::try_parse_from([
            "firework",
            "--colors",
            "#ff0080,00ff80",
            "--easing",
            "0,0,1,1",
            "--trigger",
            "move",
        ])
        .unwrap();
        let args = cli.overrides;
        assert_eq!(args.colors, Some(vec![Rgb(0xff, 0x00, 0x80), Rgb(0x00, 0xff, 0x80)]));
        assert_eq!(args.easing, Some(EasingSpec::ControlPoints([0.0, 0.0, 1.0, 1.0])));
        assert_eq!(args.trigger, Some(TriggerMode::Move));

        assert!(TestCli::try_parse_from(["firework", "--colors", "#ff0080,nope"]).is_err());
        assert!(TestCli::try_parse_from(["firework", "--trigger", "hover"]).is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = AppConfig::default();
        let args = OverrideArgs {
            pieces: Some(12),
            trigger: Some(TriggerMode::Move),
            ..Default::default()
        };
        args.apply(&mut config);
        assert_eq!(config.firework.fire_piece_number, 12);
        assert_eq!(config.firework.duration, 30);
        assert_eq!(config.ui.trigger, TriggerMode::Move);
    }
}
