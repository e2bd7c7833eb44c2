use anyhow::Result;

use firework_core::{AppConfig, EasingLibrary};

pub async fn run(config: &AppConfig) -> Result<()> {
    let library = EasingLibrary::global();
    let active = config.firework.easing.to_string();

    println!("Easing curves ({}):\n", library.len());

    for name in library.names() {
        let [x1, y1, x2, y2] = library.get(name)?.control_points();
        let marker = if name.eq_ignore_ascii_case(&active) { "*" } else { " " };
        println!(
            "{} {:<8} cubic-bezier({}, {}, {}, {})",
            marker, name, x1, y1, x2, y2
        );
    }

    if library.canonical_name(&active).is_none() {
        println!("\n* {}", active);
    }

    Ok(())
}
