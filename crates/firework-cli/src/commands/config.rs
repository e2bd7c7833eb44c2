use anyhow::Result;

use firework_core::AppConfig;

pub async fn run(config: &AppConfig, save: bool) -> Result<()> {
    // Catch bad values before they are written back
    config.firework.validate()?;
    config.firework.easing.resolve()?;

    print!("{}", config.to_toml()?);

    if save {
        let path = config.save()?;
        println!("\nSaved to {}", path.display());
    }

    Ok(())
}
