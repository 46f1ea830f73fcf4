use std::path::Path;

use anyhow::bail;
use benchgrid_alloc::SeatingConfig;

pub fn init(path: &str) -> anyhow::Result<()> {
    let output = Path::new(path);
    if output.exists() {
        bail!("{} already exists", output.display());
    }

    let config = SeatingConfig::scaffold();
    std::fs::write(output, config.to_toml_string()?)?;
    println!("✓ Generated {}", output.display());
    println!("  Set the bench count of each room, then run `benchgrid generate`.");

    Ok(())
}
