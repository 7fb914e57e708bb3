use std::path::Path;

use beamup_assets::{generate_all, OUTPUT_DIR};

fn main() -> anyhow::Result<()> {
    generate_all(Path::new(OUTPUT_DIR))?;
    Ok(())
}
