//! BeamMeUp PWA Asset Generator
//!
//! Procedurally renders the fixed set of PWA image assets for BeamMeUp:
//! application icons at two sizes, their maskable variants, and two mock
//! dashboard screenshots, all written as lossless PNG.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> beamup_assets::Result<()> {
//! beamup_assets::generate_all(Path::new(beamup_assets::OUTPUT_DIR))?;
//! # Ok(())
//! # }
//! ```
//!
//! The renderers themselves are pure with respect to the filesystem:
//!
//! ```
//! let icon = beamup_assets::render_icon(192, false);
//! assert_eq!(icon.width(), 192);
//! ```

use std::fs;
use std::path::Path;

use log::debug;

pub mod error;
pub use error::{Error, Result};

pub mod font;
pub mod manifest;
pub mod rendering;

pub use manifest::{manifest, AssetJob};
pub use rendering::{render_icon, render_screenshot, RasterAsset};

/// Fixed output directory the binary writes into.
pub const OUTPUT_DIR: &str = "frontend/public";

/// Render and write every asset in the manifest into `dir`, creating the
/// directory first if needed. Existing files are overwritten.
///
/// Progress lines go to stdout, one per written file plus a closing
/// summary. The run stops at the first write or encode failure; files
/// already written stay in place.
pub fn generate_all(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| Error::AssetIo {
        path: dir.display().to_string(),
        source,
    })?;

    println!("Generating PWA icons...");
    let mut in_screenshots = false;
    for job in manifest() {
        if !in_screenshots && matches!(job, AssetJob::Screenshot { .. }) {
            println!("\nGenerating screenshots...");
            in_screenshots = true;
        }
        let path = dir.join(job.file_name());
        match &job {
            AssetJob::Icon {
                size,
                maskable,
                file_name,
            } => {
                render_icon(*size, *maskable).save_png(&path)?;
                println!("✓ Created {file_name}");
            }
            AssetJob::Screenshot {
                width,
                height,
                label,
                file_name,
            } => {
                render_screenshot(*width, *height, label).save_png(&path)?;
                println!("✓ Created {file_name} ({width}x{height})");
            }
        }
        debug!("wrote {}", path.display());
    }

    println!("\n✅ All PWA assets generated successfully!");
    println!("\nFiles created:");
    for job in manifest() {
        println!("  - {}", job.file_name());
    }

    Ok(())
}
