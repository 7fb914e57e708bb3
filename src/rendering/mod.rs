//! Rendering module: the two renderers plus the canvas product type

pub mod icon;
pub mod paint;
pub mod screenshot;

pub use icon::render_icon;
pub use screenshot::render_screenshot;

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// A finished render: an RGBA canvas ready to be encoded as PNG.
///
/// Renderers hand one of these back without touching the filesystem;
/// encoding and writing are separate, explicit steps.
#[derive(Debug, Clone)]
pub struct RasterAsset {
    canvas: RgbaImage,
}

impl RasterAsset {
    pub fn new(canvas: RgbaImage) -> Self {
        Self { canvas }
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Borrow the raw canvas, e.g. for pixel probes in tests.
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Encode the canvas as lossless PNG, preserving the alpha channel.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.canvas.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Encode and write the canvas to `path`, overwriting any existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes).map_err(|source| Error::AssetIo {
            path: path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_png_round_trips_dimensions() {
        let asset = RasterAsset::new(RgbaImage::new(12, 7));
        let bytes = asset.encode_png().expect("encode");
        let decoded = image::load_from_memory(&bytes).expect("decode");
        assert_eq!(decoded.width(), 12);
        assert_eq!(decoded.height(), 7);
    }
}
