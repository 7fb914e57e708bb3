//! Error types for the asset generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating assets
///
/// Font selection is deliberately absent here: failure to load a system
/// font is absorbed inside the icon renderer and degrades to the built-in
/// bitmap font instead of surfacing as an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to render a canvas
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to encode a canvas as PNG
    #[error("PNG encoding failed: {0}")]
    EncodeError(#[from] image::ImageError),

    /// Failed to create the output directory or write an asset file
    #[error("Failed to write {path}: {source}")]
    AssetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
