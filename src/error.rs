use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while opening images or exporting results.
///
/// A degenerate rectangle is not an error; see [`crate::metrics::clamp_rect`].
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Failed to decode image {path:?}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image: {0}")]
    ImageWrite(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No image loaded")]
    NoImage,

    #[error("No bounding box drawn")]
    NoBox,
}

pub type Result<T> = std::result::Result<T, InspectError>;
