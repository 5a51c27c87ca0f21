use serde::{Deserialize, Serialize};

/// Pixel size of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub height: u32,
    pub width: u32,
}

impl ImageDimensions {
    pub fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    pub fn of(image: &image::RgbImage) -> Self {
        Self::new(image.height(), image.width())
    }

    pub fn area(&self) -> u64 {
        self.height as u64 * self.width as u64
    }
}

/// A rectangle as drawn on the canvas, before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRect {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

impl RawRect {
    pub fn new(left: i64, top: i64, width: i64, height: i64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Builds a rectangle from the two corners of a drag, in any direction.
    /// Coordinates are truncated toward zero.
    pub fn from_drag(start: (f32, f32), end: (f32, f32)) -> Self {
        let left = start.0.min(end.0);
        let top = start.1.min(end.1);
        let width = (start.0 - end.0).abs();
        let height = (start.1 - end.1).abs();
        Self::new(left as i64, top as i64, width as i64, height as i64)
    }
}

impl From<BoundingBox> for RawRect {
    fn from(bbox: BoundingBox) -> Self {
        Self::new(
            bbox.x1 as i64,
            bbox.y1 as i64,
            bbox.width() as i64,
            bbox.height() as i64,
        )
    }
}

/// Clamped, non-degenerate box in image pixel coordinates.
///
/// Only [`crate::metrics::clamp_rect`] builds one, so `x1 < x2 <= width - 1`
/// and `y1 < y2 <= height - 1` always hold for the image it was clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }
}

/// Advisory shown next to every metrics mapping.
pub const COARSE_METRIC_NOTE: &str =
    "Coarse metric: derived from the bounding box, not a segmentation mask.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub bbox: BoundingBox,
    pub bbox_width_px: u32,
    pub bbox_height_px: u32,
    pub area_px: u64,
    pub area_ratio: f64,
    pub center_distance_norm: f64,
    pub note: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxState {
    #[default]
    NoBox,
    HasBox,
}
