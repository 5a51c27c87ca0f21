use image::RgbImage;

use crate::metrics::{clamp_rect, compute_metrics};
use crate::models::{BoundingBox, BoxState, ImageDimensions, MetricsRecord, RawRect};
use crate::overlay::render_overlay;

/// Result of one render cycle for the current image and rectangle.
#[derive(Debug, Clone, Default)]
pub struct Inspection {
    pub state: BoxState,
    pub bbox: Option<BoundingBox>,
    pub metrics: Option<MetricsRecord>,
    pub overlay: Option<RgbImage>,
}

impl Inspection {
    pub fn has_box(&self) -> bool {
        self.state == BoxState::HasBox
    }
}

/// Recomputes everything from the image and the active rectangle
/// (already in native pixel coordinates).
pub fn inspect(image: &RgbImage, rect: Option<RawRect>) -> Inspection {
    let dims = ImageDimensions::of(image);

    let Some(bbox) = rect.and_then(|raw| clamp_rect(raw, dims)) else {
        if let Some(raw) = rect {
            log::debug!("Rectangle {:?} is degenerate after clamping", raw);
        }
        return Inspection::default();
    };

    let metrics = compute_metrics(dims, bbox);
    log::debug!(
        "Box {:?}: area_ratio={} center_distance_norm={}",
        bbox,
        metrics.area_ratio,
        metrics.center_distance_norm
    );

    Inspection {
        state: BoxState::HasBox,
        bbox: Some(bbox),
        metrics: Some(metrics),
        overlay: Some(render_overlay(image, &bbox)),
    }
}
