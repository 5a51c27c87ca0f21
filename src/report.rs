use std::path::Path;

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{ImageDimensions, MetricsRecord};

/// What gets exported for one inspected image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionReport {
    pub source: Option<String>,
    /// `[height, width, channels]`
    pub image_shape: [u32; 3],
    pub question: String,
    pub metrics: Option<MetricsRecord>,
}

impl InspectionReport {
    pub fn new(
        source: Option<String>,
        dims: ImageDimensions,
        question: &str,
        metrics: Option<MetricsRecord>,
    ) -> Self {
        Self {
            source,
            image_shape: [dims.height, dims.width, 3],
            question: question.trim().to_string(),
            metrics,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        log::info!("Saved report to {}", path.display());
        Ok(())
    }
}

pub fn save_overlay(path: &Path, overlay: &RgbImage) -> Result<()> {
    overlay.save_with_format(path, image::ImageFormat::Png)?;
    log::info!("Saved overlay to {}", path.display());
    Ok(())
}
