//! Bounding-box metrics.
//!
//! Everything here works on the four box coordinates and the two image
//! dimensions only, never on pixel data.

use crate::models::{BoundingBox, COARSE_METRIC_NOTE, ImageDimensions, MetricsRecord, RawRect};

/// Clamps a drawn rectangle to the image bounds.
///
/// Returns `None` when the clamped rectangle has no area, which the caller
/// treats as "no box drawn yet".
pub fn clamp_rect(raw: RawRect, dims: ImageDimensions) -> Option<BoundingBox> {
    let max_x = dims.width as i64 - 1;
    let max_y = dims.height as i64 - 1;

    let x1 = raw.left.max(0);
    let y1 = raw.top.max(0);
    let x2 = raw.left.saturating_add(raw.width).min(max_x);
    let y2 = raw.top.saturating_add(raw.height).min(max_y);

    if x2 > x1 && y2 > y1 {
        Some(BoundingBox {
            x1: x1 as u32,
            y1: y1 as u32,
            x2: x2 as u32,
            y2: y2 as u32,
        })
    } else {
        None
    }
}

/// Computes the metrics record for a box already returned by [`clamp_rect`].
pub fn compute_metrics(dims: ImageDimensions, bbox: BoundingBox) -> MetricsRecord {
    let box_width = bbox.width();
    let box_height = bbox.height();
    let area_px = box_width as u64 * box_height as u64;

    let image_area = dims.area();
    let area_ratio = if image_area > 0 {
        area_px as f64 / image_area as f64
    } else {
        0.0
    };

    let cx = bbox.x1 as f64 + box_width as f64 / 2.0;
    let cy = bbox.y1 as f64 + box_height as f64 / 2.0;
    let half_w = dims.width as f64 / 2.0;
    let half_h = dims.height as f64 / 2.0;

    let half_diagonal = half_w.hypot(half_h);
    let center_distance_norm = if half_diagonal > 0.0 {
        (cx - half_w).hypot(cy - half_h) / half_diagonal
    } else {
        0.0
    };

    MetricsRecord {
        bbox,
        bbox_width_px: box_width,
        bbox_height_px: box_height,
        area_px,
        area_ratio: round_to(area_ratio, 6),
        center_distance_norm: round_to(center_distance_norm, 4),
        note: COARSE_METRIC_NOTE.to_string(),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn random_rect(rng: &mut impl Rng) -> RawRect {
        RawRect::new(
            rng.random_range(-300..300),
            rng.random_range(-300..300),
            rng.random_range(0..400),
            rng.random_range(0..400),
        )
    }

    fn random_dims(rng: &mut impl Rng) -> ImageDimensions {
        ImageDimensions::new(rng.random_range(1..300), rng.random_range(1..300))
    }

    #[test]
    fn test_clamp_inside_image() {
        let dims = ImageDimensions::new(200, 100);
        let bbox = clamp_rect(RawRect::new(10, 10, 50, 30), dims).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                x1: 10,
                y1: 10,
                x2: 60,
                y2: 40
            }
        );
    }

    #[test]
    fn test_clamp_overhanging_rect() {
        let dims = ImageDimensions::new(100, 100);
        let bbox = clamp_rect(RawRect::new(-20, -5, 500, 500), dims).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                x1: 0,
                y1: 0,
                x2: 99,
                y2: 99
            }
        );
    }

    #[test]
    fn test_clamp_rejects_zero_size() {
        let dims = ImageDimensions::new(100, 100);
        assert_eq!(clamp_rect(RawRect::new(10, 10, 0, 30), dims), None);
        assert_eq!(clamp_rect(RawRect::new(10, 10, 30, 0), dims), None);
        assert_eq!(clamp_rect(RawRect::new(10, 10, 0, 0), dims), None);
    }

    #[test]
    fn test_clamp_rejects_rect_outside_image() {
        let dims = ImageDimensions::new(100, 100);
        assert_eq!(clamp_rect(RawRect::new(150, 10, 20, 20), dims), None);
        assert_eq!(clamp_rect(RawRect::new(-50, 10, 20, 20), dims), None);
        assert_eq!(clamp_rect(RawRect::new(99, 10, 20, 20), dims), None);
    }

    #[test]
    fn test_clamp_negative_size_is_degenerate() {
        let dims = ImageDimensions::new(100, 100);
        assert_eq!(clamp_rect(RawRect::new(50, 50, -10, 20), dims), None);
    }

    #[test]
    fn test_clamp_single_pixel_wide_image() {
        let dims = ImageDimensions::new(100, 1);
        assert_eq!(clamp_rect(RawRect::new(0, 0, 10, 10), dims), None);
    }

    #[test]
    fn test_clamp_extreme_values_do_not_overflow() {
        let dims = ImageDimensions::new(10, 10);
        let bbox = clamp_rect(RawRect::new(0, 0, i64::MAX, i64::MAX), dims).unwrap();
        assert_eq!((bbox.x2, bbox.y2), (9, 9));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let dims = random_dims(&mut rng);
            let raw = random_rect(&mut rng);
            if let Some(once) = clamp_rect(raw, dims) {
                assert_eq!(clamp_rect(RawRect::from(once), dims), Some(once));
            }
        }
    }

    #[test]
    fn test_clamp_respects_bounds() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let dims = random_dims(&mut rng);
            if let Some(bbox) = clamp_rect(random_rect(&mut rng), dims) {
                assert!(bbox.x1 < bbox.x2 && bbox.x2 <= dims.width - 1);
                assert!(bbox.y1 < bbox.y2 && bbox.y2 <= dims.height - 1);
            }
        }
    }

    #[test]
    fn test_metrics_concrete_scenario() {
        let dims = ImageDimensions::new(200, 100);
        let bbox = clamp_rect(RawRect::new(10, 10, 50, 30), dims).unwrap();
        let metrics = compute_metrics(dims, bbox);

        assert_eq!(metrics.bbox_width_px, 50);
        assert_eq!(metrics.bbox_height_px, 30);
        assert_eq!(metrics.area_px, 1500);
        assert!(approx_eq(metrics.area_ratio, 0.075));
        // center (35, 25) vs image center (50, 100): sqrt(5850) / sqrt(12500)
        assert!(approx_eq(metrics.center_distance_norm, 0.6841));
        assert_eq!(metrics.note, COARSE_METRIC_NOTE);
    }

    #[test]
    fn test_centered_box_has_zero_distance() {
        let dims = ImageDimensions::new(100, 100);
        let bbox = clamp_rect(RawRect::new(25, 25, 50, 50), dims).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                x1: 25,
                y1: 25,
                x2: 75,
                y2: 75
            }
        );
        assert_eq!(compute_metrics(dims, bbox).center_distance_norm, 0.0);
    }

    #[test]
    fn test_area_ratio_rounds_to_six_places() {
        let dims = ImageDimensions::new(7, 7);
        let bbox = clamp_rect(RawRect::new(0, 0, 1, 1), dims).unwrap();
        let metrics = compute_metrics(dims, bbox);
        // 1 / 49 = 0.020408163...
        assert!(approx_eq(metrics.area_ratio, 0.020408));
    }

    #[test]
    fn test_metrics_stay_in_range() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let dims = random_dims(&mut rng);
            if let Some(bbox) = clamp_rect(random_rect(&mut rng), dims) {
                let metrics = compute_metrics(dims, bbox);
                assert!((0.0..=1.0).contains(&metrics.area_ratio));
                assert!(metrics.center_distance_norm >= 0.0);
                assert!(metrics.center_distance_norm <= 1.0);
            }
        }
    }

    #[test]
    fn test_zero_area_image_is_guarded() {
        let dims = ImageDimensions::new(0, 0);
        let bbox = BoundingBox {
            x1: 0,
            y1: 0,
            x2: 1,
            y2: 1,
        };
        let metrics = compute_metrics(dims, bbox);
        assert_eq!(metrics.area_ratio, 0.0);
        assert_eq!(metrics.center_distance_norm, 0.0);
    }
}
