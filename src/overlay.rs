use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::models::BoundingBox;

pub const STROKE_WIDTH: i32 = 3;
pub const STROKE_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Returns a copy of `image` with the box outline drawn on it.
///
/// The stroke is centered on the boundary pixels, so it reaches one pixel
/// inside and one pixel outside the box, clipped to the image.
pub fn render_overlay(image: &RgbImage, bbox: &BoundingBox) -> RgbImage {
    let mut overlay = image.clone();
    let half = STROKE_WIDTH / 2;

    for offset in -half..=half {
        let left = bbox.x1 as i32 - offset;
        let top = bbox.y1 as i32 - offset;
        // corners are inclusive, so the outline spans width + 1 pixels
        let width = bbox.width() as i32 + 1 + 2 * offset;
        let height = bbox.height() as i32 + 1 + 2 * offset;
        if width <= 0 || height <= 0 {
            continue;
        }
        let rect = Rect::at(left, top).of_size(width as u32, height as u32);
        draw_hollow_rect_mut(&mut overlay, rect, STROKE_COLOR);
    }

    overlay
}
