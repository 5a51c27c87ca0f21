use image::RgbImage;

use crate::models::{ImageDimensions, RawRect};

/// Size the image is shown at inside a `max_width` x `max_height` canvas.
/// Keeps the aspect ratio and never upscales.
pub fn fit_within(native: ImageDimensions, max_width: u32, max_height: u32) -> (u32, u32) {
    let width = native.width;
    let height = native.height;

    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let ratio = (max_width as f32 / width as f32).min(max_height as f32 / height as f32);

    let new_width = ((width as f32 * ratio) as u32).max(1);
    let new_height = ((height as f32 * ratio) as u32).max(1);

    (new_width, new_height)
}

/// Downscaled copy used for the on-screen texture. Analysis keeps the native image.
pub fn resize_to_limit(img: &RgbImage, max_width: u32, max_height: u32) -> RgbImage {
    let (new_width, new_height) = fit_within(ImageDimensions::of(img), max_width, max_height);

    if (new_width, new_height) == img.dimensions() {
        return img.clone();
    }

    image::imageops::resize(
        img,
        new_width,
        new_height,
        image::imageops::FilterType::Triangle,
    )
}

/// Downscaled copy at most `max_width` wide, for the side panel preview.
pub fn resize_to_width(img: &RgbImage, max_width: u32) -> RgbImage {
    resize_to_limit(img, max_width, u32::MAX)
}

/// Maps a rectangle drawn on the displayed image back to native pixels.
pub fn scale_to_native(
    raw: RawRect,
    display: (f32, f32),
    native: ImageDimensions,
) -> RawRect {
    let (display_width, display_height) = display;
    if display_width <= 0.0 || display_height <= 0.0 {
        return raw;
    }

    let sx = native.width as f64 / display_width as f64;
    let sy = native.height as f64 / display_height as f64;

    RawRect::new(
        (raw.left as f64 * sx).round() as i64,
        (raw.top as f64 * sy).round() as i64,
        (raw.width as f64 * sx).round() as i64,
        (raw.height as f64 * sy).round() as i64,
    )
}
