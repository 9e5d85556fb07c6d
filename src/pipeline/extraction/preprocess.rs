use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, ImageFormat};

use super::ExtractionError;

/// Maximum input image size (in bytes) before rejecting.
/// Prevents OOM on corrupt/adversarial files.
const MAX_IMAGE_BYTES: usize = 50 * 1024 * 1024;

/// Minimum valid image size in bytes (smallest valid PNG is ~67 bytes).
const MIN_IMAGE_BYTES: usize = 67;

/// Scans below this dimension are upscaled 2x before OCR.
const MIN_OCR_DIMENSION: u32 = 1000;

/// Prepare a scanned report image for OCR: decode, grayscale, upscale
/// small scans, stretch contrast, re-encode as lossless PNG.
pub fn preprocess_image(image_bytes: &[u8]) -> Result<Vec<u8>, ExtractionError> {
    if image_bytes.len() < MIN_IMAGE_BYTES {
        return Err(ExtractionError::ImageProcessing(
            "image too small to be valid".into(),
        ));
    }
    if image_bytes.len() > MAX_IMAGE_BYTES {
        return Err(ExtractionError::ImageProcessing(format!(
            "image exceeds {} byte limit",
            MAX_IMAGE_BYTES
        )));
    }

    let img = image::load_from_memory(image_bytes)
        .map_err(|e| ExtractionError::ImageProcessing(e.to_string()))?;

    let mut gray = img.to_luma8();

    // Low-resolution phone photos OCR poorly; upscale before thresholding
    let (w, h) = gray.dimensions();
    if w.max(h) < MIN_OCR_DIMENSION {
        gray = image::imageops::resize(&gray, w * 2, h * 2, FilterType::Lanczos3);
    }

    stretch_contrast(&mut gray);

    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(gray)
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(|e| ExtractionError::ImageProcessing(e.to_string()))?;

    Ok(buf.into_inner())
}

/// Linear contrast stretch over the full luma range.
/// Flat images (single gray level) are left untouched.
fn stretch_contrast(gray: &mut GrayImage) {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for p in gray.pixels() {
        min = min.min(p.0[0]);
        max = max.max(p.0[0]);
    }

    if max <= min {
        return;
    }

    let range = (max - min) as f32;
    for p in gray.pixels_mut() {
        let v = (p.0[0] - min) as f32 / range;
        p.0[0] = (v * 255.0).round() as u8;
    }
}
