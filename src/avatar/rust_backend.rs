//! Pure Rust avatar backend — zero external dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Decode (JPEG, PNG, WebP)** | `image` crate (pure Rust decoders) |
//! | **Resize** | `image::imageops` with `Lanczos3` filter |
//! | **Composite** | `image::imageops::overlay` onto a white canvas |
//! | **Encode → JPEG** | `image::codecs::jpeg::JpegEncoder` |
//!
//! Rendering is fully deterministic: the same source, plan, and quality
//! always produce byte-identical output.

use super::backend::{AvatarBackend, BackendError, CenterCropParams, Dimensions, RenderParams};
use super::geometry::center_crop_rect;
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageReader, Rgb, RgbImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Encode an RGB raster as JPEG, returning the bytes.
fn encode_jpeg(img: &RgbImage, quality: u8) -> Result<Vec<u8>, BackendError> {
    let mut buffer = Vec::new();
    let mut encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
    encoder
        .encode(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| BackendError::ProcessingFailed(format!("JPEG encode failed: {}", e)))?;
    Ok(buffer)
}

impl AvatarBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to read dimensions: {}", e))
        })?;
        Ok(Dimensions { width, height })
    }

    fn render(&self, params: &RenderParams) -> Result<Vec<u8>, BackendError> {
        let plan = params.plan;
        if plan.draw_width == 0 || plan.draw_height == 0 {
            return Err(BackendError::ProcessingFailed(
                "Draw area is empty".to_string(),
            ));
        }

        let img = load_image(&params.source)?;
        let resized = img
            .resize_exact(plan.draw_width, plan.draw_height, FilterType::Lanczos3)
            .to_rgb8();

        // White underlay: no transparent holes when the image doesn't cover
        // the whole square. overlay() clips negative origins.
        let mut canvas = RgbImage::from_pixel(
            params.output_side,
            params.output_side,
            Rgb([255, 255, 255]),
        );
        image::imageops::overlay(&mut canvas, &resized, plan.origin_x, plan.origin_y);

        encode_jpeg(&canvas, params.quality)
    }

    fn center_crop(&self, params: &CenterCropParams) -> Result<Vec<u8>, BackendError> {
        let img = load_image(&params.source)?;
        let (x, y, side) = center_crop_rect((img.width(), img.height()));
        if side == 0 {
            return Err(BackendError::ProcessingFailed(
                "Source image is empty".to_string(),
            ));
        }

        let square = img
            .crop_imm(x, y, side, side)
            .resize_exact(params.output_side, params.output_side, FilterType::Lanczos3)
            .to_rgb8();

        encode_jpeg(&square, params.quality)
    }
}
