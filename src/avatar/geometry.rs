//! Pure placement math for the crop transform.
//!
//! All functions here are pure and testable without decoding any pixels.

use super::{SCALE_MAX, SCALE_MIN};

/// User-controlled pan/zoom state.
///
/// `scale` is clamped to the zoom range on every construction; `offset` is
/// an unconstrained translation in output-space units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropState {
    pub scale: f64,
    pub offset: (f64, f64),
}

impl CropState {
    pub fn new(scale: f64, offset: (f64, f64)) -> Self {
        Self {
            scale: scale.clamp(SCALE_MIN, SCALE_MAX),
            offset,
        }
    }

    /// The state a fresh editing session starts in.
    pub fn identity() -> Self {
        Self {
            scale: 1.0,
            offset: (0.0, 0.0),
        }
    }

    /// Multiply the zoom by `factor`, clamped.
    pub fn zoomed(self, factor: f64) -> Self {
        Self::new(self.scale * factor, self.offset)
    }

    /// Replace the zoom, clamped.
    pub fn with_scale(self, scale: f64) -> Self {
        Self::new(scale, self.offset)
    }

    /// Replace the translation.
    pub fn panned_to(self, offset: (f64, f64)) -> Self {
        Self {
            offset,
            ..self
        }
    }
}

impl Default for CropState {
    fn default() -> Self {
        Self::identity()
    }
}

/// Where and how large the source draws inside the square output.
///
/// The origin may be negative — the image then overflows the output and is
/// clipped at composite time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPlan {
    pub draw_width: u32,
    pub draw_height: u32,
    pub origin_x: i64,
    pub origin_y: i64,
}

/// Compute the draw placement for a source of `(width, height)` under `crop`.
///
/// At identity the image's shorter side exactly fills the output square and
/// the image is centered. Zoom scales around the output center; the offset
/// then shifts that center. The math depends only on the output side, never
/// on the preview's pixel size, so preview and saved output always agree.
pub fn plan_render(source: (u32, u32), crop: CropState, output_side: u32) -> RenderPlan {
    let (width, height) = source;
    // min(1) keeps the math finite for degenerate sources.
    let short_side = width.min(height).max(1);

    let base_scale = output_side as f64 / short_side as f64;
    let final_scale = base_scale * crop.scale;

    let draw_width = width as f64 * final_scale;
    let draw_height = height as f64 * final_scale;

    let center_x = output_side as f64 / 2.0 + crop.offset.0;
    let center_y = output_side as f64 / 2.0 + crop.offset.1;

    RenderPlan {
        draw_width: draw_width.round() as u32,
        draw_height: draw_height.round() as u32,
        origin_x: (center_x - draw_width / 2.0).round() as i64,
        origin_y: (center_y - draw_height / 2.0).round() as i64,
    }
}

/// Largest centered square of the source: `(x, y, side)`.
///
/// The no-gesture fallback crop, equivalent to rendering at identity.
pub fn center_crop_rect(source: (u32, u32)) -> (u32, u32, u32) {
    let (width, height) = source;
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}
