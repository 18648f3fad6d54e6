//! Avatar crop/zoom transform — pure Rust, zero external dependencies.
//!
//! Turns a user-selected photo plus pan/zoom gestures into a fixed-size
//! square JPEG, the way a profile-photo picker does. The preview viewport
//! and the saved output are decoupled: both run the same placement math,
//! so what the user positions on screen is exactly what gets encoded.
//!
//! The module is split into:
//! - **Geometry**: pure placement math (unit testable, no pixels)
//! - **Gesture**: drag/wheel/pinch events folded into crop state by a reducer
//! - **Session**: the editing lifecycle from file pick to saved output
//! - **Backend**: [`AvatarBackend`] trait + [`RustBackend`]

pub mod backend;
mod geometry;
mod gesture;
pub mod rust_backend;
mod session;

pub use backend::{AvatarBackend, BackendError, CenterCropParams, Dimensions, RenderParams};
pub use geometry::{CropState, RenderPlan, center_crop_rect, plan_render};
pub use gesture::{EditorState, GestureEvent};
pub use rust_backend::RustBackend;
pub use session::{AvatarOutput, EditSession, SessionError};

/// Side of the square output raster, in pixels.
pub const OUTPUT_SIDE: u32 = 512;
/// JPEG encoding quality of the output.
pub const JPEG_QUALITY: u8 = 90;
/// Zoom clamp range.
pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 6.0;
/// Per-notch zoom factor for wheel events.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;
