//! Avatar rendering backend trait and shared types.
//!
//! The [`AvatarBackend`] trait defines the three operations every backend
//! must support: identify, render, and center_crop.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, zero
//! external dependencies. Everything is statically linked into the binary.

use super::geometry::RenderPlan;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Full specification for a render: source, placement, output geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub source: PathBuf,
    pub plan: RenderPlan,
    pub output_side: u32,
    /// JPEG quality, 1–100.
    pub quality: u8,
}

/// Full specification for the center-crop fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterCropParams {
    pub source: PathBuf,
    pub output_side: u32,
    pub quality: u8,
}

/// Trait for avatar processing backends.
///
/// Every backend must implement all three operations so the editing session
/// and the CLI are backend-agnostic.
pub trait AvatarBackend {
    /// Get image dimensions without a full decode.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Composite the source per the plan onto an opaque white square and
    /// encode it. Returns the JPEG bytes.
    fn render(&self, params: &RenderParams) -> Result<Vec<u8>, BackendError>;

    /// Crop the largest centered square and encode it at the output side.
    fn center_crop(&self, params: &CenterCropParams) -> Result<Vec<u8>, BackendError>;
}
