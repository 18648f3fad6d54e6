//! The avatar editing session, from file pick to saved output.
//!
//! A session moves through a small lifecycle:
//!
//! ```text
//! Loading ──decode ok──▶ Ready ──save ok──▶ Saved (terminal)
//!    │                    │ ▲
//!    │                    │ └── save failed (recoverable)
//!    └──────cancel────────┴──────────────▶ Cancelled (terminal)
//! ```
//!
//! While loading, the session is inert: gestures are dropped and nothing
//! reads the (unknown) source dimensions. A failed decode keeps the session
//! in Loading — the caller owns any timeout or cancel affordance. A failed
//! save keeps the session editable; no partial output is ever emitted.

use super::backend::{AvatarBackend, BackendError, Dimensions, RenderParams};
use super::geometry::{CropState, plan_render};
use super::gesture::{EditorState, GestureEvent};
use super::{JPEG_QUALITY, OUTPUT_SIDE};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    /// The source hasn't finished decoding, so there is nothing to edit yet.
    #[error("image not ready")]
    NotReady,
    /// The session was cancelled or already saved.
    #[error("session closed")]
    Closed,
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// The finished square JPEG, ready for multipart upload.
///
/// Immutable once produced; saving again produces a new instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarOutput {
    jpeg: Vec<u8>,
}

impl AvatarOutput {
    pub fn as_bytes(&self) -> &[u8] {
        &self.jpeg
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.jpeg
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, &self.jpeg)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Loading,
    Ready {
        dims: Dimensions,
        editor: EditorState,
    },
    Saved,
    Cancelled,
}

/// One avatar editing session over a single source image.
pub struct EditSession<'a, B: AvatarBackend> {
    backend: &'a B,
    source: PathBuf,
    phase: Phase,
}

impl<'a, B: AvatarBackend> EditSession<'a, B> {
    /// Start a session for `source`. The session stays inert until
    /// [`load`](Self::load) succeeds.
    pub fn new(backend: &'a B, source: &Path) -> Self {
        Self {
            backend,
            source: source.to_path_buf(),
            phase: Phase::Loading,
        }
    }

    /// Attempt to decode the source's dimensions. On success the session
    /// becomes editable with a fresh identity transform. On failure it
    /// stays in Loading and may be retried or cancelled.
    pub fn load(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Loading => {
                let dims = self.backend.identify(&self.source)?;
                self.phase = Phase::Ready {
                    dims,
                    editor: EditorState::new(),
                };
                Ok(())
            }
            Phase::Ready { .. } => Ok(()),
            Phase::Saved | Phase::Cancelled => Err(SessionError::Closed),
        }
    }

    /// Swap in a different source. Any previous decode and edits are
    /// released and the session goes back to Loading.
    pub fn replace_source(&mut self, source: &Path) -> Result<(), SessionError> {
        match self.phase {
            Phase::Saved | Phase::Cancelled => Err(SessionError::Closed),
            _ => {
                self.source = source.to_path_buf();
                self.phase = Phase::Loading;
                Ok(())
            }
        }
    }

    /// Feed one gesture event. Dropped silently unless the session is Ready.
    pub fn apply(&mut self, event: GestureEvent) {
        if let Phase::Ready { editor, .. } = &mut self.phase {
            *editor = editor.apply(event);
        }
    }

    /// Current transform, once editable.
    pub fn crop(&self) -> Option<CropState> {
        match &self.phase {
            Phase::Ready { editor, .. } => Some(editor.crop),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.phase, Phase::Cancelled)
    }

    /// Render the current crop into the final output.
    ///
    /// Success closes the session. Failure leaves it in Ready so the user
    /// can adjust and retry.
    pub fn save(&mut self) -> Result<AvatarOutput, SessionError> {
        let (dims, crop) = match &self.phase {
            Phase::Ready { dims, editor } => (*dims, editor.crop),
            Phase::Loading => return Err(SessionError::NotReady),
            Phase::Saved | Phase::Cancelled => return Err(SessionError::Closed),
        };

        let params = RenderParams {
            source: self.source.clone(),
            plan: plan_render((dims.width, dims.height), crop, OUTPUT_SIDE),
            output_side: OUTPUT_SIDE,
            quality: JPEG_QUALITY,
        };
        let jpeg = self.backend.render(&params)?;
        self.phase = Phase::Saved;
        Ok(AvatarOutput { jpeg })
    }

    /// Abandon the session. Valid while loading or editing; emits nothing.
    pub fn cancel(&mut self) {
        if !matches!(self.phase, Phase::Saved) {
            self.phase = Phase::Cancelled;
        }
    }
}
