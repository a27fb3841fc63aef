// SPDX-License-Identifier: MPL-2.0
//! Camera lifecycle: the video state machine and the session it owns.
//!
//! ```text
//! Off --enable--> Requesting(id) --ok(id)--> Active(id, handle) --disable--> Off
//! Requesting(id) --err(id)--> Failed(reason) --enable--> Requesting(id+1)
//! Requesting(id) --disable--> Off        (late completion for id is stale)
//! ```

mod controller;
mod handle;

pub use controller::{AcquireRequest, CameraController, Completion, Released};
pub use handle::CameraHandle;

use crate::domain::camera::RequestId;
use crate::error::CameraError;

/// What the video side of the UI is doing.
///
/// A camera handle only exists inside `Active`, so "video on but nothing
/// acquired" and "video off but camera held" cannot be represented.
#[derive(Debug, Default)]
pub enum VideoState {
    #[default]
    Off,
    /// Waiting for the platform to open the device.
    Requesting { request: RequestId },
    /// Frames are flowing.
    Active(CameraHandle),
    /// The last acquisition failed. No handle exists.
    Failed { reason: CameraError },
}

impl VideoState {
    /// Whether the user currently wants video on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self, VideoState::Requesting { .. } | VideoState::Active(_))
    }

    #[must_use]
    pub fn handle(&self) -> Option<&CameraHandle> {
        match self {
            VideoState::Active(handle) => Some(handle),
            _ => None,
        }
    }

    /// The request this state belongs to, if any.
    #[must_use]
    pub fn request(&self) -> Option<RequestId> {
        match self {
            VideoState::Requesting { request } => Some(*request),
            VideoState::Active(handle) => Some(handle.request()),
            VideoState::Off | VideoState::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&CameraError> {
        match self {
            VideoState::Failed { reason } => Some(reason),
            _ => None,
        }
    }
}
