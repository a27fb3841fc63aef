// SPDX-License-Identifier: MPL-2.0
//! Media lifecycle controller.
//!
//! The controller owns the [`VideoState`] and is the only place a camera
//! handle is created or destroyed. It performs no I/O itself: enabling
//! returns an [`AcquireRequest`] the caller runs off the UI thread, and the
//! result comes back through [`CameraController::complete`].

use std::mem;

use super::{CameraHandle, VideoState};
use crate::application::port::{CaptureReceiver, MediaStream};
use crate::domain::camera::{RequestId, VideoConstraints};
use crate::error::CameraError;

/// An acquisition the caller must perform and report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquireRequest {
    pub id: RequestId,
    pub constraints: VideoConstraints,
}

/// Outcome of feeding an acquisition result to the controller.
#[derive(Debug)]
pub enum Completion {
    /// The stream is now the active session.
    Bound {
        request: RequestId,
        tracks: usize,
        /// Frame events of the new session, to be drained by the caller.
        events: Option<CaptureReceiver>,
    },
    /// The outstanding acquisition failed; the state is now `Failed`.
    Failed {
        request: RequestId,
        reason: CameraError,
    },
    /// Nobody waits for this request anymore. `stopped` counts the tracks
    /// of the stream it carried, already stopped; `None` for a late error.
    Stale {
        request: RequestId,
        stopped: Option<usize>,
    },
}

/// An active session that was just released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Released {
    pub request: RequestId,
    pub tracks: usize,
}

#[derive(Debug, Default)]
pub struct CameraController {
    state: VideoState,
    last_request: RequestId,
    constraints: VideoConstraints,
}

impl CameraController {
    #[must_use]
    pub fn new(constraints: VideoConstraints) -> Self {
        Self {
            state: VideoState::Off,
            last_request: RequestId::ZERO,
            constraints,
        }
    }

    #[must_use]
    pub fn state(&self) -> &VideoState {
        &self.state
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    #[must_use]
    pub fn handle(&self) -> Option<&CameraHandle> {
        self.state.handle()
    }

    /// Id of the session currently bound, if frames should be accepted.
    #[must_use]
    pub fn active_request(&self) -> Option<RequestId> {
        self.state.handle().map(CameraHandle::request)
    }

    #[must_use]
    pub fn constraints(&self) -> &VideoConstraints {
        &self.constraints
    }


    /// Turns video on.
    ///
    /// Returns `None` when an acquisition is already outstanding or a
    /// session is active, so at most one stream ever exists.
    pub fn enable(&mut self) -> Option<AcquireRequest> {
        if self.state.is_enabled() {
            return None;
        }
        self.last_request = self.last_request.next();
        self.state = VideoState::Requesting {
            request: self.last_request,
        };
        Some(AcquireRequest {
            id: self.last_request,
            constraints: self.constraints.clone(),
        })
    }

    /// Turns video off.
    ///
    /// An active session is stopped synchronously and reported. An
    /// outstanding request is abandoned; its completion will be stale.
    /// `Failed` falls back to `Off`.
    pub fn disable(&mut self) -> Option<Released> {
        match mem::take(&mut self.state) {
            VideoState::Active(handle) => Some(release(handle)),
            VideoState::Requesting { request } => {
                tracing::debug!(%request, "camera request abandoned");
                None
            }
            VideoState::Off | VideoState::Failed { .. } => None,
        }
    }

    /// Flips the video flag. Returns the acquisition to run, if any, and
    /// the session released, if any.
    pub fn toggle(&mut self) -> (Option<AcquireRequest>, Option<Released>) {
        if self.state.is_enabled() {
            (None, self.disable())
        } else {
            (self.enable(), None)
        }
    }

    /// Feeds back the result of an acquisition.
    pub fn complete(
        &mut self,
        request: RequestId,
        result: Result<MediaStream, CameraError>,
    ) -> Completion {
        let outstanding = matches!(
            self.state,
            VideoState::Requesting { request: pending } if pending == request
        );

        if !outstanding {
            let stopped = result.ok().map(MediaStream::stop);
            return Completion::Stale { request, stopped };
        }

        match result {
            Ok(mut stream) => {
                let events = stream.take_events();
                let handle = CameraHandle::new(request, stream);
                let tracks = handle.track_count();
                self.state = VideoState::Active(handle);
                Completion::Bound {
                    request,
                    tracks,
                    events,
                }
            }
            Err(reason) => {
                self.state = VideoState::Failed {
                    reason: reason.clone(),
                };
                Completion::Failed { request, reason }
            }
        }
    }

    /// Handles a capture that ended without being asked to.
    ///
    /// Only affects the session `request` belongs to; events of older
    /// sessions are ignored. The session is released and the state moves to
    /// `Failed` with [`CameraError::DeviceLost`].
    pub fn capture_ended(&mut self, request: RequestId, reason: Option<String>) -> Option<Released> {
        if self.active_request() != Some(request) {
            return None;
        }
        let VideoState::Active(handle) = mem::take(&mut self.state) else {
            return None;
        };
        let released = release(handle);
        self.state = VideoState::Failed {
            reason: CameraError::DeviceLost(reason.unwrap_or_else(|| "stream ended".to_string())),
        };
        Some(released)
    }

    /// Releases everything before the application exits.
    pub fn shutdown(&mut self) -> Option<Released> {
        self.disable()
    }
}

fn release(handle: CameraHandle) -> Released {
    let request = handle.request();
    let tracks = handle.release();
    tracing::debug!(%request, tracks, "camera released");
    Released { request, tracks }
}
