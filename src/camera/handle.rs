// SPDX-License-Identifier: MPL-2.0
//! Ownership token for an active capture session.

use crate::application::port::MediaStream;
use crate::domain::camera::RequestId;

/// The live camera session of one `Active` interval.
///
/// Dropping the handle drops its [`MediaStream`], which stops any track not
/// already stopped. Calling [`release`] does the same eagerly and reports
/// how many tracks were stopped.
///
/// [`release`]: CameraHandle::release
#[derive(Debug)]
pub struct CameraHandle {
    request: RequestId,
    label: String,
    stream: MediaStream,
}

impl CameraHandle {
    pub(crate) fn new(request: RequestId, stream: MediaStream) -> Self {
        let label = stream.video_label().unwrap_or("camera").to_string();
        Self {
            request,
            label,
            stream,
        }
    }

    /// Acquisition attempt this session came from.
    #[must_use]
    pub fn request(&self) -> RequestId {
        self.request
    }

    /// Device label reported by the capture backend.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn track_count(&self) -> usize {
        self.stream.track_count()
    }

    /// Stops every track. Returns the number stopped.
    pub fn release(self) -> usize {
        self.stream.stop()
    }
}
