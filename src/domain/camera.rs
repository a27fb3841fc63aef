// SPDX-License-Identifier: MPL-2.0
//! Capture session value types.
//!
//! These types describe camera acquisition attempts and the frames they
//! produce, without referring to any capture backend.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

// =============================================================================
// RequestId
// =============================================================================

/// Tag of one camera acquisition attempt.
///
/// Identifiers are issued in strictly increasing order by the lifecycle
/// controller. A completion whose id differs from the latest outstanding
/// request is stale and must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestId(u64);

impl RequestId {
    /// The id that precedes every issued request.
    pub const ZERO: RequestId = RequestId(0);

    /// Returns the id following this one. Saturates at `u64::MAX`, which
    /// a session cannot reach.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Tracks
// =============================================================================

/// Process-unique identifier of a capture track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackId(u64);

impl TrackId {
    /// Allocates a new unique track ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TrackId {
    fn default() -> Self {
        Self::new()
    }
}

/// Media kind carried by a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Video,
}

// =============================================================================
// VideoConstraints
// =============================================================================

/// What the caller asks of a video-only acquisition.
///
/// Every field is a preference; the platform decides what it can honor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoConstraints {
    /// Backend-specific device locator (e.g. `/dev/video0`). `None` selects
    /// the platform default device.
    pub device: Option<String>,
    /// Capture backend name override (e.g. `v4l2`, `avfoundation`).
    pub input_format: Option<String>,
    /// Requested frame width in pixels.
    pub width: Option<u32>,
    /// Requested frame height in pixels.
    pub height: Option<u32>,
    /// Requested frames per second.
    pub framerate: Option<u32>,
}

impl VideoConstraints {
    /// Returns the requested `WIDTHxHEIGHT` size when both sides are set.
    #[must_use]
    pub fn video_size(&self) -> Option<String> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some(format!("{w}x{h}")),
            _ => None,
        }
    }
}

// =============================================================================
// CameraFrame
// =============================================================================

/// One captured frame, converted to tightly packed RGBA.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl CameraFrame {
    /// Creates a frame from packed RGBA pixels.
    ///
    /// Returns `None` if the buffer length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if rgba_bytes.len() != expected_len {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Takes the pixel buffer, copying only if the frame is still shared.
    #[must_use]
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        Arc::unwrap_or_clone(self.rgba_bytes)
    }
}
