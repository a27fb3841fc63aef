// SPDX-License-Identifier: MPL-2.0
//! Camera capture port definition.
//!
//! This module defines the platform boundary for camera access:
//!
//! - [`MediaDevices`]: acquires a video-only [`MediaStream`] (blocking, fallible)
//! - [`MediaTrack`]: one capture component that must be stopped explicitly
//! - [`MediaStream`]: owns its tracks and the receiving end of their frames
//!
//! # Release Guarantee
//!
//! A [`MediaStream`] stops each of its tracks exactly once: either through
//! [`MediaStream::stop`] or, if the stream is dropped without that call, from
//! its `Drop` implementation. Tracks are drained as they are stopped, so no
//! path can stop the same track twice.

use crate::domain::camera::{CameraFrame, TrackId, TrackKind, VideoConstraints};
use crate::error::CameraError;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

/// Events delivered by a running capture.
#[derive(Debug, Clone)]
pub enum CaptureEvent {
    /// A new frame is ready for display.
    Frame(CameraFrame),
    /// The capture ended on its own. Carries the reason when it failed.
    Ended(Option<String>),
}

/// Receiving end of a stream's capture events.
pub type CaptureReceiver = mpsc::Receiver<CaptureEvent>;

/// Sending end handed to capture workers.
pub type CaptureSender = mpsc::Sender<CaptureEvent>;

/// One capture component of a stream.
///
/// # Thread Safety
///
/// Implementations must be `Send`; the stream that owns them may be created
/// on a blocking thread and released on the UI thread.
pub trait MediaTrack: Send + fmt::Debug {
    /// Returns the track's unique identifier.
    fn id(&self) -> TrackId;

    /// Returns the media kind of this track.
    fn kind(&self) -> TrackKind;

    /// Human-readable device label.
    fn label(&self) -> &str;

    /// Stops the track and releases the underlying device.
    ///
    /// Must return without waiting for in-flight frames.
    fn stop(&mut self);
}

/// Port for acquiring camera streams.
///
/// # Example
///
/// ```ignore
/// use emotion_lens::application::port::MediaDevices;
/// use emotion_lens::domain::camera::VideoConstraints;
///
/// fn preview(devices: &dyn MediaDevices) {
///     match devices.open_video(&VideoConstraints::default()) {
///         Ok(stream) => println!("{} track(s)", stream.track_count()),
///         Err(e) => eprintln!("camera unavailable: {e}"),
///     }
/// }
/// ```
pub trait MediaDevices: Send + Sync {
    /// Opens a video-only capture stream.
    ///
    /// This call may block while the platform opens the device or prompts
    /// for permission; run it off the UI thread.
    ///
    /// # Errors
    ///
    /// Returns a [`CameraError`] if permission is denied, no device exists,
    /// or the device cannot be opened.
    fn open_video(&self, constraints: &VideoConstraints) -> Result<MediaStream, CameraError>;
}

/// An acquired capture session: its tracks plus their event channel.
pub struct MediaStream {
    tracks: Vec<Box<dyn MediaTrack>>,
    events: Option<CaptureReceiver>,
}

impl MediaStream {
    /// Creates a stream from its tracks and the receiver their workers feed.
    #[must_use]
    pub fn new(tracks: Vec<Box<dyn MediaTrack>>, events: CaptureReceiver) -> Self {
        Self {
            tracks,
            events: Some(events),
        }
    }

    /// Returns the number of tracks not yet stopped.
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Returns the label of the first video track, if any.
    #[must_use]
    pub fn video_label(&self) -> Option<&str> {
        self.tracks
            .iter()
            .find(|track| track.kind() == TrackKind::Video)
            .map(|track| track.label())
    }

    /// Takes the capture event receiver. Returns `None` after the first call.
    pub fn take_events(&mut self) -> Option<CaptureReceiver> {
        self.events.take()
    }

    /// Stops every track and consumes the stream.
    ///
    /// Returns the number of tracks that were stopped.
    pub fn stop(mut self) -> usize {
        self.stop_tracks()
    }

    fn stop_tracks(&mut self) -> usize {
        let mut stopped = 0;
        for mut track in self.tracks.drain(..) {
            track.stop();
            tracing::debug!(track = ?track.id(), kind = ?track.kind(), "track stopped");
            stopped += 1;
        }
        stopped
    }
}

impl Drop for MediaStream {
    fn drop(&mut self) {
        let leaked = self.stop_tracks();
        if leaked > 0 {
            tracing::debug!(tracks = leaked, "stopped camera tracks on drop");
        }
    }
}

impl fmt::Debug for MediaStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaStream")
            .field("tracks", &self.tracks)
            .field("has_events", &self.events.is_some())
            .finish()
    }
}

/// A stream travelling through the message loop.
///
/// Iced messages must be `Clone`, a [`MediaStream`] cannot be. The stream is
/// parked in a shared slot and claimed exactly once with [`take`]. If nobody
/// claims it, dropping the last clone drops the stream, which stops its
/// tracks.
///
/// [`take`]: AcquiredStream::take
#[derive(Clone)]
pub struct AcquiredStream(Arc<Mutex<Option<MediaStream>>>);

impl AcquiredStream {
    #[must_use]
    pub fn new(stream: MediaStream) -> Self {
        Self(Arc::new(Mutex::new(Some(stream))))
    }

    /// Claims the stream. Later calls return `None`.
    pub fn take(&self) -> Option<MediaStream> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl fmt::Debug for AcquiredStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let claimed = self
            .0
            .lock()
            .map(|slot| slot.is_none())
            .unwrap_or(true);
        f.debug_struct("AcquiredStream")
            .field("claimed", &claimed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct CountingTrack {
        id: TrackId,
        stops: Arc<AtomicUsize>,
    }

    impl MediaTrack for CountingTrack {
        fn id(&self) -> TrackId {
            self.id
        }

        fn kind(&self) -> TrackKind {
            TrackKind::Video
        }

        fn label(&self) -> &str {
            "counting"
        }

        fn stop(&mut self) {
            self.stops.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn stream_with(count: usize) -> (MediaStream, Vec<Arc<AtomicUsize>>) {
        let counters: Vec<_> = (0..count).map(|_| Arc::new(AtomicUsize::new(0))).collect();
        let tracks = counters
            .iter()
            .map(|stops| {
                Box::new(CountingTrack {
                    id: TrackId::new(),
                    stops: Arc::clone(stops),
                }) as Box<dyn MediaTrack>
            })
            .collect();
        let (_tx, rx) = mpsc::channel(1);
        (MediaStream::new(tracks, rx), counters)
    }

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaDevices) {}

    #[test]
    fn stop_stops_each_track_once() {
        let (stream, counters) = stream_with(3);
        assert_eq!(stream.stop(), 3);
        for stops in counters {
            assert_eq!(stops.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn drop_stops_unreleased_tracks() {
        let (stream, counters) = stream_with(2);
        drop(stream);
        for stops in counters {
            assert_eq!(stops.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn take_events_is_single_shot() {
        let (mut stream, _counters) = stream_with(1);
        assert!(stream.take_events().is_some());
        assert!(stream.take_events().is_none());
    }

    #[test]
    fn acquired_stream_is_claimed_once() {
        let (stream, counters) = stream_with(1);
        let acquired = AcquiredStream::new(stream);
        let clone = acquired.clone();

        let claimed = clone.take().expect("first claim succeeds");
        assert!(acquired.take().is_none());

        claimed.stop();
        assert_eq!(counters[0].load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unclaimed_acquired_stream_releases_on_drop() {
        let (stream, counters) = stream_with(1);
        let acquired = AcquiredStream::new(stream);
        let clone = acquired.clone();
        drop(acquired);
        assert_eq!(counters[0].load(Ordering::SeqCst), 0);
        drop(clone);
        assert_eq!(counters[0].load(Ordering::SeqCst), 1);
    }
}
