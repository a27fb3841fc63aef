// SPDX-License-Identifier: MPL-2.0
//! Capture worker: one thread per opened camera.
//!
//! `FFmpeg` contexts are not `Send`, so the device is opened on the worker
//! thread itself and only the open result crosses back to the caller.
//! Decoded frames are converted to RGBA and pushed into a bounded channel;
//! when the UI falls behind, frames are dropped rather than queued.
//!
//! Stopping a track blocks until the worker has closed the device, so the
//! next acquisition never finds it still held.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use tokio::sync::mpsc::{self, error::TrySendError};

use super::find_input_format;
use crate::application::port::{CaptureEvent, CaptureSender, MediaStream, MediaTrack};
use crate::diagnostics::{DiagnosticsHandle, WarningEvent, WarningType};
use crate::domain::camera::{CameraFrame, TrackId, TrackKind};
use crate::error::CameraError;

/// Frames buffered between the worker and the UI.
const FRAME_QUEUE_DEPTH: usize = 2;

/// Back-off when the device has no packet ready yet.
const RETRY_DELAY: Duration = Duration::from_millis(5);

/// Longest wait for a worker to close its device after a stop request.
/// A blocking read returns within one frame period on a healthy device.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(2);

pub(super) struct CaptureSetup {
    pub format_name: String,
    pub device: String,
    pub options: Vec<(&'static str, String)>,
    pub diagnostics: Option<DiagnosticsHandle>,
}

/// Opens the device on a new worker thread and waits for the outcome.
pub(super) fn start(setup: CaptureSetup) -> Result<MediaStream, CameraError> {
    let (event_tx, event_rx) = mpsc::channel(FRAME_QUEUE_DEPTH);
    let (ready_tx, ready_rx) = bounded(1);
    let label = setup.device.clone();

    let worker = spawn_worker(move |stop, closed| {
        run_capture(&setup, stop, closed, &event_tx, &ready_tx);
    })?;

    match ready_rx.recv() {
        Ok(Ok(())) => {
            let track = FfmpegTrack {
                id: TrackId::new(),
                label,
                worker,
            };
            Ok(MediaStream::new(vec![Box::new(track)], event_rx))
        }
        Ok(Err(e)) => Err(e),
        Err(_) => Err(CameraError::Other(
            "capture thread exited during startup".to_string(),
        )),
    }
}

/// Fires when dropped: the worker holds it for as long as the device is
/// open.
struct ClosedSignal(Sender<()>);

impl Drop for ClosedSignal {
    fn drop(&mut self) {
        let _ = self.0.try_send(());
    }
}

/// The owner's side of a capture worker.
#[derive(Debug)]
struct Worker {
    stop: Arc<AtomicBool>,
    closed: Receiver<()>,
}

impl Worker {
    /// Raises the stop flag and waits until the device is closed.
    ///
    /// Returns `false` if the worker did not close it within `timeout`.
    fn stop_and_wait(&self, timeout: Duration) -> bool {
        self.stop.store(true, Ordering::Release);
        match self.closed.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
            Err(RecvTimeoutError::Timeout) => false,
        }
    }
}

/// Runs `work` on a new capture thread. `work` must keep the
/// [`ClosedSignal`] alive until it has released the device.
fn spawn_worker<F>(work: F) -> Result<Worker, CameraError>
where
    F: FnOnce(&AtomicBool, ClosedSignal) + Send + 'static,
{
    let stop = Arc::new(AtomicBool::new(false));
    let (closed_tx, closed_rx) = bounded(1);

    let worker_stop = Arc::clone(&stop);
    thread::Builder::new()
        .name("camera-capture".to_string())
        .spawn(move || work(&worker_stop, ClosedSignal(closed_tx)))
        .map_err(|e| CameraError::Other(format!("cannot start capture thread: {e}")))?;

    Ok(Worker {
        stop,
        closed: closed_rx,
    })
}

/// The single video track of an `FFmpeg` capture.
#[derive(Debug)]
struct FfmpegTrack {
    id: TrackId,
    label: String,
    worker: Worker,
}

impl MediaTrack for FfmpegTrack {
    fn id(&self) -> TrackId {
        self.id
    }

    fn kind(&self) -> TrackKind {
        TrackKind::Video
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn stop(&mut self) {
        // The worker notices between two packets, so this waits for at most
        // one blocking read.
        if self.worker.stop_and_wait(CLOSE_TIMEOUT) {
            tracing::debug!(device = %self.label, "camera device closed");
        } else {
            tracing::warn!(
                device = %self.label,
                timeout = ?CLOSE_TIMEOUT,
                "camera device still open after stop"
            );
        }
    }
}

enum Exit {
    /// Asked to stop, or nobody listens anymore.
    Stopped,
    /// The device failed or ran dry.
    Failed(String),
}

struct OpenedDevice {
    input: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    stream_index: usize,
    // Declared last: fields drop in order, so it fires once `input` is closed.
    _closed: ClosedSignal,
}

fn run_capture(
    setup: &CaptureSetup,
    stop: &AtomicBool,
    closed: ClosedSignal,
    events: &CaptureSender,
    ready: &Sender<Result<(), CameraError>>,
) {
    let device = match open_device(setup, closed) {
        Ok(device) => {
            let _ = ready.send(Ok(()));
            device
        }
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };

    // `pump` consumes the device; it is closed by the time it returns.
    if let Exit::Failed(reason) = pump(device, stop, events, setup.diagnostics.as_ref()) {
        if !stop.load(Ordering::Acquire) {
            tracing::warn!(device = %setup.device, %reason, "camera capture ended");
            let _ = events.blocking_send(CaptureEvent::Ended(Some(reason)));
        }
    }
    tracing::debug!(device = %setup.device, "capture thread finished");
}

fn open_device(setup: &CaptureSetup, closed: ClosedSignal) -> Result<OpenedDevice, CameraError> {
    let format = find_input_format(&setup.format_name).ok_or_else(|| {
        CameraError::Unsupported(format!(
            "capture format '{}' is not available",
            setup.format_name
        ))
    })?;

    let mut options = ffmpeg_next::Dictionary::new();
    for (key, value) in &setup.options {
        options.set(key, value);
    }

    let input = ffmpeg_next::format::open_with(
        &setup.device,
        &ffmpeg_next::Format::Input(format),
        options,
    )
    .map_err(|e| CameraError::from_message(&e.to_string()))?
    .input();

    let stream = input
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(CameraError::DeviceUnavailable)?;
    let stream_index = stream.index();

    let decoder = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
        .and_then(|context| context.decoder().video())
        .map_err(|e| CameraError::Unsupported(format!("no decoder for camera stream: {e}")))?;

    Ok(OpenedDevice {
        input,
        decoder,
        stream_index,
        _closed: closed,
    })
}

fn pump(
    mut device: OpenedDevice,
    stop: &AtomicBool,
    events: &CaptureSender,
    diagnostics: Option<&DiagnosticsHandle>,
) -> Exit {
    let mut converter = RgbaConverter::default();
    let mut conversion_reported = false;
    let mut packet = ffmpeg_next::Packet::empty();
    let mut decoded = ffmpeg_next::frame::Video::empty();

    loop {
        if stop.load(Ordering::Acquire) {
            return Exit::Stopped;
        }

        match packet.read(&mut device.input) {
            Ok(()) => {}
            Err(ffmpeg_next::Error::Other { errno }) if errno == ffmpeg_next::error::EAGAIN => {
                thread::sleep(RETRY_DELAY);
                continue;
            }
            Err(ffmpeg_next::Error::Eof) => return Exit::Failed("end of stream".to_string()),
            Err(e) => return Exit::Failed(e.to_string()),
        }

        if packet.stream() != device.stream_index {
            continue;
        }
        if let Err(e) = device.decoder.send_packet(&packet) {
            tracing::debug!(error = %e, "camera packet rejected");
            continue;
        }

        while device.decoder.receive_frame(&mut decoded).is_ok() {
            let frame = match converter.convert(&decoded) {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::debug!(error = %e, "camera frame conversion failed");
                    // Once per session; a broken format fails on every frame.
                    if !conversion_reported {
                        conversion_reported = true;
                        if let Some(diagnostics) = diagnostics {
                            diagnostics.log_warning(WarningEvent::new(
                                WarningType::CaptureBackend,
                                format!("frame conversion failed: {e}"),
                            ));
                        }
                    }
                    continue;
                }
            };
            match events.try_send(CaptureEvent::Frame(frame)) {
                Ok(()) | Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Closed(_)) => return Exit::Stopped,
            }
        }
    }
}

type ScalerKey = (ffmpeg_next::format::Pixel, u32, u32);

/// Converts decoded frames to packed RGBA, rebuilding the scaler when the
/// source format or size changes.
#[derive(Default)]
struct RgbaConverter {
    scaler: Option<(ScalerKey, ffmpeg_next::software::scaling::Context)>,
}

impl RgbaConverter {
    fn convert(&mut self, frame: &ffmpeg_next::frame::Video) -> Result<CameraFrame, String> {
        let key = (frame.format(), frame.width(), frame.height());
        if self.scaler.as_ref().map(|(current, _)| *current) != Some(key) {
            let context = ffmpeg_next::software::scaling::Context::get(
                key.0,
                key.1,
                key.2,
                ffmpeg_next::format::Pixel::RGBA,
                key.1,
                key.2,
                ffmpeg_next::software::scaling::Flags::BILINEAR,
            )
            .map_err(|e| format!("cannot create scaler: {e}"))?;
            self.scaler = Some((key, context));
        }
        let Some((_, scaler)) = self.scaler.as_mut() else {
            return Err("scaler unavailable".to_string());
        };

        let mut rgba = ffmpeg_next::frame::Video::empty();
        scaler.run(frame, &mut rgba).map_err(|e| e.to_string())?;

        CameraFrame::from_rgba(rgba.width(), rgba.height(), packed_rgba(&rgba))
            .ok_or_else(|| "unexpected RGBA buffer size".to_string())
    }
}

/// Copies an RGBA frame row by row, dropping the stride padding.
fn packed_rgba(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let row_len = frame.width() as usize * 4;
    let stride = frame.stride(0);
    let data = frame.data(0);

    let mut bytes = Vec::with_capacity(row_len * frame.height() as usize);
    for row in data.chunks(stride).take(frame.height() as usize) {
        bytes.extend_from_slice(&row[..row_len]);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MediaDevices;
    use crate::domain::camera::VideoConstraints;
    use crate::infrastructure::ffmpeg::{init_ffmpeg, FfmpegCamera};

    #[test]
    fn packed_rgba_strips_stride_padding() {
        init_ffmpeg().expect("ffmpeg init");
        let mut frame = ffmpeg_next::frame::Video::new(ffmpeg_next::format::Pixel::RGBA, 3, 2);
        let stride = frame.stride(0);
        assert!(stride >= 12);
        for (y, row) in frame.data_mut(0).chunks_mut(stride).take(2).enumerate() {
            row[..12].fill(y as u8 + 1);
        }

        let bytes = packed_rgba(&frame);
        assert_eq!(bytes.len(), 24);
        assert!(bytes[..12].iter().all(|&b| b == 1));
        assert!(bytes[12..].iter().all(|&b| b == 2));
    }

    #[test]
    fn unknown_capture_format_is_unsupported() {
        let constraints = VideoConstraints {
            input_format: Some("no-such-capture-format".to_string()),
            ..VideoConstraints::default()
        };
        let result = FfmpegCamera::new().open_video(&constraints);
        assert!(matches!(result, Err(CameraError::Unsupported(_))));
    }

    /// Stands in for an opened input: cleared when the worker closes it.
    struct FakeDevice {
        open: Arc<AtomicBool>,
        _closed: ClosedSignal,
    }

    impl Drop for FakeDevice {
        fn drop(&mut self) {
            self.open.store(false, Ordering::Release);
        }
    }

    fn track_with(worker: Worker) -> FfmpegTrack {
        FfmpegTrack {
            id: TrackId::new(),
            label: "/dev/video9".to_string(),
            worker,
        }
    }

    #[test]
    fn stop_returns_only_after_device_is_closed() {
        let open = Arc::new(AtomicBool::new(true));
        let device_open = Arc::clone(&open);
        let worker = spawn_worker(move |stop, closed| {
            let device = FakeDevice {
                open: device_open,
                _closed: closed,
            };
            while !stop.load(Ordering::Acquire) {
                thread::sleep(Duration::from_millis(1));
            }
            // A read still in flight when the flag goes up.
            thread::sleep(Duration::from_millis(50));
            drop(device);
        })
        .expect("worker spawned");

        let mut track = track_with(worker);
        track.stop();

        assert!(!open.load(Ordering::Acquire));
        assert_eq!(track.kind(), TrackKind::Video);
    }

    #[test]
    fn stop_returns_when_worker_already_exited() {
        let worker = spawn_worker(|_, _| {}).expect("worker spawned");
        let mut track = track_with(worker);
        track.stop();
        assert!(track.worker.stop.load(Ordering::Acquire));
    }

    #[test]
    fn stop_gives_up_on_a_stuck_worker() {
        let (release_tx, release_rx) = bounded::<()>(1);
        let worker = spawn_worker(move |_, _closed| {
            let _ = release_rx.recv();
        })
        .expect("worker spawned");

        assert!(!worker.stop_and_wait(Duration::from_millis(20)));
        release_tx.send(()).expect("worker waiting");
        assert!(worker.stop_and_wait(Duration::from_secs(2)));
    }
}
