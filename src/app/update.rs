// SPDX-License-Identifier: MPL-2.0
//! Message handlers.
//!
//! Each handler applies one user action or one asynchronous result to the
//! state, records the matching diagnostic entry, and returns the follow-up
//! task, if any.

use super::{App, Message};
use crate::application::port::{AcquiredStream, CaptureEvent, CaptureReceiver, MediaDevices};
use crate::camera::{AcquireRequest, Completion, Released};
use crate::diagnostics::{AppStateEvent, ErrorEvent, ErrorType};
use crate::domain::camera::{RequestId, VideoConstraints};
use crate::error::CameraError;
use crate::ui::notifications::Notification;
use iced::futures::stream;
use iced::{window, Task};
use std::sync::Arc;

/// Toast keys of camera failures share this prefix.
const CAMERA_ERROR_PREFIX: &str = "camera-error-";

impl App {
    pub(super) fn handle_toggle_video(&mut self) -> Task<Message> {
        let (acquire, released) = self.camera.toggle();
        if let Some(released) = released {
            self.on_released(released);
        }
        match acquire {
            Some(request) => self.acquire(request),
            None => Task::none(),
        }
    }

    pub(super) fn handle_toggle_audio(&mut self) {
        let event = self.audio.toggle();
        self.diagnostics.log_state(event);
    }

    pub(super) fn handle_detect_emotion(&mut self) {
        self.emotion = self.emotion_stub.detect();
        self.diagnostics.log_state(AppStateEvent::EmotionDetected {
            label: self.emotion.as_str().to_string(),
        });
    }

    pub(super) fn handle_camera_acquired(
        &mut self,
        request: RequestId,
        result: Result<AcquiredStream, CameraError>,
    ) -> Task<Message> {
        let result = result.and_then(|slot| {
            slot.take()
                .ok_or_else(|| CameraError::Other("stream was already claimed".to_string()))
        });

        match self.camera.complete(request, result) {
            Completion::Bound {
                request,
                tracks,
                events,
            } => {
                self.surface.bind(request);
                self.notifications.clear_matching(CAMERA_ERROR_PREFIX);
                if let Some(handle) = self.camera.handle() {
                    tracing::info!(%request, device = handle.label(), tracks, "camera started");
                }
                self.diagnostics.log_state(AppStateEvent::CameraStarted {
                    request: request.value(),
                    tracks,
                });
                match events {
                    Some(events) => capture_events(request, events),
                    None => Task::none(),
                }
            }
            Completion::Failed { request, reason } => {
                self.surface.unbind();
                self.report_camera_error(ErrorType::CameraAcquisition, &reason);
                tracing::debug!(%request, "camera request failed");
                Task::none()
            }
            Completion::Stale {
                request,
                stopped: Some(tracks),
            } => {
                self.diagnostics
                    .log_state(AppStateEvent::StaleCameraStreamDiscarded {
                        request: request.value(),
                        tracks,
                    });
                Task::none()
            }
            Completion::Stale {
                request,
                stopped: None,
            } => {
                tracing::debug!(%request, "ignoring late camera failure");
                Task::none()
            }
        }
    }

    pub(super) fn handle_camera_event(&mut self, request: RequestId, event: CaptureEvent) {
        match event {
            CaptureEvent::Frame(frame) => {
                // Late frames of released sessions are rejected here.
                self.surface.push_frame(request, frame);
            }
            CaptureEvent::Ended(reason) => {
                if self.camera.capture_ended(request, reason).is_some() {
                    self.surface.unbind();
                    if let Some(reason) = self.camera.state().failure().cloned() {
                        self.report_camera_error(ErrorType::CameraDeviceLost, &reason);
                    }
                }
            }
        }
    }

    pub(super) fn handle_close_requested(&mut self, id: window::Id) -> Task<Message> {
        if let Some(released) = self.camera.shutdown() {
            self.on_released(released);
        }
        self.diagnostics.process_pending();
        match self.diagnostics.export_json() {
            Ok(report) => tracing::debug!(%report, "diagnostics report"),
            Err(e) => tracing::warn!(error = %e, "cannot serialize diagnostics report"),
        }
        window::close(id).chain(iced::exit())
    }

    fn acquire(&self, request: AcquireRequest) -> Task<Message> {
        let AcquireRequest { id, constraints } = request;
        let devices = Arc::clone(&self.devices);
        Task::perform(open_video(devices, constraints), move |result| {
            Message::CameraAcquired {
                request: id,
                result,
            }
        })
    }

    fn on_released(&mut self, released: Released) {
        self.surface.unbind();
        self.diagnostics.log_state(AppStateEvent::CameraStopped {
            request: released.request.value(),
            tracks: released.tracks,
        });
    }

    /// One diagnostic entry and one toast per camera failure.
    fn report_camera_error(&mut self, error_type: ErrorType, reason: &CameraError) {
        self.diagnostics.log_error(
            ErrorEvent::new(error_type, reason.to_string()).with_code(reason.i18n_key()),
        );
        self.notifications.push(Notification::error(reason.i18n_key()));
    }
}

/// Opens the camera on a blocking thread; device opens can stall on
/// permission prompts.
async fn open_video(
    devices: Arc<dyn MediaDevices>,
    constraints: VideoConstraints,
) -> Result<AcquiredStream, CameraError> {
    tokio::task::spawn_blocking(move || devices.open_video(&constraints))
        .await
        .unwrap_or_else(|e| Err(CameraError::Other(format!("camera task failed: {e}"))))
        .map(AcquiredStream::new)
}

/// Forwards a session's capture events until its workers hang up.
fn capture_events(request: RequestId, events: CaptureReceiver) -> Task<Message> {
    let events = stream::unfold(events, |mut events| async move {
        let event = events.recv().await?;
        Some((event, events))
    });
    Task::run(events, move |event| Message::CameraEvent { request, event })
}
