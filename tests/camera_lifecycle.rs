// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the app state through `App::update`.
//!
//! Acquisitions are completed by hand: the test opens a stream on a mock
//! device and feeds it back as `Message::CameraAcquired`, the same message
//! the acquisition task would deliver.

use emotion_lens::app::config::Config;
use emotion_lens::app::{App, Flags, Message};
use emotion_lens::application::port::{
    AcquiredStream, CaptureEvent, MediaDevices, MediaStream, MediaTrack,
};
use emotion_lens::camera::VideoState;
use emotion_lens::diagnostics::{AppStateEvent, DiagnosticEventKind, ErrorType};
use emotion_lens::domain::camera::{
    CameraFrame, RequestId, TrackId, TrackKind, VideoConstraints,
};
use emotion_lens::domain::emotion::EmotionLabel;
use emotion_lens::error::CameraError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct MockTrack {
    id: TrackId,
    stops: Arc<AtomicUsize>,
}

impl MediaTrack for MockTrack {
    fn id(&self) -> TrackId {
        self.id
    }

    fn kind(&self) -> TrackKind {
        TrackKind::Video
    }

    fn label(&self) -> &str {
        "mock camera"
    }

    fn stop(&mut self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

/// Hands out streams whose tracks count their `stop` calls.
#[derive(Clone, Default)]
struct MockDevices {
    failure: Arc<Mutex<Option<CameraError>>>,
    counters: Arc<Mutex<Vec<Arc<AtomicUsize>>>>,
}

impl MockDevices {
    fn failing(reason: CameraError) -> Self {
        let devices = Self::default();
        *devices.failure.lock().unwrap() = Some(reason);
        devices
    }

    fn stop_counts(&self) -> Vec<usize> {
        self.counters
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.load(Ordering::SeqCst))
            .collect()
    }
}

impl MediaDevices for MockDevices {
    fn open_video(&self, _constraints: &VideoConstraints) -> Result<MediaStream, CameraError> {
        if let Some(reason) = self.failure.lock().unwrap().clone() {
            return Err(reason);
        }
        let stops = Arc::new(AtomicUsize::new(0));
        self.counters.lock().unwrap().push(Arc::clone(&stops));
        let (_tx, rx) = tokio::sync::mpsc::channel::<CaptureEvent>(1);
        let track = MockTrack {
            id: TrackId::new(),
            stops,
        };
        Ok(MediaStream::new(vec![Box::new(track)], rx))
    }
}

fn app_with(devices: &MockDevices) -> App {
    let devices = devices.clone();
    let flags = Flags {
        lang: Some("en-US".to_string()),
        seed: Some(42),
        ..Flags::default()
    };
    App::new(&flags, &Config::default(), move |_| -> Arc<dyn MediaDevices> {
        Arc::new(devices)
    })
}

/// Presses "Start Video" and returns the request it issued.
fn start_video(app: &mut App) -> RequestId {
    let _ = app.update(Message::ToggleVideo);
    match app.video_state() {
        VideoState::Requesting { request } => *request,
        other => panic!("expected Requesting, got {other:?}"),
    }
}

/// Delivers the acquisition result the task would have produced.
fn complete(app: &mut App, devices: &MockDevices, request: RequestId) {
    let result = devices
        .open_video(&VideoConstraints::default())
        .map(AcquiredStream::new);
    let _ = app.update(Message::CameraAcquired { request, result });
}

fn app_state_events(app: &App) -> Vec<AppStateEvent> {
    app.diagnostics()
        .kinds()
        .filter_map(|kind| match kind {
            DiagnosticEventKind::AppState { state } => Some(state.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn initial_state_is_neutral_and_idle() {
    let app = app_with(&MockDevices::default());
    assert_eq!(app.emotion(), EmotionLabel::Neutral);
    assert!(!app.audio_enabled());
    assert!(!app.video_enabled());
    assert!(app.camera_handle().is_none());
    assert!(app.diagnostics().is_empty());
}

#[test]
fn successful_start_binds_surface_to_handle() {
    let devices = MockDevices::default();
    let mut app = app_with(&devices);

    let request = start_video(&mut app);
    assert!(app.video_enabled());
    assert!(app.camera_handle().is_none());

    complete(&mut app, &devices, request);

    let handle = app.camera_handle().expect("handle after success");
    assert_eq!(handle.request(), request);
    assert_eq!(handle.label(), "mock camera");
    assert_eq!(app.surface().bound_request(), Some(request));
    assert!(app.video_enabled());
    assert_eq!(
        app_state_events(&app),
        vec![AppStateEvent::CameraStarted {
            request: request.value(),
            tracks: 1
        }]
    );
}

#[test]
fn stop_releases_every_track_exactly_once() {
    let devices = MockDevices::default();
    let mut app = app_with(&devices);

    let request = start_video(&mut app);
    complete(&mut app, &devices, request);
    let _ = app.update(Message::ToggleVideo);

    assert!(!app.video_enabled());
    assert!(app.camera_handle().is_none());
    assert_eq!(app.surface().bound_request(), None);
    assert_eq!(devices.stop_counts(), vec![1]);

    drop(app);
    assert_eq!(devices.stop_counts(), vec![1]);
}

#[test]
fn denied_camera_fails_with_one_diagnostic_entry() {
    let devices = MockDevices::failing(CameraError::PermissionDenied);
    let mut app = app_with(&devices);

    let request = start_video(&mut app);
    complete(&mut app, &devices, request);

    assert!(app.camera_handle().is_none());
    assert!(!app.video_enabled());
    assert!(matches!(
        app.video_state(),
        VideoState::Failed {
            reason: CameraError::PermissionDenied
        }
    ));
    assert_eq!(app.diagnostics().len(), 1);
    let entry = app.diagnostics().kinds().next().expect("one entry");
    assert!(matches!(
        entry,
        DiagnosticEventKind::Error { event } if event.error_type == ErrorType::CameraAcquisition
    ));
    assert_eq!(app.notifications().visible_count(), 1);
}

#[test]
fn failed_camera_can_be_retried() {
    let devices = MockDevices::failing(CameraError::DeviceBusy);
    let mut app = app_with(&devices);

    let first = start_video(&mut app);
    complete(&mut app, &devices, first);

    *devices.failure.lock().unwrap() = None;
    let second = start_video(&mut app);
    assert!(second > first);
    complete(&mut app, &devices, second);

    assert!(app.camera_handle().is_some());
    // The failure toast goes away once the camera works.
    assert_eq!(app.notifications().visible_count(), 0);
}

#[test]
fn disable_while_off_changes_nothing() {
    let devices = MockDevices::default();
    let mut app = app_with(&devices);

    let _ = app.update(Message::ToggleVideo);
    let _ = app.update(Message::ToggleVideo);
    assert!(matches!(app.video_state(), VideoState::Off));
    assert!(app.camera_handle().is_none());
    assert!(devices.stop_counts().is_empty());
    assert!(app.diagnostics().is_empty());
}

#[test]
fn stale_completion_is_discarded_and_stopped() {
    let devices = MockDevices::default();
    let mut app = app_with(&devices);

    let first = start_video(&mut app);
    let _ = app.update(Message::ToggleVideo);
    let second = start_video(&mut app);

    // The first acquisition finishes late.
    complete(&mut app, &devices, first);
    assert!(app.camera_handle().is_none());
    assert!(matches!(app.video_state(), VideoState::Requesting { request } if *request == second));
    assert_eq!(devices.stop_counts(), vec![1]);

    complete(&mut app, &devices, second);
    assert_eq!(app.camera_handle().map(|h| h.request()), Some(second));
    assert_eq!(devices.stop_counts(), vec![1, 0]);

    assert_eq!(
        app_state_events(&app),
        vec![
            AppStateEvent::StaleCameraStreamDiscarded {
                request: first.value(),
                tracks: 1
            },
            AppStateEvent::CameraStarted {
                request: second.value(),
                tracks: 1
            },
        ]
    );
}

#[test]
fn late_failure_of_an_abandoned_request_is_ignored() {
    let devices = MockDevices::failing(CameraError::DeviceBusy);
    let mut app = app_with(&devices);

    let request = start_video(&mut app);
    let _ = app.update(Message::ToggleVideo);
    complete(&mut app, &devices, request);

    assert!(matches!(app.video_state(), VideoState::Off));
    assert!(app.diagnostics().is_empty());
    assert_eq!(app.notifications().visible_count(), 0);
}

#[test]
fn frames_only_reach_the_bound_surface() {
    let devices = MockDevices::default();
    let mut app = app_with(&devices);
    let request = start_video(&mut app);
    complete(&mut app, &devices, request);

    let frame = CameraFrame::from_rgba(1, 1, vec![255, 0, 0, 255]).expect("frame");
    let _ = app.update(Message::CameraEvent {
        request: request.next(),
        event: CaptureEvent::Frame(frame.clone()),
    });
    assert!(!app.surface().has_frame());

    let _ = app.update(Message::CameraEvent {
        request,
        event: CaptureEvent::Frame(frame),
    });
    assert!(app.surface().has_frame());
}

#[test]
fn lost_device_releases_and_fails() {
    let devices = MockDevices::default();
    let mut app = app_with(&devices);
    let request = start_video(&mut app);
    complete(&mut app, &devices, request);

    let _ = app.update(Message::CameraEvent {
        request,
        event: CaptureEvent::Ended(Some("No such device".to_string())),
    });

    assert!(matches!(
        app.video_state(),
        VideoState::Failed {
            reason: CameraError::DeviceLost(_)
        }
    ));
    assert_eq!(devices.stop_counts(), vec![1]);
    assert!(app.diagnostics().kinds().any(|kind| matches!(
        kind,
        DiagnosticEventKind::Error { event } if event.error_type == ErrorType::CameraDeviceLost
    )));
}

#[test]
fn audio_toggle_twice_logs_two_entries_in_order() {
    let mut app = app_with(&MockDevices::default());

    let _ = app.update(Message::ToggleAudio);
    assert!(app.audio_enabled());
    let _ = app.update(Message::ToggleAudio);
    assert!(!app.audio_enabled());

    assert_eq!(app.diagnostics().len(), 2);
    assert_eq!(
        app_state_events(&app),
        vec![
            AppStateEvent::AudioCaptureStarted,
            AppStateEvent::AudioCaptureStopped
        ]
    );
}

#[test]
fn seeded_detection_is_reproducible() {
    let run = || {
        let mut app = app_with(&MockDevices::default());
        (0..5)
            .map(|_| {
                let _ = app.update(Message::DetectEmotion);
                app.emotion()
            })
            .collect::<Vec<_>>()
    };

    let first = run();
    assert_eq!(first, run());
    assert!(first.iter().all(|label| EmotionLabel::ALL.contains(label)));
}

#[test]
fn view_builds_in_every_video_state() {
    let devices = MockDevices::default();
    let mut app = app_with(&devices);
    let _ = app.view();

    let request = start_video(&mut app);
    let _ = app.view();

    complete(&mut app, &devices, request);
    let _ = app.view();

    let _ = app.update(Message::CameraEvent {
        request,
        event: CaptureEvent::Ended(None),
    });
    assert!(matches!(app.video_state(), VideoState::Failed { .. }));
    let _ = app.view();
}

#[test]
fn dropping_the_app_while_active_stops_tracks() {
    let devices = MockDevices::default();
    let mut app = app_with(&devices);
    let request = start_video(&mut app);
    complete(&mut app, &devices, request);

    drop(app);
    assert_eq!(devices.stop_counts(), vec![1]);
}

#[test]
fn close_request_releases_the_camera() {
    let devices = MockDevices::default();
    let mut app = app_with(&devices);
    let request = start_video(&mut app);
    complete(&mut app, &devices, request);

    let _ = app.update(Message::WindowCloseRequested(iced::window::Id::unique()));

    assert!(app.camera_handle().is_none());
    assert_eq!(devices.stop_counts(), vec![1]);
    assert!(app_state_events(&app).contains(&AppStateEvent::CameraStopped {
        request: request.value(),
        tracks: 1
    }));
}
