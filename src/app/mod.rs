// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the three pieces of view state (emotion label,
//! audio flag, video state) plus the services around them: the camera
//! controller, the emotion stub, toasts, and the diagnostics collector.
//! Camera policy lives in [`crate::camera`]; this module only turns its
//! outcomes into tasks, log entries, and toasts.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::MediaDevices;
use crate::audio::AudioToggle;
use crate::camera::{CameraController, CameraHandle, VideoState};
use crate::diagnostics::{
    DiagnosticsCollector, DiagnosticsHandle, WarningEvent, WarningType,
};
use crate::domain::emotion::EmotionLabel;
use crate::emotion::RandomEmotionStub;
use crate::i18n::I18n;
use crate::infrastructure::FfmpegCamera;
use crate::ui::notifications::{self, Notification};
use crate::ui::video_surface::VideoSurface;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 760;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const MIN_WINDOW_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 760;

pub struct App {
    i18n: I18n,
    theme: Theme,
    emotion: EmotionLabel,
    emotion_stub: RandomEmotionStub,
    audio: AudioToggle,
    camera: CameraController,
    devices: Arc<dyn MediaDevices>,
    surface: VideoSurface,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("emotion", &self.emotion)
            .field("audio_enabled", &self.audio.is_enabled())
            .field("video", &self.camera.state())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings. Close requests are handled by the app so
/// the camera is released before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::boot(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state: Neutral, audio off, video off.
    ///
    /// `devices` receives a diagnostics handle so adapters running on other
    /// threads can report into the same collector.
    pub fn new(
        flags: &Flags,
        config: &config::Config,
        devices: impl FnOnce(DiagnosticsHandle) -> Arc<dyn MediaDevices>,
    ) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());
        let devices = devices(diagnostics.handle());
        let seed = flags.seed.or(config.emotion.seed);

        Self {
            i18n: I18n::new(flags.lang.as_deref(), config.general.language.as_deref()),
            theme: config.general.theme_mode.iced_theme(),
            emotion: EmotionLabel::default(),
            emotion_stub: RandomEmotionStub::with_optional_seed(seed),
            audio: AudioToggle::default(),
            camera: CameraController::new(config.camera.constraints()),
            devices,
            surface: VideoSurface::new(),
            notifications: notifications::Manager::new(),
            diagnostics,
        }
    }

    fn boot(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::new(&flags, &config, |handle| -> Arc<dyn MediaDevices> {
            Arc::new(FfmpegCamera::new().with_diagnostics(handle))
        });

        if let Some(key) = config_warning {
            app.diagnostics.log_warning(WarningEvent::new(
                WarningType::ConfigurationIssue,
                key.clone(),
            ));
            app.notifications.push(Notification::warning(key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            seeded = flags.seed.or(config.emotion.seed).is_some(),
            "emotion lens started"
        );
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.notifications.has_notifications(),
                self.camera.is_enabled(),
            ),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ToggleVideo => self.handle_toggle_video(),
            Message::ToggleAudio => {
                self.handle_toggle_audio();
                Task::none()
            }
            Message::DetectEmotion => {
                self.handle_detect_emotion();
                Task::none()
            }
            Message::CameraAcquired { request, result } => {
                self.handle_camera_acquired(request, result)
            }
            Message::CameraEvent { request, event } => {
                self.handle_camera_event(request, event);
                Task::none()
            }
            Message::DismissNotification(id) => {
                self.notifications.dismiss(id);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                self.diagnostics.process_pending();
                Task::none()
            }
            Message::WindowCloseRequested(id) => self.handle_close_requested(id),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            emotion: self.emotion,
            audio_enabled: self.audio.is_enabled(),
            video: self.camera.state(),
            surface: &self.surface,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn emotion(&self) -> EmotionLabel {
        self.emotion
    }

    #[must_use]
    pub fn audio_enabled(&self) -> bool {
        self.audio.is_enabled()
    }

    /// `true` while a camera request is outstanding or a session is active.
    #[must_use]
    pub fn video_enabled(&self) -> bool {
        self.camera.is_enabled()
    }

    #[must_use]
    pub fn camera_handle(&self) -> Option<&CameraHandle> {
        self.camera.handle()
    }

    #[must_use]
    pub fn video_state(&self) -> &VideoState {
        self.camera.state()
    }

    #[must_use]
    pub fn surface(&self) -> &VideoSurface {
        &self.surface
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(released) = self.camera.shutdown() {
            tracing::info!(
                request = %released.request,
                tracks = released.tracks,
                "camera released on shutdown"
            );
        }
    }
}
