// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// How often toasts are expired and worker diagnostics drained.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Routes window close requests to the app so the camera is released first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Ticks only while something time-based is going on: visible toasts, or
/// a camera whose worker may report diagnostics.
pub fn create_tick_subscription(
    has_notifications: bool,
    video_enabled: bool,
) -> Subscription<Message> {
    if has_notifications || video_enabled {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
