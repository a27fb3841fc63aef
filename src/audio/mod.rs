// SPDX-License-Identifier: MPL-2.0
//! Audio toggle.
//!
//! Nothing is recorded. The toggle only changes the button text and leaves
//! a state-change entry in the diagnostic trail.

use crate::diagnostics::AppStateEvent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioToggle {
    enabled: bool,
}

impl AudioToggle {
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    /// Flips the flag and returns the event describing the new state.
    pub fn toggle(&mut self) -> AppStateEvent {
        self.enabled = !self.enabled;
        if self.enabled {
            AppStateEvent::AudioCaptureStarted
        } else {
            AppStateEvent::AudioCaptureStopped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disabled() {
        assert!(!AudioToggle::default().is_enabled());
    }

    #[test]
    fn toggling_twice_restores_and_reports_in_order() {
        let mut audio = AudioToggle::default();
        let events = [audio.toggle(), audio.toggle()];
        assert!(!audio.is_enabled());
        assert_eq!(
            events,
            [
                AppStateEvent::AudioCaptureStarted,
                AppStateEvent::AudioCaptureStopped
            ]
        );
    }
}
