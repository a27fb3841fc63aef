// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! The sources live in `assets/icons/` and are drawn with a black stroke;
//! [`sized`] and [`tinted`] recolor them so one file serves both themes.
//! Handles are parsed once and cached.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(video, "video.svg", "Camera outline.");
define_icon!(video_off, "video_off.svg", "Camera crossed out.");
define_icon!(mic, "mic.svg", "Microphone.");
define_icon!(mic_off, "mic_off.svg", "Microphone crossed out.");
define_icon!(sparkle, "sparkle.svg", "Two four-pointed stars.");
define_icon!(warning, "warning.svg", "Exclamation mark in a triangle.");
define_icon!(info, "info.svg", "Letter 'i' in a circle.");
define_icon!(cross, "cross.svg", "X mark.");
define_icon!(checkmark, "checkmark.svg", "Check mark.");

/// Square icon colored with the theme's text color.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(|theme: &Theme, _status| svg::Style {
            color: Some(theme.extended_palette().background.base.text),
        })
}

/// Square icon in a fixed color.
pub fn tinted(icon: Svg<'static>, size: f32, color: Color) -> Svg<'static> {
    icon.width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
