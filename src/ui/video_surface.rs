// SPDX-License-Identifier: MPL-2.0
//! Video preview area.
//!
//! The surface is bound to at most one camera request. Frames carrying any
//! other request id are dropped, so a late frame from a released stream can
//! never repaint the preview.

use crate::camera::VideoState;
use crate::domain::camera::{CameraFrame, RequestId};
use crate::error::CameraError;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{image, text, Column, Container, Image, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

#[derive(Debug, Default)]
pub struct VideoSurface {
    bound: Option<RequestId>,
    frame: Option<image::Handle>,
    frame_size: Option<(u32, u32)>,
    frames_shown: u64,
}

impl VideoSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the surface to a newly bound stream and clears any old frame.
    pub fn bind(&mut self, request: RequestId) {
        self.bound = Some(request);
        self.frame = None;
        self.frame_size = None;
        self.frames_shown = 0;
    }

    /// Detaches the surface. The preview goes back to its placeholder.
    pub fn unbind(&mut self) {
        self.bound = None;
        self.frame = None;
        self.frame_size = None;
    }

    #[must_use]
    pub fn bound_request(&self) -> Option<RequestId> {
        self.bound
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn frame_size(&self) -> Option<(u32, u32)> {
        self.frame_size
    }

    #[must_use]
    pub fn frames_shown(&self) -> u64 {
        self.frames_shown
    }

    /// Shows `frame` if it belongs to the bound request. Returns whether it
    /// was accepted.
    pub fn push_frame(&mut self, request: RequestId, frame: CameraFrame) -> bool {
        if self.bound != Some(request) {
            return false;
        }
        let (width, height) = (frame.width(), frame.height());
        self.frame = Some(image::Handle::from_rgba(
            width,
            height,
            frame.into_rgba_bytes(),
        ));
        self.frame_size = Some((width, height));
        self.frames_shown += 1;
        true
    }

    pub fn view<'a, M: 'a>(&'a self, state: &'a VideoState, i18n: &'a I18n) -> Element<'a, M> {
        let failed = matches!(state, VideoState::Failed { .. });

        let content: Element<'a, M> = match (state, &self.frame) {
            (VideoState::Active(_), Some(handle)) => Image::new(handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Contain)
                .into(),
            (VideoState::Active(_) | VideoState::Requesting { .. }, _) => {
                placeholder(icons::video(), i18n.tr("video-surface-requesting"), None)
            }
            (VideoState::Failed { reason }, _) => failure(reason, i18n),
            (VideoState::Off, _) => {
                placeholder(icons::video_off(), i18n.tr("video-surface-off"), None)
            }
        };

        Container::new(content)
            .width(Length::Fixed(sizing::VIDEO_SURFACE_WIDTH))
            .height(Length::Fixed(sizing::VIDEO_SURFACE_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::video_surface(failed))
            .into()
    }
}

fn placeholder<'a, M: 'a>(
    icon: iced::widget::Svg<'static>,
    title: String,
    hint: Option<String>,
) -> Element<'a, M> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(icons::sized(icon, sizing::ICON_XL))
        .push(Text::new(title).size(typography::BODY_LG));
    if let Some(hint) = hint {
        column = column.push(
            Text::new(hint)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(ColorScheme::for_theme(theme).text_secondary),
                }),
        );
    }
    column.into()
}

fn failure<'a, M: 'a>(reason: &CameraError, i18n: &I18n) -> Element<'a, M> {
    let detail = i18n.tr(reason.i18n_key());
    let hint = format!("{detail} {}", i18n.tr("video-surface-failed-hint"));
    placeholder(
        icons::tinted(icons::warning(), sizing::ICON_XL, palette::ERROR_500),
        i18n.tr("video-surface-failed-title"),
        Some(hint),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> CameraFrame {
        CameraFrame::from_rgba(2, 2, vec![0; 16]).expect("valid frame")
    }

    #[test]
    fn unbound_surface_rejects_frames() {
        let mut surface = VideoSurface::new();
        assert!(!surface.push_frame(RequestId::ZERO.next(), frame()));
        assert!(!surface.has_frame());
    }

    #[test]
    fn frames_for_other_requests_are_dropped() {
        let first = RequestId::ZERO.next();
        let second = first.next();
        let mut surface = VideoSurface::new();
        surface.bind(second);

        assert!(!surface.push_frame(first, frame()));
        assert!(surface.push_frame(second, frame()));
        assert_eq!(surface.frame_size(), Some((2, 2)));
        assert_eq!(surface.frames_shown(), 1);
    }

    #[test]
    fn unbind_clears_the_preview() {
        let request = RequestId::ZERO.next();
        let mut surface = VideoSurface::new();
        surface.bind(request);
        surface.push_frame(request, frame());
        surface.unbind();

        assert_eq!(surface.bound_request(), None);
        assert!(!surface.has_frame());
        assert!(!surface.push_frame(request, frame()));
    }

    #[test]
    fn rebinding_resets_frame_count() {
        let first = RequestId::ZERO.next();
        let mut surface = VideoSurface::new();
        surface.bind(first);
        surface.push_frame(first, frame());
        surface.bind(first.next());
        assert_eq!(surface.frames_shown(), 0);
        assert!(!surface.has_frame());
    }
}
