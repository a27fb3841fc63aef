// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! One card, top to bottom: heading, video surface, emotion readout, the
//! two capture toggles with the audio status, and the detect button. Toasts
//! float over the bottom-right corner.

use super::Message;
use crate::camera::VideoState;
use crate::domain::emotion::EmotionLabel;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{self, toast};
use crate::ui::theming::ColorScheme;
use crate::ui::video_surface::VideoSurface;
use crate::ui::{emotion_panel, icons, styles};
use iced::widget::{button, svg::Svg, text, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub emotion: EmotionLabel,
    pub audio_enabled: bool,
    pub video: &'a VideoState,
    pub surface: &'a VideoSurface,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let video_enabled = ctx.video.is_enabled();

    let heading = Text::new(i18n.tr("app-heading"))
        .size(typography::TITLE_LG)
        .align_x(alignment::Horizontal::Center);

    let video_button = control_button(
        if video_enabled {
            icons::video_off()
        } else {
            icons::video()
        },
        i18n.tr(if video_enabled {
            "video-button-stop"
        } else {
            "video-button-start"
        }),
        video_enabled,
        Message::ToggleVideo,
    );
    let audio_button = control_button(
        if ctx.audio_enabled {
            icons::mic_off()
        } else {
            icons::mic()
        },
        i18n.tr(if ctx.audio_enabled {
            "audio-button-stop"
        } else {
            "audio-button-start"
        }),
        ctx.audio_enabled,
        Message::ToggleAudio,
    );

    let controls = Row::new()
        .spacing(spacing::MD)
        .push(video_button)
        .push(audio_button);

    let audio_status = Text::new(i18n.tr(if ctx.audio_enabled {
        "audio-status-on"
    } else {
        "audio-status-off"
    }))
    .size(typography::CAPTION)
    .style(|theme: &Theme| text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    });

    let detect_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icons::tinted(
                icons::sparkle(),
                sizing::ICON_MD,
                iced::Color::WHITE,
            ))
            .push(Text::new(i18n.tr("detect-emotion-button")).size(typography::BODY_LG)),
    )
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary)
    .on_press(Message::DetectEmotion);

    let card = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(ctx.surface.view(ctx.video, i18n))
        .push(emotion_panel::view(ctx.emotion, i18n))
        .push(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .push(controls)
                .push(audio_status),
        )
        .push(detect_button);

    let page = Container::new(
        Container::new(card)
            .padding(spacing::XL)
            .max_width(sizing::VIDEO_SURFACE_WIDTH + 2.0 * spacing::XL)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .padding(spacing::MD);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);
    if let Some(overlay) = toast::overlay(ctx.notifications, i18n, Message::DismissNotification) {
        layers = layers.push(overlay);
    }
    layers.into()
}

fn control_button<'a>(
    icon: Svg<'static>,
    label: String,
    running: bool,
    on_press: Message,
) -> Element<'a, Message> {
    // Running toggles are filled, so their icon follows the white label.
    let icon = if running {
        icons::tinted(icon, sizing::ICON_MD, iced::Color::WHITE)
    } else {
        icons::sized(icon, sizing::ICON_MD)
    };

    button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(Text::new(label).size(typography::BODY)),
    )
    .width(Length::Fixed(sizing::CONTROL_BUTTON_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::toggle(running))
    .on_press(on_press)
    .into()
}
