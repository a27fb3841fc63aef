// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn filled(fill: Color, edge: Color, raised: Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(fill)),
        text_color: palette::WHITE,
        border: Border {
            color: edge,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: raised,
        snap: true,
    }
}

fn disabled(theme: &Theme) -> button::Style {
    let base = if theme.extended_palette().is_dark {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::DISABLED,
            ..base
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Main call to action ("Detect Emotion").
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => filled(palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => disabled(theme),
    }
}

/// Start/stop toggles. A running capture shows the "stop" look.
pub fn toggle(running: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if matches!(status, button::Status::Disabled) {
            return disabled(theme);
        }
        let hovered = matches!(status, button::Status::Hovered);
        let raised = if hovered { shadow::MD } else { shadow::SM };

        if running {
            let fill = if hovered {
                Color {
                    a: opacity::SURFACE,
                    ..palette::ERROR_500
                }
            } else {
                palette::ERROR_500
            };
            filled(fill, palette::ERROR_500, raised)
        } else {
            let text = theme.extended_palette().background.base.text;
            button::Style {
                background: Some(Background::Color(Color {
                    a: if hovered { opacity::OVERLAY_SUBTLE } else { 0.0 },
                    ..palette::PRIMARY_500
                })),
                text_color: text,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::MD.into(),
                },
                shadow: if hovered { raised } else { Shadow::default() },
                snap: true,
            }
        }
    }
}

/// Borderless text button used inside toasts.
pub fn link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: None,
        text_color: if matches!(status, button::Status::Hovered) {
            color
        } else {
            Color { a: 0.8, ..color }
        },
        border: Border::default(),
        shadow: Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_toggle_uses_error_color() {
        let style = toggle(true)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ERROR_500))
        );
    }

    #[test]
    fn idle_toggle_is_outlined() {
        let style = toggle(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);
        assert_eq!(style.shadow, Shadow::default());
    }

    #[test]
    fn disabled_primary_is_muted() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }
}
