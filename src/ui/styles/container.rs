// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Raised panel derived from the theme background, so it reads well in
/// both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Frame around the camera preview. A failed camera gets an error border.
pub fn video_surface(failed: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(colors.surface_video)),
            text_color: Some(colors.text_secondary),
            border: Border {
                color: if failed {
                    colors.error
                } else {
                    colors.surface_secondary
                },
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Toast card with a colored accent border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        container::Style {
            background: Some(Background::Color(colors.surface_secondary)),
            text_color: Some(colors.text_primary),
            border: Border {
                color: accent,
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_surface_has_error_border() {
        let style = video_surface(true)(&Theme::Dark);
        assert_eq!(style.border.color, ColorScheme::dark().error);
    }

    #[test]
    fn idle_surface_has_neutral_border() {
        let style = video_surface(false)(&Theme::Light);
        assert_eq!(style.border.color, ColorScheme::light().surface_secondary);
    }
}
