// SPDX-License-Identifier: MPL-2.0
//! "Detected Emotion" readout.

use crate::domain::emotion::EmotionLabel;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Localized "Detected Emotion: <label>" line.
#[must_use]
pub fn headline(label: EmotionLabel, i18n: &I18n) -> String {
    let name = i18n.tr(label.i18n_key());
    i18n.tr_with_args("emotion-current", &[("label", name.as_str())])
}

pub fn view<'a, M: 'a>(label: EmotionLabel, i18n: &'a I18n) -> Element<'a, M> {
    let line = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(icons::sparkle(), sizing::ICON_MD, palette::PRIMARY_400))
        .push(Text::new(headline(label, i18n)).size(typography::TITLE_SM));

    let note = Text::new(i18n.tr("emotion-stub-note"))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(ColorScheme::for_theme(theme).text_secondary),
        });

    Container::new(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(line)
            .push(note),
    )
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_uses_localized_label() {
        let en = I18n::new(Some("en-US"), None);
        assert_eq!(headline(EmotionLabel::Neutral, &en), "Detected Emotion: Neutral");

        let fr = I18n::new(Some("fr"), None);
        let line = headline(EmotionLabel::Happy, &fr);
        assert!(line.contains(&fr.tr("emotion-happy")));
    }
}
