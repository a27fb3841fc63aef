// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::Manager;
use super::notification::{Notification, NotificationId, Severity};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, svg::Svg, tooltip, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders one toast; `on_dismiss` maps the close button to the caller's
/// message type.
pub fn view<'a, M: Clone + 'static>(
    notification: &'a Notification,
    i18n: &'a I18n,
    on_dismiss: impl Fn(NotificationId) -> M,
) -> Element<'a, M> {
    let severity = notification.severity();
    let accent = severity.color();

    let message = if notification.message_args().is_empty() {
        i18n.tr(notification.message_key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    };

    let dismiss = tooltip(
        button(icons::sized(icons::cross(), sizing::ICON_SM))
            .on_press(on_dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::link(accent)),
        Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::tinted(severity_icon(severity), sizing::ICON_MD, accent))
        .push(
            Container::new(Text::new(message).size(typography::BODY))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(accent))
        .into()
}

/// Bottom-right stack of visible toasts. `None` when there is nothing to show.
pub fn overlay<'a, M: Clone + 'static>(
    manager: &'a Manager,
    i18n: &'a I18n,
    on_dismiss: impl Fn(NotificationId) -> M + Copy,
) -> Option<Element<'a, M>> {
    if manager.visible_count() == 0 {
        return None;
    }

    let toasts = Column::with_children(manager.visible().map(|n| view(n, i18n, on_dismiss)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Some(
        Container::new(toasts)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into(),
    )
}

fn severity_icon(severity: Severity) -> Svg<'static> {
    match severity {
        Severity::Info => icons::info(),
        Severity::Warning | Severity::Error => icons::warning(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_manager_has_no_overlay() {
        let manager = Manager::new();
        let i18n = I18n::new(Some("en-US"), None);
        assert!(overlay(&manager, &i18n, |_| ()).is_none());
    }

    #[test]
    fn overlay_is_built_for_visible_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::error("camera-error-device-busy"));
        let i18n = I18n::new(Some("en-US"), None);
        assert!(overlay(&manager, &i18n, |_| ()).is_some());
    }
}
