// SPDX-License-Identifier: MPL-2.0
//! Top-level view: optional settings warning above the viewer.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::viewer::component;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a component::State,
    /// i18n key of the warning to show, if any.
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewer = ctx
        .viewer
        .view(component::ViewEnv { i18n: ctx.i18n })
        .map(Message::Viewer);

    let mut content = Column::new().width(Length::Fill).height(Length::Fill);

    if let Some(key) = ctx.config_warning {
        let banner = Row::new()
            .spacing(12)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr(key)).width(Length::Fill))
            .push(
                button(Text::new(ctx.i18n.tr("notification-dismiss-button")))
                    .on_press(Message::DismissConfigWarning)
                    .padding([4, 10]),
            );
        content = content.push(Container::new(banner).padding(8).width(Length::Fill));
    }

    content.push(viewer).into()
}
