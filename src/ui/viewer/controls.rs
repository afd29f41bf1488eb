// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: page navigation, page selector, zoom buttons and the
//! zoom percentage field.

use crate::i18n::fluent::I18n;
use crate::ui::state::pages::PageState;
use crate::ui::state::zoom::ZoomState;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, text_input, Row, Space, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    PageSelected(u32),
    ZoomIn,
    ZoomOut,
    ZoomInputChanged(String),
    ZoomInputSubmitted,
}

/// "Page N of M", with "?" for an unknown count.
#[must_use]
pub fn page_indicator(i18n: &I18n, pages: &PageState) -> String {
    let total = pages
        .page_count
        .map_or_else(|| i18n.tr("viewer-page-total-unknown"), |count| count.to_string());
    i18n.tr_with_args(
        "viewer-page-indicator",
        &[("page", &pages.page_number.to_string()), ("total", &total)],
    )
}

/// "Zoom: P%" for the current scale.
#[must_use]
pub fn zoom_indicator(i18n: &I18n, zoom: &ZoomState) -> String {
    i18n.tr_with_args(
        "viewer-zoom-indicator",
        &[("percent", &zoom.display_percent())],
    )
}

pub fn view<'a>(
    ctx: ViewContext<'a>,
    pages: &'a PageState,
    zoom: &'a ZoomState,
) -> Element<'a, Message> {
    let prev_button = button(Text::new(ctx.i18n.tr("viewer-prev-button")))
        .on_press_maybe(pages.can_go_previous().then_some(Message::Previous))
        .padding([6, 12]);

    let next_button = button(Text::new(ctx.i18n.tr("viewer-next-button")))
        .on_press_maybe(pages.can_go_next().then_some(Message::Next))
        .padding([6, 12]);

    let selected_page = pages.page_count.map(|_| pages.page_number);
    let page_picker = pick_list(pages.page_options(), selected_page, Message::PageSelected)
        .placeholder(ctx.i18n.tr("viewer-page-select-placeholder"))
        .padding(6)
        .width(Length::Fixed(90.0));

    let zoom_out_button = button(Text::new(ctx.i18n.tr("viewer-zoom-out-button")))
        .on_press(Message::ZoomOut)
        .padding([6, 12]);

    let zoom_in_button = button(Text::new(ctx.i18n.tr("viewer-zoom-in-button")))
        .on_press(Message::ZoomIn)
        .padding([6, 12]);

    let zoom_placeholder = ctx.i18n.tr("viewer-zoom-input-placeholder");
    let zoom_input = text_input(&zoom_placeholder, zoom.zoom_input_value())
        .on_input(Message::ZoomInputChanged)
        .on_submit(Message::ZoomInputSubmitted)
        .padding(6)
        .size(16)
        .width(Length::Fixed(90.0));

    Row::new()
        .spacing(10)
        .padding(8)
        .align_y(Vertical::Center)
        .push(prev_button)
        .push(Text::new(page_indicator(ctx.i18n, pages)))
        .push(page_picker)
        .push(next_button)
        .push(Space::new().width(Length::Fixed(24.0)))
        .push(zoom_out_button)
        .push(Text::new(zoom_indicator(ctx.i18n, zoom)))
        .push(zoom_in_button)
        .push(zoom_input)
        .push(Text::new("%"))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    #[test]
    fn controls_view_renders() {
        let i18n = english();
        let pages = PageState::default();
        let zoom = ZoomState::default();
        let _element = view(ViewContext { i18n: &i18n }, &pages, &zoom);
    }

    #[test]
    fn page_indicator_shows_unknown_total() {
        let i18n = english();
        assert_eq!(page_indicator(&i18n, &PageState::default()), "Page 1 of ?");
    }

    #[test]
    fn page_indicator_shows_count() {
        let i18n = english();
        let mut pages = PageState::default();
        pages.on_document_loaded(10);
        pages.select_page(4);
        assert_eq!(page_indicator(&i18n, &pages), "Page 4 of 10");
    }

    #[test]
    fn zoom_indicator_rounds_percent() {
        let i18n = english();
        let mut zoom = ZoomState::default();
        zoom.zoom_in();
        zoom.zoom_in();
        assert_eq!(zoom_indicator(&i18n, &zoom), "Zoom: 120%");
    }
}
