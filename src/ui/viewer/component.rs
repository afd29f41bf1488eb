// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the page position, the zoom state and the last rendered
//! page. Every change of page or scale asks the document worker for a new
//! rasterization; answers to superseded requests are dropped.

use crate::config::Config;
use crate::document::{DocumentInfo, DocumentSource, DocumentWorker, PageImage};
use crate::error::DocumentError;
use crate::i18n::fluent::I18n;
use crate::ui::state::debounce::Ticket;
use crate::ui::state::zoom::ZoomStep;
use crate::ui::viewer::controls;
use crate::ui::viewer::subcomponents::{pages, zoom};
use iced::widget::image::{self, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{Column, Container, Scrollable, Text};
use iced::task::Handle;
use iced::{alignment, event, keyboard, Element, Length, Task};

/// Messages emitted by viewer-related widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of opening the document.
    DocumentLoaded(Result<DocumentInfo, DocumentError>),
    /// Result of a render request.
    PageRendered {
        generation: u64,
        result: Result<PageImage, DocumentError>,
    },
    Controls(controls::Message),
    /// The settling window of a typed zoom value elapsed.
    ZoomInputSettled(Ticket),
    RawEvent(event::Event),
}

/// Progress of the document load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// No document was given.
    NoDocument,
    Loading,
    Loaded,
    Failed(DocumentError),
}

/// Last successfully rendered page.
#[derive(Debug, Clone)]
struct RenderedPage {
    handle: image::Handle,
    width: u32,
    height: u32,
}

/// Environment passed down by the application for rendering.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Complete viewer component state.
#[derive(Debug)]
pub struct State {
    source: DocumentSource,
    worker: DocumentWorker,
    load: LoadState,
    pages: pages::State,
    zoom: zoom::State,
    rendered: Option<RenderedPage>,
    render_error: Option<DocumentError>,
    rendering: bool,
    render_generation: u64,
    /// Aborts the in-flight render request when replaced or dropped.
    render_task: Option<Handle>,
}

impl State {
    /// Creates the viewer and starts opening `source` on `worker`.
    pub fn new(
        source: DocumentSource,
        worker: DocumentWorker,
        config: &Config,
    ) -> (Self, Task<Message>) {
        let zoom_step = ZoomStep::new(config.viewer.zoom_step_percent());
        let mut state = Self {
            source,
            worker,
            load: LoadState::NoDocument,
            pages: pages::State::default(),
            zoom: zoom::State::new(zoom_step, config.viewer.zoom_debounce()),
            rendered: None,
            render_error: None,
            rendering: false,
            render_generation: 0,
            render_task: None,
        };
        let task = state.load_document();
        (state, task)
    }

    fn load_document(&mut self) -> Task<Message> {
        if self.source.is_empty() {
            self.load = LoadState::NoDocument;
            return Task::none();
        }

        self.load = LoadState::Loading;
        Task::perform(
            self.worker.open(self.source.clone()),
            Message::DocumentLoaded,
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DocumentLoaded(Ok(info)) => self.on_document_load_success(info.page_count),
            Message::DocumentLoaded(Err(err)) => {
                self.on_document_load_failure(err);
                Task::none()
            }
            Message::PageRendered { generation, result } => {
                self.on_page_rendered(generation, result);
                Task::none()
            }
            Message::Controls(message) => self.handle_controls(message),
            Message::ZoomInputSettled(ticket) => self.on_zoom_input_settled(ticket),
            Message::RawEvent(event) => self.handle_raw_event(event),
        }
    }

    fn handle_controls(&mut self, message: controls::Message) -> Task<Message> {
        use controls::Message::*;

        match message {
            Previous => self.prev_page(),
            Next => self.next_page(),
            PageSelected(page) => self.select_page(page),
            ZoomIn => self.zoom_in(),
            ZoomOut => self.zoom_out(),
            ZoomInputChanged(text) => self.on_zoom_percent_edited(text),
            ZoomInputSubmitted => self.on_zoom_input_submitted(),
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Task<Message> {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return Task::none();
        };
        if modifiers.command() || modifiers.alt() {
            return Task::none();
        }

        match key.as_ref() {
            keyboard::Key::Named(
                keyboard::key::Named::ArrowLeft | keyboard::key::Named::PageUp,
            ) if self.pages.inner.can_go_previous() => self.prev_page(),
            keyboard::Key::Named(
                keyboard::key::Named::ArrowRight | keyboard::key::Named::PageDown,
            ) if self.pages.inner.can_go_next() => self.next_page(),
            keyboard::Key::Named(keyboard::key::Named::Home) => {
                self.navigate(pages::Message::First)
            }
            keyboard::Key::Named(keyboard::key::Named::End) => self.navigate(pages::Message::Last),
            keyboard::Key::Character("+" | "=") => self.zoom_in(),
            keyboard::Key::Character("-") => self.zoom_out(),
            _ => Task::none(),
        }
    }

    /// Records the page count and renders the current page.
    pub fn on_document_load_success(&mut self, page_count: u32) -> Task<Message> {
        log::info!("document loaded with {page_count} page(s)");
        self.load = LoadState::Loaded;
        self.navigate(pages::Message::DocumentLoaded(page_count))
    }

    pub fn on_document_load_failure(&mut self, err: DocumentError) {
        log::warn!("failed to load {:?}: {err}", self.source);
        self.pages.handle(pages::Message::DocumentUnloaded);
        self.load = LoadState::Failed(err);
    }

    pub fn next_page(&mut self) -> Task<Message> {
        self.navigate(pages::Message::Next)
    }

    pub fn prev_page(&mut self) -> Task<Message> {
        self.navigate(pages::Message::Previous)
    }

    pub fn select_page(&mut self, page: u32) -> Task<Message> {
        self.navigate(pages::Message::Select(page))
    }

    pub fn zoom_in(&mut self) -> Task<Message> {
        self.apply_zoom(zoom::Message::ZoomIn)
    }

    pub fn zoom_out(&mut self) -> Task<Message> {
        self.apply_zoom(zoom::Message::ZoomOut)
    }

    /// Stores the typed text and (re)starts the settling window.
    pub fn on_zoom_percent_edited(&mut self, text: String) -> Task<Message> {
        self.apply_zoom(zoom::Message::InputChanged(text))
    }

    pub fn on_zoom_input_settled(&mut self, ticket: Ticket) -> Task<Message> {
        self.apply_zoom(zoom::Message::InputSettled(ticket))
    }

    /// Commits the typed value without waiting for the settling window.
    pub fn on_zoom_input_submitted(&mut self) -> Task<Message> {
        self.apply_zoom(zoom::Message::InputSubmitted)
    }

    fn navigate(&mut self, message: pages::Message) -> Task<Message> {
        match self.pages.handle(message) {
            pages::Effect::PageChanged => self.request_render(),
            pages::Effect::None => Task::none(),
        }
    }

    fn apply_zoom(&mut self, message: zoom::Message) -> Task<Message> {
        match self.zoom.handle(message) {
            zoom::Effect::None => Task::none(),
            zoom::Effect::ScaleChanged => self.request_render(),
            zoom::Effect::ScheduleSettle(ticket) => self
                .zoom
                .inner
                .debounced_input_mut()
                .schedule(ticket, Message::ZoomInputSettled),
        }
    }

    fn request_render(&mut self) -> Task<Message> {
        if self.load != LoadState::Loaded {
            return Task::none();
        }

        self.render_generation += 1;
        self.rendering = true;
        let generation = self.render_generation;
        let (task, handle) = Task::perform(
            self.worker
                .render(self.pages.page(), self.zoom.render_scale()),
            move |result| Message::PageRendered { generation, result },
        )
        .abortable();
        // Dropping the previous handle closes its reply, so the worker skips it
        self.render_task = Some(handle.abort_on_drop());
        task
    }

    fn on_page_rendered(&mut self, generation: u64, result: Result<PageImage, DocumentError>) {
        if generation != self.render_generation {
            log::debug!("dropping stale render {generation}");
            return;
        }

        self.rendering = false;
        self.render_task = None;
        match result {
            Ok(page) => {
                self.rendered = Some(RenderedPage {
                    handle: page.to_handle(),
                    width: page.width,
                    height: page.height,
                });
                self.render_error = None;
            }
            Err(err) => {
                log::warn!("failed to render page {}: {err}", self.pages.page());
                self.render_error = Some(err);
            }
        }
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.pages.page()
    }

    #[must_use]
    pub fn page_count(&self) -> Option<u32> {
        self.pages.page_count()
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.pages.inner.can_go_next()
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.pages.inner.can_go_previous()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.zoom.scale()
    }

    #[must_use]
    pub fn zoom_input(&self) -> &str {
        self.zoom.zoom_input()
    }

    /// Ticket of the open zoom settling window, if the user is typing.
    #[must_use]
    pub fn pending_zoom_ticket(&self) -> Option<Ticket> {
        self.zoom.inner.pending_ticket()
    }

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    #[must_use]
    pub fn render_error(&self) -> Option<&DocumentError> {
        self.render_error.as_ref()
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.rendering
    }

    #[must_use]
    pub fn has_rendered_page(&self) -> bool {
        self.rendered.is_some()
    }

    #[must_use]
    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    #[must_use]
    pub fn page_indicator(&self, i18n: &I18n) -> String {
        controls::page_indicator(i18n, &self.pages.inner)
    }

    #[must_use]
    pub fn zoom_indicator(&self, i18n: &I18n) -> String {
        controls::zoom_indicator(i18n, &self.zoom.inner)
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let controls = controls::view(
            controls::ViewContext { i18n: env.i18n },
            &self.pages.inner,
            &self.zoom.inner,
        )
        .map(Message::Controls);

        Column::new()
            .push(controls)
            .push(self.page_area(env.i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn page_area<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        match &self.load {
            LoadState::NoDocument => centered(
                Column::new()
                    .spacing(8)
                    .align_x(alignment::Horizontal::Center)
                    .push(Text::new(i18n.tr("empty-state-title")).size(24))
                    .push(Text::new(i18n.tr("empty-state-subtitle"))),
            ),
            LoadState::Loading => centered(Text::new(i18n.tr("viewer-loading"))),
            LoadState::Failed(err) => error_view(i18n, err),
            LoadState::Loaded => {
                if let Some(err) = &self.render_error {
                    return error_view(i18n, err);
                }
                match &self.rendered {
                    Some(page) => page_view(page),
                    None => centered(Text::new(i18n.tr("viewer-rendering"))),
                }
            }
        }
    }
}

fn page_view(page: &RenderedPage) -> Element<'_, Message> {
    let image = Image::new(page.handle.clone())
        .width(Length::Fixed(page.width as f32))
        .height(Length::Fixed(page.height as f32));

    Scrollable::new(Container::new(image).padding(16))
        .direction(Direction::Both {
            vertical: Scrollbar::new(),
            horizontal: Scrollbar::new(),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn error_view<'a>(i18n: &'a I18n, err: &'a DocumentError) -> Element<'a, Message> {
    centered(
        Column::new()
            .spacing(8)
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(i18n.tr(err.i18n_key())).size(20))
            .push(Text::new(err.to_string()).size(14)),
    )
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
