// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires together localization, configuration and the page
//! viewer, and owns the handle to the document worker thread through the
//! viewer state.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::document::{DocumentSource, DocumentWorker};
use crate::i18n::fluent::I18n;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    /// i18n key of a settings problem found at startup.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", self.viewer.source())
            .field("page", &self.viewer.page())
            .field("page_count", &self.viewer.page_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires an Fn boot closure
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and translations, starts the PDFium worker and begins
    /// opening the document given on the command line.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let library_dir = flags
            .pdfium_lib
            .map(PathBuf::from)
            .or_else(|| config.document.pdfium_library_dir.clone());
        let worker = DocumentWorker::pdfium(library_dir);
        let source = DocumentSource::from(flags.file_path.map(PathBuf::from));

        Self::with_worker(i18n, &config, config_warning, source, worker)
    }

    /// Builds the app around an already running document worker.
    pub fn with_worker(
        i18n: I18n,
        config: &Config,
        config_warning: Option<String>,
        source: DocumentSource,
        worker: DocumentWorker,
    ) -> (Self, Task<Message>) {
        let (viewer, task) = component::State::new(source, worker, config);
        let app = Self {
            i18n,
            viewer,
            config_warning,
        };
        (app, task.map(Message::Viewer))
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.viewer.source().display_name() {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(message) => self.viewer.update(message).map(Message::Viewer),
            Message::DismissConfigWarning => {
                self.config_warning = None;
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
            config_warning: self.config_warning.as_deref(),
        })
    }

    pub fn viewer(&self) -> &component::State {
        &self.viewer
    }

    #[must_use]
    pub fn config_warning(&self) -> Option<&str> {
        self.config_warning.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_LOAD_WARNING_KEY;
    use crate::document::DocumentInfo;

    fn app_with(source: DocumentSource, warning: Option<String>) -> App {
        let config = Config::default();
        let i18n = I18n::new(Some("en-US".to_string()), &config);
        let (app, _task) =
            App::with_worker(i18n, &config, warning, source, DocumentWorker::spawn(drop));
        app
    }

    #[test]
    fn title_without_document_is_app_name() {
        let app = app_with(DocumentSource::Empty, None);
        assert_eq!(app.title(), "Iced Pager");
    }

    #[test]
    fn title_includes_file_name() {
        let app = app_with(DocumentSource::Path(PathBuf::from("/tmp/report.pdf")), None);
        assert_eq!(app.title(), "report.pdf - Iced Pager");
    }

    #[test]
    fn viewer_messages_are_forwarded() {
        let mut app = app_with(DocumentSource::Path(PathBuf::from("doc.pdf")), None);
        let _ = app.update(Message::Viewer(component::Message::DocumentLoaded(Ok(
            DocumentInfo { page_count: 3 },
        ))));
        assert_eq!(app.viewer().page_count(), Some(3));
    }

    #[test]
    fn config_warning_can_be_dismissed() {
        let mut app = app_with(
            DocumentSource::Empty,
            Some(CONFIG_LOAD_WARNING_KEY.to_string()),
        );
        assert_eq!(app.config_warning(), Some(CONFIG_LOAD_WARNING_KEY));
        let _ = app.view();
        let _ = app.update(Message::DismissConfigWarning);
        assert_eq!(app.config_warning(), None);
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.unwrap();
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
