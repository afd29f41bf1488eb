// SPDX-License-Identifier: MPL-2.0
//! Page navigation sub-component.

use crate::ui::state::pages::PageState;

/// Page navigation sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub inner: PageState,
}

/// Messages for the page navigation sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A document finished loading with this many pages.
    DocumentLoaded(u32),
    /// The document could not be loaded.
    DocumentUnloaded,
    Next,
    Previous,
    Select(u32),
    First,
    Last,
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The current page changed or became renderable.
    PageChanged,
}

impl State {
    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DocumentLoaded(page_count) => {
                self.inner.on_document_loaded(page_count);
                Effect::PageChanged
            }
            Message::DocumentUnloaded => {
                self.inner.on_document_unloaded();
                Effect::None
            }
            Message::Next => {
                self.inner.next_page();
                Effect::PageChanged
            }
            Message::Previous => {
                self.inner.prev_page();
                Effect::PageChanged
            }
            Message::Select(page) => changed(self.inner.select_page(page)),
            Message::First => changed(self.inner.first_page()),
            Message::Last => changed(self.inner.last_page()),
        }
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.inner.page_number
    }

    #[must_use]
    pub fn page_count(&self) -> Option<u32> {
        self.inner.page_count
    }
}

fn changed(page_changed: bool) -> Effect {
    if page_changed {
        Effect::PageChanged
    } else {
        Effect::None
    }
}
