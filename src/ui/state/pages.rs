// SPDX-License-Identifier: MPL-2.0
//! Current page and page count of the open document.
//!
//! Page numbers are 1-based. The page count stays unknown until a document
//! finished loading; while unknown, forward navigation is disabled.

/// Page position within the loaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Total number of pages, once known.
    pub page_count: Option<u32>,
    /// Current 1-based page number.
    pub page_number: u32,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page_count: None,
            page_number: 1,
        }
    }
}

impl PageState {
    /// Records the page count of a freshly loaded document.
    ///
    /// The current page is kept while it still exists, otherwise the first page is shown.
    pub fn on_document_loaded(&mut self, page_count: u32) {
        self.page_count = Some(page_count);
        if self.page_number > page_count {
            self.page_number = 1;
        }
    }

    /// Forgets the page count (new document or failed load).
    pub fn on_document_unloaded(&mut self) {
        self.page_count = None;
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.page_number > 1
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.page_count
            .is_some_and(|count| self.page_number < count)
    }

    /// Moves forward one page.
    ///
    /// Not bounded here: callers gate on [`can_go_next`](Self::can_go_next).
    pub fn next_page(&mut self) {
        self.page_number = self.page_number.saturating_add(1);
    }

    /// Moves back one page, saturating at 0.
    pub fn prev_page(&mut self) {
        self.page_number = self.page_number.saturating_sub(1);
    }

    /// Jumps to `page`. Values outside `1..=page_count` are ignored.
    pub fn select_page(&mut self, page: u32) -> bool {
        let Some(count) = self.page_count else {
            return false;
        };
        if page == 0 || page > count || page == self.page_number {
            return false;
        }
        self.page_number = page;
        true
    }

    pub fn first_page(&mut self) -> bool {
        self.select_page(1)
    }

    pub fn last_page(&mut self) -> bool {
        match self.page_count {
            Some(count) => self.select_page(count),
            None => false,
        }
    }

    /// Entries for the page picker: `1..=page_count`, empty while unknown.
    #[must_use]
    pub fn page_options(&self) -> Vec<u32> {
        match self.page_count {
            Some(count) => (1..=count).collect(),
            None => Vec::new(),
        }
    }
}
