// SPDX-License-Identifier: MPL-2.0
//! Document loading and page rasterization.
//!
//! The viewer never touches the PDF library directly. It talks to a
//! [`DocumentWorker`], a handle to a dedicated thread that owns a
//! [`RenderBackend`] and answers open/render requests asynchronously.
//!
//! ```text
//! viewer ──Request──▶ worker thread ──▶ RenderBackend (PDFium)
//!        ◀──oneshot──
//! ```

pub mod pdfium;
pub mod worker;

pub use worker::DocumentWorker;

use crate::error::DocumentError;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Where the document comes from. Fixed at startup.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum DocumentSource {
    /// Nothing to show.
    #[default]
    Empty,
    /// A file on disk.
    Path(PathBuf),
    /// Document bytes already in memory.
    Bytes(Arc<[u8]>),
}

impl DocumentSource {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Short human-readable label, used for the window title.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            Self::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            Self::Bytes(_) => None,
        }
    }
}

impl From<Option<PathBuf>> for DocumentSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Empty, Self::Path)
    }
}

impl fmt::Debug for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
        }
    }
}

/// Facts about a successfully opened document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentInfo {
    pub page_count: u32,
}

/// A rasterized page in RGBA8 layout.
#[derive(Clone, PartialEq)]
pub struct PageImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Arc<Vec<u8>>,
}

impl PageImage {
    /// Wraps raw RGBA pixels. Fails when the buffer does not match the size.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DocumentError> {
        let expected = u64::from(width) * u64::from(height) * 4;
        if pixels.len() as u64 != expected {
            return Err(DocumentError::RenderFailed(format!(
                "bitmap is {} bytes, expected {expected} for {width}x{height}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: Arc::new(pixels),
        })
    }

    /// Converts to an iced image handle.
    #[must_use]
    pub fn to_handle(&self) -> iced::widget::image::Handle {
        iced::widget::image::Handle::from_rgba(
            self.width,
            self.height,
            self.pixels.as_ref().clone(),
        )
    }
}

impl fmt::Debug for PageImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// The rasterization collaborator.
///
/// Implementations hold at most one open document. Page numbers are 1-based.
pub trait RenderBackend {
    /// Decodes `source`, replacing any open document, and returns its page count.
    fn open(&mut self, source: &DocumentSource) -> Result<u32, DocumentError>;

    /// Rasterizes `page` of the open document at `scale` (1.0 = 72 dpi).
    fn render(&mut self, page: u32, scale: f32) -> Result<PageImage, DocumentError>;
}
