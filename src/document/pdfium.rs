// SPDX-License-Identifier: MPL-2.0
//! PDFium rendering backend.
//!
//! Library search order:
//! 1. Explicit directory (`--pdfium-lib` or `[document] pdfium_library_dir`)
//! 2. Executable's directory (app bundles)
//! 3. Current working directory
//! 4. System library paths

use super::worker::{serve, Request};
use super::{DocumentSource, PageImage, RenderBackend};
use crate::error::DocumentError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Thread body for a PDFium-backed worker.
///
/// Binding failures are not fatal: the worker keeps answering, with
/// [`DocumentError::BackendUnavailable`] for every request.
pub fn run(library_dir: Option<PathBuf>, requests: mpsc::UnboundedReceiver<Request>) {
    match bind(library_dir.as_deref()) {
        Ok(pdfium) => {
            let mut backend = PdfiumBackend::new(&pdfium);
            serve(&mut backend, requests);
        }
        Err(err) => {
            log::warn!("{err}");
            let mut backend = UnavailableBackend::from(err);
            serve(&mut backend, requests);
        }
    }
}

/// Directories searched for the platform PDFium library, in order.
#[must_use]
pub fn library_dirs(explicit: Option<&Path>) -> Vec<PathBuf> {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    explicit
        .map(Path::to_path_buf)
        .into_iter()
        .chain(exe_dir)
        .chain(std::iter::once(PathBuf::from("./")))
        .collect()
}

/// Binds PDFium from the first directory that has it, else the system library.
pub fn bind(explicit: Option<&Path>) -> Result<Pdfium, DocumentError> {
    for dir in library_dirs(explicit) {
        match Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&dir)) {
            Ok(bindings) => {
                log::debug!("bound PDFium from {}", dir.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(err) => log::debug!("no PDFium in {}: {err}", dir.display()),
        }
    }

    Pdfium::bind_to_system_library()
        .map(Pdfium::new)
        .map_err(|err| DocumentError::BackendUnavailable(err.to_string()))
}

/// Renders with a bound PDFium library. Holds at most one open document.
pub struct PdfiumBackend<'a> {
    pdfium: &'a Pdfium,
    document: Option<PdfDocument<'a>>,
}

impl<'a> PdfiumBackend<'a> {
    #[must_use]
    pub fn new(pdfium: &'a Pdfium) -> Self {
        Self {
            pdfium,
            document: None,
        }
    }
}

impl RenderBackend for PdfiumBackend<'_> {
    fn open(&mut self, source: &DocumentSource) -> Result<u32, DocumentError> {
        self.document = None;

        let document = match source {
            DocumentSource::Empty => return Err(DocumentError::NoDocument),
            DocumentSource::Path(path) => self.pdfium.load_pdf_from_file(path, None),
            DocumentSource::Bytes(bytes) => self.pdfium.load_pdf_from_byte_vec(bytes.to_vec(), None),
        }
        .map_err(|err| DocumentError::LoadFailed(err.to_string()))?;

        let page_count = u32::from(document.pages().len());
        self.document = Some(document);
        Ok(page_count)
    }

    fn render(&mut self, page: u32, scale: f32) -> Result<PageImage, DocumentError> {
        let document = self.document.as_ref().ok_or(DocumentError::NoDocument)?;
        let page_count = u32::from(document.pages().len());
        let out_of_range = DocumentError::PageOutOfRange { page, page_count };

        if page == 0 || page > page_count {
            return Err(out_of_range);
        }
        let index = u16::try_from(page - 1).map_err(|_| out_of_range)?;

        let pdf_page = document
            .pages()
            .get(index)
            .map_err(|err| DocumentError::RenderFailed(err.to_string()))?;

        let config = PdfRenderConfig::new().scale_page_by_factor(scale);
        let bitmap = pdf_page
            .render_with_config(&config)
            .map_err(|err| DocumentError::RenderFailed(err.to_string()))?;

        let width = u32::try_from(bitmap.width()).unwrap_or(0);
        let height = u32::try_from(bitmap.height()).unwrap_or(0);
        PageImage::from_rgba(width, height, Vec::from(bitmap.as_rgba_bytes()))
    }
}

/// Stand-in used when the library could not be bound.
#[derive(Debug)]
pub struct UnavailableBackend {
    reason: String,
}

impl From<DocumentError> for UnavailableBackend {
    fn from(err: DocumentError) -> Self {
        let reason = match err {
            DocumentError::BackendUnavailable(reason) => reason,
            other => other.to_string(),
        };
        Self { reason }
    }
}

impl RenderBackend for UnavailableBackend {
    fn open(&mut self, _source: &DocumentSource) -> Result<u32, DocumentError> {
        Err(DocumentError::BackendUnavailable(self.reason.clone()))
    }

    fn render(&mut self, _page: u32, _scale: f32) -> Result<PageImage, DocumentError> {
        Err(DocumentError::BackendUnavailable(self.reason.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_is_searched_first() {
        let dirs = library_dirs(Some(Path::new("/opt/pdfium/lib")));
        assert_eq!(dirs.first(), Some(&PathBuf::from("/opt/pdfium/lib")));
        assert_eq!(dirs.last(), Some(&PathBuf::from("./")));
    }

    #[test]
    fn working_dir_is_always_searched() {
        let dirs = library_dirs(None);
        assert!(dirs.contains(&PathBuf::from("./")));
    }

    #[test]
    fn unavailable_backend_reports_reason() {
        let mut backend =
            UnavailableBackend::from(DocumentError::BackendUnavailable("not found".to_string()));
        assert_eq!(
            backend.open(&DocumentSource::Empty),
            Err(DocumentError::BackendUnavailable("not found".to_string()))
        );
        assert_eq!(
            backend.render(1, 1.0),
            Err(DocumentError::BackendUnavailable("not found".to_string()))
        );
    }
}
