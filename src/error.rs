// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Document Error: {0}")]
    Document(#[from] DocumentError),
    #[error("Logging Error: {0}")]
    Logging(String),
}

/// Failures reported by the document rendering backend.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DocumentError {
    /// No document source was provided.
    #[error("No document loaded")]
    NoDocument,

    /// The rendering library could not be loaded or initialized.
    #[error("PDF backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The source could not be read or decoded as a PDF.
    #[error("Failed to open document: {0}")]
    LoadFailed(String),

    /// The requested page does not exist in the open document.
    #[error("Page {page} is out of range (document has {page_count} pages)")]
    PageOutOfRange { page: u32, page_count: u32 },

    /// Rasterizing a page failed.
    #[error("Failed to render page: {0}")]
    RenderFailed(String),

    /// The document worker is no longer running.
    #[error("Document worker stopped")]
    WorkerStopped,
}

impl DocumentError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DocumentError::NoDocument => "error-document-none",
            DocumentError::BackendUnavailable(_) => "error-document-backend",
            DocumentError::LoadFailed(_) => "error-document-load",
            DocumentError::PageOutOfRange { .. } => "error-document-page-range",
            DocumentError::RenderFailed(_) => "error-document-render",
            DocumentError::WorkerStopped => "error-document-worker",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<log::SetLoggerError> for Error {
    fn from(err: log::SetLoggerError) -> Self {
        Error::Logging(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
