// SPDX-License-Identifier: MPL-2.0
//! Dedicated document thread.
//!
//! PDF handles cannot move between threads, so one OS thread owns the
//! backend for the lifetime of the app. The UI talks to it through an
//! unbounded request channel; every request carries a oneshot reply sender.
//! The thread exits once all [`DocumentWorker`] handles are dropped.

use super::{DocumentInfo, DocumentSource, PageImage, RenderBackend};
use crate::error::DocumentError;
use std::future::Future;
use std::path::PathBuf;
use std::thread;
use tokio::sync::{mpsc, oneshot};

const THREAD_NAME: &str = "document-worker";

/// Work items handled by the document thread.
#[derive(Debug)]
pub enum Request {
    Open {
        source: DocumentSource,
        reply: oneshot::Sender<Result<DocumentInfo, DocumentError>>,
    },
    Render {
        page: u32,
        scale: f32,
        reply: oneshot::Sender<Result<PageImage, DocumentError>>,
    },
}

/// Cloneable handle to the document thread.
#[derive(Debug, Clone)]
pub struct DocumentWorker {
    sender: mpsc::UnboundedSender<Request>,
}

impl DocumentWorker {
    /// Starts a thread running `run` over the request stream.
    ///
    /// If the thread cannot be spawned, the error is logged and every request
    /// on the returned handle fails with [`DocumentError::WorkerStopped`].
    pub fn spawn<F>(run: F) -> Self
    where
        F: FnOnce(mpsc::UnboundedReceiver<Request>) + Send + 'static,
    {
        let (sender, receiver) = mpsc::unbounded_channel();

        if let Err(err) = thread::Builder::new()
            .name(THREAD_NAME.to_string())
            .spawn(move || run(receiver))
        {
            log::error!("failed to spawn {THREAD_NAME} thread: {err}");
        }

        Self { sender }
    }

    /// Starts a thread serving requests with the backend built by `make`.
    ///
    /// The backend is constructed on the worker thread itself.
    pub fn with_backend<B, F>(make: F) -> Self
    where
        B: RenderBackend,
        F: FnOnce() -> B + Send + 'static,
    {
        Self::spawn(move |requests| {
            let mut backend = make();
            serve(&mut backend, requests);
        })
    }

    /// Starts a thread backed by PDFium.
    pub fn pdfium(library_dir: Option<PathBuf>) -> Self {
        Self::spawn(move |requests| super::pdfium::run(library_dir, requests))
    }

    /// Opens `source`, replacing the current document.
    pub fn open(
        &self,
        source: DocumentSource,
    ) -> impl Future<Output = Result<DocumentInfo, DocumentError>> + Send + 'static {
        let (reply, response) = oneshot::channel();
        let sent = self.sender.send(Request::Open { source, reply }).is_ok();
        receive(sent, response)
    }

    /// Rasterizes a page of the open document.
    pub fn render(
        &self,
        page: u32,
        scale: f32,
    ) -> impl Future<Output = Result<PageImage, DocumentError>> + Send + 'static {
        let (reply, response) = oneshot::channel();
        let sent = self
            .sender
            .send(Request::Render { page, scale, reply })
            .is_ok();
        receive(sent, response)
    }

    /// Whether the thread is still accepting requests.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.sender.is_closed()
    }
}

async fn receive<T>(
    sent: bool,
    response: oneshot::Receiver<Result<T, DocumentError>>,
) -> Result<T, DocumentError> {
    if !sent {
        return Err(DocumentError::WorkerStopped);
    }
    response.await.unwrap_or(Err(DocumentError::WorkerStopped))
}

/// Answers requests with `backend` until every sender is gone.
///
/// Must run on a plain thread, outside any async runtime.
pub fn serve<B: RenderBackend>(backend: &mut B, mut requests: mpsc::UnboundedReceiver<Request>) {
    log::debug!("{THREAD_NAME} started");

    while let Some(request) = requests.blocking_recv() {
        match request {
            Request::Open { source, reply } => {
                log::debug!("opening {source:?}");
                let result = backend
                    .open(&source)
                    .map(|page_count| DocumentInfo { page_count });
                // A dropped receiver means nobody waits for the answer anymore
                let _ = reply.send(result);
            }
            Request::Render { page, scale, reply } => {
                if reply.is_closed() {
                    continue;
                }
                log::debug!("rendering page {page} at scale {scale}");
                let _ = reply.send(backend.render(page, scale));
            }
        }
    }

    log::debug!("{THREAD_NAME} stopped");
}
