use crate::backend_client::BackendClient;
use std::path::Path;

pub const UPLOAD_SUCCESS_NOTICE: &str = "PDF uploaded and processed successfully!";
pub const UPLOAD_FAILURE_NOTICE: &str = "Failed to process PDF.";
pub const CONNECTION_ERROR_ANSWER: &str = "Error connecting to server.";

/// The one interactive surface: remembers which document questions are
/// scoped to and the last answer shown, and drives the two backend calls.
///
/// Both values are transient and last-write-wins; nothing survives the
/// session.
pub struct ChatSession {
    backend: BackendClient,
    pdf_name: Option<String>,
    answer: String,
}

impl ChatSession {
    pub fn new(backend: BackendClient) -> Self {
        Self {
            backend,
            pdf_name: None,
            answer: String::new(),
        }
    }

    pub fn pdf_name(&self) -> Option<&str> {
        self.pdf_name.as_deref()
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Uploads a PDF and returns the notice to show the user.
    ///
    /// The file's name is remembered before the request resolves; it is the
    /// key later questions are scoped with, whether or not the server
    /// confirms the upload.
    pub async fn submit_document(&mut self, path: &Path) -> &'static str {
        if let Some(name) = path.file_name() {
            self.pdf_name = Some(name.to_string_lossy().to_string());
        }

        match self.backend.upload_pdf(path).await {
            Ok(response) if response.success => UPLOAD_SUCCESS_NOTICE,
            Ok(_) => {
                log::error!("Upload rejected by server: {}", path.display());
                UPLOAD_FAILURE_NOTICE
            }
            Err(e) => {
                log::error!("Error uploading PDF: {:#}", e);
                UPLOAD_FAILURE_NOTICE
            }
        }
    }

    /// Asks a question against the remembered document and returns the
    /// answer to display. Any failure collapses to a fixed placeholder; the
    /// session stays usable.
    pub async fn submit_question(&mut self, question: &str) -> &str {
        // No document picked yet: the name goes out empty, as-is.
        let pdf_name = self.pdf_name.clone().unwrap_or_default();

        match self.backend.ask(question, &pdf_name).await {
            Ok(response) => self.answer = response.answer,
            Err(e) => {
                log::error!("Error asking question: {:#}", e);
                self.answer = CONNECTION_ERROR_ANSWER.to_string();
            }
        }

        &self.answer
    }
}
