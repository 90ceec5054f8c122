use crate::models::{AskRequest, AskResponse, UploadResponse};
use anyhow::Result;
use reqwest::multipart;
use reqwest::Client;
use std::env;
use std::path::Path;

/// HTTP client for the PDF question-answering backend.
///
/// The backend exposes two routes: `POST /upload-pdf` (multipart, field
/// "pdf") and `POST /ask` (JSON). Everything past those two routes is the
/// backend's business.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn from_env() -> Self {
        let base_url = env::var("BACKEND_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn upload_pdf(&self, path: &Path) -> Result<UploadResponse> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| anyhow::anyhow!("Not a file path: {}", path.display()))?;

        log::info!("Uploading PDF: {}", file_name);

        let bytes = tokio::fs::read(path).await?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = multipart::Form::new().part("pdf", part);

        let response = self
            .client
            .post(&format!("{}/upload-pdf", self.base_url))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("Upload endpoint error: {}", error_text));
        }

        Ok(response.json().await?)
    }

    pub async fn ask(&self, question: &str, pdf_name: &str) -> Result<AskResponse> {
        let request = AskRequest {
            question: question.to_string(),
            pdf_name: pdf_name.to_string(),
        };

        let response = self
            .client
            .post(&format!("{}/ask", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!("Ask endpoint error: {}", error_text));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let client = BackendClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
    }
}
