//! Upload/predict client for the remote classifier.
//!
//! One POST of multipart form data to `<base>/predict`, response branched by
//! status and content type. No retries, no timeout, no custom headers.

use crate::error::{BrainScanError, Result};
use reqwest::multipart;
use std::path::Path;

pub struct PredictClient {
    http: reqwest::Client,
    base_url: String,
}

/// Success-status outcome of a predict or health call.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerReply {
    Json(serde_json::Value),
    Text(String),
}

impl ServerReply {
    /// Text shown to the user for a successful reply.
    pub fn display_text(&self) -> String {
        match self {
            ServerReply::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ServerReply::Text(text) => format!("Server response (non-json): {}", text),
        }
    }
}

impl PredictClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn predict_url(&self) -> String {
        join_endpoint(&self.base_url, "predict")
    }

    pub fn health_url(&self) -> String {
        format!("{}/", self.base_url.trim_end_matches('/'))
    }

    /// Upload one image and return the classifier's reply.
    ///
    /// Local validation (missing file) fails before any network activity.
    pub async fn predict(&self, path: &Path) -> Result<ServerReply> {
        if !path.is_file() {
            return Err(BrainScanError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload")
            .to_string();
        let bytes = std::fs::read(path)?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(guess_mime(path))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.predict_url())
            .multipart(form)
            .send()
            .await?;

        read_reply(response).await
    }

    /// GET the service root. The backend answers with a status message.
    pub async fn health(&self) -> Result<ServerReply> {
        let response = self.http.get(self.health_url()).send().await?;
        read_reply(response).await
    }
}

/// Shared response branching: non-success status wins over content type,
/// and a declared-JSON body that fails to parse is reported explicitly
/// instead of bubbling up as a generic parse error.
async fn read_reply(response: reqwest::Response) -> Result<ServerReply> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        return Err(BrainScanError::Server {
            status: status.as_u16(),
            body,
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let body = response.text().await?;
    if content_type.contains("application/json") {
        let value = serde_json::from_str(&body)
            .map_err(|e| BrainScanError::MalformedResponse(e.to_string()))?;
        Ok(ServerReply::Json(value))
    } else {
        Ok(ServerReply::Text(body))
    }
}

/// Join the base URL and an endpoint path without doubling the separator,
/// whether or not the configured base carries a trailing slash.
fn join_endpoint(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("tif") | Some("tiff") => "image/tiff",
        _ => "application/octet-stream",
    }
}
