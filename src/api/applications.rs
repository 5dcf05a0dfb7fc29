// =============================================================================
// Talevo Web - Applications API
// =============================================================================
// Table of Contents:
// 1. Types
// 2. Outcome Classification
// 3. Applications API Functions
// =============================================================================

use gloo_net::http::Request;
use serde::Deserialize;
use web_sys::FormData;
use super::{ApiClient, ApiError};

// -----------------------------------------------------------------------------
// 1. Types
// -----------------------------------------------------------------------------

/// Body returned by `POST /apply/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApplyResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A completed round trip: HTTP status class plus the parsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReply {
    pub ok: bool,
    pub body: ApplyResponse,
}

/// What the apply modal should show after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the application.
    Accepted,
    /// Request completed but the server refused it.
    Rejected { message: String },
    /// No usable response (transport failure or unreadable body).
    Unreachable,
}

pub const DEFAULT_REJECTION: &str = "Bir hata oluştu. Lütfen tekrar deneyin.";
pub const CONNECTION_ERROR: &str = "Bağlantı hatası. Lütfen daha sonra tekrar deneyin.";

// -----------------------------------------------------------------------------
// 2. Outcome Classification
// -----------------------------------------------------------------------------

impl SubmitOutcome {
    /// Text for the inline form message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Accepted => None,
            SubmitOutcome::Rejected { message } => Some(message),
            SubmitOutcome::Unreachable => Some(CONNECTION_ERROR),
        }
    }
}

impl From<ApplyReply> for SubmitOutcome {
    fn from(reply: ApplyReply) -> Self {
        if reply.ok && reply.body.success {
            return SubmitOutcome::Accepted;
        }

        let message = [reply.body.message, reply.body.error]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION.to_string());

        SubmitOutcome::Rejected { message }
    }
}

impl From<Result<ApplyReply, ApiError>> for SubmitOutcome {
    fn from(result: Result<ApplyReply, ApiError>) -> Self {
        match result {
            Ok(reply) => reply.into(),
            Err(e) => {
                log::error!("Application submission failed: {}", e);
                SubmitOutcome::Unreachable
            }
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Applications API Functions
// -----------------------------------------------------------------------------

/// Post the application form as multipart data.
///
/// No `Content-Type` header is set; the browser adds the multipart boundary.
pub async fn submit_application(
    client: &ApiClient,
    form: &FormData,
) -> Result<ApplyReply, ApiError> {
    let response = Request::post(&client.url("/apply/"))
        .body(form.clone())
        .map_err(|e| ApiError::Build(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let ok = response.ok();
    let body = response
        .json::<ApplyResponse>()
        .await
        .map_err(|e| ApiError::Deserialize(e.to_string()))?;

    Ok(ApplyReply { ok, body })
}
