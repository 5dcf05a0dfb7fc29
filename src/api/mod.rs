// =============================================================================
// Talevo Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Error Types
// 4. API Client
// =============================================================================

pub mod applications;
pub mod positions;

pub use applications::*;
pub use positions::*;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

// -----------------------------------------------------------------------------
// 3. Error Types
// -----------------------------------------------------------------------------

/// API error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(String),

    #[error("Request build error: {0}")]
    Build(String),
}

// -----------------------------------------------------------------------------
// 4. API Client
// -----------------------------------------------------------------------------

/// HTTP client for the CRM API.
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint such as `/positions/`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Handle API response.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        match status {
            200..=299 => response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Deserialize(e.to_string())),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Server { status, message })
            }
        }
    }

    /// GET request.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(endpoint))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let client = ApiClient::new("https://crm.talevo.com.tr/api");
        assert_eq!(client.url("/positions/"), "https://crm.talevo.com.tr/api/positions/");
        assert_eq!(client.base_url(), "https://crm.talevo.com.tr/api");
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Server { status: 502, message: "Bad Gateway".into() };
        assert_eq!(err.to_string(), "Server error: 502 - Bad Gateway");
        assert_eq!(ApiError::Network("offline".into()).to_string(), "Network error: offline");
    }
}
