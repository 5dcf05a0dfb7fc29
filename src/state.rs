// =============================================================================
// Talevo Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. API Configuration
// 2. App State
// =============================================================================

// -----------------------------------------------------------------------------
// 1. API Configuration
// -----------------------------------------------------------------------------

/// CRM API base URL. Endpoints are appended with a leading slash.
pub const API_BASE: &str = "https://crm.talevo.com.tr/api"; // Production
// pub const API_BASE: &str = "https://web-production-03d65.up.railway.app/api"; // Fallback

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState {
    /// API base URL.
    pub api_url: String,
}

impl AppState {
    /// Create a new app state instance pointing at the CRM API.
    pub fn new() -> Self {
        Self::with_api_url(API_BASE)
    }

    /// Create an app state against a different API base (staging, local CRM).
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
