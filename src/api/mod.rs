//! HTTP API Client
//!
//! Typed service modules for the PredictWise REST API, one per backend
//! resource. All calls go through [`request::ApiRequest`], which attaches
//! the bearer token and handles 401 centrally.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod finance;
pub mod request;
pub mod sports;
pub mod watchlist;

pub use request::{ApiError, ApiRequest};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

const API_URL_KEY: &str = "predictwise_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

// ============ Shared Types ============

/// Which backend produced a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Sports,
    Finance,
}

impl Domain {
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Sports => "Sports",
            Domain::Finance => "Finance",
        }
    }
}

/// A stored model prediction, as returned by both the sports and finance
/// endpoints.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Prediction {
    pub id: u32,
    pub domain: Domain,
    /// Input the model was asked about (fixture, ticker, ...), kept as raw
    /// JSON since its shape differs per domain.
    #[serde(default)]
    pub input: serde_json::Value,
    pub result: String,
    /// Confidence score in `0.0..=1.0`
    pub confidence: f64,
    pub model_version: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Generic acknowledgement body for delete-style endpoints.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_parses_lowercase_wire_values() {
        let sports: Domain = serde_json::from_str("\"sports\"").unwrap();
        let finance: Domain = serde_json::from_str("\"finance\"").unwrap();
        assert_eq!(sports, Domain::Sports);
        assert_eq!(finance, Domain::Finance);
    }

    #[test]
    fn test_prediction_decodes_minimal_payload() {
        let prediction: Prediction = serde_json::from_value(serde_json::json!({
            "id": 7,
            "domain": "finance",
            "result": "AAPL up 2.3% in 7 days",
            "confidence": 0.81,
            "model_version": "v2.1.0"
        }))
        .unwrap();
        assert_eq!(prediction.domain, Domain::Finance);
        assert!(prediction.created_at.is_none());
        assert!(prediction.input.is_null());
    }
}
