//! Request Plumbing
//!
//! Every service call is first described as an [`ApiRequest`] (method, path,
//! query, body) and then sent. Construction is pure so the exact wire shape
//! of each endpoint can be unit tested; sending attaches the bearer token
//! and applies the shared 401 handling.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::state::auth;

/// Errors surfaced to pages. `Unauthorized` has already cleared the session
/// and redirected by the time a page sees it; everything else is recoverable
/// by re-triggering the action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Session expired. Please log in again.")]
    Unauthorized,
    #[error("Network error: {0}")]
    Network(String),
    #[error("{0}")]
    Api(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// HTTP method of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A REST call described before it is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

/// Error body shape used by the backend. Some endpoints use `error`,
/// FastAPI-style ones use `detail`.
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Full URL for a given API base. Path segments and query pairs are
    /// percent-encoded, so free text from search boxes and lookups cannot
    /// corrupt the request.
    pub fn url(&self, api_base: &str) -> String {
        let base = format!("{}/", api_base.trim_end_matches('/'));
        let Ok(mut url) = url::Url::parse(&base) else {
            // An unparseable base is passed through untouched; the fetch
            // itself will report the bad endpoint.
            return base + &self.path;
        };

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(self.path.split('/'));
        }

        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        url.to_string()
    }

    /// Send the request and decode the JSON response.
    ///
    /// A 401 clears the stored session and redirects to `/login`; no call is
    /// ever retried here.
    pub async fn send<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(&super::get_api_base());

        let mut builder = match self.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        if let Some(token) = auth::stored_token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let result = match self.body {
            Some(body) => {
                builder
                    .json(&body)
                    .map_err(|e| ApiError::Network(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };

        let response = result.map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 401 {
            auth::clear_session();
            redirect_to_login();
            return Err(ApiError::Unauthorized);
        }

        if !response.ok() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error.or(body.detail))
                .unwrap_or_else(|| format!("Request failed with status {}", response.status()));
            return Err(ApiError::Api(message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_path_to_base() {
        let req = ApiRequest::get("sports/matches");
        assert_eq!(
            req.url("http://localhost:8000/api/v1"),
            "http://localhost:8000/api/v1/sports/matches"
        );
    }

    #[test]
    fn test_url_tolerates_trailing_slash_on_base() {
        let req = ApiRequest::get("auth/me");
        assert_eq!(
            req.url("http://localhost:8000/api/v1/"),
            "http://localhost:8000/api/v1/auth/me"
        );
    }

    #[test]
    fn test_url_appends_query_pairs() {
        let req = ApiRequest::get("admin/users")
            .query("page", 2)
            .query("per_page", 25);
        assert_eq!(
            req.url("http://api"),
            "http://api/admin/users?page=2&per_page=25"
        );
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let req = ApiRequest::get("admin/users").query("search", "tom & jerry #1");
        assert_eq!(
            req.url("http://api"),
            "http://api/admin/users?search=tom+%26+jerry+%231"
        );
    }

    #[test]
    fn test_path_segments_are_percent_encoded() {
        let req = ApiRequest::get(format!("sports/statistics/{}", "AS Roma?"));
        assert_eq!(
            req.url("http://api"),
            "http://api/sports/statistics/AS%20Roma%3F"
        );
    }

    #[test]
    fn test_json_body_is_kept_verbatim() {
        let req = ApiRequest::post("auth/login")
            .json(serde_json::json!({"email": "a@b.c", "password": "secret"}));
        assert_eq!(req.method(), Method::Post);
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({"email": "a@b.c", "password": "secret"}))
        );
    }
}
