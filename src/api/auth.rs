//! Auth Service
//!
//! Register, login, and current-user lookup.

use serde_json::json;

use super::request::{ApiError, ApiRequest};
use crate::state::auth::User;

/// Token + user pair returned by login and register.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: User,
}

pub(crate) fn login_request(email: &str, password: &str) -> ApiRequest {
    ApiRequest::post("auth/login").json(json!({
        "email": email,
        "password": password,
    }))
}

/// Exchange credentials for a bearer token.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    login_request(email, password).send().await
}

pub(crate) fn register_request(
    username: &str,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> ApiRequest {
    ApiRequest::post("auth/register").json(json!({
        "username": username,
        "email": email,
        "password": password,
        "first_name": first_name,
        "last_name": last_name,
    }))
}

/// Create an account. The backend logs the new user straight in.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
) -> Result<AuthResponse, ApiError> {
    register_request(username, email, password, first_name, last_name)
        .send()
        .await
}

/// Fetch the profile behind the current token.
pub async fn me() -> Result<User, ApiError> {
    ApiRequest::get("auth/me").send().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::Method;

    #[test]
    fn test_login_posts_exact_body() {
        let req = login_request("fan@predictwise.io", "hunter22");
        assert_eq!(req.method(), Method::Post);
        assert_eq!(req.path(), "auth/login");
        assert_eq!(
            req.body(),
            Some(&serde_json::json!({
                "email": "fan@predictwise.io",
                "password": "hunter22",
            }))
        );
    }

    #[test]
    fn test_register_sends_all_profile_fields() {
        let req = register_request("fan", "fan@predictwise.io", "hunter22", "Sam", "Field");
        assert_eq!(req.path(), "auth/register");
        let body = req.body().unwrap();
        assert_eq!(body["username"], "fan");
        assert_eq!(body["first_name"], "Sam");
        assert_eq!(body["last_name"], "Field");
    }
}
