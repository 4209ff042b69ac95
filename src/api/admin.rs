//! Admin Service
//!
//! User management, platform statistics, and the activity feed. All of these
//! endpoints require the admin role; the backend answers 403 otherwise.

use super::request::{ApiError, ApiRequest};
use super::Ack;
use crate::state::auth::User;

/// Partial user update; only the set fields are sent.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AdminStats {
    pub total_users: u64,
    pub active_users: u64,
    pub admin_users: u64,
    #[serde(default)]
    pub predictions_today: Option<u64>,
    #[serde(default)]
    pub predictions_total: Option<u64>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ActivityEntry {
    pub username: String,
    pub action: String,
    pub timestamp: String,
}

#[derive(serde::Deserialize)]
struct ActivityResponse {
    activity: Vec<ActivityEntry>,
}

pub(crate) fn list_users_request(search: Option<&str>, page: u32, per_page: u32) -> ApiRequest {
    let mut req = ApiRequest::get("admin/users")
        .query("page", page)
        .query("per_page", per_page);
    if let Some(search) = search {
        if !search.is_empty() {
            req = req.query("search", search);
        }
    }
    req
}

/// List users with optional search and pagination.
pub async fn list_users(
    search: Option<&str>,
    page: u32,
    per_page: u32,
) -> Result<UserListResponse, ApiError> {
    list_users_request(search, page, per_page).send().await
}

pub async fn get_user(id: u32) -> Result<User, ApiError> {
    ApiRequest::get(format!("admin/users/{}", id)).send().await
}

/// Apply a partial update to a user record.
pub async fn update_user(id: u32, update: &UserUpdate) -> Result<User, ApiError> {
    let body = serde_json::to_value(update)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    ApiRequest::put(format!("admin/users/{}", id))
        .json(body)
        .send()
        .await
}

pub async fn delete_user(id: u32) -> Result<Ack, ApiError> {
    ApiRequest::delete(format!("admin/users/{}", id))
        .send()
        .await
}

/// Grant the admin role.
pub async fn promote_user(id: u32) -> Result<User, ApiError> {
    ApiRequest::post(format!("admin/users/{}/promote", id))
        .send()
        .await
}

/// Revoke the admin role.
pub async fn demote_user(id: u32) -> Result<User, ApiError> {
    ApiRequest::post(format!("admin/users/{}/demote", id))
        .send()
        .await
}

pub async fn stats() -> Result<AdminStats, ApiError> {
    ApiRequest::get("admin/stats").send().await
}

pub async fn activity() -> Result<Vec<ActivityEntry>, ApiError> {
    let response: ActivityResponse = ApiRequest::get("admin/activity").send().await?;
    Ok(response.activity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::Method;

    #[test]
    fn test_list_users_includes_pagination() {
        let req = list_users_request(None, 3, 50);
        assert_eq!(req.method(), Method::Get);
        assert_eq!(req.url("http://api"), "http://api/admin/users?page=3&per_page=50");
    }

    #[test]
    fn test_list_users_adds_search_when_present() {
        let req = list_users_request(Some("sam"), 1, 25);
        assert_eq!(
            req.url("http://api"),
            "http://api/admin/users?page=1&per_page=25&search=sam"
        );
    }

    #[test]
    fn test_empty_search_is_omitted() {
        let req = list_users_request(Some(""), 1, 25);
        assert_eq!(req.url("http://api"), "http://api/admin/users?page=1&per_page=25");
    }

    #[test]
    fn test_user_update_serializes_only_set_fields() {
        let update = UserUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({"is_active": false}));
    }
}
