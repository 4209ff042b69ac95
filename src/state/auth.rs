//! Auth Session State
//!
//! The current user and bearer token, held in signals and persisted to
//! browser local storage. The token is read back on every outgoing request
//! and wiped by a 401 or an explicit logout.

use leptos::*;

const TOKEN_KEY: &str = "predictwise_token";
const USER_KEY: &str = "predictwise_user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// Account record from the API.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_active() -> bool {
    true
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown in the nav bar: first name when present, username otherwise.
    pub fn display_name(&self) -> &str {
        match self.first_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Auth session provided to the component tree.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub user: RwSignal<Option<User>>,
    pub token: RwSignal<Option<String>>,
}

/// Provide the auth session, restored from local storage.
pub fn provide_auth_state() {
    let state = AuthState {
        user: create_rw_signal(stored_user()),
        token: create_rw_signal(stored_token()),
    };

    provide_context(state);
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.get().map(|u| u.is_admin()).unwrap_or(false)
    }

    /// Store a fresh session after login or signup.
    pub fn set_session(&self, token: String, user: User) {
        persist_session(&token, &user);
        self.token.set(Some(token));
        self.user.set(Some(user));
    }

    /// Replace the cached user (e.g. after `GET /auth/me`), keeping the token.
    pub fn set_user(&self, user: User) {
        if let Some(storage) = local_storage() {
            if let Ok(json) = serde_json::to_string(&user) {
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
        self.user.set(Some(user));
    }

    /// Drop the session locally. No server call is involved.
    pub fn logout(&self) {
        clear_session();
        self.token.set(None);
        self.user.set(None);
    }
}

// ============ Local Storage ============

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Token as persisted, if any. Used by the request layer on every call.
pub fn stored_token() -> Option<String> {
    local_storage()?.get_item(TOKEN_KEY).ok().flatten()
}

/// Cached user record, if the stored JSON still parses.
pub fn stored_user() -> Option<User> {
    let json = local_storage()?.get_item(USER_KEY).ok().flatten()?;
    serde_json::from_str(&json).ok()
}

pub fn persist_session(token: &str, user: &User) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &json);
        }
    }
}

/// Wipe the persisted session. Called on logout and on any 401.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: Role) -> User {
        User {
            id: 1,
            email: "fan@predictwise.io".into(),
            username: "fan".into(),
            first_name: Some("Sam".into()),
            last_name: None,
            role,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_role_gates_is_admin() {
        assert!(sample_user(Role::Admin).is_admin());
        assert!(!sample_user(Role::User).is_admin());
    }

    #[test]
    fn test_display_name_prefers_first_name() {
        let mut user = sample_user(Role::User);
        assert_eq!(user.display_name(), "Sam");
        user.first_name = None;
        assert_eq!(user.display_name(), "fan");
        user.first_name = Some(String::new());
        assert_eq!(user.display_name(), "fan");
    }

    #[test]
    fn test_user_round_trips_through_stored_json() {
        let user = sample_user(Role::Admin);
        let json = serde_json::to_string(&user).unwrap();
        let restored: User = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_user_decodes_api_payload_with_missing_flags() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 9,
            "email": "a@b.c",
            "username": "a",
            "role": "user"
        }))
        .unwrap();
        assert!(user.is_active);
        assert!(!user.is_admin());
    }
}
