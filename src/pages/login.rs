//! Login Page
//!
//! Credential form. Validation runs before any network call; API errors
//! render in the inline banner.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::auth::AuthState;

/// Validate login input before hitting the network.
pub(crate) fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.is_empty() || password.is_empty() {
        return Err("Email and password are required".to_string());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".to_string());
    }
    Ok(())
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();

        if let Err(message) = validate_login(&email, &password) {
            set_error.set(Some(message));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::auth::login(&email, &password).await {
                Ok(response) => {
                    auth.set_session(response.access_token, response.user);
                    navigate("/", Default::default());
                }
                Err(e) => {
                    set_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-md mx-auto mt-12">
            <div class="bg-gray-800 rounded-xl p-8">
                <div class="text-center mb-8">
                    <span class="text-4xl">"🔮"</span>
                    <h1 class="text-2xl font-bold mt-2">"Welcome back"</h1>
                    <p class="text-gray-400 mt-1">"Log in to your PredictWise account"</p>
                </div>

                // Inline error banner
                {move || error.get().map(|message| view! {
                    <div class="bg-red-900/50 border border-red-700 text-red-300 rounded-lg px-4 py-3 mb-4 text-sm">
                        {message}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                        <input
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Logging in..." } else { "Log In" }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-400 mt-6">
                    "No account yet? "
                    <a href="/signup" class="text-orange-400 hover:text-orange-300">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_rejected() {
        assert!(validate_login("", "").is_err());
        assert!(validate_login("a@b.c", "").is_err());
        assert!(validate_login("", "secret123").is_err());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        assert!(validate_login("not-an-email", "secret123").is_err());
    }

    #[test]
    fn test_valid_credentials_pass() {
        assert!(validate_login("fan@predictwise.io", "secret123").is_ok());
    }
}
