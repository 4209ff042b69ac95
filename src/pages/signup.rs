//! Signup Page
//!
//! Account creation form with client-side validation.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::state::auth::AuthState;

const MIN_PASSWORD_LEN: usize = 8;

/// Validate signup input before hitting the network.
pub(crate) fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Username, email, and password are required".to_string());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Signup page component
#[component]
pub fn Signup() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (confirm, set_confirm) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let username = username.get();
        let email = email.get();
        let password = password.get();

        if let Err(message) = validate_signup(&username, &email, &password, &confirm.get()) {
            set_error.set(Some(message));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);

        let first_name = first_name.get();
        let last_name = last_name.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::auth::register(&username, &email, &password, &first_name, &last_name).await
            {
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
                    <h1 class="text-2xl font-bold mt-2">"Create your account"</h1>
                    <p class="text-gray-400 mt-1">"AI predictions for sports and markets"</p>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="bg-red-900/50 border border-red-700 text-red-300 rounded-lg px-4 py-3 mb-4 text-sm">
                        {message}
                    </div>
                })}

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>

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

                    <div class="grid grid-cols-2 gap-3">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"First name"</label>
                            <input
                                type="text"
                                prop:value=move || first_name.get()
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-orange-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Last name"</label>
                            <input
                                type="text"
                                prop:value=move || last_name.get()
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-orange-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                        <input
                            type="password"
                            placeholder="At least 8 characters"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Confirm password"</label>
                        <input
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
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
                        {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-400 mt-6">
                    "Already registered? "
                    <a href="/login" class="text-orange-400 hover:text-orange-300">"Log in"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_is_rejected() {
        let result = validate_signup("fan", "a@b.c", "short", "short");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("8 characters"));
    }

    #[test]
    fn test_mismatched_confirmation_is_rejected() {
        let result = validate_signup("fan", "a@b.c", "longenough", "different");
        assert_eq!(result.unwrap_err(), "Passwords do not match");
    }

    #[test]
    fn test_missing_required_fields_are_rejected() {
        assert!(validate_signup("", "a@b.c", "longenough", "longenough").is_err());
        assert!(validate_signup("fan", "", "longenough", "longenough").is_err());
    }

    #[test]
    fn test_valid_signup_passes() {
        assert!(validate_signup("fan", "a@b.c", "longenough", "longenough").is_ok());
    }
}
