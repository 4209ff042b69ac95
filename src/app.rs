//! App Root Component
//!
//! Main application component with routing, guards, and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, RequireAdmin, RequireAuth, Toast};
use crate::pages::{Admin, Chat, Dashboard, Finance, Login, Signup, Sports, Watchlist};
use crate::state::auth::{provide_auth_state, AuthState};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state and the restored auth session to all components
    provide_global_state();
    provide_auth_state();

    let auth = use_context::<AuthState>().expect("AuthState not found");

    // Revalidate a restored session against the backend. A stale token gets
    // cleared by the 401 handling in the request layer.
    create_effect(move |_| {
        if auth.token.get_untracked().is_some() {
            spawn_local(async move {
                match api::auth::me().await {
                    Ok(user) => auth.set_user(user),
                    Err(e) => {
                        web_sys::console::warn_1(&format!("Session refresh failed: {}", e).into())
                    }
                }
            });
        }
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-16">
                    <Routes>
                        <Route path="/login" view=Login />
                        <Route path="/signup" view=Signup />
                        <Route path="/" view=|| view! {
                            <RequireAuth><Dashboard /></RequireAuth>
                        } />
                        <Route path="/sports" view=|| view! {
                            <RequireAuth><Sports /></RequireAuth>
                        } />
                        <Route path="/finance" view=|| view! {
                            <RequireAuth><Finance /></RequireAuth>
                        } />
                        <Route path="/watchlist" view=|| view! {
                            <RequireAuth><Watchlist /></RequireAuth>
                        } />
                        <Route path="/chat" view=|| view! {
                            <RequireAuth><Chat /></RequireAuth>
                        } />
                        <Route path="/admin" view=|| view! {
                            <RequireAdmin><Admin /></RequireAdmin>
                        } />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer with the API endpoint in use. The endpoint is editable in place
/// and persists to local storage.
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_base, set_base) = create_signal(api::get_api_base());

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let value = value.trim();
        if value.is_empty() {
            set_base.set(api::get_api_base());
            return;
        }
        api::set_api_base(value);
        set_base.set(api::get_api_base());
        state.show_success("API endpoint updated");
    };

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-500">
                <span>"PredictWise • predictions are informational, not advice"</span>
                <input
                    type="text"
                    title="API endpoint"
                    prop:value=move || api_base.get()
                    on:change=on_change
                    size="40"
                    class="font-mono text-xs bg-transparent text-right text-gray-500
                           border border-transparent hover:border-gray-600 focus:border-orange-500
                           rounded px-2 py-1 focus:outline-none"
                />
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-orange-600 hover:bg-orange-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
