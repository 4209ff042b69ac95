//! Navigation Component
//!
//! Header navigation bar with logo, links, and the session menu. Links only
//! appear once logged in; the admin link needs the admin role.

use leptos::*;
use leptos_router::*;

use crate::state::auth::AuthState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let navigate = use_navigate();
    let logout = move |_| {
        auth.logout();
        navigate("/login", Default::default());
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🔮"</span>
                        <span class="text-xl font-bold text-white">"PredictWise"</span>
                    </A>

                    // Navigation links
                    {move || {
                        if auth.is_authenticated() {
                            view! {
                                <div class="flex items-center space-x-1">
                                    <NavLink href="/" label="Dashboard" />
                                    <NavLink href="/sports" label="Sports" />
                                    <NavLink href="/finance" label="Finance" />
                                    <NavLink href="/watchlist" label="Watchlist" />
                                    <NavLink href="/chat" label="Chat" />
                                    {move || {
                                        auth.is_admin().then(|| view! {
                                            <NavLink href="/admin" label="Admin" />
                                        })
                                    }}
                                </div>
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="flex items-center space-x-1">
                                    <NavLink href="/login" label="Log In" />
                                    <NavLink href="/signup" label="Sign Up" />
                                </div>
                            }
                            .into_view()
                        }
                    }}

                    // Session menu
                    {move || {
                        let logout = logout.clone();
                        auth.user.get().map(move |user| view! {
                            <div class="flex items-center space-x-3">
                                <span class="text-gray-300 text-sm">
                                    {user.display_name().to_string()}
                                </span>
                                <button
                                    on:click=logout
                                    class="px-3 py-2 rounded-lg text-sm text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                >
                                    "Log Out"
                                </button>
                            </div>
                        })
                    }}
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
