//! Route Guards
//!
//! Conditional views wrapping guarded routes: children render only when the
//! session satisfies the guard, otherwise the visitor is redirected.

use leptos::*;
use leptos_router::Redirect;

use crate::state::auth::AuthState;

/// Renders children only for authenticated visitors; everyone else is sent
/// to the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        {move || {
            if auth.is_authenticated() {
                children().into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}

/// Renders children only for admins. Authenticated non-admins land on the
/// dashboard; unauthenticated visitors on the login page.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        {move || {
            if auth.is_admin() {
                children().into_view()
            } else if auth.is_authenticated() {
                view! { <Redirect path="/" /> }.into_view()
            } else {
                view! { <Redirect path="/login" /> }.into_view()
            }
        }}
    }
}
