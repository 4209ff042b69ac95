//! PredictWise Dashboard
//!
//! AI sports and finance prediction frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - JWT-authenticated access with guarded routes
//! - Sports match and stock predictions with confidence scores
//! - Personal watchlist for teams, leagues, tickers, and crypto
//! - Admin panel for user management
//! - Chat with the analysis assistant
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the PredictWise REST API via HTTP; the
//! bearer token lives in browser local storage and is attached to every call.

use leptos::*;

mod api;
mod app;
mod components;
mod mock;
mod pages;
mod state;

use app::App;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <App /> });
}
