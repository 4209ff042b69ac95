//! Application State
//!
//! Reactive state shared across pages: the auth session and global UI state.

pub mod auth;
pub mod global;
