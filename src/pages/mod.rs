//! Pages
//!
//! Top-level route views.

pub mod admin;
pub mod chat;
pub mod dashboard;
pub mod finance;
pub mod login;
pub mod signup;
pub mod sports;
pub mod watchlist;

pub use admin::Admin;
pub use chat::Chat;
pub use dashboard::Dashboard;
pub use finance::Finance;
pub use login::Login;
pub use signup::Signup;
pub use sports::Sports;
pub use watchlist::Watchlist;
