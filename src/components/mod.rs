//! UI Components
//!
//! Reusable Leptos components for the PredictWise pages.

pub mod gauge;
pub mod guard;
pub mod loading;
pub mod nav;
pub mod prediction_card;
pub mod sparkline;
pub mod stat_card;
pub mod toast;

pub use gauge::ConfidenceGauge;
pub use guard::{RequireAdmin, RequireAuth};
pub use loading::{CardSkeleton, ListSkeleton};
pub use nav::Nav;
pub use prediction_card::PredictionCard;
pub use sparkline::Sparkline;
pub use stat_card::StatCard;
pub use toast::Toast;
