//! Stat Card Component
//!
//! Labelled value card with an optional delta indicator.

use leptos::*;

/// Stat card component
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: String,
    /// Signed change shown under the value (e.g. day change percent)
    #[prop(optional)]
    delta: Option<f64>,
    /// Muted caption shown when no delta is given
    #[prop(optional, into)]
    hint: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <span class="text-gray-400 text-sm">{label}</span>

            <div class="text-3xl font-bold mt-2">{value}</div>

            <div class="mt-2">
                {match delta {
                    Some(delta) => {
                        let (arrow, color) = if delta > 0.0 {
                            ("↑", "text-green-400")
                        } else if delta < 0.0 {
                            ("↓", "text-red-400")
                        } else {
                            ("→", "text-gray-400")
                        };

                        view! {
                            <span class=format!("text-sm {}", color)>
                                {arrow}
                                " "
                                {format!("{:+.1}%", delta)}
                            </span>
                        }
                        .into_view()
                    }
                    None if !hint.is_empty() => view! {
                        <span class="text-sm text-gray-500">{hint}</span>
                    }
                    .into_view(),
                    None => ().into_view(),
                }}
            </div>
        </div>
    }
}
