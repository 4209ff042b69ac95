//! Prediction Card Component
//!
//! Displays a model prediction with its confidence gauge.

use leptos::*;

use crate::api::Prediction;
use crate::components::ConfidenceGauge;

/// Card rendering a single prediction
#[component]
pub fn PredictionCard(prediction: Prediction) -> impl IntoView {
    let confidence = prediction.confidence;
    let badge_class = match prediction.domain {
        crate::api::Domain::Sports => "bg-blue-600",
        crate::api::Domain::Finance => "bg-purple-600",
    };

    let created = prediction
        .created_at
        .clone()
        .map(format_timestamp)
        .unwrap_or_default();

    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <div class="flex items-start justify-between">
                <div class="flex-1">
                    <div class="flex items-center space-x-2">
                        <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white", badge_class)>
                            {prediction.domain.label()}
                        </span>
                        <span class="text-gray-500 text-xs">
                            {format!("model {}", prediction.model_version)}
                        </span>
                    </div>

                    <p class="text-lg font-semibold mt-3">{prediction.result}</p>

                    {(!created.is_empty()).then(|| view! {
                        <p class="text-gray-500 text-xs mt-2">{created.clone()}</p>
                    })}
                </div>

                <ConfidenceGauge value=Signal::derive(move || confidence) />
            </div>
        </div>
    }
}

/// Shorten an RFC 3339 timestamp for display
fn format_timestamp(raw: String) -> String {
    chrono::DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.format("%b %d, %H:%M").to_string())
        .unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_parses_rfc3339() {
        let formatted = format_timestamp("2026-08-27T18:30:00+00:00".to_string());
        assert_eq!(formatted, "Aug 27, 18:30");
    }

    #[test]
    fn test_format_timestamp_keeps_unparseable_input() {
        assert_eq!(format_timestamp("yesterday".to_string()), "yesterday");
    }
}
