//! Confidence Gauge Component
//!
//! Circular canvas gauge for a model confidence score in `0.0..=1.0`.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Circular confidence gauge
#[component]
pub fn ConfidenceGauge(
    #[prop(into)]
    value: Signal<f64>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let value = value.get().clamp(0.0, 1.0);
        if let Some(canvas) = canvas_ref.get() {
            draw_gauge(&canvas, value);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="96"
            height="96"
            class="w-24 h-24"
        />
    }
}

/// Color for a confidence level
fn gauge_color(value: f64) -> &'static str {
    if value >= 0.75 {
        "#4ade80" // green-400
    } else if value >= 0.5 {
        "#f97316" // orange-500
    } else {
        "#f87171" // red-400
    }
}

fn draw_gauge(canvas: &HtmlCanvasElement, value: f64) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 8.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    // Track circle
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(8.0);
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0);
    ctx.stroke();

    // Value arc, starting at 12 o'clock
    let start = -std::f64::consts::FRAC_PI_2;
    let end = start + value * std::f64::consts::PI * 2.0;
    ctx.set_stroke_style(&gauge_color(value).into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius, start, end);
    ctx.stroke();

    // Percent label
    ctx.set_fill_style(&"#e5e7eb".into()); // gray-200
    ctx.set_font("bold 16px sans-serif");
    let label = format!("{:.0}%", value * 100.0);
    let offset = label.len() as f64 * 4.5;
    let _ = ctx.fill_text(&label, cx - offset, cy + 5.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_color_bands() {
        assert_eq!(gauge_color(0.9), "#4ade80");
        assert_eq!(gauge_color(0.75), "#4ade80");
        assert_eq!(gauge_color(0.6), "#f97316");
        assert_eq!(gauge_color(0.2), "#f87171");
    }
}
