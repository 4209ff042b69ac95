//! Sparkline Component
//!
//! Small canvas line chart for a numeric series, used for trend widgets.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas sparkline component
#[component]
pub fn Sparkline(
    #[prop(into)]
    values: Signal<Vec<f64>>,
    #[prop(default = "#f97316")]
    color: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever the series changes
    create_effect(move |_| {
        let values = values.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_sparkline(&canvas, &values, color);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="240"
            height="56"
            class="w-full h-14 rounded"
        />
    }
}

/// Draw the series on canvas
fn draw_sparkline(canvas: &HtmlCanvasElement, values: &[f64], color: &str) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if values.len() < 2 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 18.0, height / 2.0 + 4.0);
        return;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < f64::EPSILON { 1.0 } else { max - min };

    let margin = 4.0;
    let chart_width = width - margin * 2.0;
    let chart_height = height - margin * 2.0;
    let step = chart_width / (values.len() - 1) as f64;

    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, value) in values.iter().enumerate() {
        let x = margin + i as f64 * step;
        // Canvas y grows downward
        let y = margin + (1.0 - (value - min) / range) * chart_height;

        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }

    ctx.stroke();

    // Mark the latest point
    if let Some(last) = values.last() {
        let x = margin + (values.len() - 1) as f64 * step;
        let y = margin + (1.0 - (last - min) / range) * chart_height;
        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
}
