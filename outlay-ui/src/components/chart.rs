//! Chart Component
//!
//! Daily spending bar chart using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{daily_totals, GlobalState};

/// Bar fill color (primary orange)
const BAR_COLOR: &str = "#FF9800";

/// Daily totals bar chart component
#[component]
pub fn Chart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw chart when records or the filter window change
    create_effect(move |_| {
        let totals = daily_totals(&state.visible_expenses());

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &totals);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

/// Draw the bar chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, totals: &[(String, f64)]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if totals.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No expenses for selected window", width / 2.0 - 110.0, height / 2.0);
        return;
    }

    // Y-axis scales from zero to the largest daily total
    let max_total = totals.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let y_max = if max_total > 0.0 { max_total * 1.1 } else { 1.0 };

    // Draw grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Bars, one slot per day in series order
    let slot_width = chart_width / totals.len() as f64;
    let bar_width = (slot_width * 0.6).min(60.0);

    ctx.set_fill_style(&BAR_COLOR.into());

    for (i, (_, value)) in totals.iter().enumerate() {
        let bar_height = (value / y_max) * chart_height;
        let x = margin_left + i as f64 * slot_width + (slot_width - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.fill_rect(x, y, bar_width, bar_height);
    }

    // X-axis day labels; thin them out when the window holds many days
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    let label_step = (totals.len() / 10).max(1);
    for (i, (day, _)) in totals.iter().enumerate() {
        if i % label_step != 0 {
            continue;
        }
        let x = margin_left + i as f64 * slot_width + slot_width / 2.0 - 30.0;
        let _ = ctx.fill_text(day, x, height - 10.0);
    }
}
