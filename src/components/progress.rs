//! Linear and circular percentage indicators.
//!
//! Both indicators take a percent signal and clamp it to `[0, 100]`, so
//! out-of-range server values render as an empty or full bar.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use leptos::prelude::*;

/// Radius of the ring drawn by [`ProgressCircle`], in SVG user units.
pub const RING_RADIUS: f64 = 52.0;

/// Bound a percentage to `[0, 100]`; non-finite input becomes 0.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

/// Percent shown for a parsed score; unparseable scores read as 0.
#[must_use]
pub fn score_percent(score: Option<f64>) -> f64 {
    clamp_percent(score.unwrap_or(0.0))
}

/// `(circumference, dash offset)` for a ring of `radius` filled to `percent`.
#[must_use]
pub fn circle_dash(percent: f64, radius: f64) -> (f64, f64) {
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let filled = clamp_percent(percent) / 100.0;
    (circumference, circumference * (1.0 - filled))
}

/// Label drawn inside the indicators, e.g. `75%`.
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", clamp_percent(percent))
}

/// Horizontal bar with a trailing percent label.
#[component]
pub fn ProgressLine(percent: Signal<f64>) -> impl IntoView {
    let width = move || format!("width: {}%;", clamp_percent(percent.get()));

    view! {
        <div class="progress-line">
            <div class="progress-line__track">
                <div class="progress-line__fill" style=width></div>
            </div>
            <span class="progress-line__label">{move || format_percent(percent.get())}</span>
        </div>
    }
}

/// Ring filled clockwise from twelve o'clock.
#[component]
pub fn ProgressCircle(percent: Signal<f64>) -> impl IntoView {
    let dash = move || circle_dash(percent.get(), RING_RADIUS);
    let size = RING_RADIUS * 2.0 + 16.0;
    let center = size / 2.0;
    let extent = format!("{size}");
    let middle = format!("{center}");
    let radius = format!("{RING_RADIUS}");

    view! {
        <div class="progress-circle">
            <svg
                class="progress-circle__svg"
                width=extent.clone()
                height=extent
                viewBox=format!("0 0 {size} {size}")
            >
                <circle class="progress-circle__track" cx=middle.clone() cy=middle.clone() r=radius.clone()></circle>
                <circle
                    class="progress-circle__fill"
                    cx=middle.clone()
                    cy=middle
                    r=radius
                    stroke-dasharray=move || format!("{:.3}", dash().0)
                    stroke-dashoffset=move || format!("{:.3}", dash().1)
                    transform=format!("rotate(-90 {center} {center})")
                ></circle>
            </svg>
            <span class="progress-circle__label">{move || format_percent(percent.get())}</span>
        </div>
    }
}
