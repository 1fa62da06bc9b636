use leptos::prelude::*;

/// Horizontal bar filled to `percent` (clamped to 0..=100).
#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<f64>,
    /// Bar color modifier: "" (default) or "alt"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
) -> impl IntoView {
    let bar_class = move || {
        if variant.get().as_deref() == Some("alt") {
            "progress__bar progress__bar--alt"
        } else {
            "progress__bar"
        }
    };

    view! {
        <div class="progress">
            <div
                class=bar_class
                style=move || format!("width: {}%;", percent.get().clamp(0.0, 100.0))
            ></div>
        </div>
    }
}
