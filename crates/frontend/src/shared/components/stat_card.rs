use crate::shared::icons::icon;
use leptos::prelude::*;

/// Card for a single headline metric.
///
/// The `badge` distinguishes live inventory-derived numbers from the static
/// analytics payload ("Live" vs "Fixed").
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Pre-formatted value text
    #[prop(into)]
    value: Signal<String>,
    /// Badge text, e.g. "Live" or "Fixed"
    #[prop(optional, into)]
    badge: MaybeProp<String>,
    /// Optional caption below the value
    #[prop(optional, into)]
    description: MaybeProp<String>,
    /// Visual accent: "" (default) or "danger"
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let card_class = move || match accent.get().as_deref() {
        Some("danger") => "stat-card stat-card--danger",
        _ => "stat-card",
    };

    let badge_view = move || {
        badge.get().map(|text| {
            let badge_class = if text == "Live" {
                "badge badge--live"
            } else {
                "badge badge--fixed"
            };
            view! { <span class=badge_class>{text}</span> }
        })
    };

    let description_view = move || {
        description.get().map(|text| {
            view! { <small class="stat-card__description">{text}</small> }
        })
    };

    view! {
        <div class=card_class>
            <div class="stat-card__content">
                <div class="stat-card__label-row">
                    <h6 class="stat-card__label">{label}</h6>
                    {badge_view}
                </div>
                <h3 class="stat-card__value">{value}</h3>
                {description_view}
            </div>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
        </div>
    }
}
