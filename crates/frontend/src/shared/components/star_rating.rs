use crate::shared::icons::icon;
use leptos::prelude::*;

/// Number of filled stars for a rating: floor, clamped to the five-star
/// scale. A missing rating renders zero filled stars.
pub fn filled_stars(rating: f64) -> usize {
    rating.floor().clamp(0.0, 5.0) as usize
}

/// Five-star rating row with the numeric value alongside.
#[component]
pub fn StarRating(
    #[prop(into)] rating: Signal<f64>,
) -> impl IntoView {
    view! {
        <div class="rating">
            {move || {
                let filled = filled_stars(rating.get());
                (1..=5).map(|star| {
                    let class = if star <= filled { "star star--filled" } else { "star star--empty" };
                    view! { <span class=class>{icon("star")}</span> }
                }).collect_view()
            }}
            <span class="rating__value">{move || format!("{}", rating.get())}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_semantics() {
        assert_eq!(filled_stars(4.5), 4);
        assert_eq!(filled_stars(4.0), 4);
        assert_eq!(filled_stars(5.0), 5);
        assert_eq!(filled_stars(0.9), 0);
    }

    #[test]
    fn clamped_to_scale() {
        assert_eq!(filled_stars(0.0), 0);
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(9.0), 5);
    }
}
