use leptos::prelude::*;

/// Star row for a rating: full stars, an optional half star, and empty
/// stars up to five, plus the numeric value.
#[component]
pub fn RatingStars(rating: f64) -> impl IntoView {
    let full = rating.floor().clamp(0.0, 5.0) as usize;
    let half = rating.fract() >= 0.5;
    let empty = 5 - full - usize::from(half);

    view! {
        <span class="rating" aria-label=format!("Rated {rating} out of 5")>
            {(0..full)
                .map(|_| view! { <span class="star full">"\u{2605}"</span> })
                .collect_view()}
            {half.then(|| view! { <span class="star half">"\u{2bea}"</span> })}
            {(0..empty)
                .map(|_| view! { <span class="star empty">"\u{2606}"</span> })
                .collect_view()}
            <span class="rating-value">{format!("({rating:.1})")}</span>
        </span>
    }
}
