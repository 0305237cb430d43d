use crate::components::RatingStars;
use leptos::prelude::*;
use storefront_catalog::Product;

/// Grid card for one product. The whole card is informational; the
/// details link is the only navigation.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/products/{}", product.id);

    view! {
        <article class="product-card">
            <div class="product-image">
                <img src=product.image.clone() alt=product.name.clone() loading="lazy"/>
                <span class="category-badge">{product.category.as_str()}</span>
            </div>
            <div class="product-body">
                <span class="product-brand">{product.brand.clone()}</span>
                <h3 class="product-name">{product.name.clone()}</h3>
                <RatingStars rating=product.rating/>
                <div class="product-footer">
                    <span class="product-price">{product.price_display()}</span>
                    <a href=href class="details-link">"View Details"</a>
                </div>
            </div>
        </article>
    }
}
