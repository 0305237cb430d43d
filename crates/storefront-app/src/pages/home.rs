use crate::components::ProductCard;
use crate::context::use_catalog;
use leptos::prelude::*;
use storefront_catalog::Category;

/// Home page: hero, category tiles, and the first few featured products.
#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = use_catalog();

    let featured: Vec<_> = catalog.products().iter().take(8).cloned().collect();

    view! {
        <div class="hero">
            <h2>"Welcome to Storefront"</h2>
            <p>"Browse gadgets by category, brand and price"</p>
            <a href="/category" class="btn">"Browse Products"</a>
        </div>

        <section class="category-tiles">
            <h2>"Shop by Category"</h2>
            <div class="tiles">
                {Category::ALL
                    .iter()
                    .map(|category| {
                        let href = format!("/category?category={}", category.slug());
                        view! {
                            <a href=href class="tile">
                                {category.as_str()}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section class="featured">
            <h2>"Featured Products"</h2>
            <div class="product-grid">
                {featured
                    .into_iter()
                    .map(|product| view! { <ProductCard product/> })
                    .collect_view()}
            </div>
        </section>
    }
}
