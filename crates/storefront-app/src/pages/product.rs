//! The product detail page, gated behind a session.

use crate::components::{ProductCard, RatingStars};
use crate::context::{use_catalog, use_session};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};
use storefront_catalog::prelude::*;
use storefront_session::GateOutcome;

#[component]
pub fn ProductPage() -> impl IntoView {
    let catalog = use_catalog();
    let session = use_session();
    let location = use_location();

    // Unauthenticated visitors bounce to the login page carrying the
    // requested path as a callback. Subscribing to the session state
    // re-runs the check when a logout happens mid-view.
    {
        let session = session.clone();
        let navigate = use_navigate();
        Effect::new(move |_| {
            let _ = session.state.get();
            let path = location.pathname.get_untracked();
            if let GateOutcome::RedirectToLogin { login_path } = session.gate(&path) {
                navigate(&login_path, Default::default());
            }
        });
    }

    let route_params = use_params_map();
    let lookup_catalog = catalog.clone();
    let product = Memo::new(move |_| {
        route_params
            .get()
            .get("id")
            .and_then(|raw| ProductId::parse(&raw))
            .and_then(|id| lookup_catalog.get(id).cloned())
    });

    let related_catalog = catalog.clone();
    let related = Memo::new(move |_| {
        product
            .get()
            .map(|p| {
                related_catalog
                    .related(&p, 4)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<Product>>()
            })
            .unwrap_or_default()
    });

    view! {
        {move || match product.get() {
            Some(p) => {
                let description = p
                    .description
                    .clone()
                    .unwrap_or_else(|| "No description available.".to_string());
                view! {
                    <div class="product-detail">
                        <div class="detail-image">
                            <img src=p.image.clone() alt=p.name.clone()/>
                        </div>
                        <div class="detail-body">
                            <span class="category-badge">{p.category.as_str()}</span>
                            <span class="product-brand">{p.brand.clone()}</span>
                            <h1>{p.name.clone()}</h1>
                            <RatingStars rating=p.rating/>
                            <p class="product-price">{p.price_display()}</p>
                            <p class="product-description">{description}</p>
                            <a href="/category" class="back-link">"Back to products"</a>
                        </div>
                    </div>
                }
                    .into_any()
            }
            None => view! {
                <div class="empty-state">
                    <h2>"Product not found"</h2>
                    <p>"The product you are looking for does not exist."</p>
                    <a href="/category">"Back to products"</a>
                </div>
            }
                .into_any(),
        }}

        {move || {
            let related = related.get();
            (!related.is_empty())
                .then(|| {
                    view! {
                        <section class="related">
                            <h2>"Related Products"</h2>
                            <div class="product-grid">
                                {related
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product/> })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
        }}
    }
}
