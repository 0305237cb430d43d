//! The catalog browsing page.
//!
//! Parameters are seeded from the URL query string on mount, owned by a
//! single `RwSignal<QueryParams>` afterwards, and re-serialized back to
//! the URL on every change so views stay shareable and survive reload.
//! All derived state (the visible page, its metadata) is recomputed from
//! the catalog and the parameters; nothing is cached between changes.

use crate::components::{Pagination, ProductCard};
use crate::context::use_catalog;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use storefront_catalog::prelude::*;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let catalog = use_catalog();
    let location = use_location();

    // Seed from the URL once; the signal owns the parameters afterwards.
    let params = RwSignal::new(QueryParams::from_query_string(
        &location.search.get_untracked(),
    ));

    // Reflect every parameter change back into the URL without growing
    // the history stack or scrolling.
    let navigate = use_navigate();
    Effect::new(move |_| {
        let qs = params.get().to_query_string();
        let href = if qs.is_empty() {
            "/category".to_string()
        } else {
            format!("/category?{qs}")
        };
        navigate(
            &href,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    });

    // The whole pipeline reruns on each parameter change. Results are
    // cloned out of the catalog borrow so the memo owns its value.
    let pipeline_catalog = catalog.clone();
    let outcome = Memo::new(move |_| {
        let current = params.get();
        let result = query::run(&pipeline_catalog, &current);
        (
            result
                .items
                .into_iter()
                .cloned()
                .collect::<Vec<Product>>(),
            result.info,
        )
    });
    let items = Signal::derive(move || outcome.get().0);
    let info = Signal::derive(move || outcome.get().1);

    let brands: Vec<String> = catalog.brands().to_vec();

    view! {
        <div class="category-page">
            <aside class="filters">
                <div class="filter-group">
                    <label for="search">"Search"</label>
                    <input
                        id="search"
                        type="search"
                        placeholder="Search products..."
                        prop:value=move || params.get().search
                        on:input=move |ev| {
                            params.update(|p| p.set_search(event_target_value(&ev)));
                        }
                    />
                </div>

                <div class="filter-group">
                    <label for="brand">"Brand"</label>
                    <select
                        id="brand"
                        prop:value=move || params.get().brand.label().to_string()
                        on:change=move |ev| {
                            params.update(|p| {
                                p.set_brand(BrandFilter::from_value(&event_target_value(&ev)));
                            });
                        }
                    >
                        <option value="All">"All Brands"</option>
                        {brands
                            .iter()
                            .map(|brand| {
                                let value = brand.clone();
                                view! { <option value=value.clone()>{value.clone()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="filter-group">
                    <label>"Category"</label>
                    <div class="category-chips">
                        <button
                            class:active=move || params.get().category == CategoryFilter::All
                            on:click=move |_| {
                                params.update(|p| p.set_category(CategoryFilter::All));
                            }
                        >
                            "All"
                        </button>
                        {Category::ALL
                            .iter()
                            .map(|&category| {
                                view! {
                                    <button
                                        class:active=move || {
                                            params.get().category == CategoryFilter::Only(category)
                                        }
                                        on:click=move |_| {
                                            params.update(|p| {
                                                p.set_category(CategoryFilter::Only(category));
                                            });
                                        }
                                    >
                                        {category.as_str()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="filter-group">
                    <label>"Price"</label>
                    <div class="price-inputs">
                        <input
                            type="number"
                            min="0"
                            aria-label="Minimum price"
                            prop:value=move || params.get().price_range.0.to_string()
                            on:change=move |ev| {
                                let min = event_target_value(&ev).parse().unwrap_or(0);
                                params.update(|p| {
                                    let (_, max) = p.price_range;
                                    p.set_price_range(min, max);
                                });
                            }
                        />
                        <span>"-"</span>
                        <input
                            type="number"
                            min="0"
                            aria-label="Maximum price"
                            prop:value=move || params.get().price_range.1.to_string()
                            on:change=move |ev| {
                                let max = event_target_value(&ev)
                                    .parse()
                                    .unwrap_or(PRICE_CEILING);
                                params.update(|p| {
                                    let (min, _) = p.price_range;
                                    p.set_price_range(min, max);
                                });
                            }
                        />
                    </div>
                </div>

                <button
                    class="reset-filters"
                    on:click=move |_| params.set(QueryParams::default())
                >
                    "Reset Filters"
                </button>
            </aside>

            <section class="results">
                <div class="results-header">
                    <p class="results-count">
                        {move || {
                            let count = info.get().total_count;
                            if count == 1 {
                                "1 product found".to_string()
                            } else {
                                format!("{count} products found")
                            }
                        }}
                    </p>
                    <div class="sort-control">
                        <label for="sort">"Sort by"</label>
                        <select
                            id="sort"
                            prop:value=move || params.get().sort.as_str().to_string()
                            on:change=move |ev| {
                                params.update(|p| {
                                    p.set_sort(SortKey::from_str(&event_target_value(&ev)));
                                });
                            }
                        >
                            {SortKey::ALL
                                .iter()
                                .map(|key| {
                                    view! {
                                        <option value=key.as_str()>{key.display_name()}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <ActiveFilters params/>

                {move || {
                    let items = items.get();
                    if items.is_empty() {
                        view! {
                            <div class="empty-state">
                                <p>"No products match your filters."</p>
                                <button on:click=move |_| params.set(QueryParams::default())>
                                    "Clear all filters"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="product-grid">
                                {items
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product/> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}

                <Pagination params info/>
            </section>
        </div>
    }
}

/// Removable chips for each active (non-default) filter.
#[component]
fn ActiveFilters(params: RwSignal<QueryParams>) -> impl IntoView {
    view! {
        <div class="active-filters">
            {move || {
                let current = params.get();
                let mut chips = Vec::new();

                if !current.search.is_empty() {
                    let label = format!("Search: {}", current.search);
                    chips.push(view! {
                        <button
                            class="filter-chip"
                            on:click=move |_| params.update(|p| p.set_search(""))
                        >
                            {label} " \u{2715}"
                        </button>
                    }
                        .into_any());
                }
                if let BrandFilter::Brand(brand) = &current.brand {
                    let label = format!("Brand: {brand}");
                    chips.push(view! {
                        <button
                            class="filter-chip"
                            on:click=move |_| params.update(|p| p.set_brand(BrandFilter::All))
                        >
                            {label} " \u{2715}"
                        </button>
                    }
                        .into_any());
                }
                if let CategoryFilter::Only(category) = current.category {
                    let label = format!("Category: {}", category.as_str());
                    chips.push(view! {
                        <button
                            class="filter-chip"
                            on:click=move |_| {
                                params.update(|p| p.set_category(CategoryFilter::All));
                            }
                        >
                            {label} " \u{2715}"
                        </button>
                    }
                        .into_any());
                }
                if current.price_range != (0, PRICE_CEILING) {
                    let (min, max) = current.price_range;
                    let label = format!("Price: {min} - {max}");
                    chips.push(view! {
                        <button
                            class="filter-chip"
                            on:click=move |_| {
                                params.update(|p| p.set_price_range(0, PRICE_CEILING));
                            }
                        >
                            {label} " \u{2715}"
                        </button>
                    }
                        .into_any());
                }

                chips.collect_view()
            }}
        </div>
    }
}
