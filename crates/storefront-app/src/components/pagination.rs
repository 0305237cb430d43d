use leptos::prelude::*;
use storefront_catalog::prelude::*;
use storefront_catalog::query::page_strip;

/// Page controls: previous/next, a windowed page-number strip with
/// ellipses, and a "showing X-Y of N" line.
///
/// Writes go through `QueryParams::set_page` so the clamp rules stay in
/// one place.
#[component]
pub fn Pagination(params: RwSignal<QueryParams>, info: Signal<PageInfo>) -> impl IntoView {
    let go_to = move |page: usize| {
        params.update(|p| p.set_page(page));
    };

    view! {
        <div class="pagination">
            <p class="pagination-summary">
                {move || {
                    let info = info.get();
                    if info.total_count == 0 {
                        "No products to show".to_string()
                    } else {
                        format!(
                            "Showing {}-{} of {} products",
                            info.range_start, info.range_end, info.total_count,
                        )
                    }
                }}
            </p>
            <nav class="pagination-controls" aria-label="Pagination">
                <button
                    class="page-prev"
                    disabled=move || !info.get().has_prev()
                    on:click=move |_| {
                        let page = info.get_untracked().page;
                        go_to(page.saturating_sub(1));
                    }
                >
                    "Previous"
                </button>
                {move || {
                    let info = info.get();
                    page_strip(info.page, info.total_pages)
                        .into_iter()
                        .map(|token| match token {
                            PageToken::Page(n) => view! {
                                <button
                                    class="page-number"
                                    class:current=n == info.page
                                    aria-current=(n == info.page).then_some("page")
                                    on:click=move |_| go_to(n)
                                >
                                    {n}
                                </button>
                            }
                                .into_any(),
                            PageToken::Ellipsis => view! {
                                <span class="page-ellipsis">"\u{2026}"</span>
                            }
                                .into_any(),
                        })
                        .collect_view()
                }}
                <button
                    class="page-next"
                    disabled=move || !info.get().has_next()
                    on:click=move |_| {
                        let page = info.get_untracked().page;
                        go_to(page + 1);
                    }
                >
                    "Next"
                </button>
            </nav>
        </div>
    }
}
