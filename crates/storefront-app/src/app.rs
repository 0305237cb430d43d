//! Application shell: router, chrome, and the not-found page.

use crate::context::{
    use_session, use_theme, CatalogContext, SessionContext, ThemeContext,
};
use crate::pages::{CategoryPage, HomePage, LoginPage, ProductPage, RegisterPage};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use storefront_catalog::demo_catalog;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(CatalogContext::new(demo_catalog()));
    provide_context(SessionContext::new());
    provide_context(ThemeContext::new());

    let theme = use_theme();
    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="storefront" href="/pkg/storefront_app.css"/>
        <Meta name="description" content="Storefront - browse gadgets by category, brand and price"/>
        <Title text="Storefront"/>

        <Router>
            <div class="app" data-theme=move || theme.0.get().as_str()>
                <Header/>
                <main>
                    <Routes fallback>
                        <Route path=path!("") view=HomePage/>
                        <Route path=path!("/category") view=CategoryPage/>
                        <Route path=path!("/products/:id") view=ProductPage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route path=path!("/*any") view=NotFound/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    let session = use_session();
    let theme = use_theme();
    let logout_session = session.clone();

    view! {
        <header>
            <h1><a href="/">"Storefront"</a></h1>
            <nav>
                <a href="/">"Home"</a>
                <a href="/category">"Category"</a>
            </nav>
            <div class="header-actions">
                <button
                    class="theme-toggle"
                    aria-label="Toggle theme"
                    on:click=move |_| theme.toggle()
                >
                    {move || match theme.0.get() {
                        crate::context::Theme::Light => "\u{1f319}",
                        crate::context::Theme::Dark => "\u{2600}",
                    }}
                </button>
                {move || {
                    let state = session.state.get();
                    if state.authenticated {
                        let name = state
                            .user
                            .as_ref()
                            .map(|u| u.display_name().to_string())
                            .unwrap_or_default();
                        let initial = state
                            .user
                            .as_ref()
                            .map(|u| u.initial().to_string())
                            .unwrap_or_else(|| "U".to_string());
                        let logout_session = logout_session.clone();
                        view! {
                            <div class="user-menu">
                                <span class="avatar">{initial}</span>
                                <span class="user-name">{name}</span>
                                <button on:click=move |_| logout_session.logout()>
                                    "Logout"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="auth-links">
                                <a href="/login">"Login"</a>
                                <a href="/register">"Register"</a>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Storefront - a mock shop with a static catalog"</p>
        </footer>
    }
}

/// Generic not-found page for unroutable paths.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
