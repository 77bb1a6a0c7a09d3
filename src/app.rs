use crate::blocks::{
    header::SiteHeader, home::HomePage, not_found::NotFound, product_page::ProductPage,
    products_page::ProductsPage,
};
use crate::errors::{ErrorBanner, ErrorLogContext};
use crate::routes::SiteRoute;
use crate::selection::SelectionRelay;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use log::error;
use productnav_catalog::prelude::SiteConfig;

/// HTML document the server wraps around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options=options />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-gray-50">
                <App />
            </body>
        </html>
    }
}

/// The site: header with the product menu and the product pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let error_log = ErrorLogContext {
        errors: RwSignal::new(Vec::new()),
    };
    let config = SiteConfig::builtin().unwrap_or_else(|e| {
        error!("Site configuration rejected, product menu will be empty: {e}");
        error_log.push(&e);
        SiteConfig::default()
    });
    provide_context(error_log);
    provide_context(config);
    provide_context(SelectionRelay::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/productnav.css" />
        <Title text="Products" />
        <Router>
            <SiteHeader />
            <ErrorBanner />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment(SiteRoute::ALL_PRODUCTS_PATH) view=ProductsPage />
                    <Route
                        path=(StaticSegment(SiteRoute::PRODUCT_PREFIX), ParamSegment("category"))
                        view=ProductPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
