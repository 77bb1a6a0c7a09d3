mod pricing_panel;

use super::not_found::NotFound;
use leptos::{either::Either, prelude::*};
use leptos_router::hooks::use_params_map;
use pricing_panel::PricingPanel;
use productnav_catalog::prelude::SiteConfig;

/// Page of the category named by the `:category` route parameter.
#[component]
pub fn ProductPage() -> impl IntoView {
    let catalog = expect_context::<SiteConfig>().catalog;
    let params = use_params_map();
    let category = Memo::new(move |_| {
        params
            .read()
            .get("category")
            .and_then(|slug| catalog.category(&slug).cloned())
    });

    move || match category.get() {
        Some(category) => Either::Left(view! {
            <section class="px-4 py-12 mx-auto max-w-7xl">
                <h1 class="mb-2 text-3xl font-bold text-gray-900">{category.name.clone()}</h1>
                <p class="mb-8 text-gray-600">"Pick the plan that fits you."</p>
                <PricingPanel category=category />
            </section>
        }),
        None => Either::Right(view! { <NotFound message="There is no such product category." /> }),
    }
}
