use crate::routes::SiteRoute;
use leptos::{either::Either, prelude::*};
use leptos_router::components::A;
use productnav_catalog::prelude::SiteConfig;

/// Every category with its services.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let categories = expect_context::<SiteConfig>().catalog.categories().to_vec();

    view! {
        <section class="px-4 py-12 mx-auto max-w-7xl">
            <h1 class="mb-8 text-3xl font-bold text-gray-900">"All products"</h1>
            {if categories.is_empty() {
                Either::Left(view! { <p class="text-gray-600">"No products are available right now."</p> })
            } else {
                Either::Right(view! {
                    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        {categories
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <div class="p-6 bg-white rounded-lg border border-gray-100 shadow-sm">
                                        <A
                                            href=SiteRoute::product(category.slug).to_string()
                                            attr:class="block mb-3 text-xl font-bold text-primary hover:text-primary/80"
                                        >
                                            {category.name}
                                        </A>
                                        <ul class="space-y-1 text-gray-600">
                                            {category
                                                .services
                                                .into_iter()
                                                .map(|service| view! { <li>{service.name}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                })
            }}
        </section>
    }
}
