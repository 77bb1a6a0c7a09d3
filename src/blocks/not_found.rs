use crate::routes::SiteRoute;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <section class="px-4 py-24 mx-auto max-w-xl text-center">
            <h1 class="mb-4 text-3xl font-bold text-gray-900">"Page not found"</h1>
            <p class="mb-6 text-gray-600">
                {message.unwrap_or_else(|| "We could not find what you were looking for.".to_string())}
            </p>
            <A href=SiteRoute::AllProducts.to_string() attr:class="text-primary hover:text-primary/80">
                "See all products"
            </A>
        </section>
    }
}
