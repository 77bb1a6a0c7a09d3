use crate::routes::SiteRoute;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="px-4 py-24 mx-auto max-w-4xl text-center">
            <h1 class="mb-6 text-4xl font-bold text-gray-900">"Everything your business runs on"</h1>
            <p class="mb-8 text-lg text-gray-600">
                "Hover " <strong>"Products"</strong>
                " above to jump straight to a service, or browse the full catalog."
            </p>
            <A
                href=SiteRoute::AllProducts.to_string()
                attr:class="inline-block py-3 px-6 font-medium text-white rounded-lg bg-primary hover:bg-primary/90"
            >
                "Browse all products"
            </A>
        </section>
    }
}
