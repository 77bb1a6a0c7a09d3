use crate::components::menu::mega_menu::ProductMegaMenu;
use crate::routes::SiteRoute;
use leptos::prelude::*;
use leptos_router::components::A;
use productnav_catalog::prelude::SiteConfig;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let SiteConfig { menu, catalog } = expect_context::<SiteConfig>();

    view! {
        <header class="sticky top-0 z-40 bg-white shadow-sm">
            <nav class="flex gap-8 items-center px-4 mx-auto max-w-7xl h-16">
                <A href=SiteRoute::Home.to_string() attr:class="mr-auto text-xl font-bold text-gray-900">
                    "productnav"
                </A>
                <ProductMegaMenu catalog=catalog settings=menu />
                <A
                    href=SiteRoute::AllProducts.to_string()
                    attr:class="font-medium text-gray-800 transition duration-300 hover:text-primary"
                >
                    "Pricing"
                </A>
            </nav>
        </header>
    }
}
