use super::layout::{CategoryColumn, PanelLayout};
use super::driver::{MenuDriver, tear_down};
use super::state::{MenuEvent, MenuState};
use crate::components::icon::Icon;
use crate::selection::SelectionRelay;
use gloo_timers::callback::Timeout;
use leptos::{html::Div, prelude::*};
use leptos_router::{NavigateOptions, hooks::use_navigate};
use leptos_use::on_click_outside;
use log::info;
use productnav_catalog::prelude::{Catalog, MenuSettings};
use web_sys::MouseEvent;

/// Hover-activated product navigation.
///
/// The panel is open while the pointer is over the trigger or the panel. It
/// closes on leave, on a press anywhere outside the menu, and when any of
/// its links is activated. Outside presses are reported by
/// `on_click_outside`, i.e. on the `click` that ends them rather than on
/// `pointerdown` itself.
///
/// Activating a service navigates to its category page and hands the
/// selection to that page through the [`SelectionRelay`] in context. The
/// relay delivers at once to a page that is already listening for that
/// category, as soon as a freshly mounted page acknowledges, or after
/// [`MenuSettings::selection_fallback`] if neither happens.
#[component]
pub fn ProductMegaMenu(
    /// Categories to list. An empty catalog renders an empty panel.
    #[prop(into)]
    catalog: Signal<Catalog>,
    #[prop(optional)] settings: MenuSettings,
) -> impl IntoView {
    let state = RwSignal::new(MenuState::Closed);
    let menu_ref = NodeRef::<Div>::new();
    let navigate = use_navigate();
    let driver = StoredValue::new_local(MenuDriver::<Timeout>::new(
        expect_context::<SelectionRelay>(),
    ));
    let fallback_ms =
        u32::try_from(settings.selection_fallback().as_millis()).unwrap_or(u32::MAX);

    let on_event = Callback::new(move |event: MenuEvent| {
        let current = state.get_untracked();
        let (next, effects) = current.handle(event);
        if next != current {
            state.set(next);
        }

        driver.update_value(|driver| {
            driver.run(
                effects,
                |route| {
                    info!("Navigating to {route}");
                    navigate(&route.to_string(), NavigateOptions::default());
                },
                |relay, ticket| {
                    Timeout::new(fallback_ms, move || {
                        relay.expire(ticket);
                    })
                },
            );
        });
    });

    let stop_outside = on_click_outside(menu_ref, move |_| {
        on_event.run(MenuEvent::PointerDown { within_menu: false });
    });
    on_cleanup(move || tear_down(driver, stop_outside));

    let is_open = Signal::derive(move || state.get().is_open());
    let transition = settings.transition();
    let panel_style = format!("--mega-menu-duration: {}ms", settings.transition_ms);
    let MenuSettings {
        trigger_label,
        footer_blurb,
        view_all_label,
        ..
    } = settings;

    view! {
        <div
            node_ref=menu_ref
            class="relative group"
            on:mouseenter=move |_| on_event.run(MenuEvent::PointerEnter)
            on:mouseleave=move |_| on_event.run(MenuEvent::PointerLeave)
            on:pointerdown=move |_| on_event.run(MenuEvent::PointerDown { within_menu: true })
        >
            <div
                class="flex relative items-center font-medium text-gray-800 transition duration-300 cursor-pointer hover:text-primary"
                aria-haspopup="true"
                aria-expanded=move || is_open.get().to_string()
            >
                {trigger_label}
                <span
                    class="ml-1 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                    class=("text-primary", move || is_open.get())
                >
                    <Icon icon=icondata::BiChevronDownRegular />
                </span>
                <span class="absolute left-0 -bottom-1 w-0 h-0.5 transition-all bg-primary group-hover:w-full"></span>
            </div>

            <div class="absolute left-1/2 top-full z-50 -translate-x-1/2" style=panel_style>
                <AnimatedShow
                    when=is_open
                    show_class="mega-menu-enter"
                    hide_class="mega-menu-exit"
                    hide_delay=transition
                >
                    <MegaMenuPanel
                        layout=catalog.with(PanelLayout::from_catalog)
                        footer_blurb=footer_blurb.clone()
                        view_all_label=view_all_label.clone()
                        on_event=on_event
                    />
                </AnimatedShow>
            </div>
        </div>
    }
}

#[component]
fn MegaMenuPanel(
    layout: PanelLayout,
    footer_blurb: String,
    view_all_label: String,
    on_event: Callback<MenuEvent>,
) -> impl IntoView {
    let PanelLayout {
        columns,
        view_all_href,
    } = layout;

    view! {
        <div class="overflow-hidden relative bg-white rounded-lg shadow-xl w-max max-w-[95vw]">
            <div class="absolute top-0 right-0 -mt-10 -mr-10 w-40 h-40 rounded-full bg-primary/5"></div>
            <div class="absolute bottom-0 left-0 -mb-10 -ml-10 w-40 h-40 rounded-full bg-primary/5"></div>

            <div class="flex relative z-10 flex-row justify-between w-full min-w-0 whitespace-nowrap">
                {columns
                    .into_iter()
                    .map(|column| view! { <MegaMenuColumn column=column on_event=on_event /> })
                    .collect_view()}
            </div>

            <div class="p-4 bg-gray-50 border-t border-gray-100">
                <div class="flex flex-col gap-2 justify-between items-center sm:flex-row">
                    <span class="text-sm text-gray-500">{footer_blurb}</span>
                    <a
                        href=view_all_href
                        class="flex items-center text-sm font-medium transition-colors cursor-pointer text-primary group hover:text-primary/80"
                        on:click=move |ev: MouseEvent| {
                            ev.prevent_default();
                            on_event.run(MenuEvent::ViewAllActivated);
                        }
                    >
                        {view_all_label}
                        <Icon
                            icon=icondata::BiRightArrowAltRegular
                            class="ml-1 transition-transform group-hover:translate-x-1"
                        />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MegaMenuColumn(column: CategoryColumn, on_event: Callback<MenuEvent>) -> impl IntoView {
    let CategoryColumn {
        slug,
        name,
        href,
        services,
    } = column;
    let category = slug.clone();

    view! {
        <div class="flex-shrink-0 p-4 transition-colors duration-300 min-w-[220px] hover:bg-gray-50">
            <a
                href=href
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    on_event.run(MenuEvent::CategoryActivated { category: category.clone() });
                }
            >
                <h3 class="flex items-center mb-4 text-lg font-bold cursor-pointer text-primary group hover:text-primary/80">
                    {name}
                    <Icon
                        icon=icondata::BiRightArrowAltRegular
                        class="ml-2 opacity-0 transition-all group-hover:opacity-100 group-hover:translate-x-1"
                    />
                </h3>
            </a>
            <ul class="space-y-3">
                {services
                    .into_iter()
                    .map(|service| {
                        let category = slug.clone();
                        let service_slug = service.slug;
                        view! {
                            <li>
                                <a
                                    href=service.href
                                    on:click=move |ev: MouseEvent| {
                                        ev.prevent_default();
                                        on_event
                                            .run(MenuEvent::ServiceActivated {
                                                category: category.clone(),
                                                service: service_slug.clone(),
                                            });
                                    }
                                >
                                    <span class="block text-gray-600 transition-all duration-300 cursor-pointer hover:pl-2 hover:text-primary">
                                        {service.name}
                                    </span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
