use crate::selection::{Readiness, SelectionRelay, ServiceSelection};
use async_broadcast::{Receiver, RecvError};
use futures::future::{AbortHandle, AbortRegistration, Abortable};
use leptos::{prelude::*, task::spawn_local};
use log::{debug, warn};
use productnav_catalog::prelude::Category;

/// Services of one category; the one picked in the product menu is
/// highlighted.
///
/// The panel listens on the [`SelectionRelay`] while mounted and stays
/// acknowledged for its category until unmounted, so a selection made in
/// the menu reaches it regardless of how long the route took to render, and
/// without delay when its category is already shown.
#[component]
pub fn PricingPanel(category: Category) -> impl IntoView {
    let relay = expect_context::<SelectionRelay>();
    let selected = RwSignal::new(None::<String>);
    let no_services = category.services.is_empty();

    let (abort, registration) = AbortHandle::new_pair();
    let readiness = StoredValue::new(None::<Readiness>);
    let mut listener = Some((relay.subscribe(), registration));
    let category_slug = category.slug.clone();
    // Effects only run in the browser, and this one only once.
    Effect::new(move |_| {
        if let Some((receiver, registration)) = listener.take() {
            spawn_local(listen(receiver, registration, category_slug.clone(), move |slug| {
                selected.set(Some(slug));
            }));
            readiness.set_value(Some(relay.acknowledge(&category_slug)));
        }
    });
    on_cleanup(move || {
        readiness.try_set_value(None);
        abort.abort();
    });

    let selected_name = {
        let category = category.clone();
        move || {
            selected
                .read()
                .as_deref()
                .and_then(|slug| category.service(slug))
                .map(|service| service.name.clone())
        }
    };

    view! {
        <div>
            <p class="mb-4 h-6 text-sm text-gray-500">
                {move || selected_name().map(|name| format!("Selected: {name}"))}
            </p>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {category
                    .services
                    .into_iter()
                    .map(|service| {
                        let slug = service.slug;
                        let service_attr = slug.clone();
                        let is_selected = Memo::new({
                            let slug = slug.clone();
                            move |_| selected.read().as_deref() == Some(slug.as_str())
                        });
                        view! {
                            <div
                                class="p-6 bg-white rounded-lg border border-gray-100 shadow-sm transition"
                                class=("ring-2", is_selected)
                                class=("ring-primary", is_selected)
                                data-service=service_attr
                                aria-current=move || is_selected.get().then_some("true")
                            >
                                <h3 class="mb-4 text-lg font-bold text-gray-900">{service.name}</h3>
                                <button
                                    class="py-2 px-4 text-sm font-medium text-white rounded bg-primary hover:bg-primary/90"
                                    on:click=move |_| selected.set(Some(slug.clone()))
                                >
                                    "Request a quote"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {no_services
                .then(|| view! { <p class="text-gray-600">"No services listed in this category yet."</p> })}
        </div>
    }
}

/// Passes the service slug of every selection for `category` to `select`
/// until the relay closes or `registration` is aborted.
async fn listen(
    mut receiver: Receiver<ServiceSelection>,
    registration: AbortRegistration,
    category: String,
    mut select: impl FnMut(String),
) {
    let messages = async move {
        loop {
            match receiver.recv().await {
                Ok(selection) if selection.category == category => {
                    debug!("Pricing panel selected {}/{}", selection.category, selection.slug);
                    select(selection.slug);
                }
                Ok(selection) => debug!("Pricing panel ignored selection for {}", selection.category),
                Err(RecvError::Overflowed(skipped)) => {
                    warn!("Pricing panel missed {skipped} selections");
                }
                Err(RecvError::Closed) => break,
            }
        }
    };

    if Abortable::new(messages, registration).await.is_err() {
        debug!("Pricing panel listener stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_ignores_other_categories() {
        let relay = SelectionRelay::new();
        let receiver = relay.subscribe();
        let (_abort, registration) = AbortHandle::new_pair();

        for (category, service) in [("cloud", "vps"), ("web", "hosting"), ("email", "mailboxes")] {
            let ticket = relay.arm(ServiceSelection::new(category, service)).unwrap();
            relay.expire(ticket);
        }
        // Closes the channel once the queued selections are read.
        drop(relay);

        let mut picked = Vec::new();
        pollster::block_on(listen(receiver, registration, "web".to_string(), |slug| {
            picked.push(slug);
        }));
        assert_eq!(picked, ["hosting"]);
    }

    #[test]
    fn test_listen_stops_when_aborted() {
        let relay = SelectionRelay::new();
        let receiver = relay.subscribe();
        let (abort, registration) = AbortHandle::new_pair();

        let ticket = relay.arm(ServiceSelection::new("web", "hosting")).unwrap();
        relay.expire(ticket);
        abort.abort();

        // Returns although the relay is still open.
        let mut picked = Vec::new();
        pollster::block_on(listen(receiver, registration, "web".to_string(), |slug| {
            picked.push(slug);
        }));
        assert!(picked.is_empty());
    }
}
