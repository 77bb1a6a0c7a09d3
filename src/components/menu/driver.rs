use super::state::MenuEffect;
use crate::routes::SiteRoute;
use crate::selection::{SelectionRelay, Ticket};
use leptos::prelude::*;

/// Carries out [`MenuEffect`]s and owns the fallback timer of the selection
/// in flight.
///
/// `T` is the timer handle; dropping it must cancel the timer.
#[derive(Debug)]
pub struct MenuDriver<T> {
    relay: SelectionRelay,
    fallback: Option<(Ticket, T)>,
}

impl<T> MenuDriver<T> {
    pub const fn new(relay: SelectionRelay) -> Self {
        Self {
            relay,
            fallback: None,
        }
    }

    /// Runs `effects` in order.
    ///
    /// `schedule` starts the fallback timer for a selection that has to wait
    /// for its destination. A timer left over from an earlier selection is
    /// dropped.
    pub fn run(
        &mut self,
        effects: Vec<MenuEffect>,
        mut navigate: impl FnMut(&SiteRoute),
        mut schedule: impl FnMut(SelectionRelay, Ticket) -> T,
    ) {
        for effect in effects {
            match effect {
                MenuEffect::Navigate(route) => navigate(&route),
                MenuEffect::DispatchSelection(selection) => {
                    self.fallback = self
                        .relay
                        .arm(selection)
                        .map(|ticket| (ticket, schedule(self.relay.clone(), ticket)));
                }
            }
        }
    }

    /// Cancels the fallback timer and withdraws its selection.
    pub fn cancel(&mut self) {
        if let Some((ticket, timer)) = self.fallback.take() {
            drop(timer);
            self.relay.withdraw(ticket);
        }
    }
}

impl<T> Drop for MenuDriver<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Unmount path of the menu: stops the outside-pointer listener, then
/// cancels whatever selection is still in flight.
pub fn tear_down<T: 'static>(
    driver: StoredValue<MenuDriver<T>, LocalStorage>,
    stop_listener: impl FnOnce(),
) {
    stop_listener();
    // Already disposed means the driver was dropped, which cancels too.
    driver.try_update_value(MenuDriver::cancel);
}
