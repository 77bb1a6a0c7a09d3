//! Hand-off of a service selection from the menu to whatever page it
//! navigated to.
//!
//! A destination that is mounted and listening holds a [`Readiness`] for its
//! category, obtained from [`acknowledge`](SelectionRelay::acknowledge). The
//! menu [`arm`](SelectionRelay::arm)s a selection right after navigating:
//! if a listener for that category is already ready, the selection goes out
//! at once. Otherwise it waits for the destination to acknowledge, or for the
//! menu's fallback timer to call [`expire`](SelectionRelay::expire).
//! Whichever comes first delivers, the other is a no-op.

use async_broadcast::{InactiveReceiver, Receiver, Sender, TrySendError, broadcast};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

const CHANNEL_CAPACITY: usize = 8;

/// A service picked from the menu.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceSelection {
    /// Slug of the category the service belongs to.
    pub category: String,
    /// Slug of the service.
    pub slug: String,
}

impl ServiceSelection {
    /// Selection of service `slug` in `category`.
    pub fn new(category: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            slug: slug.into(),
        }
    }
}

/// Identifies one armed selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Pending {
    ticket: Ticket,
    selection: ServiceSelection,
}

#[derive(Debug, Default)]
struct RelayState {
    pending: Option<Pending>,
    /// Mounted listeners per category slug.
    ready: HashMap<String, usize>,
}

#[derive(Debug)]
struct RelayInner {
    sender: Sender<ServiceSelection>,
    // Keeps the channel open while no listener is mounted.
    _idle: InactiveReceiver<ServiceSelection>,
    state: Mutex<RelayState>,
    next_ticket: AtomicU64,
}

/// Channel between the menu and selection listeners, provided as context.
#[derive(Clone, Debug)]
pub struct SelectionRelay {
    inner: Arc<RelayInner>,
}

/// A listener for one category that is ready to receive selections.
///
/// Dropping it withdraws the readiness.
#[derive(Debug)]
pub struct Readiness {
    relay: SelectionRelay,
    category: String,
    released: bool,
}

impl Readiness {
    /// `true` if acknowledging released a pending selection.
    pub const fn released(&self) -> bool {
        self.released
    }
}

impl Drop for Readiness {
    fn drop(&mut self) {
        let mut state = self.relay.state();
        if let Some(count) = state.ready.get_mut(&self.category) {
            *count -= 1;
            if *count == 0 {
                state.ready.remove(&self.category);
            }
        }
    }
}

impl Default for SelectionRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionRelay {
    /// An idle relay with no listeners and nothing pending.
    pub fn new() -> Self {
        let (mut sender, receiver) = broadcast(CHANNEL_CAPACITY);
        sender.set_overflow(true);
        Self {
            inner: Arc::new(RelayInner {
                sender,
                _idle: receiver.deactivate(),
                state: Mutex::new(RelayState::default()),
                next_ticket: AtomicU64::new(0),
            }),
        }
    }

    /// Starts listening. Only selections delivered after this call are
    /// received.
    pub fn subscribe(&self) -> Receiver<ServiceSelection> {
        self.inner.sender.new_receiver()
    }

    /// Hands `selection` over.
    ///
    /// Delivers at once and returns `None` when a listener for its category
    /// is ready. Otherwise holds it until it is acknowledged or its ticket
    /// expires. A selection that is still pending is superseded either way
    /// and never delivered.
    pub fn arm(&self, selection: ServiceSelection) -> Option<Ticket> {
        let ticket = Ticket(self.inner.next_ticket.fetch_add(1, Ordering::Relaxed));
        let (previous, immediate) = {
            let mut state = self.state();
            let previous = state.pending.take();
            if state.ready.contains_key(&selection.category) {
                (previous, Some(selection))
            } else {
                state.pending = Some(Pending { ticket, selection });
                (previous, None)
            }
        };

        if let Some(previous) = previous {
            debug!(
                "Selection {}/{} superseded before delivery",
                previous.selection.category, previous.selection.slug
            );
        }
        match immediate {
            Some(selection) => {
                self.deliver(selection);
                None
            }
            None => Some(ticket),
        }
    }

    /// Called by a destination mounted for `category` once it listens.
    ///
    /// Releases a pending selection for `category`. Later selections for
    /// `category` are delivered without waiting while the returned
    /// [`Readiness`] is alive.
    pub fn acknowledge(&self, category: &str) -> Readiness {
        *self.state().ready.entry(category.to_string()).or_default() += 1;
        let released = self.release(|p| p.selection.category == category);
        Readiness {
            relay: self.clone(),
            category: category.to_string(),
            released,
        }
    }

    /// Called by the fallback timer of `ticket`.
    ///
    /// Returns `true` if the selection was still pending and got released.
    pub fn expire(&self, ticket: Ticket) -> bool {
        self.release(|p| p.ticket == ticket)
    }

    /// Drops the selection of `ticket` without delivering it.
    pub fn withdraw(&self, ticket: Ticket) -> bool {
        self.take_if(|p| p.ticket == ticket)
            .inspect(|s| debug!("Selection {}/{} withdrawn", s.category, s.slug))
            .is_some()
    }

    fn release(&self, matches: impl FnOnce(&Pending) -> bool) -> bool {
        let Some(selection) = self.take_if(matches) else {
            return false;
        };
        self.deliver(selection);
        true
    }

    fn take_if(&self, matches: impl FnOnce(&Pending) -> bool) -> Option<ServiceSelection> {
        let mut state = self.state();
        if state.pending.as_ref().is_some_and(matches) {
            state.pending.take().map(|p| p.selection)
        } else {
            None
        }
    }

    fn deliver(&self, selection: ServiceSelection) {
        match self.inner.sender.try_broadcast(selection) {
            Ok(_) => info!("Service selection delivered"),
            Err(TrySendError::Inactive(s)) => {
                warn!("No listener for selection {}/{}", s.category, s.slug);
            }
            Err(TrySendError::Full(s) | TrySendError::Closed(s)) => {
                warn!("Selection {}/{} dropped by the channel", s.category, s.slug);
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, RelayState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosting() -> ServiceSelection {
        ServiceSelection::new("web", "hosting")
    }

    #[test]
    fn test_expiry_delivers_exactly_once() {
        let relay = SelectionRelay::new();
        let mut rx = relay.subscribe();

        let ticket = relay.arm(hosting()).unwrap();
        assert!(relay.expire(ticket));
        assert!(!relay.acknowledge("web").released());
        assert!(!relay.expire(ticket));

        assert_eq!(pollster::block_on(rx.recv()).unwrap(), hosting());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_acknowledgement_wins_over_timer() {
        let relay = SelectionRelay::new();
        let mut rx = relay.subscribe();

        let ticket = relay.arm(hosting()).unwrap();
        assert!(relay.acknowledge("web").released());
        assert!(!relay.expire(ticket));

        assert_eq!(rx.try_recv().unwrap(), hosting());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_acknowledgement_for_other_category_is_ignored() {
        let relay = SelectionRelay::new();
        let mut rx = relay.subscribe();

        let ticket = relay.arm(hosting()).unwrap();
        let cloud = relay.acknowledge("cloud");
        assert!(!cloud.released());
        assert!(rx.try_recv().is_err());

        assert!(relay.expire(ticket));
        assert_eq!(rx.try_recv().unwrap(), hosting());
    }

    #[test]
    fn test_ready_listener_gets_selection_without_waiting() {
        let relay = SelectionRelay::new();
        let mut rx = relay.subscribe();
        let web = relay.acknowledge("web");

        assert_eq!(relay.arm(ServiceSelection::new("web", "domains")), None);
        assert_eq!(rx.try_recv().unwrap().slug, "domains");

        // Other categories still wait for their page.
        let ticket = relay.arm(ServiceSelection::new("cloud", "vps")).unwrap();
        assert!(rx.try_recv().is_err());
        assert!(relay.withdraw(ticket));

        drop(web);
        assert!(relay.arm(hosting()).is_some());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_readiness_is_counted_per_listener() {
        let relay = SelectionRelay::new();
        let first = relay.acknowledge("web");
        let second = relay.acknowledge("web");

        drop(first);
        assert_eq!(relay.arm(hosting()), None);
        drop(second);
        assert!(relay.arm(hosting()).is_some());
    }

    #[test]
    fn test_withdrawn_selection_is_never_delivered() {
        let relay = SelectionRelay::new();
        let mut rx = relay.subscribe();

        let ticket = relay.arm(hosting()).unwrap();
        assert!(relay.withdraw(ticket));
        assert!(!relay.expire(ticket));
        assert!(!relay.acknowledge("web").released());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_newer_selection_supersedes_pending_one() {
        let relay = SelectionRelay::new();
        let mut rx = relay.subscribe();

        let first = relay.arm(hosting()).unwrap();
        let second = relay.arm(ServiceSelection::new("web", "domains")).unwrap();
        assert_ne!(first, second);

        assert!(!relay.expire(first));
        assert!(!relay.withdraw(first));
        assert!(relay.expire(second));

        assert_eq!(rx.try_recv().unwrap().slug, "domains");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_immediate_delivery_supersedes_pending_one() {
        let relay = SelectionRelay::new();
        let mut rx = relay.subscribe();
        let _web = relay.acknowledge("web");

        let cloud = relay.arm(ServiceSelection::new("cloud", "vps")).unwrap();
        assert_eq!(relay.arm(hosting()), None);
        assert!(!relay.expire(cloud));

        assert_eq!(rx.try_recv().unwrap(), hosting());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_delivery_without_listeners_is_dropped() {
        let relay = SelectionRelay::new();
        let ticket = relay.arm(hosting()).unwrap();
        assert!(relay.expire(ticket));

        let mut late = relay.subscribe();
        assert!(late.try_recv().is_err());
    }

    #[test]
    fn test_every_listener_receives_the_selection() {
        let relay = SelectionRelay::new();
        let mut pricing = relay.subscribe();
        let mut summary = relay.subscribe();

        relay.arm(hosting());
        let _ready = relay.acknowledge("web");

        assert_eq!(pricing.try_recv().unwrap(), hosting());
        assert_eq!(summary.try_recv().unwrap(), hosting());
    }

    #[test]
    fn test_payload_field_names() {
        let json = serde_json::to_value(hosting()).unwrap();
        assert_eq!(json, serde_json::json!({"category": "web", "slug": "hosting"}));
    }
}
