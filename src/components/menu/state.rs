use crate::routes::SiteRoute;
use crate::selection::ServiceSelection;
use log::debug;
use strum::IntoStaticStr;

/// Whether the product panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs the menu reacts to.
#[derive(Clone, Debug, PartialEq, Eq, IntoStaticStr)]
pub enum MenuEvent {
    /// The pointer entered the trigger or the panel.
    PointerEnter,
    /// The pointer left the trigger and the panel.
    PointerLeave,
    /// A pointer was pressed somewhere in the document.
    PointerDown { within_menu: bool },
    /// A category heading was activated.
    CategoryActivated { category: String },
    /// A service link was activated.
    ServiceActivated { category: String, service: String },
    /// The footer "view all" link was activated.
    ViewAllActivated,
}

/// Work the component has to carry out after a transition, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEffect {
    Navigate(SiteRoute),
    /// Hand the selection to the destination once it is ready.
    DispatchSelection(ServiceSelection),
}

impl MenuState {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Applies `event` and returns the next state with the effects to run.
    ///
    /// Activating any link closes the menu, whatever the current state, so
    /// a keyboard activation racing a pointer-leave still navigates.
    pub fn handle(self, event: MenuEvent) -> (Self, Vec<MenuEffect>) {
        let cause: &'static str = (&event).into();
        let (next, effects) = match event {
            MenuEvent::PointerEnter => (Self::Open, Vec::new()),
            MenuEvent::PointerLeave
            | MenuEvent::PointerDown {
                within_menu: false,
            } => (Self::Closed, Vec::new()),
            MenuEvent::PointerDown { within_menu: true } => (self, Vec::new()),
            MenuEvent::CategoryActivated { category } => (
                Self::Closed,
                vec![MenuEffect::Navigate(SiteRoute::product(category))],
            ),
            MenuEvent::ServiceActivated { category, service } => (
                Self::Closed,
                vec![
                    MenuEffect::Navigate(SiteRoute::product(category.clone())),
                    MenuEffect::DispatchSelection(ServiceSelection::new(category, service)),
                ],
            ),
            MenuEvent::ViewAllActivated => {
                (Self::Closed, vec![MenuEffect::Navigate(SiteRoute::AllProducts)])
            }
        };

        if next != self {
            debug!(
                "Product menu {} -> {} on {cause}",
                <&str>::from(self),
                <&str>::from(next)
            );
        }
        (next, effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: impl IntoIterator<Item = MenuEvent>) -> (MenuState, Vec<MenuEffect>) {
        events
            .into_iter()
            .fold((MenuState::default(), Vec::new()), |(state, mut all), event| {
                let (next, effects) = state.handle(event);
                all.extend(effects);
                (next, all)
            })
    }

    fn service(category: &str, service: &str) -> MenuEvent {
        MenuEvent::ServiceActivated {
            category: category.to_string(),
            service: service.to_string(),
        }
    }

    #[test]
    fn test_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_hover_follows_net_enter_state() {
        let sequences: [&[MenuEvent]; 5] = [
            &[MenuEvent::PointerEnter],
            &[MenuEvent::PointerEnter, MenuEvent::PointerEnter],
            &[MenuEvent::PointerEnter, MenuEvent::PointerLeave],
            &[MenuEvent::PointerLeave, MenuEvent::PointerEnter],
            &[
                MenuEvent::PointerEnter,
                MenuEvent::PointerLeave,
                MenuEvent::PointerLeave,
            ],
        ];
        for events in sequences {
            let (state, effects) = run(events.iter().cloned());
            let last_entered = events.last() == Some(&MenuEvent::PointerEnter);
            assert_eq!(state.is_open(), last_entered, "sequence {events:?}");
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn test_pointer_down_outside_closes() {
        let (state, effects) = run([
            MenuEvent::PointerEnter,
            MenuEvent::PointerDown { within_menu: false },
        ]);
        assert_eq!(state, MenuState::Closed);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_pointer_down_inside_keeps_state() {
        let (state, _) = run([
            MenuEvent::PointerEnter,
            MenuEvent::PointerDown { within_menu: true },
        ]);
        assert_eq!(state, MenuState::Open);

        let (state, _) = run([MenuEvent::PointerDown { within_menu: true }]);
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn test_service_activation_navigates_then_dispatches() {
        let (state, effects) = run([MenuEvent::PointerEnter, service("web", "hosting")]);
        assert_eq!(state, MenuState::Closed);
        assert_eq!(
            effects,
            vec![
                MenuEffect::Navigate(SiteRoute::product("web")),
                MenuEffect::DispatchSelection(ServiceSelection::new("web", "hosting")),
            ]
        );
    }

    #[test]
    fn test_service_activation_while_closed_still_navigates() {
        let (state, effects) = run([service("cloud", "object-storage")]);
        assert_eq!(state, MenuState::Closed);
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[0],
            MenuEffect::Navigate(SiteRoute::product("cloud"))
        );
    }

    #[test]
    fn test_category_and_view_all_only_navigate() {
        let (state, effects) = run([
            MenuEvent::PointerEnter,
            MenuEvent::CategoryActivated {
                category: "email".to_string(),
            },
        ]);
        assert_eq!(state, MenuState::Closed);
        assert_eq!(effects, vec![MenuEffect::Navigate(SiteRoute::product("email"))]);

        let (state, effects) = run([MenuEvent::PointerEnter, MenuEvent::ViewAllActivated]);
        assert_eq!(state, MenuState::Closed);
        assert_eq!(effects, vec![MenuEffect::Navigate(SiteRoute::AllProducts)]);
    }

    #[test]
    fn test_reopens_after_activation() {
        let (state, _) = run([
            MenuEvent::PointerEnter,
            service("web", "hosting"),
            MenuEvent::PointerEnter,
        ]);
        assert!(state.is_open());
    }
}
