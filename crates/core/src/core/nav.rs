//! Mobile navigation state machine.
//!
//! Two states, one open trigger, four close triggers. While the menu is
//! open, page scroll is suppressed; closing always releases it. No state
//! survives a toggle beyond the open flag itself.

/// Menu visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

/// Which control asked for the close. All four behave identically; the
/// trigger is kept explicit for wiring and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The dedicated close control inside the menu.
    CloseControl,
    /// A click on the backdrop overlay behind the menu.
    Backdrop,
    /// The Escape key. Ignored while the menu is closed.
    EscapeKey,
    /// A navigation link was followed; the menu closes behind it.
    LinkFollowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    OpenRequested,
    CloseRequested(CloseReason),
}

/// DOM-free effect vocabulary for the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    ShowMenu,
    HideMenu,
    /// Suppress page scroll while the menu covers the page.
    LockScroll,
    UnlockScroll,
}

/// Step the state machine. Redundant events (open while open, any close
/// while closed) produce no effects; repeated toggling is idempotent.
pub fn transition(state: NavState, event: NavEvent) -> (NavState, Vec<NavEffect>) {
    match (state, event) {
        (NavState::Closed, NavEvent::OpenRequested) => (
            NavState::Open,
            vec![NavEffect::ShowMenu, NavEffect::LockScroll],
        ),
        (NavState::Open, NavEvent::CloseRequested(_)) => (
            NavState::Closed,
            vec![NavEffect::HideMenu, NavEffect::UnlockScroll],
        ),
        (state, _) => (state, Vec::new()),
    }
}
