//! Narrow-mode navigation drawer state.
//!
//! Below the width breakpoint the navbar collapses to a toggle; the drawer
//! is an explicit `{Collapsed, Expanded}` view state. Activating any nav
//! entry collapses the drawer before the scroll starts.

use spark_signals::{Signal, signal};

/// Breakpoint under which the navbar collapses into a drawer (columns).
pub const NARROW_BREAKPOINT: u16 = 72;

/// Drawer view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Collapsed,
    Expanded,
}

thread_local! {
    static DRAWER: Signal<DrawerState> = signal(DrawerState::Collapsed);
}

/// Current drawer state (reactive read).
pub fn drawer() -> DrawerState {
    DRAWER.with(|s| s.get())
}

/// Whether the drawer is expanded.
pub fn is_expanded() -> bool {
    drawer() == DrawerState::Expanded
}

/// Toggle the drawer.
pub fn toggle() {
    DRAWER.with(|s| {
        let next = match s.get() {
            DrawerState::Collapsed => DrawerState::Expanded,
            DrawerState::Expanded => DrawerState::Collapsed,
        };
        s.set(next);
    });
}

/// Collapse the drawer. Idempotent.
pub fn collapse() {
    DRAWER.with(|s| {
        if s.get() != DrawerState::Collapsed {
            s.set(DrawerState::Collapsed);
        }
    });
}

/// Whether the navbar is in narrow (drawer) mode at a given width.
pub fn is_narrow(width: u16) -> bool {
    width < NARROW_BREAKPOINT
}

/// Reset to the initial state (for testing).
pub fn reset_menu_state() {
    DRAWER.with(|s| s.set(DrawerState::Collapsed));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_menu_state();
    }

    #[test]
    fn test_starts_collapsed() {
        setup();
        assert_eq!(drawer(), DrawerState::Collapsed);
    }

    #[test]
    fn test_toggle_and_collapse() {
        setup();

        toggle();
        assert!(is_expanded());

        toggle();
        assert!(!is_expanded());

        toggle();
        collapse();
        assert!(!is_expanded());
        collapse(); // idempotent
        assert!(!is_expanded());
    }

    #[test]
    fn test_breakpoint() {
        assert!(is_narrow(NARROW_BREAKPOINT - 1));
        assert!(!is_narrow(NARROW_BREAKPOINT));
    }
}
