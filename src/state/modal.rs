//! Contact modal state machine.
//!
//! Two states, no terminal state: `Closed <-> Open`, re-enterable
//! indefinitely. Opens from any contact call-to-action; closes on the
//! explicit close control, a backdrop click, or Escape. Activating a link
//! inside the modal does not implicitly close it.

use spark_signals::{Signal, signal};

/// Modal view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

thread_local! {
    static CONTACT_MODAL: Signal<ModalState> = signal(ModalState::Closed);
}

/// Current modal state (reactive read).
pub fn contact_modal() -> ModalState {
    CONTACT_MODAL.with(|s| s.get())
}

/// Whether the modal is open.
pub fn is_open() -> bool {
    contact_modal() == ModalState::Open
}

/// Open the modal. Idempotent.
pub fn open() {
    CONTACT_MODAL.with(|s| {
        if s.get() != ModalState::Open {
            s.set(ModalState::Open);
        }
    });
}

/// Close the modal. Idempotent.
pub fn close() {
    CONTACT_MODAL.with(|s| {
        if s.get() != ModalState::Closed {
            s.set(ModalState::Closed);
        }
    });
}

/// Reset to the initial state (for testing).
pub fn reset_modal_state() {
    CONTACT_MODAL.with(|s| s.set(ModalState::Closed));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_modal_state();
    }

    #[test]
    fn test_initial_state_is_closed() {
        setup();
        assert_eq!(contact_modal(), ModalState::Closed);
        assert!(!is_open());
    }

    #[test]
    fn test_open_close_cycle() {
        setup();

        open();
        assert!(is_open());

        close();
        assert!(!is_open());

        // Re-enterable indefinitely
        open();
        assert!(is_open());
    }

    #[test]
    fn test_transitions_are_idempotent() {
        setup();

        open();
        open();
        assert!(is_open());

        close();
        close();
        assert!(!is_open());
    }
}
