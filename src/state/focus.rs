//! Focus traversal.
//!
//! Tab/Shift-Tab walk the activatable elements in document order. The
//! focused element is identified by [`FocusId`], not by position, so it
//! survives relayouts; the ordered target list is recomputed from the
//! current frame and passed in by the caller.
//!
//! The modal uses save/restore: focus is saved when it opens, constrained
//! to the modal's own targets while open, and handed back on close - the
//! trap never outlives the modal.

use std::cell::RefCell;

use spark_signals::{Signal, signal};

use crate::types::FocusId;

thread_local! {
    static FOCUSED: Signal<Option<FocusId>> = signal(None);
    static FOCUS_HISTORY: RefCell<Vec<Option<FocusId>>> = const { RefCell::new(Vec::new()) };
}

/// The focused element, if any (reactive read).
pub fn focused() -> Option<FocusId> {
    FOCUSED.with(|s| s.get())
}

/// Whether a specific element has focus.
pub fn is_focused(id: FocusId) -> bool {
    focused() == Some(id)
}

/// Focus an element directly.
pub fn focus(id: FocusId) {
    FOCUSED.with(|s| {
        if s.get() != Some(id) {
            s.set(Some(id));
        }
    });
}

/// Clear focus.
pub fn blur() {
    FOCUSED.with(|s| {
        if s.get().is_some() {
            s.set(None);
        }
    });
}

/// Move focus to the next target in `order`, wrapping at the end.
///
/// With nothing focused (or the focused element gone from the list) the
/// first target is focused. An empty list blurs.
pub fn focus_next(order: &[FocusId]) {
    step(order, 1);
}

/// Move focus to the previous target in `order`, wrapping at the start.
pub fn focus_previous(order: &[FocusId]) {
    step(order, -1);
}

fn step(order: &[FocusId], direction: i32) {
    if order.is_empty() {
        blur();
        return;
    }

    let next = match focused().and_then(|id| order.iter().position(|t| *t == id)) {
        Some(pos) => {
            let len = order.len() as i32;
            let idx = (pos as i32 + direction).rem_euclid(len) as usize;
            order[idx]
        }
        None => {
            if direction >= 0 {
                order[0]
            } else {
                order[order.len() - 1]
            }
        }
    };
    focus(next);
}

/// Keep focus valid against the current target list: a focused element that
/// no longer exists is blurred.
pub fn retain(order: &[FocusId]) {
    if let Some(id) = focused() {
        if !order.contains(&id) {
            blur();
        }
    }
}

// =============================================================================
// Save / restore (modal trap)
// =============================================================================

/// Save the current focus before entering a trap.
pub fn save_focus() {
    FOCUS_HISTORY.with(|h| h.borrow_mut().push(focused()));
}

/// Restore the focus saved by the matching [`save_focus`]. Returns `true`
/// if a saved entry existed.
pub fn restore_focus() -> bool {
    let saved = FOCUS_HISTORY.with(|h| h.borrow_mut().pop());
    match saved {
        Some(Some(id)) => {
            focus(id);
            true
        }
        Some(None) => {
            blur();
            true
        }
        None => false,
    }
}

/// Reset all focus state (for testing).
pub fn reset_focus_state() {
    FOCUSED.with(|s| s.set(None));
    FOCUS_HISTORY.with(|h| h.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER: [FocusId; 3] = [FocusId::Nav(0), FocusId::Nav(1), FocusId::CvLink];

    fn setup() {
        reset_focus_state();
    }

    #[test]
    fn test_initially_unfocused() {
        setup();
        assert_eq!(focused(), None);
    }

    #[test]
    fn test_next_from_nothing_focuses_first() {
        setup();
        focus_next(&ORDER);
        assert!(is_focused(FocusId::Nav(0)));
    }

    #[test]
    fn test_previous_from_nothing_focuses_last() {
        setup();
        focus_previous(&ORDER);
        assert!(is_focused(FocusId::CvLink));
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        setup();
        focus(FocusId::CvLink);

        focus_next(&ORDER);
        assert!(is_focused(FocusId::Nav(0)));

        focus_previous(&ORDER);
        assert!(is_focused(FocusId::CvLink));
    }

    #[test]
    fn test_empty_order_blurs() {
        setup();
        focus(FocusId::Nav(0));
        focus_next(&[]);
        assert_eq!(focused(), None);
    }

    #[test]
    fn test_vanished_target_restarts_cycle() {
        setup();
        focus(FocusId::ModalClose); // not in ORDER
        focus_next(&ORDER);
        assert!(is_focused(FocusId::Nav(0)));
    }

    #[test]
    fn test_retain_blurs_dead_focus() {
        setup();
        focus(FocusId::ModalClose);
        retain(&ORDER);
        assert_eq!(focused(), None);

        focus(FocusId::Nav(1));
        retain(&ORDER);
        assert!(is_focused(FocusId::Nav(1)));
    }

    #[test]
    fn test_save_restore_roundtrip() {
        setup();
        focus(FocusId::Nav(1));
        save_focus();

        // Inside the trap
        focus(FocusId::ModalClose);
        assert!(restore_focus());
        assert!(is_focused(FocusId::Nav(1)));

        // Nothing left to restore
        assert!(!restore_focus());
    }

    #[test]
    fn test_restore_of_saved_blur() {
        setup();
        save_focus(); // nothing focused
        focus(FocusId::ModalClose);

        assert!(restore_focus());
        assert_eq!(focused(), None);
    }
}
