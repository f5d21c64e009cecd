//! Scroll state.
//!
//! The page scrolls one vertical offset (per route; the detail view keeps
//! its own). Offsets are clamped to the document, and section jumps glide
//! toward their target over animation ticks instead of teleporting. Any
//! direct user scroll cancels an in-flight glide - the user always wins.

use std::cell::RefCell;

use spark_signals::{Signal, signal};

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Scroll amount for arrow keys (lines).
pub const LINE_SCROLL: u16 = 1;

/// Scroll amount for the mouse wheel.
pub const WHEEL_SCROLL: u16 = 3;

/// Page Up/Down scrolls this fraction of the viewport.
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static SCROLL_Y: Signal<u16> = signal(0);
    static MAX_SCROLL: Signal<u16> = signal(0);
    static GLIDE_TARGET: RefCell<Option<u16>> = const { RefCell::new(None) };
}

/// Current scroll offset (reactive read).
pub fn scroll_offset() -> u16 {
    SCROLL_Y.with(|s| s.get())
}

/// Maximum scroll offset (document height minus viewport).
pub fn max_scroll() -> u16 {
    MAX_SCROLL.with(|s| s.get())
}

/// Update the scroll bound after a relayout, re-clamping the offset.
pub fn set_max_scroll(max: u16) {
    MAX_SCROLL.with(|s| {
        if s.get() != max {
            s.set(max);
        }
    });
    let clamped = scroll_offset().min(max);
    SCROLL_Y.with(|s| {
        if s.get() != clamped {
            s.set(clamped);
        }
    });
}

fn write_offset(y: u16) {
    let clamped = y.min(max_scroll());
    SCROLL_Y.with(|s| {
        if s.get() != clamped {
            s.set(clamped);
        }
    });
}

// =============================================================================
// USER SCROLL OPERATIONS
// =============================================================================

/// Set the scroll offset directly (clamped). Cancels any glide.
pub fn set_scroll_offset(y: u16) {
    cancel_glide();
    write_offset(y);
}

/// Scroll by a delta. Cancels any glide.
///
/// Returns `true` if the offset changed, `false` at a boundary.
pub fn scroll_by(delta: i32) -> bool {
    cancel_glide();
    let current = scroll_offset();
    let next = ((current as i32) + delta).clamp(0, max_scroll() as i32) as u16;
    if next == current {
        return false;
    }
    write_offset(next);
    true
}

/// Scroll to the top of the document.
pub fn scroll_to_top() {
    set_scroll_offset(0);
}

/// Scroll to the bottom of the document.
pub fn scroll_to_bottom() {
    set_scroll_offset(max_scroll());
}

/// Page up/down by [`PAGE_SCROLL_FACTOR`] of the viewport height.
pub fn page_scroll(viewport_height: u16, down: bool) -> bool {
    let step = (viewport_height as f32 * PAGE_SCROLL_FACTOR).max(1.0) as i32;
    scroll_by(if down { step } else { -step })
}

// =============================================================================
// GLIDE (smooth section jumps)
// =============================================================================

/// Begin a glide toward a target offset.
///
/// The glide advances on animation ticks and is cancelled by any direct
/// user scroll; the final tick lands exactly on the (clamped) target.
pub fn glide_to(target: u16) {
    let target = target.min(max_scroll());
    if target == scroll_offset() {
        cancel_glide();
        return;
    }
    GLIDE_TARGET.with(|g| *g.borrow_mut() = Some(target));
}

/// Cancel an in-flight glide, leaving the offset where it is.
pub fn cancel_glide() {
    GLIDE_TARGET.with(|g| *g.borrow_mut() = None);
}

/// Whether a glide is in flight.
pub fn is_gliding() -> bool {
    GLIDE_TARGET.with(|g| g.borrow().is_some())
}

/// Advance the glide by one tick. Returns `true` if the offset moved.
///
/// Ease-out: each tick covers a fraction of the remaining distance, with a
/// minimum step so the glide always settles.
pub fn tick_glide() -> bool {
    let Some(target) = GLIDE_TARGET.with(|g| *g.borrow()) else {
        return false;
    };

    let current = scroll_offset();
    let distance = (target as i32) - (current as i32);
    if distance == 0 {
        cancel_glide();
        return false;
    }

    let step = ((distance.abs() as f32) * 0.25).ceil().max(1.0) as i32;
    let next = if distance > 0 {
        (current as i32 + step).min(target as i32)
    } else {
        (current as i32 - step).max(target as i32)
    } as u16;

    write_offset(next);
    if next == target {
        cancel_glide();
    }
    true
}

/// Reset all scroll state (for testing).
pub fn reset_scroll_state() {
    cancel_glide();
    SCROLL_Y.with(|s| s.set(0));
    MAX_SCROLL.with(|s| s.set(0));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(max: u16) {
        reset_scroll_state();
        set_max_scroll(max);
    }

    #[test]
    fn test_scroll_by_clamps() {
        setup(100);

        assert!(scroll_by(10));
        assert_eq!(scroll_offset(), 10);

        assert!(scroll_by(1000));
        assert_eq!(scroll_offset(), 100);

        // At the boundary: no movement
        assert!(!scroll_by(1));
        assert_eq!(scroll_offset(), 100);

        assert!(scroll_by(-1000));
        assert_eq!(scroll_offset(), 0);
        assert!(!scroll_by(-1));
    }

    #[test]
    fn test_set_max_reclamps_offset() {
        setup(100);
        set_scroll_offset(80);

        set_max_scroll(50);
        assert_eq!(scroll_offset(), 50);
    }

    #[test]
    fn test_top_bottom() {
        setup(60);
        scroll_to_bottom();
        assert_eq!(scroll_offset(), 60);
        scroll_to_top();
        assert_eq!(scroll_offset(), 0);
    }

    #[test]
    fn test_page_scroll_step() {
        setup(1000);
        assert!(page_scroll(30, true));
        assert_eq!(scroll_offset(), 27); // 30 * 0.9

        assert!(page_scroll(30, false));
        assert_eq!(scroll_offset(), 0);
    }

    #[test]
    fn test_glide_settles_exactly_on_target() {
        setup(200);
        glide_to(100);
        assert!(is_gliding());

        let mut ticks = 0;
        while tick_glide() {
            ticks += 1;
            assert!(ticks < 100, "glide must settle");
        }

        assert_eq!(scroll_offset(), 100);
        assert!(!is_gliding());
    }

    #[test]
    fn test_glide_upward() {
        setup(200);
        set_scroll_offset(180);
        glide_to(20);

        while tick_glide() {}
        assert_eq!(scroll_offset(), 20);
    }

    #[test]
    fn test_user_scroll_cancels_glide() {
        setup(200);
        glide_to(150);
        assert!(is_gliding());

        // The user wheels mid-glide
        scroll_by(-1);
        assert!(!is_gliding());

        // The glide no longer advances
        let here = scroll_offset();
        assert!(!tick_glide());
        assert_eq!(scroll_offset(), here);
    }

    #[test]
    fn test_glide_to_current_position_is_noop() {
        setup(200);
        set_scroll_offset(40);
        glide_to(40);
        assert!(!is_gliding());
    }

    #[test]
    fn test_glide_target_clamped_to_document() {
        setup(50);
        glide_to(500);
        while tick_glide() {}
        assert_eq!(scroll_offset(), 50);
    }
}
