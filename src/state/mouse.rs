//! Mouse state - event types and hit regions.
//!
//! The frame composer records a hit region for every activatable element it
//! draws; dispatch resolves a click to the topmost region under the cursor.
//! The page has a dozen targets, so regions are a list scanned back to
//! front rather than a full per-cell grid.

use std::cell::RefCell;

use crate::types::{FocusId, Rect};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Up,
    Move,
    Scroll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Mouse event in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub button: MouseButton,
    pub x: u16,
    pub y: u16,
    pub scroll: Option<ScrollDirection>,
}

impl MouseEvent {
    pub fn down(button: MouseButton, x: u16, y: u16) -> Self {
        Self {
            action: MouseAction::Down,
            button,
            x,
            y,
            scroll: None,
        }
    }

    pub fn scroll(direction: ScrollDirection, x: u16, y: u16) -> Self {
        Self {
            action: MouseAction::Scroll,
            button: MouseButton::None,
            x,
            y,
            scroll: Some(direction),
        }
    }
}

/// A clickable screen region, produced while composing a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitRegion {
    pub rect: Rect,
    pub target: FocusId,
}

// =============================================================================
// HIT REGION STATE
// =============================================================================

thread_local! {
    static HIT_REGIONS: RefCell<Vec<HitRegion>> = const { RefCell::new(Vec::new()) };
}

/// Replace the hit regions with the latest frame's regions.
///
/// Later entries paint above earlier ones, so hit testing scans in reverse.
pub fn set_hit_regions(regions: Vec<HitRegion>) {
    HIT_REGIONS.with(|r| *r.borrow_mut() = regions);
}

/// Find the topmost target under a point.
pub fn hit_test(x: u16, y: u16) -> Option<FocusId> {
    HIT_REGIONS.with(|r| {
        r.borrow()
            .iter()
            .rev()
            .find(|region| region.rect.contains(x, y))
            .map(|region| region.target)
    })
}

/// Clear all hit regions (for testing).
pub fn reset_mouse_state() {
    HIT_REGIONS.with(|r| r.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_mouse_state();
    }

    #[test]
    fn test_hit_test_empty() {
        setup();
        assert_eq!(hit_test(0, 0), None);
    }

    #[test]
    fn test_hit_test_finds_region() {
        setup();
        set_hit_regions(vec![HitRegion {
            rect: Rect::new(2, 2, 4, 2),
            target: FocusId::Nav(1),
        }]);

        assert_eq!(hit_test(3, 3), Some(FocusId::Nav(1)));
        assert_eq!(hit_test(0, 0), None);
        assert_eq!(hit_test(6, 2), None); // right edge is exclusive
    }

    #[test]
    fn test_topmost_region_wins() {
        setup();
        set_hit_regions(vec![
            HitRegion {
                rect: Rect::new(0, 0, 10, 10),
                target: FocusId::ProjectCard(0),
            },
            HitRegion {
                rect: Rect::new(2, 2, 3, 1),
                target: FocusId::ProjectRepo(0),
            },
        ]);

        // Inside both: the later (topmost) region wins
        assert_eq!(hit_test(3, 2), Some(FocusId::ProjectRepo(0)));
        // Only inside the card
        assert_eq!(hit_test(8, 8), Some(FocusId::ProjectCard(0)));
    }

    #[test]
    fn test_set_replaces_previous_frame() {
        setup();
        set_hit_regions(vec![HitRegion {
            rect: Rect::new(0, 0, 2, 2),
            target: FocusId::CvLink,
        }]);
        set_hit_regions(vec![]);
        assert_eq!(hit_test(1, 1), None);
    }
}
