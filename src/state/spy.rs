//! Scroll-spy - the active-section tracker.
//!
//! The probe point sits half a viewport below the scroll offset; scanning
//! sections in document order, the last one whose top has been passed wins.
//! This is a "most-recently-passed-threshold" policy, not "most visible
//! area". The boundary is inclusive: a section whose top equals the probe
//! point is selected.

use spark_signals::{Signal, signal};

use crate::layout::SectionExtent;
use crate::types::SectionId;

thread_local! {
    static ACTIVE_SECTION: Signal<SectionId> = signal(SectionId::Home);
}

/// The currently active section (reactive read).
pub fn active_section() -> SectionId {
    ACTIVE_SECTION.with(|s| s.get())
}

/// Pure computation: which section is active at a given scroll offset.
///
/// Sections are scanned in slice order (document order); entries missing
/// from the layout are simply absent from the slice, so unknown ids are
/// skipped by construction. An empty slice falls back to the home section.
pub fn section_at(sections: &[SectionExtent], scroll: u16, viewport_height: u16) -> SectionId {
    let probe = scroll as u32 + viewport_height as u32 / 2;

    let mut current = sections.first().map(|s| s.id).unwrap_or(SectionId::Home);
    for section in sections {
        if section.top as u32 <= probe {
            current = section.id;
        }
    }
    current
}

/// Recompute and publish the active section. Returns the active id.
pub fn update(sections: &[SectionExtent], scroll: u16, viewport_height: u16) -> SectionId {
    let next = section_at(sections, scroll, viewport_height);
    ACTIVE_SECTION.with(|s| {
        if s.get() != next {
            s.set(next);
        }
    });
    next
}

/// Reset to the initial section (for testing).
pub fn reset_spy_state() {
    ACTIVE_SECTION.with(|s| s.set(SectionId::Home));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Three sections at tops 0 / 40 / 80 - the spec's example scaled from
    /// pixels to cells (viewport 30, probe = scroll + 15).
    fn sections() -> Vec<SectionExtent> {
        vec![
            SectionExtent {
                id: SectionId::Home,
                top: 0,
                height: 40,
            },
            SectionExtent {
                id: SectionId::Projects,
                top: 40,
                height: 40,
            },
            SectionExtent {
                id: SectionId::Education,
                top: 80,
                height: 40,
            },
        ]
    }

    #[test]
    fn test_zero_scroll_is_home() {
        assert_eq!(section_at(&sections(), 0, 30), SectionId::Home);
    }

    #[test]
    fn test_empty_layout_falls_back_to_home() {
        assert_eq!(section_at(&[], 500, 30), SectionId::Home);
    }

    #[test]
    fn test_boundary_both_ways() {
        let s = sections();
        // probe = 24 + 15 = 39 < 40: still home
        assert_eq!(section_at(&s, 24, 30), SectionId::Home);
        // probe = 25 + 15 = 40 == top of projects: inclusive boundary selects it
        assert_eq!(section_at(&s, 25, 30), SectionId::Projects);
    }

    #[test]
    fn test_last_passed_section_wins() {
        let s = sections();
        // probe = 100 + 15: past every top - bottom-most wins
        assert_eq!(section_at(&s, 100, 30), SectionId::Education);
    }

    #[test]
    fn test_monotonic_step_function_of_scroll() {
        let s = sections();
        let order = |id: SectionId| s.iter().position(|e| e.id == id).unwrap_or(0);

        let mut last = 0;
        for scroll in 0..200u16 {
            let here = order(section_at(&s, scroll, 30));
            assert!(
                here >= last,
                "active section moved backwards at scroll {}",
                scroll
            );
            last = here;
        }
    }

    #[test]
    fn test_exactly_one_known_id_for_any_offset() {
        let s = sections();
        for scroll in (0..300u16).step_by(7) {
            let id = section_at(&s, scroll, 30);
            assert!(s.iter().any(|e| e.id == id));
        }
    }

    #[test]
    fn test_update_publishes_signal() {
        reset_spy_state();
        let s = sections();

        assert_eq!(update(&s, 0, 30), SectionId::Home);
        assert_eq!(active_section(), SectionId::Home);

        update(&s, 120, 30);
        assert_eq!(active_section(), SectionId::Education);
    }
}
