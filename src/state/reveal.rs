//! One-shot reveal latches for entrance animations.
//!
//! Every observed block owns a latch. The first time the block's rectangle
//! overlaps the visible window by at least its configured threshold, the
//! latch is set - permanently. Scrolling away and back never re-hides a
//! block. A per-block stagger delay (cosmetic only) holds the visual
//! transition for a few ticks after the latch fires.
//!
//! If observation is unavailable the whole registry fails open: everything
//! renders revealed, nothing is ever stuck hidden.
//!
//! Reactivity: the registry is plain state; an epoch signal bumps whenever
//! any visible phase changes so the frame derived re-runs.

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{Signal, signal};

use crate::layout::DocumentLayout;
use crate::types::BlockId;

// =============================================================================
// TYPES
// =============================================================================

/// Visual reveal state of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Copy)]
struct Latch {
    /// Monotonic: set on first intersection, never cleared.
    seen: bool,
    /// Remaining stagger ticks before the visual transition.
    countdown: u8,
    phase: RevealPhase,
}

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static LATCHES: RefCell<HashMap<BlockId, Latch>> = RefCell::new(HashMap::new());
    static FAIL_OPEN: RefCell<bool> = const { RefCell::new(false) };
    static EPOCH: Signal<u64> = signal(0);
}

fn bump_epoch() {
    EPOCH.with(|s| {
        let next = s.get().wrapping_add(1);
        s.set(next);
    });
}

/// Reactive read of the reveal epoch. The frame derived reads this so phase
/// changes invalidate it.
pub fn epoch() -> u64 {
    EPOCH.with(|s| s.get())
}

/// Disable observation and render everything revealed (fail open).
pub fn fail_open() {
    FAIL_OPEN.with(|f| *f.borrow_mut() = true);
    bump_epoch();
}

/// Whether the registry is failing open.
pub fn is_fail_open() -> bool {
    FAIL_OPEN.with(|f| *f.borrow())
}

// =============================================================================
// OBSERVATION
// =============================================================================

/// Observe the visible window and latch every block that intersects it.
///
/// `window_top..window_top + window_height` is the visible document range.
/// A block latches when its visible fraction reaches its threshold. Already
/// latched blocks are untouched - the latch is one-shot.
pub fn observe(layout: &DocumentLayout, window_top: u16, window_height: u16) {
    if is_fail_open() {
        return;
    }

    let window_bottom = window_top as u32 + window_height as u32;
    let mut changed = false;

    LATCHES.with(|latches| {
        let mut latches = latches.borrow_mut();

        for block in &layout.blocks {
            let Some(spec) = block.reveal else {
                continue;
            };

            let entry = latches.entry(block.id).or_insert(Latch {
                seen: false,
                countdown: spec.delay,
                phase: RevealPhase::Hidden,
            });
            if entry.seen {
                continue;
            }

            let top = block.rect.y as u32;
            let bottom = top + block.rect.height.max(1) as u32;
            let overlap = bottom.min(window_bottom).saturating_sub(top.max(window_top as u32));
            let fraction = overlap as f32 / block.rect.height.max(1) as f32;

            if fraction >= spec.threshold {
                entry.seen = true;
                if entry.countdown == 0 {
                    entry.phase = RevealPhase::Revealed;
                }
                changed = true;
            }
        }
    });

    if changed {
        bump_epoch();
    }
}

/// Advance stagger countdowns by one tick. Returns `true` if any block
/// became visible this tick.
pub fn tick() -> bool {
    if is_fail_open() {
        return false;
    }

    let mut changed = false;
    LATCHES.with(|latches| {
        for latch in latches.borrow_mut().values_mut() {
            if latch.seen && latch.phase == RevealPhase::Hidden {
                if latch.countdown > 0 {
                    latch.countdown -= 1;
                }
                if latch.countdown == 0 {
                    latch.phase = RevealPhase::Revealed;
                    changed = true;
                }
            }
        }
    });

    if changed {
        bump_epoch();
    }
    changed
}

// =============================================================================
// QUERIES
// =============================================================================

/// Visual phase of a block. Unobserved blocks are hidden unless the
/// registry fails open.
pub fn phase(id: BlockId) -> RevealPhase {
    if is_fail_open() {
        return RevealPhase::Revealed;
    }
    LATCHES.with(|latches| {
        latches
            .borrow()
            .get(&id)
            .map(|l| l.phase)
            .unwrap_or(RevealPhase::Hidden)
    })
}

/// Whether a block's latch has fired (monotonic).
pub fn is_seen(id: BlockId) -> bool {
    if is_fail_open() {
        return true;
    }
    LATCHES.with(|latches| latches.borrow().get(&id).map(|l| l.seen).unwrap_or(false))
}

/// Drop every latch but keep the fail-open flag.
///
/// Used on route changes: a new page mounts fresh blocks, and its
/// entrance animations replay.
pub fn clear_latches() {
    let had_any = LATCHES.with(|l| {
        let mut latches = l.borrow_mut();
        let had_any = !latches.is_empty();
        latches.clear();
        had_any
    });
    if had_any {
        bump_epoch();
    }
}

/// Reset all reveal state (for testing).
pub fn reset_reveal_state() {
    LATCHES.with(|l| l.borrow_mut().clear());
    FAIL_OPEN.with(|f| *f.borrow_mut() = false);
    EPOCH.with(|s| s.set(0));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LaidBlock, RevealSpec};
    use crate::types::{Rect, SectionId};
    use crate::view::BlockKind;

    fn layout_with(blocks: Vec<(BlockId, Rect, RevealSpec)>) -> DocumentLayout {
        DocumentLayout {
            width: 80,
            blocks: blocks
                .into_iter()
                .map(|(id, rect, spec)| LaidBlock {
                    id,
                    kind: BlockKind::SectionHeader {
                        title: "t",
                        subtitle: "",
                    },
                    rect,
                    reveal: Some(spec),
                })
                .collect(),
            sections: Vec::new(),
            total_height: 200,
        }
    }

    const BLOCK: BlockId = (SectionId::Projects, 0);

    fn setup() {
        reset_reveal_state();
    }

    #[test]
    fn test_unobserved_block_is_hidden() {
        setup();
        assert_eq!(phase(BLOCK), RevealPhase::Hidden);
        assert!(!is_seen(BLOCK));
    }

    #[test]
    fn test_latch_fires_on_intersection() {
        setup();
        let layout = layout_with(vec![(
            BLOCK,
            Rect::new(0, 50, 40, 10),
            RevealSpec::DEFAULT,
        )]);

        // Window well above the block: nothing
        observe(&layout, 0, 30);
        assert!(!is_seen(BLOCK));

        // Window overlapping the block
        observe(&layout, 45, 30);
        assert!(is_seen(BLOCK));
        assert_eq!(phase(BLOCK), RevealPhase::Revealed);
    }

    #[test]
    fn test_threshold_fraction_respected() {
        setup();
        let spec = RevealSpec {
            threshold: 0.5,
            delay: 0,
        };
        let layout = layout_with(vec![(BLOCK, Rect::new(0, 30, 40, 10), spec)]);

        // Only 2 of 10 rows visible: 20% < 50%
        observe(&layout, 0, 32);
        assert!(!is_seen(BLOCK));

        // 6 of 10 rows visible: 60% >= 50%
        observe(&layout, 0, 36);
        assert!(is_seen(BLOCK));
    }

    #[test]
    fn test_latch_is_monotonic() {
        setup();
        let layout = layout_with(vec![(
            BLOCK,
            Rect::new(0, 50, 40, 10),
            RevealSpec::DEFAULT,
        )]);

        observe(&layout, 45, 30);
        assert!(is_seen(BLOCK));

        // Scroll far away and back - still revealed
        observe(&layout, 0, 30);
        observe(&layout, 150, 30);
        for _ in 0..10 {
            tick();
        }
        assert!(is_seen(BLOCK));
        assert_eq!(phase(BLOCK), RevealPhase::Revealed);
    }

    #[test]
    fn test_stagger_delay_holds_visual_phase() {
        setup();
        let layout = layout_with(vec![(
            BLOCK,
            Rect::new(0, 0, 40, 10),
            RevealSpec::delayed(3),
        )]);

        observe(&layout, 0, 30);
        assert!(is_seen(BLOCK)); // latched immediately
        assert_eq!(phase(BLOCK), RevealPhase::Hidden); // but not yet visible

        assert!(!tick()); // 2 remaining
        assert!(!tick()); // 1 remaining
        assert!(tick()); // 0 - becomes visible
        assert_eq!(phase(BLOCK), RevealPhase::Revealed);
    }

    #[test]
    fn test_independent_blocks_latch_separately() {
        setup();
        let other: BlockId = (SectionId::Skills, 1);
        let layout = layout_with(vec![
            (BLOCK, Rect::new(0, 10, 40, 10), RevealSpec::DEFAULT),
            (other, Rect::new(0, 120, 40, 10), RevealSpec::DEFAULT),
        ]);

        observe(&layout, 0, 30);
        assert!(is_seen(BLOCK));
        assert!(!is_seen(other));
    }

    #[test]
    fn test_fail_open_reveals_everything() {
        setup();
        fail_open();

        assert_eq!(phase(BLOCK), RevealPhase::Revealed);
        assert!(is_seen(BLOCK));

        // Observation becomes a no-op, not an error
        let layout = layout_with(vec![(
            BLOCK,
            Rect::new(0, 50, 40, 10),
            RevealSpec::DEFAULT,
        )]);
        observe(&layout, 0, 10);
        assert_eq!(phase(BLOCK), RevealPhase::Revealed);
    }

    #[test]
    fn test_clear_latches_keeps_fail_open() {
        setup();
        let layout = layout_with(vec![(
            BLOCK,
            Rect::new(0, 0, 40, 10),
            RevealSpec::DEFAULT,
        )]);
        observe(&layout, 0, 30);
        assert!(is_seen(BLOCK));

        clear_latches();
        assert!(!is_seen(BLOCK)); // a fresh page starts hidden again

        fail_open();
        clear_latches();
        assert!(is_seen(BLOCK)); // fail-open survives the clear
    }

    #[test]
    fn test_epoch_bumps_on_change_only() {
        setup();
        let layout = layout_with(vec![(
            BLOCK,
            Rect::new(0, 50, 40, 10),
            RevealSpec::DEFAULT,
        )]);

        let before = epoch();
        observe(&layout, 0, 20); // no intersection
        assert_eq!(epoch(), before);

        observe(&layout, 45, 30); // latch fires
        assert!(epoch() > before);

        let after = epoch();
        observe(&layout, 45, 30); // already latched: no change
        assert_eq!(epoch(), after);
    }
}
