//! Route state - the home page and the static project detail pages.
//!
//! Opening a project card pushes its detail route and saves the home
//! scroll offset; going back restores it. An index without a project is a
//! silent no-op, like following a dead anchor.
//!
//! The restore is deferred: the saved offset only makes sense against the
//! home document's scroll bound, which is re-established on the next
//! layout pass. The app applies [`take_pending_scroll`] after it updates
//! the bound.

use std::cell::Cell;

use spark_signals::{Signal, signal};

use crate::content;
use crate::state::scroll;

/// The current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Project(usize),
}

thread_local! {
    static ROUTE: Signal<Route> = signal(Route::Home);
    static SAVED_HOME_SCROLL: Cell<u16> = const { Cell::new(0) };
    static PENDING_SCROLL: Cell<Option<u16>> = const { Cell::new(None) };
}

/// Current route (reactive read).
pub fn route() -> Route {
    ROUTE.with(|s| s.get())
}

/// Whether a detail page is showing.
pub fn on_detail_page() -> bool {
    matches!(route(), Route::Project(_))
}

/// Open a project detail page. Ignores unknown indices.
pub fn open_project(index: usize) {
    if content::project_detail(index).is_none() {
        return;
    }
    if route() != Route::Home {
        return;
    }

    SAVED_HOME_SCROLL.with(|c| c.set(scroll::scroll_offset()));
    ROUTE.with(|s| s.set(Route::Project(index)));
    PENDING_SCROLL.with(|c| c.set(Some(0)));
}

/// Return to the home page. The saved scroll offset is applied on the next
/// layout pass via [`take_pending_scroll`].
pub fn go_home() {
    if route() == Route::Home {
        return;
    }
    ROUTE.with(|s| s.set(Route::Home));
    let saved = SAVED_HOME_SCROLL.with(|c| c.get());
    PENDING_SCROLL.with(|c| c.set(Some(saved)));
}

/// Scroll offset waiting to be applied after the next relayout, if any.
pub fn take_pending_scroll() -> Option<u16> {
    PENDING_SCROLL.with(|c| c.take())
}

/// Reset route state (for testing).
pub fn reset_route_state() {
    ROUTE.with(|s| s.set(Route::Home));
    SAVED_HOME_SCROLL.with(|c| c.set(0));
    PENDING_SCROLL.with(|c| c.set(None));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_route_state();
        scroll::reset_scroll_state();
        scroll::set_max_scroll(500);
    }

    /// What the app does after a relayout.
    fn settle(max: u16) {
        scroll::set_max_scroll(max);
        if let Some(offset) = take_pending_scroll() {
            scroll::set_scroll_offset(offset);
        }
    }

    #[test]
    fn test_initial_route_is_home() {
        setup();
        assert_eq!(route(), Route::Home);
        assert!(!on_detail_page());
    }

    #[test]
    fn test_open_and_return_restores_scroll() {
        setup();
        scroll::set_scroll_offset(120);

        open_project(1);
        assert_eq!(route(), Route::Project(1));
        settle(40); // detail page is short
        assert_eq!(scroll::scroll_offset(), 0);

        go_home();
        assert_eq!(route(), Route::Home);
        settle(500); // home bound is back before the restore applies
        assert_eq!(scroll::scroll_offset(), 120);
    }

    #[test]
    fn test_unknown_project_is_noop() {
        setup();
        open_project(9999);
        assert_eq!(route(), Route::Home);
        assert!(take_pending_scroll().is_none());
    }

    #[test]
    fn test_go_home_from_home_is_noop() {
        setup();
        scroll::set_scroll_offset(33);
        go_home();
        assert_eq!(route(), Route::Home);
        assert!(take_pending_scroll().is_none());
        assert_eq!(scroll::scroll_offset(), 33);
    }

    #[test]
    fn test_open_from_detail_page_ignored() {
        setup();
        open_project(0);
        settle(40);

        open_project(1);
        assert_eq!(route(), Route::Project(0));
    }
}
