//! App - reactive pipeline wiring and the event loop.
//!
//! The render path is purely derived-based:
//!
//! ```text
//! content + viewport + route
//!       → layout derived       (taffy → DocumentLayout)
//!       → frame derived        (compose cells + hit regions)
//!       → render effect        (diff renderer → ANSI)
//! ```
//!
//! Input events and animation ticks mutate signals; everything downstream
//! reacts. All state writes funnel through this module's handlers, so each
//! field keeps a single writer.

use std::cell::{Cell, RefCell};
use std::io::{self, IsTerminal};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use spark_signals::{Signal, derived, effect, signal};

use crate::content;
use crate::layout::{DocumentLayout, compute_document};
use crate::renderer::{DiffRenderer, FrameBuffer};
use crate::state::keyboard::KeyboardEvent;
use crate::state::mouse::{HitRegion, MouseAction, MouseButton, MouseEvent, ScrollDirection};
use crate::state::reveal::RevealPhase;
use crate::state::route::Route;
use crate::state::{focus, input, keyboard, menu, modal, mouse, reveal, route, scroll, spy};
use crate::theme;
use crate::types::{Attr, FocusId, Rect, Rgba, SectionId};
use crate::view::navbar::NAVBAR_HEIGHT;
use crate::view::{self, DrawCtx, contact_modal, navbar};

/// Event poll timeout per loop iteration (~60 Hz).
const TICK: Duration = Duration::from_millis(16);

/// Rows reserved for the status line.
const STATUS_HEIGHT: u16 = 1;

// =============================================================================
// Viewport
// =============================================================================

thread_local! {
    static VIEWPORT: Signal<(u16, u16)> = signal((80, 24));
    static PENDING_JUMP: Cell<Option<SectionId>> = const { Cell::new(None) };
}

/// Terminal size (reactive read).
pub fn viewport() -> (u16, u16) {
    VIEWPORT.with(|s| s.get())
}

/// Publish a new terminal size.
pub fn set_viewport(width: u16, height: u16) {
    VIEWPORT.with(|s| {
        if s.get() != (width, height) {
            s.set((width, height));
        }
    });
}

/// Rows available to the scrolled document.
pub fn content_height(screen_height: u16) -> u16 {
    screen_height.saturating_sub(NAVBAR_HEIGHT + STATUS_HEIGHT)
}

// =============================================================================
// Activation
// =============================================================================

/// Queue a smooth scroll to a section; applied after the next layout pass.
/// From a detail page this first routes home.
pub fn jump_to_section(target: SectionId) {
    if route::on_detail_page() {
        route::go_home();
    }
    PENDING_JUMP.with(|c| c.set(Some(target)));
}

fn take_pending_jump() -> Option<SectionId> {
    PENDING_JUMP.with(|c| c.take())
}

/// Open the contact modal, trapping focus inside it.
pub fn open_contact_modal() {
    if modal::is_open() {
        return;
    }
    menu::collapse();
    focus::save_focus();
    modal::open();
    if let Some(first) = contact_modal::focus_order().first() {
        focus::focus(*first);
    }
}

/// Close the contact modal, releasing the focus trap.
pub fn close_contact_modal() {
    if !modal::is_open() {
        return;
    }
    modal::close();
    focus::restore_focus();
}

/// Activate a focus target (Enter, or a mouse click).
///
/// External links are opaque strings: focusing one already surfaces its URL
/// in the status line, and activation deliberately does nothing more.
pub fn activate(id: FocusId) {
    match id {
        FocusId::Nav(i) => {
            menu::collapse();
            if let Some(item) = content::NAV_ITEMS.get(i) {
                jump_to_section(item.target);
            }
        }
        FocusId::HeroProjects => jump_to_section(SectionId::Projects),
        FocusId::ContactCta | FocusId::HeroContact => open_contact_modal(),
        FocusId::DrawerToggle => menu::toggle(),
        FocusId::ProjectCard(i) => {
            route::open_project(i);
            if route::on_detail_page() {
                focus::focus(FocusId::DetailBack);
            }
        }
        FocusId::ModalClose => close_contact_modal(),
        FocusId::DetailBack => route::go_home(),
        FocusId::CvLink
        | FocusId::ProjectRepo(_)
        | FocusId::ProjectDemo(_)
        | FocusId::Social(_)
        | FocusId::ModalLink(_)
        | FocusId::DetailLink(_) => {}
    }
}

/// The URL (or asset path) behind a focus target, if it is a link.
pub fn target_url(id: FocusId, current: Route) -> Option<&'static str> {
    match id {
        FocusId::CvLink => Some(content::CV_PATH),
        FocusId::ProjectCard(i) => content::PROJECTS.get(i).map(|p| p.path),
        FocusId::ProjectRepo(i) => content::PROJECTS.get(i).and_then(|p| p.repo_url),
        FocusId::ProjectDemo(i) => content::PROJECTS.get(i).and_then(|p| p.demo_url),
        FocusId::Social(i) => content::SOCIAL_LINKS.get(i).map(|l| l.url),
        FocusId::ModalLink(i) => content::CONTACT_LINKS.get(i).map(|l| l.url),
        FocusId::DetailLink(i) => match current {
            Route::Project(p) => content::project_detail(p).and_then(|d| d.links.get(i)).map(|l| l.url),
            Route::Home => None,
        },
        _ => None,
    }
}

// =============================================================================
// Focus order
// =============================================================================

/// The Tab traversal order for the current view state, document order.
pub fn focus_order(
    current: Route,
    modal_open: bool,
    narrow: bool,
    drawer_expanded: bool,
) -> Vec<FocusId> {
    if modal_open {
        return contact_modal::focus_order();
    }

    if let Route::Project(p) = current {
        let mut order = vec![FocusId::DetailBack];
        if let Some(detail) = content::project_detail(p) {
            for (i, _) in detail.links.iter().enumerate() {
                order.push(FocusId::DetailLink(i));
            }
        }
        return order;
    }

    let mut order = Vec::new();
    if narrow {
        order.push(FocusId::DrawerToggle);
        if drawer_expanded {
            for (i, _) in content::NAV_ITEMS.iter().enumerate() {
                order.push(FocusId::Nav(i));
            }
            order.push(FocusId::ContactCta);
            order.push(FocusId::CvLink);
        }
    } else {
        for (i, _) in content::NAV_ITEMS.iter().enumerate() {
            order.push(FocusId::Nav(i));
        }
        order.push(FocusId::CvLink);
        order.push(FocusId::ContactCta);
    }

    order.push(FocusId::HeroProjects);
    order.push(FocusId::HeroContact);

    for (i, project) in content::PROJECTS.iter().enumerate() {
        order.push(FocusId::ProjectCard(i));
        if project.repo_url.is_some() {
            order.push(FocusId::ProjectRepo(i));
        }
        if project.demo_url.is_some() {
            order.push(FocusId::ProjectDemo(i));
        }
    }

    for (i, _) in content::SOCIAL_LINKS.iter().enumerate() {
        order.push(FocusId::Social(i));
    }

    order
}

fn current_focus_order() -> Vec<FocusId> {
    let (w, _) = viewport();
    focus_order(
        route::route(),
        modal::is_open(),
        menu::is_narrow(w),
        menu::is_expanded(),
    )
}

// =============================================================================
// Key handling
// =============================================================================

fn handle_key(event: &KeyboardEvent, running: &Arc<AtomicBool>) -> bool {
    let (vw, vh) = viewport();

    if event.modifiers.ctrl && event.key == "c" {
        running.store(false, Ordering::SeqCst);
        return true;
    }

    // The open modal captures the keyboard
    if modal::is_open() {
        match event.key.as_str() {
            "Escape" => close_contact_modal(),
            "Tab" => focus::focus_next(&contact_modal::focus_order()),
            "BackTab" => focus::focus_previous(&contact_modal::focus_order()),
            "Enter" => {
                if let Some(id) = focus::focused() {
                    activate(id);
                }
            }
            _ => {}
        }
        return true;
    }

    match event.key.as_str() {
        "q" => {
            running.store(false, Ordering::SeqCst);
            true
        }
        "Escape" => {
            if menu::is_expanded() {
                menu::collapse();
            } else if route::on_detail_page() {
                route::go_home();
            } else {
                focus::blur();
            }
            true
        }
        "Backspace" if route::on_detail_page() => {
            route::go_home();
            true
        }
        "Tab" => {
            focus::focus_next(&current_focus_order());
            true
        }
        "BackTab" => {
            focus::focus_previous(&current_focus_order());
            true
        }
        "Enter" => {
            if let Some(id) = focus::focused() {
                activate(id);
            }
            true
        }
        "ArrowDown" | "j" => {
            scroll::scroll_by(scroll::LINE_SCROLL as i32);
            true
        }
        "ArrowUp" | "k" => {
            scroll::scroll_by(-(scroll::LINE_SCROLL as i32));
            true
        }
        "PageDown" | " " => {
            scroll::page_scroll(content_height(vh), true);
            true
        }
        "PageUp" => {
            scroll::page_scroll(content_height(vh), false);
            true
        }
        "Home" | "g" => {
            scroll::scroll_to_top();
            true
        }
        "End" | "G" => {
            scroll::scroll_to_bottom();
            true
        }
        "c" => {
            open_contact_modal();
            true
        }
        "m" if menu::is_narrow(vw) => {
            menu::toggle();
            true
        }
        "t" => {
            theme::cycle_theme();
            true
        }
        key => {
            // Digits jump to nav sections: 1 = home, 2 = projects, ...
            if let Some(i) = key
                .parse::<usize>()
                .ok()
                .filter(|n| (1..=content::NAV_ITEMS.len()).contains(n))
            {
                if let Some(item) = content::NAV_ITEMS.get(i - 1) {
                    jump_to_section(item.target);
                }
                return true;
            }
            false
        }
    }
}

// =============================================================================
// Mouse handling
// =============================================================================

/// Route a mouse event: wheel scrolls, left click focuses and activates.
pub fn handle_mouse(event: MouseEvent) {
    match event.action {
        MouseAction::Scroll => {
            if modal::is_open() {
                return; // the modal blocks page scroll
            }
            match event.scroll {
                Some(ScrollDirection::Up) => {
                    scroll::scroll_by(-(scroll::WHEEL_SCROLL as i32));
                }
                Some(ScrollDirection::Down) => {
                    scroll::scroll_by(scroll::WHEEL_SCROLL as i32);
                }
                None => {}
            }
        }
        MouseAction::Down if event.button == MouseButton::Left => {
            if modal::is_open() {
                // While open only the modal's controls are hit-testable;
                // anywhere else on the dimmed backdrop closes.
                if let Some(id) = mouse::hit_test(event.x, event.y) {
                    focus::focus(id);
                    activate(id);
                } else if !contact_modal::card_rect(viewport()).contains(event.x, event.y) {
                    close_contact_modal();
                }
            } else if let Some(id) = mouse::hit_test(event.x, event.y) {
                focus::focus(id);
                activate(id);
            } else {
                focus::blur();
            }
        }
        _ => {}
    }
}

// =============================================================================
// Frame composition
// =============================================================================

/// One composed frame: the cells plus the clickable regions they carry.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub buffer: FrameBuffer,
    pub hit_regions: Vec<HitRegion>,
}

/// Layout for the current route and viewport.
pub fn compute_layout() -> DocumentLayout {
    let (w, h) = viewport();
    let content = (w, content_height(h));
    match route::route() {
        Route::Home => compute_document(&view::home_plans(content), content),
        Route::Project(p) => compute_document(&view::detail_plans(p, content), content),
    }
}

/// Compose the full screen: document window, navbar, drawer, status line,
/// and the modal overlay.
pub fn compose_frame(doc: &DocumentLayout) -> FrameResult {
    let (w, h) = viewport();
    if w == 0 || h <= NAVBAR_HEIGHT + STATUS_HEIGHT {
        return FrameResult {
            buffer: FrameBuffer::new(w, h),
            hit_regions: Vec::new(),
        };
    }

    let content_h = content_height(h);
    let palette = theme::active_theme().palette();
    let scroll_y = scroll::scroll_offset();
    let active = spy::active_section();
    let drawer = menu::drawer();
    let narrow = menu::is_narrow(w);
    let modal_open = modal::is_open();
    let focused = focus::focused();
    let current_route = route::route();
    let _epoch = reveal::epoch(); // dependency: phase changes repaint

    // Document canvas, drawn in document space so partially scrolled-off
    // blocks need no negative coordinates.
    let canvas_h = doc.total_height.max(content_h);
    let mut canvas = FrameBuffer::with_background(w, canvas_h, palette.background);
    let mut doc_hits: Vec<HitRegion> = Vec::new();
    {
        let bounds = canvas.bounds();
        let mut ctx = DrawCtx {
            palette: &palette,
            focused,
            hits: &mut doc_hits,
            clip: bounds,
        };
        let window = Rect::new(0, scroll_y, w, content_h);
        for block in &doc.blocks {
            if block.rect.intersect(&window).is_empty() {
                continue;
            }
            if block.reveal.is_some() && reveal::phase(block.id) == RevealPhase::Hidden {
                continue;
            }
            view::draw_block(&block.kind, &mut canvas, block.rect, &mut ctx);
        }
    }

    // Blit the visible window below the navbar
    let mut screen = FrameBuffer::with_background(w, h, palette.background);
    let full = screen.bounds();
    for y in 0..content_h {
        let src_y = scroll_y.saturating_add(y);
        if src_y >= canvas.height() {
            break;
        }
        for x in 0..w {
            if let Some(cell) = canvas.get(x, src_y) {
                screen.set(x, NAVBAR_HEIGHT + y, *cell, &full);
            }
        }
    }

    // Document hit regions, translated to screen space and clipped
    let mut hits: Vec<HitRegion> = Vec::new();
    for region in doc_hits {
        let top = region.rect.y.max(scroll_y);
        let bottom = region.rect.bottom().min(scroll_y + content_h);
        if bottom <= top {
            continue;
        }
        hits.push(HitRegion {
            rect: Rect::new(
                region.rect.x,
                top - scroll_y + NAVBAR_HEIGHT,
                region.rect.width,
                bottom - top,
            ),
            target: region.target,
        });
    }

    // Fixed chrome
    {
        let mut ctx = DrawCtx {
            palette: &palette,
            focused,
            hits: &mut hits,
            clip: full,
        };
        navbar::draw(&mut screen, w, scroll_y, active, drawer, narrow, &mut ctx);
        if narrow && menu::is_expanded() && !modal_open {
            navbar::draw_drawer(&mut screen, w, active, &mut ctx);
        }

        draw_status(&mut screen, &ctx, w, h, focused, active, current_route);

        if modal_open {
            // Only the modal's controls stay clickable above the dim
            ctx.hits.clear();
            contact_modal::draw(&mut screen, (w, h), &mut ctx);
        }
    }

    FrameResult {
        buffer: screen,
        hit_regions: hits,
    }
}

fn draw_status(
    buf: &mut FrameBuffer,
    ctx: &DrawCtx,
    w: u16,
    h: u16,
    focused: Option<FocusId>,
    active: SectionId,
    current_route: Route,
) {
    use crate::layout::text_measure::{string_width, truncate_text};

    let clip = Rect::new(0, 0, w, h);
    let y = h - 1;
    buf.fill_rect(Rect::new(0, y, w, 1), ctx.palette.surface, &clip);

    let hints = if route::on_detail_page() {
        "Esc back · Tab focus · Enter open · q quit"
    } else if w < 70 {
        "Tab · Enter · c contact · q quit"
    } else {
        "Tab focus · Enter open · 1-3 jump · c contact · t theme · q quit"
    };
    buf.draw_str(
        1,
        y,
        hints,
        ctx.palette.text_muted,
        Rgba::TRANSPARENT,
        Attr::DIM,
        &clip,
    );

    // Right side: the focused link's URL, or the active anchor
    let right = match focused.and_then(|id| target_url(id, current_route)) {
        Some(url) => format!("→ {}", url),
        None => format!("#{}", active.anchor()),
    };
    let right = truncate_text(&right, w.saturating_sub(string_width(hints) + 4));
    let rw = string_width(&right);
    buf.draw_str(
        w.saturating_sub(rw + 1),
        y,
        &right,
        ctx.palette.primary,
        Rgba::TRANSPARENT,
        Attr::NONE,
        &clip,
    );
}

// =============================================================================
// Mount / event loop
// =============================================================================

/// Handle returned by [`mount`]; stops the pipeline and restores the
/// terminal on [`MountHandle::unmount`].
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    key_cleanup: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    renderer: Rc<RefCell<DiffRenderer>>,
    ticker: RefCell<Box<dyn FnMut()>>,
    restored: Cell<bool>,
}

impl MountHandle {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request shutdown (the loop exits on the next tick).
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Stop the pipeline and restore the terminal.
    pub fn unmount(mut self) -> io::Result<()> {
        self.running.store(false, Ordering::SeqCst);
        if let Some(cleanup) = self.key_cleanup.take() {
            cleanup();
        }
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        self.restored.set(true);
        let _ = input::disable_mouse();
        let _ = crossterm::terminal::disable_raw_mode();
        self.renderer.borrow_mut().exit_fullscreen()
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Best effort restore if unmount was skipped
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        if !self.restored.replace(true) {
            let _ = input::disable_mouse();
            let _ = crossterm::terminal::disable_raw_mode();
            let _ = self.renderer.borrow_mut().exit_fullscreen();
        }
    }
}

/// Mount the page: terminal setup, reactive pipeline, key bindings.
pub fn mount() -> io::Result<MountHandle> {
    if !io::stdout().is_terminal() {
        // No observation surface at all: reveal everything (fail open)
        reveal::fail_open();
    }

    if let Ok((w, h)) = crossterm::terminal::size() {
        set_viewport(w, h);
    }

    crossterm::terminal::enable_raw_mode()?;
    let renderer = Rc::new(RefCell::new(DiffRenderer::new()));
    renderer.borrow_mut().enter_fullscreen()?;
    input::enable_mouse()?;

    let running = Arc::new(AtomicBool::new(true));

    // Reactive pipeline
    let layout_derived = derived(compute_layout);
    let fb_layout = layout_derived.clone();
    let fb_derived = derived(move || compose_frame(&fb_layout.get()));

    let running_for_effect = running.clone();
    let renderer_for_effect = renderer.clone();
    let stop_effect = effect(move || {
        if !running_for_effect.load(Ordering::SeqCst) {
            return;
        }
        let result = fb_derived.get();
        mouse::set_hit_regions(result.hit_regions.clone());
        let _ = renderer_for_effect.borrow_mut().render(&result.buffer);
    });

    // Key bindings
    let running_for_keys = running.clone();
    let key_cleanup = keyboard::on(move |event| handle_key(event, &running_for_keys));

    // Per-tick synchronization: animations, scroll bounds, scroll-spy,
    // reveal observation, pending route/section jumps.
    let mut last_route = route::route();
    let ticker = Box::new(move || {
        scroll::tick_glide();
        reveal::tick();

        if route::route() != last_route {
            // A new page mounts fresh blocks; entrance animations replay
            last_route = route::route();
            reveal::clear_latches();
            focus::retain(&current_focus_order());
        }

        let (_, vh) = viewport();
        let content_h = content_height(vh);
        let doc = layout_derived.get();

        scroll::set_max_scroll(doc.total_height.saturating_sub(content_h));
        if let Some(offset) = route::take_pending_scroll() {
            scroll::set_scroll_offset(offset);
        }
        if let Some(section) = take_pending_jump() {
            if let Some(top) = doc.section_top(section) {
                scroll::glide_to(top);
            }
        }

        let offset = scroll::scroll_offset();
        spy::update(&doc.sections, offset, content_h);
        reveal::observe(&doc, offset, content_h);
    });

    Ok(MountHandle {
        stop_effect: Some(Box::new(stop_effect)),
        key_cleanup: Some(Box::new(key_cleanup)),
        running,
        renderer,
        ticker: RefCell::new(ticker),
        restored: Cell::new(false),
    })
}

/// Run the event loop once. Returns `Ok(false)` when the app should stop.
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if let Some(event) = input::poll_event(TICK)? {
        match event {
            input::InputEvent::Key(key) => {
                keyboard::dispatch(key);
            }
            input::InputEvent::Mouse(mouse_event) => handle_mouse(mouse_event),
            input::InputEvent::Resize(w, h) => set_viewport(w, h),
            input::InputEvent::None => {}
        }
    }

    (handle.ticker.borrow_mut())();

    Ok(handle.is_running())
}

/// Run the event loop until stopped (q, Ctrl+C, or [`MountHandle::stop`]).
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
