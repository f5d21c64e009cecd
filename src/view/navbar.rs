//! Fixed navigation bar and the narrow-mode drawer.
//!
//! The bar paints above the document. At the top of the page it sits on
//! the page background; once scrolled it picks up the surface color, so
//! the bar reads as glass sliding over the content.

use crate::content;
use crate::layout::text_measure::string_width;
use crate::renderer::FrameBuffer;
use crate::state::menu::DrawerState;
use crate::types::{Attr, FocusId, Rect, Rgba, SectionId};

use super::DrawCtx;

/// Rows the fixed bar occupies.
pub const NAVBAR_HEIGHT: u16 = 2;

pub const CV_LABEL: &str = "⎙ CV";
pub const CONTACT_LABEL: &str = "✉ Contact";
pub const MENU_LABEL: &str = "≡ Menu";

/// Scroll depth over which the bar background fades in.
const GLASS_FADE_ROWS: u16 = 12;

/// Bar background as a function of scroll depth.
fn bar_background(palette: &crate::theme::Palette, scroll: u16) -> Rgba {
    let t = scroll.min(GLASS_FADE_ROWS) as f32 / GLASS_FADE_ROWS as f32;
    Rgba::lerp(palette.background, palette.surface, t)
}

// =============================================================================
// Bar
// =============================================================================

/// Draw the fixed bar across the top of the screen.
#[allow(clippy::too_many_arguments)]
pub fn draw(
    buf: &mut FrameBuffer,
    width: u16,
    scroll: u16,
    active: SectionId,
    drawer: DrawerState,
    narrow: bool,
    ctx: &mut DrawCtx,
) {
    let clip = ctx.clip;
    let bg = bar_background(ctx.palette, scroll);
    buf.fill_rect(Rect::new(0, 0, width, 1), bg, &clip);
    buf.draw_hline(0, 1, width, '─', ctx.palette.border, &clip);

    // Logo
    buf.draw_str(
        1,
        0,
        content::LOGO,
        ctx.palette.text_bright,
        Rgba::TRANSPARENT,
        Attr::BOLD,
        &clip,
    );

    if narrow {
        let toggle = if drawer == DrawerState::Expanded {
            "× Close"
        } else {
            MENU_LABEL
        };
        let x = width.saturating_sub(string_width(toggle) + 1);
        let id = FocusId::DrawerToggle;
        buf.draw_str(
            x,
            0,
            toggle,
            ctx.palette.primary,
            Rgba::TRANSPARENT,
            ctx.link_attrs(id),
            &clip,
        );
        ctx.hit(Rect::new(x, 0, string_width(toggle), 1), id);
        return;
    }

    // Nav items
    let mut x = 2 + string_width(content::LOGO) + 2;
    for (i, item) in content::NAV_ITEMS.iter().enumerate() {
        let id = FocusId::Nav(i);
        let is_active = item.target == active;
        let label = format!(" {} ", item.label);
        let mut attrs = if is_active {
            Attr::BOLD | Attr::UNDERLINE
        } else {
            Attr::NONE
        };
        if ctx.focused == Some(id) {
            attrs |= Attr::INVERSE;
        }
        buf.draw_str(
            x,
            0,
            &label,
            if is_active {
                ctx.palette.primary
            } else {
                ctx.palette.text_muted
            },
            Rgba::TRANSPARENT,
            attrs,
            &clip,
        );
        ctx.hit(Rect::new(x, 0, string_width(&label), 1), id);
        x += string_width(&label) + 1;
    }

    // Right-aligned calls to action
    let contact_w = string_width(CONTACT_LABEL);
    let cv_w = string_width(CV_LABEL);
    let contact_x = width.saturating_sub(contact_w + 2);
    let cv_x = contact_x.saturating_sub(cv_w + 3);

    buf.draw_str(
        cv_x,
        0,
        CV_LABEL,
        ctx.palette.text_muted,
        Rgba::TRANSPARENT,
        ctx.link_attrs(FocusId::CvLink),
        &clip,
    );
    ctx.hit(Rect::new(cv_x, 0, cv_w, 1), FocusId::CvLink);

    buf.draw_str(
        contact_x,
        0,
        CONTACT_LABEL,
        ctx.palette.primary,
        Rgba::TRANSPARENT,
        ctx.link_attrs(FocusId::ContactCta) | Attr::BOLD,
        &clip,
    );
    ctx.hit(Rect::new(contact_x, 0, contact_w, 1), FocusId::ContactCta);
}

// =============================================================================
// Drawer
// =============================================================================

/// Rows the expanded drawer occupies below the bar.
pub fn drawer_height() -> u16 {
    content::NAV_ITEMS.len() as u16 + 3
}

/// Draw the expanded drawer panel under the bar.
pub fn draw_drawer(buf: &mut FrameBuffer, width: u16, active: SectionId, ctx: &mut DrawCtx) {
    let clip = ctx.clip;
    let height = drawer_height();
    let rect = Rect::new(0, NAVBAR_HEIGHT, width, height);
    buf.fill_rect(rect, ctx.palette.surface, &clip);

    let mut y = NAVBAR_HEIGHT;
    for (i, item) in content::NAV_ITEMS.iter().enumerate() {
        let id = FocusId::Nav(i);
        let is_active = item.target == active;
        let marker = if is_active { "▎" } else { " " };
        let label = format!("{} {}", marker, item.label);
        let mut attrs = if is_active { Attr::BOLD } else { Attr::NONE };
        if ctx.focused == Some(id) {
            attrs |= Attr::INVERSE;
        }
        buf.draw_str(
            2,
            y,
            &label,
            if is_active {
                ctx.palette.primary
            } else {
                ctx.palette.text
            },
            Rgba::TRANSPARENT,
            attrs,
            &clip,
        );
        ctx.hit(Rect::new(0, y, width, 1), id);
        y += 1;
    }

    buf.draw_str(
        2,
        y,
        CONTACT_LABEL,
        ctx.palette.primary,
        Rgba::TRANSPARENT,
        ctx.link_attrs(FocusId::ContactCta),
        &clip,
    );
    ctx.hit(
        Rect::new(0, y, width, 1),
        FocusId::ContactCta,
    );
    y += 1;

    buf.draw_str(
        2,
        y,
        CV_LABEL,
        ctx.palette.text_muted,
        Rgba::TRANSPARENT,
        ctx.link_attrs(FocusId::CvLink),
        &clip,
    );
    ctx.hit(Rect::new(0, y, width, 1), FocusId::CvLink);
    y += 1;

    buf.draw_hline(0, y, width, '─', ctx.palette.border, &clip);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::mouse::HitRegion;
    use crate::theme;

    fn draw_into(width: u16, narrow: bool, drawer: DrawerState) -> Vec<HitRegion> {
        let palette = theme::presets::paper().palette();
        let mut buf = FrameBuffer::new(width, 12);
        let mut hits: Vec<HitRegion> = Vec::new();
        let mut ctx = DrawCtx {
            palette: &palette,
            focused: None,
            hits: &mut hits,
            clip: Rect::new(0, 0, width, 12),
        };
        draw(
            &mut buf,
            width,
            0,
            SectionId::Home,
            drawer,
            narrow,
            &mut ctx,
        );
        if drawer == DrawerState::Expanded {
            draw_drawer(&mut buf, width, SectionId::Home, &mut ctx);
        }
        hits
    }

    #[test]
    fn test_wide_bar_exposes_all_targets() {
        let hits = draw_into(100, false, DrawerState::Collapsed);
        let targets: Vec<_> = hits.iter().map(|h| h.target).collect();

        for (i, _) in content::NAV_ITEMS.iter().enumerate() {
            assert!(targets.contains(&FocusId::Nav(i)));
        }
        assert!(targets.contains(&FocusId::CvLink));
        assert!(targets.contains(&FocusId::ContactCta));
        assert!(!targets.contains(&FocusId::DrawerToggle));
    }

    #[test]
    fn test_narrow_bar_collapses_to_toggle() {
        let hits = draw_into(50, true, DrawerState::Collapsed);
        let targets: Vec<_> = hits.iter().map(|h| h.target).collect();

        assert!(targets.contains(&FocusId::DrawerToggle));
        assert!(!targets.contains(&FocusId::Nav(0)));
    }

    #[test]
    fn test_expanded_drawer_lists_nav_items() {
        let hits = draw_into(50, true, DrawerState::Expanded);
        let targets: Vec<_> = hits.iter().map(|h| h.target).collect();

        for (i, _) in content::NAV_ITEMS.iter().enumerate() {
            assert!(targets.contains(&FocusId::Nav(i)));
        }
        assert!(targets.contains(&FocusId::ContactCta));
    }

    #[test]
    fn test_bar_background_fades_with_scroll() {
        let palette = theme::presets::paper().palette();
        let at_top = bar_background(&palette, 0);
        let scrolled = bar_background(&palette, 50);
        assert_eq!(at_top, palette.background);
        assert_eq!(scrolled, palette.surface);
    }
}
