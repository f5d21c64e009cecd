//! Contact modal - the overlay card with contact links.
//!
//! While open it paints above everything: the page behind is dimmed, the
//! backdrop intercepts clicks, and the card carries the close control and
//! the contact links. Focus is trapped to these controls by the app.

use crate::content;
use crate::layout::text_measure::{string_width, truncate_text};
use crate::renderer::FrameBuffer;
use crate::types::{Attr, BorderStyle, FocusId, Rect, Rgba};

use super::DrawCtx;

const TITLE: &str = "Contact";
const HINT: &str = "Esc to close";

/// Rows per link entry: label + address.
const LINK_ROWS: u16 = 2;

/// The centered card rectangle for a given screen size.
pub fn card_rect(screen: (u16, u16)) -> Rect {
    let (sw, sh) = screen;
    let width = sw.saturating_sub(4).min(46);
    let height = 5 + content::CONTACT_LINKS.len() as u16 * (LINK_ROWS + 1);
    Rect::new(
        sw.saturating_sub(width) / 2,
        sh.saturating_sub(height) / 2,
        width,
        height,
    )
}

/// Dim the page and draw the card. Hit regions: the card's controls on
/// top; backdrop handling belongs to the app (any click outside the card
/// closes).
pub fn draw(buf: &mut FrameBuffer, screen: (u16, u16), ctx: &mut DrawCtx) {
    let clip = ctx.clip;
    let full = Rect::new(0, 0, screen.0, screen.1);
    buf.dim_rect(full, Rgba::new(0, 0, 0, 140), &clip);

    let rect = card_rect(screen);
    buf.fill_rect(rect, ctx.palette.overlay, &clip);
    buf.draw_border(rect, BorderStyle::Rounded, ctx.palette.border_focus, &clip);

    let inner_x = rect.x + 2;
    let inner = rect.width.saturating_sub(4);

    buf.draw_str(
        inner_x,
        rect.y + 1,
        TITLE,
        ctx.palette.text_bright,
        Rgba::TRANSPARENT,
        Attr::BOLD,
        &clip,
    );

    // Close control, top right
    let close_id = FocusId::ModalClose;
    let close_x = rect.right().saturating_sub(5);
    buf.draw_str(
        close_x,
        rect.y + 1,
        "[×]",
        ctx.palette.text_muted,
        Rgba::TRANSPARENT,
        ctx.link_attrs(close_id),
        &clip,
    );
    ctx.hit(Rect::new(close_x, rect.y + 1, 3, 1), close_id);

    let mut y = rect.y + 3;
    for (i, link) in content::CONTACT_LINKS.iter().enumerate() {
        let id = FocusId::ModalLink(i);
        buf.draw_str(
            inner_x,
            y,
            &format!("● {}", link.label),
            ctx.palette.primary,
            Rgba::TRANSPARENT,
            ctx.link_attrs(id),
            &clip,
        );
        buf.draw_str(
            inner_x + 2,
            y + 1,
            &truncate_text(link.url, inner.saturating_sub(2)),
            ctx.palette.text_muted,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        ctx.hit(Rect::new(inner_x, y, inner, LINK_ROWS), id);
        y += LINK_ROWS + 1;
    }

    let hint_w = string_width(HINT);
    buf.draw_str(
        rect.x + rect.width.saturating_sub(hint_w) / 2,
        rect.bottom().saturating_sub(2),
        HINT,
        ctx.palette.text_muted,
        Rgba::TRANSPARENT,
        Attr::DIM,
        &clip,
    );
}

/// Focus order inside the modal (the trap's target list).
pub fn focus_order() -> Vec<FocusId> {
    let mut order: Vec<FocusId> = (0..content::CONTACT_LINKS.len())
        .map(FocusId::ModalLink)
        .collect();
    order.push(FocusId::ModalClose);
    order
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::mouse::HitRegion;
    use crate::theme;

    #[test]
    fn test_card_is_centered_and_bounded() {
        let rect = card_rect((100, 40));
        assert!(rect.width <= 46);
        assert_eq!(rect.x, (100 - rect.width) / 2);

        let tiny = card_rect((20, 10));
        assert!(tiny.width <= 16);
    }

    #[test]
    fn test_draw_registers_modal_controls() {
        let palette = theme::presets::midnight().palette();
        let mut buf = FrameBuffer::new(100, 40);
        let mut hits: Vec<HitRegion> = Vec::new();
        let mut ctx = DrawCtx {
            palette: &palette,
            focused: None,
            hits: &mut hits,
            clip: Rect::new(0, 0, 100, 40),
        };

        draw(&mut buf, (100, 40), &mut ctx);

        let targets: Vec<_> = hits.iter().map(|h| h.target).collect();
        assert!(targets.contains(&FocusId::ModalClose));
        for (i, _) in content::CONTACT_LINKS.iter().enumerate() {
            assert!(targets.contains(&FocusId::ModalLink(i)));
        }
    }

    #[test]
    fn test_focus_order_ends_with_close() {
        let order = focus_order();
        assert_eq!(order.last(), Some(&FocusId::ModalClose));
        assert_eq!(order.len(), content::CONTACT_LINKS.len() + 1);
    }
}
