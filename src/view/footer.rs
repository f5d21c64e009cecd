//! Footer - the closing contact band with social links.

use crate::content;
use crate::layout::text_measure::string_width;
use crate::layout::{Block, RevealSpec, Row, SectionPlan};
use crate::renderer::FrameBuffer;
use crate::types::{Attr, FocusId, Rect, Rgba, SectionId};

use super::{BlockKind, DrawCtx};

const TAGLINE: &str = "Let's build something with data.";
const COPYRIGHT: &str = "© José Arbeláez - built from hand-written content, no cookies, no tracking";

const BAND_HEIGHT: u16 = 7;

// =============================================================================
// Plan
// =============================================================================

pub fn plan(cw: u16) -> SectionPlan {
    SectionPlan {
        id: SectionId::Footer,
        padding_top: 1,
        padding_bottom: 0,
        gap: 0,
        fill_viewport: false,
        rows: vec![Row::single(Block {
            kind: BlockKind::FooterBand,
            width: cw,
            height: BAND_HEIGHT,
            reveal: Some(RevealSpec::DEFAULT),
        })],
    }
}

// =============================================================================
// Draw
// =============================================================================

pub fn draw(buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    let clip = ctx.clip;
    // Near-black closing band; ANSI themes fall back to
    // palette black since ANSI colors cannot be dimmed.
    let bright = ctx.palette.text_bright;
    let band_bg = if bright.is_ansi() || bright.is_terminal_default() {
        Rgba::ansi(0)
    } else {
        bright.dim(0.12)
    };

    buf.fill_rect(rect, band_bg, &clip);

    let center = |w: u16| rect.x + rect.width.saturating_sub(w) / 2;

    buf.draw_str(
        center(string_width(TAGLINE)),
        rect.y + 1,
        TAGLINE,
        ctx.palette.text_bright,
        Rgba::TRANSPARENT,
        Attr::BOLD,
        &clip,
    );

    // Social links, centered in one row
    let labels: Vec<String> = content::SOCIAL_LINKS
        .iter()
        .map(|link| format!("● {}", link.label))
        .collect();
    let total: u16 =
        labels.iter().map(|l| string_width(l)).sum::<u16>() + 4 * (labels.len() as u16 - 1);
    let mut x = center(total);
    for (i, label) in labels.iter().enumerate() {
        let id = FocusId::Social(i);
        buf.draw_str(
            x,
            rect.y + 3,
            label,
            ctx.palette.primary,
            Rgba::TRANSPARENT,
            ctx.link_attrs(id),
            &clip,
        );
        ctx.hit(Rect::new(x, rect.y + 3, string_width(label), 1), id);
        x += string_width(label) + 4;
    }

    buf.draw_str(
        center(string_width(COPYRIGHT)),
        rect.y + 5,
        COPYRIGHT,
        ctx.palette.text_muted,
        Rgba::TRANSPARENT,
        Attr::DIM,
        &clip,
    );
}

// =============================================================================
// Tests
// =============================================================================
