//! Skills section - the three specialization pillars.

use crate::content;
use crate::layout::text_measure::wrap_text;
use crate::layout::{Block, RevealSpec, Row, SectionPlan};
use crate::renderer::FrameBuffer;
use crate::types::{Attr, BorderStyle, Rect, Rgba, SectionId};

use super::{BlockKind, DrawCtx, header_height, pill_rows};

const TITLE: &str = "Areas of Specialization";
const SUBTITLE: &str = "Three years into a data science and engineering \
degree, I have built a base that lets me take on complex problems from \
theory through to practical implementation.";

/// Three-column threshold for the pillar grid.
const THREE_UP_MIN_WIDTH: u16 = 90;
const PILLAR_GAP: u16 = 2;

// =============================================================================
// Measurement
// =============================================================================

fn pillar_height(index: usize, width: u16) -> u16 {
    let pillar = &content::SKILL_PILLARS[index];
    let inner = width.saturating_sub(4);
    let title_lines = wrap_text(pillar.title, inner.saturating_sub(2)).len() as u16;
    let desc_lines = wrap_text(pillar.description, inner).len() as u16;

    2 + 2 + title_lines + 1 + desc_lines + 1 + pill_rows(pillar.tags, inner)
}

// =============================================================================
// Plan
// =============================================================================

pub fn plan(cw: u16) -> SectionPlan {
    let mut rows = vec![Row::single(Block {
        kind: BlockKind::SectionHeader {
            title: TITLE,
            subtitle: SUBTITLE,
        },
        width: cw,
        height: header_height(SUBTITLE, cw),
        reveal: Some(RevealSpec::DEFAULT),
    })];

    let count = content::SKILL_PILLARS.len() as u16;
    let three_up = cw >= THREE_UP_MIN_WIDTH && count > 0;

    if three_up {
        let width = (cw - PILLAR_GAP * (count - 1)) / count;
        let blocks = content::SKILL_PILLARS
            .iter()
            .enumerate()
            .map(|(i, _)| Block {
                kind: BlockKind::PillarCard { index: i },
                width,
                height: pillar_height(i, width),
                reveal: Some(RevealSpec::delayed((i as u8) * 9)),
            })
            .collect();
        rows.push(Row::of(blocks, PILLAR_GAP));
    } else {
        for (i, _) in content::SKILL_PILLARS.iter().enumerate() {
            rows.push(Row::single(Block {
                kind: BlockKind::PillarCard { index: i },
                width: cw,
                height: pillar_height(i, cw),
                reveal: Some(RevealSpec::delayed((i as u8) * 9)),
            }));
        }
    }

    SectionPlan {
        id: SectionId::Skills,
        padding_top: 3,
        padding_bottom: 3,
        gap: 2,
        fill_viewport: false,
        rows,
    }
}

// =============================================================================
// Draw
// =============================================================================

pub fn draw_pillar(index: usize, buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    let Some(pillar) = content::SKILL_PILLARS.get(index) else {
        return;
    };
    let clip = ctx.clip;
    let inner_x = rect.x + 2;
    let inner = rect.width.saturating_sub(4);
    let accent = ctx.palette.accent_cycle(pillar.accent);

    buf.fill_rect(rect, ctx.palette.surface, &clip);
    buf.draw_border(rect, BorderStyle::Rounded, ctx.palette.border, &clip);

    let mut y = rect.y + 2;
    for line in wrap_text(pillar.title, inner.saturating_sub(2)) {
        buf.draw_str(
            inner_x,
            y,
            &format!("▮ {}", line),
            accent,
            Rgba::TRANSPARENT,
            Attr::BOLD,
            &clip,
        );
        y += 1;
    }
    y += 1;

    for line in wrap_text(pillar.description, inner) {
        buf.draw_str(
            inner_x,
            y,
            &line,
            ctx.palette.text,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        y += 1;
    }
    y += 1;

    super::draw_pills(buf, inner_x, y, inner, pillar.tags, accent, ctx);
}

// =============================================================================
// Tests
// =============================================================================
