//! Project detail pages - the static page behind each project card.

use crate::content;
use crate::layout::text_measure::{string_width, wrap_text};
use crate::layout::{Block, RevealSpec, Row, SectionPlan};
use crate::renderer::FrameBuffer;
use crate::types::{Attr, BorderStyle, FocusId, Rect, Rgba, SectionId};

use super::{BlockKind, DrawCtx};

pub const BACK_LABEL: &str = "← Back to portfolio";

// =============================================================================
// Measurement
// =============================================================================

fn header_height(project: usize, width: u16) -> u16 {
    let title_lines = content::PROJECTS
        .get(project)
        .map(|p| wrap_text(p.title, width).len() as u16)
        .unwrap_or(1);
    // back link + gap + title + rule
    1 + 1 + title_lines + 1
}

fn intro_height(project: usize, width: u16) -> u16 {
    content::project_detail(project)
        .map(|d| wrap_text(d.intro, width.min(76)).len() as u16)
        .unwrap_or(0)
}

fn body_height(project: usize, section: usize, width: u16) -> u16 {
    let Some(detail) = content::project_detail(project) else {
        return 0;
    };
    let Some(body) = detail.sections.get(section) else {
        return 0;
    };
    let inner = width.saturating_sub(4);
    let mut lines = 2 + 2; // borders + padding
    lines += 1 + 1; // heading + gap
    for (i, para) in body.paragraphs.iter().enumerate() {
        if i > 0 {
            lines += 1;
        }
        lines += wrap_text(para, inner).len() as u16;
    }
    lines
}

// =============================================================================
// Plan
// =============================================================================

/// The detail page plan, or `None` for an unknown project.
pub fn plan(project: usize, cw: u16) -> Option<SectionPlan> {
    let detail = content::project_detail(project)?;

    let mut rows = vec![
        Row::single(Block {
            kind: BlockKind::DetailHeader { project },
            width: cw,
            height: header_height(project, cw),
            reveal: None,
        }),
        Row::single(Block {
            kind: BlockKind::DetailIntro { project },
            width: cw,
            height: intro_height(project, cw),
            reveal: Some(RevealSpec::DEFAULT),
        }),
    ];

    for (i, _) in detail.sections.iter().enumerate() {
        rows.push(Row::single(Block {
            kind: BlockKind::DetailBody {
                project,
                section: i,
            },
            width: cw,
            height: body_height(project, i, cw),
            reveal: Some(RevealSpec::delayed((i as u8) * 6)),
        }));
    }

    if !detail.links.is_empty() {
        rows.push(Row::single(Block {
            kind: BlockKind::DetailLinks { project },
            width: cw,
            height: detail.links.len() as u16,
            reveal: Some(RevealSpec::DEFAULT),
        }));
    }

    Some(SectionPlan {
        id: SectionId::Home,
        padding_top: 1,
        padding_bottom: 2,
        gap: 1,
        fill_viewport: false,
        rows,
    })
}

// =============================================================================
// Draw
// =============================================================================

pub fn draw_header(project: usize, buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    let Some(record) = content::PROJECTS.get(project) else {
        return;
    };
    let clip = ctx.clip;

    let back_id = FocusId::DetailBack;
    buf.draw_str(
        rect.x,
        rect.y,
        BACK_LABEL,
        ctx.palette.primary,
        Rgba::TRANSPARENT,
        ctx.link_attrs(back_id),
        &clip,
    );
    ctx.hit(Rect::new(rect.x, rect.y, string_width(BACK_LABEL), 1), back_id);

    let mut y = rect.y + 2;
    for line in wrap_text(record.title, rect.width) {
        buf.draw_str(
            rect.x,
            y,
            &line,
            ctx.palette.text_bright,
            Rgba::TRANSPARENT,
            Attr::BOLD,
            &clip,
        );
        y += 1;
    }
    buf.draw_hline(rect.x, y, rect.width, '─', ctx.palette.primary, &clip);
}

pub fn draw_intro(project: usize, buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    let Some(detail) = content::project_detail(project) else {
        return;
    };
    for (i, line) in wrap_text(detail.intro, rect.width.min(76)).iter().enumerate() {
        buf.draw_str(
            rect.x,
            rect.y + i as u16,
            line,
            ctx.palette.text_muted,
            Rgba::TRANSPARENT,
            Attr::ITALIC,
            &ctx.clip,
        );
    }
}

pub fn draw_body(
    project: usize,
    section: usize,
    buf: &mut FrameBuffer,
    rect: Rect,
    ctx: &mut DrawCtx,
) {
    let Some(body) = content::project_detail(project).and_then(|d| d.sections.get(section)) else {
        return;
    };
    let clip = ctx.clip;
    let inner_x = rect.x + 2;
    let inner = rect.width.saturating_sub(4);

    buf.fill_rect(rect, ctx.palette.surface, &clip);
    buf.draw_border(rect, BorderStyle::Rounded, ctx.palette.border, &clip);

    let mut y = rect.y + 2;
    buf.draw_str(
        inner_x,
        y,
        body.heading,
        ctx.palette.primary,
        Rgba::TRANSPARENT,
        Attr::BOLD,
        &clip,
    );
    y += 2;

    for (i, para) in body.paragraphs.iter().enumerate() {
        if i > 0 {
            y += 1;
        }
        for line in wrap_text(para, inner) {
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
    }
}

pub fn draw_links(project: usize, buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    let Some(detail) = content::project_detail(project) else {
        return;
    };
    for (i, link) in detail.links.iter().enumerate() {
        let id = FocusId::DetailLink(i);
        let label = format!("↗ {}", link.label);
        let y = rect.y + i as u16;
        buf.draw_str(
            rect.x,
            y,
            &label,
            ctx.palette.primary,
            Rgba::TRANSPARENT,
            ctx.link_attrs(id),
            &ctx.clip,
        );
        ctx.hit(Rect::new(rect.x, y, string_width(&label), 1), id);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_for_each_project() {
        for (i, _) in content::PROJECTS.iter().enumerate() {
            let plan = plan(i, 76).unwrap();
            assert!(plan.rows.len() >= 3);
        }
        assert!(plan(usize::MAX, 76).is_none());
    }

    #[test]
    fn test_header_block_never_reveals() {
        // The back link must be visible immediately, not animated in
        let plan = plan(0, 76).unwrap();
        assert!(plan.rows[0].blocks[0].reveal.is_none());
    }

    #[test]
    fn test_links_row_present_only_with_links() {
        let with_links = plan(0, 76).unwrap();
        assert!(with_links
            .rows
            .iter()
            .any(|r| matches!(r.blocks[0].kind, BlockKind::DetailLinks { .. })));

        // Project 2 has no external links
        let without = plan(2, 76).unwrap();
        assert!(!without
            .rows
            .iter()
            .any(|r| matches!(r.blocks[0].kind, BlockKind::DetailLinks { .. })));
    }
}
