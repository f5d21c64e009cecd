//! Projects section - the showcase grid.
//!
//! The featured project spans the full container width; the rest sit two
//! abreast when the page is wide enough. Cards stagger their entrance left
//! to right across the grid.

use crate::content::{self, Project};
use crate::layout::text_measure::{string_width, truncate_text, wrap_text};
use crate::layout::{Block, RevealSpec, Row, SectionPlan};
use crate::renderer::FrameBuffer;
use crate::types::{Attr, BorderStyle, FocusId, Rect, Rgba, SectionId};

use super::{BlockKind, DrawCtx, header_height, pill_rows};

const TITLE: &str = "Featured Projects";
const SUBTITLE: &str = "A selection of projects where I apply my skills to \
build tangible solutions, from AI models to complete web platforms.";

/// Two-column threshold for the card grid.
const TWO_UP_MIN_WIDTH: u16 = 64;
const CARD_GAP: u16 = 2;

// =============================================================================
// Measurement
// =============================================================================

fn card_height(project: &Project, width: u16) -> u16 {
    let inner = width.saturating_sub(4);
    let title_lines = wrap_text(project.title, inner).len() as u16;
    let desc_lines = wrap_text(project.description, inner).len() as u16;
    let tag_rows = pill_rows(project.tags, inner);
    let links = if project.repo_url.is_some() || project.demo_url.is_some() {
        1
    } else {
        0
    };

    // borders + padding + cover strip + gaps between runs
    2 + 2 + 1 + 1 + title_lines + desc_lines + 1 + tag_rows + links
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

    let two_up = cw >= TWO_UP_MIN_WIDTH;
    let half = if two_up { (cw - CARD_GAP) / 2 } else { cw };

    let mut pending: Vec<Block> = Vec::new();
    for (i, project) in content::PROJECTS.iter().enumerate() {
        let width = if project.featured { cw } else { half };
        let block = Block {
            kind: BlockKind::ProjectCard { index: i },
            width,
            height: card_height(project, width),
            reveal: Some(RevealSpec::delayed((i as u8).saturating_mul(9))),
        };

        if project.featured || !two_up {
            rows.push(Row::single(block));
            continue;
        }

        pending.push(block);
        if pending.len() == 2 {
            rows.push(Row::of(std::mem::take(&mut pending), CARD_GAP));
        }
    }
    if !pending.is_empty() {
        rows.push(Row::of(pending, CARD_GAP));
    }

    SectionPlan {
        id: SectionId::Projects,
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

pub fn draw_card(index: usize, buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    let Some(project) = content::PROJECTS.get(index) else {
        return;
    };
    let clip = ctx.clip;
    let inner_x = rect.x + 2;
    let inner = rect.width.saturating_sub(4);

    let card_id = FocusId::ProjectCard(index);
    let border = if ctx.focused == Some(card_id) {
        ctx.palette.border_focus
    } else if project.featured {
        ctx.palette.primary
    } else {
        ctx.palette.border
    };
    buf.fill_rect(rect, ctx.palette.surface, &clip);
    buf.draw_border(rect, BorderStyle::Rounded, border, &clip);
    ctx.hit(rect, card_id);

    let mut y = rect.y + 2;

    // Cover strip: the image itself is a path; a missing asset renders as
    // this placeholder band rather than breaking the card.
    let caption = truncate_text(&format!(" {} ", project.image), inner.saturating_sub(2));
    let caption_w = string_width(&caption);
    buf.draw_hline(inner_x, y, inner, '▒', ctx.palette.border, &clip);
    buf.draw_str(
        inner_x + inner.saturating_sub(caption_w) / 2,
        y,
        &caption,
        ctx.palette.text_muted,
        Rgba::TRANSPARENT,
        Attr::DIM,
        &clip,
    );
    y += 2;

    for line in wrap_text(project.title, inner) {
        buf.draw_str(
            inner_x,
            y,
            &line,
            ctx.palette.text_bright,
            Rgba::TRANSPARENT,
            Attr::BOLD,
            &clip,
        );
        y += 1;
    }

    for line in wrap_text(project.description, inner) {
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

    super::draw_pills(buf, inner_x, y, inner, project.tags, ctx.palette.primary, ctx);
    y += pill_rows(project.tags, inner);

    let mut x = inner_x;
    if let Some(_repo) = project.repo_url {
        let id = FocusId::ProjectRepo(index);
        let label = "⌂ Code";
        buf.draw_str(
            x,
            y,
            label,
            ctx.palette.text_muted,
            Rgba::TRANSPARENT,
            ctx.link_attrs(id),
            &clip,
        );
        ctx.hit(Rect::new(x, y, string_width(label), 1), id);
        x += string_width(label) + 3;
    }
    if let Some(_demo) = project.demo_url {
        let id = FocusId::ProjectDemo(index);
        let label = "↗ Demo";
        buf.draw_str(
            x,
            y,
            label,
            ctx.palette.text_muted,
            Rgba::TRANSPARENT,
            ctx.link_attrs(id),
            &clip,
        );
        ctx.hit(Rect::new(x, y, string_width(label), 1), id);
    }
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
    fn test_featured_card_spans_container() {
        let plan = plan(80);

        // Row 0 is the header; row 1 the featured card
        let featured = &plan.rows[1].blocks[0];
        assert_eq!(featured.kind, BlockKind::ProjectCard { index: 0 });
        assert_eq!(featured.width, 80);

        // Remaining cards share a two-up row
        let pair = &plan.rows[2];
        assert_eq!(pair.blocks.len(), 2);
        assert_eq!(pair.blocks[0].width, 39);
    }

    #[test]
    fn test_narrow_grid_stacks_cards() {
        let plan = plan(50);
        for row in &plan.rows {
            assert_eq!(row.blocks.len(), 1);
        }
    }

    #[test]
    fn test_card_heights_grow_when_narrow() {
        let project = &content::PROJECTS[0];
        assert!(card_height(project, 40) > card_height(project, 90));
    }

    #[test]
    fn test_card_registers_hits_for_links() {
        let palette = theme::presets::paper().palette();
        let mut buf = FrameBuffer::new(100, 40);
        let mut hits: Vec<HitRegion> = Vec::new();
        let mut ctx = DrawCtx {
            palette: &palette,
            focused: None,
            hits: &mut hits,
            clip: Rect::new(0, 0, 100, 40),
        };

        // Project 1 has both repo and demo links
        let height = card_height(&content::PROJECTS[1], 80);
        draw_card(1, &mut buf, Rect::new(0, 0, 80, height), &mut ctx);

        let targets: Vec<_> = hits.iter().map(|h| h.target).collect();
        assert!(targets.contains(&FocusId::ProjectCard(1)));
        assert!(targets.contains(&FocusId::ProjectRepo(1)));
        assert!(targets.contains(&FocusId::ProjectDemo(1)));
    }

    #[test]
    fn test_unknown_card_draws_nothing() {
        let palette = theme::presets::paper().palette();
        let mut buf = FrameBuffer::new(40, 10);
        let before = buf.clone();
        let mut hits: Vec<HitRegion> = Vec::new();
        let mut ctx = DrawCtx {
            palette: &palette,
            focused: None,
            hits: &mut hits,
            clip: Rect::new(0, 0, 40, 10),
        };

        draw_card(999, &mut buf, Rect::new(0, 0, 40, 10), &mut ctx);
        assert_eq!(buf, before);
        assert!(hits.is_empty());
    }
}
