//! Education section - the degree card and milestone highlights.

use crate::content;
use crate::layout::text_measure::{string_width, wrap_text};
use crate::layout::{Block, RevealSpec, Row, SectionPlan};
use crate::renderer::FrameBuffer;
use crate::types::{Attr, BorderStyle, Rect, Rgba, SectionId};

use super::{BlockKind, DrawCtx, header_height};

const TITLE: &str = "Academic Background";
const SUBTITLE: &str = "A rigorous foundation in the principles of data \
science and software engineering, focused on deep understanding and \
practical application.";
const HEADING: &str = "◈ Milestones & Practical Applications";

/// Highlight rows latch at half visibility rather than the usual tenth;
/// they are short, so a sliver of overlap reads as nothing.
const HIGHLIGHT_THRESHOLD: f32 = 0.5;

// =============================================================================
// Measurement
// =============================================================================

fn degree_body_lines(inner: u16) -> u16 {
    let mut lines = 0u16;
    for (i, para) in content::DEGREE_BODY.iter().enumerate() {
        if i > 0 {
            lines += 1; // blank line between paragraphs
        }
        lines += wrap_text(para, inner).len() as u16;
    }
    lines
}

fn meta_fits_one_row(inner: u16) -> bool {
    string_width(content::DEGREE_SCHOOL) + 2 + string_width(content::DEGREE_YEARS) <= inner
}

fn degree_height(width: u16) -> u16 {
    let inner = width.saturating_sub(4);
    let title_lines = wrap_text(content::DEGREE_TITLE, inner.saturating_sub(2)).len() as u16;
    let meta_rows = if meta_fits_one_row(inner) { 1 } else { 2 };

    // borders + padding + title + meta + gap + body + separator + gpa
    2 + 2 + title_lines + meta_rows + 1 + degree_body_lines(inner) + 1 + 1
}

fn highlight_height(index: usize, width: u16) -> u16 {
    let h = &content::EDUCATION_HIGHLIGHTS[index];
    let title_lines = wrap_text(h.title, width.saturating_sub(4)).len() as u16;
    let desc_lines = wrap_text(h.description, width.saturating_sub(4)).len() as u16;
    title_lines + desc_lines
}

// =============================================================================
// Plan
// =============================================================================

pub fn plan(cw: u16) -> SectionPlan {
    let mut rows = vec![
        Row::single(Block {
            kind: BlockKind::SectionHeader {
                title: TITLE,
                subtitle: SUBTITLE,
            },
            width: cw,
            height: header_height(SUBTITLE, cw),
            reveal: Some(RevealSpec::DEFAULT),
        }),
        Row::single(Block {
            kind: BlockKind::DegreeCard,
            width: cw,
            height: degree_height(cw),
            reveal: Some(RevealSpec::delayed(6)),
        }),
        Row::single(Block {
            kind: BlockKind::HighlightHeading,
            width: cw,
            height: 1,
            reveal: Some(RevealSpec::delayed(9)),
        }),
    ];

    for (i, _) in content::EDUCATION_HIGHLIGHTS.iter().enumerate() {
        rows.push(Row::single(Block {
            kind: BlockKind::HighlightRow { index: i },
            width: cw,
            height: highlight_height(i, cw),
            reveal: Some(RevealSpec {
                threshold: HIGHLIGHT_THRESHOLD,
                delay: 9 + (i as u8) * 6,
            }),
        }));
    }

    SectionPlan {
        id: SectionId::Education,
        padding_top: 3,
        padding_bottom: 3,
        gap: 1,
        fill_viewport: false,
        rows,
    }
}

// =============================================================================
// Draw
// =============================================================================

pub fn draw_degree(buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    let clip = ctx.clip;
    let inner_x = rect.x + 2;
    let inner = rect.width.saturating_sub(4);

    buf.fill_rect(rect, ctx.palette.surface, &clip);
    buf.draw_border(rect, BorderStyle::Rounded, ctx.palette.border, &clip);

    let mut y = rect.y + 2;

    for line in wrap_text(content::DEGREE_TITLE, inner.saturating_sub(2)) {
        buf.draw_str(
            inner_x,
            y,
            &format!("◈ {}", line),
            ctx.palette.text_bright,
            Rgba::TRANSPARENT,
            Attr::BOLD,
            &clip,
        );
        y += 1;
    }

    if meta_fits_one_row(inner) {
        buf.draw_str(
            inner_x,
            y,
            content::DEGREE_SCHOOL,
            ctx.palette.text,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        let years_w = string_width(content::DEGREE_YEARS);
        buf.draw_str(
            inner_x + inner.saturating_sub(years_w),
            y,
            content::DEGREE_YEARS,
            ctx.palette.text_muted,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        y += 1;
    } else {
        buf.draw_str(
            inner_x,
            y,
            content::DEGREE_SCHOOL,
            ctx.palette.text,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        buf.draw_str(
            inner_x,
            y + 1,
            content::DEGREE_YEARS,
            ctx.palette.text_muted,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        y += 2;
    }
    y += 1;

    for (i, para) in content::DEGREE_BODY.iter().enumerate() {
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

    buf.draw_hline(inner_x, y, inner, '─', ctx.palette.border, &clip);
    y += 1;
    buf.draw_str(
        inner_x,
        y,
        content::DEGREE_GPA,
        ctx.palette.primary,
        Rgba::TRANSPARENT,
        Attr::BOLD,
        &clip,
    );
}

pub fn draw_heading(buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    buf.draw_str(
        rect.x,
        rect.y,
        HEADING,
        ctx.palette.text_bright,
        Rgba::TRANSPARENT,
        Attr::BOLD,
        &ctx.clip,
    );
}

pub fn draw_highlight(index: usize, buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    let Some(highlight) = content::EDUCATION_HIGHLIGHTS.get(index) else {
        return;
    };
    let clip = ctx.clip;
    let text_x = rect.x + 4;
    let text_w = rect.width.saturating_sub(4);

    buf.draw_str(
        rect.x,
        rect.y,
        &highlight.glyph.to_string(),
        ctx.palette.accent_cycle(index),
        Rgba::TRANSPARENT,
        Attr::BOLD,
        &clip,
    );

    let mut y = rect.y;
    for line in wrap_text(highlight.title, text_w) {
        buf.draw_str(
            text_x,
            y,
            &line,
            ctx.palette.text_bright,
            Rgba::TRANSPARENT,
            Attr::BOLD,
            &clip,
        );
        y += 1;
    }
    for line in wrap_text(highlight.description, text_w) {
        buf.draw_str(
            text_x,
            y,
            &line,
            ctx.palette.text_muted,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        y += 1;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_header_card_and_highlights() {
        let plan = plan(76);
        assert_eq!(
            plan.rows.len(),
            3 + content::EDUCATION_HIGHLIGHTS.len()
        );
    }

    #[test]
    fn test_highlights_use_half_visibility_threshold() {
        let plan = plan(76);
        let highlight_specs: Vec<_> = plan
            .rows
            .iter()
            .flat_map(|r| r.blocks.iter())
            .filter(|b| matches!(b.kind, BlockKind::HighlightRow { .. }))
            .filter_map(|b| b.reveal)
            .collect();

        assert_eq!(highlight_specs.len(), content::EDUCATION_HIGHLIGHTS.len());
        for spec in highlight_specs {
            assert!((spec.threshold - HIGHLIGHT_THRESHOLD).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_degree_height_accounts_for_wrapping() {
        assert!(degree_height(40) > degree_height(90));
    }
}
