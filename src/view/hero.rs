//! Hero section - name, tagline, headline stats, calls to action.
//!
//! Fills the whole viewport as a full-screen banner; the
//! scroll hint is pushed to the bottom edge. Every block reveals with a
//! short stagger, which plays as the page-load entrance cascade.

use crate::content;
use crate::layout::text_measure::{string_width, wrap_text};
use crate::layout::{Block, RevealSpec, Row, SectionPlan};
use crate::renderer::FrameBuffer;
use crate::types::{Attr, BorderStyle, FocusId, Rect, Rgba, SectionId};

use super::{BlockKind, DrawCtx};

const TAGLINE_MEASURE: u16 = 64;

fn display_name() -> String {
    // Letter-spaced name, double gap between words
    let mut out = String::new();
    for (i, word) in content::NAME.split_whitespace().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        let letters: Vec<String> = word.chars().map(|c| c.to_string()).collect();
        out.push_str(&letters.join(" "));
    }
    out
}

fn badge_text() -> String {
    format!("✦ {}", content::BADGE)
}

fn stat_column_width(stat: &content::HeroStat) -> u16 {
    let value = string_width(stat.value) + string_width(stat.suffix);
    value.max(string_width(stat.caption))
}

fn stats_width() -> u16 {
    let columns: u16 = content::HERO_STATS.iter().map(stat_column_width).sum();
    let separators = (content::HERO_STATS.len().saturating_sub(1) as u16) * 3;
    columns + separators
}

fn button_width(label: &str) -> u16 {
    string_width(label) + 4
}

pub const PROJECTS_CTA: &str = "View projects ▾";
pub const CONTACT_CTA: &str = "Contact ●";

// =============================================================================
// Plan
// =============================================================================

/// The hero's height comes from the layout (`fill_viewport`), so the plan
/// only measures its blocks against the container width.
pub fn plan(cw: u16) -> SectionPlan {
    let tagline_width = cw.min(TAGLINE_MEASURE);
    let tagline_lines = wrap_text(content::TAGLINE, tagline_width).len() as u16;

    let blocks = [
        (
            BlockKind::HeroBadge,
            string_width(&badge_text()).min(cw),
            1,
            RevealSpec::delayed(0),
        ),
        (
            BlockKind::HeroTitle,
            string_width(&display_name()).min(cw),
            2,
            RevealSpec::delayed(4),
        ),
        (
            BlockKind::HeroTagline,
            tagline_width,
            tagline_lines,
            RevealSpec::delayed(8),
        ),
        (
            BlockKind::HeroStats,
            stats_width().min(cw),
            2,
            RevealSpec::delayed(12),
        ),
        (
            BlockKind::HeroCtas,
            (button_width(PROJECTS_CTA) + 2 + button_width(CONTACT_CTA)).min(cw),
            3,
            RevealSpec::delayed(16),
        ),
    ];

    let mut rows: Vec<Row> = blocks
        .into_iter()
        .map(|(kind, width, height, reveal)| {
            Row::single(Block {
                kind,
                width,
                height,
                reveal: Some(reveal),
            })
        })
        .collect();

    let mut hint = Row::single(Block {
        kind: BlockKind::HeroScrollHint,
        width: string_width("Scroll ▾"),
        height: 1,
        reveal: Some(RevealSpec::delayed(60)),
    });
    hint.push_to_end = true;
    rows.push(hint);

    SectionPlan {
        id: SectionId::Home,
        padding_top: 1,
        padding_bottom: 1,
        gap: 1,
        fill_viewport: true,
        rows,
    }
}

// =============================================================================
// Draw
// =============================================================================

pub fn draw(kind: &BlockKind, buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    let clip = ctx.clip;
    match kind {
        BlockKind::HeroBadge => {
            buf.draw_str(
                rect.x,
                rect.y,
                &badge_text(),
                ctx.palette.primary,
                Rgba::TRANSPARENT,
                Attr::NONE,
                &clip,
            );
        }
        BlockKind::HeroTitle => {
            buf.draw_str(
                rect.x,
                rect.y,
                &display_name(),
                ctx.palette.text_bright,
                Rgba::TRANSPARENT,
                Attr::BOLD,
                &clip,
            );
            buf.draw_hline(rect.x, rect.y + 1, rect.width, '▔', ctx.palette.primary, &clip);
        }
        BlockKind::HeroTagline => {
            for (i, line) in wrap_text(content::TAGLINE, rect.width).iter().enumerate() {
                let lw = string_width(line);
                buf.draw_str(
                    rect.x + rect.width.saturating_sub(lw) / 2,
                    rect.y + i as u16,
                    line,
                    ctx.palette.text_muted,
                    Rgba::TRANSPARENT,
                    Attr::NONE,
                    &clip,
                );
            }
        }
        BlockKind::HeroStats => {
            let mut x = rect.x;
            for (i, stat) in content::HERO_STATS.iter().enumerate() {
                if i > 0 {
                    buf.draw_str(
                        x,
                        rect.y,
                        " │ ",
                        ctx.palette.border,
                        Rgba::TRANSPARENT,
                        Attr::NONE,
                        &clip,
                    );
                    buf.draw_str(
                        x,
                        rect.y + 1,
                        " │ ",
                        ctx.palette.border,
                        Rgba::TRANSPARENT,
                        Attr::NONE,
                        &clip,
                    );
                    x += 3;
                }

                let col = stat_column_width(stat);
                let value = format!("{}{}", stat.value, stat.suffix);
                buf.draw_str(
                    x + col.saturating_sub(string_width(&value)) / 2,
                    rect.y,
                    stat.value,
                    ctx.palette.primary,
                    Rgba::TRANSPARENT,
                    Attr::BOLD,
                    &clip,
                );
                buf.draw_str(
                    x + col.saturating_sub(string_width(&value)) / 2
                        + string_width(stat.value),
                    rect.y,
                    stat.suffix,
                    ctx.palette.text_muted,
                    Rgba::TRANSPARENT,
                    Attr::NONE,
                    &clip,
                );
                buf.draw_str(
                    x + col.saturating_sub(string_width(stat.caption)) / 2,
                    rect.y + 1,
                    stat.caption,
                    ctx.palette.text_muted,
                    Rgba::TRANSPARENT,
                    Attr::DIM,
                    &clip,
                );
                x += col;
            }
        }
        BlockKind::HeroCtas => {
            let primary_w = button_width(PROJECTS_CTA);
            draw_button(
                buf,
                Rect::new(rect.x, rect.y, primary_w, 3),
                PROJECTS_CTA,
                ctx.palette.primary,
                FocusId::HeroProjects,
                ctx,
            );
            draw_button(
                buf,
                Rect::new(
                    rect.x + primary_w + 2,
                    rect.y,
                    button_width(CONTACT_CTA),
                    3,
                ),
                CONTACT_CTA,
                ctx.palette.secondary,
                FocusId::HeroContact,
                ctx,
            );
        }
        BlockKind::HeroScrollHint => {
            buf.draw_str(
                rect.x,
                rect.y,
                "Scroll ▾",
                ctx.palette.text_muted,
                Rgba::TRANSPARENT,
                Attr::DIM,
                &clip,
            );
        }
        _ => {}
    }
}

fn draw_button(
    buf: &mut FrameBuffer,
    rect: Rect,
    label: &str,
    accent: Rgba,
    id: FocusId,
    ctx: &mut DrawCtx,
) {
    let clip = ctx.clip;
    let border = if ctx.focused == Some(id) {
        ctx.palette.border_focus
    } else {
        accent
    };
    buf.draw_border(rect, BorderStyle::Rounded, border, &clip);
    buf.draw_str(
        rect.x + 2,
        rect.y + 1,
        label,
        accent,
        Rgba::TRANSPARENT,
        if ctx.focused == Some(id) {
            Attr::BOLD | Attr::INVERSE
        } else {
            Attr::BOLD
        },
        &clip,
    );
    ctx.hit(rect, id);
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
    fn test_plan_shape() {
        let plan = plan(76);
        assert!(plan.fill_viewport);
        assert_eq!(plan.rows.len(), 6);
        // The scroll hint hugs the bottom
        assert!(plan.rows.last().map(|r| r.push_to_end).unwrap_or(false));
        // Stagger delays increase down the section
        let delays: Vec<u8> = plan
            .rows
            .iter()
            .flat_map(|r| r.blocks.iter())
            .filter_map(|b| b.reveal.map(|r| r.delay))
            .collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_ctas_register_hits() {
        let palette = theme::presets::paper().palette();
        let mut buf = FrameBuffer::new(80, 24);
        let mut hits: Vec<HitRegion> = Vec::new();
        let mut ctx = DrawCtx {
            palette: &palette,
            focused: None,
            hits: &mut hits,
            clip: Rect::new(0, 0, 80, 24),
        };

        draw(
            &BlockKind::HeroCtas,
            &mut buf,
            Rect::new(5, 5, 50, 3),
            &mut ctx,
        );

        let targets: Vec<_> = hits.iter().map(|h| h.target).collect();
        assert!(targets.contains(&FocusId::HeroProjects));
        assert!(targets.contains(&FocusId::HeroContact));
    }

    #[test]
    fn test_display_name_is_letter_spaced() {
        let name = display_name();
        assert!(name.contains("J O S E"));
        assert!(name.contains("  A")); // word gap
    }
}
