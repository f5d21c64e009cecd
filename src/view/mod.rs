//! Views - the page's sections and overlays.
//!
//! Each section module contributes measured blocks to the layout plan and
//! draws them once placed. Views are pure draw functions over the frame
//! buffer: state comes in through [`DrawCtx`], hit regions go out through
//! it, and nothing here owns state of its own.

pub mod contact_modal;
pub mod detail;
pub mod education;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;

use crate::layout::SectionPlan;
use crate::renderer::FrameBuffer;
use crate::state::mouse::HitRegion;
use crate::theme::Palette;
use crate::types::{Attr, FocusId, Rect, Rgba};

// =============================================================================
// Block kinds
// =============================================================================

/// Everything the document can place. Content is referenced by index into
/// the static records, so kinds stay cheap to clone and compare.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    HeroBadge,
    HeroTitle,
    HeroTagline,
    HeroStats,
    HeroCtas,
    HeroScrollHint,
    SectionHeader {
        title: &'static str,
        subtitle: &'static str,
    },
    ProjectCard {
        index: usize,
    },
    DegreeCard,
    HighlightHeading,
    HighlightRow {
        index: usize,
    },
    PillarCard {
        index: usize,
    },
    FooterBand,
    DetailHeader {
        project: usize,
    },
    DetailIntro {
        project: usize,
    },
    DetailBody {
        project: usize,
        section: usize,
    },
    DetailLinks {
        project: usize,
    },
}

// =============================================================================
// Draw context
// =============================================================================

/// Everything a view needs while drawing one frame.
pub struct DrawCtx<'a> {
    pub palette: &'a Palette,
    pub focused: Option<FocusId>,
    /// Hit regions collected while drawing, screen-space.
    pub hits: &'a mut Vec<HitRegion>,
    pub clip: Rect,
}

impl DrawCtx<'_> {
    /// Register a clickable region (clipped to the visible area).
    pub fn hit(&mut self, rect: Rect, target: FocusId) {
        let visible = rect.intersect(&self.clip);
        if !visible.is_empty() {
            self.hits.push(HitRegion {
                rect: visible,
                target,
            });
        }
    }

    /// Border color for a focusable container.
    pub fn border_for(&self, id: FocusId) -> Rgba {
        if self.focused == Some(id) {
            self.palette.border_focus
        } else {
            self.palette.border
        }
    }

    /// Attributes for a focusable inline link.
    pub fn link_attrs(&self, id: FocusId) -> Attr {
        if self.focused == Some(id) {
            Attr::BOLD | Attr::INVERSE
        } else {
            Attr::UNDERLINE
        }
    }
}

// =============================================================================
// Plans
// =============================================================================

/// Container width for a given viewport width: the page keeps a readable
/// measure with side gutters, a centered page container.
pub fn container_width(viewport_width: u16) -> u16 {
    viewport_width.saturating_sub(4).min(96)
}

/// Layout plans for the home page, in document order.
pub fn home_plans(viewport: (u16, u16)) -> Vec<SectionPlan> {
    let (vw, _) = viewport;
    let cw = container_width(vw);
    vec![
        hero::plan(cw),
        projects::plan(cw),
        education::plan(cw),
        skills::plan(cw),
        footer::plan(cw),
    ]
}

/// Layout plans for a project detail page.
pub fn detail_plans(project: usize, viewport: (u16, u16)) -> Vec<SectionPlan> {
    let (vw, _) = viewport;
    detail::plan(project, container_width(vw))
        .map(|p| vec![p])
        .unwrap_or_default()
}

// =============================================================================
// Dispatch
// =============================================================================

/// Draw one placed block. `rect` is screen-space (already scrolled).
pub fn draw_block(kind: &BlockKind, buf: &mut FrameBuffer, rect: Rect, ctx: &mut DrawCtx) {
    match kind {
        BlockKind::HeroBadge
        | BlockKind::HeroTitle
        | BlockKind::HeroTagline
        | BlockKind::HeroStats
        | BlockKind::HeroCtas
        | BlockKind::HeroScrollHint => hero::draw(kind, buf, rect, ctx),
        BlockKind::SectionHeader { title, subtitle } => {
            draw_section_header(buf, rect, ctx, title, subtitle)
        }
        BlockKind::ProjectCard { index } => projects::draw_card(*index, buf, rect, ctx),
        BlockKind::DegreeCard => education::draw_degree(buf, rect, ctx),
        BlockKind::HighlightHeading => education::draw_heading(buf, rect, ctx),
        BlockKind::HighlightRow { index } => education::draw_highlight(*index, buf, rect, ctx),
        BlockKind::PillarCard { index } => skills::draw_pillar(*index, buf, rect, ctx),
        BlockKind::FooterBand => footer::draw(buf, rect, ctx),
        BlockKind::DetailHeader { project } => detail::draw_header(*project, buf, rect, ctx),
        BlockKind::DetailIntro { project } => detail::draw_intro(*project, buf, rect, ctx),
        BlockKind::DetailBody { project, section } => {
            detail::draw_body(*project, *section, buf, rect, ctx)
        }
        BlockKind::DetailLinks { project } => detail::draw_links(*project, buf, rect, ctx),
    }
}

// =============================================================================
// Shared pieces
// =============================================================================

/// Section headers: a centered bold title over a wrapped, muted subtitle.
pub fn header_height(subtitle: &str, width: u16) -> u16 {
    let sub_lines = crate::layout::text_measure::measure_text_height(subtitle, width.min(70));
    2 + sub_lines
}

fn draw_section_header(
    buf: &mut FrameBuffer,
    rect: Rect,
    ctx: &mut DrawCtx,
    title: &str,
    subtitle: &str,
) {
    use crate::layout::text_measure::{string_width, wrap_text};

    let clip = ctx.clip;
    let center = |w: u16| rect.x + rect.width.saturating_sub(w) / 2;

    let tw = string_width(title);
    buf.draw_str(
        center(tw),
        rect.y,
        title,
        ctx.palette.text_bright,
        Rgba::TRANSPARENT,
        Attr::BOLD,
        &clip,
    );

    for (i, line) in wrap_text(subtitle, rect.width.min(70)).iter().enumerate() {
        let lw = string_width(line);
        buf.draw_str(
            center(lw),
            rect.y + 2 + i as u16,
            line,
            ctx.palette.text_muted,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
    }
}

/// Draw a row of tag pills, wrapping as needed. Returns the number of rows
/// used (for measurement, pass a dry-run buffer or use [`pill_rows`]).
pub fn draw_pills(
    buf: &mut FrameBuffer,
    x: u16,
    y: u16,
    width: u16,
    tags: &[&str],
    accent: Rgba,
    ctx: &mut DrawCtx,
) {
    use crate::layout::text_measure::string_width;

    let mut cx = x;
    let mut cy = y;
    for tag in tags {
        let pill = format!(" {} ", tag);
        let pw = string_width(&pill);
        if cx + pw > x + width && cx > x {
            cx = x;
            cy += 1;
        }
        buf.draw_str(
            cx,
            cy,
            &pill,
            accent,
            Rgba::TRANSPARENT,
            Attr::DIM | Attr::INVERSE,
            &ctx.clip,
        );
        cx += pw + 1;
    }
}

/// How many rows a pill run occupies at a given width.
pub fn pill_rows(tags: &[&str], width: u16) -> u16 {
    use crate::layout::text_measure::string_width;

    if tags.is_empty() || width == 0 {
        return 0;
    }
    let mut rows = 1u16;
    let mut cx = 0u16;
    for tag in tags {
        let pw = string_width(tag) + 2;
        if cx + pw > width && cx > 0 {
            rows += 1;
            cx = 0;
        }
        cx += pw + 1;
    }
    rows
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_width_clamps() {
        assert_eq!(container_width(80), 76);
        assert_eq!(container_width(200), 96);
        assert_eq!(container_width(3), 0);
    }

    #[test]
    fn test_home_plans_cover_every_section() {
        let plans = home_plans((100, 30));
        let ids: Vec<_> = plans.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec![
                crate::types::SectionId::Home,
                crate::types::SectionId::Projects,
                crate::types::SectionId::Education,
                crate::types::SectionId::Skills,
                crate::types::SectionId::Footer,
            ]
        );
    }

    #[test]
    fn test_detail_plans_for_unknown_project_empty() {
        assert!(detail_plans(999, (100, 30)).is_empty());
        assert!(!detail_plans(0, (100, 30)).is_empty());
    }

    #[test]
    fn test_pill_rows_wraps() {
        // Three 5-wide pills (plus separators) in a 12-wide run: two rows
        let tags = ["aaa", "bbb", "ccc"];
        assert_eq!(pill_rows(&tags, 40), 1);
        assert!(pill_rows(&tags, 12) >= 2);
        assert_eq!(pill_rows(&[], 40), 0);
    }
}
