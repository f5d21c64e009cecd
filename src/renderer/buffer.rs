//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells representing what should be on the
//! terminal. Views draw into it; the diff renderer turns it into ANSI.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing for cache
//!   efficiency.
//! - **Clipping**: drawing functions accept a clip [`Rect`]; cells outside
//!   it are dropped silently.
//! - **Alpha blending**: translucent backgrounds blend with existing cells.
//! - **Wide characters**: CJK/emoji occupy two cells via a continuation
//!   marker (char = 0).

use unicode_width::UnicodeWidthChar;

use crate::types::{Attr, BorderStyle, Cell, Rect, Rgba};

/// A 2D buffer of terminal cells.
///
/// Flat storage with row-major indexing: `index = y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Create a new buffer filled with a background color.
    pub fn with_background(width: u16, height: u16, bg: Rgba) -> Self {
        let size = width as usize * height as usize;
        let cell = Cell {
            char: b' ' as u32,
            fg: Rgba::TERMINAL_DEFAULT,
            bg,
            attrs: Attr::NONE,
        };
        Self {
            width,
            height,
            cells: vec![cell; size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a cell, clipped to `clip` and the buffer bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell, clip: &Rect) {
        if !clip.contains(x, y) || !self.in_bounds(x, y) {
            return;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Fill a rectangle with a background color (blended if translucent).
    pub fn fill_rect(&mut self, rect: Rect, bg: Rgba, clip: &Rect) {
        let area = rect.intersect(clip).intersect(&self.bounds());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                let idx = self.index(x, y);
                let dst = &mut self.cells[idx];
                *dst = Cell {
                    char: b' ' as u32,
                    fg: dst.fg,
                    bg: Rgba::blend(bg, dst.bg),
                    attrs: Attr::NONE,
                };
            }
        }
    }

    /// Draw a string starting at (x, y), clipped.
    ///
    /// Wide characters take two columns; the second gets a continuation
    /// marker. A transparent `bg` keeps whatever background is underneath.
    pub fn draw_str(&mut self, x: u16, y: u16, s: &str, fg: Rgba, bg: Rgba, attrs: Attr, clip: &Rect) {
        let mut cx = x;
        for c in s.chars() {
            let w = c.width().unwrap_or(0) as u16;
            if w == 0 {
                continue;
            }
            if cx >= clip.right() || cx >= self.width {
                break;
            }

            let under_bg = self.get(cx, y).map(|cell| cell.bg).unwrap_or(bg);
            let merged_bg = if bg.is_transparent() {
                under_bg
            } else {
                Rgba::blend(bg, under_bg)
            };

            self.set(
                cx,
                y,
                Cell {
                    char: c as u32,
                    fg,
                    bg: merged_bg,
                    attrs,
                },
                clip,
            );
            if w == 2 {
                self.set(
                    cx + 1,
                    y,
                    Cell {
                        char: 0,
                        fg,
                        bg: merged_bg,
                        attrs,
                    },
                    clip,
                );
            }
            cx = cx.saturating_add(w);
        }
    }

    /// Draw a horizontal line of a repeated glyph.
    pub fn draw_hline(&mut self, x: u16, y: u16, len: u16, glyph: char, fg: Rgba, clip: &Rect) {
        for i in 0..len {
            let cx = x.saturating_add(i);
            let under = self.get(cx, y).copied().unwrap_or_default();
            self.set(
                cx,
                y,
                Cell {
                    char: glyph as u32,
                    fg,
                    bg: under.bg,
                    attrs: Attr::NONE,
                },
                clip,
            );
        }
    }

    /// Draw a border around the inside edge of `rect`.
    pub fn draw_border(&mut self, rect: Rect, style: BorderStyle, fg: Rgba, clip: &Rect) {
        if style == BorderStyle::None || rect.width < 2 || rect.height < 2 {
            return;
        }
        let (tl, tr, bl, br, h, v) = style.glyphs();
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        let put = |buf: &mut Self, x: u16, y: u16, glyph: char| {
            let under = buf.get(x, y).copied().unwrap_or_default();
            buf.set(
                x,
                y,
                Cell {
                    char: glyph as u32,
                    fg,
                    bg: under.bg,
                    attrs: Attr::NONE,
                },
                clip,
            );
        };

        put(self, rect.x, rect.y, tl);
        put(self, right, rect.y, tr);
        put(self, rect.x, bottom, bl);
        put(self, right, bottom, br);
        for x in rect.x + 1..right {
            put(self, x, rect.y, h);
            put(self, x, bottom, h);
        }
        for y in rect.y + 1..bottom {
            put(self, rect.x, y, v);
            put(self, right, y, v);
        }
    }

    /// Dim a region by blending a translucent scrim over it and muting
    /// foregrounds. Used for the modal backdrop.
    pub fn dim_rect(&mut self, rect: Rect, scrim: Rgba, clip: &Rect) {
        let area = rect.intersect(clip).intersect(&self.bounds());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                let idx = self.index(x, y);
                let cell = &mut self.cells[idx];
                cell.bg = Rgba::blend(scrim, cell.bg);
                cell.fg = cell.fg.dim(0.45);
                cell.attrs |= Attr::DIM;
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn full(buf: &FrameBuffer) -> Rect {
        buf.bounds()
    }

    #[test]
    fn test_new_buffer_defaults() {
        let buf = FrameBuffer::new(4, 3);
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.get(0, 0), Some(&Cell::default()));
        assert_eq!(buf.get(4, 0), None);
        assert_eq!(buf.get(0, 3), None);
    }

    #[test]
    fn test_draw_str_basic() {
        let mut buf = FrameBuffer::new(10, 2);
        let clip = full(&buf);
        buf.draw_str(
            1,
            0,
            "hi",
            Rgba::WHITE,
            Rgba::TRANSPARENT,
            Attr::BOLD,
            &clip,
        );

        let cell = buf.get(1, 0).unwrap();
        assert_eq!(cell.char, 'h' as u32);
        assert_eq!(cell.attrs, Attr::BOLD);
        assert_eq!(buf.get(2, 0).unwrap().char, 'i' as u32);
        // Untouched cell stays default
        assert_eq!(buf.get(3, 0), Some(&Cell::default()));
    }

    #[test]
    fn test_draw_str_clips_at_edge() {
        let mut buf = FrameBuffer::new(4, 1);
        let clip = full(&buf);
        buf.draw_str(
            2,
            0,
            "long",
            Rgba::WHITE,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        assert_eq!(buf.get(2, 0).unwrap().char, 'l' as u32);
        assert_eq!(buf.get(3, 0).unwrap().char, 'o' as u32);
    }

    #[test]
    fn test_wide_char_continuation() {
        let mut buf = FrameBuffer::new(6, 1);
        let clip = full(&buf);
        buf.draw_str(
            0,
            0,
            "界x",
            Rgba::WHITE,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        assert_eq!(buf.get(0, 0).unwrap().char, '界' as u32);
        assert_eq!(buf.get(1, 0).unwrap().char, 0); // continuation
        assert_eq!(buf.get(2, 0).unwrap().char, 'x' as u32);
    }

    #[test]
    fn test_fill_rect_blends_translucent() {
        let mut buf = FrameBuffer::with_background(4, 4, Rgba::rgb(0, 0, 0));
        let clip = full(&buf);
        buf.fill_rect(Rect::new(0, 0, 4, 4), Rgba::new(255, 255, 255, 128), &clip);

        let bg = buf.get(0, 0).unwrap().bg;
        assert!(bg.r > 100 && bg.r < 160);
    }

    #[test]
    fn test_border_glyphs_in_corners() {
        let mut buf = FrameBuffer::new(5, 4);
        let clip = full(&buf);
        buf.draw_border(Rect::new(0, 0, 5, 4), BorderStyle::Rounded, Rgba::WHITE, &clip);

        assert_eq!(buf.get(0, 0).unwrap().char, '╭' as u32);
        assert_eq!(buf.get(4, 0).unwrap().char, '╮' as u32);
        assert_eq!(buf.get(0, 3).unwrap().char, '╰' as u32);
        assert_eq!(buf.get(4, 3).unwrap().char, '╯' as u32);
        assert_eq!(buf.get(2, 0).unwrap().char, '─' as u32);
        assert_eq!(buf.get(0, 2).unwrap().char, '│' as u32);
    }

    #[test]
    fn test_border_none_draws_nothing() {
        let mut buf = FrameBuffer::new(5, 4);
        let clip = full(&buf);
        let before = buf.clone();
        buf.draw_border(Rect::new(0, 0, 5, 4), BorderStyle::None, Rgba::WHITE, &clip);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_clip_confines_drawing() {
        let mut buf = FrameBuffer::new(10, 3);
        let clip = Rect::new(0, 0, 3, 3);
        buf.draw_str(
            0,
            1,
            "abcdef",
            Rgba::WHITE,
            Rgba::TRANSPARENT,
            Attr::NONE,
            &clip,
        );
        assert_eq!(buf.get(2, 1).unwrap().char, 'c' as u32);
        assert_eq!(buf.get(3, 1), Some(&Cell::default()));
    }

    #[test]
    fn test_dim_rect_mutes_cells() {
        let mut buf = FrameBuffer::with_background(2, 1, Rgba::rgb(200, 200, 200));
        let clip = full(&buf);
        buf.dim_rect(Rect::new(0, 0, 2, 1), Rgba::new(0, 0, 0, 128), &clip);

        let cell = buf.get(0, 0).unwrap();
        assert!(cell.bg.r < 150);
        assert!(cell.attrs.contains(Attr::DIM));
    }
}
