//! Theme system.
//!
//! Semantic color definitions with support for ANSI and RGB colors. ANSI
//! themes respect the terminal's own palette; RGB themes reproduce a fixed
//! look regardless of where the page runs.
//!
//! The active theme is a signal: views read resolved colors each frame, so
//! switching themes repaints live.

use std::cell::RefCell;

use spark_signals::{Signal, signal};

use crate::types::Rgba;

pub mod presets;

pub use presets::{get_preset, preset_names};

// =============================================================================
// ThemeColor
// =============================================================================

/// Theme color can be:
/// - `Default`: Terminal's default color
/// - `Ansi(n)`: ANSI palette index (0-255)
/// - `Rgb(rgba)`: Explicit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Default,
    Ansi(u8),
    Rgb(Rgba),
}

impl ThemeColor {
    /// Resolve to an [`Rgba`] the renderer understands.
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
        }
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::Default
    }
}

impl From<u8> for ThemeColor {
    fn from(index: u8) -> Self {
        Self::Ansi(index)
    }
}

impl From<Rgba> for ThemeColor {
    fn from(color: Rgba) -> Self {
        Self::Rgb(color)
    }
}

impl From<u32> for ThemeColor {
    fn from(rgb: u32) -> Self {
        Self::Rgb(Rgba::from_rgb_int(rgb))
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Theme definition with the semantic colors the views read.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name (e.g. "terminal", "paper").
    pub name: String,

    /// Primary brand color.
    pub primary: ThemeColor,
    /// Secondary accent color.
    pub secondary: ThemeColor,
    /// Tertiary color for variety.
    pub tertiary: ThemeColor,
    /// Accent for highlights.
    pub accent: ThemeColor,

    /// Primary text color.
    pub text: ThemeColor,
    /// Muted/secondary text.
    pub text_muted: ThemeColor,
    /// Bright/emphasized text.
    pub text_bright: ThemeColor,

    /// Primary background.
    pub background: ThemeColor,
    /// Surface (cards, panels).
    pub surface: ThemeColor,
    /// Overlay (the modal card).
    pub overlay: ThemeColor,

    /// Default border color.
    pub border: ThemeColor,
    /// Focused border color.
    pub border_focus: ThemeColor,
}

impl Default for Theme {
    fn default() -> Self {
        presets::terminal()
    }
}

/// A theme with every [`ThemeColor`] resolved to [`Rgba`].
///
/// Computed once per frame so draw code never re-resolves per cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub tertiary: Rgba,
    pub accent: Rgba,
    pub text: Rgba,
    pub text_muted: Rgba,
    pub text_bright: Rgba,
    pub background: Rgba,
    pub surface: Rgba,
    pub overlay: Rgba,
    pub border: Rgba,
    pub border_focus: Rgba,
}

impl Palette {
    /// Accent rotation for pillar cards and tag pills.
    pub fn accent_cycle(&self, index: usize) -> Rgba {
        match index % 3 {
            0 => self.secondary,
            1 => self.tertiary,
            _ => self.primary,
        }
    }
}

impl Theme {
    /// Resolve every slot.
    pub fn palette(&self) -> Palette {
        Palette {
            primary: self.primary.resolve(),
            secondary: self.secondary.resolve(),
            tertiary: self.tertiary.resolve(),
            accent: self.accent.resolve(),
            text: self.text.resolve(),
            text_muted: self.text_muted.resolve(),
            text_bright: self.text_bright.resolve(),
            background: self.background.resolve(),
            surface: self.surface.resolve(),
            overlay: self.overlay.resolve(),
            border: self.border.resolve(),
            border_focus: self.border_focus.resolve(),
        }
    }
}

// =============================================================================
// Active theme state
// =============================================================================

thread_local! {
    static ACTIVE_THEME: Signal<Theme> = signal(Theme::default());
    static THEME_CURSOR: RefCell<usize> = const { RefCell::new(0) };
}

/// Get the active theme (reactive read).
pub fn active_theme() -> Theme {
    ACTIVE_THEME.with(|s| s.get())
}

/// Replace the active theme with a preset by name.
///
/// Unknown names are ignored - the page never loses its theme over a typo.
pub fn set_theme(name: &str) -> bool {
    match get_preset(name) {
        Some(theme) => {
            THEME_CURSOR.with(|c| {
                if let Some(pos) = preset_names().iter().position(|n| *n == name) {
                    *c.borrow_mut() = pos;
                }
            });
            ACTIVE_THEME.with(|s| s.set(theme));
            true
        }
        None => false,
    }
}

/// Switch to the next preset in order. Returns the new theme name.
pub fn cycle_theme() -> &'static str {
    let names = preset_names();
    let next = THEME_CURSOR.with(|c| {
        let mut cursor = c.borrow_mut();
        *cursor = (*cursor + 1) % names.len();
        *cursor
    });
    let name = names[next];
    if let Some(theme) = get_preset(name) {
        ACTIVE_THEME.with(|s| s.set(theme));
    }
    name
}

/// Reset to the default theme (for testing).
pub fn reset_theme_state() {
    THEME_CURSOR.with(|c| *c.borrow_mut() = 0);
    ACTIVE_THEME.with(|s| s.set(Theme::default()));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() {
        reset_theme_state();
    }

    #[test]
    fn test_theme_color_resolve() {
        assert!(ThemeColor::Default.resolve().is_terminal_default());
        assert_eq!(ThemeColor::Ansi(12).resolve().ansi_index(), 12);
        assert_eq!(
            ThemeColor::Rgb(Rgba::rgb(1, 2, 3)).resolve(),
            Rgba::rgb(1, 2, 3)
        );
    }

    #[test]
    fn test_theme_color_from_u32() {
        let color: ThemeColor = 0xff0000u32.into();
        assert_eq!(color.resolve(), Rgba::rgb(255, 0, 0));
    }

    #[test]
    fn test_default_theme_is_terminal() {
        setup();
        assert_eq!(active_theme().name, "terminal");
    }

    #[test]
    fn test_set_theme_known_and_unknown() {
        setup();

        assert!(set_theme("paper"));
        assert_eq!(active_theme().name, "paper");

        // Unknown name leaves the theme untouched
        assert!(!set_theme("does-not-exist"));
        assert_eq!(active_theme().name, "paper");
    }

    #[test]
    fn test_cycle_visits_every_preset() {
        setup();

        let mut seen = vec![active_theme().name.clone()];
        for _ in 1..preset_names().len() {
            cycle_theme();
            seen.push(active_theme().name.clone());
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), preset_names().len());

        // One more cycle wraps back to the start
        cycle_theme();
        assert_eq!(active_theme().name, "terminal");
    }

    #[test]
    fn test_palette_accent_cycle_wraps() {
        setup();
        let palette = active_theme().palette();
        assert_eq!(palette.accent_cycle(0), palette.accent_cycle(3));
    }
}
