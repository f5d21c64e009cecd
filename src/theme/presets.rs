//! Theme presets.
//!
//! - `terminal` (default) - ANSI colors, respects the user's terminal scheme
//! - `paper` - light look (white page, indigo, violet)
//! - `midnight` - dark counterpart to `paper`

use super::{Theme, ThemeColor};
use crate::types::Rgba;

// =============================================================================
// Terminal Theme (Default)
// =============================================================================

/// Terminal theme - uses ANSI colors to respect the user's terminal scheme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        primary: ThemeColor::Ansi(12),   // bright blue
        secondary: ThemeColor::Ansi(13), // bright magenta
        tertiary: ThemeColor::Ansi(14),  // bright cyan
        accent: ThemeColor::Ansi(11),    // bright yellow
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        text_bright: ThemeColor::Ansi(15),
        background: ThemeColor::Default,
        surface: ThemeColor::Default,
        overlay: ThemeColor::Default,
        border: ThemeColor::Ansi(7),
        border_focus: ThemeColor::Ansi(12),
    }
}

// =============================================================================
// Paper Theme
// =============================================================================

/// Paper - the light design: white page, indigo primary, violet
/// secondary.
pub fn paper() -> Theme {
    Theme {
        name: "paper".to_string(),
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0x4f46e5)),
        secondary: ThemeColor::Rgb(Rgba::from_rgb_int(0x7c3aed)),
        tertiary: ThemeColor::Rgb(Rgba::from_rgb_int(0x0891b2)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0x059669)),
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0x262626)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x737373)),
        text_bright: ThemeColor::Rgb(Rgba::from_rgb_int(0x171717)),
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0xfafafa)),
        surface: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        overlay: ThemeColor::Rgb(Rgba::from_rgb_int(0xffffff)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0xd4d4d4)),
        border_focus: ThemeColor::Rgb(Rgba::from_rgb_int(0x4f46e5)),
    }
}

// =============================================================================
// Midnight Theme
// =============================================================================

/// Midnight - dark counterpart to `paper`.
pub fn midnight() -> Theme {
    Theme {
        name: "midnight".to_string(),
        primary: ThemeColor::Rgb(Rgba::from_rgb_int(0x818cf8)),
        secondary: ThemeColor::Rgb(Rgba::from_rgb_int(0xa78bfa)),
        tertiary: ThemeColor::Rgb(Rgba::from_rgb_int(0x22d3ee)),
        accent: ThemeColor::Rgb(Rgba::from_rgb_int(0x34d399)),
        text: ThemeColor::Rgb(Rgba::from_rgb_int(0xd4d4d8)),
        text_muted: ThemeColor::Rgb(Rgba::from_rgb_int(0x71717a)),
        text_bright: ThemeColor::Rgb(Rgba::from_rgb_int(0xfafafa)),
        background: ThemeColor::Rgb(Rgba::from_rgb_int(0x09090b)),
        surface: ThemeColor::Rgb(Rgba::from_rgb_int(0x18181b)),
        overlay: ThemeColor::Rgb(Rgba::from_rgb_int(0x27272a)),
        border: ThemeColor::Rgb(Rgba::from_rgb_int(0x3f3f46)),
        border_focus: ThemeColor::Rgb(Rgba::from_rgb_int(0x818cf8)),
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// All preset names, in cycle order.
pub fn preset_names() -> &'static [&'static str] {
    &["terminal", "paper", "midnight"]
}

/// Look up a preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "terminal" => Some(terminal()),
        "paper" => Some(paper()),
        "midnight" => Some(midnight()),
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in preset_names() {
            let theme = get_preset(name).unwrap();
            assert_eq!(&theme.name, name);
        }
    }

    #[test]
    fn test_unknown_preset_is_none() {
        assert!(get_preset("dracula-but-wrong").is_none());
    }

    #[test]
    fn test_terminal_respects_user_palette() {
        let theme = terminal();
        assert!(theme.background.resolve().is_terminal_default());
        assert!(theme.text.resolve().is_terminal_default());
    }

    #[test]
    fn test_paper_is_light_midnight_is_dark() {
        let paper_bg = paper().background.resolve();
        let midnight_bg = midnight().background.resolve();
        assert!(paper_bg.r > 200);
        assert!(midnight_bg.r < 40);
    }
}
