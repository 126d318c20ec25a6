//! Theme module for bmi-tui
//!
//! Centralized color palette for the navy/teal look, the weight-category
//! color lookup, and the fade blend used by the result animation.

use ratatui::style::Color;

use crate::bmi::WeightCategory;

// ============================================================================
// Background Colors - Navy Palette
// ============================================================================

/// Primary background color (#0a192f)
pub const BG_PRIMARY: Color = Color::Rgb(10, 25, 47);

/// Elevated surface color for cards and inputs (#112240)
pub const BG_ELEVATED: Color = Color::Rgb(17, 34, 64);

/// Highlight background for out-of-range results (#1e3a5f)
pub const BG_HIGHLIGHT: Color = Color::Rgb(30, 58, 95);

/// Subtle border color (#233554)
pub const BORDER_SUBTLE: Color = Color::Rgb(35, 53, 84);

// ============================================================================
// Accent and Text Colors
// ============================================================================

/// Teal accent color (#64ffda)
pub const ACCENT: Color = Color::Rgb(100, 255, 218);

/// Primary text color (#e6f1ff)
pub const TEXT_PRIMARY: Color = Color::Rgb(230, 241, 255);

/// Secondary text color (#ccd6f6)
pub const TEXT_SECONDARY: Color = Color::Rgb(204, 214, 246);

/// Muted text color for placeholders and hints (#8892b0)
pub const TEXT_MUTED: Color = Color::Rgb(136, 146, 176);

/// Screen background for a given weight category. Normal keeps the base
/// navy; the out-of-range categories get the lighter highlight shade.
pub fn category_bg(category: WeightCategory) -> Color {
    match category {
        WeightCategory::Normal => BG_PRIMARY,
        WeightCategory::Underweight | WeightCategory::Overweight => BG_HIGHLIGHT,
    }
}

/// Blend `fg` toward `bg` by `alpha` (0.0 = fully background, 1.0 = fully
/// foreground). Only RGB colors blend; anything else passes through.
pub fn fade_toward(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| -> u8 {
                (f64::from(b) + (f64::from(f) - f64::from(b)) * alpha).round() as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bg_lookup() {
        assert_eq!(category_bg(WeightCategory::Normal), BG_PRIMARY);
        assert_eq!(category_bg(WeightCategory::Underweight), BG_HIGHLIGHT);
        assert_eq!(category_bg(WeightCategory::Overweight), BG_HIGHLIGHT);
    }

    #[test]
    fn test_fade_toward_extremes() {
        assert_eq!(fade_toward(ACCENT, BG_PRIMARY, 0.0), BG_PRIMARY);
        assert_eq!(fade_toward(ACCENT, BG_PRIMARY, 1.0), ACCENT);
    }

    #[test]
    fn test_fade_toward_clamps_alpha() {
        assert_eq!(fade_toward(ACCENT, BG_PRIMARY, 2.5), ACCENT);
        assert_eq!(fade_toward(ACCENT, BG_PRIMARY, -1.0), BG_PRIMARY);
    }

    #[test]
    fn test_fade_toward_midpoint() {
        let mid = fade_toward(Color::Rgb(100, 200, 0), Color::Rgb(0, 100, 100), 0.5);
        assert_eq!(mid, Color::Rgb(50, 150, 50));
    }

    #[test]
    fn test_fade_toward_non_rgb_passthrough() {
        assert_eq!(fade_toward(Color::Cyan, BG_PRIMARY, 0.3), Color::Cyan);
    }
}
