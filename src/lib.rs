#![cfg_attr(not(test), no_std)]

//! Build-time configuration shared by the glyphwheel firmware.
//!
//! The firmware has no runtime inputs: the glyph table is chosen here by
//! cargo feature and the tick cadence is fixed.

use glyphwheel_core::font::{self, Glyph};

/// Milliseconds between glyph advances.
pub const TICK_MS: u32 = 1_000;

/// Glyph table selected by the `font-*` cargo features. `font-upper`
/// and `font-lower` take precedence over the default digits table.
pub const ACTIVE_FONT: &[Glyph] = if cfg!(feature = "font-upper") {
    &font::UPPERCASE
} else if cfg!(feature = "font-lower") {
    &font::LOWERCASE
} else {
    &font::DIGITS
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_font_is_always_selected() {
        assert!(!ACTIVE_FONT.is_empty());
    }

    #[cfg(not(any(feature = "font-upper", feature = "font-lower")))]
    #[test]
    fn digits_are_the_default_font() {
        assert_eq!(ACTIVE_FONT.len(), font::DIGITS.len());
        assert_eq!(ACTIVE_FONT[0], font::DIGITS[0]);
    }
}
