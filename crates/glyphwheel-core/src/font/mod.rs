//! Compiled-in 8x8 glyph bitmaps.
//!
//! Row 0 is the top matrix row; bit 7 is the leftmost column. The letter
//! tables cover the 23-letter Turkish base alphabet, so Q, W, X and the
//! dotted variants are absent.

mod digits;
mod lower;
mod upper;

pub use digits::DIGITS;
pub use lower::LOWERCASE;
pub use upper::UPPERCASE;

/// Rows in one glyph.
pub const GLYPH_ROWS: usize = 8;

/// One 8x8 bitmap; entry `r` is the column mask of row `r`.
pub type Glyph = [u8; GLYPH_ROWS];

/// All-off glyph.
pub const BLANK: Glyph = [0; GLYPH_ROWS];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_have_the_expected_glyph_counts() {
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(UPPERCASE.len(), 23);
        assert_eq!(LOWERCASE.len(), 23);
    }

    #[test]
    fn no_table_entry_is_blank() {
        for table in [DIGITS.as_slice(), UPPERCASE.as_slice(), LOWERCASE.as_slice()] {
            for glyph in table {
                assert_ne!(*glyph, BLANK);
            }
        }
    }

    #[test]
    fn spot_check_digit_zero_bitmap() {
        assert_eq!(
            DIGITS[0],
            [
                0b0011_1100,
                0b0100_0010,
                0b0100_0010,
                0b0100_0010,
                0b0100_0010,
                0b0100_0010,
                0b0100_0010,
                0b0011_1100,
            ]
        );
    }
}
