//! Bitmap Text Metrics
//!
//! Every label in the menu is drawn with a procedural 5x7 bitmap font scaled by
//! an integer factor. This module owns the glyph table and the metrics, so
//! layout can measure text without a renderer. Backends rasterize the rows
//! returned by [`glyph_rows`] however they like.

/// Glyph cell width in font pixels
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph cell height in font pixels
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance per character (glyph + 1 pixel spacing)
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// A scaled instance of the 5x7 bitmap font
///
/// # Example
///
/// ```rust
/// use gamepad_menu::text::BitmapFont;
///
/// let font = BitmapFont::new(2);
/// assert_eq!(font.text_size("PLAY"), (48, 14));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Creates a font at the given scale (clamped to at least 1)
    pub fn new(scale: u32) -> Self {
        BitmapFont {
            scale: scale.max(1),
        }
    }

    /// Picks the scale whose line height is closest to `tall` pixels
    pub fn from_tall(tall: i32) -> Self {
        let scale = (tall as f32 / GLYPH_HEIGHT as f32).round();
        BitmapFont::new(if scale.is_finite() && scale > 1.0 { scale as u32 } else { 1 })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Height of one line of text in pixels
    pub fn line_height(&self) -> i32 {
        (GLYPH_HEIGHT * self.scale) as i32
    }

    /// Horizontal distance between consecutive characters in pixels
    pub fn advance(&self) -> i32 {
        (GLYPH_ADVANCE * self.scale) as i32
    }

    /// Measures a line of text. Empty text measures `(0, 0)`.
    pub fn text_size(&self, text: &str) -> (i32, i32) {
        let chars = text.chars().count() as i32;
        if chars == 0 {
            return (0, 0);
        }
        (chars * self.advance(), self.line_height())
    }
}

impl Default for BitmapFont {
    fn default() -> Self {
        BitmapFont::new(1)
    }
}

/// Returns the seven row bitmasks for a character (bit 4 = leftmost column)
///
/// Letters are case-insensitive. Unknown characters render as a full block so
/// missing glyphs are obvious on screen.
pub fn glyph_rows(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '_' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '\'' => [0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => [0; 7],
        _ => [0b11111; 7],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_size_scales_with_font() {
        assert_eq!(BitmapFont::new(1).text_size("AB"), (12, 7));
        assert_eq!(BitmapFont::new(3).text_size("AB"), (36, 21));
    }

    #[test]
    fn test_empty_text_has_no_extent() {
        assert_eq!(BitmapFont::new(4).text_size(""), (0, 0));
    }

    #[test]
    fn test_from_tall_rounds_to_nearest_scale() {
        assert_eq!(BitmapFont::from_tall(14).scale(), 2);
        assert_eq!(BitmapFont::from_tall(24).scale(), 3);
        assert_eq!(BitmapFont::from_tall(0).scale(), 1);
        assert_eq!(BitmapFont::from_tall(-20).scale(), 1);
    }

    #[test]
    fn test_glyphs_are_case_insensitive() {
        assert_eq!(glyph_rows('q'), glyph_rows('Q'));
        assert_eq!(glyph_rows(' '), [0; 7]);
        assert_eq!(glyph_rows('~'), [0b11111; 7]);
    }
}
