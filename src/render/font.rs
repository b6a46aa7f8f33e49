//! Font metrics and glyph generation for panel rendering.
//!
//! Uses the Spleen bitmap font family. Each panel text size maps to a base
//! PSF2 font; the display size reuses the largest face scaled 2x nearest
//! neighbor. Glyphs come back as flat `0`/`1` cell buffers.

use spleen_font::{PSF2Font, FONT_12X24, FONT_6X12, FONT_8X16};

use crate::panel::TextSize;

/// Glyph cell dimensions for each text size step.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    pub char_width: usize,
    pub char_height: usize,
}

impl FontMetrics {
    /// Nutrient rows and small print: Spleen 6x12.
    pub const SMALL: FontMetrics = FontMetrics { char_width: 6, char_height: 12 };

    /// Serving block lines: Spleen 8x16.
    pub const BODY: FontMetrics = FontMetrics { char_width: 8, char_height: 16 };

    /// The `Calories` word: Spleen 12x24.
    pub const HEADING: FontMetrics = FontMetrics { char_width: 12, char_height: 24 };

    /// Title and calories figure: Spleen 12x24 doubled.
    pub const DISPLAY: FontMetrics = FontMetrics { char_width: 24, char_height: 48 };

    pub fn for_size(size: TextSize) -> FontMetrics {
        match size {
            TextSize::Small => Self::SMALL,
            TextSize::Body => Self::BODY,
            TextSize::Heading => Self::HEADING,
            TextSize::Display => Self::DISPLAY,
        }
    }
}

/// Generate the glyph bitmap for a character at the given size.
/// Returns `char_width * char_height` bytes, each 0 (off) or 1 (on).
pub fn generate_glyph(size: TextSize, ch: char) -> Vec<u8> {
    let metrics = FontMetrics::for_size(size);
    let mut glyph = vec![0u8; metrics.char_width * metrics.char_height];

    let (data, base_w, base_h) = match size {
        TextSize::Small => (FONT_6X12, 6, 12),
        TextSize::Body => (FONT_8X16, 8, 16),
        TextSize::Heading | TextSize::Display => (FONT_12X24, 12, 24),
    };

    let mut spleen = PSF2Font::new(data).unwrap();
    let utf8 = ch.to_string();

    match spleen.glyph_for_utf8(utf8.as_bytes()) {
        Some(rows) => {
            let mut base = vec![0u8; base_w * base_h];
            for (y, row) in rows.enumerate() {
                for (x, on) in row.enumerate() {
                    if y < base_h && x < base_w {
                        base[y * base_w + x] = if on { 1 } else { 0 };
                    }
                }
            }
            if metrics.char_width == base_w && metrics.char_height == base_h {
                glyph = base;
            } else {
                scale_bitmap(&base, base_w, base_h, &mut glyph, metrics.char_width, metrics.char_height);
            }
        }
        None => {
            // unknown characters render as a box outline
            draw_box(&mut glyph, metrics.char_width, metrics.char_height);
        }
    }

    glyph
}

/// Scale a bitmap from src dimensions to dst dimensions using nearest neighbor.
fn scale_bitmap(src: &[u8], src_w: usize, src_h: usize, dst: &mut [u8], dst_w: usize, dst_h: usize) {
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            let sy = dy * src_h / dst_h;
            let src_idx = sy * src_w + sx;
            let dst_idx = dy * dst_w + dx;
            if src_idx < src.len() && dst_idx < dst.len() {
                dst[dst_idx] = src[src_idx];
            }
        }
    }
}

/// Draw a box outline in the glyph buffer.
fn draw_box(glyph: &mut [u8], width: usize, height: usize) {
    for x in 0..width {
        glyph[x] = 1;
        glyph[(height - 1) * width + x] = 1;
    }
    for y in 0..height {
        glyph[y * width] = 1;
        glyph[y * width + width - 1] = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_match_the_size_steps() {
        assert_eq!(FontMetrics::for_size(TextSize::Small).char_width, 6);
        assert_eq!(FontMetrics::for_size(TextSize::Body).char_height, 16);
        assert_eq!(FontMetrics::for_size(TextSize::Display).char_width, 24);
        assert_eq!(FontMetrics::for_size(TextSize::Display).char_height, 48);
    }

    #[test]
    fn glyphs_have_ink() {
        for size in [TextSize::Small, TextSize::Body, TextSize::Heading, TextSize::Display] {
            let metrics = FontMetrics::for_size(size);
            let glyph = generate_glyph(size, 'N');
            assert_eq!(glyph.len(), metrics.char_width * metrics.char_height);
            assert!(glyph.iter().any(|&p| p != 0), "no ink at {size:?}");
        }
    }

    #[test]
    fn label_text_characters_are_covered() {
        let mut font = PSF2Font::new(FONT_6X12).unwrap();
        for ch in "Nutrition Facts %DV*()0123456789.,-gmcIU".chars() {
            let s = ch.to_string();
            assert!(
                font.glyph_for_utf8(s.as_bytes()).is_some(),
                "missing glyph for {ch:?}"
            );
        }
    }

    #[test]
    fn display_size_doubles_the_heading_glyph() {
        let heading = generate_glyph(TextSize::Heading, 'C');
        let display = generate_glyph(TextSize::Display, 'C');
        // each heading pixel becomes a 2x2 block
        for y in 0..24 {
            for x in 0..12 {
                let expected = heading[y * 12 + x];
                assert_eq!(display[(y * 2) * 24 + x * 2], expected);
                assert_eq!(display[(y * 2 + 1) * 24 + x * 2 + 1], expected);
            }
        }
    }
}
