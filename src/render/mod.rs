//! # Panel Rasterizer
//!
//! Renders projected panels to grayscale pixel buffers and encodes them as
//! PNG images for the live preview.
//!
//! ## Architecture
//!
//! ```text
//! LabelView → Panel (rows) → PanelRenderer → GrayImage → PNG bytes
//!                                 ↓
//!                           Process each row:
//!                           - Draw text with bitmap fonts (bold = double strike)
//!                           - Draw horizontal rules at their weight and shade
//!                           - Wrap and justify the footnote
//!                           - Close the black frame around the finished panel
//! ```
//!
//! All layout constants are in base pixels and multiplied by an integer
//! scale, so the preview and the high resolution export produce the same
//! layout at different densities.
//!
//! ## Example
//!
//! ```
//! use etiqueta::label::NutritionLabel;
//! use etiqueta::render::render_preview_png;
//!
//! let label = NutritionLabel::new("Granola Bar");
//! let png_bytes = render_preview_png(&label.view()).unwrap();
//! ```

mod font;

pub use font::{FontMetrics, generate_glyph};

use std::collections::HashMap;

use image::{GrayImage, Luma};

use crate::error::EtiquetaError;
use crate::label::LabelView;
use crate::panel::{Panel, PanelRow, RuleWeight, Segment, TextSize};

/// Panel width before scaling, in pixels.
pub const BASE_WIDTH: usize = 400;

/// Scale used for the on-screen preview image.
pub const PREVIEW_SCALE: usize = 2;

// Base-pixel layout constants, multiplied by the render scale.
const FRAME: usize = 3;
const PADDING: usize = 5;
const INDENT_STEP: usize = 12;
const ROW_PADDING: usize = 2;
const SEGMENT_GAP: usize = 4;
const RULE_GAP: usize = 2;

const WHITE: u8 = 0xFF;
const BLACK: u8 = 0x00;
const RULE_GRAY: u8 = 0xCC;

/// Thickness in base pixels and shade for each rule weight.
fn rule_style(weight: RuleWeight) -> (usize, u8) {
    match weight {
        RuleWeight::Hairline => (1, RULE_GRAY),
        RuleWeight::Light => (2, RULE_GRAY),
        RuleWeight::Thin => (1, BLACK),
        RuleWeight::Medium => (5, BLACK),
        RuleWeight::Thick => (6, BLACK),
        RuleWeight::Heavy => (10, BLACK),
    }
}

/// Rasterizer for panel row programs.
pub struct PanelRenderer {
    /// Canvas width in device pixels (base width times scale)
    width: usize,
    /// Integer scale applied to every layout constant and glyph
    scale: usize,
    /// Luminance buffer, 255 = white
    buffer: Vec<u8>,
    height: usize,
    /// Y cursor, top of the next row
    y: usize,
    glyph_cache: HashMap<(TextSize, char), Vec<u8>>,
}

impl PanelRenderer {
    /// Create a renderer at the given integer scale (clamped to at least 1).
    pub fn new(scale: usize) -> Self {
        let scale = scale.max(1);
        let width = BASE_WIDTH * scale;
        let initial_height = 100 * scale;

        Self {
            width,
            scale,
            buffer: vec![WHITE; width * initial_height],
            height: initial_height,
            y: (FRAME + PADDING) * scale,
            glyph_cache: HashMap::new(),
        }
    }

    /// Ensure the buffer has room for the given y position.
    fn ensure_height(&mut self, y: usize) {
        let needed_height = y + 1;
        if needed_height > self.height {
            let new_height = needed_height.max(self.height + 100 * self.scale);
            self.buffer.resize(self.width * new_height, WHITE);
            self.height = new_height;
        }
    }

    fn set_pixel(&mut self, x: usize, y: usize, shade: u8) {
        if x >= self.width {
            return;
        }
        self.ensure_height(y);
        self.buffer[y * self.width + x] = shade;
    }

    /// Left edge of the content area (inside frame and padding).
    fn inner_left(&self) -> usize {
        (FRAME + PADDING) * self.scale
    }

    /// Width of the content area.
    fn inner_width(&self) -> usize {
        self.width - 2 * (FRAME + PADDING) * self.scale
    }

    /// Rasterize the panel and return the finished image.
    pub fn render(&mut self, panel: &Panel) -> GrayImage {
        for row in panel.iter() {
            self.process_row(row);
        }

        let height = self.finish();
        let mut image = GrayImage::new(self.width as u32, height as u32);
        for y in 0..height {
            for x in 0..self.width {
                let shade = self.buffer.get(y * self.width + x).copied().unwrap_or(WHITE);
                image.put_pixel(x as u32, y as u32, Luma([shade]));
            }
        }
        image
    }

    fn process_row(&mut self, row: &PanelRow) {
        match row {
            PanelRow::Centered(segment) => self.draw_centered(segment),
            PanelRow::Split { indent, left, right } => {
                self.draw_split(*indent, left, right.as_ref());
            }
            PanelRow::Rule(weight) => self.draw_rule(*weight),
            PanelRow::Footnote(text) => self.draw_footnote(text),
        }
    }

    fn draw_centered(&mut self, segment: &Segment) {
        let pad = ROW_PADDING * self.scale;
        let text_width = self.text_width(&segment.text, segment.size);
        let x = self.inner_left() + self.inner_width().saturating_sub(text_width) / 2;
        let height = self.draw_text(x, self.y + pad, &segment.text, segment.size, segment.bold);
        self.y += height + pad * 2;
    }

    fn draw_split(&mut self, indent: u8, left: &[Segment], right: Option<&Segment>) {
        let pad = ROW_PADDING * self.scale;
        let row_height = left
            .iter()
            .chain(right)
            .map(|segment| FontMetrics::for_size(segment.size).char_height)
            .max()
            .unwrap_or(FontMetrics::SMALL.char_height)
            * self.scale;
        let top = self.y + pad;

        let mut x = self.inner_left() + indent as usize * INDENT_STEP * self.scale;
        for segment in left {
            let seg_height = FontMetrics::for_size(segment.size).char_height * self.scale;
            let text_width = self.text_width(&segment.text, segment.size);
            // segments share the bottom edge of the row
            self.draw_text(x, top + row_height - seg_height, &segment.text, segment.size, segment.bold);
            x += text_width + SEGMENT_GAP * self.scale;
        }

        if let Some(segment) = right {
            let seg_height = FontMetrics::for_size(segment.size).char_height * self.scale;
            let text_width = self.text_width(&segment.text, segment.size);
            let x = self.inner_left() + self.inner_width().saturating_sub(text_width);
            self.draw_text(x, top + row_height - seg_height, &segment.text, segment.size, segment.bold);
        }

        self.y += row_height + pad * 2;
    }

    fn draw_rule(&mut self, weight: RuleWeight) {
        let (px, shade) = rule_style(weight);
        let height = px * self.scale;
        let left = self.inner_left();
        let right = left + self.inner_width();

        self.ensure_height(self.y + height);
        for y in self.y..self.y + height {
            for x in left..right {
                self.set_pixel(x, y, shade);
            }
        }

        self.y += height + RULE_GAP * self.scale;
    }

    /// Word wrap the footnote at small size and justify every full line.
    fn draw_footnote(&mut self, text: &str) {
        let pad = ROW_PADDING * self.scale;
        let metrics = FontMetrics::SMALL;
        let char_width = metrics.char_width * self.scale;
        let line_height = metrics.char_height * self.scale;
        let max_width = self.inner_width();
        let lines = wrap_words(text, max_width / char_width.max(1));

        let mut y = self.y + pad;
        for (i, words) in lines.iter().enumerate() {
            let text_width: usize =
                words.iter().map(|word| word.chars().count() * char_width).sum();
            let gaps = words.len().saturating_sub(1);
            let last_line = i + 1 == lines.len();

            let (gap_width, mut extra) = if last_line || gaps == 0 || text_width >= max_width {
                (char_width, 0)
            } else {
                let space = max_width - text_width;
                (space / gaps, space % gaps)
            };

            let mut x = self.inner_left();
            for word in words {
                self.draw_text(x, y, word, TextSize::Small, false);
                x += word.chars().count() * char_width + gap_width;
                if extra > 0 {
                    x += 1;
                    extra -= 1;
                }
            }

            y += line_height + self.scale;
        }

        self.y = y + pad;
    }

    /// Draw text at the given position. Returns the drawn height.
    fn draw_text(&mut self, x: usize, y: usize, text: &str, size: TextSize, bold: bool) -> usize {
        let metrics = FontMetrics::for_size(size);
        let advance = metrics.char_width * self.scale;
        self.ensure_height(y + metrics.char_height * self.scale);

        let mut cx = x;
        for ch in text.chars() {
            self.draw_char(cx, y, ch, size, bold);
            cx += advance;
        }

        metrics.char_height * self.scale
    }

    fn draw_char(&mut self, x: usize, y: usize, ch: char, size: TextSize, bold: bool) {
        let metrics = FontMetrics::for_size(size);
        let glyph = self.get_glyph(size, ch);

        for gy in 0..metrics.char_height {
            for gx in 0..metrics.char_width {
                let idx = gy * metrics.char_width + gx;
                if glyph.get(idx).copied().unwrap_or(0) == 0 {
                    continue;
                }

                for sy in 0..self.scale {
                    for sx in 0..self.scale {
                        let px = x + gx * self.scale + sx;
                        let py = y + gy * self.scale + sy;
                        self.set_pixel(px, py, BLACK);
                        if bold {
                            // double strike, one base pixel to the right
                            self.set_pixel(px + self.scale, py, BLACK);
                        }
                    }
                }
            }
        }
    }

    /// Get or generate a glyph for the given size and character.
    fn get_glyph(&mut self, size: TextSize, ch: char) -> Vec<u8> {
        let key = (size, ch);
        if let Some(glyph) = self.glyph_cache.get(&key) {
            return glyph.to_vec();
        }

        let glyph = generate_glyph(size, ch);
        self.glyph_cache.insert(key, glyph.clone());
        glyph
    }

    fn text_width(&self, text: &str, size: TextSize) -> usize {
        text.chars().count() * FontMetrics::for_size(size).char_width * self.scale
    }

    /// Add the bottom padding, draw the frame, and return the final height.
    fn finish(&mut self) -> usize {
        let frame = FRAME * self.scale;
        let total = self.y + PADDING * self.scale + frame;
        self.ensure_height(total);

        for y in 0..total {
            let edge_row = y < frame || y >= total - frame;
            for x in 0..self.width {
                if edge_row || x < frame || x >= self.width - frame {
                    self.buffer[y * self.width + x] = BLACK;
                }
            }
        }

        total
    }
}

/// Greedy word wrap against a per-line character budget.
fn wrap_words(text: &str, max_chars: usize) -> Vec<Vec<&str>> {
    let mut lines: Vec<Vec<&str>> = Vec::new();
    let mut line: Vec<&str> = Vec::new();
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if line.is_empty() { len } else { used + 1 + len };
        if !line.is_empty() && needed > max_chars {
            lines.push(std::mem::take(&mut line));
            used = len;
        } else {
            used = needed;
        }
        line.push(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

/// Rasterize a label view at the given integer scale.
pub fn render_image(view: &LabelView, scale: usize) -> GrayImage {
    let panel = Panel::project(view);
    let mut renderer = PanelRenderer::new(scale);
    renderer.render(&panel)
}

/// Rasterize a label view at preview scale and encode it as PNG.
pub fn render_preview_png(view: &LabelView) -> Result<Vec<u8>, EtiquetaError> {
    encode_png(&render_image(view, PREVIEW_SCALE))
}

/// Encode a grayscale image as PNG bytes.
pub fn encode_png(image: &GrayImage) -> Result<Vec<u8>, EtiquetaError> {
    use image::ImageEncoder;

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::L8,
        )
        .map_err(|e: image::ImageError| EtiquetaError::Render(e.to_string()))?;

    Ok(png_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::NutritionLabel;

    fn sample_view() -> LabelView {
        let mut label = NutritionLabel::new("Granola Bar");
        label.serving.calories = "190".to_string();
        label.view()
    }

    #[test]
    fn canvas_width_follows_the_scale() {
        let image = render_image(&sample_view(), 1);
        assert_eq!(image.width(), BASE_WIDTH as u32);

        let image = render_image(&sample_view(), 3);
        assert_eq!(image.width(), (BASE_WIDTH * 3) as u32);
    }

    #[test]
    fn layout_scales_linearly() {
        let small = render_image(&sample_view(), 1);
        let large = render_image(&sample_view(), 2);
        assert_eq!(large.width(), small.width() * 2);
        assert_eq!(large.height(), small.height() * 2);
    }

    #[test]
    fn frame_corners_are_black_and_interior_is_white() {
        let image = render_image(&sample_view(), 1);
        let (w, h) = (image.width(), image.height());

        assert_eq!(image.get_pixel(0, 0).0[0], BLACK);
        assert_eq!(image.get_pixel(w - 1, 0).0[0], BLACK);
        assert_eq!(image.get_pixel(0, h - 1).0[0], BLACK);
        assert_eq!(image.get_pixel(w - 1, h - 1).0[0], BLACK);

        // just inside the frame sits the white padding band
        assert_eq!(image.get_pixel(4, 4).0[0], WHITE);
    }

    #[test]
    fn panel_uses_black_ink_and_gray_rules() {
        let image = render_image(&sample_view(), 1);
        let shades: std::collections::HashSet<u8> =
            image.as_raw().iter().copied().collect();

        assert!(shades.contains(&BLACK));
        assert!(shades.contains(&WHITE));
        assert!(shades.contains(&RULE_GRAY), "no gray separator rules drawn");
    }

    #[test]
    fn heavy_rule_spans_the_content_width() {
        let image = render_image(&sample_view(), 1);
        let inner_left = (FRAME + PADDING) as u32;
        let inner_right = image.width() - inner_left;

        // some interior row is solid black across the content area but
        // white in the padding band, which only a rule can produce
        let mut found = false;
        for y in (FRAME + PADDING) as u32..image.height() - (FRAME + PADDING) as u32 {
            let solid = (inner_left..inner_right).all(|x| image.get_pixel(x, y).0[0] == BLACK);
            let padded = image.get_pixel(FRAME as u32 + 1, y).0[0] == WHITE;
            if solid && padded {
                found = true;
                break;
            }
        }
        assert!(found, "no full width rule found");
    }

    #[test]
    fn preview_png_has_the_png_signature() {
        let png = render_preview_png(&sample_view()).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn wrap_respects_the_character_budget() {
        let lines = wrap_words("not a significant source of other nutrients", 16);
        assert!(lines.len() > 1);
        for line in &lines {
            let chars: usize = line.iter().map(|w| w.chars().count()).sum();
            let width = chars + line.len() - 1;
            assert!(width <= 16, "line too wide: {line:?}");
        }
    }

    #[test]
    fn wrap_keeps_word_order() {
        let lines = wrap_words("a bb ccc dddd", 6);
        let flat: Vec<&str> = lines.into_iter().flatten().collect();
        assert_eq!(flat, vec!["a", "bb", "ccc", "dddd"]);
    }
}
