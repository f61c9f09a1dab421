// File: crates/mockup-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; measures labels for layout chaining.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::types::FontSpec;

/// Average advance as a fraction of font size, used when no system font resolves.
const FALLBACK_ADVANCE: f32 = 0.55;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"]);
        if font.bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, font: FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(font, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Rendered (width, height) of a single line of text.
    pub fn measure(&self, text: &str, font: FontSpec) -> (f32, f32) {
        if text.is_empty() {
            return (0.0, 0.0);
        }
        let p = self.layout(text, font, skia::Color::from_argb(0, 0, 0, 0));
        // Intrinsic width keeps trailing spaces that `longest_line` trims.
        let width = p.max_intrinsic_width();
        if width > 0.0 {
            (width, p.height())
        } else {
            // No usable font on this host: fall back to a per-character estimate.
            (text.chars().count() as f32 * font.size * FALLBACK_ADVANCE, font.size)
        }
    }

    pub fn measure_width(&self, text: &str, font: FontSpec) -> f32 {
        self.measure(text, font).0
    }

    /// Paint text with its layout box anchored at (x, y) top-left.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: FontSpec, color: skia::Color) {
        let p = self.layout(text, font, color);
        p.paint(canvas, (x, y));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
