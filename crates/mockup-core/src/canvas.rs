// File: crates/mockup-core/src/canvas.rs
// Summary: Owned CPU raster canvas (Skia surface + text shaper) and PNG encoding.

use skia_safe as skia;

use crate::error::{RenderError, Result};
use crate::geometry::{clamp, Point, Rect};
use crate::text::TextShaper;
use crate::types::FontSpec;

/// Single-use raster target: created per image, encoded, then dropped.
pub struct Canvas {
    surface: skia::Surface,
    text: TextShaper,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Create a `width` x `height` surface cleared to `background`.
    pub fn new(width: i32, height: i32, background: skia::Color) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(RenderError::Surface { width, height })?;
        surface.canvas().clear(background);
        tracing::debug!(width, height, "created raster canvas");
        Ok(Self { surface, text: TextShaper::new(), width, height })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn bounds(&self) -> Rect { Rect::from_ltwh(0, 0, self.width, self.height) }

    // ---- shapes ----------------------------------------------------------------

    pub fn fill_rect(&mut self, rect: Rect, color: skia::Color) {
        let paint = fill_paint(color);
        self.surface.canvas().draw_rect(rect.to_skia(), &paint);
    }

    pub fn fill_rrect(&mut self, rect: Rect, radius: f32, color: skia::Color) {
        let rrect = rounded(rect.to_skia(), radius);
        let paint = fill_paint(color);
        self.surface.canvas().draw_rrect(rrect, &paint);
    }

    /// Outline kept inside `rect`, the way a pixel-box outline is drawn.
    pub fn stroke_rrect(&mut self, rect: Rect, radius: f32, color: skia::Color, width: f32) {
        let half = width * 0.5;
        let inner = rect.to_skia().with_inset((half, half));
        let rrect = rounded(inner, (radius - half).max(0.0));
        let paint = stroke_paint(color, width);
        self.surface.canvas().draw_rrect(rrect, &paint);
    }

    pub fn fill_oval(&mut self, rect: Rect, color: skia::Color) {
        let paint = fill_paint(color);
        self.surface.canvas().draw_oval(rect.to_skia(), &paint);
    }

    pub fn stroke_oval(&mut self, rect: Rect, color: skia::Color, width: f32) {
        let half = width * 0.5;
        let paint = stroke_paint(color, width);
        self.surface.canvas().draw_oval(rect.to_skia().with_inset((half, half)), &paint);
    }

    pub fn line(&mut self, from: Point, to: Point, color: skia::Color, width: f32) {
        let paint = stroke_paint(color, width);
        self.surface.canvas().draw_line(from, to, &paint);
    }

    /// Open path through `points`; fewer than two points draws nothing.
    pub fn polyline(&mut self, points: &[Point], color: skia::Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }
        let mut paint = stroke_paint(color, width);
        paint.set_stroke_join(skia::paint::Join::Miter);
        self.surface.canvas().draw_path(&path, &paint);
    }

    /// Closed filled polygon; fewer than three points draws nothing.
    pub fn fill_polygon(&mut self, points: &[Point], color: skia::Color) {
        if points.len() < 3 {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to(points[0]);
        for &p in &points[1..] {
            path.line_to(p);
        }
        path.close();
        let paint = fill_paint(color);
        self.surface.canvas().draw_path(&path, &paint);
    }

    // ---- text ------------------------------------------------------------------

    /// Draw `text` with its top-left corner at `at`.
    pub fn text(&mut self, at: Point, text: &str, font: FontSpec, color: skia::Color) {
        if text.is_empty() {
            return;
        }
        let canvas = self.surface.canvas();
        self.text.draw_top_left(canvas, text, at.x as f32, at.y as f32, font, color);
    }

    /// Rendered width in whole pixels.
    pub fn text_width(&self, text: &str, font: FontSpec) -> i32 {
        self.text.measure_width(text, font).round() as i32
    }

    /// Rendered (width, height) in whole pixels.
    pub fn text_size(&self, text: &str, font: FontSpec) -> (i32, i32) {
        let (w, h) = self.text.measure(text, font);
        (w.round() as i32, h.round() as i32)
    }

    // ---- output ----------------------------------------------------------------

    /// Snapshot the surface and encode it as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode and write a PNG at `path`, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read back unpremultiplied RGBA8 pixels, row-major, stride `width * 4`.
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok(pixels)
    }
}

// ---- helpers ----------------------------------------------------------------

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width.max(1.0));
    paint.set_color(color);
    paint
}

/// Radius is clamped to half the shorter side so corners never overlap.
fn rounded(rect: skia::Rect, radius: f32) -> skia::RRect {
    let max_r = (rect.width().min(rect.height()) * 0.5).max(0.0);
    let r = clamp(radius, 0.0, max_r);
    skia::RRect::new_rect_xy(rect, r, r)
}
