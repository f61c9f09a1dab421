// File: crates/mockup-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs and checking decoded dimensions.

use mockup_core::widgets::{button, card, rounded_rect};
use mockup_core::{ButtonVariant, Canvas, Palette, Point, Rect, RenderError};

#[test]
fn render_smoke_png() {
    let palette = Palette::professional();
    let mut canvas = Canvas::new(320, 200, palette.bg).expect("canvas");
    card(&mut canvas, &palette, Rect::from_ltwh(16, 16, 288, 120), Some("Card"));
    button(&mut canvas, &palette, Point::new(24, 150), "Save", (100, 36), ButtonVariant::Primary);

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    canvas.save_png(&out).expect("save should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = canvas.encode_png().expect("encode bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn png_dimensions_match_request_for_any_radius() {
    let palette = Palette::professional();
    for &(w, h) in &[(1, 1), (64, 48), (400, 800), (1200, 800)] {
        for &radius in &[0.0f32, 4.0, 8.0, 500.0] {
            let mut canvas = Canvas::new(w, h, palette.white).expect("canvas");
            rounded_rect(
                &mut canvas,
                Rect::from_ltwh(-10, -10, w + 20, h + 20),
                radius,
                Some(palette.primary),
                Some(palette.border),
                2.0,
            );
            let bytes = canvas.encode_png().expect("encode");
            let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
            assert_eq!((img.width(), img.height()), (w as u32, h as u32), "radius {radius}");
        }
    }
}

#[test]
fn rejects_empty_canvas() {
    let err = Canvas::new(0, 10, Palette::professional().bg).err().expect("should fail");
    assert!(matches!(err, RenderError::InvalidSize { width: 0, height: 10 }));
}
