// File: crates/mockup-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic composition of pixel-aligned opaque blocks to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else compares decoded pixels against the committed snapshot; a missing snapshot fails.
// - Anti-aliased shapes are checked for run-to-run determinism only.

use mockup_core::palette::rgb;
use mockup_core::widgets::{icon_placeholder, rounded_rect};
use mockup_core::{arrow, connector, Canvas, Palette, Point, Rect};

fn render_blocks() -> Vec<u8> {
    let palette = Palette::professional();
    let mut canvas = Canvas::new(64, 48, palette.bg).expect("canvas");
    // Integer edges and opaque colours only, so every pixel is exact.
    canvas.fill_rect(Rect::from_ltwh(8, 8, 24, 16), rgb(0x1976D2));
    canvas.fill_rect(Rect::from_ltwh(32, 8, 24, 16), rgb(0x4CAF50));
    canvas.fill_rect(Rect::from_ltwh(8, 28, 48, 12), rgb(0xF44336));
    canvas.fill_rect(Rect::from_ltwh(20, 20, 20, 16), rgb(0xFF9800));
    canvas.encode_png().expect("encode")
}

fn render_shapes() -> Vec<u8> {
    let palette = Palette::professional();
    let mut canvas = Canvas::new(240, 160, palette.bg).expect("canvas");
    rounded_rect(&mut canvas, Rect::from_ltwh(10, 10, 100, 60), 8.0, Some(palette.white), Some(palette.border), 1.0);
    rounded_rect(&mut canvas, Rect::from_ltwh(130, 10, 100, 60), 12.0, Some(palette.info_light), Some(palette.info), 2.0);
    icon_placeholder(&mut canvas, &palette, Point::new(20, 100), 20, true);
    icon_placeholder(&mut canvas, &palette, Point::new(50, 100), 20, false);
    arrow(&mut canvas, Point::new(110, 40), Point::new(130, 40), palette.secondary);
    connector(
        &mut canvas,
        &[Point::new(60, 70), Point::new(60, 140), Point::new(180, 140), Point::new(180, 70)],
        palette.text_secondary,
        true,
    );
    canvas.encode_png().expect("encode")
}

#[test]
fn golden_blocks() {
    let bytes = render_blocks();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("blocks.png");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    let want = std::fs::read(&snap_path)
        .unwrap_or_else(|e| panic!("missing snapshot {} ({e}); set UPDATE_SNAPSHOTS=1 to bless", snap_path.display()));
    // Compare decoded pixel buffers to avoid PNG encoder variance
    let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
    let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
    assert_eq!(got_img.dimensions(), want_img.dimensions());
    assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
}

#[test]
fn same_scene_renders_identical_bytes() {
    assert_eq!(render_shapes(), render_shapes());
}
