// File: crates/mockup-core/tests/batch.rs
// Purpose: Best-effort batch rendering: failures are reported and skipped, the rest are written.

use mockup_core::widgets::card;
use mockup_core::{render_batch, Canvas, MockupFn, Palette, Rect, RenderError, Result};

fn ok_card(palette: &Palette) -> Result<Canvas> {
    let mut c = Canvas::new(200, 120, palette.bg)?;
    card(&mut c, palette, Rect::from_ltwh(10, 10, 180, 100), Some("Card"));
    Ok(c)
}

fn broken(_palette: &Palette) -> Result<Canvas> {
    Err(RenderError::mockup("broken", "sample data missing"))
}

fn bad_size(palette: &Palette) -> Result<Canvas> {
    Canvas::new(-1, 10, palette.bg)
}

fn panics(_palette: &Palette) -> Result<Canvas> {
    let columns: Vec<i32> = Vec::new();
    let first = columns[0];
    Canvas::new(first, first, Palette::professional().bg)
}

fn out_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from("target/test_out").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn failing_mockups_do_not_stop_the_batch() {
    let dir = out_dir("batch_partial");
    let mockups = [
        MockupFn::new("a.png", ok_card),
        MockupFn::new("b.png", broken),
        MockupFn::new("c.png", ok_card),
        MockupFn::new("d.png", bad_size),
        MockupFn::new("e.png", ok_card),
    ];
    let report = render_batch(&mockups, &dir, &Palette::professional()).expect("batch");

    assert_eq!(report.total(), mockups.len());
    assert_eq!(report.written.len(), mockups.len() - 2);
    assert!(!report.is_complete());
    let failed: Vec<_> = report.failed.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(failed, ["b.png", "d.png"]);

    let files = std::fs::read_dir(&dir).expect("read dir").count();
    assert_eq!(files, 3);
    assert!(dir.join("e.png").exists());
    assert!(!dir.join("b.png").exists());
}

#[test]
fn panicking_mockup_is_reported_and_skipped() {
    let dir = out_dir("batch_panic");
    let mockups = [
        MockupFn::new("a.png", ok_card),
        MockupFn::new("b.png", panics),
        MockupFn::new("c.png", ok_card),
    ];
    let report = render_batch(&mockups, &dir, &Palette::professional()).expect("batch");

    assert_eq!(report.written.len(), mockups.len() - 1);
    assert_eq!(report.failed.len(), 1);
    let (name, err) = &report.failed[0];
    assert_eq!(name, "b.png");
    match err {
        RenderError::Panicked { name, message } => {
            assert_eq!(name, "b.png");
            assert!(message.contains("index out of bounds"), "{message}");
        }
        other => panic!("expected Panicked, got {other:?}"),
    }
    assert!(dir.join("a.png").exists());
    assert!(dir.join("c.png").exists());
    assert_eq!(std::fs::read_dir(&dir).expect("read dir").count(), 2);
}

#[test]
fn unwritable_output_dir_is_fatal() {
    let dir = out_dir("batch_blocked");
    std::fs::create_dir_all(dir.parent().expect("parent")).expect("mkdir");
    // A plain file where the directory should go.
    std::fs::write(&dir, b"not a dir").expect("write blocker");
    let result = render_batch(&[MockupFn::new("a.png", ok_card)], &dir.join("nested"), &Palette::professional());
    assert!(matches!(result, Err(RenderError::Io(_))));
    std::fs::remove_file(&dir).ok();
}
