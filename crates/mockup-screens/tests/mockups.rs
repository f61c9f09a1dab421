// File: crates/mockup-screens/tests/mockups.rs
// Purpose: Every named mock-up renders at its declared size, deterministically, and the batch writes them all.

use mockup_core::{render_batch, Canvas, Mockup, MockupFn, Palette, RenderError, Result};
use mockup_screens::{all, DIAGRAMS, WIREFRAMES};

fn render_all(palette: &Palette) -> Vec<Vec<u8>> {
    all()
        .iter()
        .map(|m| m.render(palette).and_then(|mut c| c.encode_png()).expect(m.file_name()))
        .collect()
}

fn out_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from("target/test_out").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn names_are_unique_and_ordered() {
    let names: Vec<_> = all().iter().map(|m| m.file_name().to_string()).collect();
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "01_global_layout.png");
    assert_eq!(names[9], "10_mobile_view.png");
    let mut dedup = names.clone();
    dedup.sort();
    dedup.dedup();
    assert_eq!(dedup.len(), names.len());
}

#[test]
fn mockups_have_expected_dimensions() {
    let palette = Palette::professional();
    for m in WIREFRAMES.iter().chain(DIAGRAMS.iter()) {
        let bytes = m.render(&palette).and_then(|mut c| c.encode_png()).expect(m.file_name());
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        let want = match m.file_name() {
            "10_mobile_view.png" => (400, 800),
            "architecture_diagram.png" => (1000, 700),
            "erd_diagram.png" => (1100, 800),
            _ => (1200, 800),
        };
        assert_eq!((img.width(), img.height()), want, "{}", m.file_name());
    }
}

#[test]
fn rendering_twice_is_byte_identical() {
    let palette = Palette::professional();
    assert_eq!(render_all(&palette), render_all(&palette));
}

#[test]
fn palettes_change_the_output() {
    let pro = WIREFRAMES[6].render(&Palette::professional()).and_then(|mut c| c.encode_png()).expect("pro");
    let classic = WIREFRAMES[6].render(&Palette::classic()).and_then(|mut c| c.encode_png()).expect("classic");
    assert_ne!(pro, classic);
}

#[test]
fn batch_writes_every_mockup() {
    let dir = out_dir("all_mockups");
    let report = render_batch(&all(), &dir, &Palette::professional()).expect("batch");
    assert!(report.is_complete(), "failures: {:?}", report.failed);
    assert_eq!(std::fs::read_dir(&dir).expect("read dir").count(), 12);
    assert!(dir.join("07_dashboard.png").exists());
}

fn exploding(_: &Palette) -> Result<Canvas> {
    Err(RenderError::mockup("exploding", "drawing failed"))
}

#[test]
fn one_failure_leaves_the_rest() {
    let dir = out_dir("mockups_with_failure");
    let mut mockups = all();
    mockups.insert(3, MockupFn::new("broken.png", exploding));
    let report = render_batch(&mockups, &dir, &Palette::professional()).expect("batch");
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.written.len(), mockups.len() - 1);
    assert_eq!(std::fs::read_dir(&dir).expect("read dir").count(), mockups.len() - 1);
}
