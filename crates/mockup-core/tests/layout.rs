// File: crates/mockup-core/tests/layout.rs
// Purpose: Pixel extents returned by primitives that callers chain layouts on.

use mockup_core::widgets::{badge, sidebar, table};
use mockup_core::{Canvas, Cell, Palette, Point, TableStyle, Tone};

fn canvas(palette: &Palette) -> Canvas {
    Canvas::new(1200, 800, palette.bg).expect("canvas")
}

fn rows(n: usize) -> Vec<Vec<Cell>> {
    (0..n)
        .map(|i| vec![Cell::from(format!("Row {i}")), Cell::badge("Active", Tone::Success)])
        .collect()
}

#[test]
fn compact_table_height() {
    let palette = Palette::professional();
    let mut c = canvas(&palette);
    let h = table(&mut c, &palette, Point::new(10, 10), 600, &["Name", "Status"], &rows(5), None, TableStyle::compact());
    assert_eq!(h, 236);
}

#[test]
fn table_height_is_header_plus_rows() {
    let palette = Palette::professional();
    let style = TableStyle::default();
    for n in [0usize, 1, 3, 7] {
        let mut c = canvas(&palette);
        let widths = [300, 300];
        let h = table(&mut c, &palette, Point::new(0, 0), 600, &["A", "B"], &rows(n), Some(&widths[..]), style);
        assert_eq!(h, style.header_height + n as i32 * style.row_height, "{n} rows");
    }
}

#[test]
fn badge_width_grows_with_label() {
    let palette = Palette::professional();
    let mut c = canvas(&palette);
    let mut last = 0;
    for label in ["A", "AB", "ABC", "ABCD", "ABCDEFGH"] {
        let w = badge(&mut c, &palette, Point::new(20, 20), label, Tone::Primary, false);
        assert!(w > last, "{label}: {w} <= {last}");
        last = w;
    }
}

#[test]
fn badge_width_counts_spaces() {
    let palette = Palette::professional();
    let mut c = canvas(&palette);
    let mut last = 0;
    for label in ["A", "A ", "A  ", "A B", "A B ", " A B "] {
        let w = badge(&mut c, &palette, Point::new(20, 20), label, Tone::Info, false);
        assert!(w > last, "{label:?}: {w} <= {last}");
        last = w;
    }
}

#[test]
fn small_badge_is_narrower() {
    let palette = Palette::professional();
    let mut c = canvas(&palette);
    let big = badge(&mut c, &palette, Point::new(0, 0), "Technology", Tone::Light, false);
    let small = badge(&mut c, &palette, Point::new(0, 40), "Technology", Tone::Light, true);
    assert!(small < big);
}

#[test]
fn sidebar_reports_band_width() {
    let palette = Palette::professional();
    let mut c = canvas(&palette);
    let items = ["Dashboard", "Clients", "Tasks"];
    assert_eq!(sidebar(&mut c, &palette, 1200, 800, "TeamACE", &items, Some(1)), 220);

    let mut narrow = Canvas::new(150, 300, palette.bg).expect("canvas");
    assert_eq!(sidebar(&mut narrow, &palette, 150, 300, "TeamACE", &items, None), 150);
}

#[test]
fn named_tone_cells_match_typed_ones() {
    assert_eq!(Cell::from(("Paid", "success")), Cell::badge("Paid", Tone::Success));
    assert_eq!(Cell::from(("Draft", "Light")), Cell::badge("Draft", Tone::Light));
    assert_eq!(Cell::from(("New", "magenta")), Cell::badge("New", Tone::Primary));
}
