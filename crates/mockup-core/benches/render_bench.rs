use anyhow::Result;
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use mockup_core::widgets::{badge, card, table};
use mockup_core::{Canvas, Cell, Palette, Point, Rect, TableStyle, Tone};

fn build_rows(n: usize) -> Vec<Vec<Cell>> {
    (0..n)
        .map(|i| {
            vec![
                Cell::from(format!("INV-2025-{i:04}")),
                Cell::from("Acme Corporation"),
                Cell::badge(if i % 3 == 0 { "Overdue" } else { "Paid" }, if i % 3 == 0 { Tone::Danger } else { Tone::Success }),
            ]
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let palette = Palette::professional();
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10usize, 100usize] {
        group.bench_function(format!("table_{n}"), |b| {
            let rows = build_rows(n);
            b.iter(|| -> Result<()> {
                let height = TableStyle::default().total_height(n) + 40;
                let mut canvas = Canvas::new(900, height, palette.bg)?;
                table(&mut canvas, &palette, Point::new(20, 20), 860, &["Invoice #", "Client", "Status"], &rows, None, TableStyle::default());
                let bytes = canvas.encode_png()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.bench_function("cards_and_badges", |b| {
        b.iter(|| -> Result<()> {
            let mut canvas = Canvas::new(1200, 800, palette.bg)?;
            for i in 0..12 {
                let x = 20 + (i % 4) * 290;
                let y = 20 + (i / 4) * 250;
                card(&mut canvas, &palette, Rect::from_ltwh(x, y, 270, 230), Some("Quick Stats"));
                badge(&mut canvas, &palette, Point::new(x + 16, y + 56), "Premium", Tone::Primary, false);
            }
            black_box(canvas.encode_png()?);
            Ok(())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
