// File: crates/mockup-core/src/batch.rs
// Summary: Mock-up trait and the best-effort batch renderer that writes one PNG per mock-up.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::error::{RenderError, Result};
use crate::palette::Palette;

/// A named image generator. Each call builds a fresh canvas; nothing is shared between calls.
pub trait Mockup {
    /// Output file name, e.g. `07_dashboard.png`.
    fn file_name(&self) -> &str;
    fn render(&self, palette: &Palette) -> Result<Canvas>;
}

/// Adapts a plain function into a `Mockup`.
#[derive(Clone, Copy)]
pub struct MockupFn {
    pub file_name: &'static str,
    pub render: fn(&Palette) -> Result<Canvas>,
}

impl MockupFn {
    pub const fn new(file_name: &'static str, render: fn(&Palette) -> Result<Canvas>) -> Self {
        Self { file_name, render }
    }
}

impl Mockup for MockupFn {
    fn file_name(&self) -> &str { self.file_name }
    fn render(&self, palette: &Palette) -> Result<Canvas> { (self.render)(palette) }
}

/// Outcome of a batch: what was written and what failed.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(String, RenderError)>,
}

impl BatchReport {
    pub fn total(&self) -> usize { self.written.len() + self.failed.len() }
    pub fn is_complete(&self) -> bool { self.failed.is_empty() }
}

/// Render one mock-up and write it under `out_dir`.
pub fn render_one(mockup: &dyn Mockup, out_dir: &Path, palette: &Palette) -> Result<PathBuf> {
    let mut canvas = mockup.render(palette)?;
    let path = out_dir.join(mockup.file_name());
    canvas.save_png(&path)?;
    Ok(path)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Like `render_one`, but a panicking generator becomes `RenderError::Panicked`.
pub fn render_isolated(mockup: &dyn Mockup, out_dir: &Path, palette: &Palette) -> Result<PathBuf> {
    panic::catch_unwind(AssertUnwindSafe(|| render_one(mockup, out_dir, palette))).unwrap_or_else(|payload| {
        Err(RenderError::Panicked { name: mockup.file_name().to_string(), message: panic_message(payload.as_ref()) })
    })
}

/// Render every mock-up in order. Creating `out_dir` is the only fatal step;
/// a mock-up that errors or panics is logged and skipped so the rest still get written.
pub fn render_batch<M: Mockup>(mockups: &[M], out_dir: &Path, palette: &Palette) -> Result<BatchReport> {
    std::fs::create_dir_all(out_dir)?;

    let mut report = BatchReport::default();
    for m in mockups {
        match render_isolated(m, out_dir, palette) {
            Ok(path) => {
                tracing::info!(file = m.file_name(), "generated");
                report.written.push(path);
            }
            Err(err) => {
                tracing::error!(file = m.file_name(), error = %err, "mock-up failed");
                report.failed.push((m.file_name().to_string(), err));
            }
        }
    }
    Ok(report)
}
