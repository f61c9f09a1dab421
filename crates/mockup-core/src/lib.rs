// File: crates/mockup-core/src/lib.rs
// Summary: Core library entry point; exports the canvas, drawing primitives and batch renderer.

pub mod batch;
pub mod canvas;
pub mod connector;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod text;
pub mod types;
pub mod widgets;

pub use batch::{render_batch, render_isolated, BatchReport, Mockup, MockupFn};
pub use canvas::Canvas;
pub use connector::{arrow, connector, Direction};
pub use error::{RenderError, Result};
pub use geometry::{Point, Rect};
pub use palette::Palette;
pub use text::TextShaper;
pub use types::{ButtonVariant, FontSpec, TableStyle, Tone};
pub use widgets::{BoxColors, Cell, DealCard};

pub use skia_safe::Color;
