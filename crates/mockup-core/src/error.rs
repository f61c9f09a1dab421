// File: crates/mockup-core/src/error.rs
// Summary: Rendering error type shared by the canvas, primitives and batch runner.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("pixel read-back failed")]
    ReadPixels,
    #[error("{name}: {reason}")]
    Mockup { name: String, reason: String },
    #[error("{name} panicked: {message}")]
    Panicked { name: String, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Failure raised from inside a mock-up generator.
    pub fn mockup(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Mockup { name: name.into(), reason: reason.into() }
    }
}

pub type Result<T, E = RenderError> = std::result::Result<T, E>;
