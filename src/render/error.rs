//! Rendering errors.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::param::ParamError;

/// Error returned when drawing or saving a figure fails.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The figure could not be written to disk.
    #[error("failed to write figure: {0}")]
    Io(#[from] std::io::Error),
    /// The render configuration rejected a style.
    #[error(transparent)]
    Param(#[from] ParamError),
    /// The drawing backend reported an error.
    #[error("drawing failed: {0}")]
    Draw(String),
    /// The output path names a format the renderer cannot produce.
    #[error("unsupported figure format '{0}' (only svg is supported)")]
    UnsupportedFormat(String),
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(err.to_string())
    }
}
