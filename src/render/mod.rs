//! Figure rendering on top of the render configuration.
//!
//! - [`LinePlot`]: a single-series line plot drawn to SVG with `plotters`
//! - [`generate_sample_plots`]: before/after samples of the paper style
//! - [`RenderError`]: drawing and file errors

mod error;
mod figure;
mod samples;

pub use error::RenderError;
pub use figure::LinePlot;
pub use samples::{
    generate_sample_plots, generate_sample_plots_in, DEFAULT_SAMPLE_FILE, PAPER_SAMPLE_FILE,
};
