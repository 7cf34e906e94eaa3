//! Sample figures for checking the publication style by eye.

use std::path::{Path, PathBuf};

use crate::rc;
use crate::style::{apply_paper_style, reset_to_default_style};

use super::error::RenderError;
use super::figure::LinePlot;

/// File name of the sample drawn with the paper style.
pub const PAPER_SAMPLE_FILE: &str = "sample_paper_style_plot.svg";

/// File name of the sample drawn with the factory defaults.
pub const DEFAULT_SAMPLE_FILE: &str = "sample_default_style_plot.svg";

fn sample_plot(title: &str) -> LinePlot {
    LinePlot::new(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])
        .title(title)
        .axis_labels("X-axis", "Y-axis")
        .label("Sample Data")
}

/// Writes the two sample plots into the current directory.
///
/// See [`generate_sample_plots_in`].
pub fn generate_sample_plots() -> Result<Vec<PathBuf>, RenderError> {
    generate_sample_plots_in(".")
}

/// Writes the two sample plots into `dir`.
///
/// Applies the paper style, draws and saves [`PAPER_SAMPLE_FILE`], resets to
/// the factory defaults, then draws the same plot again as
/// [`DEFAULT_SAMPLE_FILE`]. Existing files are overwritten. The global render
/// state is left at the factory defaults.
///
/// Returns the paths written, paper sample first.
///
/// # Errors
///
/// Returns [`RenderError::Io`] if a file cannot be written. There is no retry;
/// if the first file was written before the failure it stays on disk.
pub fn generate_sample_plots_in(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, RenderError> {
    let dir = dir.as_ref();
    log::info!("Generating sample plots...");

    apply_paper_style(None, false)?;
    let paper_path = dir.join(PAPER_SAMPLE_FILE);
    sample_plot("Sample Plot with Paper Style").save(&paper_path, &rc::rc_params())?;
    log::info!("Saved {}", paper_path.display());

    reset_to_default_style();
    let default_path = dir.join(DEFAULT_SAMPLE_FILE);
    sample_plot("Sample Plot with Default Style").save(&default_path, &rc::rc_params())?;
    log::info!("Saved {}", default_path.display());

    log::info!("Sample plot generation finished.");
    Ok(vec![paper_path, default_path])
}
