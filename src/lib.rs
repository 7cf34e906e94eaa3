//! # Pubstyle - Publication-Quality Plot Styles
//!
//! `pubstyle` holds a publication style for figures (serif fonts at journal
//! sizes, inward ticks, a light grid, a compact high-resolution canvas) and
//! applies it to a global render configuration that every draw call reads.
//!
//! ## Core Concepts
//!
//! - [`PAPER_STYLE_PARAMS`]: the publication parameter table
//! - [`apply_paper_style`]: write the table, optional overrides and optional
//!   LaTeX settings into the global configuration
//! - [`reset_to_default_style`]: restore the render layer's factory defaults
//! - [`RcParams`]: the validated configuration store (see [`rc`])
//! - [`render::LinePlot`] and [`generate_sample_plots`]: draw figures with
//!   whatever style is active
//!
//! ## Quick Start
//!
//! ```rust
//! use pubstyle::{apply_paper_style, rc, reset_to_default_style, StyleParams};
//!
//! // Paper style with a larger axis label
//! let overrides = StyleParams::new().add("axes.labelsize", 14);
//! apply_paper_style(Some(&overrides), false).unwrap();
//! assert_eq!(rc::rc_params().number("axes.labelsize"), Some(14.0));
//!
//! // Back to the factory defaults
//! reset_to_default_style();
//! assert_eq!(rc::rc_params().flag("axes.grid"), Some(false));
//! ```
//!
//! ## Layering
//!
//! The applied parameters are built from up to three layers, later layers
//! winning key for key:
//!
//! 1. the paper table
//! 2. caller overrides (not checked against the table; unknown keys pass through)
//! 3. `text.usetex` / `text.latex.preamble`, when LaTeX rendering is requested
//!
//! Only the keys in the result are written. Everything else in the global
//! configuration keeps its value.

pub mod cli;
mod param;
pub mod rc;
pub mod render;
mod style;

pub use param::{ParamError, ParamValue, StyleParams};
pub use rc::RcParams;
pub use render::{generate_sample_plots, RenderError};
pub use style::{
    apply_paper_style, apply_paper_style_to, latex_params, merged_style, reset_to_default_style,
    ApplyOutcome, LATEX_PREAMBLE, LATEX_PREAMBLE_KEY, PAPER_STYLE_PARAMS, RESET_MESSAGE,
    USETEX_KEY,
};
