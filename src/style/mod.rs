//! The publication style and the operations that apply or reset it.
//!
//! - [`PAPER_STYLE_PARAMS`]: the publication parameter table
//! - [`apply_paper_style`]: layer the table, overrides and optional LaTeX
//!   settings onto the global render configuration
//! - [`reset_to_default_style`]: restore the render layer's factory defaults

mod apply;
mod paper;

pub use apply::{
    apply_paper_style, apply_paper_style_to, merged_style, reset_to_default_style, ApplyOutcome,
    RESET_MESSAGE,
};
pub use paper::{latex_params, LATEX_PREAMBLE, LATEX_PREAMBLE_KEY, PAPER_STYLE_PARAMS, USETEX_KEY};
