//! Applying and resetting the publication style.

use crate::param::{ParamError, StyleParams};
use crate::rc::{self, RcParams};

use super::paper::{latex_params, PAPER_STYLE_PARAMS};

/// Which inputs an application of the paper style used.
///
/// The `Display` text is the confirmation message reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The paper style table alone.
    Default,
    /// The paper style with caller overrides.
    Custom,
    /// The paper style with LaTeX rendering.
    DefaultWithLatex,
    /// The paper style with caller overrides and LaTeX rendering.
    CustomWithLatex,
}

impl ApplyOutcome {
    fn new(custom: bool, use_latex: bool) -> Self {
        match (custom, use_latex) {
            (false, false) => ApplyOutcome::Default,
            (true, false) => ApplyOutcome::Custom,
            (false, true) => ApplyOutcome::DefaultWithLatex,
            (true, true) => ApplyOutcome::CustomWithLatex,
        }
    }

    pub fn uses_overrides(&self) -> bool {
        matches!(self, ApplyOutcome::Custom | ApplyOutcome::CustomWithLatex)
    }

    pub fn uses_latex(&self) -> bool {
        matches!(
            self,
            ApplyOutcome::DefaultWithLatex | ApplyOutcome::CustomWithLatex
        )
    }
}

impl std::fmt::Display for ApplyOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = if self.uses_overrides() {
            "Applied custom style parameters"
        } else {
            "Applied default 'paper_style'"
        };
        let latex = if self.uses_latex() {
            " with LaTeX rendering enabled"
        } else {
            ""
        };
        write!(f, "{}{} to the render configuration.", base, latex)
    }
}

/// Message reported by [`reset_to_default_style`].
pub const RESET_MESSAGE: &str = "Reset render configuration to default style.";

fn has_overrides(overrides: Option<&StyleParams>) -> bool {
    overrides.is_some_and(|o| !o.is_empty())
}

/// Computes the parameters the paper style writes.
///
/// Layers, later ones winning key for key:
///
/// 1. [`PAPER_STYLE_PARAMS`]
/// 2. `overrides`, if given
/// 3. the LaTeX pair, if `use_latex` is set
///
/// Override keys are not checked against the paper table; unknown keys are
/// carried through.
///
/// # Example
///
/// ```rust
/// use pubstyle::{merged_style, StyleParams};
///
/// let overrides = StyleParams::new().add("axes.labelsize", 20);
/// let merged = merged_style(Some(&overrides), true);
///
/// assert_eq!(merged.get("axes.labelsize").and_then(|v| v.as_f64()), Some(20.0));
/// assert_eq!(merged.get("text.usetex").and_then(|v| v.as_bool()), Some(true));
/// ```
pub fn merged_style(overrides: Option<&StyleParams>, use_latex: bool) -> StyleParams {
    let mut merged = PAPER_STYLE_PARAMS.clone();
    if let Some(overrides) = overrides {
        merged.overlay(overrides);
    }
    if use_latex {
        merged.overlay(&latex_params());
    }
    merged
}

/// Applies the paper style to a caller-owned store.
///
/// Same merge as [`apply_paper_style`], without touching the global state and
/// without logging.
///
/// # Errors
///
/// Returns [`ParamError::InvalidValue`] if the store rejects a value; the
/// store is unchanged in that case.
pub fn apply_paper_style_to(
    target: &mut RcParams,
    overrides: Option<&StyleParams>,
    use_latex: bool,
) -> Result<ApplyOutcome, ParamError> {
    target.update(&merged_style(overrides, use_latex))?;
    Ok(ApplyOutcome::new(has_overrides(overrides), use_latex))
}

/// Applies the publication style to the global render configuration.
///
/// Builds the merged parameters (see [`merged_style`]) and writes every one of
/// them into the global store. Keys the merge does not mention keep their
/// current values. An empty override map behaves exactly like `None`.
///
/// The confirmation message is logged at `info` and returned as the
/// [`ApplyOutcome`].
///
/// # Errors
///
/// Returns [`ParamError::InvalidValue`] if the store rejects an override value.
/// Nothing is written in that case.
///
/// # Example
///
/// ```rust
/// use pubstyle::{apply_paper_style, rc, ApplyOutcome, StyleParams};
///
/// let overrides = StyleParams::new().add("axes.labelsize", 20);
/// let outcome = apply_paper_style(Some(&overrides), false).unwrap();
///
/// assert_eq!(outcome, ApplyOutcome::Custom);
/// assert_eq!(rc::rc_params().number("axes.labelsize"), Some(20.0));
/// assert_eq!(rc::rc_params().flag("axes.grid"), Some(true));
/// # pubstyle::reset_to_default_style();
/// ```
pub fn apply_paper_style(
    overrides: Option<&StyleParams>,
    use_latex: bool,
) -> Result<ApplyOutcome, ParamError> {
    let merged = merged_style(overrides, use_latex);
    log::debug!("writing {} style parameters", merged.len());
    rc::update_rc_params(&merged)?;

    let outcome = ApplyOutcome::new(has_overrides(overrides), use_latex);
    log::info!("{}", outcome);
    Ok(outcome)
}

/// Restores the render configuration's factory defaults.
///
/// Every parameter returns to the value the render layer ships with (not the
/// paper style), parameters it does not know are dropped, and the named style
/// selection returns to the baseline. Calling it twice leaves the same state.
pub fn reset_to_default_style() {
    rc::restore_factory_defaults();
    log::info!("{}", RESET_MESSAGE);
}
