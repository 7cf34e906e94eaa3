//! The publication ("paper") style table.

use once_cell::sync::Lazy;

use crate::param::StyleParams;

/// Parameter that switches text rendering to the LaTeX engine.
pub const USETEX_KEY: &str = "text.usetex";

/// Parameter holding the LaTeX preamble.
pub const LATEX_PREAMBLE_KEY: &str = "text.latex.preamble";

/// Packages loaded when LaTeX rendering is enabled.
pub const LATEX_PREAMBLE: &str = r"\usepackage{amsmath} \usepackage{amssymb}";

/// Style parameters for publication-quality figures.
///
/// Serif text at journal sizes, inward ticks, a light dashed grid, a square
/// opaque legend frame and a 5x4 inch figure at 300 dpi. Built once on first
/// access and never modified.
///
/// # Example
///
/// ```rust
/// use pubstyle::PAPER_STYLE_PARAMS;
///
/// assert_eq!(PAPER_STYLE_PARAMS.get("axes.grid").and_then(|v| v.as_bool()), Some(true));
/// assert_eq!(PAPER_STYLE_PARAMS.get("figure.dpi").and_then(|v| v.as_f64()), Some(300.0));
/// ```
pub static PAPER_STYLE_PARAMS: Lazy<StyleParams> = Lazy::new(|| {
    StyleParams::new()
        // Font
        .add("font.family", "serif")
        .add(
            "font.serif",
            ["Times New Roman", "Palatino", "Computer Modern Roman"],
        )
        .add("font.size", 11)
        // Axes
        .add("axes.labelsize", 11)
        .add("axes.titlesize", 12)
        .add("axes.grid", true)
        .add("axes.linewidth", 0.8)
        // Ticks
        .add("xtick.labelsize", 9)
        .add("ytick.labelsize", 9)
        .add("xtick.direction", "in")
        .add("ytick.direction", "in")
        .add("xtick.major.size", 4)
        .add("ytick.major.size", 4)
        .add("xtick.minor.size", 2)
        .add("ytick.minor.size", 2)
        // Legend
        .add("legend.fontsize", 9)
        .add("legend.frameon", true)
        .add("legend.edgecolor", "black")
        .add("legend.framealpha", 1)
        .add("legend.fancybox", false)
        // Figure
        .add("figure.figsize", (5, 4))
        .add("figure.dpi", 300)
        .add("figure.titlesize", 12)
        // Lines
        .add("lines.linewidth", 1.5)
        .add("lines.markersize", 5)
        // Grid
        .add("grid.color", "grey")
        .add("grid.linestyle", "--")
        .add("grid.linewidth", 0.5)
        .add("grid.alpha", 0.7)
        // Saving
        .add("savefig.dpi", 300)
        .add("savefig.format", "png")
        .add("savefig.bbox", "tight")
});

/// The parameter pair written when LaTeX rendering is requested.
pub fn latex_params() -> StyleParams {
    StyleParams::new()
        .add(USETEX_KEY, true)
        .add(LATEX_PREAMBLE_KEY, LATEX_PREAMBLE)
}
