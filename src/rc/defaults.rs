//! Factory defaults for the render configuration.
//!
//! Every known parameter has a shipped default and a [`Validator`]. These are
//! the values the store starts with and the values a reset restores. They are
//! unrelated to the publication style, which is layered on top of them.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::param::ParamValue;

use super::validate::Validator;

const TICK_DIRECTIONS: &[&str] = &["in", "out", "inout"];
const LINE_STYLES: &[&str] = &["-", "--", "-.", ":", "solid", "dashed", "dashdot", "dotted"];
const BBOX_MODES: &[&str] = &["standard", "tight"];

/// A known parameter's shipped default and its validator.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub default: ParamValue,
    pub validator: Validator,
}

static FACTORY: Lazy<IndexMap<&'static str, ParamSpec>> = Lazy::new(build_factory);

fn build_factory() -> IndexMap<&'static str, ParamSpec> {
    use Validator::*;

    let entries: Vec<(&'static str, ParamValue, Validator)> = vec![
        // Font
        ("font.family", "sans-serif".into(), FontFamily),
        (
            "font.serif",
            [
                "DejaVu Serif",
                "Bitstream Vera Serif",
                "Computer Modern Roman",
                "New Century Schoolbook",
                "Times New Roman",
                "Times",
                "Palatino",
                "serif",
            ]
            .into(),
            TextList,
        ),
        (
            "font.sans-serif",
            [
                "DejaVu Sans",
                "Bitstream Vera Sans",
                "Computer Modern Sans Serif",
                "Lucida Grande",
                "Verdana",
                "Arial",
                "Helvetica",
                "sans-serif",
            ]
            .into(),
            TextList,
        ),
        ("font.size", 10.0.into(), PositiveNumber),
        // Text
        ("text.color", "black".into(), Color),
        ("text.usetex", false.into(), Bool),
        ("text.latex.preamble", "".into(), Text),
        // Axes
        ("axes.facecolor", "white".into(), Color),
        ("axes.edgecolor", "black".into(), Color),
        ("axes.linewidth", 0.8.into(), Number),
        ("axes.grid", false.into(), Bool),
        ("axes.titlesize", "large".into(), FontSize),
        ("axes.labelsize", "medium".into(), FontSize),
        // Ticks
        ("xtick.labelsize", "medium".into(), FontSize),
        ("ytick.labelsize", "medium".into(), FontSize),
        ("xtick.direction", "out".into(), OneOf(TICK_DIRECTIONS)),
        ("ytick.direction", "out".into(), OneOf(TICK_DIRECTIONS)),
        ("xtick.major.size", 3.5.into(), Number),
        ("ytick.major.size", 3.5.into(), Number),
        ("xtick.minor.size", 2.0.into(), Number),
        ("ytick.minor.size", 2.0.into(), Number),
        // Legend
        ("legend.fontsize", "medium".into(), FontSize),
        ("legend.frameon", true.into(), Bool),
        ("legend.edgecolor", "0.8".into(), Color),
        ("legend.framealpha", 0.8.into(), Number),
        ("legend.fancybox", true.into(), Bool),
        // Figure
        ("figure.figsize", (6.4, 4.8).into(), Pair),
        ("figure.dpi", 100.0.into(), PositiveNumber),
        ("figure.titlesize", "large".into(), FontSize),
        ("figure.facecolor", "white".into(), Color),
        // Lines
        ("lines.linewidth", 1.5.into(), Number),
        ("lines.markersize", 6.0.into(), Number),
        ("lines.color", "C0".into(), Color),
        // Grid
        ("grid.color", "#b0b0b0".into(), Color),
        ("grid.linestyle", "-".into(), OneOf(LINE_STYLES)),
        ("grid.linewidth", 0.8.into(), Number),
        ("grid.alpha", 1.0.into(), Number),
        // Saving
        ("savefig.dpi", "figure".into(), Dpi),
        ("savefig.format", "png".into(), Text),
        ("savefig.bbox", "standard".into(), OneOf(BBOX_MODES)),
    ];

    entries
        .into_iter()
        .map(|(key, default, validator)| (key, ParamSpec { default, validator }))
        .collect()
}

/// Returns the spec for a known parameter.
pub fn param_spec(key: &str) -> Option<&'static ParamSpec> {
    FACTORY.get(key)
}

/// Iterates over all known parameters and their factory defaults, in table order.
pub fn factory_defaults() -> impl Iterator<Item = (&'static str, &'static ParamValue)> {
    FACTORY.iter().map(|(key, spec)| (*key, &spec.default))
}
