//! Line plots drawn with the render configuration.
//!
//! [`LinePlot`] is the one figure type the crate draws. Its look comes
//! entirely from an [`RcParams`] store, so the same plot drawn before and
//! after a style change shows the difference between the two styles.

use std::ops::Range;
use std::path::Path;

use plotters::chart::LabelAreaPosition;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, RGBAColor, RGBColor, ShapeStyle, TextStyle};

use crate::rc::RcParams;

use super::error::RenderError;

const POINTS_PER_INCH: f64 = 72.0;

const TRANSPARENT_LINE: ShapeStyle = ShapeStyle {
    color: RGBAColor(0, 0, 0, 0.0),
    filled: false,
    stroke_width: 0,
};

/// A single-series line plot with title, axis labels and a legend.
///
/// # Example
///
/// ```rust
/// use pubstyle::render::LinePlot;
/// use pubstyle::RcParams;
///
/// let plot = LinePlot::new(vec![(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)])
///     .title("Example")
///     .axis_labels("x", "y")
///     .label("data");
///
/// let svg = plot.render_svg(&RcParams::factory_defaults()).unwrap();
/// assert!(svg.contains("Example"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinePlot {
    pub points: Vec<(f64, f64)>,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub label: String,
}

impl LinePlot {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            label: String::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = x.into();
        self.y_label = y.into();
        self
    }

    /// Sets the series label shown in the legend.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Draws the plot as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Draw`] if the drawing backend fails.
    pub fn render_svg(&self, rc: &RcParams) -> Result<String, RenderError> {
        let style = FigureStyle::from_rc(rc);
        if rc.flag("text.usetex") == Some(true) {
            log::debug!("LaTeX text is drawn as plain text");
        }

        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, style.size).into_drawing_area();
            root.fill(&style.background)?;

            let family = font_family(&style.family);
            let font = |px: f64| TextStyle::from(FontDesc::new(family, px, FontStyle::Normal));

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, font(style.title_px))
                .margin(style.margin_px)
                .x_label_area_size(style.x_label_area_px)
                .y_label_area_size(style.y_label_area_px)
                .build_cartesian_2d(
                    axis_range(self.points.iter().map(|p| p.0)),
                    axis_range(self.points.iter().map(|p| p.1)),
                )?;

            let mut mesh = chart.configure_mesh();
            mesh.x_desc(self.x_label.as_str())
                .y_desc(self.y_label.as_str())
                .axis_desc_style(font(style.label_px))
                .label_style(font(style.tick_px))
                .axis_style(style.axis)
                .set_tick_mark_size(LabelAreaPosition::Bottom, style.x_tick_mark_px)
                .set_tick_mark_size(LabelAreaPosition::Left, style.y_tick_mark_px)
                .x_labels(5)
                .y_labels(5);
            match style.grid {
                Some(grid) => {
                    mesh.bold_line_style(grid).light_line_style(TRANSPARENT_LINE);
                }
                None => {
                    mesh.disable_mesh();
                }
            }
            mesh.draw()?;

            let line = style.line;
            let swatch = style.legend_swatch_px;
            chart
                .draw_series(LineSeries::new(self.points.iter().copied(), line))?
                .label(self.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + swatch, y)], line));

            if !self.label.is_empty() {
                let mut legend = chart.configure_series_labels();
                legend
                    .position(SeriesLabelPosition::UpperRight)
                    .label_font(font(style.legend_px));
                if let Some((background, border)) = style.legend_frame {
                    legend.background_style(background).border_style(border);
                }
                legend.draw()?;
            }

            root.present()?;
        }
        Ok(svg)
    }

    /// Draws the plot and writes it to `path`.
    ///
    /// The format follows the file extension; only `.svg` is supported.
    /// `savefig.format` is not consulted.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedFormat`] for other extensions and
    /// [`RenderError::Io`] if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>, rc: &RcParams) -> Result<(), RenderError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if extension != "svg" {
            return Err(RenderError::UnsupportedFormat(extension));
        }

        let svg = self.render_svg(rc)?;
        std::fs::write(path, svg)?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

/// Pixel-level drawing settings resolved from a render configuration.
#[derive(Clone)]
struct FigureStyle {
    size: (u32, u32),
    background: RGBColor,
    family: String,
    title_px: f64,
    label_px: f64,
    tick_px: f64,
    legend_px: f64,
    margin_px: u32,
    x_label_area_px: u32,
    y_label_area_px: u32,
    axis: ShapeStyle,
    x_tick_mark_px: i32,
    y_tick_mark_px: i32,
    grid: Option<ShapeStyle>,
    line: ShapeStyle,
    legend_swatch_px: i32,
    legend_frame: Option<(ShapeStyle, ShapeStyle)>,
}

impl FigureStyle {
    fn from_rc(rc: &RcParams) -> Self {
        let dpi = rc.figure_dpi();
        let px = |pt: f64| pt * dpi / POINTS_PER_INCH;
        let stroke = |pt: f64| px(pt).round().max(1.0) as u32;
        let font_px = |key: &str| px(rc.font_size(key).unwrap_or(10.0));

        let (width_in, height_in) = rc.pair("figure.figsize").unwrap_or((6.4, 4.8));
        let size = (
            (width_in * dpi).round() as u32,
            (height_in * dpi).round() as u32,
        );

        let title_px = font_px("axes.titlesize");
        let label_px = font_px("axes.labelsize");
        let tick_px = font_px("xtick.labelsize").max(font_px("ytick.labelsize"));
        let legend_px = font_px("legend.fontsize");

        let tick_mark = |axis: &str| {
            let length = px(rc.number(&format!("{}.major.size", axis)).unwrap_or(3.5));
            match rc.text(&format!("{}.direction", axis)) {
                Some("in") => -(length.round() as i32),
                _ => length.round() as i32,
            }
        };

        let axis = ShapeStyle {
            color: rgb(rc.color("axes.edgecolor"), (0, 0, 0)).to_rgba(),
            filled: false,
            stroke_width: stroke(rc.number("axes.linewidth").unwrap_or(0.8)),
        };

        let grid = if rc.flag("axes.grid").unwrap_or(false) {
            let alpha = rc.number("grid.alpha").unwrap_or(1.0).clamp(0.0, 1.0);
            Some(ShapeStyle {
                color: rgb(rc.color("grid.color"), (176, 176, 176)).mix(alpha),
                filled: false,
                stroke_width: stroke(rc.number("grid.linewidth").unwrap_or(0.8)),
            })
        } else {
            None
        };

        let line = ShapeStyle {
            color: rgb(rc.color("lines.color"), (0x1f, 0x77, 0xb4)).to_rgba(),
            filled: false,
            stroke_width: stroke(rc.number("lines.linewidth").unwrap_or(1.5)),
        };

        let legend_frame = if rc.flag("legend.frameon").unwrap_or(true) {
            let alpha = rc.number("legend.framealpha").unwrap_or(0.8).clamp(0.0, 1.0);
            Some((
                ShapeStyle {
                    color: rgb(rc.color("axes.facecolor"), (255, 255, 255)).mix(alpha),
                    filled: true,
                    stroke_width: 0,
                },
                ShapeStyle {
                    color: rgb(rc.color("legend.edgecolor"), (204, 204, 204)).mix(alpha),
                    filled: false,
                    stroke_width: stroke(0.8),
                },
            ))
        } else {
            None
        };

        Self {
            size,
            background: rgb(rc.color("figure.facecolor"), (255, 255, 255)),
            family: rc.font_family().to_string(),
            title_px,
            label_px,
            tick_px,
            legend_px,
            margin_px: (tick_px * 1.5).round() as u32,
            x_label_area_px: (tick_px * 2.0 + label_px * 1.5).round() as u32,
            y_label_area_px: (tick_px * 3.5 + label_px * 1.5).round() as u32,
            axis,
            x_tick_mark_px: tick_mark("xtick"),
            y_tick_mark_px: tick_mark("ytick"),
            grid,
            line,
            legend_swatch_px: (legend_px * 2.0).round() as i32,
            legend_frame,
        }
    }
}

fn rgb(color: Option<(u8, u8, u8)>, fallback: (u8, u8, u8)) -> RGBColor {
    let (r, g, b) = color.unwrap_or(fallback);
    RGBColor(r, g, b)
}

fn font_family(name: &str) -> FontFamily<'_> {
    match name {
        "serif" => FontFamily::Serif,
        "sans-serif" => FontFamily::SansSerif,
        "monospace" => FontFamily::Monospace,
        other => FontFamily::Name(other),
    }
}

/// Data range padded by 5% on each side.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}
