//! Per-parameter value validation.

use crate::param::{ParamError, ParamValue};

use super::color::parse_color;

/// Relative font size names and their scale against `font.size`.
pub const RELATIVE_FONT_SIZES: &[(&str, f64)] = &[
    ("xx-small", 0.579),
    ("x-small", 0.694),
    ("small", 0.833),
    ("medium", 1.0),
    ("large", 1.200),
    ("x-large", 1.440),
    ("xx-large", 1.728),
    ("smaller", 0.833),
    ("larger", 1.2),
];

/// Returns the scale factor for a relative font size name.
pub fn relative_font_scale(name: &str) -> Option<f64> {
    RELATIVE_FONT_SIZES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, scale)| *scale)
}

/// What a known parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    Number,
    /// A number greater than zero.
    PositiveNumber,
    /// A number in points or a relative size name such as `"large"`.
    FontSize,
    Bool,
    Text,
    /// A single family name or an ordered list of names.
    FontFamily,
    TextList,
    Pair,
    /// A number, or `"figure"` to reuse the figure's own dpi.
    Dpi,
    Color,
    OneOf(&'static [&'static str]),
}

impl Validator {
    /// Checks `value` for the parameter `key`.
    pub fn check(&self, key: &str, value: &ParamValue) -> Result<(), ParamError> {
        if self.accepts(value) {
            Ok(())
        } else {
            Err(ParamError::InvalidValue {
                key: key.to_string(),
                value: value.clone(),
                expected: self.expected(),
            })
        }
    }

    fn accepts(&self, value: &ParamValue) -> bool {
        match self {
            Validator::Number => value.as_f64().is_some(),
            Validator::PositiveNumber => value.as_f64().is_some_and(|n| n > 0.0),
            Validator::FontSize => match value {
                ParamValue::Str(s) => relative_font_scale(s).is_some(),
                other => other.as_f64().is_some_and(|n| n > 0.0),
            },
            Validator::Bool => value.as_bool().is_some(),
            Validator::Text => value.as_str().is_some(),
            Validator::FontFamily => value.as_str().is_some() || value.as_list().is_some(),
            Validator::TextList => value.as_list().is_some(),
            Validator::Pair => value.as_pair().is_some_and(|(w, h)| w > 0.0 && h > 0.0),
            Validator::Dpi => match value {
                ParamValue::Str(s) => s == "figure",
                other => other.as_f64().is_some_and(|n| n > 0.0),
            },
            Validator::Color => value.as_str().and_then(parse_color).is_some(),
            Validator::OneOf(options) => value.as_str().is_some_and(|s| options.contains(&s)),
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            Validator::Number => "a number",
            Validator::PositiveNumber => "a positive number",
            Validator::FontSize => "a positive size in points or a relative size name",
            Validator::Bool => "a bool",
            Validator::Text => "a string",
            Validator::FontFamily => "a family name or list of family names",
            Validator::TextList => "a list of strings",
            Validator::Pair => "a pair of positive numbers",
            Validator::Dpi => "a positive number or \"figure\"",
            Validator::Color => "a colour name, hex code, grey level or cycle reference",
            Validator::OneOf(_) => "one of the supported names",
        }
    }
}
