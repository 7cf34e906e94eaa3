//! The render configuration store.

use indexmap::IndexMap;
use serde::Serialize;

use crate::param::{ParamError, ParamValue, StyleParams};

use super::color::parse_color;
use super::defaults::{factory_defaults, param_spec};
use super::validate::relative_font_scale;

/// Render configuration consulted by every draw call.
///
/// Starts from the factory defaults. Updates write only the keys they carry
/// and leave all other keys untouched. Known keys are validated; unknown keys
/// are stored as given, so callers can carry settings this crate does not
/// interpret.
///
/// # Example
///
/// ```rust
/// use pubstyle::{RcParams, StyleParams};
///
/// let mut rc = RcParams::factory_defaults();
/// rc.update(&StyleParams::new().add("axes.labelsize", 20)).unwrap();
///
/// assert_eq!(rc.number("axes.labelsize"), Some(20.0));
/// assert_eq!(rc.flag("axes.grid"), Some(false));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RcParams {
    values: IndexMap<String, ParamValue>,
}

impl RcParams {
    /// Creates a store holding the factory defaults.
    pub fn factory_defaults() -> Self {
        Self {
            values: factory_defaults()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        }
    }

    /// Writes every entry of `params` into the store.
    ///
    /// All entries are validated before anything is written, so a rejected
    /// update leaves the store unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidValue`] if a known key carries a value its
    /// validator rejects.
    pub fn update(&mut self, params: &StyleParams) -> Result<(), ParamError> {
        for (key, value) in params.iter() {
            match param_spec(key) {
                Some(spec) => spec.validator.check(key, value)?,
                None => log::debug!("storing unrecognised parameter '{}'", key),
            }
        }
        for (key, value) in params.iter() {
            self.values.insert(key.to_string(), value.clone());
        }
        Ok(())
    }

    /// Replaces the whole store with the factory defaults.
    ///
    /// Unknown keys stored by earlier updates are dropped.
    pub fn reset(&mut self) {
        *self = Self::factory_defaults();
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ParamValue::as_f64)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ParamValue::as_bool)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    pub fn pair(&self, key: &str) -> Option<(f64, f64)> {
        self.get(key).and_then(ParamValue::as_pair)
    }

    pub fn color(&self, key: &str) -> Option<(u8, u8, u8)> {
        self.text(key).and_then(parse_color)
    }

    /// Resolves a font size parameter to points.
    ///
    /// Relative names (`"large"`, `"small"`, ...) scale `font.size`.
    pub fn font_size(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            ParamValue::Str(name) => {
                let base = self.number("font.size")?;
                relative_font_scale(name).map(|scale| base * scale)
            }
            other => other.as_f64(),
        }
    }

    /// Resolves `figure.dpi`.
    pub fn figure_dpi(&self) -> f64 {
        self.number("figure.dpi").unwrap_or(100.0)
    }

    /// Returns the primary font family name.
    ///
    /// `font.family` may hold a single name or a list; for a list the first
    /// entry is used.
    pub fn font_family(&self) -> &str {
        match self.get("font.family") {
            Some(ParamValue::Str(name)) => name.as_str(),
            Some(ParamValue::List(names)) => names.first().map(String::as_str).unwrap_or("sans-serif"),
            _ => "sans-serif",
        }
    }
}

impl Default for RcParams {
    fn default() -> Self {
        Self::factory_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_overwrites_only_given_keys() {
        let mut rc = RcParams::factory_defaults();
        let before = rc.clone();
        rc.update(&StyleParams::new().add("font.size", 14)).unwrap();

        assert_eq!(rc.number("font.size"), Some(14.0));
        for (key, value) in before.iter() {
            if key != "font.size" {
                assert_eq!(rc.get(key), Some(value), "{} changed", key);
            }
        }
    }

    #[test]
    fn test_update_is_atomic() {
        let mut rc = RcParams::factory_defaults();
        let before = rc.clone();
        let params = StyleParams::new()
            .add("font.size", 14)
            .add("axes.grid", "yes");

        let err = rc.update(&params).unwrap_err();
        assert!(matches!(err, ParamError::InvalidValue { ref key, .. } if key == "axes.grid"));
        assert_eq!(rc, before);
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let mut rc = RcParams::factory_defaults();
        rc.update(&StyleParams::new().add("my.custom.key", "anything"))
            .unwrap();
        assert_eq!(rc.text("my.custom.key"), Some("anything"));
    }

    #[test]
    fn test_reset_drops_unknown_keys() {
        let mut rc = RcParams::factory_defaults();
        rc.update(&StyleParams::new().add("my.custom.key", 1)).unwrap();
        rc.reset();
        assert!(rc.get("my.custom.key").is_none());
        assert_eq!(rc, RcParams::factory_defaults());
    }

    #[test]
    fn test_relative_font_size() {
        let rc = RcParams::factory_defaults();
        assert_eq!(rc.font_size("axes.labelsize"), Some(10.0));
        let title = rc.font_size("axes.titlesize").unwrap();
        assert!((title - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_absolute_font_size() {
        let mut rc = RcParams::factory_defaults();
        rc.update(&StyleParams::new().add("legend.fontsize", 9))
            .unwrap();
        assert_eq!(rc.font_size("legend.fontsize"), Some(9.0));
    }

    #[test]
    fn test_relative_base_font_size_is_rejected() {
        let mut rc = RcParams::factory_defaults();
        let params = StyleParams::new()
            .add("font.size", "large")
            .add("axes.labelsize", 20);

        let err = rc.update(&params).unwrap_err();
        assert!(matches!(err, ParamError::InvalidValue { ref key, .. } if key == "font.size"));
        assert_eq!(rc.number("font.size"), Some(10.0));
    }

    #[test]
    fn test_absolute_size_resolves_without_numeric_base() {
        // bypass validation to store a relative base
        let mut rc = RcParams::factory_defaults();
        rc.values
            .insert("font.size".to_string(), ParamValue::from("large"));
        rc.update(&StyleParams::new().add("axes.labelsize", 20))
            .unwrap();

        assert_eq!(rc.font_size("axes.labelsize"), Some(20.0));
        assert_eq!(rc.font_size("axes.titlesize"), None);
    }

    #[test]
    fn test_figure_dpi_rejects_figure_sentinel() {
        let mut rc = RcParams::factory_defaults();
        let err = rc
            .update(&StyleParams::new().add("figure.dpi", "figure"))
            .unwrap_err();
        assert!(matches!(err, ParamError::InvalidValue { ref key, .. } if key == "figure.dpi"));
        assert_eq!(rc.figure_dpi(), 100.0);

        rc.update(&StyleParams::new().add("savefig.dpi", "figure"))
            .unwrap();
        assert_eq!(rc.text("savefig.dpi"), Some("figure"));
    }

    #[test]
    fn test_font_family_from_list() {
        let mut rc = RcParams::factory_defaults();
        rc.update(&StyleParams::new().add("font.family", ["monospace", "serif"]))
            .unwrap();
        assert_eq!(rc.font_family(), "monospace");
    }

    #[test]
    fn test_color_lookup() {
        let rc = RcParams::factory_defaults();
        assert_eq!(rc.color("legend.edgecolor"), Some((204, 204, 204)));
        assert_eq!(rc.color("lines.color"), Some((0x1f, 0x77, 0xb4)));
    }
}
