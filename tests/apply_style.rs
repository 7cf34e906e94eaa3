//! Integration tests for applying and resetting the paper style on the
//! global render configuration.
//!
//! Every test that touches the global state is `#[serial]` and starts from a
//! reset.

use proptest::prelude::*;
use serial_test::serial;

use pubstyle::rc::{self, BASELINE_STYLE};
use pubstyle::{
    apply_paper_style, merged_style, reset_to_default_style, ApplyOutcome, ParamError, ParamValue,
    RcParams, StyleParams, LATEX_PREAMBLE, LATEX_PREAMBLE_KEY, PAPER_STYLE_PARAMS, USETEX_KEY,
};

// =========================================================================
// apply_paper_style
// =========================================================================

#[test]
#[serial]
fn test_override_wins_and_other_paper_keys_apply() {
    reset_to_default_style();
    let overrides = StyleParams::new().add("axes.labelsize", 20);

    let outcome = apply_paper_style(Some(&overrides), false).unwrap();

    assert_eq!(outcome, ApplyOutcome::Custom);
    let params = rc::rc_params();
    assert_eq!(params.get("axes.labelsize"), Some(&ParamValue::Int(20)));
    assert_eq!(params.flag("axes.grid"), Some(true));
    assert_eq!(params.text("font.family"), Some("serif"));
}

#[test]
#[serial]
fn test_latex_mode_sets_formula_pair() {
    reset_to_default_style();

    let outcome = apply_paper_style(None, true).unwrap();

    assert_eq!(outcome, ApplyOutcome::DefaultWithLatex);
    let params = rc::rc_params();
    assert_eq!(params.flag(USETEX_KEY), Some(true));
    assert_eq!(params.text(LATEX_PREAMBLE_KEY), Some(LATEX_PREAMBLE));
}

#[test]
#[serial]
fn test_custom_with_latex_outcome() {
    reset_to_default_style();
    let overrides = StyleParams::new().add("font.size", 8);

    let outcome = apply_paper_style(Some(&overrides), true).unwrap();

    assert_eq!(outcome, ApplyOutcome::CustomWithLatex);
    assert_eq!(rc::rc_params().number("font.size"), Some(8.0));
}

#[test]
#[serial]
fn test_empty_overrides_same_as_none() {
    reset_to_default_style();
    let with_none = apply_paper_style(None, false).unwrap();
    let state_none = rc::render_state();

    reset_to_default_style();
    let with_empty = apply_paper_style(Some(&StyleParams::new()), false).unwrap();
    let state_empty = rc::render_state();

    assert_eq!(with_none, ApplyOutcome::Default);
    assert_eq!(with_none, with_empty);
    assert_eq!(state_none, state_empty);
}

#[test]
#[serial]
fn test_apply_leaves_unrelated_keys_untouched() {
    reset_to_default_style();
    rc::update_rc_params(&StyleParams::new().add("axes.facecolor", "#eeeeee")).unwrap();

    apply_paper_style(None, false).unwrap();

    assert_eq!(rc::rc_params().text("axes.facecolor"), Some("#eeeeee"));
}

#[test]
#[serial]
fn test_unknown_override_keys_pass_through() {
    reset_to_default_style();
    let overrides = StyleParams::new().add("journal.column", "single");

    apply_paper_style(Some(&overrides), false).unwrap();

    assert_eq!(rc::rc_params().text("journal.column"), Some("single"));
}

#[test]
#[serial]
fn test_rejected_override_writes_nothing() {
    reset_to_default_style();
    let before = rc::render_state();
    let overrides = StyleParams::new().add("figure.figsize", "wide");

    let err = apply_paper_style(Some(&overrides), false).unwrap_err();

    assert!(matches!(err, ParamError::InvalidValue { ref key, .. } if key == "figure.figsize"));
    assert_eq!(rc::render_state(), before);
}

// =========================================================================
// reset_to_default_style
// =========================================================================

#[test]
#[serial]
fn test_reset_restores_factory_defaults() {
    reset_to_default_style();
    let overrides = StyleParams::new().add("lines.linewidth", 4.0);
    apply_paper_style(Some(&overrides), true).unwrap();

    reset_to_default_style();

    let params = rc::rc_params();
    assert_eq!(params, RcParams::factory_defaults());
    assert_eq!(params.flag(USETEX_KEY), Some(false));
    assert_eq!(params.flag("axes.grid"), Some(false));
}

#[test]
#[serial]
fn test_reset_drops_unknown_keys() {
    reset_to_default_style();
    let overrides = StyleParams::new().add("journal.column", "double");
    apply_paper_style(Some(&overrides), false).unwrap();

    reset_to_default_style();

    assert!(rc::rc_params().get("journal.column").is_none());
    assert_eq!(rc::rc_params().len(), RcParams::factory_defaults().len());
}

#[test]
#[serial]
fn test_reset_is_idempotent() {
    apply_paper_style(None, false).unwrap();

    reset_to_default_style();
    let first = rc::render_state();
    reset_to_default_style();
    let second = rc::render_state();

    assert_eq!(first, second);
}

#[test]
#[serial]
fn test_reset_returns_to_baseline_style() {
    rc::register_style("poster", StyleParams::new().add("font.size", 24));
    rc::use_style("poster").unwrap();
    assert_eq!(rc::active_style(), "poster");
    assert_eq!(rc::rc_params().number("font.size"), Some(24.0));

    reset_to_default_style();

    assert_eq!(rc::active_style(), BASELINE_STYLE);
    assert_eq!(rc::rc_params().number("font.size"), Some(10.0));
}

// =========================================================================
// Named styles
// =========================================================================

#[test]
#[serial]
fn test_use_unknown_style_fails() {
    reset_to_default_style();
    let err = rc::use_style("no-such-style").unwrap_err();

    match err {
        ParamError::UnknownStyle { name, available } => {
            assert_eq!(name, "no-such-style");
            assert!(available.contains(&BASELINE_STYLE.to_string()));
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(rc::active_style(), BASELINE_STYLE);
}

#[test]
#[serial]
fn test_use_style_starts_from_factory_defaults() {
    reset_to_default_style();
    apply_paper_style(None, false).unwrap();
    rc::register_style("large-text", StyleParams::new().add("font.size", 16));

    rc::use_style("large-text").unwrap();

    let params = rc::rc_params();
    assert_eq!(params.number("font.size"), Some(16.0));
    // the paper style's grid is gone
    assert_eq!(params.flag("axes.grid"), Some(false));
    assert!(rc::available_styles().contains(&"large-text".to_string()));
}

#[test]
#[serial]
fn test_baseline_style_cannot_be_replaced() {
    rc::register_style(BASELINE_STYLE, StyleParams::new().add("font.size", 30));
    rc::use_style(BASELINE_STYLE).unwrap();
    assert_eq!(rc::rc_params(), RcParams::factory_defaults());
}

// =========================================================================
// Merge precedence
// =========================================================================

fn key_strategy() -> impl Strategy<Value = String> {
    let mut keys: Vec<String> = PAPER_STYLE_PARAMS.keys().map(str::to_string).collect();
    keys.push(USETEX_KEY.to_string());
    keys.push(LATEX_PREAMBLE_KEY.to_string());
    keys.push("custom.one".to_string());
    keys.push("custom.two".to_string());
    prop::sample::select(keys)
}

fn overrides_strategy() -> impl Strategy<Value = StyleParams> {
    prop::collection::vec((key_strategy(), any::<i64>()), 0..12)
        .prop_map(|entries| entries.into_iter().collect::<StyleParams>())
}

proptest! {
    #[test]
    fn prop_later_layers_win(overrides in overrides_strategy(), use_latex in any::<bool>()) {
        let merged = merged_style(Some(&overrides), use_latex);
        let latex_key = |k: &str| k == USETEX_KEY || k == LATEX_PREAMBLE_KEY;

        for (key, value) in overrides.iter() {
            if use_latex && latex_key(key) {
                continue;
            }
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in PAPER_STYLE_PARAMS.iter() {
            if !overrides.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        if use_latex {
            prop_assert_eq!(merged.get(USETEX_KEY), Some(&ParamValue::Bool(true)));
            prop_assert_eq!(
                merged.get(LATEX_PREAMBLE_KEY),
                Some(&ParamValue::Str(LATEX_PREAMBLE.to_string()))
            );
        }
    }

    #[test]
    fn prop_merge_keeps_every_paper_key(overrides in overrides_strategy()) {
        let merged = merged_style(Some(&overrides), false);
        for key in PAPER_STYLE_PARAMS.keys() {
            prop_assert!(merged.contains_key(key));
        }
    }
}
