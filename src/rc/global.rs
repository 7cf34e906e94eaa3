//! The process-wide render state.
//!
//! One [`RcParams`] store plus the name of the selected style live behind a
//! mutex. Each call below is atomic on its own; sequences of calls from
//! several threads are not coordinated, matching the single-threaded use the
//! render layer assumes.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::param::{ParamError, StyleParams};

use super::params::RcParams;

/// Name of the baseline style selected at start-up and after a reset.
pub const BASELINE_STYLE: &str = "default";

/// The global render state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub params: RcParams,
    pub style: String,
}

impl RenderState {
    fn baseline() -> Self {
        Self {
            params: RcParams::factory_defaults(),
            style: BASELINE_STYLE.to_string(),
        }
    }
}

static RENDER_STATE: Lazy<Mutex<RenderState>> = Lazy::new(|| Mutex::new(RenderState::baseline()));

static STYLE_LIBRARY: Lazy<Mutex<IndexMap<String, StyleParams>>> = Lazy::new(|| {
    let mut library = IndexMap::new();
    library.insert(BASELINE_STYLE.to_string(), StyleParams::new());
    Mutex::new(library)
});

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns a snapshot of the global render configuration.
pub fn rc_params() -> RcParams {
    lock(&RENDER_STATE).params.clone()
}

/// Runs `f` with a borrow of the global render configuration.
///
/// Avoids the clone [`rc_params`] makes. `f` must not call back into this
/// module.
pub fn with_rc_params<R>(f: impl FnOnce(&RcParams) -> R) -> R {
    f(&lock(&RENDER_STATE).params)
}

/// Returns a snapshot of the whole render state.
pub fn render_state() -> RenderState {
    lock(&RENDER_STATE).clone()
}

/// Writes `params` into the global render configuration.
///
/// Keys not present in `params` keep their current values.
///
/// # Errors
///
/// Returns [`ParamError::InvalidValue`] if a known key carries an invalid
/// value. Nothing is written in that case.
pub fn update_rc_params(params: &StyleParams) -> Result<(), ParamError> {
    lock(&RENDER_STATE).params.update(params)
}

/// Restores the factory defaults and selects the baseline style.
pub fn restore_factory_defaults() {
    let mut state = lock(&RENDER_STATE);
    state.params.reset();
    state.style = BASELINE_STYLE.to_string();
}

/// Returns the name of the currently selected style.
pub fn active_style() -> String {
    lock(&RENDER_STATE).style.clone()
}

/// Registers (or replaces) a named style.
///
/// The baseline style cannot be replaced; registering under its name is
/// ignored.
pub fn register_style(name: &str, params: StyleParams) {
    if name == BASELINE_STYLE {
        log::warn!("refusing to replace the '{}' style", BASELINE_STYLE);
        return;
    }
    lock(&STYLE_LIBRARY).insert(name.to_string(), params);
}

/// Lists registered style names in registration order.
pub fn available_styles() -> Vec<String> {
    lock(&STYLE_LIBRARY).keys().cloned().collect()
}

/// Selects a named style.
///
/// The configuration is reset to the factory defaults and the style's
/// parameters are written on top.
///
/// # Errors
///
/// Returns [`ParamError::UnknownStyle`] for unregistered names, or
/// [`ParamError::InvalidValue`] if the style carries an invalid value. The
/// render state is unchanged on error.
pub fn use_style(name: &str) -> Result<(), ParamError> {
    let params = {
        let library = lock(&STYLE_LIBRARY);
        match library.get(name) {
            Some(params) => params.clone(),
            None => {
                return Err(ParamError::UnknownStyle {
                    name: name.to_string(),
                    available: library.keys().cloned().collect(),
                })
            }
        }
    };

    let mut next = RcParams::factory_defaults();
    next.update(&params)?;

    let mut state = lock(&RENDER_STATE);
    state.params = next;
    state.style = name.to_string();
    log::debug!("selected style '{}'", name);
    Ok(())
}
