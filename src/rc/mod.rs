//! Render configuration: the store every draw call reads its style from.
//!
//! - [`RcParams`]: a validated, ordered parameter store seeded with factory defaults
//! - [`Validator`]: what each known parameter accepts
//! - the global render state: [`rc_params`], [`update_rc_params`],
//!   [`restore_factory_defaults`] and named styles via [`use_style`]
//!
//! The publication style in [`crate::style`] is one client of this store; it
//! never owns it.

mod color;
mod defaults;
mod global;
mod params;
mod validate;

pub use color::{parse_color, COLOR_CYCLE};
pub use defaults::{factory_defaults, param_spec, ParamSpec};
pub use global::{
    active_style, available_styles, rc_params, register_style, render_state,
    restore_factory_defaults, update_rc_params, use_style, with_rc_params, RenderState,
    BASELINE_STYLE,
};
pub use params::RcParams;
pub use validate::{relative_font_scale, Validator, RELATIVE_FONT_SIZES};
