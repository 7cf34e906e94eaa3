//! Parameter primitives shared by styles and the render configuration.
//!
//! - [`ParamValue`]: a single value (flag, number, name, list or pair)
//! - [`StyleParams`]: an ordered map of dotted parameter names to values
//! - [`ParamError`]: errors raised when the render configuration rejects a value

mod error;
mod params;
mod value;

pub use error::ParamError;
pub use params::StyleParams;
pub use value::ParamValue;
