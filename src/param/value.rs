//! Parameter values.

use serde::{Deserialize, Serialize};

/// A single style parameter value.
///
/// Values cover the shapes a render configuration needs: flags, numbers,
/// names, lists of names (font fallbacks) and number pairs (figure sizes).
/// They serialize to plain JSON without a type tag, so a parameter table
/// prints the way a reader would write it by hand.
///
/// # Example
///
/// ```rust
/// use pubstyle::ParamValue;
///
/// assert_eq!(ParamValue::from(11), ParamValue::Int(11));
/// assert_eq!(ParamValue::from("serif"), ParamValue::Str("serif".into()));
/// assert_eq!(ParamValue::from((5.0, 4.0)), ParamValue::Pair(5.0, 4.0));
/// assert_eq!(ParamValue::from((5, 4)), ParamValue::IntPair(5, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<String>),
    /// A pair of whole numbers, serialized as `[5, 4]`.
    IntPair(i64, i64),
    Pair(f64, f64),
}

impl ParamValue {
    /// Returns the value as a float if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(n) => Some(*n as f64),
            ParamValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the value as a number pair.
    ///
    /// A two-element list of numbers is not accepted here; pairs only come
    /// from [`ParamValue::Pair`] and [`ParamValue::IntPair`].
    pub fn as_pair(&self) -> Option<(f64, f64)> {
        match self {
            ParamValue::IntPair(a, b) => Some((*a as f64, *b as f64)),
            ParamValue::Pair(a, b) => Some((*a, *b)),
            _ => None,
        }
    }

    /// Short name of the value's shape, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "bool",
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Str(_) => "string",
            ParamValue::List(_) => "list",
            ParamValue::IntPair(_, _) | ParamValue::Pair(_, _) => "pair",
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
            ParamValue::Str(s) => write!(f, "{:?}", s),
            ParamValue::List(items) => write!(f, "{:?}", items),
            ParamValue::IntPair(a, b) => write!(f, "({}, {})", a, b),
            ParamValue::Pair(a, b) => write!(f, "({}, {})", a, b),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(value: [&str; N]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<(i64, i64)> for ParamValue {
    fn from((a, b): (i64, i64)) -> Self {
        ParamValue::IntPair(a, b)
    }
}

impl From<(f64, f64)> for ParamValue {
    fn from((a, b): (f64, f64)) -> Self {
        ParamValue::Pair(a, b)
    }
}
