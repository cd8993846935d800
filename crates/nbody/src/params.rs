//! Named scalar parameters attached to bodies and force instances.
//!
//! Forces look up optional per-body and per-force settings by name. Every
//! lookup is tri-state:
//!
//! | Stored value            | Result               |
//! |-------------------------|----------------------|
//! | absent                  | `Ok(None)`           |
//! | present, expected type  | `Ok(Some(value))`    |
//! | present, other type     | `Err(WrongType)`     |
//!
//! Range checks (e.g. "must be positive") belong to the force that reads the
//! value, since only it knows what the number means.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::frames::Coordinates;

/// A single stored parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParamValue {
    Float(f64),
    Integer(i64),
    Coordinates(Coordinates),
}

impl ParamValue {
    fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Float(_) => "float",
            ParamValue::Integer(_) => "integer",
            ParamValue::Coordinates(_) => "coordinates",
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<Coordinates> for ParamValue {
    fn from(value: Coordinates) -> Self {
        ParamValue::Coordinates(value)
    }
}

/// A parameter was set, but with a value of the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("parameter `{key}` holds a {found} value, expected {expected}")]
    WrongType {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Named parameter store.
///
/// Keys are kept sorted so iteration and serialization are deterministic.
///
/// # Examples
///
/// ```
/// use nbody::params::Params;
///
/// let mut params = Params::new();
/// params.set("tau_a", -1.0e5);
///
/// assert_eq!(params.get_float("tau_a"), Ok(Some(-1.0e5)));
/// assert_eq!(params.get_float("tau_e"), Ok(None));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Stores `value` under `key`, returning the previous value if any.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<ParamValue> {
        self.0.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Looks up a floating-point parameter.
    ///
    /// Integer values are widened to `f64`, so `params.set("alpha", 1_i64)`
    /// reads back as `1.0`.
    pub fn get_float(&self, key: &str) -> Result<Option<f64>, ParamError> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Float(v)) => Ok(Some(v)),
            Some(ParamValue::Integer(v)) => Ok(Some(v as f64)),
            Some(other) => Err(wrong_type(key, "float", &other)),
        }
    }

    pub fn get_integer(&self, key: &str) -> Result<Option<i64>, ParamError> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Integer(v)) => Ok(Some(v)),
            Some(other) => Err(wrong_type(key, "integer", &other)),
        }
    }

    pub fn get_coordinates(&self, key: &str) -> Result<Option<Coordinates>, ParamError> {
        match self.get(key) {
            None => Ok(None),
            Some(ParamValue::Coordinates(c)) => Ok(Some(c)),
            Some(other) => Err(wrong_type(key, "coordinates", &other)),
        }
    }
}

fn wrong_type(key: &str, expected: &'static str, found: &ParamValue) -> ParamError {
    ParamError::WrongType {
        key: key.to_string(),
        expected,
        found: found.type_name(),
    }
}
