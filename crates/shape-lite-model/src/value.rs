// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed parameter values

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag for a parameter value
///
/// Used by strict type rules and in error messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Float,
    Integer,
    Bool,
    Text,
}

impl ValueKind {
    /// Get the kind name as a lowercase string
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Float => "float",
            ValueKind::Integer => "integer",
            ValueKind::Bool => "bool",
            ValueKind::Text => "text",
        }
    }

    /// Check if values of this kind are numeric
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Float | ValueKind::Integer)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single parameter value
///
/// The set of variants a parameter container can store. Accessors follow
/// the usual coercion rule that an integer may stand in for a float.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Integer value (declared before Float so untagged deserialization
    /// keeps whole numbers integral)
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// String value
    Text(String),
}

impl ParamValue {
    /// Get the kind tag for this value
    pub fn kind(&self) -> ValueKind {
        match self {
            ParamValue::Float(_) => ValueKind::Float,
            ParamValue::Integer(_) => ValueKind::Integer,
            ParamValue::Bool(_) => ValueKind::Bool,
            ParamValue::Text(_) => ValueKind::Text,
        }
    }

    /// Try to get as float (integers coerce)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this value is numeric (float or integer)
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug formatting keeps the decimal point on whole floats,
            // so a radius of 10 renders as "10.0".
            ParamValue::Float(v) => write!(f, "{v:?}"),
            ParamValue::Integer(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Integer(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_match_variants() {
        assert_eq!(ParamValue::Float(1.0).kind(), ValueKind::Float);
        assert_eq!(ParamValue::Integer(1).kind(), ValueKind::Integer);
        assert_eq!(ParamValue::Bool(true).kind(), ValueKind::Bool);
        assert_eq!(ParamValue::from("m").kind(), ValueKind::Text);
    }

    #[test]
    fn as_float_coerces_integers() {
        assert_eq!(ParamValue::Integer(3).as_float(), Some(3.0));
        assert_eq!(ParamValue::Float(2.5).as_float(), Some(2.5));
        assert_eq!(ParamValue::from("3").as_float(), None);
    }

    #[test]
    fn display_keeps_decimal_point_on_floats() {
        assert_eq!(ParamValue::Float(10.0).to_string(), "10.0");
        assert_eq!(ParamValue::Float(2.5).to_string(), "2.5");
        assert_eq!(ParamValue::Integer(10).to_string(), "10");
        assert_eq!(ParamValue::from("meters").to_string(), "meters");
    }

    #[test]
    fn serde_untagged_round_trip() {
        let values = vec![
            ParamValue::Float(1.5),
            ParamValue::Integer(7),
            ParamValue::Bool(false),
            ParamValue::from("meters"),
        ];
        let json = serde_json::to_string(&values).unwrap();
        let back: Vec<ParamValue> = serde_json::from_str(&json).unwrap();
        assert_eq!(values, back);
    }
}
