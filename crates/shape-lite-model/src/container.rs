// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parameter containers and derived quantities

use crate::ParamValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single named parameter entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Current value
    pub value: ParamValue,
}

impl Parameter {
    /// Create a new parameter
    pub fn new(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named parameter container
///
/// Holds one layer of an entity's configurable state (e.g. values vs.
/// units). Entries keep declaration order; names are unique within a
/// container.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParamContainer {
    name: String,
    parameters: Vec<Parameter>,
}

impl ParamContainer {
    /// Create a new empty container
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Container name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a parameter, overwriting the value if the name already exists
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(param) => param.value = value,
            None => self.parameters.push(Parameter { name, value }),
        }
    }

    /// Get a parameter value by name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    /// Write an existing parameter; returns false if the name is unknown
    pub fn set(&mut self, name: &str, value: ParamValue) -> bool {
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(param) => {
                param.value = value;
                true
            }
            None => false,
        }
    }

    /// Check whether a parameter name is registered here
    pub fn contains(&self, name: &str) -> bool {
        self.parameters.iter().any(|p| p.name == name)
    }

    /// Number of registered parameters
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterate parameters in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }
}

impl fmt::Debug for ParamContainer {
    /// Reconstruction-style rendering, e.g. `{"radius": 10.0}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match &param.value {
                ParamValue::Text(s) => write!(f, "\"{}\": \"{}\"", param.name, s)?,
                other => write!(f, "\"{}\": {}", param.name, other)?,
            }
        }
        write!(f, "}}")
    }
}

/// A derived value with its unit string
///
/// Units are descriptive strings only; they are not validated or converted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Quantity name
    pub name: String,
    /// Numeric value
    pub value: f64,
    /// Unit of measurement
    pub unit: String,
}

impl Quantity {
    /// Create a new quantity
    pub fn new(name: impl Into<String>, value: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
        }
    }

    /// Format the value with unit
    pub fn formatted(&self) -> String {
        if self.unit.is_empty() {
            format!("{}", self.value)
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_declaration_order() {
        let mut container = ParamContainer::new("parms");
        container.insert("radius", 1.0);
        container.insert("height", 2.0);

        let names: Vec<_> = container.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["radius", "height"]);
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn insert_overwrites_existing_names() {
        let mut container = ParamContainer::new("parms");
        container.insert("radius", 1.0);
        container.insert("radius", 3.0);

        assert_eq!(container.len(), 1);
        assert_eq!(container.get("radius"), Some(&ParamValue::Float(3.0)));
    }

    #[test]
    fn set_refuses_unknown_names() {
        let mut container = ParamContainer::new("parms");
        container.insert("radius", 1.0);

        assert!(container.set("radius", ParamValue::Float(2.0)));
        assert!(!container.set("height", ParamValue::Float(2.0)));
        assert!(!container.contains("height"));
    }

    #[test]
    fn debug_renders_reconstruction_form() {
        let mut container = ParamContainer::new("parms");
        container.insert("radius", 10.0);
        container.insert("label", "big");

        assert_eq!(
            format!("{container:?}"),
            "{\"radius\": 10.0, \"label\": \"big\"}"
        );
    }

    #[test]
    fn quantity_formats_value_with_unit() {
        let q = Quantity::new("Volume", 4.5, "meters^3");
        assert_eq!(q.formatted(), "4.5 meters^3");

        let unitless = Quantity::new("Count", 3.0, "");
        assert_eq!(unitless.formatted(), "3");
    }
}
