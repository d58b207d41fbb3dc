// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sphere shape
//!
//! One scalar parameter (`radius`, default 1.0) and one unit string
//! (`units`, default "meters"). The containers are probed in declaration
//! order - `parms` first, then `units` - by the validated setter.

use crate::Shape;
use shape_lite_model::{ParamEntity, ParamValue, Quantity, Result, TypeRule, ValueKind};
use std::f64::consts::PI;
use std::fmt;

/// Container holding the numeric shape parameters
const PARMS: &str = "parms";
/// Container holding the unit strings
const UNITS: &str = "units";

const RADIUS: &str = "radius";
const UNITS_PARM: &str = "units";

const DEFAULT_RADIUS: f64 = 1.0;
const DEFAULT_UNITS: &str = "meters";

/// A sphere with a validated radius and a descriptive unit string
pub struct Sphere {
    entity: ParamEntity,
}

impl Sphere {
    /// Create a sphere with the default radius (1.0) and units ("meters")
    pub fn new() -> Self {
        let mut entity = ParamEntity::new();
        entity.add_container(PARMS);
        entity.add_container(UNITS);
        entity
            .register(PARMS, RADIUS, DEFAULT_RADIUS, TypeRule::strict([ValueKind::Float]))
            .expect("parms container added above");
        entity
            .register(UNITS, UNITS_PARM, DEFAULT_UNITS, TypeRule::LooseNumeric)
            .expect("units container added above");
        Self { entity }
    }

    /// Create a sphere and apply the supplied parameters
    ///
    /// # Errors
    /// Propagates the validated setter's errors when any supplied parameter
    /// fails validation or is unregistered.
    pub fn with_params<I, K, V>(params: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        let mut sphere = Self::new();
        sphere.set(params)?;
        Ok(sphere)
    }

    /// Validated multi-parameter assignment
    ///
    /// # Errors
    /// See [`ParamEntity::set`].
    pub fn set<I, K, V>(&mut self, params: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.entity.set(params)
    }

    /// Current radius, read from the canonical container
    pub fn radius(&self) -> f64 {
        self.entity
            .value_in(PARMS, RADIUS)
            .and_then(ParamValue::as_float)
            .expect("radius is registered as a float at construction")
    }

    /// Current unit string, read from the canonical container
    pub fn units(&self) -> &str {
        self.entity
            .value_in(UNITS, UNITS_PARM)
            .and_then(ParamValue::as_text)
            .expect("units is registered as text at construction")
    }

    /// The current (radius, units) pair
    pub fn short_form(&self) -> (f64, &str) {
        (self.radius(), self.units())
    }

    /// Stored radius value, for display purposes
    fn radius_value(&self) -> &ParamValue {
        self.entity
            .value_in(PARMS, RADIUS)
            .expect("radius is registered at construction")
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new()
    }
}

impl Shape for Sphere {
    fn name(&self) -> &str {
        "sphere"
    }

    fn entity(&self) -> &ParamEntity {
        &self.entity
    }

    fn entity_mut(&mut self) -> &mut ParamEntity {
        &mut self.entity
    }

    /// Volume `(4/3)·π·r³` with unit `"<units>^3"`
    ///
    /// The radius range is not validated; negative or zero radii compute
    /// without error.
    fn volume(&self) -> Quantity {
        let r = self.radius();
        Quantity::new(
            "Volume",
            (4.0 / 3.0) * PI * r.powi(3),
            format!("{}^3", self.units()),
        )
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The sphere has radius {} {}",
            self.radius_value(),
            self.units()
        )
    }
}

impl fmt::Debug for Sphere {
    /// Reconstruction-style rendering embedding the parms container,
    /// e.g. `Sphere({"radius": 10.0})`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parms = self
            .entity
            .container(PARMS)
            .expect("parms container exists from construction");
        write!(f, "Sphere({parms:?})")
    }
}
