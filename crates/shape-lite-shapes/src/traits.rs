// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core trait for parameterized shapes

use shape_lite_model::{ParamEntity, ParamValue, Quantity, Result};

/// A parameterized geometric shape
///
/// Implementations own a [`ParamEntity`] holding their declared parameters
/// and expose derived computations as [`Quantity`] values. Assignment goes
/// through the entity's validated setter, so every shape shares the same
/// type-check and error semantics.
pub trait Shape {
    /// Shape name, e.g. "sphere"
    fn name(&self) -> &str;

    /// The underlying parameter entity
    fn entity(&self) -> &ParamEntity;

    /// Mutable access to the underlying parameter entity
    fn entity_mut(&mut self) -> &mut ParamEntity;

    /// Volume of the shape with its unit string
    fn volume(&self) -> Quantity;

    /// Validated multi-parameter assignment
    ///
    /// # Errors
    /// Propagates the entity's `set` errors: `NotRegistered` and
    /// `PredicateRejected` abort the call, `TypeMismatch` is reported after
    /// the remaining pairs were processed.
    fn set<I, K, V>(&mut self, params: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
        Self: Sized,
    {
        self.entity_mut().set(params)
    }
}
