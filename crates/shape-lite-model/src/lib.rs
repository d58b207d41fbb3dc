// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape-Lite Model - core types for the parameter object model
//!
//! This crate provides the generic scaffolding every specialized model needs:
//! typed parameter values, named parameter containers, per-parameter
//! type-check rules, and the [`ParamEntity`] that ties them together with a
//! validated multi-parameter setter.
//!
//! # Architecture
//!
//! - [`ParamValue`] / [`ValueKind`] - tagged parameter values
//! - [`TypeRule`] - per-parameter validation rules, dispatched by match
//! - [`ParamContainer`] - a named, declaration-ordered parameter mapping
//! - [`ParamEntity`] - containers + rule policy + optional overflow user data
//! - [`Quantity`] - a derived value paired with a unit string
//!
//! # Example
//!
//! ```
//! use shape_lite_model::{ParamEntity, ParamValue, TypeRule, ValueKind};
//!
//! let mut entity = ParamEntity::new();
//! entity.add_container("parms");
//! entity
//!     .register("parms", "radius", 1.0, TypeRule::strict([ValueKind::Float]))
//!     .unwrap();
//!
//! entity.set([("radius", ParamValue::from(2.5))]).unwrap();
//! assert_eq!(entity.value("radius").and_then(ParamValue::as_float), Some(2.5));
//! ```

pub mod container;
pub mod entity;
pub mod error;
pub mod rule;
pub mod value;

// Re-export all public types
pub use container::*;
pub use entity::*;
pub use error::*;
pub use rule::*;
pub use value::*;
