// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape-Lite Shapes - concrete parameterized shapes
//!
//! This crate implements specialized models over the generic
//! [`shape_lite_model::ParamEntity`] scaffolding. Each shape declares its
//! parameter containers and type-check policy at construction and exposes
//! derived computations as [`shape_lite_model::Quantity`] values.
//!
//! # Example
//!
//! ```
//! use shape_lite_shapes::{Shape, Sphere};
//! use shape_lite_model::ParamValue;
//!
//! let mut s = Sphere::new();
//! s.set([
//!     ("radius", ParamValue::from(10.0)),
//!     ("units", ParamValue::from("meters")),
//! ])?;
//!
//! assert_eq!(s.to_string(), "The sphere has radius 10.0 meters");
//! let vol = s.volume();
//! assert_eq!(vol.unit, "meters^3");
//! # Ok::<(), shape_lite_model::ParamError>(())
//! ```

pub mod sphere;
pub mod traits;

pub use sphere::*;
pub use traits::*;
