// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shape-Lite demonstration entry point
//!
//! Builds a default sphere, applies `radius = 10.0` and `units = "meters"`
//! through the validated setter, and prints the textual rendering and the
//! computed volume.

use log::info;
use shape_lite_model::{ParamValue, Result};
use shape_lite_shapes::{Shape, Sphere};

fn main() -> Result<()> {
    // Stderr logging; level from RUST_LOG when set
    let _logger = match flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
    {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("logger init failed: {err}");
            None
        }
    };

    let mut s = Sphere::new();
    s.set([
        ("radius", ParamValue::from(10.0)),
        ("units", ParamValue::from("meters")),
    ])?;

    println!("{s}");

    let vol = s.volume();
    println!("Sphere s has volume {}", vol.formatted());

    info!(
        "event=demo_complete shape={} radius={} volume={}",
        s.name(),
        s.radius(),
        vol.value
    );

    Ok(())
}
