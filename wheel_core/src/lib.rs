//! # wheel_core - Spoked-Wheel Structural Model
//!
//! `wheel_core` models the mechanical structure of a tensioned spoked wheel
//! (rim, hub, and individual spokes) so that an external structural solver
//! can compute deformations, internal forces, and stresses under load. It
//! covers the geometric and constitutive model only: rim section constants,
//! hub flange geometry, per-spoke stiffness matrices (elastic and
//! tension-dependent geometric components), lacing-pattern generation,
//! tension assignment, and the smeared (circumferentially-averaged)
//! stiffness and mass/inertia aggregates.
//!
//! It deliberately does *not* solve any system of equations, apply loads,
//! or perform I/O - those belong to the consuming solver and application
//! layers.
//!
//! ## Design Philosophy
//!
//! - **Stateless computation**: aside from lacing and tension assignment,
//!   every method is a pure function of its inputs
//! - **JSON-First**: all public types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Explicit unknowns**: a missing density propagates as `None` and a
//!   structured diagnostic, never as a silent zero
//!
//! ## Quick Start
//!
//! ```rust
//! use wheel_core::{BicycleWheel, Hub, Rim, SpokeSpec, TensionSpec};
//!
//! // Aluminum box-section rim, symmetric hub
//! let rim = Rim::box_section(0.3, 0.01, 0.015, 0.002, 69e9, 26e9, Some(2700.0));
//! let hub = Hub::symmetric(0.05, 0.05);
//!
//! // 36 spokes, 3-cross pattern, 800 N average radial tension
//! let mut wheel = BicycleWheel::new(rim, hub);
//! wheel.lace_cross(36, 3, &SpokeSpec::default()).unwrap();
//! wheel.apply_tension(TensionSpec::Average(800.0)).unwrap();
//!
//! // Smeared spoke stiffness for the external solver
//! let k_bar = wheel.calc_kbar(true);
//! assert!(k_bar[(1, 1)] > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`components`] - Rim, Hub, Spoke, and BicycleWheel
//! - [`equations`] - Thin-walled cross-section formulas
//! - [`diagnostics`] - Non-fatal advisories from aggregate computations
//! - [`errors`] - Structured error types

pub mod components;
pub mod diagnostics;
pub mod equations;
pub mod errors;

// Re-export commonly used types at crate root for convenience
pub use components::{
    BicycleWheel, Hub, HubParams, LacingDirection, Rim, SectionSpec, Side, Spoke, SpokeSpec,
    TensionSpec,
};
pub use diagnostics::{AggregateResult, Diagnostic};
pub use errors::{WheelError, WheelResult};
