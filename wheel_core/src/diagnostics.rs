//! # Aggregation Diagnostics
//!
//! Non-fatal advisories produced by the mass and inertia aggregation methods
//! on [`crate::components::BicycleWheel`]. A missing density is not an error:
//! the affected contribution is treated as zero, the numeric result stays
//! finite, and the caller receives a structured record of what was skipped.
//!
//! Diagnostics are also forwarded to the `tracing` facade as warnings, so
//! applications that subscribe to logs see them without inspecting results.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single advisory raised during an aggregate computation.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum Diagnostic {
    /// Rim density is unset; the rim contributed zero mass/inertia
    #[error("Rim density is not specified; rim contribution treated as zero")]
    RimDensityUnknown,

    /// Some spoke densities are unset; those spokes contributed zero
    #[error("{count} spoke(s) have no density; their contributions treated as zero")]
    SpokeDensityUnknown { count: usize },
}

impl Diagnostic {
    /// Forward this advisory to the log facade.
    pub fn emit(&self) {
        tracing::warn!(code = self.code(), "{self}");
    }

    /// Short code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::RimDensityUnknown => "RIM_DENSITY_UNKNOWN",
            Diagnostic::SpokeDensityUnknown { .. } => "SPOKE_DENSITY_UNKNOWN",
        }
    }
}

/// An aggregate quantity (total mass, rotational inertia) together with the
/// advisories raised while computing it.
///
/// `value` is always finite; unknown contributions enter the sum as zero.
/// An empty diagnostics list means every contribution was known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// The summed quantity, with unknown contributions as zero
    pub value: f64,
    /// Advisories raised during the sum
    pub diagnostics: Vec<Diagnostic>,
}

impl AggregateResult {
    /// True if no contribution was skipped for missing data
    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
