//! # Hub
//!
//! Two-flange hub geometry: flange diameters and the axial distance from the
//! rim plane to each flange, both sides measured independently and positive.
//!
//! Widths can be specified three ways, and only one way at a time:
//!
//! - symmetric: a single `width`, split evenly between the sides
//! - symmetric + offset: a single `width` plus a lateral `offset`
//! - explicit: `width_nds` and `width_ds` given directly
//!
//! Anything else (both styles at once, or neither complete) is rejected.

use serde::{Deserialize, Serialize};

use crate::errors::{WheelError, WheelResult};

/// Raw hub parameters, resolved into a [`Hub`] by [`Hub::new`].
///
/// ## JSON Examples
///
/// ```json
/// // Symmetric
/// { "diameter": 0.05, "width": 0.05 }
///
/// // Asymmetric, explicit per-side widths
/// { "diameter": 0.05, "width_nds": 0.03, "width_ds": 0.02 }
///
/// // Asymmetric flanges, symmetric width with lateral offset
/// { "diameter_nds": 0.04, "diameter_ds": 0.06, "width": 0.05, "offset": 0.01 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HubParams {
    /// Shared flange diameter, used for any side without its own value (m)
    pub diameter: Option<f64>,
    /// Non-drive-side flange diameter (m)
    pub diameter_nds: Option<f64>,
    /// Drive-side flange diameter (m)
    pub diameter_ds: Option<f64>,
    /// Total symmetric width, split between the sides (m)
    pub width: Option<f64>,
    /// Distance from rim plane to non-drive-side flange (m)
    pub width_nds: Option<f64>,
    /// Distance from rim plane to drive-side flange (m)
    pub width_ds: Option<f64>,
    /// Lateral offset applied to a symmetric width (m, toward the drive side)
    pub offset: Option<f64>,
}

/// Resolved hub geometry. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hub {
    /// Non-drive-side flange diameter (m)
    pub diameter_nds: f64,
    /// Drive-side flange diameter (m)
    pub diameter_ds: f64,
    /// Distance from rim plane to non-drive-side flange (m)
    pub width_nds: f64,
    /// Distance from rim plane to drive-side flange (m)
    pub width_ds: f64,
}

impl Hub {
    /// Resolve raw parameters into hub geometry.
    ///
    /// Width resolution precedence:
    ///
    /// 1. `width` given: `width_nds = width/2 + offset`,
    ///    `width_ds = width/2 - offset` (offset defaults to 0). Also giving
    ///    `width_nds`/`width_ds` is ambiguous and rejected.
    /// 2. Both `width_nds` and `width_ds` given: used directly. An `offset`
    ///    without a `width` is rejected as incomplete.
    /// 3. Anything else: incomplete width specification, rejected.
    ///
    /// Each flange diameter falls back to the shared `diameter`; a side with
    /// neither is rejected.
    pub fn new(params: HubParams) -> WheelResult<Hub> {
        let (width_nds, width_ds) = if let Some(width) = params.width {
            if params.width_nds.is_some() || params.width_ds.is_some() {
                return Err(WheelError::invalid_input(
                    "width_nds/width_ds",
                    "set",
                    "Cannot specify per-side widths when using the width parameter",
                ));
            }
            let offset = params.offset.unwrap_or(0.0);
            (width / 2.0 + offset, width / 2.0 - offset)
        } else if params.offset.is_some() {
            return Err(WheelError::invalid_input(
                "offset",
                params.offset.unwrap_or_default().to_string(),
                "The offset parameter requires a symmetric width",
            ));
        } else {
            match (params.width_nds, params.width_ds) {
                (Some(nds), Some(ds)) => (nds, ds),
                _ => {
                    return Err(WheelError::missing_field(
                        "width_nds and width_ds (or a symmetric width)",
                    ))
                }
            }
        };

        let diameter_nds = params
            .diameter_nds
            .or(params.diameter)
            .ok_or_else(|| WheelError::missing_field("diameter or diameter_nds"))?;
        let diameter_ds = params
            .diameter_ds
            .or(params.diameter)
            .ok_or_else(|| WheelError::missing_field("diameter or diameter_ds"))?;

        Ok(Hub {
            diameter_nds,
            diameter_ds,
            width_nds,
            width_ds,
        })
    }

    /// Symmetric hub: equal flange diameters, width split evenly.
    pub fn symmetric(diameter: f64, width: f64) -> Hub {
        Hub {
            diameter_nds: diameter,
            diameter_ds: diameter,
            width_nds: width / 2.0,
            width_ds: width / 2.0,
        }
    }

    /// Symmetric flanges with the rim plane shifted laterally by `offset`
    /// toward the drive side.
    pub fn with_offset(diameter: f64, width: f64, offset: f64) -> Hub {
        Hub {
            diameter_nds: diameter,
            diameter_ds: diameter,
            width_nds: width / 2.0 + offset,
            width_ds: width / 2.0 - offset,
        }
    }
}
