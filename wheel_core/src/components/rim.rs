//! # Rim
//!
//! Cross-section and material properties of the circular rim. A rim is built
//! once through one of three factories and is immutable afterwards:
//!
//! - [`Rim::general`] - all section constants given directly
//! - [`Rim::box_section`] - constants derived from a closed box profile
//! - [`Rim::c_channel`] - constants derived from an open C-channel profile
//!
//! All quantities use SI units (m, N, kg). Geometric and material fields are
//! expected to be strictly positive; density is optional and, when absent,
//! makes the mass and inertia of the rim unknown (see [`Rim::calc_mass`]).

use serde::{Deserialize, Serialize};

use crate::equations::section;

/// Shape tag and shape-specific parameters of the rim cross-section.
///
/// The payload records the raw profile dimensions (and, for the C-channel,
/// the derived centroid/shear-center offsets consumed by an external solver
/// for torsion-bending coupling). It exists for diagnostics and
/// reconstruction; all stiffness-relevant constants live on [`Rim`] itself.
///
/// ## JSON Serialization
///
/// ```json
/// { "sec_type": "box", "w": 0.01, "h": 0.015, "t": 0.002 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "sec_type")]
pub enum SectionSpec {
    /// Arbitrary section; constants given directly, no profile recorded
    #[serde(rename = "general")]
    General,

    /// Closed rectangular thin-wall profile (midline half-width w,
    /// half-height h, wall thickness t)
    #[serde(rename = "box")]
    Box { w: f64, h: f64, t: f64 },

    /// Open C-channel profile with derived centroid height `y_c`,
    /// shear-center height `y_s`, and eccentricity `y_0 = y_c - y_s`
    #[serde(rename = "C")]
    CChannel {
        w: f64,
        h: f64,
        t: f64,
        y_c: f64,
        y_s: f64,
        y_0: f64,
    },
}

impl SectionSpec {
    /// True for closed (Bredt-type) sections
    pub fn is_closed(&self) -> bool {
        matches!(self, SectionSpec::General | SectionSpec::Box { .. })
    }
}

/// Rim definition: centerline radius, section constants, and material moduli.
///
/// ## JSON Example
///
/// ```json
/// {
///   "radius": 0.3,
///   "area": 1.0e-4,
///   "i_rad": 3.45e-9,
///   "i_lat": 1.99e-9,
///   "j_tor": 3.6e-9,
///   "i_warp": 0.0,
///   "young_mod": 69e9,
///   "shear_mod": 26e9,
///   "density": 2700.0,
///   "section": { "sec_type": "box", "w": 0.01, "h": 0.015, "t": 0.002 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rim {
    /// Centerline radius (m)
    pub radius: f64,
    /// Cross-section area (m²)
    pub area: f64,
    /// Second moment of area about the radial bending axis (m⁴)
    pub i_rad: f64,
    /// Second moment of area about the lateral bending axis (m⁴)
    pub i_lat: f64,
    /// Torsion constant (m⁴)
    pub j_tor: f64,
    /// Warping constant (m⁶)
    pub i_warp: f64,
    /// Young's modulus (Pa)
    pub young_mod: f64,
    /// Shear modulus (Pa)
    pub shear_mod: f64,
    /// Material density (kg/m³); `None` makes mass and inertia unknown
    pub density: Option<f64>,
    /// Shape tag and profile parameters
    pub section: SectionSpec,
}

impl Rim {
    /// Define a rim with arbitrary section constants.
    #[allow(clippy::too_many_arguments)]
    pub fn general(
        radius: f64,
        area: f64,
        i_rad: f64,
        i_lat: f64,
        j_tor: f64,
        i_warp: f64,
        young_mod: f64,
        shear_mod: f64,
        density: Option<f64>,
    ) -> Self {
        Rim {
            radius,
            area,
            i_rad,
            i_lat,
            j_tor,
            i_warp,
            young_mod,
            shear_mod,
            density,
            section: SectionSpec::General,
        }
    }

    /// Define a rim from a closed box cross-section.
    ///
    /// `w` and `h` are the midline half-width and half-height of the profile,
    /// `t` the wall thickness. The warping constant is taken as zero: a
    /// closed box has negligible warping resistance in this model.
    pub fn box_section(
        radius: f64,
        w: f64,
        h: f64,
        t: f64,
        young_mod: f64,
        shear_mod: f64,
        density: Option<f64>,
    ) -> Self {
        Rim {
            radius,
            area: section::box_area(w, h, t),
            i_rad: section::box_second_moment_rad(w, h, t),
            i_lat: section::box_second_moment_lat(w, h, t),
            j_tor: section::box_torsion_constant(w, h, t),
            i_warp: 0.0,
            young_mod,
            shear_mod,
            density,
            section: SectionSpec::Box { w, h, t },
        }
    }

    /// Define a rim from an open C-channel cross-section.
    ///
    /// Second moments are taken about the true centroid; the centroid height
    /// `y_c`, shear-center height `y_s`, and eccentricity `y_0 = y_c - y_s`
    /// are recorded in the section payload for downstream torsion-bending
    /// coupling.
    pub fn c_channel(
        radius: f64,
        w: f64,
        h: f64,
        t: f64,
        young_mod: f64,
        shear_mod: f64,
        density: Option<f64>,
    ) -> Self {
        let y_c = section::c_channel_centroid(w, h, t);
        let y_s = section::c_channel_shear_center(w, h);

        Rim {
            radius,
            area: section::c_channel_area(w, h, t),
            i_rad: section::c_channel_second_moment_rad(w, h, t, y_c),
            i_lat: section::c_channel_second_moment_lat(w, h, t),
            j_tor: section::c_channel_torsion_constant(w, h, t),
            i_warp: section::c_channel_warping_constant(w, h, t),
            young_mod,
            shear_mod,
            density,
            section: SectionSpec::CChannel {
                w,
                h,
                t,
                y_c,
                y_s,
                y_0: y_c - y_s,
            },
        }
    }

    /// Rim mass (kg), or `None` if density is unset.
    ///
    /// m = ρ · 2πR · A
    pub fn calc_mass(&self) -> Option<f64> {
        self.density
            .map(|rho| rho * 2.0 * std::f64::consts::PI * self.radius * self.area)
    }

    /// Rotational inertia about the axle (kg·m²), or `None` if density is
    /// unset.
    ///
    /// Thin-ring approximation: I = m·R²
    pub fn calc_rot_inertia(&self) -> Option<f64> {
        self.calc_mass().map(|m| m * self.radius.powi(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_rim() -> Rim {
        Rim::box_section(0.3, 0.01, 0.015, 0.002, 69e9, 26e9, Some(2700.0))
    }

    #[test]
    fn test_box_section_constants() {
        let rim = box_rim();

        assert!((rim.area - 1.0e-4).abs() < 1e-12);
        assert!((rim.j_tor - 3.6e-9).abs() < 1e-15);
        assert!((rim.i_rad - 3.448e-9).abs() < 1e-12);
        assert!((rim.i_lat - 1.995e-9).abs() < 1e-12);
        assert_eq!(rim.i_warp, 0.0);
        assert_eq!(rim.section, SectionSpec::Box { w: 0.01, h: 0.015, t: 0.002 });
        assert!(rim.section.is_closed());
    }

    #[test]
    fn test_c_channel_constants() {
        let rim = Rim::c_channel(0.3, 0.03, 0.01, 0.002, 69e9, 26e9, None);

        assert!((rim.area - 9.6e-5).abs() < 1e-12);
        assert!((rim.i_warp - 1.5e-13).abs() < 1e-18);
        assert!(!rim.section.is_closed());

        match rim.section {
            SectionSpec::CChannel { y_c, y_s, y_0, .. } => {
                assert!((y_c - 1.6667e-3).abs() < 1e-7);
                assert!((y_s + 3.3333e-3).abs() < 1e-7);
                assert!((y_0 - (y_c - y_s)).abs() < 1e-15);
            }
            _ => panic!("expected C-channel section"),
        }
    }

    #[test]
    fn test_general_records_no_profile() {
        let rim = Rim::general(0.3, 1e-4, 3e-9, 2e-9, 4e-9, 0.0, 69e9, 26e9, None);
        assert_eq!(rim.section, SectionSpec::General);
        assert_eq!(rim.area, 1e-4);
    }

    #[test]
    fn test_mass_with_density() {
        let rim = box_rim();

        // m = 2700 · 2π(0.3) · 1e-4 = 0.50894 kg
        let mass = rim.calc_mass().unwrap();
        assert!((mass - 0.50894).abs() < 1e-4);

        // I = m·R² = 0.045804 kg·m²
        let inertia = rim.calc_rot_inertia().unwrap();
        assert!((inertia - 0.045804).abs() < 1e-5);
    }

    #[test]
    fn test_mass_unknown_without_density() {
        let rim = Rim::box_section(0.3, 0.01, 0.015, 0.002, 69e9, 26e9, None);
        assert_eq!(rim.calc_mass(), None);
        assert_eq!(rim.calc_rot_inertia(), None);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let rim = box_rim();
        let json = serde_json::to_string(&rim).unwrap();
        assert!(json.contains("\"sec_type\":\"box\""));

        let roundtrip: Rim = serde_json::from_str(&json).unwrap();
        assert_eq!(rim, roundtrip);
    }
}
