//! # Bicycle Wheel Assembly
//!
//! Owns one [`Rim`], one [`Hub`], and the ordered spoke collection. Lacing
//! operations populate the spokes from rim and hub geometry, tension
//! assignment solves the two-group lateral force balance, and the
//! aggregation methods fold the spoke collection into the smeared stiffness
//! matrices and mass/inertia totals consumed by an external solver.
//!
//! Spokes are kept sorted ascending by their rim angle after every lacing
//! call. Tension assignment and the geometric smeared stiffness assume the
//! sorted spokes alternate between the two sides of the wheel (even index =
//! one side, odd index = the other), which full-wheel lacing guarantees.

use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use std::f64::consts::{PI, TAU};

use crate::components::{Hub, Rim, Spoke};
use crate::diagnostics::{AggregateResult, Diagnostic};
use crate::errors::{WheelError, WheelResult};

/// Which hub flange a spoke attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    NonDriveSide,
    DriveSide,
}

/// Angular direction of the crossing offset at the hub.
///
/// A leading spoke points forward (in the drive direction) from rim to hub;
/// a trailing spoke points backward. Cross-laced wheels alternate the two
/// along each flange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LacingDirection {
    Leading,
    Trailing,
}

impl LacingDirection {
    fn sign(self) -> f64 {
        match self {
            LacingDirection::Leading => 1.0,
            LacingDirection::Trailing => -1.0,
        }
    }

    fn reversed(self) -> Self {
        match self {
            LacingDirection::Leading => LacingDirection::Trailing,
            LacingDirection::Trailing => LacingDirection::Leading,
        }
    }
}

/// Per-spoke material and attachment geometry used by the lacing operations.
///
/// Defaults to a plain 2.0 mm steel spoke attached at the nominal rim point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokeSpec {
    /// Spoke diameter (m)
    pub diameter: f64,
    /// Young's modulus (Pa)
    pub young_mod: f64,
    /// Material density (kg/m³), optional
    pub density: Option<f64>,
    /// Lateral offset of the nipple from the nominal rim point (m)
    pub offset_lat: f64,
    /// Radially-inward offset of the nipple from the nominal rim point (m)
    pub offset_rad: f64,
}

impl Default for SpokeSpec {
    fn default() -> Self {
        SpokeSpec {
            diameter: 2.0e-3,
            young_mod: 210e9,
            density: None,
            offset_lat: 0.0,
            offset_rad: 0.0,
        }
    }
}

/// Target tension for [`BicycleWheel::apply_tension`].
///
/// Exactly one quantity is specified; the other side's tension follows from
/// the lateral force balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TensionSpec {
    /// Average radial tension over both sides (N)
    Average(f64),
    /// Tension of the even-indexed (first-side) spokes (N)
    Left(f64),
    /// Tension of the odd-indexed (second-side) spokes (N)
    Right(f64),
}

/// Bicycle wheel definition: rim, hub, and the laced spoke collection.
///
/// Used as the input for theoretical calculations and external solver
/// models. Construct with a rim and hub, then lace:
///
/// ```rust
/// use wheel_core::{BicycleWheel, Hub, Rim, SpokeSpec, TensionSpec};
///
/// let rim = Rim::box_section(0.3, 0.01, 0.015, 0.002, 69e9, 26e9, Some(2700.0));
/// let hub = Hub::symmetric(0.05, 0.05);
///
/// let mut wheel = BicycleWheel::new(rim, hub);
/// wheel.lace_cross(36, 3, &SpokeSpec::default()).unwrap();
/// wheel.apply_tension(TensionSpec::Average(800.0)).unwrap();
///
/// let k_bar = wheel.calc_kbar(true);
/// assert!((k_bar - k_bar.transpose()).amax() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BicycleWheel {
    pub rim: Rim,
    pub hub: Hub,
    /// Spokes, sorted ascending by `theta` after every lacing call
    pub spokes: Vec<Spoke>,
}

impl BicycleWheel {
    /// Create a wheel with no spokes; populate with a `lace_*` call.
    pub fn new(rim: Rim, hub: Hub) -> Self {
        BicycleWheel {
            rim,
            hub,
            spokes: Vec::new(),
        }
    }

    /// Restore the sorted-by-theta spoke ordering.
    pub fn reorder_spokes(&mut self) {
        self.spokes.sort_by(|a, b| a.theta.total_cmp(&b.theta));
    }

    /// Lace the full wheel in a radial (no-crossing) pattern.
    pub fn lace_radial(&mut self, n_spokes: usize, spec: &SpokeSpec) -> WheelResult<()> {
        self.lace_cross(n_spokes, 0, spec)
    }

    /// Lace the full wheel in a cross pattern with `n_cross` crossings.
    ///
    /// Half the spokes go to each flange, the two sides interleaved with a
    /// half-spacing angular phase. Any existing spokes are discarded.
    /// `n_spokes` must be even and nonzero.
    pub fn lace_cross(
        &mut self,
        n_spokes: usize,
        n_cross: usize,
        spec: &SpokeSpec,
    ) -> WheelResult<()> {
        if n_spokes == 0 || n_spokes % 2 != 0 {
            return Err(WheelError::invalid_input(
                "n_spokes",
                n_spokes.to_string(),
                "Full-wheel lacing requires an even, nonzero spoke count",
            ));
        }

        self.spokes.clear();

        let half = n_spokes / 2;
        self.lace_cross_side(
            half,
            n_cross,
            Side::NonDriveSide,
            LacingDirection::Leading,
            0.0,
            spec,
        )?;
        self.lace_cross_side(
            half,
            n_cross,
            Side::DriveSide,
            LacingDirection::Leading,
            PI / half as f64,
            spec,
        )?;

        Ok(())
    }

    /// Lace `n_spokes` evenly-spaced spokes from the rim to one hub flange.
    ///
    /// Each spoke's rim angle is `2π/n_spokes · s + phase`; its hub angle
    /// adds a crossing offset of `n_cross` spoke spacings in the lacing
    /// direction, which alternates leading/trailing along the flange
    /// starting from `direction`. The spoke vector runs from the (offset)
    /// nipple to the flange attachment point on the given side.
    ///
    /// The spoke collection is re-sorted by rim angle before returning.
    pub fn lace_cross_side(
        &mut self,
        n_spokes: usize,
        n_cross: usize,
        side: Side,
        direction: LacingDirection,
        phase: f64,
        spec: &SpokeSpec,
    ) -> WheelResult<()> {
        if n_spokes == 0 {
            return Err(WheelError::invalid_input(
                "n_spokes",
                "0",
                "Cannot lace zero spokes",
            ));
        }

        // Flange axial position and radius for the side being laced
        let hub_z = match side {
            Side::NonDriveSide => self.hub.width_nds,
            Side::DriveSide => -self.hub.width_ds,
        };
        let flange_r = match side {
            Side::NonDriveSide => self.hub.diameter_nds,
            Side::DriveSide => self.hub.diameter_ds,
        } / 2.0;

        let spacing = TAU / n_spokes as f64;
        let mut dir = direction;

        for s in 0..n_spokes {
            let theta_rim = (spacing * s as f64 + phase).rem_euclid(TAU);
            let theta_hub = theta_rim + spacing * n_cross as f64 * dir.sign();

            let du = hub_z - spec.offset_lat;
            let dv = self.rim.radius - spec.offset_rad - flange_r * (theta_hub - theta_rim).cos();
            let dw = flange_r * (theta_hub - theta_rim).sin();

            let length = (du * du + dv * dv + dw * dw).sqrt();
            let n = Vector3::new(du, dv, dw) / length;
            let b = Vector3::new(spec.offset_lat, spec.offset_rad, 0.0);

            self.spokes.push(Spoke::new(
                theta_rim,
                n,
                b,
                length,
                spec.diameter,
                spec.young_mod,
                spec.density,
            ));

            dir = dir.reversed();
        }

        self.reorder_spokes();
        Ok(())
    }

    /// Assign uniform tensions to the two alternating spoke groups.
    ///
    /// The even- and odd-indexed spokes each receive one tension, chosen so
    /// the two groups produce zero net lateral force: T_l·|n_l₀| = T_r·|n_r₀|,
    /// where n_l, n_r are the direction vectors of the first two spokes.
    /// Given an average radial tension, both values are solved from the
    /// balance plus the radial-tension average; given one side's tension,
    /// the other follows from the balance alone.
    pub fn apply_tension(&mut self, spec: TensionSpec) -> WheelResult<()> {
        if self.spokes.len() < 2 {
            return Err(WheelError::insufficient_spokes(
                "apply_tension",
                2,
                self.spokes.len(),
            ));
        }
        if self.spokes.len() % 2 != 0 {
            return Err(WheelError::invalid_input(
                "spokes",
                self.spokes.len().to_string(),
                "Two-group tension assignment requires an even spoke count",
            ));
        }

        let n_l = self.spokes[0].n;
        let n_r = self.spokes[1].n;

        let (t_left, t_right) = match spec {
            TensionSpec::Average(t_avg) => {
                let denom = (n_l[0] * n_r[1]).abs() + (n_r[0] * n_l[1]).abs();
                (
                    2.0 * t_avg * n_r[0].abs() / denom,
                    2.0 * t_avg * n_l[0].abs() / denom,
                )
            }
            TensionSpec::Left(t) => (t, (n_l[0] / n_r[0]).abs() * t),
            TensionSpec::Right(t) => ((n_r[0] / n_l[0]).abs() * t, t),
        };

        for (i, spoke) in self.spokes.iter_mut().enumerate() {
            spoke.tension = if i % 2 == 0 { t_left } else { t_right };
        }

        Ok(())
    }

    /// Smeared (circumference-averaged) spoke stiffness matrix.
    ///
    /// Sum of the per-spoke local stiffness matrices over the rim
    /// circumference, giving a continuum stiffness per unit length for the
    /// external solver.
    pub fn calc_kbar(&self, tension: bool) -> Matrix4<f64> {
        let circumference = TAU * self.rim.radius;

        self.spokes
            .iter()
            .fold(Matrix4::zeros(), |k_bar, spoke| {
                k_bar + spoke.calc_k(tension) / circumference
            })
    }

    /// Smeared spoke stiffness matrix, geometric (per-unit-tension)
    /// component.
    ///
    /// Each spoke's per-unit-tension matrix is weighted by its side's share
    /// of the force-balance ratio and normalized over half the
    /// circumference, since the sum is already apportioned per side.
    pub fn calc_kbar_geom(&self) -> WheelResult<Matrix4<f64>> {
        if self.spokes.len() < 2 {
            return Err(WheelError::insufficient_spokes(
                "calc_kbar_geom",
                2,
                self.spokes.len(),
            ));
        }

        let n_0 = self.spokes[0].n;
        let n_1 = self.spokes[1].n;
        let t_d = (n_0[0] * n_1[1]).abs() + (n_1[0] * n_0[1]).abs();

        let half_circumference = PI * self.rim.radius;

        Ok(self
            .spokes
            .iter()
            .fold(Matrix4::zeros(), |k_bar, spoke| {
                k_bar + spoke.n[0].abs() / t_d * spoke.calc_k_geom() / half_circumference
            }))
    }

    /// Total wheel mass (kg).
    ///
    /// Rim plus spokes. Contributions with no density enter as zero and are
    /// reported in the result's diagnostics.
    pub fn calc_mass(&self) -> AggregateResult {
        let mut diagnostics = Vec::new();

        let m_rim = self.rim.calc_mass().unwrap_or_else(|| {
            diagnostics.push(Diagnostic::RimDensityUnknown);
            0.0
        });

        let mut missing = 0;
        let m_spokes: f64 = self
            .spokes
            .iter()
            .map(|s| {
                s.calc_mass().unwrap_or_else(|| {
                    missing += 1;
                    0.0
                })
            })
            .sum();
        if missing > 0 {
            diagnostics.push(Diagnostic::SpokeDensityUnknown { count: missing });
        }

        for diag in &diagnostics {
            diag.emit();
        }

        AggregateResult {
            value: m_rim + m_spokes,
            diagnostics,
        }
    }

    /// Total rotational inertia about the hub axle (kg·m²).
    ///
    /// Rim ring term plus, per spoke, its slender-rod inertia and a
    /// parallel-axis correction from the midpoint between its rim and hub
    /// attachment points. Spokes with no density enter as zero and are
    /// reported in the result's diagnostics; known spokes still contribute.
    pub fn calc_rot_inertia(&self) -> AggregateResult {
        let mut diagnostics = Vec::new();

        let i_rim = self.rim.calc_rot_inertia().unwrap_or_else(|| {
            diagnostics.push(Diagnostic::RimDensityUnknown);
            0.0
        });

        let mut missing = 0;
        let mut i_spokes = 0.0;
        for spoke in &self.spokes {
            match (spoke.calc_rot_inertia(), spoke.calc_mass()) {
                (Some(i_com), Some(mass)) => {
                    let rim_pt = Vector3::new(0.0, -self.rim.radius + spoke.b[1], 0.0);
                    let hub_pt = rim_pt + spoke.n * spoke.length;
                    let mid_pt = 0.5 * (rim_pt + hub_pt);
                    let mr2 = mass * (mid_pt[0].powi(2) + mid_pt[1].powi(2));

                    i_spokes += i_com + mr2;
                }
                _ => missing += 1,
            }
        }
        if missing > 0 {
            diagnostics.push(Diagnostic::SpokeDensityUnknown { count: missing });
        }

        for diag in &diagnostics {
            diag.emit();
        }

        AggregateResult {
            value: i_rim + i_spokes,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steel_spec() -> SpokeSpec {
        SpokeSpec {
            density: Some(8000.0),
            ..Default::default()
        }
    }

    /// Box rim, symmetric hub, as in the reference scenario
    fn test_wheel() -> BicycleWheel {
        let rim = Rim::box_section(0.3, 0.01, 0.015, 0.002, 70e9, 26e9, Some(2700.0));
        let hub = Hub::symmetric(0.05, 0.05);
        BicycleWheel::new(rim, hub)
    }

    #[test]
    fn test_radial_lacing_geometry() {
        let mut wheel = test_wheel();
        wheel.lace_radial(36, &steel_spec()).unwrap();

        assert_eq!(wheel.spokes.len(), 36);

        for spoke in &wheel.spokes {
            // Unit direction vector
            assert!((spoke.n.norm() - 1.0).abs() < 1e-12);
            assert!(spoke.theta >= 0.0 && spoke.theta < TAU);
            // Radial spokes have no tangential component
            assert!(spoke.n[2].abs() < 1e-12);

            // l = sqrt(0.025² + 0.275²) = 0.27613 m
            assert!((spoke.length - 0.27613).abs() < 1e-5);
        }

        // Half the spokes on each flange (lateral component sign)
        let nds = wheel.spokes.iter().filter(|s| s.n[0] > 0.0).count();
        assert_eq!(nds, 18);
    }

    #[test]
    fn test_spokes_sorted_by_theta() {
        let mut wheel = test_wheel();
        wheel.lace_cross(36, 3, &steel_spec()).unwrap();

        for pair in wheel.spokes.windows(2) {
            assert!(pair[0].theta <= pair[1].theta);
        }

        // Interleaved sides alternate along the rim
        for pair in wheel.spokes.windows(2) {
            assert!(pair[0].n[0] * pair[1].n[0] < 0.0);
        }
    }

    #[test]
    fn test_cross_lacing_longer_than_radial() {
        let mut wheel = test_wheel();
        wheel.lace_radial(36, &steel_spec()).unwrap();
        let l_radial = wheel.spokes[0].length;

        wheel.lace_cross(36, 3, &steel_spec()).unwrap();
        let l_cross = wheel.spokes[0].length;

        // cross-3: l = sqrt(0.025² + 0.2875² + 0.02165²) = 0.28940 m
        assert!((l_cross - 0.28940).abs() < 1e-5);
        assert!(l_cross > l_radial);

        // Crossed spokes pick up a tangential component; directions
        // alternate leading/trailing along each flange
        assert!(wheel.spokes.iter().all(|s| s.n[2].abs() > 1e-3));
        let tangential_pos = wheel.spokes.iter().filter(|s| s.n[2] > 0.0).count();
        assert_eq!(tangential_pos, 18);
    }

    #[test]
    fn test_lacing_replaces_existing_spokes() {
        let mut wheel = test_wheel();
        wheel.lace_cross(36, 3, &steel_spec()).unwrap();
        wheel.lace_radial(32, &steel_spec()).unwrap();

        assert_eq!(wheel.spokes.len(), 32);
        assert!(wheel.spokes.iter().all(|s| s.n[2].abs() < 1e-12));
    }

    #[test]
    fn test_lace_cross_rejects_odd_count() {
        let mut wheel = test_wheel();
        let err = wheel.lace_cross(35, 3, &steel_spec()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let err = wheel.lace_cross(0, 0, &steel_spec()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_nipple_offsets_enter_geometry() {
        let mut wheel = test_wheel();
        let spec = SpokeSpec {
            offset_lat: 0.002,
            offset_rad: 0.005,
            ..steel_spec()
        };
        wheel.lace_radial(36, &spec).unwrap();

        for spoke in &wheel.spokes {
            assert_eq!(spoke.b, Vector3::new(0.002, 0.005, 0.0));
        }

        // NDS lateral span shrinks: du = 0.025 - 0.002
        let nds = wheel.spokes.iter().find(|s| s.n[0] > 0.0).unwrap();
        assert!((nds.n[0] * nds.length - 0.023).abs() < 1e-9);
        // Radial span shrinks by offset_rad
        assert!((nds.n[1] * nds.length - 0.270).abs() < 1e-9);
    }

    #[test]
    fn test_apply_tension_average() {
        let mut wheel = test_wheel();
        wheel.lace_radial(36, &steel_spec()).unwrap();
        wheel.apply_tension(TensionSpec::Average(800.0)).unwrap();

        let s_l = &wheel.spokes[0];
        let s_r = &wheel.spokes[1];

        // Lateral force balance between the groups
        let balance = s_l.tension * s_l.n[0].abs() - s_r.tension * s_r.n[0].abs();
        assert!(balance.abs() < 1e-9);

        // Force-balance ratio (symmetric wheel)
        let lhs = s_l.tension * (s_l.n[0] * s_r.n[1]).abs();
        let rhs = s_r.tension * (s_r.n[0] * s_l.n[1]).abs();
        assert!((lhs - rhs).abs() < 1e-6);

        // Radial-tension average recovers the target
        let t_rad_avg = 0.5 * (s_l.tension * s_l.n[1].abs() + s_r.tension * s_r.n[1].abs());
        assert!((t_rad_avg - 800.0).abs() < 1e-9);

        // Symmetric wheel: T = T_avg / n1 = 803.30 N on both sides
        assert!((s_l.tension - 803.30).abs() < 0.01);
        assert!((s_r.tension - s_l.tension).abs() < 1e-9);
    }

    #[test]
    fn test_apply_tension_one_side_given() {
        let rim = Rim::box_section(0.3, 0.01, 0.015, 0.002, 70e9, 26e9, None);
        let hub = Hub::with_offset(0.05, 0.05, 0.01);
        let mut wheel = BicycleWheel::new(rim, hub);
        wheel.lace_radial(36, &steel_spec()).unwrap();

        wheel.apply_tension(TensionSpec::Left(1000.0)).unwrap();
        let s_l = &wheel.spokes[0];
        let s_r = &wheel.spokes[1];
        assert_eq!(s_l.tension, 1000.0);
        // Dished wheel: the shallower side carries more tension
        assert!(s_r.tension > s_l.tension);
        let balance = s_l.tension * s_l.n[0].abs() - s_r.tension * s_r.n[0].abs();
        assert!(balance.abs() < 1e-9);

        wheel.apply_tension(TensionSpec::Right(1000.0)).unwrap();
        let s_l = &wheel.spokes[0];
        let s_r = &wheel.spokes[1];
        assert_eq!(s_r.tension, 1000.0);
        assert!(s_l.tension < s_r.tension);
    }

    #[test]
    fn test_apply_tension_groups_alternate() {
        let rim = Rim::box_section(0.3, 0.01, 0.015, 0.002, 70e9, 26e9, None);
        let hub = Hub::with_offset(0.05, 0.05, 0.01);
        let mut wheel = BicycleWheel::new(rim, hub);
        wheel.lace_radial(36, &steel_spec()).unwrap();
        wheel.apply_tension(TensionSpec::Average(800.0)).unwrap();

        let t_even = wheel.spokes[0].tension;
        let t_odd = wheel.spokes[1].tension;
        assert!(t_even != t_odd);
        for (i, spoke) in wheel.spokes.iter().enumerate() {
            let expected = if i % 2 == 0 { t_even } else { t_odd };
            assert_eq!(spoke.tension, expected);
        }
    }

    #[test]
    fn test_apply_tension_requires_laced_wheel() {
        let mut wheel = test_wheel();
        let err = wheel.apply_tension(TensionSpec::Average(800.0)).unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_SPOKES");
    }

    #[test]
    fn test_kbar_symmetric_psd() {
        // Reference scenario: 36 radial spokes, T_avg = 800 N
        let mut wheel = test_wheel();
        wheel.lace_radial(36, &steel_spec()).unwrap();
        wheel.apply_tension(TensionSpec::Average(800.0)).unwrap();

        assert!(wheel.spokes.iter().all(|s| s.tension > 0.0));

        let k_bar = wheel.calc_kbar(true);
        assert!((k_bar - k_bar.transpose()).amax() < 1e-9 * k_bar.amax());

        let eig = k_bar.symmetric_eigenvalues();
        for i in 0..4 {
            assert!(eig[i] > -1e-9 * k_bar.amax());
        }
    }

    #[test]
    fn test_kbar_radial_entries() {
        let mut wheel = test_wheel();
        wheel.lace_radial(36, &steel_spec()).unwrap();

        let k_bar = wheel.calc_kbar(false);
        let s = &wheel.spokes[0];

        // All spokes share |n| components, so the diagonal is
        // n_spokes·K_e·n_i²/(2πR)
        let k_e = s.ea / s.length;
        let norm = TAU * wheel.rim.radius;
        assert!((k_bar[(0, 0)] - 36.0 * k_e * s.n[0].powi(2) / norm).abs() < 1e-3);
        assert!((k_bar[(1, 1)] - 36.0 * k_e * s.n[1].powi(2) / norm).abs() < 1e-3);
        // No nipple offset: rotation row/column vanishes
        assert!(k_bar[(3, 3)].abs() < 1e-12);
    }

    #[test]
    fn test_kbar_geom_consistent_with_tension() {
        // For a laterally symmetric wheel the geometric matrix scaled by
        // T_avg equals the tension-dependent part of the full matrix
        let mut wheel = test_wheel();
        wheel.lace_cross(36, 3, &steel_spec()).unwrap();
        wheel.apply_tension(TensionSpec::Average(800.0)).unwrap();

        let geom_part = wheel.calc_kbar(true) - wheel.calc_kbar(false);
        let scaled = wheel.calc_kbar_geom().unwrap() * 800.0;

        assert!((geom_part - scaled).amax() < 1e-9 * geom_part.amax().max(1.0));
    }

    #[test]
    fn test_kbar_geom_requires_spokes() {
        let wheel = test_wheel();
        let err = wheel.calc_kbar_geom().unwrap_err();
        assert_eq!(err.error_code(), "INSUFFICIENT_SPOKES");
    }

    #[test]
    fn test_mass_all_densities_known() {
        let mut wheel = test_wheel();
        wheel.lace_radial(36, &steel_spec()).unwrap();

        let mass = wheel.calc_mass();
        assert!(mass.is_complete());

        // Rim 0.50894 kg + 36 × 6.9400e-3 kg = 0.75878 kg
        assert!((mass.value - 0.75878).abs() < 1e-4);
    }

    #[test]
    fn test_rot_inertia_all_densities_known() {
        let mut wheel = test_wheel();
        wheel.lace_radial(36, &steel_spec()).unwrap();

        let inertia = wheel.calc_rot_inertia();
        assert!(inertia.is_complete());

        // Rim ring 0.045804 + 36 × (rod 4.3737e-5 + axis shift 1.8434e-4)
        // = 0.054015 kg·m²
        assert!((inertia.value - 0.054015).abs() < 1e-5);
    }

    #[test]
    fn test_mass_missing_rim_density() {
        let rim = Rim::box_section(0.3, 0.01, 0.015, 0.002, 70e9, 26e9, None);
        let mut wheel = BicycleWheel::new(rim, Hub::symmetric(0.05, 0.05));
        wheel.lace_radial(36, &steel_spec()).unwrap();

        let mass = wheel.calc_mass();
        assert!(!mass.is_complete());
        assert!(mass.diagnostics.contains(&Diagnostic::RimDensityUnknown));

        // Finite: spokes only
        assert!((mass.value - 36.0 * 6.9400e-3).abs() < 1e-4);
    }

    #[test]
    fn test_inertia_partial_spoke_densities() {
        let mut wheel = test_wheel();
        wheel.lace_radial(36, &steel_spec()).unwrap();
        let full = wheel.calc_rot_inertia().value;

        wheel.spokes[0].density = None;
        wheel.spokes[1].density = None;

        let partial = wheel.calc_rot_inertia();
        assert!(partial
            .diagnostics
            .contains(&Diagnostic::SpokeDensityUnknown { count: 2 }));

        // Known spokes still contribute: total drops by exactly two spokes
        let per_spoke = (full - 0.045804) / 36.0;
        assert!((partial.value - (full - 2.0 * per_spoke)).abs() < 1e-6);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut wheel = test_wheel();
        wheel.lace_cross(36, 3, &steel_spec()).unwrap();
        wheel.apply_tension(TensionSpec::Average(800.0)).unwrap();

        let json = serde_json::to_string(&wheel).unwrap();
        let roundtrip: BicycleWheel = serde_json::from_str(&json).unwrap();
        assert_eq!(wheel, roundtrip);
    }
}
