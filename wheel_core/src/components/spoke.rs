//! # Spoke
//!
//! Single-spoke geometry and mechanics in the rim-local frame. The local
//! frame at a rim point is: index 0 = lateral (axial), 1 = radial,
//! 2 = tangential, plus rotation about the tangential/axle axis.
//!
//! A spoke does not know its own position in space, only its angular station
//! on the rim and its direction. It can therefore compute only local
//! quantities: its stiffness matrices, mass, rotational inertia about its
//! own center of mass, and tension response to a rim displacement.

use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};
use serde::{Deserialize, Serialize};

use std::f64::consts::FRAC_PI_4;

/// A single spoke, created by a lacing operation on
/// [`crate::components::BicycleWheel`].
///
/// `n` must be a unit vector pointing from the rim attachment toward the hub
/// flange. `tension` starts at zero and is assigned later by
/// `apply_tension`; every other field is fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spoke {
    /// Angular position of the rim attachment point (rad, in [0, 2π))
    pub theta: f64,
    /// Spoke axial unit vector, rim-local frame (lateral, radial, tangential)
    pub n: Vector3<f64>,
    /// Nipple offset vector from the nominal rim attachment point (m)
    pub b: Vector3<f64>,
    /// Spoke length (m)
    pub length: f64,
    /// Spoke diameter (m)
    pub diameter: f64,
    /// Young's modulus (Pa)
    pub young_mod: f64,
    /// Material density (kg/m³); `None` makes mass and inertia unknown
    pub density: Option<f64>,
    /// Current tension (N), assigned after lacing
    pub tension: f64,
    /// Axial stiffness EA = (π/4)d²E (N)
    pub ea: f64,
}

impl Spoke {
    pub fn new(
        theta: f64,
        n: Vector3<f64>,
        b: Vector3<f64>,
        length: f64,
        diameter: f64,
        young_mod: f64,
        density: Option<f64>,
    ) -> Spoke {
        Spoke {
            theta,
            n,
            b,
            length,
            diameter,
            young_mod,
            density,
            tension: 0.0,
            ea: FRAC_PI_4 * diameter.powi(2) * young_mod,
        }
    }

    /// Local 4×4 stiffness matrix: force and moment response at the rim
    /// cross-section to a rigid displacement (u, v, w) and rotation φ.
    ///
    /// The 3×3 translational block is
    ///
    /// ```text
    /// k_f = K_e (n ⊗ n) + K_t (I - n ⊗ n)
    /// ```
    ///
    /// with elastic coefficient K_e = EA/l along the spoke axis and, when
    /// `tension` is true, the geometric coefficient K_t = T/l acting in the
    /// plane orthogonal to it. The rotation column is the force sensitivity
    /// to a unit rotation about the axle propagated through the nipple
    /// offset, dF/dφ = k_f·(e₃ × b), and the (3,3) entry the corresponding
    /// moment sensitivity.
    pub fn calc_k(&self, tension: bool) -> Matrix4<f64> {
        let k_e = self.ea / self.length;
        let k_t = if tension {
            self.tension / self.length
        } else {
            0.0
        };

        self.assemble_k(k_e, k_t)
    }

    /// Per-unit-tension geometric stiffness matrix.
    ///
    /// Identical construction to [`Spoke::calc_k`] with K_e = 0 and
    /// K_t = 1/l; the caller scales it by the actual tension.
    pub fn calc_k_geom(&self) -> Matrix4<f64> {
        self.assemble_k(0.0, 1.0 / self.length)
    }

    fn assemble_k(&self, k_e: f64, k_t: f64) -> Matrix4<f64> {
        let e3 = Vector3::z();
        let nn = self.n * self.n.transpose();
        let k_f: Matrix3<f64> = k_e * nn + k_t * (Matrix3::identity() - nn);

        // Force and moment sensitivity to rim rotation about the axle
        let r = e3.cross(&self.b);
        let df_dphi = k_f * r;
        let dt_dphi = r.dot(&df_dphi);

        let mut k = Matrix4::zeros();
        k.fixed_view_mut::<3, 3>(0, 0).copy_from(&k_f);
        k.fixed_view_mut::<3, 1>(0, 3).copy_from(&df_dphi);
        k.fixed_view_mut::<1, 3>(3, 0)
            .copy_from(&df_dphi.transpose());
        k[(3, 3)] = dt_dphi;

        k
    }

    /// Spoke mass (kg), or `None` if density is unset.
    ///
    /// m = ρ · l · (π/4)d²
    pub fn calc_mass(&self) -> Option<f64> {
        self.density
            .map(|rho| rho * self.length * FRAC_PI_4 * self.diameter.powi(2))
    }

    /// Rotational inertia about the spoke's own center of mass (kg·m²), or
    /// `None` if density is unset.
    ///
    /// Slender-rod term using the radial projection of the spoke,
    /// I = m(l·n₁)²/12. The parallel-axis correction to the wheel axle is
    /// applied by the caller.
    pub fn calc_rot_inertia(&self) -> Option<f64> {
        self.calc_mass()
            .map(|m| m * (self.length * self.n[1]).powi(2) / 12.0)
    }

    /// Change in tension under a generalized rim displacement
    /// d = (u, v, w, φ) and a tightening adjustment `a`.
    ///
    /// The nipple displacement includes the rotational contribution,
    /// u_n = (u, v, w) + φ(e₃ × b), and the tension change is
    /// ΔT = EA/l · (a − n·u_n).
    pub fn calc_tension_change(&self, d: &Vector4<f64>, a: f64) -> f64 {
        let e3 = Vector3::z();
        let u_n = Vector3::new(d[0], d[1], d[2]) + d[3] * e3.cross(&self.b);

        self.ea / self.length * (a - self.n.dot(&u_n))
    }

    /// Tension change for a pure translation (rotation taken as zero).
    pub fn calc_tension_change_uvw(&self, d: &Vector3<f64>, a: f64) -> f64 {
        self.calc_tension_change(&Vector4::new(d[0], d[1], d[2], 0.0), a)
    }
}
