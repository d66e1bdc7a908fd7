//! # Thin-Walled Cross-Section Properties
//!
//! Formulas for the cross-section constants of thin-walled rim profiles.
//! Dimensions are measured on the wall midlines: `w` is the section
//! half-width (lateral direction), `h` the half-height (radial direction),
//! and `t` the wall thickness.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I_rad` = Second moment of area about the radial bending axis
//! - `I_lat` = Second moment of area about the lateral bending axis
//! - `J` = Torsion constant
//! - `I_w` = Warping constant
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Chapter 10
//! - Timoshenko & Gere, Theory of Elastic Stability, thin-walled members

// =============================================================================
// CLOSED BOX SECTION
// Rectangular tube, constant wall thickness
// =============================================================================

/// Cross-sectional area of a closed box section
///
/// ```text
///     ┌─────────┐ ─┐
///     │ ┌─────┐ │  │
///     │ │     │ │  │ h
///     │ └─────┘ │  │
///     └─────────┘ ─┘
///     t ├── w ──┤
/// ```
///
/// # Formula
/// A = 2(w + t/2)t + 2(h − t/2)t
///
/// # Example
/// ```rust
/// use wheel_core::equations::section::box_area;
///
/// let area = box_area(0.01, 0.015, 0.002);
/// assert!((area - 1.0e-4).abs() < 1e-12);
/// ```
#[inline]
pub fn box_area(w: f64, h: f64, t: f64) -> f64 {
    2.0 * (w + t / 2.0) * t + 2.0 * (h - t / 2.0) * t
}

/// Torsion constant of a closed box section
///
/// Bredt's formula for a single-cell closed section:
///
/// # Formula
/// J = 2t(wh)² / (w + h)
#[inline]
pub fn box_torsion_constant(w: f64, h: f64, t: f64) -> f64 {
    2.0 * t * (w * h).powi(2) / (w + h)
}

/// Second moment of area of a box section about the radial bending axis
///
/// Vertical walls bend about their own centroid; horizontal walls carry a
/// parallel-axis term at h/2.
///
/// # Formula
/// I_rad = 2·t(h+t)³/12 + 2·[(w−t)t³/12 + (w−t)t(h/2)²]
#[inline]
pub fn box_second_moment_rad(w: f64, h: f64, t: f64) -> f64 {
    2.0 * (t * (h + t).powi(3)) / 12.0
        + 2.0 * ((w - t) * t.powi(3) / 12.0 + (w - t) * t * (h / 2.0).powi(2))
}

/// Second moment of area of a box section about the lateral bending axis
///
/// Same construction as [`box_second_moment_rad`] with the roles of the
/// wall pairs exchanged.
#[inline]
pub fn box_second_moment_lat(w: f64, h: f64, t: f64) -> f64 {
    2.0 * (t * (w + t).powi(3)) / 12.0
        + 2.0 * ((h - t) * t.powi(3) / 12.0 + (h - t) * t * (w / 2.0).powi(2))
}

// =============================================================================
// OPEN C-CHANNEL SECTION
// Web of width w, two flanges of depth h, constant wall thickness
// =============================================================================

/// Cross-sectional area of a C-channel section
///
/// # Formula
/// A = (w + t)t + 2(h − t)t
#[inline]
pub fn c_channel_area(w: f64, h: f64, t: f64) -> f64 {
    (w + t) * t + 2.0 * (h - t) * t
}

/// Torsion constant of an open C-channel section
///
/// Open thin-wall approximation: J = (1/3)t³ × developed midline length.
///
/// # Formula
/// J = t³(w + 2(h − t)) / 3
#[inline]
pub fn c_channel_torsion_constant(w: f64, h: f64, t: f64) -> f64 {
    t.powi(3) * (w + 2.0 * (h - t)) / 3.0
}

/// Warping constant of a C-channel section
///
/// # Formula
/// I_w = (t·h³·w²/12) · (3h + 2w)/(6h + w)
///
/// # Example
/// ```rust
/// use wheel_core::equations::section::c_channel_warping_constant;
///
/// let i_w = c_channel_warping_constant(0.03, 0.01, 0.002);
/// assert!((i_w - 1.5e-13).abs() < 1e-18);
/// ```
#[inline]
pub fn c_channel_warping_constant(w: f64, h: f64, t: f64) -> f64 {
    (t * h.powi(3) * w.powi(2) / 12.0) * (3.0 * h + 2.0 * w) / (6.0 * h + w)
}

/// Centroid height of a C-channel section, measured from the web midline
///
/// # Formula
/// y_c = (h − t)t·h / A
#[inline]
pub fn c_channel_centroid(w: f64, h: f64, t: f64) -> f64 {
    (h - t) * t * h / c_channel_area(w, h, t)
}

/// Shear-center height of a C-channel section, measured from the web midline
///
/// The shear center of a channel lies outside the section, on the opposite
/// side of the web from the flanges.
///
/// # Formula
/// y_s = −3h² / (6h + w)
#[inline]
pub fn c_channel_shear_center(w: f64, h: f64) -> f64 {
    -3.0 * h.powi(2) / (6.0 * h + w)
}

/// Second moment of area of a C-channel about the radial axis through the
/// true centroid
///
/// Web and flanges each carry a parallel-axis term relative to the centroid
/// height `y_c` (see [`c_channel_centroid`]).
#[inline]
pub fn c_channel_second_moment_rad(w: f64, h: f64, t: f64, y_c: f64) -> f64 {
    (w + t) * t.powi(3) / 12.0
        + (w + t) * t * y_c.powi(2)
        + 2.0 * (t * (h - t).powi(3) / 12.0 + (h - t) * t * (h / 2.0 - y_c).powi(2))
}

/// Second moment of area of a C-channel about the lateral (symmetry) axis
#[inline]
pub fn c_channel_second_moment_lat(w: f64, h: f64, t: f64) -> f64 {
    (t * w.powi(3)) / 12.0
        + 2.0 * ((h - t) * t.powi(3) / 12.0 + (h - t) * t * (w / 2.0).powi(2))
}
