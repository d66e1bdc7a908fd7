//! # Engineering Formulas
//!
//! Pure formula functions used by the component factories. Each function is a
//! direct transcription of a textbook thin-walled-section formula; no state,
//! no validation, no unit conversion.
//!
//! - [`section`] - Thin-walled cross-section properties (box and C-channel)

pub mod section;
