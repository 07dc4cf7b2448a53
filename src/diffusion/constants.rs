//! Coefficients of the internal reflection fit
//!
//! Groenhuis et al. (1983) empirical polynomial for the internal diffuse reflection
//! at a refractive-index mismatched boundary, as used by Farrell et al. (1992):
//! `ri = RI_C0 + RI_C1 * n + RI_C2 / n + RI_C3 / n^2`

pub const RI_C0: f64 = 0.6681;
pub const RI_C1: f64 = 0.0636;
pub const RI_C2: f64 = 0.7099;
pub const RI_C3: f64 = -1.4399;
