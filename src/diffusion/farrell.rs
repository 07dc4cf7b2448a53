//! Diffuse reflectance from a semi-infinite homogeneous turbid medium
//!
//! Steady-state diffusion theory solution with an extrapolated boundary, as derived by
//! Farrell, Patterson and Wilson. Given the absorption coefficient `mua`, the reduced
//! scattering coefficient `musp = mus * (1 - g)` (both in the same inverse length unit,
//! cm^-1 or mm^-1) and the ratio `n` of the refractive index of the medium to that of the
//! outside medium, the total diffuse reflectance is
//!
//! ```text
//! ri    = 0.6681 + 0.0636 n + 0.7099 / n - 1.4399 / n^2
//! A     = (1 + ri) / (1 - ri)
//! zo    = 1 / (mua + musp)
//! D     = zo / 3
//! delta = sqrt(D / mua)
//! mueff = 1 / delta
//! ap    = musp / (mua + musp)
//! Rd    = ap exp(-mueff zo) / 2 (1 + exp(-4/3 A sqrt(3 (1 - ap))))
//! ```
//!
//! No domain checks are performed by [`get_rd_farrell`] and [`rd_farrell`]: division by
//! zero and square roots of negative values propagate as infinities and NaNs. Use
//! [`get_rd_farrell_checked`] to reject non-physical inputs instead.
//!
//! ## References
//!
//! - Farrell, T. J., Patterson, M. S., & Wilson, B. (1992). A diffusion theory model of
//!   spatially resolved, steady-state diffuse reflectance for the noninvasive determination
//!   of tissue optical properties in vivo. *Medical Physics*, 19(4), 879-888.
//! - Groenhuis, R. A. J., Ferwerda, H. A., & Ten Bosch, J. J. (1983). Scattering and
//!   absorption of turbid materials determined from reflection measurements.
//!   *Applied Optics*, 22(16), 2456-2462.
//!
//! ## Usage Example
//!
//! ```rust
//! use farrell::diffusion::get_rd_farrell;
//!
//! let rd = get_rd_farrell([0.001, 0.01], [1.0, 2.0], 1.4).unwrap();
//! assert_eq!(rd.len(), 2);
//! println!("Rd: {}", rd);
//! ```

use std::fmt;

use crate::diffusion::constants;
use crate::diffusion::{Coefficients, RdError};

/// Every quantity derived on the way to `Rd` for one (mua, musp) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FarrellResult {
    pub mua: f64,   // Absorption coefficient [L^-1]
    pub musp: f64,  // Reduced scattering coefficient [L^-1]
    pub n: f64,     // Relative refractive index [dimensionless]
    pub ri: f64,    // Internal reflection parameter [dimensionless]
    pub a: f64,     // Boundary reflection coefficient A [dimensionless]
    pub zo: f64,    // Depth of the isotropic source, one transport mean free path [L]
    pub d: f64,     // Diffusion coefficient [L]
    pub delta: f64, // Diffusion length [L]
    pub mueff: f64, // Effective attenuation coefficient [L^-1]
    pub ap: f64,    // Transport albedo [dimensionless]
    pub rd: f64,    // Diffuse reflectance [dimensionless]
}

impl FarrellResult {
    pub fn compute(mua: f64, musp: f64, n: f64) -> Self {
        let ri = internal_reflection(n);
        let a = boundary_factor(n);

        let zo = 1.0 / (mua + musp);
        let d = zo / 3.0;
        let delta = (d / mua).sqrt();
        let mueff = 1.0 / delta;
        let ap = musp / (mua + musp);

        let rd = ap * (-mueff * zo).exp() / 2.0
            * (1.0 + (-4.0 / 3.0 * a * (3.0 * (1.0 - ap)).sqrt()).exp());

        FarrellResult {
            mua,
            musp,
            n,
            ri,
            a,
            zo,
            d,
            delta,
            mueff,
            ap,
            rd,
        }
    }
}

impl fmt::Display for FarrellResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mua: {}, musp: {}, n: {}", self.mua, self.musp, self.n)?;
        writeln!(f, "  ri: {:.6}, A: {:.6}", self.ri, self.a)?;
        writeln!(
            f,
            "  zo: {:.6}, D: {:.6}, delta: {:.6}, mueff: {:.6}",
            self.zo, self.d, self.delta, self.mueff
        )?;
        write!(f, "  ap: {:.6}, Rd: {:.6}", self.ap, self.rd)
    }
}

/// Internal reflection parameter `ri` of the boundary for a relative refractive index `n`
pub fn internal_reflection(n: f64) -> f64 {
    constants::RI_C0 + constants::RI_C1 * n + constants::RI_C2 / n + constants::RI_C3 / n.powi(2)
}

/// Boundary reflection coefficient `A = (1 + ri) / (1 - ri)`
pub fn boundary_factor(n: f64) -> f64 {
    let ri = internal_reflection(n);
    (1.0 + ri) / (1.0 - ri)
}

/// Diffuse reflectance for a single (mua, musp) pair.
pub fn rd_farrell(mua: f64, musp: f64, n: f64) -> f64 {
    FarrellResult::compute(mua, musp, n).rd
}

/// Diffuse reflectance for scalar or sequence inputs.
///
/// `mua` and `musp` are broadcast together and the result keeps their broadcast shape: two
/// scalars give a scalar, anything involving a sequence gives a sequence. The only error is
/// a pair of sequences whose lengths cannot be broadcast.
pub fn get_rd_farrell<M, S>(mua: M, musp: S, n: f64) -> Result<Coefficients, RdError>
where
    M: Into<Coefficients>,
    S: Into<Coefficients>,
{
    let mua = mua.into();
    let musp = musp.into();

    mua.zip_map(&musp, |mua, musp| rd_farrell(mua, musp, n))
}

/// Checks that a (mua, musp, n) triple is physically meaningful.
pub fn check_domain(mua: f64, musp: f64, n: f64) -> Result<(), RdError> {
    if n.is_nan() || n <= 0.0 {
        return Err(RdError::NonPositiveRefractiveIndex(n));
    }
    if mua.is_nan() || mua <= 0.0 {
        return Err(RdError::NonPositiveAbsorption(mua));
    }
    if musp.is_nan() || musp < 0.0 {
        return Err(RdError::NegativeScattering(musp));
    }

    Ok(())
}

/// Same as [`get_rd_farrell`], but every pair is validated with [`check_domain`] first and
/// the first violation is returned instead of a NaN or infinite reflectance.
pub fn get_rd_farrell_checked<M, S>(mua: M, musp: S, n: f64) -> Result<Coefficients, RdError>
where
    M: Into<Coefficients>,
    S: Into<Coefficients>,
{
    let mua = mua.into();
    let musp = musp.into();

    // Still check n when the broadcast shape is empty
    if n.is_nan() || n <= 0.0 {
        return Err(RdError::NonPositiveRefractiveIndex(n));
    }

    mua.try_for_each_pair(&musp, |mua, musp| check_domain(mua, musp, n))?;
    mua.zip_map(&musp, |mua, musp| rd_farrell(mua, musp, n))
}
