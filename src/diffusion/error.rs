use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RdError {
    ShapeMismatch { mua: usize, musp: usize },
    NonPositiveAbsorption(f64),
    NegativeScattering(f64),
    NonPositiveRefractiveIndex(f64),
}

impl fmt::Display for RdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdError::ShapeMismatch { mua, musp } => write!(
                f,
                "mua ({} values) and musp ({} values) cannot be broadcast together",
                mua, musp
            ),
            RdError::NonPositiveAbsorption(v) => {
                write!(f, "absorption coefficient must be > 0, got {}", v)
            }
            RdError::NegativeScattering(v) => {
                write!(f, "reduced scattering coefficient must be >= 0, got {}", v)
            }
            RdError::NonPositiveRefractiveIndex(v) => {
                write!(f, "refractive index ratio must be > 0, got {}", v)
            }
        }
    }
}

impl std::error::Error for RdError {}
