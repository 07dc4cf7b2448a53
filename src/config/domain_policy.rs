use serde::Deserialize;
use std::fmt;

/// How non-physical optical properties are handled during evaluation
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Let IEEE-754 arithmetic decide: infinities and NaNs flow into Rd
    #[default]
    #[serde(rename(deserialize = "propagate"))]
    Propagate,
    /// Reject mua <= 0, musp < 0 or n <= 0 before evaluating
    #[serde(rename(deserialize = "strict"))]
    Strict,
}

impl fmt::Display for DomainPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DomainPolicy::Propagate => write!(f, "propagate"),
            DomainPolicy::Strict => write!(f, "strict"),
        }
    }
}
