use serde::Deserialize;
use std::fmt;

use crate::diffusion::RdError;

/// A single optical coefficient or an ordered sequence of them.
///
/// Deserializes from either a JSON number or a JSON array of numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Coefficients {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Coefficients {
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Coefficients::Scalar(_))
    }

    pub fn as_slice(&self) -> &[f64] {
        match self {
            Coefficients::Scalar(v) => std::slice::from_ref(v),
            Coefficients::Array(values) => values,
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Coefficients::Scalar(v) => Some(*v),
            Coefficients::Array(_) => None,
        }
    }

    // Value paired with element `index` of the broadcast shape. Scalars and length-1
    // arrays repeat their only value.
    fn value_at(&self, index: usize) -> f64 {
        let values = self.as_slice();
        if values.len() == 1 {
            values[0]
        } else {
            values[index]
        }
    }

    /// Broadcast shape of `self` paired with `other`, following numpy rules.
    ///
    /// Returns `None` when both sides are scalars, otherwise the length of the resulting
    /// sequence.
    pub fn broadcast_len(&self, other: &Coefficients) -> Result<Option<usize>, RdError> {
        match (self, other) {
            (Coefficients::Scalar(_), Coefficients::Scalar(_)) => Ok(None),
            (Coefficients::Scalar(_), Coefficients::Array(v))
            | (Coefficients::Array(v), Coefficients::Scalar(_)) => Ok(Some(v.len())),
            (Coefficients::Array(a), Coefficients::Array(b)) => {
                if a.len() == b.len() || b.len() == 1 {
                    Ok(Some(a.len()))
                } else if a.len() == 1 {
                    Ok(Some(b.len()))
                } else {
                    Err(RdError::ShapeMismatch {
                        mua: a.len(),
                        musp: b.len(),
                    })
                }
            }
        }
    }

    /// Applies `f` to every broadcast pair of `self` and `other`, keeping the broadcast
    /// shape in the output.
    pub fn zip_map<F>(&self, other: &Coefficients, mut f: F) -> Result<Coefficients, RdError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        match self.broadcast_len(other)? {
            None => Ok(Coefficients::Scalar(f(self.value_at(0), other.value_at(0)))),
            Some(len) => Ok(Coefficients::Array(
                (0..len)
                    .map(|i| f(self.value_at(i), other.value_at(i)))
                    .collect(),
            )),
        }
    }

    /// Every (self, other) pair of the broadcast shape, in order.
    pub fn broadcast_pairs(&self, other: &Coefficients) -> Result<Vec<(f64, f64)>, RdError> {
        let len = self.broadcast_len(other)?.unwrap_or(1);
        Ok((0..len)
            .map(|i| (self.value_at(i), other.value_at(i)))
            .collect())
    }

    /// Visits every broadcast pair, stopping at the first error.
    pub fn try_for_each_pair<F, E>(&self, other: &Coefficients, mut f: F) -> Result<(), E>
    where
        F: FnMut(f64, f64) -> Result<(), E>,
        E: From<RdError>,
    {
        let len = self.broadcast_len(other)?.unwrap_or(1);
        (0..len).try_for_each(|i| f(self.value_at(i), other.value_at(i)))
    }
}

impl From<f64> for Coefficients {
    fn from(value: f64) -> Self {
        Coefficients::Scalar(value)
    }
}

impl From<Vec<f64>> for Coefficients {
    fn from(values: Vec<f64>) -> Self {
        Coefficients::Array(values)
    }
}

impl From<&[f64]> for Coefficients {
    fn from(values: &[f64]) -> Self {
        Coefficients::Array(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Coefficients {
    fn from(values: [f64; N]) -> Self {
        Coefficients::Array(values.to_vec())
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficients::Scalar(v) => write!(f, "{}", v),
            Coefficients::Array(values) => {
                let joined = values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "[{}]", joined)
            }
        }
    }
}
