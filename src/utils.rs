use crate::config::Config;
use crate::diffusion::{Coefficients, RdError};

/// Min, max and mean over the finite values of a reflectance set, with the count of values
/// that went to NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RdSummary {
    pub count: usize,
    pub finite: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl RdSummary {
    pub fn from_values(values: &[f64]) -> Self {
        let finite_values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        let mean = if finite_values.is_empty() {
            f64::NAN
        } else {
            finite_values.iter().sum::<f64>() / finite_values.len() as f64
        };

        Self {
            count: values.len(),
            finite: finite_values.len(),
            min: finite_values.iter().fold(f64::INFINITY, |a, &b| a.min(b)),
            max: finite_values
                .iter()
                .fold(f64::NEG_INFINITY, |a, &b| a.max(b)),
            mean,
        }
    }

    pub fn non_finite(&self) -> usize {
        self.count - self.finite
    }
}

pub fn print_reflectance_summary(
    config: &Config,
    rd: &Coefficients,
) -> Result<RdSummary, RdError> {
    let unit = config.units().inverse_symbol();
    let pairs = config.mua().broadcast_pairs(config.musp())?;

    println!(
        "Farrell diffuse reflectance - n: {}, domain policy: {}, values: {}",
        config.refractive_index(),
        config.domain_policy(),
        rd.len()
    );

    for ((mua, musp), value) in pairs.iter().zip(rd.as_slice()) {
        println!(
            "  mua: {:>10.5} {unit}  musp: {:>10.5} {unit}  Rd: {:.6}",
            mua, musp, value
        );
    }

    let summary = RdSummary::from_values(rd.as_slice());

    if summary.finite > 0 {
        println!("  Min: {:.6}", summary.min);
        println!("  Max: {:.6}", summary.max);
        println!("  Mean: {:.6}", summary.mean);
    }
    println!(
        "  Finite values: {} / {} ({:.1}%)",
        summary.finite,
        summary.count,
        if summary.count == 0 {
            0.0
        } else {
            100.0 * summary.finite as f64 / summary.count as f64
        }
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_skips_non_finite() {
        let summary = RdSummary::from_values(&[0.2, f64::NAN, 0.6, f64::INFINITY]);

        assert_eq!(summary.count, 4);
        assert_eq!(summary.finite, 2);
        assert_eq!(summary.non_finite(), 2);
        assert_eq!(summary.min, 0.2);
        assert_eq!(summary.max, 0.6);
        assert!((summary.mean - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = RdSummary::from_values(&[]);

        assert_eq!(summary.count, 0);
        assert!(summary.mean.is_nan());
    }

    #[test]
    fn test_print_reflectance_summary() {
        let config = Config::new(
            Coefficients::Scalar(0.01),
            Coefficients::Array(vec![1.0, 2.0]),
            1.4,
        )
        .unwrap();
        let rd = config.compute_rd().unwrap();

        let summary = print_reflectance_summary(&config, &rd).unwrap();

        assert_eq!(summary.count, 2);
        assert_eq!(summary.finite, 2);
        assert!(summary.max <= 1.0);
    }
}
