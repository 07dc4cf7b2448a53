use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::diffusion::{Coefficients, RdError, get_rd_farrell, get_rd_farrell_checked};

pub mod error;
pub use error::ConfigError;

pub mod domain_policy;
pub use domain_policy::DomainPolicy;

pub mod units;
pub use units::LengthUnit;

#[derive(Debug, Clone)]
pub struct Config {
    refractive_index: f64,
    mua: Coefficients,
    musp: Coefficients,
    domain_policy: DomainPolicy,
    units: LengthUnit,
}

// This function deserializes a Config object from a deserializer, ensuring mua and musp can be
// broadcast together. Value ranges are left to the domain policy at evaluation time.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            refractive_index: f64,
            mua: Coefficients,
            musp: Coefficients,
            #[serde(default)]
            domain_policy: DomainPolicy,
            #[serde(default)]
            units: LengthUnit,
        }

        let helper = ConfigHelper::deserialize(deserializer)?;

        helper
            .mua
            .broadcast_len(&helper.musp)
            .map_err(|e| D::Error::custom(ConfigError::Shape(e)))?;

        Ok(Config {
            refractive_index: helper.refractive_index,
            mua: helper.mua,
            musp: helper.musp,
            domain_policy: helper.domain_policy,
            units: helper.units,
        })
    }
}

impl Config {
    pub fn new(
        mua: Coefficients,
        musp: Coefficients,
        refractive_index: f64,
    ) -> Result<Self, ConfigError> {
        mua.broadcast_len(&musp)?;

        Ok(Self {
            refractive_index,
            mua,
            musp,
            domain_policy: DomainPolicy::default(),
            units: LengthUnit::default(),
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        log::debug!("Reading configuration from {}", path.as_ref().display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn with_domain_policy(mut self, domain_policy: DomainPolicy) -> Self {
        self.domain_policy = domain_policy;
        self
    }

    pub fn refractive_index(&self) -> f64 {
        self.refractive_index
    }

    pub fn mua(&self) -> &Coefficients {
        &self.mua
    }

    pub fn musp(&self) -> &Coefficients {
        &self.musp
    }

    pub fn domain_policy(&self) -> DomainPolicy {
        self.domain_policy
    }

    pub fn units(&self) -> LengthUnit {
        self.units
    }

    /// Diffuse reflectance of every configured (mua, musp) pair
    pub fn compute_rd(&self) -> Result<Coefficients, RdError> {
        let mua = self.mua.clone();
        let musp = self.musp.clone();

        match self.domain_policy {
            DomainPolicy::Propagate => get_rd_farrell(mua, musp, self.refractive_index),
            DomainPolicy::Strict => get_rd_farrell_checked(mua, musp, self.refractive_index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diffusion::rd_farrell;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut file = File::create(&file_path).unwrap();

        let config_data = r#"
    {
        "refractive_index": 1.4,
        "mua": [0.001, 0.01],
        "musp": [1, 2],
        "domain_policy": "strict",
        "units": "mm"
    }
    "#;

        file.write_all(config_data.as_bytes()).unwrap();

        let config = Config::from_file(file_path).unwrap();

        assert_eq!(config.refractive_index(), 1.4);
        assert_eq!(config.mua(), &Coefficients::Array(vec![0.001, 0.01]));
        assert_eq!(config.musp(), &Coefficients::Array(vec![1.0, 2.0]));
        assert_eq!(config.domain_policy(), DomainPolicy::Strict);
        assert_eq!(config.units(), LengthUnit::Millimeter);
    }

    #[test]
    fn test_defaults_and_scalars() {
        let config: Config = serde_json::from_str(
            r#"{ "refractive_index": 1.33, "mua": 0.1, "musp": [5, 10, 15] }"#,
        )
        .unwrap();

        assert_eq!(config.mua(), &Coefficients::Scalar(0.1));
        assert_eq!(config.domain_policy(), DomainPolicy::Propagate);
        assert_eq!(config.units(), LengthUnit::Centimeter);
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let result = serde_json::from_str::<Config>(
            r#"{ "refractive_index": 1.4, "mua": [0.1, 0.2], "musp": [5, 10, 15] }"#,
        );

        let err = result.unwrap_err().to_string();
        assert!(err.contains("cannot be broadcast"), "{err}");

        assert!(matches!(
            Config::new(vec![0.1, 0.2].into(), vec![1.0, 2.0, 3.0].into(), 1.4),
            Err(ConfigError::Shape(RdError::ShapeMismatch { mua: 2, musp: 3 }))
        ));
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = serde_json::from_str::<Config>(
            r#"{ "refractive_index": 1.4, "mua": 0.1, "musp": 5, "domain_policy": "ignore" }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = Config::from_file(dir.path().join("missing.json"));

        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_compute_rd_follows_policy() {
        let config =
            Config::new(vec![0.0, 0.01].into(), vec![0.0, 2.0].into(), 1.4).unwrap();

        let rd = config.compute_rd().unwrap();
        assert!(rd.as_slice()[0].is_nan());
        assert_eq!(rd.as_slice()[1], rd_farrell(0.01, 2.0, 1.4));

        let strict = config.with_domain_policy(DomainPolicy::Strict);
        assert_eq!(
            strict.compute_rd(),
            Err(RdError::NonPositiveAbsorption(0.0))
        );
    }
}
