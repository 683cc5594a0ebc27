//! Engine deck configuration.

use std::path::Path;

use serde::Deserialize;

use crate::engine::Quantity;
use crate::error::Error;

/// Multiplicative corrections applied to in-range table lookups.
///
/// # Default Values
///
/// | Parameter | Default |
/// |-----------|---------|
/// | `thrust_ratio_correction` | 1.0 |
/// | `sfc_correction` | 1.0 |
/// | `emission_index_correction` | 1.0 |
///
/// # Examples
///
/// ```rust
/// use enginterp::DeckConfig;
///
/// let config = DeckConfig::from_toml_str("sfc_correction = 1.03").unwrap();
/// assert_eq!(config.sfc_correction, 1.03);
/// assert_eq!(config.thrust_ratio_correction, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckConfig {
    /// Factor on every thrust ratio.
    pub thrust_ratio_correction: f64,

    /// Factor on every specific fuel consumption.
    pub sfc_correction: f64,

    /// Factor on every emission index, whatever the pollutant.
    pub emission_index_correction: f64,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            thrust_ratio_correction: 1.0,
            sfc_correction: 1.0,
            emission_index_correction: 1.0,
        }
    }
}

impl DeckConfig {
    /// All factors set to 1.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thrust ratio factor.
    pub fn with_thrust_ratio_correction(mut self, factor: f64) -> Self {
        self.thrust_ratio_correction = factor;
        self
    }

    /// Set the SFC factor.
    pub fn with_sfc_correction(mut self, factor: f64) -> Self {
        self.sfc_correction = factor;
        self
    }

    /// Set the factor shared by all emission indices.
    pub fn with_emission_index_correction(mut self, factor: f64) -> Self {
        self.emission_index_correction = factor;
        self
    }

    /// Correction factor for one output quantity.
    pub fn correction(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::ThrustRatio => self.thrust_ratio_correction,
            Quantity::Sfc => self.sfc_correction,
            Quantity::EmissionIndex(_) => self.emission_index_correction,
        }
    }

    /// All factors must be finite and positive.
    pub fn validate(&self) -> Result<(), Error> {
        let factors = [
            ("thrust_ratio_correction", self.thrust_ratio_correction),
            ("sfc_correction", self.sfc_correction),
            ("emission_index_correction", self.emission_index_correction),
        ];
        for (name, factor) in factors {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be finite and positive, got {factor}"
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        let config: DeckConfig =
            toml::from_str(s).map_err(|e| Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigParse(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}
