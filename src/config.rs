//! Analysis configuration assembled from command-line flags and prompts.

use crate::circuits::network::Circuit;
use crate::circuits::topology::{ParameterValues, Topology};
use crate::errors::Error;
use crate::math::Scalar;
use crate::sweep::{linspace, logspace_hz};

/// Errors raised while validating a configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Raised when a required parameter is missing.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
    /// Raised when the configuration is internally inconsistent.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

/// Sample spacing for frequency sweeps.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SweepSpacing {
    /// Evenly spaced in hertz.
    #[default]
    Linear,
    /// Evenly spaced in decades.
    Logarithmic,
}

/// Frequency sweep over a built circuit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// First frequency in hertz.
    pub start_hz: Scalar,
    /// Last frequency in hertz.
    pub stop_hz: Scalar,
    /// Number of samples, endpoints included.
    pub points: usize,
    /// Sample spacing.
    pub spacing: SweepSpacing,
}

impl SweepConfig {
    /// Checks that the sweep range is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.start_hz.is_finite() && self.stop_hz.is_finite()) {
            return Err(ConfigError::InvalidConfig("sweep bounds must be finite".into()));
        }
        if self.start_hz <= 0.0 || self.stop_hz < self.start_hz {
            return Err(ConfigError::InvalidConfig(format!(
                "sweep range {} Hz .. {} Hz must satisfy 0 < start <= stop",
                self.start_hz, self.stop_hz
            )));
        }
        if self.points == 0 {
            return Err(ConfigError::InvalidConfig("sweep needs at least one point".into()));
        }
        Ok(())
    }

    /// Sample frequencies in hertz. The range is validated first.
    pub fn frequencies(&self) -> Result<Vec<Scalar>, ConfigError> {
        self.validate()?;
        Ok(match self.spacing {
            SweepSpacing::Linear => linspace(self.start_hz, self.stop_hz, self.points),
            SweepSpacing::Logarithmic => logspace_hz(self.start_hz, self.stop_hz, self.points),
        })
    }
}

/// A fully specified single-frequency analysis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Topology to build.
    pub topology: Topology,
    /// Excitation frequency in hertz.
    pub frequency_hz: Scalar,
    /// Component values.
    pub values: ParameterValues,
    /// Optional sweep run after the single-frequency report.
    pub sweep: Option<SweepConfig>,
}

impl AnalysisConfig {
    /// Creates a configuration without a sweep.
    #[must_use]
    pub fn new(topology: Topology, frequency_hz: Scalar, values: ParameterValues) -> Self {
        Self {
            topology,
            frequency_hz,
            values,
            sweep: None,
        }
    }

    /// Checks the frequency, the presence and sign of every value the
    /// topology needs, and the sweep range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.frequency_hz.is_finite() && self.frequency_hz > 0.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "frequency must be a positive number of hertz, got {}",
                self.frequency_hz
            )));
        }
        for &parameter in self.topology.parameters() {
            let value = self
                .values
                .get(parameter)
                .ok_or(ConfigError::MissingParameter(parameter.name()))?;
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidConfig(format!(
                    "{parameter} must be a positive number of {}, got {value}",
                    parameter.unit()
                )));
            }
        }
        if let Some(sweep) = &self.sweep {
            sweep.validate()?;
        }
        Ok(())
    }

    /// Validates, builds the topology and applies the frequency.
    pub fn build_circuit(&self) -> Result<Circuit, Error> {
        self.validate()?;
        let mut circuit = self.topology.build(&self.values)?;
        circuit.set_frequency(self.frequency_hz)?;
        Ok(circuit)
    }
}
