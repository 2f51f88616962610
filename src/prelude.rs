//! Convenience re-exports for building and analysing circuits.

pub use crate::circuits::{
    analysis::{sweep_circuit_impedance, CircuitReport, ComponentReport, FrequencyPoint},
    component::{Capacitor, Component, ComponentKind, Diode, Element, Inductor, Resistor, Transistor},
    network::{Circuit, ComponentId, ConnectionKind},
    topology::{Parameter, ParameterValues, Topology},
};
pub use crate::config::{AnalysisConfig, ConfigError, SweepConfig, SweepSpacing};
pub use crate::constants::angular_frequency;
pub use crate::errors::{DomainError, Error};
pub use crate::math::{CScalar, Scalar};
pub use crate::sweep::{linspace, logspace_hz};
