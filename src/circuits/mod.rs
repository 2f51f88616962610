//! Circuit primitives: components, flat series/parallel circuits and analyses.

/// Circuit-level analyses: reports and frequency sweeps.
pub mod analysis;
/// Lumped component definitions.
pub mod component;
/// Aggregate circuit composition.
pub mod network;
/// Fixed topologies offered by the command-line tool.
pub mod topology;

pub use analysis::{CircuitReport, ComponentReport, FrequencyPoint};
pub use component::{Capacitor, Component, ComponentKind, Diode, Element, Inductor, Resistor, Transistor};
pub use network::{Circuit, ComponentId, ConnectionKind};
pub use topology::{Parameter, ParameterValues, Topology};
