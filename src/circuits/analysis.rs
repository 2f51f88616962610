use std::fmt;
use std::io::{self, Write};

use num_complex::Complex;
use tracing::debug;

use crate::circuits::component::ComponentKind;
use crate::circuits::network::{Circuit, ConnectionKind};
use crate::errors::Result;
use crate::math::{self, Scalar};

/// Impedance of a single component at the analysed frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentReport {
    /// Component name.
    pub name: String,
    /// Component kind.
    pub kind: ComponentKind,
    /// Complex impedance in ohms.
    pub impedance: Complex<Scalar>,
    /// Impedance modulus in ohms.
    pub magnitude: Scalar,
    /// Phase difference in radians.
    pub phase: Scalar,
}

/// Aggregate and per-component results for a circuit at one frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitReport {
    /// Circuit name.
    pub name: String,
    /// How the members are combined.
    pub connection: ConnectionKind,
    /// Frequency in hertz, if one was applied.
    pub frequency_hz: Option<Scalar>,
    /// Total complex impedance in ohms.
    pub total_impedance: Complex<Scalar>,
    /// Total impedance modulus in ohms.
    pub magnitude: Scalar,
    /// Total phase difference in radians.
    pub phase: Scalar,
    /// Members in insertion order.
    pub components: Vec<ComponentReport>,
}

impl CircuitReport {
    /// Reads the current results out of `circuit`.
    pub fn from_circuit(circuit: &Circuit) -> Result<Self> {
        let total_impedance = circuit.total_impedance()?;
        let components = circuit
            .components()
            .map(|c| -> Result<ComponentReport> {
                Ok(ComponentReport {
                    name: c.name().to_owned(),
                    kind: c.kind(),
                    impedance: c.impedance()?,
                    magnitude: c.impedance_magnitude()?,
                    phase: c.phase_difference()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            name: circuit.name().to_owned(),
            connection: circuit.connection_kind(),
            frequency_hz: circuit.frequency(),
            total_impedance,
            magnitude: math::magnitude(total_impedance),
            phase: math::phase(total_impedance),
            components,
        })
    }
}

impl fmt::Display for CircuitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frequency_hz {
            Some(hz) => writeln!(f, "Total Impedance Magnitude at {hz}Hz: {} Ohms", self.magnitude)?,
            None => writeln!(f, "Total Impedance Magnitude: {} Ohms", self.magnitude)?,
        }
        writeln!(f, "Total Phase Difference: {} rad", self.phase)?;
        writeln!(f)?;
        writeln!(f, "Component Impedances and Phase Shifts:")?;
        for c in &self.components {
            writeln!(f, "Type: {}", c.kind)?;
            writeln!(f, "Impedance Magnitude: {} Ohms", c.magnitude)?;
            writeln!(f, "Phase Shift: {} rad", c.phase)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Result of evaluating a circuit at a single frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyPoint {
    /// Frequency in hertz.
    pub frequency_hz: Scalar,
    /// Equivalent impedance of the circuit.
    pub impedance: Complex<Scalar>,
}

impl FrequencyPoint {
    /// Impedance modulus in ohms.
    #[must_use]
    pub fn magnitude(&self) -> Scalar {
        math::magnitude(self.impedance)
    }

    /// Impedance argument in radians.
    #[must_use]
    pub fn phase(&self) -> Scalar {
        math::phase(self.impedance)
    }
}

/// Computes the equivalent impedance of `circuit` at each frequency in
/// `frequencies`. The circuit itself is left at its current frequency; the
/// first failing point aborts the sweep.
pub fn sweep_circuit_impedance<I>(circuit: &Circuit, frequencies: I) -> Result<Vec<FrequencyPoint>>
where
    I: IntoIterator<Item = Scalar>,
{
    let mut scratch = circuit.clone();
    let points = frequencies
        .into_iter()
        .map(|hz| -> Result<FrequencyPoint> {
            scratch.set_frequency(hz)?;
            Ok(FrequencyPoint {
                frequency_hz: hz,
                impedance: scratch.total_impedance()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(circuit = circuit.name(), points = points.len(), "sweep complete");
    Ok(points)
}

/// Writes `FrequencyPoint` vector to a CSV writer.
pub fn write_frequency_points_csv<W: Write>(mut w: W, points: &[FrequencyPoint]) -> io::Result<()> {
    writeln!(w, "frequency_hz,re_z,im_z,magnitude,phase_rad")?;
    for p in points {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e},{:.16e},{:.16e}",
            p.frequency_hz,
            p.impedance.re,
            p.impedance.im,
            p.magnitude(),
            p.phase()
        )?;
    }
    Ok(())
}
