//! The eight fixed two- and three-element topologies offered by the command-line tool.

use std::fmt;

use crate::config::ConfigError;
use crate::errors::Error;
use crate::math::Scalar;

use super::component::Component;
use super::network::{Circuit, ConnectionKind};

/// Physical value the user supplies for a topology.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Resistance in ohms.
    Resistance,
    /// Capacitance in farads.
    Capacitance,
    /// Inductance in henries.
    Inductance,
}

impl Parameter {
    /// Lower-case parameter name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Resistance => "resistance",
            Self::Capacitance => "capacitance",
            Self::Inductance => "inductance",
        }
    }

    /// Unit label used in prompts.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Resistance => "Ohms",
            Self::Capacitance => "Farads",
            Self::Inductance => "Henry",
        }
    }

    /// Schematic letter of the matching component.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Resistance => 'R',
            Self::Capacitance => 'C',
            Self::Inductance => 'L',
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resistance, capacitance and inductance supplied for a topology. Only the
/// values the topology needs have to be present.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterValues {
    /// Resistance in ohms.
    pub resistance: Option<Scalar>,
    /// Capacitance in farads.
    pub capacitance: Option<Scalar>,
    /// Inductance in henries.
    pub inductance: Option<Scalar>,
}

impl ParameterValues {
    /// Value stored for `parameter`.
    #[must_use]
    pub fn get(&self, parameter: Parameter) -> Option<Scalar> {
        match parameter {
            Parameter::Resistance => self.resistance,
            Parameter::Capacitance => self.capacitance,
            Parameter::Inductance => self.inductance,
        }
    }

    /// Stores `value` for `parameter`.
    pub fn set(&mut self, parameter: Parameter, value: Scalar) {
        let slot = match parameter {
            Parameter::Resistance => &mut self.resistance,
            Parameter::Capacitance => &mut self.capacitance,
            Parameter::Inductance => &mut self.inductance,
        };
        *slot = Some(value);
    }
}

/// Fixed circuit topologies, numbered 1 to 8 as presented in the menu.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// R, C and L in parallel.
    ParallelRlc,
    /// R, C and L in series.
    SeriesRlc,
    /// R and L in series.
    SeriesRl,
    /// R and L in parallel.
    ParallelRl,
    /// R and C in series.
    SeriesRc,
    /// R and C in parallel.
    ParallelRc,
    /// L and C in series.
    SeriesLc,
    /// L and C in parallel.
    ParallelLc,
}

impl Topology {
    /// All topologies in menu order.
    pub const ALL: [Self; 8] = [
        Self::ParallelRlc,
        Self::SeriesRlc,
        Self::SeriesRl,
        Self::ParallelRl,
        Self::SeriesRc,
        Self::ParallelRc,
        Self::SeriesLc,
        Self::ParallelLc,
    ];

    /// Looks up a topology by its 1-based menu number.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// 1-based menu number.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize + 1
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ParallelRlc => "Parallel RLC circuit",
            Self::SeriesRlc => "Series RLC circuit",
            Self::SeriesRl => "RL in Series",
            Self::ParallelRl => "RL in Parallel",
            Self::SeriesRc => "RC in Series",
            Self::ParallelRc => "RC in Parallel",
            Self::SeriesLc => "LC in Series",
            Self::ParallelLc => "LC in Parallel",
        }
    }

    /// How the members are combined.
    #[must_use]
    pub const fn connection(self) -> ConnectionKind {
        match self {
            Self::SeriesRlc | Self::SeriesRl | Self::SeriesRc | Self::SeriesLc => ConnectionKind::Series,
            Self::ParallelRlc | Self::ParallelRl | Self::ParallelRc | Self::ParallelLc => {
                ConnectionKind::Parallel
            }
        }
    }

    /// Parameters the user is asked for, in prompt order.
    #[must_use]
    pub const fn parameters(self) -> &'static [Parameter] {
        use Parameter::{Capacitance as C, Inductance as L, Resistance as R};
        match self {
            Self::ParallelRlc | Self::SeriesRlc => &[R, C, L],
            Self::SeriesRl | Self::ParallelRl => &[R, L],
            Self::SeriesRc | Self::ParallelRc => &[R, C],
            Self::SeriesLc | Self::ParallelLc => &[C, L],
        }
    }

    /// Order in which components join the circuit.
    #[must_use]
    pub const fn members(self) -> &'static [Parameter] {
        use Parameter::{Capacitance as C, Inductance as L, Resistance as R};
        match self {
            Self::ParallelRlc | Self::SeriesRlc => &[R, C, L],
            Self::SeriesRl | Self::ParallelRl => &[R, L],
            Self::SeriesRc | Self::ParallelRc => &[R, C],
            Self::SeriesLc | Self::ParallelLc => &[L, C],
        }
    }

    /// ASCII schematic printed after the results.
    #[must_use]
    pub const fn diagram(self) -> &'static str {
        match self {
            Self::ParallelRlc => concat!(
                "+-----R-----+\n",
                "|           |\n",
                "+-----C-----+\n",
                "|           |\n",
                "+-----L-----+\n",
            ),
            Self::SeriesRlc => concat!(
                "+-----R-----C-----L-----+\n",
                "|                       |\n",
                "+-----------------------+\n",
            ),
            Self::SeriesRl => concat!(
                "+-----R-----L-----+\n",
                "|                 |\n",
                "+-----------------+\n",
            ),
            Self::ParallelRl => concat!(
                "+-----R-----+\n",
                "|           |\n",
                "+-----L-----+\n",
                "|           |\n",
                "+-----------+\n",
            ),
            Self::SeriesRc => concat!(
                "+-----R-----C-----+\n",
                "|                 |\n",
                "+-----------------+\n",
            ),
            Self::ParallelRc => concat!(
                "+-----R-----+\n",
                "|           |\n",
                "+-----C-----+\n",
                "|           |\n",
                "+-----------+\n",
            ),
            Self::SeriesLc => concat!(
                "+-----L-----C-----+\n",
                "|                 |\n",
                "+-----------------+\n",
            ),
            Self::ParallelLc => concat!(
                "+-----L-----+\n",
                "|           |\n",
                "+-----C-----+\n",
                "|           |\n",
                "+-----------+\n",
            ),
        }
    }

    /// Builds the circuit from `values`. No frequency is applied.
    pub fn build(self, values: &ParameterValues) -> Result<Circuit, Error> {
        let mut circuit = Circuit::new(self.label(), self.connection());
        for &parameter in self.members() {
            let value = values
                .get(parameter)
                .ok_or(ConfigError::MissingParameter(parameter.name()))?;
            let name = format!("{}1", parameter.symbol());
            let component = match parameter {
                Parameter::Resistance => Component::resistor(name, value)?,
                Parameter::Capacitance => Component::capacitor(name, value)?,
                Parameter::Inductance => Component::inductor(name, value)?,
            };
            circuit.add_component(component)?;
        }
        Ok(circuit)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
