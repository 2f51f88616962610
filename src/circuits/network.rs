use std::fmt;

use tracing::{debug, trace};

use crate::errors::{DomainError, Result};
use crate::math::{self, CScalar, Scalar};

use super::component::Component;

/// Connection topology for a collection of components.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// Series connection (impedances add linearly).
    Series,
    /// Parallel connection (admittances add linearly).
    Parallel,
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Series => "series",
            Self::Parallel => "parallel",
        })
    }
}

/// Index handle to a component owned by a [`Circuit`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Position of the component in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Combines impedances under `connection`. Returns `Ok(None)` when any member
/// has no impedance yet.
fn combine<I>(connection: ConnectionKind, members: I) -> Result<Option<CScalar>>
where
    I: IntoIterator<Item = (String, Option<CScalar>)>,
{
    let mut total = math::ZERO;
    let mut count = 0usize;
    for (name, z) in members {
        let Some(z) = z else {
            return Ok(None);
        };
        trace!(component = %name, re = z.re, im = z.im, "combining member");
        match connection {
            ConnectionKind::Series => total += z,
            ConnectionKind::Parallel => {
                total += math::checked_reciprocal(z).ok_or(DomainError::ZeroImpedance(name))?;
            }
        }
        count += 1;
    }

    // `total` holds the admittance sum for parallel circuits.
    if connection == ConnectionKind::Parallel && count > 0 {
        total = math::checked_reciprocal(total).ok_or(DomainError::ZeroAdmittance)?;
    }
    if math::is_finite(total) {
        Ok(Some(total))
    } else {
        Err(DomainError::NonFiniteImpedance)
    }
}

/// Flat series or parallel circuit owning its components.
///
/// The total impedance is recomputed on every membership or frequency change,
/// so it always reflects the current member impedances. Frequency changes go
/// through [`Circuit::set_frequency`], which updates every member and the total
/// together or not at all.
#[derive(Debug, Clone)]
pub struct Circuit {
    name: String,
    connection: ConnectionKind,
    members: Vec<Component>,
    frequency: Option<Scalar>,
    total_impedance: Option<CScalar>,
}

impl Circuit {
    /// Creates an empty circuit.
    #[must_use]
    pub fn new(name: impl Into<String>, connection: ConnectionKind) -> Self {
        Self {
            name: name.into(),
            connection,
            members: Vec::new(),
            frequency: None,
            total_impedance: Some(math::ZERO),
        }
    }

    /// Adds a component using the circuit's connection kind.
    ///
    /// If a circuit frequency is already set it is applied to the component
    /// first. On error the circuit is unchanged.
    pub fn add_component(&mut self, mut component: Component) -> Result<ComponentId> {
        if let Some(f) = self.frequency {
            component.set_frequency(f)?;
        }
        let candidate = combine(
            self.connection,
            self.members
                .iter()
                .chain(std::iter::once(&component))
                .map(|c| (c.name().to_owned(), c.cached_impedance())),
        )?;

        let id = ComponentId(self.members.len());
        debug!(circuit = %self.name, component = component.name(), kind = %component.kind(), "added component");
        self.members.push(component);
        self.total_impedance = candidate;
        Ok(id)
    }

    /// Adds a component in series. Fails on a parallel circuit.
    pub fn add_component_in_series(&mut self, component: Component) -> Result<ComponentId> {
        self.expect_connection(ConnectionKind::Series)?;
        self.add_component(component)
    }

    /// Adds a component in parallel. Fails on a series circuit, or when a
    /// member impedance is zero.
    pub fn add_component_in_parallel(&mut self, component: Component) -> Result<ComponentId> {
        self.expect_connection(ConnectionKind::Parallel)?;
        self.add_component(component)
    }

    fn expect_connection(&self, requested: ConnectionKind) -> Result<()> {
        if self.connection == requested {
            Ok(())
        } else {
            Err(DomainError::ConnectionMismatch {
                expected: self.connection,
                requested,
            })
        }
    }

    /// Applies `frequency_hz` to every member and recomputes the total.
    /// On error neither the members nor the total change.
    pub fn set_frequency(&mut self, frequency_hz: Scalar) -> Result<()> {
        let frequency_hz = math::validate_frequency(frequency_hz)?;
        let impedances = self
            .members
            .iter()
            .map(|c| c.element().impedance(frequency_hz))
            .collect::<Result<Vec<_>>>()?;
        let total = combine(
            self.connection,
            self.members
                .iter()
                .zip(&impedances)
                .map(|(c, z)| (c.name().to_owned(), Some(*z))),
        )?;

        for (component, z) in self.members.iter_mut().zip(impedances) {
            component.commit(frequency_hz, z);
        }
        self.frequency = Some(frequency_hz);
        self.total_impedance = total;
        debug!(circuit = %self.name, frequency_hz, "frequency applied");
        Ok(())
    }

    /// Recomputes the total from the members' current impedances.
    pub fn recompute(&mut self) -> Result<()> {
        self.total_impedance = combine(
            self.connection,
            self.members.iter().map(|c| (c.name().to_owned(), c.cached_impedance())),
        )?;
        Ok(())
    }

    /// Total complex impedance in ohms.
    pub fn total_impedance(&self) -> Result<CScalar> {
        self.total_impedance.ok_or_else(|| {
            let pending = self
                .members
                .iter()
                .find(|c| c.cached_impedance().is_none())
                .map_or_else(|| self.name.clone(), |c| c.name().to_owned());
            DomainError::FrequencyNotSet(pending)
        })
    }

    /// Modulus of the total impedance in ohms.
    pub fn total_impedance_magnitude(&self) -> Result<Scalar> {
        self.total_impedance().map(math::magnitude)
    }

    /// Argument of the total impedance in radians.
    pub fn phase_difference(&self) -> Result<Scalar> {
        self.total_impedance().map(math::phase)
    }

    /// Last frequency applied through [`Circuit::set_frequency`].
    #[must_use]
    pub fn frequency(&self) -> Option<Scalar> {
        self.frequency
    }

    /// Returns the component behind `id`.
    #[must_use]
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.members.get(id.0)
    }

    /// Components in insertion order.
    pub fn components(&self) -> impl ExactSizeIterator<Item = &Component> + '_ {
        self.members.iter()
    }
}

impl Circuit {
    /// Returns the name of the circuit.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the connection topology.
    #[must_use]
    pub fn connection_kind(&self) -> ConnectionKind {
        self.connection
    }

    /// Returns the number of components in the circuit.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true when no components are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new("circuit", ConnectionKind::Series)
    }
}
