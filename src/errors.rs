//! Shared error types used across submodules.

use thiserror::Error;

use crate::circuits::component::ComponentKind;
use crate::circuits::network::ConnectionKind;
use crate::config::ConfigError;
use crate::math::Scalar;

/// Degenerate physical configurations rejected by the component and circuit models.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A physical parameter that must be strictly positive was zero or negative.
    #[error("{kind} {parameter} must be positive, got {value}")]
    NonPositiveParameter {
        /// Component kind being constructed.
        kind: ComponentKind,
        /// Parameter name.
        parameter: &'static str,
        /// Rejected value.
        value: Scalar,
    },
    /// A physical parameter was NaN or infinite.
    #[error("{kind} {parameter} must be finite, got {value}")]
    NonFiniteParameter {
        /// Component kind being constructed.
        kind: ComponentKind,
        /// Parameter name.
        parameter: &'static str,
        /// Rejected value.
        value: Scalar,
    },
    /// Frequency was negative, NaN or infinite.
    #[error("invalid frequency {0} Hz: must be finite and non-negative")]
    InvalidFrequency(Scalar),
    /// The component's impedance diverges at zero frequency.
    #[error("{0} impedance is unbounded at 0 Hz")]
    ZeroFrequency(ComponentKind),
    /// An impedance was requested before any frequency was applied.
    #[error("impedance of {0} is undefined until a frequency is set")]
    FrequencyNotSet(String),
    /// A zero-impedance member short-circuits a parallel combination.
    #[error("component {0} has zero impedance and shorts the parallel combination")]
    ZeroImpedance(String),
    /// Parallel admittances cancelled exactly.
    #[error("total admittance is zero; parallel impedance is unbounded")]
    ZeroAdmittance,
    /// A component or aggregate impedance overflowed or became NaN.
    #[error("impedance is not finite")]
    NonFiniteImpedance,
    /// A member was added with a connection style the circuit does not use.
    #[error("cannot add a component in {requested} to a {expected} circuit")]
    ConnectionMismatch {
        /// Connection kind fixed at circuit construction.
        expected: ConnectionKind,
        /// Connection kind requested by the caller.
        requested: ConnectionKind,
    },
}

/// Result alias for the component and circuit models.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Wraps degenerate physical configurations.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// Wraps configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Raised when reading prompts or writing output fails.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
