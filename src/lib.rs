#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Constants and unit conversions.
pub mod constants;
/// Shared numeric utilities.
pub mod math;
/// Circuit components, circuits and analyses.
pub mod circuits;
/// Frequency sweep sample generators.
pub mod sweep;
/// Analysis configuration and validation.
pub mod config;
/// Interactive prompting and report rendering.
pub mod cli;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
