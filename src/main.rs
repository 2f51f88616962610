use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use rlc_circuits::cli::{self, Prompter};
use rlc_circuits::config::{SweepConfig, SweepSpacing};
use rlc_circuits::circuits::topology::{ParameterValues, Topology};
use tracing_subscriber::EnvFilter;

/// Impedance and phase of RLC circuits at a single frequency
#[derive(Parser)]
#[command(name = "rlc-circuits", version)]
#[command(about = "Computes total and per-component impedance of fixed RLC topologies", long_about = None)]
struct Cli {
    /// Circuit topology, 1-8 (prompted when omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=8))]
    topology: Option<u8>,

    /// Frequency in Hz (prompted when omitted)
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Resistance in ohms
    #[arg(short = 'R', long)]
    resistance: Option<f64>,

    /// Capacitance in farads
    #[arg(short = 'C', long)]
    capacitance: Option<f64>,

    /// Inductance in henries
    #[arg(short = 'L', long)]
    inductance: Option<f64>,

    /// First sweep frequency in Hz; enables CSV sweep output
    #[arg(long, requires = "sweep_stop")]
    sweep_start: Option<f64>,

    /// Last sweep frequency in Hz
    #[arg(long, requires = "sweep_start")]
    sweep_stop: Option<f64>,

    /// Number of sweep points
    #[arg(long, default_value_t = 50)]
    points: usize,

    /// Space sweep points logarithmically
    #[arg(long)]
    log_sweep: bool,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .init();

    let values = ParameterValues {
        resistance: args.resistance,
        capacitance: args.capacitance,
        inductance: args.inductance,
    };
    let topology = args.topology.and_then(|i| Topology::from_index(usize::from(i)));

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let mut config = prompter
        .complete(topology, args.frequency, values)
        .context("reading circuit parameters")?;

    if let (Some(start_hz), Some(stop_hz)) = (args.sweep_start, args.sweep_stop) {
        config.sweep = Some(SweepConfig {
            start_hz,
            stop_hz,
            points: args.points,
            spacing: if args.log_sweep {
                SweepSpacing::Logarithmic
            } else {
                SweepSpacing::Linear
            },
        });
    }

    cli::run(&config, io::stdout().lock()).context("circuit analysis failed")?;
    Ok(())
}
