//! Interactive prompting and text rendering for the command-line tool.
//!
//! Everything here is generic over [`BufRead`] and [`Write`] so sessions can be
//! scripted in tests.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use tracing::{debug, info};

use crate::circuits::analysis::{sweep_circuit_impedance, write_frequency_points_csv, CircuitReport};
use crate::circuits::topology::{Parameter, ParameterValues, Topology};
use crate::config::AnalysisConfig;
use crate::errors::Error;
use crate::math::Scalar;

/// Reads validated answers from `input`, echoing prompts and errors to `output`.
/// Invalid answers are reported and asked again until a valid one arrives or
/// the input ends.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Releases the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn next_line(&mut self) -> io::Result<&str> {
        self.output.flush()?;
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended before a valid answer"));
        }
        Ok(self.line.trim())
    }

    /// Keeps reading lines until one parses as `T` and passes `accept`.
    fn ask<T, F>(&mut self, prompt: &str, error: &str, accept: F) -> Result<T, Error>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        write!(self.output, "{prompt}")?;
        loop {
            let line = self.next_line()?;
            match line.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => {
                    debug!(input = line, "rejected answer");
                    writeln!(self.output, "{error}")?;
                }
            }
        }
    }

    /// Prints the topology menu and reads a choice between 1 and 8.
    pub fn choose_topology(&mut self) -> Result<Topology, Error> {
        writeln!(self.output, "Choose circuit type: ")?;
        for topology in Topology::ALL {
            writeln!(self.output, "{}. {}", topology.index(), topology.label())?;
        }
        let index: usize = self.ask(
            "",
            "Error: Invalid circuit type. Please enter an integer between 1 and 8.",
            |i: &usize| Topology::from_index(*i).is_some(),
        )?;
        Topology::from_index(index)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "topology index out of range").into())
    }

    /// Reads a positive, finite frequency in hertz.
    pub fn read_frequency(&mut self) -> Result<Scalar, Error> {
        self.ask(
            "Frequency (Hz): ",
            "Error: Invalid frequency. Please enter a valid number.",
            |f: &Scalar| f.is_finite() && *f > 0.0,
        )
    }

    /// Reads a positive, finite value for `parameter`.
    pub fn read_parameter(&mut self, parameter: Parameter) -> Result<Scalar, Error> {
        let prompt = format!("Enter {parameter} value ({}): ", parameter.unit());
        let error = format!("Error: Invalid {parameter} value. Please enter a valid number.");
        self.ask(&prompt, &error, |v: &Scalar| v.is_finite() && *v > 0.0)
    }

    /// Asks for whatever `topology`, `frequency_hz` and `values` leave open.
    pub fn complete(
        &mut self,
        topology: Option<Topology>,
        frequency_hz: Option<Scalar>,
        mut values: ParameterValues,
    ) -> Result<AnalysisConfig, Error> {
        let topology = match topology {
            Some(t) => t,
            None => self.choose_topology()?,
        };
        let frequency_hz = match frequency_hz {
            Some(f) => f,
            None => self.read_frequency()?,
        };
        let mut prompted = false;
        for &parameter in topology.parameters() {
            if values.get(parameter).is_none() {
                let value = self.read_parameter(parameter)?;
                values.set(parameter, value);
                prompted = true;
            }
        }
        if prompted {
            writeln!(self.output)?;
        }
        Ok(AnalysisConfig::new(topology, frequency_hz, values))
    }
}

/// Writes the single-frequency report followed by the topology diagram.
pub fn write_report<W: Write>(mut w: W, topology: Topology, report: &CircuitReport) -> io::Result<()> {
    write!(w, "{report}")?;
    writeln!(w, "Circuit Diagram: ")?;
    write!(w, "{}", topology.diagram())
}

/// Builds the configured circuit, writes its report and, if requested, the
/// sweep as CSV.
pub fn run<W: Write>(config: &AnalysisConfig, mut out: W) -> Result<(), Error> {
    let circuit = config.build_circuit()?;
    let report = CircuitReport::from_circuit(&circuit)?;
    info!(
        topology = %config.topology,
        frequency_hz = config.frequency_hz,
        magnitude = report.magnitude,
        phase = report.phase,
        "analysis complete"
    );
    write_report(&mut out, config.topology, &report)?;

    if let Some(sweep) = &config.sweep {
        let points = sweep_circuit_impedance(&circuit, sweep.frequencies()?)?;
        writeln!(out)?;
        write_frequency_points_csv(&mut out, &points)?;
    }
    Ok(())
}
