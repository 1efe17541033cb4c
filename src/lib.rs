//! Reduce lists of IPv4/IPv6 CIDR blocks to their minimal equivalent set.
//!
//! Subnets already covered by another listed block are dropped, and sibling
//! blocks that together form one parent block are merged upward.
//!
//! # Modules
//! - [`models`] - network value type and registry
//! - [`processing`] - enclosing lookup and the aggregation engine
//! - [`input`] - line parsing into a registry
//! - [`output`] - splitting, rendering and diagnostics
//! - [`config`] - command line and environment configuration

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use config::Config;
use error::Result;
use input::IngestReport;
use models::Network;
use processing::AggregationEngine;
use std::io::{self, Write};

pub use error::SupernetError;

/// Outcome of one [`run`].
#[derive(Debug)]
pub struct RunSummary {
    /// Number of input lines that were not valid networks.
    pub rejected: usize,
    /// Surviving networks before any output splitting, sorted.
    pub networks: Vec<Network>,
    /// Number of networks written.
    pub written: usize,
}

/// Load input as configured: a file, or standard input.
pub fn read_input(config: &Config) -> Result<IngestReport> {
    match config.input_path() {
        Some(path) => input::ingest_file(path),
        None => {
            log::info!("Reading networks from standard input");
            input::ingest_reader(io::stdin().lock())
        }
    }
}

/// Aggregate an already loaded report and write the results.
///
/// Rejected lines go to `err`; the verbose trace and the networks go to `out`.
pub fn summarize<W: Write, E: Write>(
    config: &Config,
    report: IngestReport,
    out: &mut W,
    err: &mut E,
) -> Result<RunSummary> {
    let IngestReport {
        mut registry,
        rejected,
    } = report;
    output::write_rejected(err, &rejected)?;

    let engine = AggregationEngine::new().with_trace(config.verbose);
    let aggregation = engine.run(&mut registry);
    if config.verbose {
        output::write_trace(out, &aggregation.trace)?;
    }

    let networks = registry.export();
    let expanded = output::expand(&networks, config.max_prefix_len, config.split_prefix_len);
    let written = output::write_networks(out, expanded, config.format)?;

    Ok(RunSummary {
        rejected: rejected.len(),
        networks,
        written,
    })
}

/// Read, aggregate and print according to `config`.
pub fn run<W: Write, E: Write>(config: &Config, out: &mut W, err: &mut E) -> Result<RunSummary> {
    let report = read_input(config)?;
    summarize(config, report, out, err)
}
