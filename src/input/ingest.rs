//! Line-oriented network input.
//!
//! Builds a [`NetworkRegistry`] from text, one CIDR per line. Malformed lines
//! are collected in the [`IngestReport`] and skipped.

use crate::error::{Result, SupernetError};
use crate::models::{Network, NetworkRegistry};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// An input line that could not be parsed.
#[derive(Debug)]
pub struct RejectedLine {
    /// 1-based line number in the input.
    pub line_no: usize,
    /// The line as read, without the trailing newline.
    pub text: String,
    pub error: SupernetError,
}

/// Result of loading input lines.
#[derive(Debug, Default)]
pub struct IngestReport {
    pub registry: NetworkRegistry,
    pub rejected: Vec<RejectedLine>,
}

/// True for lines that carry nothing to parse: blank or `#` comments.
fn is_skippable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Parse each line into the registry, deduplicating and recording bad lines.
pub fn ingest<I, S>(lines: I) -> IngestReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut report = IngestReport::default();
    let mut accepted = 0;

    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if is_skippable(line) {
            continue;
        }
        match line.parse::<Network>() {
            Ok(network) => {
                accepted += 1;
                if !report.registry.add(network) {
                    log::debug!("Duplicate network {network} on line {}", i + 1);
                }
            }
            Err(error) => {
                log::warn!("Line {}: {error}", i + 1);
                report.rejected.push(RejectedLine {
                    line_no: i + 1,
                    text: line.trim_end_matches('\r').to_string(),
                    error,
                });
            }
        }
    }

    log::info!(
        "Read {accepted} networks ({} unique), rejected {} lines",
        report.registry.len(),
        report.rejected.len()
    );
    report
}

/// Read every line from `reader`. Invalid UTF-8 is replaced and then rejected as malformed.
pub fn ingest_reader<R: BufRead>(reader: R) -> Result<IngestReport> {
    let lines = reader
        .split(b'\n')
        .map(|line| line.map(|bytes| String::from_utf8_lossy(&bytes).into_owned()))
        .collect::<std::io::Result<Vec<String>>>()?;
    Ok(ingest(lines))
}

/// Read networks from a file.
///
/// # Returns
/// * `Ok(IngestReport)` - The loaded registry and any rejected lines
/// * `Err(SupernetError::InputUnavailable)` - If the file cannot be opened or read
pub fn ingest_file(path: &Path) -> Result<IngestReport> {
    let unavailable = |source| SupernetError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unavailable)?;
    log::info!("Reading networks from file: {}", path.display());
    ingest_reader(BufReader::new(file)).map_err(|e| match e {
        SupernetError::IO(source) => unavailable(source),
        other => other,
    })
}
