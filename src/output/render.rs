//! Rendering of the final network list.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::models::Network;
use std::io::Write;

/// Write networks in the requested format.
///
/// `Text` streams one CIDR per line; `Json` collects them into a JSON array.
pub fn write_networks<W, I>(out: &mut W, networks: I, format: OutputFormat) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = Network>,
{
    let mut count = 0;
    match format {
        OutputFormat::Text => {
            for network in networks {
                writeln!(out, "{network}")?;
                count += 1;
            }
        }
        OutputFormat::Json => {
            let networks: Vec<Network> = networks.into_iter().collect();
            count = networks.len();
            serde_json::to_writer_pretty(&mut *out, &networks)?;
            writeln!(out)?;
        }
    }
    log::info!("Wrote {count} networks as {format:?}");
    Ok(count)
}
