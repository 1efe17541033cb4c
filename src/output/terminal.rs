//! Terminal diagnostics: the aggregation trace and rejected input lines.

use crate::input::RejectedLine;
use crate::processing::TraceEvent;
use colored::Colorize;
use std::io::{self, Write};

/// Format one trace event as a line of verbose output.
pub fn format_event(event: &TraceEvent) -> String {
    match event {
        TraceEvent::PrefixLength(len) => {
            format!("{}\nPrefix Length = {}", "=".repeat(79), len.to_string().bold())
        }
        TraceEvent::Enclosed { network, supernet } => {
            format!("{} found in {}", network.to_string().yellow(), supernet)
        }
        TraceEvent::Aggregated {
            left,
            right,
            parent,
        } => format!(
            "{left} and {right} aggregate to {}",
            parent.to_string().green()
        ),
        TraceEvent::Unique(network) => format!("{} is unique", network.to_string().cyan()),
    }
}

/// Write the whole trace, one event per line.
pub fn write_trace<W: Write>(out: &mut W, trace: &[TraceEvent]) -> io::Result<()> {
    for event in trace {
        writeln!(out, "{}", format_event(event))?;
    }
    Ok(())
}

/// Report malformed input lines.
pub fn write_rejected<W: Write>(out: &mut W, rejected: &[RejectedLine]) -> io::Result<()> {
    for line in rejected {
        writeln!(
            out,
            "{} {} is not a valid network (line {})",
            "!!!".on_red(),
            line.text,
            line.line_no
        )?;
    }
    Ok(())
}
