//! Descending-pass aggregation of a [`NetworkRegistry`].
//!
//! Prefix lengths are visited from 128 down to 0. Within one length the
//! sorted bucket is scanned once: blocks already covered by a shorter live
//! block are dropped, and adjacent sibling pairs are replaced by their parent,
//! which lands in the bucket one shorter and is picked up when that length is
//! reached. Each length must be finished before the next shorter one starts.

use super::supernet::find_enclosing;
use crate::models::{Network, NetworkRegistry, V6_MAX_LENGTH};
use itertools::Itertools;

/// One step of the aggregation, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// A non-empty bucket is about to be scanned.
    PrefixLength(u8),
    /// `network` was dropped because `supernet` is already present.
    Enclosed { network: Network, supernet: Network },
    /// `left` and `right` were merged into `parent`.
    Aggregated {
        left: Network,
        right: Network,
        parent: Network,
    },
    /// The network has no sibling to merge with at this length.
    Unique(Network),
}

/// Counters and optional trace from one [`AggregationEngine::run`].
#[derive(Debug, Default, Clone)]
pub struct AggregationReport {
    pub enclosed: usize,
    pub aggregated: usize,
    pub unique: usize,
    /// Empty unless the engine was built with tracing enabled.
    pub trace: Vec<TraceEvent>,
}

/// Reduces a registry to its minimal equivalent set of networks.
#[derive(Debug, Default, Clone)]
pub struct AggregationEngine {
    record_trace: bool,
}

impl AggregationEngine {
    pub fn new() -> AggregationEngine {
        AggregationEngine::default()
    }

    /// Keep every [`TraceEvent`] in the report.
    pub fn with_trace(mut self, record_trace: bool) -> AggregationEngine {
        self.record_trace = record_trace;
        self
    }

    /// Run a single descending pass over `registry`, mutating it in place.
    pub fn run(&self, registry: &mut NetworkRegistry) -> AggregationReport {
        log::info!("#Start aggregation of {} networks", registry.len());
        let mut report = AggregationReport::default();

        for prefix_len in (0..=V6_MAX_LENGTH).rev() {
            let bucket: Vec<Network> = registry
                .bucket(prefix_len)
                .iter()
                .filter(|network| registry.contains(network))
                .copied()
                .sorted()
                .dedup()
                .collect();
            if bucket.is_empty() {
                continue;
            }
            log::trace!("Prefix Length = {prefix_len} ({} networks)", bucket.len());
            self.record(&mut report, TraceEvent::PrefixLength(prefix_len));
            self.compare_same_prefix_length(registry, bucket, &mut report);
        }

        log::info!(
            "Aggregation done: {} remain, {} enclosed, {} pairs aggregated",
            registry.len(),
            report.enclosed,
            report.aggregated
        );
        report
    }

    fn compare_same_prefix_length(
        &self,
        registry: &mut NetworkRegistry,
        bucket: Vec<Network>,
        report: &mut AggregationReport,
    ) {
        let mut previous: Option<Network> = None;

        for current in bucket {
            if let Some(supernet) = find_enclosing(registry, &current) {
                registry.remove(&[current]);
                log::debug!("{current} found in {supernet}");
                report.enclosed += 1;
                self.record(
                    report,
                    TraceEvent::Enclosed {
                        network: current,
                        supernet,
                    },
                );
                continue;
            }

            let Some(pending) = previous.take() else {
                previous = Some(current);
                continue;
            };

            match sibling_parent(&pending, &current) {
                Some(parent) => {
                    registry.add(parent);
                    registry.remove(&[pending, current]);
                    log::debug!("{pending} and {current} aggregate to {parent}");
                    report.aggregated += 1;
                    self.record(
                        report,
                        TraceEvent::Aggregated {
                            left: pending,
                            right: current,
                            parent,
                        },
                    );
                }
                None => {
                    self.unique(report, pending);
                    previous = Some(current);
                }
            }
        }

        if let Some(pending) = previous {
            self.unique(report, pending);
        }
    }

    fn unique(&self, report: &mut AggregationReport, network: Network) {
        log::debug!("{network} is unique");
        report.unique += 1;
        self.record(report, TraceEvent::Unique(network));
    }

    fn record(&self, report: &mut AggregationReport, event: TraceEvent) {
        if self.record_trace {
            report.trace.push(event);
        }
    }
}

/// The common parent of two equal-length blocks, if they are its two halves.
///
/// Blocks of length 0, or of different families, never have one.
pub fn sibling_parent(left: &Network, right: &Network) -> Option<Network> {
    if left == right || left.prefix_len() != right.prefix_len() {
        return None;
    }
    let parent_len = left.prefix_len().checked_sub(1)?;
    let parent = left.supernet(parent_len).ok()?;
    (right.supernet(parent_len).ok()? == parent).then_some(parent)
}
