//! Nearest enclosing block lookup.

use crate::models::{Network, NetworkRegistry};

/// Find the most specific live block in `registry` that encloses `network`.
///
/// Candidate prefix lengths are probed from `network.prefix_len() - 1` down to
/// `0` inclusive and the first one present wins.
pub fn find_enclosing(registry: &NetworkRegistry, network: &Network) -> Option<Network> {
    (0..network.prefix_len())
        .rev()
        .filter_map(|len| network.supernet(len).ok())
        .find(|candidate| registry.contains(candidate))
}
