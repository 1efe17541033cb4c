//! Registry of surviving networks with a per-prefix-length index.

use super::Network;
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

/// The set of networks still alive, plus an insertion-ordered index by prefix length.
///
/// `remove` only touches the set. Buckets may therefore hold stale entries for
/// networks that are gone; the set is always the authority on membership and
/// readers of [`NetworkRegistry::bucket`] must re-check with [`NetworkRegistry::contains`].
#[derive(Debug, Default, Clone)]
pub struct NetworkRegistry {
    networks: HashSet<Network>,
    prefixes: HashMap<u8, Vec<Network>>,
}

impl NetworkRegistry {
    /// Create a new empty registry.
    pub fn new() -> NetworkRegistry {
        NetworkRegistry::default()
    }

    /// Add a network. Returns false if it was already present.
    pub fn add(&mut self, network: Network) -> bool {
        if !self.networks.insert(network) {
            return false;
        }
        self.prefixes
            .entry(network.prefix_len())
            .or_default()
            .push(network);
        true
    }

    /// Remove networks from the set. Their bucket entries are left in place.
    pub fn remove(&mut self, networks: &[Network]) {
        for network in networks {
            self.networks.remove(network);
        }
    }

    pub fn contains(&self, network: &Network) -> bool {
        self.networks.contains(network)
    }

    /// Bucket for `prefix_len` in insertion order, possibly with stale entries.
    pub fn bucket(&self, prefix_len: u8) -> &[Network] {
        self.prefixes
            .get(&prefix_len)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Iterate the live networks in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.networks.iter()
    }

    /// Live networks sorted by family then address.
    pub fn export(&self) -> Vec<Network> {
        self.networks.iter().copied().sorted().collect()
    }
}

impl Extend<Network> for NetworkRegistry {
    fn extend<T: IntoIterator<Item = Network>>(&mut self, iter: T) {
        for network in iter {
            self.add(network);
        }
    }
}

impl FromIterator<Network> for NetworkRegistry {
    fn from_iter<T: IntoIterator<Item = Network>>(iter: T) -> NetworkRegistry {
        let mut registry = NetworkRegistry::new();
        registry.extend(iter);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> Network {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_dedups() {
        let mut registry = NetworkRegistry::new();
        assert!(registry.add(net("10.0.0.0/24")));
        assert!(!registry.add(net("10.0.0.7/24")));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.bucket(24), &[net("10.0.0.0/24")]);
    }

    #[test]
    fn test_remove_leaves_stale_bucket_entry() {
        let mut registry = NetworkRegistry::new();
        let a = net("10.0.0.0/24");
        let b = net("10.0.1.0/24");
        registry.add(a);
        registry.add(b);
        registry.remove(&[a]);

        assert!(!registry.contains(&a));
        assert!(registry.contains(&b));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.bucket(24), &[a, b]);
    }

    #[test]
    fn test_readd_after_remove() {
        let mut registry = NetworkRegistry::new();
        let a = net("10.0.0.0/24");
        registry.add(a);
        registry.remove(&[a]);
        assert!(registry.add(a));
        assert!(registry.contains(&a));
        assert_eq!(registry.bucket(24).len(), 2);
    }

    #[test]
    fn test_bucket_missing_is_empty() {
        let registry = NetworkRegistry::new();
        assert!(registry.bucket(12).is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_export_sorted() {
        let registry: NetworkRegistry = ["2001:db8::/32", "10.0.1.0/24", "10.0.0.0/24", "1.0.0.0/8"]
            .iter()
            .map(|s| net(s))
            .collect();
        let exported: Vec<String> = registry.export().iter().map(|n| n.to_string()).collect();
        assert_eq!(
            exported,
            vec!["1.0.0.0/8", "10.0.0.0/24", "10.0.1.0/24", "2001:db8::/32"]
        );
    }
}
