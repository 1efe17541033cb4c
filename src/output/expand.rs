//! Splitting of large surviving blocks on output.

use crate::models::Network;
use itertools::Either;

/// Split width used when none is configured.
pub const DEFAULT_SPLIT_PREFIX_LEN: u8 = 16;

/// Replace each block shorter than `max_prefix_len` by its subnets at `split_prefix_len`.
///
/// The threshold and the split width are independent: a `/8` with threshold
/// `/24` is still split into `/16`s when `split_prefix_len` is 16. Blocks that
/// are already at or beyond the split width, or for which the width is not
/// valid in their family, pass through unchanged. No threshold, or a threshold
/// of 0, leaves every block as is.
pub fn expand(
    networks: &[Network],
    max_prefix_len: Option<u8>,
    split_prefix_len: u8,
) -> impl Iterator<Item = Network> + '_ {
    networks.iter().flat_map(move |network| {
        let split = max_prefix_len.is_some_and(|max| network.prefix_len() < max);
        if !split {
            return Either::Left(std::iter::once(*network));
        }
        match network.subnets(split_prefix_len) {
            Ok(subnets) if split_prefix_len > network.prefix_len() => Either::Right(subnets),
            _ => {
                log::warn!(
                    "Not splitting {network}: /{split_prefix_len} is not longer than /{}",
                    network.prefix_len()
                );
                Either::Left(std::iter::once(*network))
            }
        }
    })
}
