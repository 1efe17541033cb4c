//! Prefix mask arithmetic shared by both address families.
//!
//! Address bits are carried in a `u128`; only the low `width` bits are
//! meaningful (32 for IPv4, 128 for IPv6).

use crate::error::{Result, SupernetError};

/// Maximum prefix length for an IPv4 network.
pub const V4_MAX_LENGTH: u8 = 32;
/// Maximum prefix length for an IPv6 network.
pub const V6_MAX_LENGTH: u8 = 128;

/// All ones in the low `bits` bits.
fn low_ones(bits: u8) -> u128 {
    if bits >= V6_MAX_LENGTH {
        u128::MAX
    } else {
        (1u128 << bits) - 1
    }
}

/// Host part mask (the bits beyond `len`) for a `width`-bit address.
pub fn get_host_mask(len: u8, width: u8) -> Result<u128> {
    if len > width {
        return Err(SupernetError::InvalidPrefixLength {
            prefix_len: width,
            requested: len,
        });
    }
    Ok(low_ones(width - len))
}

/// Convert a prefix length to a network mask for a `width`-bit address.
///
/// # Examples
/// ```
/// use supernets::models::{get_cidr_mask, V4_MAX_LENGTH};
/// assert_eq!(get_cidr_mask(24, V4_MAX_LENGTH).unwrap(), 0xFFFF_FF00);
/// ```
pub fn get_cidr_mask(len: u8, width: u8) -> Result<u128> {
    let host = get_host_mask(len, width)?;
    Ok(low_ones(width) & !host)
}

/// Zero every bit of `bits` beyond `len`.
pub fn cut_addr(bits: u128, len: u8, width: u8) -> Result<u128> {
    Ok(bits & get_cidr_mask(len, width)?)
}

/// Highest address of the `len` block containing `bits`.
pub fn broadcast_addr(bits: u128, len: u8, width: u8) -> Result<u128> {
    Ok(cut_addr(bits, len, width)? | get_host_mask(len, width)?)
}

/// Prefix length of a dotted IPv4 netmask, `None` when the mask is not contiguous.
pub fn netmask_prefix_len(mask: u32) -> Option<u8> {
    let len = mask.leading_ones() as u8;
    // Every one bit must sit before the first zero bit.
    (mask.count_ones() as u8 == len).then_some(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask_v4() {
        assert_eq!(get_cidr_mask(0, V4_MAX_LENGTH).unwrap(), 0x0000_0000);
        assert_eq!(get_cidr_mask(8, V4_MAX_LENGTH).unwrap(), 0xFF00_0000);
        assert_eq!(get_cidr_mask(16, V4_MAX_LENGTH).unwrap(), 0xFFFF_0000);
        assert_eq!(get_cidr_mask(24, V4_MAX_LENGTH).unwrap(), 0xFFFF_FF00);
        assert_eq!(get_cidr_mask(32, V4_MAX_LENGTH).unwrap(), 0xFFFF_FFFF);
        assert!(get_cidr_mask(33, V4_MAX_LENGTH).is_err());
    }

    #[test]
    fn test_get_cidr_mask_v6() {
        assert_eq!(get_cidr_mask(0, V6_MAX_LENGTH).unwrap(), 0);
        assert_eq!(get_cidr_mask(128, V6_MAX_LENGTH).unwrap(), u128::MAX);
        assert_eq!(
            get_cidr_mask(32, V6_MAX_LENGTH).unwrap(),
            0xFFFF_FFFF_0000_0000_0000_0000_0000_0000
        );
        assert!(get_cidr_mask(129, V6_MAX_LENGTH).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let ip = 0xC0A8_012A; // 192.168.1.42
        assert_eq!(cut_addr(ip, 24, V4_MAX_LENGTH).unwrap(), 0xC0A8_0100);
        assert_eq!(cut_addr(ip, 16, V4_MAX_LENGTH).unwrap(), 0xC0A8_0000);
        assert_eq!(cut_addr(ip, 8, V4_MAX_LENGTH).unwrap(), 0xC000_0000);
        assert_eq!(cut_addr(ip, 32, V4_MAX_LENGTH).unwrap(), ip);
        assert!(cut_addr(ip, 33, V4_MAX_LENGTH).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = 0xC0A8_0100; // 192.168.1.0
        assert_eq!(broadcast_addr(ip, 24, V4_MAX_LENGTH).unwrap(), 0xC0A8_01FF);
        assert_eq!(broadcast_addr(ip, 16, V4_MAX_LENGTH).unwrap(), 0xC0A8_FFFF);
        assert_eq!(broadcast_addr(ip, 32, V4_MAX_LENGTH).unwrap(), ip);
        assert_eq!(broadcast_addr(0, 0, V6_MAX_LENGTH).unwrap(), u128::MAX);
    }

    #[test]
    fn test_netmask_prefix_len() {
        assert_eq!(netmask_prefix_len(0xFFFF_FF00), Some(24));
        assert_eq!(netmask_prefix_len(0xFFFF_FFFF), Some(32));
        assert_eq!(netmask_prefix_len(0), Some(0));
        assert_eq!(netmask_prefix_len(0xFF00_FF00), None);
        assert_eq!(netmask_prefix_len(0x0000_00FF), None);
    }
}
