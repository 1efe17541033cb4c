//! Normalized CIDR block for either address family.
//!
//! Provides [`Network`], an immutable IPv4 or IPv6 block whose host bits are
//! always zero, along with [`Family`] and the lazy [`Subnets`] iterator.

use super::mask::{broadcast_addr, cut_addr, netmask_prefix_len, V4_MAX_LENGTH, V6_MAX_LENGTH};
use crate::error::{Result, SupernetError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family. IPv4 sorts before IPv6.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Address width in bits, which is also the longest legal prefix length.
    pub fn max_prefix_len(self) -> u8 {
        match self {
            Family::V4 => V4_MAX_LENGTH,
            Family::V6 => V6_MAX_LENGTH,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// Base address bits, tagged by family so the two never compare equal.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
enum Bits {
    V4(u32),
    V6(u128),
}

/// A CIDR block with its host bits zeroed.
///
/// Ordering is by family, then address, then prefix length.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Network {
    bits: Bits,
    prefix_len: u8,
}

impl Network {
    /// Create a network from an address and prefix length, zeroing the host bits.
    pub fn new(addr: IpAddr, prefix_len: u8) -> Result<Network> {
        match addr {
            IpAddr::V4(v4) => Network::from_bits(Family::V4, u32::from(v4) as u128, prefix_len),
            IpAddr::V6(v6) => Network::from_bits(Family::V6, u128::from(v6), prefix_len),
        }
    }

    fn from_bits(family: Family, bits: u128, prefix_len: u8) -> Result<Network> {
        let width = family.max_prefix_len();
        let bits = cut_addr(bits, prefix_len, width)?;
        let bits = match family {
            Family::V4 => Bits::V4(bits as u32),
            Family::V6 => Bits::V6(bits),
        };
        Ok(Network { bits, prefix_len })
    }

    pub fn family(&self) -> Family {
        match self.bits {
            Bits::V4(_) => Family::V4,
            Bits::V6(_) => Family::V6,
        }
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn max_prefix_len(&self) -> u8 {
        self.family().max_prefix_len()
    }

    /// First address of the block as an integer.
    pub fn first(&self) -> u128 {
        match self.bits {
            Bits::V4(bits) => bits as u128,
            Bits::V6(bits) => bits,
        }
    }

    /// Last address of the block as an integer.
    pub fn last(&self) -> u128 {
        // prefix_len never exceeds the family width
        broadcast_addr(self.first(), self.prefix_len, self.max_prefix_len()).unwrap_or(u128::MAX)
    }

    fn to_addr(&self, bits: u128) -> IpAddr {
        match self.family() {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }

    /// Get the lowest (network) address in the block.
    pub fn network_address(&self) -> IpAddr {
        self.to_addr(self.first())
    }

    /// Get the highest (broadcast) address in the block.
    pub fn broadcast_address(&self) -> IpAddr {
        self.to_addr(self.last())
    }

    /// Number of addresses covered, saturating at `u128::MAX` for `::/0`.
    pub fn num_addresses(&self) -> u128 {
        (self.last() - self.first()).saturating_add(1)
    }

    /// True when `other` is the same family and lies entirely inside this block.
    pub fn contains(&self, other: &Network) -> bool {
        self.family() == other.family()
            && self.prefix_len <= other.prefix_len
            && self.first() <= other.first()
            && other.last() <= self.last()
    }

    /// The enclosing block at the shorter `new_prefix_len`.
    pub fn supernet(&self, new_prefix_len: u8) -> Result<Network> {
        if new_prefix_len > self.prefix_len {
            return Err(SupernetError::InvalidPrefixLength {
                prefix_len: self.prefix_len,
                requested: new_prefix_len,
            });
        }
        Network::from_bits(self.family(), self.first(), new_prefix_len)
    }

    /// All blocks of length `new_prefix_len` inside this one, in ascending order.
    pub fn subnets(&self, new_prefix_len: u8) -> Result<Subnets> {
        if new_prefix_len < self.prefix_len || new_prefix_len > self.max_prefix_len() {
            return Err(SupernetError::InvalidPrefixLength {
                prefix_len: self.prefix_len,
                requested: new_prefix_len,
            });
        }
        let width = self.max_prefix_len();
        Ok(Subnets {
            family: self.family(),
            prefix_len: new_prefix_len,
            next: Some(self.first()),
            last_start: cut_addr(self.last(), new_prefix_len, width)?,
            step_shift: (width - new_prefix_len) as u32,
        })
    }
}

/// Iterator over the subnets of a [`Network`], produced lazily.
#[derive(Debug, Clone)]
pub struct Subnets {
    family: Family,
    prefix_len: u8,
    next: Option<u128>,
    last_start: u128,
    step_shift: u32,
}

impl Iterator for Subnets {
    type Item = Network;

    fn next(&mut self) -> Option<Network> {
        let current = self.next?;
        self.next = if current >= self.last_start {
            None
        } else {
            // More than one subnet means step_shift < width, so this cannot overflow.
            Some(current + (1u128 << self.step_shift))
        };
        Network::from_bits(self.family, current, self.prefix_len).ok()
    }
}

impl FromStr for Network {
    type Err = SupernetError;

    /// Parse `addr/len`, `addr/netmask` (IPv4) or a bare address.
    ///
    /// Host bits are zeroed rather than rejected, so `10.0.0.5/24` gives `10.0.0.0/24`.
    fn from_str(s: &str) -> Result<Network> {
        let text = s.trim();
        if text.is_empty() {
            return Err(SupernetError::format(s, "empty network"));
        }
        let (addr_part, len_part) = match text.split_once('/') {
            Some((addr, len)) => (addr, Some(len)),
            None => (text, None),
        };
        let addr: IpAddr = addr_part
            .parse()
            .map_err(|_| SupernetError::format(s, format!("invalid address {addr_part}")))?;
        let width = match addr {
            IpAddr::V4(_) => V4_MAX_LENGTH,
            IpAddr::V6(_) => V6_MAX_LENGTH,
        };
        let prefix_len = match len_part {
            None => width,
            Some(len) => parse_prefix_len(s, len, addr, width)?,
        };
        Network::new(addr, prefix_len)
    }
}

fn parse_prefix_len(input: &str, len: &str, addr: IpAddr, width: u8) -> Result<u8> {
    if !len.is_empty() && len.bytes().all(|b| b.is_ascii_digit()) {
        let prefix_len: u8 = len
            .parse()
            .map_err(|_| SupernetError::format(input, format!("invalid prefix length {len}")))?;
        if prefix_len > width {
            return Err(SupernetError::format(
                input,
                format!("prefix length /{prefix_len} is too long for {}", family_of(addr)),
            ));
        }
        return Ok(prefix_len);
    }
    match (addr, len.parse::<Ipv4Addr>()) {
        (IpAddr::V4(_), Ok(netmask)) => netmask_prefix_len(u32::from(netmask))
            .ok_or_else(|| SupernetError::format(input, format!("invalid netmask {len}"))),
        _ => Err(SupernetError::format(
            input,
            format!("invalid prefix length {len}"),
        )),
    }
}

fn family_of(addr: IpAddr) -> Family {
    match addr {
        IpAddr::V4(_) => Family::V4,
        IpAddr::V6(_) => Family::V6,
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.network_address(), self.prefix_len)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::from_str(&s).map_err(de::Error::custom)
    }
}
