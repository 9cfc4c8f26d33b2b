//! Network prefix (CIDR block) for IPv4 and IPv6.
//!
//! Provides [`Prefix`], an immutable address/length pair whose base address
//! is always the network's canonical base (host bits cleared).

use super::family::{broadcast_addr, cut_addr, host_mask, ip_bits, mask_to_len, Family};
use crate::error::CidrError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// A CIDR block such as `10.0.0.0/8` or `2001:db8::/32`.
///
/// Ordering is by family, then numeric base address, then prefix length,
/// which is the order merged output is emitted in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix {
    family: Family,
    addr: u128,
    len: u8,
}

impl Prefix {
    /// Build a prefix from raw address bits, clearing any host bits.
    pub fn new(family: Family, addr: u128, len: u8) -> Result<Prefix, CidrError> {
        if len > family.max_len() {
            return Err(CidrError::parse(
                &format!("{}/{}", family.to_ip(addr & family.all_ones()), len),
                format!("prefix length {len} out of range for {family}"),
            ));
        }
        Ok(Prefix {
            family,
            addr: cut_addr(family, addr, len),
            len,
        })
    }

    /// Build a prefix from an [`IpAddr`], e.g. a host route with `len` 32/128.
    pub fn from_ip(addr: IpAddr, len: u8) -> Result<Prefix, CidrError> {
        Prefix::new(Family::of(&addr), ip_bits(&addr), len)
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Base address bits.
    pub fn addr(&self) -> u128 {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.len
    }

    /// Lowest address in the block (same as [`Prefix::addr`]).
    pub fn lo(&self) -> u128 {
        self.addr
    }

    /// Highest address in the block.
    pub fn hi(&self) -> u128 {
        broadcast_addr(self.family, self.addr, self.len)
    }

    pub fn network(&self) -> IpAddr {
        self.family.to_ip(self.addr)
    }

    /// True when every address of `other` is inside `self`.
    pub fn contains(&self, other: &Prefix) -> bool {
        self.family == other.family
            && self.len <= other.len
            && cut_addr(self.family, other.addr, self.len) == self.addr
    }

    pub fn contains_ip(&self, ip: &IpAddr) -> bool {
        self.family == Family::of(ip) && cut_addr(self.family, ip_bits(ip), self.len) == self.addr
    }

    /// True when both blocks have the same length and differ only in their
    /// last network bit, so together they form [`Prefix::parent`].
    pub fn is_sibling_of(&self, other: &Prefix) -> bool {
        self.family == other.family
            && self.len == other.len
            && self.len > 0
            && self.addr ^ other.addr == host_mask(self.family, self.len) + 1
    }

    /// The enclosing block one bit shorter, `None` for `/0`.
    pub fn parent(&self) -> Option<Prefix> {
        if self.len == 0 {
            return None;
        }
        Some(Prefix {
            family: self.family,
            addr: cut_addr(self.family, self.addr, self.len - 1),
            len: self.len - 1,
        })
    }
}

/// Parse the part after `/`: a decimal length, or an IPv4 netmask/hostmask.
fn parse_len(input: &str, family: Family, len_part: &str) -> Result<u8, CidrError> {
    if len_part.is_empty() {
        return Err(CidrError::parse(input, "missing prefix length"));
    }
    if len_part.bytes().all(|b| b.is_ascii_digit()) {
        let len: u8 = len_part.parse().map_err(|_| {
            CidrError::parse(input, format!("prefix length {len_part} out of range for {family}"))
        })?;
        if len > family.max_len() {
            return Err(CidrError::parse(
                input,
                format!("prefix length {len} out of range for {family}"),
            ));
        }
        return Ok(len);
    }
    if family == Family::V4 {
        if let Ok(mask) = Ipv4Addr::from_str(len_part) {
            let mask = u32::from(mask) as u128;
            // Netmask first, then hostmask (inverted).
            if let Some(len) = mask_to_len(family, mask)
                .or_else(|| mask_to_len(family, !mask & family.all_ones()))
            {
                return Ok(len);
            }
            return Err(CidrError::parse(input, format!("invalid netmask {len_part}")));
        }
    }
    Err(CidrError::parse(input, format!("invalid prefix length '{len_part}'")))
}

impl FromStr for Prefix {
    type Err = CidrError;

    /// Parse `addr/len` or a bare address (host route). Host bits set in
    /// `addr` are cleared rather than rejected.
    fn from_str(input: &str) -> Result<Prefix, CidrError> {
        let (addr_part, len_part) = match input.split_once('/') {
            Some((addr, len)) => (addr, Some(len)),
            None => (input, None),
        };

        let addr: IpAddr = if addr_part.contains(':') {
            Ipv6Addr::from_str(addr_part)
                .map(IpAddr::V6)
                .map_err(|_| CidrError::parse(input, format!("invalid IPv6 address {addr_part}")))?
        } else {
            Ipv4Addr::from_str(addr_part)
                .map(IpAddr::V4)
                .map_err(|_| CidrError::parse(input, format!("invalid IPv4 address {addr_part}")))?
        };

        let family = Family::of(&addr);
        let len = match len_part {
            Some(len_part) => parse_len(input, family, len_part)?,
            None => family.max_len(),
        };
        Prefix::from_ip(addr, len)
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network(), self.len)
    }
}

impl Serialize for Prefix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D>(deserializer: D) -> Result<Prefix, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prefix::from_str(&s).map_err(de::Error::custom)
    }
}
