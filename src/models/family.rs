//! Address family and the bit arithmetic shared by both families.
//!
//! Addresses of either family are carried as `u128`; IPv4 values only use
//! the low 32 bits.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Address family of a network prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Width of an address in bits (32 or 128).
    pub fn max_len(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    pub fn of(addr: &IpAddr) -> Family {
        match addr {
            IpAddr::V4(_) => Family::V4,
            IpAddr::V6(_) => Family::V6,
        }
    }

    /// All address bits set for this family.
    pub fn all_ones(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }

    pub fn to_ip(self, bits: u128) -> IpAddr {
        match self {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(bits as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

pub fn ip_bits(addr: &IpAddr) -> u128 {
    match addr {
        IpAddr::V4(a) => u32::from(*a) as u128,
        IpAddr::V6(a) => u128::from(*a),
    }
}

/// Host part mask for a prefix of `len` bits. Caller guarantees `len <= max_len`.
pub fn host_mask(family: Family, len: u8) -> u128 {
    let host_bits = u32::from(family.max_len() - len);
    if host_bits == 128 {
        u128::MAX
    } else {
        (1u128 << host_bits) - 1
    }
}

/// Network part mask for a prefix of `len` bits, e.g. `0xFFFFFF00` for IPv4 /24.
pub fn net_mask(family: Family, len: u8) -> u128 {
    family.all_ones() & !host_mask(family, len)
}

/// Clear host bits so `bits` becomes the base of its `/len` network.
pub fn cut_addr(family: Family, bits: u128, len: u8) -> u128 {
    bits & net_mask(family, len)
}

/// Last address of the `/len` network containing `bits`.
pub fn broadcast_addr(family: Family, bits: u128, len: u8) -> u128 {
    cut_addr(family, bits, len) | host_mask(family, len)
}

/// Prefix length for a contiguous mask, `None` when the ones are not leading.
pub fn mask_to_len(family: Family, mask: u128) -> Option<u8> {
    let ones = mask.count_ones() as u8;
    if ones > family.max_len() || net_mask(family, ones) != mask {
        return None;
    }
    Some(ones)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_mask_v4() {
        assert_eq!(net_mask(Family::V4, 0), 0x00000000);
        assert_eq!(net_mask(Family::V4, 8), 0xFF000000);
        assert_eq!(net_mask(Family::V4, 24), 0xFFFFFF00);
        assert_eq!(net_mask(Family::V4, 32), 0xFFFFFFFF);
    }

    #[test]
    fn test_net_mask_v6_edges() {
        assert_eq!(net_mask(Family::V6, 0), 0);
        assert_eq!(net_mask(Family::V6, 128), u128::MAX);
        assert_eq!(host_mask(Family::V6, 0), u128::MAX);
        assert_eq!(net_mask(Family::V6, 1), 1u128 << 127);
    }

    #[test]
    fn test_cut_addr() {
        let ip = u32::from(Ipv4Addr::new(192, 168, 1, 42)) as u128;
        let cut = |len| Family::V4.to_ip(cut_addr(Family::V4, ip, len));
        assert_eq!(cut(24), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 0)));
        assert_eq!(cut(16), IpAddr::V4(Ipv4Addr::new(192, 168, 0, 0)));
        assert_eq!(cut(8), IpAddr::V4(Ipv4Addr::new(192, 0, 0, 0)));
        assert_eq!(cut(32), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 42)));
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = u32::from(Ipv4Addr::new(192, 168, 1, 0)) as u128;
        let bc = |len| Family::V4.to_ip(broadcast_addr(Family::V4, ip, len));
        assert_eq!(bc(24), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 255)));
        assert_eq!(bc(8), IpAddr::V4(Ipv4Addr::new(192, 255, 255, 255)));
        assert_eq!(bc(32), IpAddr::V4(Ipv4Addr::new(192, 168, 1, 0)));
        assert_eq!(broadcast_addr(Family::V4, 0, 0), u32::MAX as u128);
    }

    #[test]
    fn test_mask_to_len() {
        assert_eq!(mask_to_len(Family::V4, 0xFFFF0000), Some(16));
        assert_eq!(mask_to_len(Family::V4, 0), Some(0));
        assert_eq!(mask_to_len(Family::V4, 0xFFFFFFFF), Some(32));
        assert_eq!(mask_to_len(Family::V4, 0xFF00FF00), None);
        assert_eq!(mask_to_len(Family::V4, 0x0000FFFF), None);
    }
}
