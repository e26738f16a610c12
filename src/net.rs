//! Ethernet, IPv4 and TCP headers with ready-made rules.
//!
//! Each header is a plain record whose fields appear in wire order. The rules
//! below are the field layouts; all fields are in network byte order on the
//! wire, so decode them with [`Decoder::network`](crate::Decoder::network).
//!
//! ```rust
//! use fixed_layout::Decoder;
//! use fixed_layout::net::{EthernetHeader, Ipv4Header, ETHERTYPE_IPV4};
//!
//! let frame = [
//!     0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x00, 0x1A, 0x2B, 0x3C, 0x4D, 0x5E, 0x08, 0x00,
//!     0x45, 0x00, 0x00, 0x14, 0x1A, 0x2B, 0x40, 0x00, 0x40, 0x11, 0x00, 0x00,
//!     0x0A, 0x00, 0x00, 0x01, 0x0A, 0x00, 0x00, 0x02,
//! ];
//! let mut decoder = Decoder::network(&frame[..]);
//! let eth: EthernetHeader = decoder.decode().unwrap();
//! assert_eq!(eth.ethertype, ETHERTYPE_IPV4);
//! let ip: Ipv4Header = decoder.decode().unwrap();
//! assert_eq!(ip.source_addr().to_string(), "10.0.0.1");
//! assert!(decoder.is_exhausted());
//! ```

use crate::rule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

pub const ETHERTYPE_IPV4: u16 = 0x0800;
pub const IPPROTO_TCP: u8 = 6;
pub const IPPROTO_UDP: u8 = 17;

pub const MAC_ADDRESS_LEN: usize = 6;

/// 48-bit hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MacAddress(pub [u8; MAC_ADDRESS_LEN]);

impl MacAddress {
    pub const fn new(a: u8, b: u8, c: u8, d: u8, e: u8, f: u8) -> Self {
        MacAddress([a, b, c, d, e, f])
    }

    pub fn octets(&self) -> [u8; MAC_ADDRESS_LEN] {
        self.0
    }
}

impl From<[u8; MAC_ADDRESS_LEN]> for MacAddress {
    fn from(octets: [u8; MAC_ADDRESS_LEN]) -> Self {
        MacAddress(octets)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            a, b, c, d, e, g
        )
    }
}

rule! { MacAddress = (u8, u8, u8, u8, u8, u8) => MacAddress::new }

/// Ethernet II header with the addresses as raw octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthernetHeader {
    pub destination: [u8; MAC_ADDRESS_LEN],
    pub source: [u8; MAC_ADDRESS_LEN],
    pub ethertype: u16,
}

rule! {
    EthernetHeader {
        destination: [u8; MAC_ADDRESS_LEN],
        source: [u8; MAC_ADDRESS_LEN],
        ethertype: u16,
    }
}

/// Ethernet II header composed from [`MacAddress`] rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthernetFrame {
    pub destination: MacAddress,
    pub source: MacAddress,
    pub ethertype: u16,
}

rule! {
    EthernetFrame {
        destination: MacAddress,
        source: MacAddress,
        ethertype: u16,
    }
}

/// Ethernet II header whose addresses point into the decoded buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetHeaderView<'a> {
    pub destination: &'a [u8; MAC_ADDRESS_LEN],
    pub source: &'a [u8; MAC_ADDRESS_LEN],
    pub ethertype: u16,
}

rule! {
    impl<'a> EthernetHeaderView<'a> {
        destination: &'a [u8; MAC_ADDRESS_LEN],
        source: &'a [u8; MAC_ADDRESS_LEN],
        ethertype: u16,
    }
}

/// Fixed 20-byte portion of an IPv4 header. Options, if any, follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ipv4Header {
    /// Version (high nibble) and header length in 32-bit words (low nibble)
    pub version_ihl: u8,
    pub dscp_ecn: u8,
    pub total_length: u16,
    pub identification: u16,
    /// Flags (3 bits) and fragment offset (13 bits)
    pub flags_fragment_offset: u16,
    pub ttl: u8,
    pub protocol: u8,
    pub checksum: u16,
    pub source: u32,
    pub destination: u32,
}

rule! {
    Ipv4Header {
        version_ihl: u8,
        dscp_ecn: u8,
        total_length: u16,
        identification: u16,
        flags_fragment_offset: u16,
        ttl: u8,
        protocol: u8,
        checksum: u16,
        source: u32,
        destination: u32,
    }
}

impl Ipv4Header {
    pub fn version(&self) -> u8 {
        self.version_ihl >> 4
    }

    /// Full header length in bytes, options included.
    pub fn header_len(&self) -> usize {
        usize::from(self.version_ihl & 0x0F) * 4
    }

    pub fn source_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.source)
    }

    pub fn destination_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.destination)
    }
}

/// Fixed 20-byte portion of a TCP header. Options, if any, follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TcpHeader {
    pub source_port: u16,
    pub destination_port: u16,
    pub sequence_number: u32,
    pub acknowledgment_number: u32,
    /// Data offset in 32-bit words (high nibble) and reserved bits
    pub data_offset: u8,
    pub flags: u8,
    pub window_size: u16,
    pub checksum: u16,
    pub urgent_pointer: u16,
}

rule! {
    TcpHeader {
        source_port: u16,
        destination_port: u16,
        sequence_number: u32,
        acknowledgment_number: u32,
        data_offset: u8,
        flags: u8,
        window_size: u16,
        checksum: u16,
        urgent_pointer: u16,
    }
}

impl TcpHeader {
    pub const FIN: u8 = 0x01;
    pub const SYN: u8 = 0x02;
    pub const RST: u8 = 0x04;
    pub const PSH: u8 = 0x08;
    pub const ACK: u8 = 0x10;
    pub const URG: u8 = 0x20;

    /// Full header length in bytes, options included.
    pub fn header_len(&self) -> usize {
        usize::from(self.data_offset >> 4) * 4
    }

    pub fn has_flags(&self, mask: u8) -> bool {
        self.flags & mask == mask
    }
}
