//! # fixed-layout
//!
//! Declarative, zero-copy decoding of fixed-layout binary records such as
//! network protocol headers.
//!
//! ## Overview
//!
//! A type becomes decodable by declaring its *rule*: the ordered list of
//! component types whose consecutive decoding rebuilds it. Components are
//! primitives, byte arrays (owned copies or views into the buffer), padding,
//! or other ruled types. From the rule the crate derives, at compile time,
//! the exact encoded length of the type, and a decoder that reads it with a
//! per-decoder byte order.
//!
//! ## Component mapping
//!
//! | Component type | Bytes | Decoded as |
//! |----------------|-------|------------|
//! | `u8`, `i8`     | 1     | the byte, never swapped |
//! | `u16`, `i16`   | 2     | swapped if the byte order is not native |
//! | `u32`, `i32`, `f32` | 4 | swapped if the byte order is not native |
//! | `u64`, `i64`, `f64` | 8 | swapped if the byte order is not native |
//! | `[u8; N]`      | N     | owned copy |
//! | `&'a [u8; N]`  | N     | view into the buffer |
//! | `&'a mut [u8; N]` | N  | writable view (mutable buffers only) |
//! | `[i8; N]` and its views | N | as the `u8` forms, elements signed |
//! | [`Pad<N>`]     | N     | skipped |
//! | ruled type / tuple | sum of components | built from its components |
//!
//! ## Example
//!
//! ```rust
//! use fixed_layout::{length_of, rule, Decoder, Error};
//!
//! #[derive(Debug, PartialEq)]
//! struct UdpHeader {
//!     source_port: u16,
//!     destination_port: u16,
//!     length: u16,
//!     checksum: u16,
//! }
//!
//! rule! {
//!     UdpHeader {
//!         source_port: u16,
//!         destination_port: u16,
//!         length: u16,
//!         checksum: u16,
//!     }
//! }
//!
//! assert_eq!(length_of::<UdpHeader>(), 8);
//!
//! let datagram = [0x30, 0x39, 0x00, 0x35, 0x00, 0x0C, 0x00, 0x00, b'p', b'i', b'n', b'g'];
//! let mut decoder = Decoder::network(&datagram[..]);
//! let header: UdpHeader = decoder.decode().unwrap();
//! assert_eq!(header.source_port, 12345);
//! assert_eq!(header.destination_port, 53);
//! assert_eq!(decoder.unread(), b"ping");
//!
//! // not enough bytes left: nothing is consumed
//! assert_eq!(
//!     decoder.decode::<UdpHeader>(),
//!     Err(Error::InsufficientData { required: 8, available: 4 })
//! );
//! assert_eq!(decoder.remaining_len(), 4);
//! ```
//!
//! Types that derive serde's `Serialize`/`Deserialize` can also be encoded
//! and decoded in the same packed layout through [`ser`] and [`de`].

pub mod cursor;
pub mod de;
pub mod decode;
pub mod decoder;
pub mod endian;
pub mod error;
pub mod net;
pub mod rule;
pub mod ser;
pub mod shape;
pub mod swap;

pub use cursor::{Bytes, Cursor};
pub use decode::Decode;
pub use decoder::Decoder;
pub use endian::Endian;
pub use error::{Error, Result};
pub use rule::{Apply, Rule};
pub use ser::{Serializer, to_bytes, to_writer};
pub use shape::{Component, Layout, Pad, Shape, length_of};
pub use swap::{Swap, swap_float, swap_integer};

/// Decode one `T` from the start of `input`, ignoring any trailing bytes.
pub fn decode<'a, T: Decode<&'a [u8]>>(input: &'a [u8], endian: Endian) -> Result<T> {
    Decoder::new(input, endian).decode()
}

/// Decode one `T` from the start of `input`, also returning the unread bytes.
pub fn decode_partial<'a, T: Decode<&'a [u8]>>(
    input: &'a [u8],
    endian: Endian,
) -> Result<(T, &'a [u8])> {
    let mut decoder = Decoder::new(input, endian);
    let value = decoder.decode()?;
    Ok((value, decoder.into_unread()))
}
