//! The cursor decoder.
//!
//! [`Decode::decode`] consumes exactly [`Layout::LEN`] bytes from a cursor and
//! produces one value. It does not check that enough bytes remain: callers go
//! through [`Decoder`](crate::Decoder), which checks the whole length once
//! before the first byte is read.
//!
//! Which implementations exist decides what may be decoded from which buffer:
//!
//! * primitives, owned arrays `[u8; N]` / `[i8; N]` and [`Pad<N>`] decode
//!   from any buffer;
//! * read-only views `&[u8; N]` / `&[i8; N]` decode from `&[u8]` and
//!   `&mut [u8]` buffers;
//! * read-write views `&mut [u8; N]` / `&mut [i8; N]` decode from `&mut [u8]`
//!   buffers only. Asking for one from a read-only buffer does not compile:
//!
//! ```compile_fail,E0277
//! use fixed_layout::Decoder;
//!
//! let bytes = [0u8; 4];
//! let _: &mut [u8; 4] = Decoder::network(&bytes[..]).decode().unwrap();
//! ```
//!
//! The same request against a mutable buffer is accepted:
//!
//! ```rust
//! use fixed_layout::Decoder;
//!
//! let mut bytes = [0u8; 4];
//! let view: &mut [u8; 4] = Decoder::network(&mut bytes[..]).decode().unwrap();
//! view[0] = 0xFF;
//! assert_eq!(bytes, [0xFF, 0, 0, 0]);
//! ```

use crate::cursor::{Bytes, Cursor};
use crate::endian::Endian;
use crate::shape::{Layout, Pad};

/// A type that can be decoded from a buffer of kind `B`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be decoded from a `{B}` buffer",
    label = "no decode rule for this type",
    note = "composite types need a rule declared with `fixed_layout::rule!`",
    note = "`&mut [u8; N]` views can only be decoded from a `&mut [u8]` buffer"
)]
pub trait Decode<B: Bytes>: Layout + Sized {
    /// Decode one value, advancing `cursor` by `Self::LEN` bytes.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `Self::LEN` bytes remain.
    fn decode(cursor: &mut Cursor<B>, endian: Endian) -> Self;
}

macro_rules! impl_decode_primitive {
    ($($t:ty),*) => {$(
        impl<B: Bytes> Decode<B> for $t {
            #[inline]
            fn decode(cursor: &mut Cursor<B>, endian: Endian) -> Self {
                endian.apply(<$t>::from_ne_bytes(cursor.take_array()))
            }
        }
    )*};
}

impl_decode_primitive!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl<B: Bytes, const N: usize> Decode<B> for [u8; N] {
    #[inline]
    fn decode(cursor: &mut Cursor<B>, _endian: Endian) -> Self {
        cursor.take_array()
    }
}

impl<'a, const N: usize> Decode<&'a [u8]> for &'a [u8; N] {
    #[inline]
    fn decode(cursor: &mut Cursor<&'a [u8]>, _endian: Endian) -> Self {
        cursor.take_view()
    }
}

impl<'a, const N: usize> Decode<&'a mut [u8]> for &'a [u8; N] {
    #[inline]
    fn decode(cursor: &mut Cursor<&'a mut [u8]>, _endian: Endian) -> Self {
        cursor.take_view_mut()
    }
}

impl<'a, const N: usize> Decode<&'a mut [u8]> for &'a mut [u8; N] {
    #[inline]
    fn decode(cursor: &mut Cursor<&'a mut [u8]>, _endian: Endian) -> Self {
        cursor.take_view_mut()
    }
}

impl<B: Bytes, const N: usize> Decode<B> for [i8; N] {
    #[inline]
    fn decode(cursor: &mut Cursor<B>, _endian: Endian) -> Self {
        cursor.take_array::<N>().map(|b| b as i8)
    }
}

impl<'a, const N: usize> Decode<&'a [u8]> for &'a [i8; N] {
    #[inline]
    fn decode(cursor: &mut Cursor<&'a [u8]>, _endian: Endian) -> Self {
        as_signed(cursor.take_view())
    }
}

impl<'a, const N: usize> Decode<&'a mut [u8]> for &'a [i8; N] {
    #[inline]
    fn decode(cursor: &mut Cursor<&'a mut [u8]>, _endian: Endian) -> Self {
        as_signed(cursor.take_view_mut())
    }
}

impl<'a, const N: usize> Decode<&'a mut [u8]> for &'a mut [i8; N] {
    #[inline]
    fn decode(cursor: &mut Cursor<&'a mut [u8]>, _endian: Endian) -> Self {
        as_signed_mut(cursor.take_view_mut())
    }
}

fn as_signed<const N: usize>(bytes: &[u8; N]) -> &[i8; N] {
    // SAFETY: u8 and i8 share size, alignment and the set of valid bit patterns
    unsafe { &*(bytes as *const [u8; N]).cast::<[i8; N]>() }
}

fn as_signed_mut<const N: usize>(bytes: &mut [u8; N]) -> &mut [i8; N] {
    // SAFETY: as in `as_signed`; the exclusive borrow moves into the result
    unsafe { &mut *(bytes as *mut [u8; N]).cast::<[i8; N]>() }
}

impl<B: Bytes, const N: usize> Decode<B> for Pad<N> {
    #[inline]
    fn decode(cursor: &mut Cursor<B>, _endian: Endian) -> Self {
        cursor.advance(N);
        Pad
    }
}

// Tuple elements are evaluated left to right, so components consume the
// buffer in the order they are listed.
macro_rules! impl_decode_tuple {
    ($($t:ident),+) => {
        impl<Buf: Bytes, $($t: Decode<Buf>),+> Decode<Buf> for ($($t,)+) {
            #[inline]
            fn decode(cursor: &mut Cursor<Buf>, endian: Endian) -> Self {
                ($($t::decode(cursor, endian),)+)
            }
        }
    };
}

impl_decode_tuple!(A);
impl_decode_tuple!(A, B);
impl_decode_tuple!(A, B, C);
impl_decode_tuple!(A, B, C, D);
impl_decode_tuple!(A, B, C, D, E);
impl_decode_tuple!(A, B, C, D, E, F);
impl_decode_tuple!(A, B, C, D, E, F, G);
impl_decode_tuple!(A, B, C, D, E, F, G, H);
impl_decode_tuple!(A, B, C, D, E, F, G, H, I);
impl_decode_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_decode_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_decode_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_decode_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_decode_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_decode_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_decode_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);
