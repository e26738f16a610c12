//! Stateful decoder: a cursor plus a fixed byte order.

use crate::cursor::{Bytes, Cursor};
use crate::decode::Decode;
use crate::endian::Endian;
use crate::error::{Error, Result};
use crate::shape::Layout;

/// Decodes values front to back from a caller-owned buffer.
///
/// The byte order is fixed at construction. The read position only moves
/// forward; reaching the end of the buffer is not an error, reading past it
/// is.
///
/// `B` is `&[u8]` for read-only buffers and `&mut [u8]` for buffers that
/// should also hand out mutable views.
#[derive(Debug, Clone)]
pub struct Decoder<B> {
    cursor: Cursor<B>,
    endian: Endian,
}

impl<B: Bytes> Decoder<B> {
    pub fn new(buffer: B, endian: Endian) -> Self {
        Decoder {
            cursor: Cursor::new(buffer),
            endian,
        }
    }

    /// Decoder for big-endian (network order) data, e.g. protocol headers.
    pub fn network(buffer: B) -> Self {
        Self::new(buffer, Endian::network())
    }

    /// Decoder for data already in the host's byte order. Nothing is swapped.
    pub fn native(buffer: B) -> Self {
        Self::new(buffer, Endian::native())
    }

    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Decode a `T`, failing without consuming anything if fewer than
    /// `T::LEN` bytes remain.
    pub fn decode<T: Decode<B>>(&mut self) -> Result<T> {
        self.ensure(T::LEN)?;
        Ok(self.decode_unchecked())
    }

    /// Decode a `T` without the up-front length check.
    ///
    /// Only for callers that already know `T::LEN` bytes remain, e.g. after
    /// checking a larger enclosing length.
    ///
    /// # Panics
    ///
    /// Panics if the buffer runs out, possibly after some components were
    /// already consumed.
    #[inline]
    pub fn decode_unchecked<T: Decode<B>>(&mut self) -> T {
        T::decode(&mut self.cursor, self.endian)
    }

    /// Step over `n` bytes without interpreting them.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.ensure(n)?;
        self.cursor.advance(n);
        Ok(())
    }

    /// Step over the encoded length of a `T`.
    pub fn skip_for<T: Layout>(&mut self) -> Result<()> {
        self.skip(T::LEN)
    }

    /// Encoded length of a `T`; see [`length_of`](crate::length_of).
    ///
    /// Handy for skipping what is left of a variable-length header once its
    /// fixed portion is decoded.
    pub const fn length_of<T: Layout>(&self) -> usize {
        T::LEN
    }

    /// The unread bytes, without consuming them.
    pub fn unread(&self) -> &[u8] {
        self.cursor.unread()
    }

    /// At most `limit` unread bytes, without consuming them.
    pub fn unread_up_to(&self, limit: usize) -> &[u8] {
        let unread = self.cursor.unread();
        &unread[..unread.len().min(limit)]
    }

    /// Finish decoding and hand back the unread bytes with the buffer's lifetime.
    pub fn into_unread(self) -> B {
        self.cursor.into_unread()
    }

    pub fn remaining_len(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor.remaining() == 0
    }

    /// Bytes consumed since construction.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    fn ensure(&self, required: usize) -> Result<()> {
        let available = self.cursor.remaining();
        if available < required {
            return Err(Error::insufficient(required, available));
        }
        Ok(())
    }
}

impl<'de> Decoder<&'de [u8]> {
    /// Decode a serde-derived type in the packed layout of [`crate::de`].
    ///
    /// The length of such types is only known once they are read, so the
    /// read runs on a snapshot: on error the decoder has not moved.
    pub fn deserialize<T: serde::Deserialize<'de>>(&mut self) -> Result<T> {
        let unread: &'de [u8] = self.cursor.clone().into_unread();
        let (value, rest) = crate::de::from_bytes_partial(unread, self.endian)?;
        self.cursor.advance(unread.len() - rest.len());
        Ok(value)
    }
}

impl<'a> Decoder<&'a mut [u8]> {
    /// The unread bytes, writable, without consuming them.
    pub fn unread_mut(&mut self) -> &mut [u8] {
        self.cursor.unread_mut()
    }
}
