//! Forward-only read position over a caller-owned buffer.
//!
//! A [`Cursor`] holds the unread suffix of either a read-only (`&[u8]`) or a
//! read-write (`&mut [u8]`) buffer. Pieces handed out by the cursor keep the
//! buffer's full lifetime, so decoded views outlive the cursor itself.
//!
//! The cursor does not validate lengths on behalf of its callers: asking for
//! more bytes than remain panics with the required and available counts. The
//! [`Decoder`](crate::Decoder) facade performs the check up front and reports
//! an [`Error`](crate::Error) instead.

mod private {
    pub trait Sealed {}
}

/// Buffer kinds a [`Cursor`] can walk: `&[u8]` and `&mut [u8]`.
pub trait Bytes: private::Sealed + Default {
    fn as_slice(&self) -> &[u8];

    /// Split into `[0, mid)` and `[mid, len)`. Panics if `mid > len`.
    fn split_at(self, mid: usize) -> (Self, Self);
}

impl private::Sealed for &[u8] {}

impl<'a> Bytes for &'a [u8] {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline]
    fn split_at(self, mid: usize) -> (Self, Self) {
        <[u8]>::split_at(self, mid)
    }
}

impl private::Sealed for &mut [u8] {}

impl<'a> Bytes for &'a mut [u8] {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline]
    fn split_at(self, mid: usize) -> (Self, Self) {
        self.split_at_mut(mid)
    }
}

#[cold]
#[track_caller]
fn overrun(required: usize, available: usize) -> ! {
    panic!(
        "read past end of buffer: required bytes: {}, available bytes: {}",
        required, available
    )
}

/// The unread part of a buffer, plus how much has been consumed so far.
#[derive(Debug, Clone, Default)]
pub struct Cursor<B> {
    rest: B,
    consumed: usize,
}

impl<B: Bytes> Cursor<B> {
    pub fn new(buffer: B) -> Self {
        Cursor {
            rest: buffer,
            consumed: 0,
        }
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.rest.as_slice().len()
    }

    /// Number of bytes consumed since construction.
    #[inline]
    pub fn position(&self) -> usize {
        self.consumed
    }

    #[inline]
    pub fn unread(&self) -> &[u8] {
        self.rest.as_slice()
    }

    /// Give back the unread suffix with the buffer's own lifetime.
    pub fn into_unread(self) -> B {
        self.rest
    }

    /// Consume `n` bytes, returning them.
    #[inline]
    #[track_caller]
    pub fn take(&mut self, n: usize) -> B {
        let available = self.remaining();
        if n > available {
            overrun(n, available);
        }
        let (head, tail) = std::mem::take(&mut self.rest).split_at(n);
        self.rest = tail;
        self.consumed += n;
        head
    }

    /// Consume `n` bytes without looking at them.
    #[inline]
    #[track_caller]
    pub fn advance(&mut self, n: usize) {
        self.take(n);
    }

    /// Consume `N` bytes, copying them out.
    #[inline]
    #[track_caller]
    pub fn take_array<const N: usize>(&mut self) -> [u8; N] {
        let mut raw = [0u8; N];
        raw.copy_from_slice(self.take(N).as_slice());
        raw
    }
}

impl<'a> Cursor<&'a [u8]> {
    /// Consume `N` bytes as a view into the buffer.
    #[inline]
    #[track_caller]
    pub fn take_view<const N: usize>(&mut self) -> &'a [u8; N] {
        let rest: &'a [u8] = self.rest;
        let Some((head, tail)) = rest.split_first_chunk::<N>() else {
            overrun(N, rest.len())
        };
        self.rest = tail;
        self.consumed += N;
        head
    }
}

impl<'a> Cursor<&'a mut [u8]> {
    /// Consume `N` bytes as a mutable view into the buffer.
    #[inline]
    #[track_caller]
    pub fn take_view_mut<const N: usize>(&mut self) -> &'a mut [u8; N] {
        let available = self.remaining();
        let rest: &'a mut [u8] = std::mem::take(&mut self.rest);
        let Some((head, tail)) = rest.split_first_chunk_mut::<N>() else {
            overrun(N, available)
        };
        self.rest = tail;
        self.consumed += N;
        head
    }

    #[inline]
    pub fn unread_mut(&mut self) -> &mut [u8] {
        &mut *self.rest
    }
}
