//! Byte-swap engine.
//!
//! Pure functions reversing the byte order of 2, 4 and 8 byte integers, and
//! of floats through their same-width integer bit pattern. They are only
//! reached when a decoder's [`Endian`](crate::Endian) differs from the
//! target's native order.

mod private {
    pub trait Sealed {}
}

/// Integers whose byte order can be reversed.
///
/// Width 1 types are included and swap to themselves.
pub trait SwapInteger: private::Sealed + Copy {
    fn swap_integer(self) -> Self;
}

/// Floats swapped through their unsigned integer bit pattern.
pub trait SwapFloat: private::Sealed + Copy {
    /// The unsigned integer of the same width.
    type Bits: SwapInteger;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;
}

/// Anything the decoder may need to swap: integers and floats alike.
pub trait Swap: Copy {
    fn swap(self) -> Self;
}

macro_rules! impl_swap_integer {
    ($($t:ty),*) => {$(
        impl private::Sealed for $t {}

        impl SwapInteger for $t {
            #[inline]
            fn swap_integer(self) -> Self {
                self.swap_bytes()
            }
        }

        impl Swap for $t {
            #[inline]
            fn swap(self) -> Self {
                swap_integer(self)
            }
        }
    )*};
}

macro_rules! impl_swap_float {
    ($($f:ty => $bits:ty),*) => {$(
        impl private::Sealed for $f {}

        impl SwapFloat for $f {
            type Bits = $bits;

            #[inline]
            fn to_bits(self) -> $bits {
                <$f>::to_bits(self)
            }

            #[inline]
            fn from_bits(bits: $bits) -> Self {
                <$f>::from_bits(bits)
            }
        }

        impl Swap for $f {
            #[inline]
            fn swap(self) -> Self {
                swap_float(self)
            }
        }
    )*};
}

impl_swap_integer!(u8, i8, u16, i16, u32, i32, u64, i64);
impl_swap_float!(f32 => u32, f64 => u64);

/// Reverse the byte order of an integer. Identity for single-byte types.
#[inline]
pub fn swap_integer<T: SwapInteger>(value: T) -> T {
    value.swap_integer()
}

/// Reverse the byte order of a float, bit for bit (NaN payloads survive).
#[inline]
pub fn swap_float<F: SwapFloat>(value: F) -> F {
    F::from_bits(swap_integer(value.to_bits()))
}
