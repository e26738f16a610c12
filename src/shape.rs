//! Type classification and static length computation.
//!
//! Every decodable type implements [`Layout`], which answers two questions at
//! compile time: which decoding strategy applies ([`Shape`]) and how many bytes
//! the type occupies in the encoded stream (`LEN`).
//!
//! | Type                       | Shape       | `LEN`                       |
//! |----------------------------|-------------|-----------------------------|
//! | `u8`, `i8`                 | `Byte`      | 1                           |
//! | `u16` `i16` `u32` `i32` `u64` `i64` `f32` `f64` | `Swappable` | `size_of` |
//! | `[u8; N]`, `&[u8; N]`, `&mut [u8; N]`, [`Pad<N>`] | `Array` | `N`   |
//! | `[i8; N]`, `&[i8; N]`, `&mut [i8; N]` | `Array` | `N`               |
//! | tuples, types with a [`Rule`](crate::Rule) | `Composite` | sum of components |
//!
//! A type outside this table has no `Layout` and cannot be named in a rule or
//! passed to a decoder: the mistake surfaces as a compile error.

/// Decoding strategy of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Single byte value, never swapped.
    Byte,
    /// 2, 4 or 8 byte integer or float, swapped when the byte order differs from native.
    Swappable,
    /// Fixed-size run of bytes: owned copy, borrowed view or padding.
    Array,
    /// Ordered sequence of components.
    Composite,
}

/// Static shape of a decodable type.
pub trait Layout {
    const SHAPE: Shape;

    /// Exact number of bytes consumed when decoding one value.
    const LEN: usize;
}

/// Number of bytes a value of type `T` occupies in the encoded stream.
///
/// Usable in const context, e.g. to size a stack buffer or compute how much
/// of a variable-length header is left after its fixed portion.
pub const fn length_of<T: Layout + ?Sized>() -> usize {
    T::LEN
}

/// Placeholder component consuming `N` bytes without interpreting them.
///
/// Use it in a rule to step over reserved or unused fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pad<const N: usize>;

/// Runtime description of one component of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Field name for brace rules, empty for constructor rules.
    pub name: &'static str,
    /// Component type as written in the rule.
    pub ty: &'static str,
    pub shape: Shape,
    pub len: usize,
}

impl Component {
    pub const fn of<T: Layout + ?Sized>(name: &'static str, ty: &'static str) -> Self {
        Component {
            name,
            ty,
            shape: T::SHAPE,
            len: T::LEN,
        }
    }
}

macro_rules! impl_layout_primitive {
    ($shape:ident: $($t:ty),*) => {$(
        impl Layout for $t {
            const SHAPE: Shape = Shape::$shape;
            const LEN: usize = std::mem::size_of::<$t>();
        }
    )*};
}

impl_layout_primitive!(Byte: u8, i8);
impl_layout_primitive!(Swappable: u16, i16, u32, i32, u64, i64, f32, f64);

// Arrays, views and mutable views of single-byte elements.
macro_rules! impl_layout_array {
    ($($t:ty),*) => {$(
        impl<const N: usize> Layout for [$t; N] {
            const SHAPE: Shape = Shape::Array;
            const LEN: usize = N;
        }

        impl<const N: usize> Layout for &[$t; N] {
            const SHAPE: Shape = Shape::Array;
            const LEN: usize = N;
        }

        impl<const N: usize> Layout for &mut [$t; N] {
            const SHAPE: Shape = Shape::Array;
            const LEN: usize = N;
        }
    )*};
}

impl_layout_array!(u8, i8);

impl<const N: usize> Layout for Pad<N> {
    const SHAPE: Shape = Shape::Array;
    const LEN: usize = N;
}

macro_rules! impl_layout_tuple {
    ($($t:ident),+) => {
        impl<$($t: Layout),+> Layout for ($($t,)+) {
            const SHAPE: Shape = Shape::Composite;
            const LEN: usize = 0 $(+ $t::LEN)+;
        }
    };
}

impl_layout_tuple!(A);
impl_layout_tuple!(A, B);
impl_layout_tuple!(A, B, C);
impl_layout_tuple!(A, B, C, D);
impl_layout_tuple!(A, B, C, D, E);
impl_layout_tuple!(A, B, C, D, E, F);
impl_layout_tuple!(A, B, C, D, E, F, G);
impl_layout_tuple!(A, B, C, D, E, F, G, H);
impl_layout_tuple!(A, B, C, D, E, F, G, H, I);
impl_layout_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_layout_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_layout_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_layout_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_layout_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_layout_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_layout_tuple!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);
